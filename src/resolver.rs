//! Operand materialisation (§4.K): turns an abstract [`OperandKind`] into a
//! concrete [`Operand`], consuming bytes from the cursor where needed.

use crate::cursor::Cursor;
use crate::instruction::{FarPointer, MemoryRef, Operand, RelativeOffset};
use crate::modifier::{Modifier, SegmentOverride};
use crate::operand_kind::OperandKind;
use crate::registers::{self, regs, Register};
use crate::sib::{self, decode_sib};

/// Effective GPR promotion width for "native" operand kinds: REX.W (or a
/// default-64-bit opcode) wins outright; otherwise the 0x66 override flips
/// the mode's default width (16 in legacy mode, 32 otherwise) to the other
/// one of {16, 32}.
fn native_gpr_bits(modifier: &Modifier) -> u16 {
    if modifier.rex_w() || modifier.default_64_bit {
        64
    } else {
        match (modifier.mode, modifier.operand_size_override) {
            (crate::modifier::ExecMode::Legacy, false) => 16,
            (crate::modifier::ExecMode::Legacy, true) => 32,
            (_, false) => 32,
            (_, true) => 16,
        }
    }
}

/// Effective address width: 16 in legacy mode without an address-size
/// override, 32 in compat mode or under the override, 64 in long mode unless
/// overridden to 32. This is the "effective address bits" computation the
/// design notes call out as an explicit fix over the two inconsistent
/// variants in the original source.
fn effective_address_bits(modifier: &Modifier) -> u16 {
    use crate::modifier::ExecMode::*;
    match (modifier.mode, modifier.address_size_override) {
        (Legacy, false) => 16,
        (Legacy, true) => 32,
        (Long, false) => 64,
        (Long, true) => 32,
        (Compat, false) => 32,
        (Compat, true) => 16,
    }
}

fn segment_of_override(ov: SegmentOverride) -> Register {
    match ov {
        SegmentOverride::Cs => regs::CS,
        SegmentOverride::Ds => regs::DS,
        SegmentOverride::Es => regs::ES,
        SegmentOverride::Fs => regs::FS,
        SegmentOverride::Gs => regs::GS,
        SegmentOverride::Ss => regs::SS,
        SegmentOverride::None => Register::NONE,
    }
}

/// A GPR/vector register file, used to dispatch `decode_register_number`-style
/// lookups by requested bit width.
#[derive(Clone, Copy)]
enum RegFile {
    Gpr,
    Vector,
}

fn decode_register_number(bits: u16, modifier: &Modifier, index: u8, file: RegFile) -> Register {
    match file {
        RegFile::Gpr => registers::gpr(index, bits, modifier.rex.is_some()),
        RegFile::Vector => match bits {
            64 => registers::mmx(index),
            128 => registers::xmm(index),
            256 => registers::ymm(index),
            _ => Register::INVALID,
        },
    }
}

/// Register index from ModR/M.reg, extended by REX.R (or VEX's folded-in R).
fn reg_field_index(modifier: &Modifier) -> u8 {
    modifier.modrm_reg() | if modifier.rex_r() { 0b1000 } else { 0 }
}

/// Register index from ModR/M.rm, extended by REX.B.
fn rm_field_index(modifier: &Modifier) -> u8 {
    modifier.modrm_rm() | if modifier.rex_b() { 0b1000 } else { 0 }
}

/// Register index from the opcode's own low 3 bits (direct-register-index
/// opcodes), extended by REX.B.
fn direct_index(modifier: &Modifier) -> u8 {
    (modifier.opcode & 0b111) | if modifier.rex_b() { 0b1000 } else { 0 }
}

fn register_operand(bits: u16, modifier: &Modifier, file: RegFile) -> Register {
    let index =
        if modifier.direct_register_index { direct_index(modifier) } else { reg_field_index(modifier) };
    decode_register_number(bits, modifier, index, file)
}

fn register_from_rm(bits: u16, modifier: &Modifier, file: RegFile) -> Register {
    decode_register_number(bits, modifier, rm_field_index(modifier), file)
}

/// 16-bit legacy addressing has a fixed, SIB-free set of base/index pairs
/// keyed directly by ModR/M.rm.
fn legacy16_memory(cursor: &mut Cursor<'_>, modrm_mod: u8, modrm_rm: u8, bits: u16) -> MemoryRef {
    let bx = registers::gpr16(3);
    let bp = registers::gpr16(5);
    let si = registers::gpr16(6);
    let di = registers::gpr16(7);

    let mut mem = match modrm_rm {
        0 => MemoryRef { base: bx, index: si, ..MemoryRef::new(bits) },
        1 => MemoryRef { base: bx, index: di, ..MemoryRef::new(bits) },
        2 => MemoryRef { base: bp, index: si, ..MemoryRef::new(bits) },
        3 => MemoryRef { base: bp, index: di, ..MemoryRef::new(bits) },
        4 => MemoryRef { base: si, ..MemoryRef::new(bits) },
        5 => MemoryRef { base: di, ..MemoryRef::new(bits) },
        6 if modrm_mod == 0 => {
            let disp = sib::read_signed_imm16(cursor);
            return MemoryRef::with_displacement(bits, disp);
        }
        6 => MemoryRef { base: bp, ..MemoryRef::new(bits) },
        _ => MemoryRef { base: bx, ..MemoryRef::new(bits) },
    };

    mem.displacement = match modrm_mod {
        1 => sib::read_signed_imm8(cursor),
        2 => sib::read_signed_imm16(cursor),
        _ => 0,
    };
    mem
}

/// 32/64-bit addressing: SIB when ModR/M.rm == 4, RIP-relative when
/// mod == 0 and rm == 5 in non-legacy modes, otherwise a GPR base named
/// directly by ModR/M.rm (extended by REX.B).
fn wide_memory(cursor: &mut Cursor<'_>, modifier: &Modifier, bits: u16, address_bits: u16) -> MemoryRef {
    let modrm_mod = modifier.modrm_mod();
    let rm = modifier.modrm_rm();

    if rm == 4 {
        let sib = decode_sib(cursor, modifier, modrm_mod, address_bits);
        let mut disp = sib.displacement;
        if modrm_mod == 1 && !sib.displacement_read {
            disp = sib::read_signed_imm8(cursor);
        } else if modrm_mod == 2 && !sib.displacement_read {
            disp = sib::read_signed_imm32(cursor);
        }
        return MemoryRef { bits, base: sib.base, index: sib.index, scale: sib.scale, displacement: disp, displacement_is_64_bit: false };
    }

    if modrm_mod == 0 && rm == 5 {
        if modifier.mode == crate::modifier::ExecMode::Compat {
            let disp = sib::read_signed_imm32(cursor);
            return MemoryRef::with_displacement(bits, disp);
        }
        let disp = sib::read_signed_imm32(cursor);
        return MemoryRef { bits, base: regs::RIP, displacement: disp, ..MemoryRef::new(bits) };
    }

    let base = registers::gpr(rm | if modifier.rex_b() { 0b1000 } else { 0 }, address_bits, false);
    let displacement = match modrm_mod {
        1 => sib::read_signed_imm8(cursor),
        2 => sib::read_signed_imm32(cursor),
        _ => 0,
    };
    MemoryRef { bits, base, displacement, ..MemoryRef::new(bits) }
}

fn memory_operand(cursor: &mut Cursor<'_>, modifier: &Modifier, mut bits: u16) -> MemoryRef {
    // Promotion for the size-elastic memory kinds (Mem32-labelled slots that
    // actually widen/narrow with REX.W / 0x66, matching the resolver's
    // handling of the equivalent register kinds).
    if bits == 32 && modifier.rex_w() {
        bits = 64;
    } else if bits == 32 && modifier.operand_size_override {
        bits = 16;
    }

    let address_bits = effective_address_bits(modifier);
    let legacy16 = modifier.mode == crate::modifier::ExecMode::Legacy && address_bits == 16;

    let mut mem = if legacy16 {
        legacy16_memory(cursor, modifier.modrm_mod(), modifier.modrm_rm(), bits)
    } else {
        wide_memory(cursor, modifier, bits, address_bits)
    };

    mem.segment = segment_of_override(modifier.segment_override);
    mem
}

fn register_or_memory(
    cursor: &mut Cursor<'_>,
    modifier: &Modifier,
    reg_bits: u16,
    mem_bits: u16,
    file: RegFile,
) -> Operand {
    if modifier.direct_register_index {
        Operand::Register(decode_register_number(reg_bits, modifier, direct_index(modifier), file))
    } else if modifier.modrm_mod() != 0b11 {
        Operand::Memory(memory_operand(cursor, modifier, mem_bits))
    } else {
        Operand::Register(register_from_rm(reg_bits, modifier, file))
    }
}

fn signed_immediate(cursor: &mut Cursor<'_>, bits: u16) -> Operand {
    let value = match bits {
        8 => sib::read_signed_imm8(cursor),
        16 => sib::read_signed_imm16(cursor),
        32 => sib::read_signed_imm32(cursor),
        64 => sib::read_signed_imm64(cursor),
        _ => 0,
    };
    Operand::immediate(value, bits)
}

fn relative_offset(cursor: &mut Cursor<'_>, bits: u16) -> Operand {
    let value = match bits {
        8 => sib::read_signed_imm8(cursor),
        16 => sib::read_signed_imm16(cursor),
        _ => sib::read_signed_imm32(cursor),
    };
    Operand::RelativeOffset(RelativeOffset { value, bits })
}

fn string_memory(modifier: &Modifier, base: Register, default_seg: Register, force_byte: bool) -> Operand {
    let bits = if force_byte { 8 } else { native_gpr_bits(modifier) };
    let seg = match modifier.segment_override {
        SegmentOverride::None => default_seg,
        ov => segment_of_override(ov),
    };
    Operand::Memory(MemoryRef { bits, base, segment: seg, ..MemoryRef::new(bits) })
}

/// Materialise a single operand. `log_unsupported` is given the kind when an
/// entry names one of the handful of recognised-but-not-materialised forms
/// (see [`OperandKind::is_unsupported`]); the caller still gets back a
/// well-formed operand (the R15 placeholder), per §7.
pub fn resolve(cursor: &mut Cursor<'_>, kind: OperandKind, modifier: &Modifier) -> Operand {
    use OperandKind::*;

    if kind.is_unsupported() {
        log::warn!("unsupported operand kind {:?}; substituting r15 placeholder", kind);
        return Operand::Register(registers::gpr64(15));
    }

    match kind {
        None => Operand::Register(Register::NONE),

        Reg8 => Operand::Register(register_operand(8, modifier, RegFile::Gpr)),
        Reg16 => Operand::Register(register_operand(16, modifier, RegFile::Gpr)),
        Reg32 => Operand::Register(register_operand(32, modifier, RegFile::Gpr)),
        Reg64 => Operand::Register(register_operand(64, modifier, RegFile::Gpr)),
        RegNative => Operand::Register(register_operand(native_gpr_bits(modifier), modifier, RegFile::Gpr)),

        Reg8Rm => Operand::Register(register_from_rm(8, modifier, RegFile::Gpr)),
        Reg16Rm => Operand::Register(register_from_rm(16, modifier, RegFile::Gpr)),
        Reg32Rm => Operand::Register(register_from_rm(32, modifier, RegFile::Gpr)),
        Reg64Rm => Operand::Register(register_from_rm(64, modifier, RegFile::Gpr)),
        RegNativeRm => {
            Operand::Register(register_from_rm(native_gpr_bits(modifier), modifier, RegFile::Gpr))
        }

        RegMem8 => register_or_memory(cursor, modifier, 8, 8, RegFile::Gpr),
        RegMem16 => register_or_memory(cursor, modifier, 16, 16, RegFile::Gpr),
        RegMem32 => register_or_memory(cursor, modifier, 32, 32, RegFile::Gpr),
        RegMem64 => register_or_memory(cursor, modifier, 64, 64, RegFile::Gpr),
        RegMem32Mem16 => register_or_memory(cursor, modifier, 32, 16, RegFile::Gpr),
        RegMem32Mem8 => register_or_memory(cursor, modifier, 32, 8, RegFile::Gpr),
        RegMemNative => {
            let bits = native_gpr_bits(modifier);
            register_or_memory(cursor, modifier, bits, bits, RegFile::Gpr)
        }

        Mem8 => Operand::Memory(memory_operand(cursor, modifier, 8)),
        Mem16 => Operand::Memory(memory_operand(cursor, modifier, 16)),
        Mem32 => Operand::Memory(memory_operand(cursor, modifier, 32)),
        Mem64 => Operand::Memory(memory_operand(cursor, modifier, 64)),
        Mem80 => Operand::Memory(memory_operand(cursor, modifier, 80)),
        Mem128 => Operand::Memory(memory_operand(cursor, modifier, 128)),
        Mem256 => Operand::Memory(memory_operand(cursor, modifier, 256)),
        MemAny => Operand::Memory(memory_operand(cursor, modifier, 0)),

        RegMmx => Operand::Register(register_operand(64, modifier, RegFile::Vector)),
        RegXmm => Operand::Register(register_operand(128, modifier, RegFile::Vector)),
        RegYmm => Operand::Register(register_operand(256, modifier, RegFile::Vector)),
        RegMmxRm => Operand::Register(register_from_rm(64, modifier, RegFile::Vector)),
        RegXmmRm => Operand::Register(register_from_rm(128, modifier, RegFile::Vector)),
        RegYmmRm => Operand::Register(register_from_rm(256, modifier, RegFile::Vector)),

        RegMmxMem32 => register_or_memory(cursor, modifier, 64, 32, RegFile::Vector),
        RegMmxMem64 => register_or_memory(cursor, modifier, 64, 64, RegFile::Vector),
        RegXmmMem8 => register_or_memory(cursor, modifier, 128, 8, RegFile::Vector),
        RegXmmMem16 => register_or_memory(cursor, modifier, 128, 16, RegFile::Vector),
        RegXmmMem32 => register_or_memory(cursor, modifier, 128, 32, RegFile::Vector),
        RegXmmMem64 => register_or_memory(cursor, modifier, 128, 64, RegFile::Vector),
        RegXmmMem128 => register_or_memory(cursor, modifier, 128, 128, RegFile::Vector),
        RegYmmMem128 => register_or_memory(cursor, modifier, 256, 128, RegFile::Vector),
        RegYmmMem256 => register_or_memory(cursor, modifier, 256, 256, RegFile::Vector),

        RegSt => Operand::Register(registers::x87(rm_field_index(modifier) & 0b111)),
        RegSt0 => Operand::Register(regs::ST0),
        RegSt1 => Operand::Register(regs::ST1),

        SegmentReg => Operand::Register(registers::segment(reg_field_index(modifier) & 0b111)),
        ControlReg => Operand::Register(registers::control(reg_field_index(modifier))),
        DebugReg => Operand::Register(registers::debug(reg_field_index(modifier))),

        Imm8 => signed_immediate(cursor, 8),
        Imm16 => signed_immediate(cursor, 16),
        Imm32 | Imm64 => {
            if modifier.operand_size_override {
                signed_immediate(cursor, 16)
            } else if kind == Imm64 && modifier.rex_w() {
                signed_immediate(cursor, 64)
            } else if modifier.rex_w() {
                let v = sib::read_signed_imm32(cursor);
                Operand::immediate(v, 64)
            } else {
                signed_immediate(cursor, 32)
            }
        }
        SignExtImm8 => {
            let v = sib::read_signed_imm8(cursor);
            Operand::immediate(v, native_gpr_bits(modifier))
        }
        SignExtImm32 => {
            let v = sib::read_signed_imm32(cursor);
            Operand::immediate(v, 64)
        }

        Rel8 => relative_offset(cursor, 8),
        Rel16 => relative_offset(cursor, 16),
        Rel32 => relative_offset(cursor, 32),
        RelNative => {
            let bits = if modifier.operand_size_override { 16 } else { 32 };
            relative_offset(cursor, bits)
        }

        MemoryOfs8 | MemoryOfs16 | MemoryOfs32 | MemoryOfs64 => {
            let bits: u16 = match kind {
                MemoryOfs8 => 8,
                MemoryOfs16 => 16,
                MemoryOfs32 => 32,
                _ => 64,
            };
            let addr_bits = effective_address_bits(modifier);
            let offset = if addr_bits == 64 {
                sib::read_signed_imm64(cursor)
            } else {
                sib::read_signed_imm32(cursor)
            };
            let seg = match modifier.segment_override {
                SegmentOverride::None => regs::DS,
                ov => segment_of_override(ov),
            };
            Operand::Memory(MemoryRef {
                bits,
                segment: seg,
                displacement: offset,
                displacement_is_64_bit: addr_bits == 64,
                ..MemoryRef::new(bits)
            })
        }

        ImplicitAl => Operand::Register(regs::AL),
        ImplicitAx => Operand::Register(regs::AX),
        ImplicitNativeAx => {
            let bits = native_gpr_bits(modifier);
            Operand::Register(registers::gpr(0, bits, false))
        }
        ImplicitCl => Operand::Register(regs::CL),
        ImplicitCx => Operand::Register(regs::CX),
        ImplicitEcx => Operand::Register(regs::ECX),
        ImplicitEax => Operand::Register(regs::EAX),
        ImplicitRax => Operand::Register(regs::RAX),
        ImplicitDx => Operand::Register(regs::DX),
        ImplicitCs => Operand::Register(regs::CS),
        ImplicitDs => Operand::Register(regs::DS),
        ImplicitEs => Operand::Register(regs::ES),
        ImplicitFs => Operand::Register(regs::FS),
        ImplicitGs => Operand::Register(regs::GS),
        ImplicitSs => Operand::Register(regs::SS),
        ImplicitXmm0 => Operand::Register(regs::XMM0),
        ImplicitSt0 => Operand::Register(regs::ST0),
        ImplicitSt1 => Operand::Register(regs::ST1),

        ImplicitMemDsSi => {
            let base = registers::gpr(6, effective_address_bits(modifier), false);
            string_memory(modifier, base, regs::DS, false)
        }
        ImplicitMemDsSiByte => {
            let base = registers::gpr(6, effective_address_bits(modifier), false);
            string_memory(modifier, base, regs::DS, true)
        }
        ImplicitMemEsDi => {
            let bits = native_gpr_bits(modifier);
            let base = registers::gpr(7, effective_address_bits(modifier), false);
            // ES cannot be overridden on the destination side.
            Operand::Memory(MemoryRef { bits, base, segment: regs::ES, ..MemoryRef::new(bits) })
        }
        ImplicitMemEsDiByte => {
            let base = registers::gpr(7, effective_address_bits(modifier), false);
            Operand::Memory(MemoryRef { bits: 8, base, segment: regs::ES, ..MemoryRef::new(8) })
        }

        RegVvvvXmm => {
            let idx = modifier.vex.map(|v| v.vvvv).unwrap_or(0);
            Operand::Register(registers::xmm(idx))
        }
        RegVvvvYmm => {
            let idx = modifier.vex.map(|v| v.vvvv).unwrap_or(0);
            Operand::Register(registers::ymm(idx))
        }
        RegVvvvNative => {
            let idx = modifier.vex.map(|v| v.vvvv).unwrap_or(0);
            Operand::Register(registers::gpr(idx, native_gpr_bits(modifier), false))
        }

        VsibXmm32 | VsibXmm64 | VsibYmm32 | VsibYmm64 => unreachable!("handled by is_unsupported"),

        RegXmmTrailingImm8HighNib => {
            let byte = cursor.pop();
            Operand::Register(registers::xmm(byte >> 4))
        }
        RegYmmTrailingImm8HighNib => {
            let byte = cursor.pop();
            Operand::Register(registers::ymm(byte >> 4))
        }

        Ptr16_64 => {
            let offset = sib::read_signed_imm64(cursor) as u64;
            let lo = cursor.pop() as u16;
            let hi = cursor.pop() as u16;
            let selector = lo | (hi << 8);
            Operand::FarPointer(FarPointer::Immediate { selector, offset, offset_bits: 64 })
        }
        MemPtr16_16 => {
            let mem = memory_operand(cursor, modifier, 32);
            Operand::FarPointer(FarPointer::Indirect(mem))
        }
        MemPtr16_32 => {
            let mem = memory_operand(cursor, modifier, 48);
            Operand::FarPointer(FarPointer::Indirect(mem))
        }
        MemPtr16_64 => {
            let mem = memory_operand(cursor, modifier, 80);
            Operand::FarPointer(FarPointer::Indirect(mem))
        }

        Ptr16_16 | Ptr16_32 => unreachable!("handled by is_unsupported"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modifier::{scan_prefixes, ExecMode};

    fn decode_operand(bytes: &[u8], kind: OperandKind, mode: ExecMode) -> (Operand, usize) {
        let mut cursor = Cursor::new(bytes);
        let mut modifier = scan_prefixes(&mut cursor, mode);
        modifier.opcode = cursor.pop();
        if !matches!(kind, OperandKind::Imm8 | OperandKind::Imm32) {
            modifier.modrm = Some(cursor.peek(0));
        }
        let op = resolve(&mut cursor, kind, &modifier);
        (op, cursor.position())
    }

    #[test]
    fn reg_mem_32_direct_register_form() {
        // mod=3, reg=0, rm=0 -> EAX
        let bytes = [0xC0u8];
        let (op, pos) = decode_operand(&bytes, OperandKind::RegMem32, ExecMode::Long);
        assert_eq!(op, Operand::Register(regs::EAX));
        assert_eq!(pos, 1);
    }

    #[test]
    fn reg_mem_32_memory_form_with_rip_relative() {
        // mod=0, rm=5 -> RIP-relative, disp32 follows.
        let bytes = [0x05u8, 0x10, 0x00, 0x00, 0x00];
        let (op, pos) = decode_operand(&bytes, OperandKind::RegMem64, ExecMode::Long);
        match op {
            Operand::Memory(mem) => {
                assert_eq!(mem.base, regs::RIP);
                assert_eq!(mem.displacement, 0x10);
            }
            _ => panic!("expected memory operand"),
        }
        assert_eq!(pos, 5);
    }

    #[test]
    fn imm32_promotes_to_64_under_rex_w() {
        let mut cursor = Cursor::new(&[0xFF, 0xFF, 0xFF, 0xFF]);
        let mut modifier = scan_prefixes(&mut cursor, ExecMode::Long);
        modifier.rex = Some(crate::modifier::RexBits { w: true, r: false, x: false, b: false });
        let op = resolve(&mut cursor, OperandKind::Imm32, &modifier);
        assert_eq!(op, Operand::immediate(-1, 64));
    }

    #[test]
    fn unsupported_kind_yields_r15_placeholder() {
        let mut cursor = Cursor::new(&[]);
        let modifier = scan_prefixes(&mut cursor, ExecMode::Long);
        let op = resolve(&mut cursor, OperandKind::Ptr16_16, &modifier);
        assert_eq!(op, Operand::Register(registers::gpr64(15)));
    }
}
