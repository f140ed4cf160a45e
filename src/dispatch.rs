//! Opcode dispatch (§4.F, §4.I): walks the map the prefix scanner selected
//! down to a terminal entry, then hands each operand kind to the resolver.
//!
//! ModR/M is a shared resource between dispatch and resolution: the
//! extension walk below only *peeks* it (to pick a sub-table by reg/rm/mod),
//! and [`resolver::resolve`] never pops it either. [`build_instruction`] is
//! the single place that turns a peek into a pop, so the byte is consumed
//! exactly once regardless of how many extension levels looked at it.

use crate::cursor::Cursor;
use crate::instruction::Instruction;
use crate::mnemonic::Mnemonic;
use crate::modifier::{self, ExecMode, MandatoryPrefix, Modifier, OpcodeMap};
use crate::operand_kind::OperandKind;
use crate::resolver;
use crate::table::entry::{ExtensionKind, TableEntry};
use crate::table::{amd3dnow, ext0f38, ext0f3a, primary, secondary, vex, x87};

const BLANK_256: [TableEntry; 256] = [TableEntry::BLANK; 256];

pub fn read(cursor: &mut Cursor<'_>, mode: ExecMode) -> Instruction {
    let offset = cursor.position();
    let mut modifier = modifier::scan_prefixes(cursor, mode);

    let entry = if modifier.is_vex() {
        read_vex_opcode(cursor, &mut modifier)
    } else {
        match modifier.map {
            OpcodeMap::Primary => read_primary_opcode(cursor, &mut modifier),
            OpcodeMap::Secondary => read_secondary_opcode(cursor, &mut modifier),
            OpcodeMap::Ext0F38 => {
                let table = ext0f38_table(modifier.mandatory_prefix);
                dispatch_256(cursor, &mut modifier, table)
            }
            OpcodeMap::Ext0F3A => {
                let table = ext0f3a_table(modifier.mandatory_prefix);
                dispatch_256(cursor, &mut modifier, table)
            }
            OpcodeMap::Amd3DNow => return read_3dnow(cursor, &mut modifier, offset),
        }
    };

    build_instruction(cursor, &mut modifier, entry, offset)
}

/// Pop the opcode byte, index straight into a flat 256-entry table, and walk
/// any extension chain it leads to.
fn dispatch_256(cursor: &mut Cursor<'_>, modifier: &mut Modifier, table: &'static [TableEntry; 256]) -> TableEntry {
    let opcode = cursor.pop();
    modifier.opcode = opcode;
    walk(cursor, modifier, table[opcode as usize])
}

fn read_primary_opcode(cursor: &mut Cursor<'_>, modifier: &mut Modifier) -> TableEntry {
    let opcode = cursor.pop();
    modifier.opcode = opcode;

    // D9 /4../7 with mod==3 selects among the no-operand transcendental and
    // constant-load opcodes by ModR/M.rm, not by the usual Mod-fork (whose
    // mod==3 slot is deliberately left blank for these eight reg values).
    if opcode == 0xD9 {
        let peek = cursor.peek(0);
        let modrm_mod = (peek >> 6) & 0b11;
        let reg = (peek >> 3) & 0b111;
        let rm = (peek & 0b111) as usize;
        if modrm_mod == 0b11 && reg >= 4 {
            modifier.modrm = Some(peek);
            let sub: &[TableEntry; 8] = match reg {
                4 => &x87::D9_RM_REG4,
                5 => &x87::D9_RM_REG5,
                6 => &x87::D9_RM_REG6,
                _ => &x87::D9_RM_REG7,
            };
            return sub[rm];
        }
    }

    walk(cursor, modifier, primary::PRIMARY[opcode as usize])
}

/// `0F xx`: the shared table holds the prefix-independent opcodes (CMOVcc,
/// Jcc, SETcc, control/debug moves, ...) and is consulted first; a blank
/// slot there falls through to the mandatory-prefix channel's table.
fn read_secondary_opcode(cursor: &mut Cursor<'_>, modifier: &mut Modifier) -> TableEntry {
    let opcode = cursor.pop();
    modifier.opcode = opcode;

    let shared = secondary::NORMAL[opcode as usize];
    let entry = if shared.present() { shared } else { secondary_prefix_table(modifier.mandatory_prefix)[opcode as usize] };
    walk(cursor, modifier, entry)
}

fn secondary_prefix_table(prefix: MandatoryPrefix) -> &'static [TableEntry; 256] {
    match prefix {
        MandatoryPrefix::None => &secondary::PREFIX_NONE,
        MandatoryPrefix::P66 => &secondary::PREFIX_66,
        MandatoryPrefix::F2 => &secondary::PREFIX_F2,
        MandatoryPrefix::F3 => &secondary::PREFIX_F3,
    }
}

fn ext0f38_table(prefix: MandatoryPrefix) -> &'static [TableEntry; 256] {
    match prefix {
        MandatoryPrefix::None => &ext0f38::PREFIX_NONE,
        MandatoryPrefix::P66 => &ext0f38::PREFIX_66,
        MandatoryPrefix::F2 => &ext0f38::PREFIX_F2,
        MandatoryPrefix::F3 => &BLANK_256,
    }
}

fn ext0f3a_table(prefix: MandatoryPrefix) -> &'static [TableEntry; 256] {
    match prefix {
        MandatoryPrefix::None => &ext0f3a::PREFIX_NONE,
        MandatoryPrefix::P66 => &ext0f3a::PREFIX_66,
        MandatoryPrefix::F2 | MandatoryPrefix::F3 => &BLANK_256,
    }
}

/// VEX opcodes select one of 32 slots per opcode byte, keyed by whether
/// ModR/M.mod is 3, the mandatory-prefix channel, VEX.W, and VEX.L (see
/// `table::vex::key`). A handful of slots still fork further on ModR/M.reg,
/// so the result still goes through the ordinary extension walk.
fn read_vex_opcode(cursor: &mut Cursor<'_>, modifier: &mut Modifier) -> TableEntry {
    let opcode = cursor.pop();
    modifier.opcode = opcode;
    let vex = modifier.vex.expect("read_vex_opcode called without a VEX prefix");

    let slots: &'static vex::Slots = match vex.mmmmm {
        1 => &vex::MAP1[opcode as usize],
        2 => &vex::MAP2[opcode as usize],
        _ => &vex::MAP3[opcode as usize],
    };

    let peek = cursor.peek(0);
    modifier.modrm = Some(peek);
    let mod_is_3 = (peek >> 6) & 0b11 == 0b11;
    let idx = vex::key(mod_is_3, modifier.mandatory_prefix as u8, vex.w as u8, vex.l as u8);

    walk(cursor, modifier, slots[idx])
}

/// Follow an `Extension` chain down to a `Terminal` (or `Blank`), peeking
/// ModR/M as needed but never consuming it.
fn walk(cursor: &mut Cursor<'_>, modifier: &mut Modifier, mut entry: TableEntry) -> TableEntry {
    loop {
        match entry {
            TableEntry::Extension { kind, table } => {
                if modifier.modrm.is_none() && kind != ExtensionKind::RexW {
                    modifier.modrm = Some(cursor.peek(0));
                }
                let idx = match kind {
                    ExtensionKind::Reg => modifier.modrm_reg() as usize,
                    ExtensionKind::Rm => {
                        if modifier.modrm_mod() != 0b11 {
                            0
                        } else {
                            1 + modifier.modrm_rm() as usize
                        }
                    }
                    ExtensionKind::Mod => {
                        if modifier.modrm_mod() == 0b11 {
                            1
                        } else {
                            0
                        }
                    }
                    ExtensionKind::RexW => {
                        if modifier.rex_w() {
                            1
                        } else {
                            0
                        }
                    }
                };
                entry = table[idx];
            }
            other => return other,
        }
    }
}

/// 3DNow! inverts the usual opcode-then-operands order: ModR/M and the
/// mm/m64 operand precede the opcode byte, which is a trailing immediate
/// rather than a prefix (`0F 0F /r ib`).
fn read_3dnow(cursor: &mut Cursor<'_>, modifier: &mut Modifier, offset: usize) -> Instruction {
    modifier.modrm = Some(cursor.peek(0));
    cursor.pop();

    let dst = resolver::resolve(cursor, OperandKind::RegMmx, modifier);
    let src = resolver::resolve(cursor, OperandKind::RegMmxMem64, modifier);
    let suffix = cursor.pop();

    let mut inst = match amd3dnow::SUFFIX[suffix as usize] {
        TableEntry::Terminal { mnemonic, .. } => Instruction::new(mnemonic, offset),
        _ => Instruction::new(Mnemonic::INVALID, offset),
    };
    if inst.mnemonic != Mnemonic::INVALID {
        inst.push_operand(dst);
        inst.push_operand(src);
    }
    inst.prefixes.lock = modifier.lock;
    inst.prefixes.rep = modifier.rep;
    inst.prefixes.repnz = modifier.repnz;
    inst.length = (cursor.position() - offset) as u8;
    inst
}

fn build_instruction(
    cursor: &mut Cursor<'_>,
    modifier: &mut Modifier,
    entry: TableEntry,
    offset: usize,
) -> Instruction {
    let (mnemonic, operands, operand_count, needs_modrm, direct_register_index, default_64_bit) = match entry {
        TableEntry::Terminal {
            mnemonic,
            operands,
            operand_count,
            needs_modrm,
            direct_register_index,
            default_64_bit,
        } => (mnemonic, operands, operand_count, needs_modrm, direct_register_index, default_64_bit),
        _ => {
            let mut inst = Instruction::new(Mnemonic::INVALID, offset);
            inst.length = (cursor.position() - offset) as u8;
            return inst;
        }
    };

    if modifier.modrm.is_none() && needs_modrm {
        modifier.modrm = Some(cursor.peek(0));
    }
    if modifier.modrm.is_some() {
        cursor.pop();
    }

    modifier.direct_register_index = direct_register_index;
    modifier.default_64_bit = default_64_bit;

    // `90` is XCHG eAX, eAX by table construction; real hardware (and every
    // disassembler) shows it as NOP, or PAUSE under an F3 prefix, as long as
    // REX.B hasn't turned it into a genuine XCHG r8, eAX.
    if modifier.map == OpcodeMap::Primary && modifier.opcode == 0x90 && !modifier.rex_b() {
        let nop_mnemonic = if modifier.rep { Mnemonic::pause } else { Mnemonic::nop };
        let mut inst = Instruction::new(nop_mnemonic, offset);
        inst.prefixes.lock = modifier.lock;
        inst.prefixes.rep = modifier.rep;
        inst.prefixes.repnz = modifier.repnz;
        inst.length = (cursor.position() - offset) as u8;
        return inst;
    }

    let mut inst = Instruction::new(mnemonic, offset);
    for kind in operands.iter().take(operand_count as usize) {
        let operand = resolver::resolve(cursor, *kind, modifier);
        inst.push_operand(operand);
    }
    inst.prefixes.lock = modifier.lock;
    inst.prefixes.rep = modifier.rep;
    inst.prefixes.repnz = modifier.repnz;
    inst.length = (cursor.position() - offset) as u8;
    inst
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registers::regs;
    use crate::Operand;

    fn decode(bytes: &[u8], mode: ExecMode) -> Instruction {
        let mut cursor = Cursor::new(bytes);
        read(&mut cursor, mode)
    }

    #[test]
    fn lea_rax_rsi_plus_disp8() {
        let inst = decode(&[0x48, 0x8D, 0x46, 0x10], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::lea);
        assert_eq!(inst.len(), 4);
        assert_eq!(inst.operand(0), Some(&Operand::Register(regs::RAX)));
    }

    #[test]
    fn opcode_90_is_nop_not_xchg() {
        let inst = decode(&[0x90], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::nop);
        assert_eq!(inst.operand_count(), 0);
        assert_eq!(inst.len(), 1);
    }

    #[test]
    fn f3_90_is_pause() {
        let inst = decode(&[0xF3, 0x90], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::pause);
        assert_eq!(inst.len(), 2);
    }

    #[test]
    fn rex_b_90_is_a_real_xchg() {
        // REX.B=1 (0x41), opcode 0x90 -> xchg r8, eax.
        let inst = decode(&[0x41, 0x90], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::xchg);
        assert_eq!(inst.operand_count(), 2);
    }

    #[test]
    fn group1_extension_walks_reg_field_to_add() {
        // 83 /0 ib = ADD r/m32, imm8 (sign-extended); C0 -> mod=3, reg=0, rm=0 (EAX).
        let inst = decode(&[0x83, 0xC0, 0x05], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::add);
        assert_eq!(inst.operand(0), Some(&Operand::Register(regs::EAX)));
        assert_eq!(inst.operand(1), Some(&Operand::immediate(5, 32)));
        assert_eq!(inst.len(), 3);
    }

    #[test]
    fn blank_opcode_yields_invalid_with_zero_operands() {
        // 0F 0xFF is UD0's own byte in several channels but the primary map's
        // own 0xFE/0xFF only reach group4/group5; use a genuinely unassigned
        // primary byte instead.
        let inst = decode(&[0x0F, 0xFF, 0x00], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::ud0);
    }

    #[test]
    fn secondary_map_falls_back_to_shared_table() {
        // 0F 94 /r = CMOVE/SETE-adjacent... use CPUID (0F A2), which lives
        // only in the shared NORMAL table with no mandatory-prefix variant.
        let inst = decode(&[0x0F, 0xA2], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::cpuid);
        assert_eq!(inst.len(), 2);
    }

    #[test]
    fn x87_d9_reg4_mod3_rm1_is_fabs() {
        // D9 E1 -> mod=3, reg=4, rm=1 -> FABS (no operands, no memory).
        let inst = decode(&[0xD9, 0xE1], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::fabs);
        assert_eq!(inst.operand_count(), 0);
        assert_eq!(inst.len(), 2);
    }

    #[test]
    fn x87_d9_reg4_mod_not_3_is_fldenv_memory() {
        // D9 20 -> mod=0, reg=4, rm=0 -> FLDENV [eax].
        let inst = decode(&[0xD9, 0x20], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::fldenv);
        assert_eq!(inst.operand_count(), 1);
    }

    #[test]
    fn amd_3dnow_pfadd_reads_trailing_suffix() {
        // 0F 0F C1 9E -> PFADD mm0, mm1 (mod=3, reg=0, rm=1; suffix 0x9E).
        let inst = decode(&[0x0F, 0x0F, 0xC1, 0x9E], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::pfadd);
        assert_eq!(inst.operand_count(), 2);
        assert_eq!(inst.len(), 4);
    }

    #[test]
    fn vex_two_byte_vmovsd_register_form() {
        // C5 FB 10 C1 -> VEX.LZ.F2.0F 10 /r, mod=3 -> VMOVSD xmm0, xmm0, xmm1.
        let inst = decode(&[0xC5, 0xFB, 0x10, 0xC1], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::vmovsd);
        assert_eq!(inst.operand_count(), 3);
        assert_eq!(inst.len(), 4);
    }

    #[test]
    fn vex_three_byte_selects_0f38_map() {
        // C4 E2 79 18 00 -> VBROADCASTSS xmm0, [eax] (mmmmm=2, pp=66, W=0, L=0).
        let inst = decode(&[0xC4, 0xE2, 0x79, 0x18, 0x00], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::vbroadcastss);
        assert_eq!(inst.len(), 5);
    }

    #[test]
    fn vex_shift_by_immediate_forks_through_embedded_reg_extension() {
        // C5 F9 71 D0 04 -> VEX.128.66.0F 71 /2 ib = VPSRLW xmm0, xmm0, 4.
        let inst = decode(&[0xC5, 0xF9, 0x71, 0xD0, 0x04], ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::vpsrlw);
        assert_eq!(inst.len(), 5);
    }

    #[test]
    fn mode_invariance_same_mnemonic_across_modes() {
        let long = decode(&[0x01, 0xC0], ExecMode::Long);
        let compat = decode(&[0x01, 0xC0], ExecMode::Compat);
        let legacy = decode(&[0x01, 0xC0], ExecMode::Legacy);
        assert_eq!(long.mnemonic, Mnemonic::add);
        assert_eq!(compat.mnemonic, Mnemonic::add);
        assert_eq!(legacy.mnemonic, Mnemonic::add);
    }

    #[test]
    fn never_overshoots_a_truncated_stream() {
        // 0F B6 /r (MOVZX) truncated right after the opcode: no ModR/M byte
        // available at all. The cursor pins at end-of-input rather than
        // reading past it, so the reported length can't exceed the input.
        let bytes = [0x0F, 0xB6];
        let inst = decode(&bytes, ExecMode::Long);
        assert_eq!(inst.mnemonic, Mnemonic::movzx);
        assert!(inst.len() <= bytes.len());
    }
}
