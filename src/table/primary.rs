//! The one-byte primary opcode map (§4.F) and its ModR/M.reg extension
//! groups (the legacy "group 1/1A/2/3/4/5/11" families plus the x87 escape
//! opcodes 0xD8-0xDF, which live in [`super::x87`]).

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::{ExtensionKind, TableEntry as E};
use crate::table::x87;

/// Group 1 (add/or/adc/sbb/and/sub/xor/cmp) with an 8-bit r/m and imm8.
pub static EXT_80: [E; 8] = [
    E::op2(M::add, K::RegMem8, K::Imm8),
    E::op2(M::or, K::RegMem8, K::Imm8),
    E::op2(M::adc, K::RegMem8, K::Imm8),
    E::op2(M::sbb, K::RegMem8, K::Imm8),
    E::op2(M::and, K::RegMem8, K::Imm8),
    E::op2(M::sub, K::RegMem8, K::Imm8),
    E::op2(M::xor, K::RegMem8, K::Imm8),
    E::op2(M::cmp, K::RegMem8, K::Imm8),
];

/// Group 1, native-width r/m and a matching native-width (elastic) immediate.
pub static EXT_81: [E; 8] = [
    E::op2(M::add, K::RegMemNative, K::Imm32),
    E::op2(M::or, K::RegMemNative, K::Imm32),
    E::op2(M::adc, K::RegMemNative, K::Imm32),
    E::op2(M::sbb, K::RegMemNative, K::Imm32),
    E::op2(M::and, K::RegMemNative, K::Imm32),
    E::op2(M::sub, K::RegMemNative, K::Imm32),
    E::op2(M::xor, K::RegMemNative, K::Imm32),
    E::op2(M::cmp, K::RegMemNative, K::Imm32),
];

/// Group 1, the redundant 8-bit-immediate encoding (0x82); invalid in long
/// mode but kept for legacy/compat decoding.
pub static EXT_82: [E; 8] = EXT_80;

/// Group 1, sign-extended imm8 against a native-width r/m.
pub static EXT_83: [E; 8] = [
    E::op2(M::add, K::RegMemNative, K::SignExtImm8),
    E::op2(M::or, K::RegMemNative, K::SignExtImm8),
    E::op2(M::adc, K::RegMemNative, K::SignExtImm8),
    E::op2(M::sbb, K::RegMemNative, K::SignExtImm8),
    E::op2(M::and, K::RegMemNative, K::SignExtImm8),
    E::op2(M::sub, K::RegMemNative, K::SignExtImm8),
    E::op2(M::xor, K::RegMemNative, K::SignExtImm8),
    E::op2(M::cmp, K::RegMemNative, K::SignExtImm8),
];

/// 0x8F: POP r/m (reg=0) only. Slot 8F/1..7 carries the XOP escape on AMD
/// parts; this decoder never recognises XOP (see DESIGN.md), so every other
/// reg value is blank, matching a plain "not POP" outcome rather than a
/// fabricated XOP table.
pub static EXT_8F: [E; 8] = [
    E::op1(M::pop, K::RegMemNative).default_64_bit(),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

/// Group 2 (rotate/shift), 8-bit r/m, imm8 count.
pub static EXT_C0: [E; 8] = [
    E::op2(M::rol, K::RegMem8, K::Imm8),
    E::op2(M::ror, K::RegMem8, K::Imm8),
    E::op2(M::rcl, K::RegMem8, K::Imm8),
    E::op2(M::rcr, K::RegMem8, K::Imm8),
    E::op2(M::shl, K::RegMem8, K::Imm8),
    E::op2(M::shr, K::RegMem8, K::Imm8),
    E::op2(M::sal, K::RegMem8, K::Imm8),
    E::op2(M::sar, K::RegMem8, K::Imm8),
];

/// Group 2, native-width r/m.
pub static EXT_C1: [E; 8] = [
    E::op2(M::rol, K::RegMemNative, K::Imm8),
    E::op2(M::ror, K::RegMemNative, K::Imm8),
    E::op2(M::rcl, K::RegMemNative, K::Imm8),
    E::op2(M::rcr, K::RegMemNative, K::Imm8),
    E::op2(M::shl, K::RegMemNative, K::Imm8),
    E::op2(M::shr, K::RegMemNative, K::Imm8),
    E::op2(M::sal, K::RegMemNative, K::Imm8),
    E::op2(M::sar, K::RegMemNative, K::Imm8),
];

/// Group 11 (MOV imm), 8-bit.
pub static EXT_C6: [E; 8] = [
    E::op2(M::mov, K::RegMem8, K::Imm8),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

/// Group 11, native width.
pub static EXT_C7: [E; 8] = [
    E::op2(M::mov, K::RegMemNative, K::Imm32),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

/// Group 2, 8-bit r/m, implied shift count of 1.
pub static EXT_D0: [E; 8] = [
    E::op1(M::rol, K::RegMem8),
    E::op1(M::ror, K::RegMem8),
    E::op1(M::rcl, K::RegMem8),
    E::op1(M::rcr, K::RegMem8),
    E::op1(M::shl, K::RegMem8),
    E::op1(M::shr, K::RegMem8),
    E::op1(M::sal, K::RegMem8),
    E::op1(M::sar, K::RegMem8),
];

/// Group 2, native width, implied shift count of 1.
pub static EXT_D1: [E; 8] = [
    E::op1(M::rol, K::RegMemNative),
    E::op1(M::ror, K::RegMemNative),
    E::op1(M::rcl, K::RegMemNative),
    E::op1(M::rcr, K::RegMemNative),
    E::op1(M::shl, K::RegMemNative),
    E::op1(M::shr, K::RegMemNative),
    E::op1(M::sal, K::RegMemNative),
    E::op1(M::sar, K::RegMemNative),
];

/// Group 2, 8-bit r/m, shift count in CL.
pub static EXT_D2: [E; 8] = [
    E::op2(M::rol, K::RegMem8, K::ImplicitCl),
    E::op2(M::ror, K::RegMem8, K::ImplicitCl),
    E::op2(M::rcl, K::RegMem8, K::ImplicitCl),
    E::op2(M::rcr, K::RegMem8, K::ImplicitCl),
    E::op2(M::shl, K::RegMem8, K::ImplicitCl),
    E::op2(M::shr, K::RegMem8, K::ImplicitCl),
    E::op2(M::sal, K::RegMem8, K::ImplicitCl),
    E::op2(M::sar, K::RegMem8, K::ImplicitCl),
];

/// Group 2, native width, shift count in CL.
pub static EXT_D3: [E; 8] = [
    E::op2(M::rol, K::RegMemNative, K::ImplicitCl),
    E::op2(M::ror, K::RegMemNative, K::ImplicitCl),
    E::op2(M::rcl, K::RegMemNative, K::ImplicitCl),
    E::op2(M::rcr, K::RegMemNative, K::ImplicitCl),
    E::op2(M::shl, K::RegMemNative, K::ImplicitCl),
    E::op2(M::shr, K::RegMemNative, K::ImplicitCl),
    E::op2(M::sal, K::RegMemNative, K::ImplicitCl),
    E::op2(M::sar, K::RegMemNative, K::ImplicitCl),
];

/// Group 3 (test/not/neg/mul/imul/div/idiv), 8-bit.
pub static EXT_F6: [E; 8] = [
    E::op2(M::test, K::RegMem8, K::Imm8),
    E::op2(M::test, K::RegMem8, K::Imm8),
    E::op1(M::not, K::RegMem8),
    E::op1(M::neg, K::RegMem8),
    E::op1(M::mul, K::RegMem8),
    E::op1(M::imul, K::RegMem8),
    E::op1(M::div, K::RegMem8),
    E::op1(M::idiv, K::RegMem8),
];

/// Group 3, native width.
pub static EXT_F7: [E; 8] = [
    E::op2(M::test, K::RegMemNative, K::Imm32),
    E::op2(M::test, K::RegMemNative, K::Imm32),
    E::op1(M::not, K::RegMemNative),
    E::op1(M::neg, K::RegMemNative),
    E::op1(M::mul, K::RegMemNative),
    E::op1(M::imul, K::RegMemNative),
    E::op1(M::div, K::RegMemNative),
    E::op1(M::idiv, K::RegMemNative),
];

/// Group 4 (inc/dec), 8-bit.
pub static EXT_FE: [E; 8] = [
    E::op1(M::inc, K::RegMem8),
    E::op1(M::dec, K::RegMem8),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

/// Group 5 (inc/dec/call/jmp/push), mixed widths: inc/dec are native, while
/// call/jmp/push near forms default to 64 bits in long mode regardless of
/// the 0x66 prefix (§4.K note on stack-width defaults).
pub static EXT_FF: [E; 8] = [
    E::op1(M::inc, K::RegMemNative),
    E::op1(M::dec, K::RegMemNative),
    E::op1(M::call, K::RegMem64).default_64_bit(),
    E::op1(M::callf, K::MemPtr16_32),
    E::op1(M::jmp, K::RegMem64).default_64_bit(),
    E::op1(M::jmp, K::MemPtr16_32),
    E::op1(M::push, K::RegMem64).default_64_bit(),
    E::BLANK,
];

pub static PRIMARY: [E; 256] = {
    let mut t = [E::BLANK; 256];

    t[0x00] = E::op2(M::add, K::RegMem8, K::Reg8);
    t[0x01] = E::op2(M::add, K::RegMemNative, K::RegNative);
    t[0x02] = E::op2(M::add, K::Reg8, K::RegMem8);
    t[0x03] = E::op2(M::add, K::RegNative, K::RegMemNative);
    t[0x04] = E::op2(M::add, K::ImplicitAl, K::Imm8);
    t[0x05] = E::op2(M::add, K::ImplicitNativeAx, K::Imm32);
    t[0x06] = E::op1(M::push, K::ImplicitEs);
    t[0x07] = E::op1(M::pop, K::ImplicitEs);

    t[0x08] = E::op2(M::or, K::RegMem8, K::Reg8);
    t[0x09] = E::op2(M::or, K::RegMemNative, K::RegNative);
    t[0x0A] = E::op2(M::or, K::Reg8, K::RegMem8);
    t[0x0B] = E::op2(M::or, K::RegNative, K::RegMemNative);
    t[0x0C] = E::op2(M::or, K::ImplicitAl, K::Imm8);
    t[0x0D] = E::op2(M::or, K::ImplicitNativeAx, K::Imm32);
    t[0x0E] = E::op1(M::push, K::ImplicitCs);

    t[0x10] = E::op2(M::adc, K::RegMem8, K::Reg8);
    t[0x11] = E::op2(M::adc, K::RegMemNative, K::RegNative);
    t[0x12] = E::op2(M::adc, K::Reg8, K::RegMem8);
    t[0x13] = E::op2(M::adc, K::RegNative, K::RegMemNative);
    t[0x14] = E::op2(M::adc, K::ImplicitAl, K::Imm8);
    t[0x15] = E::op2(M::adc, K::ImplicitNativeAx, K::Imm32);
    t[0x16] = E::op1(M::push, K::ImplicitSs);
    t[0x17] = E::op1(M::pop, K::ImplicitSs);

    t[0x18] = E::op2(M::sbb, K::RegMem8, K::Reg8);
    t[0x19] = E::op2(M::sbb, K::RegMemNative, K::RegNative);
    t[0x1A] = E::op2(M::sbb, K::Reg8, K::RegMem8);
    t[0x1B] = E::op2(M::sbb, K::RegNative, K::RegMemNative);
    t[0x1C] = E::op2(M::sbb, K::ImplicitAl, K::Imm8);
    t[0x1D] = E::op2(M::sbb, K::ImplicitNativeAx, K::Imm32);
    t[0x1E] = E::op1(M::push, K::ImplicitDs);
    t[0x1F] = E::op1(M::pop, K::ImplicitDs);

    t[0x20] = E::op2(M::and, K::RegMem8, K::Reg8);
    t[0x21] = E::op2(M::and, K::RegMemNative, K::RegNative);
    t[0x22] = E::op2(M::and, K::Reg8, K::RegMem8);
    t[0x23] = E::op2(M::and, K::RegNative, K::RegMemNative);
    t[0x24] = E::op2(M::and, K::ImplicitAl, K::Imm8);
    t[0x25] = E::op2(M::and, K::ImplicitNativeAx, K::Imm32);
    // 0x26 ES override, 0x27 DAA: both invalid/absorbed before table lookup.
    t[0x27] = E::op0(M::daa);

    t[0x28] = E::op2(M::sub, K::RegMem8, K::Reg8);
    t[0x29] = E::op2(M::sub, K::RegMemNative, K::RegNative);
    t[0x2A] = E::op2(M::sub, K::Reg8, K::RegMem8);
    t[0x2B] = E::op2(M::sub, K::RegNative, K::RegMemNative);
    t[0x2C] = E::op2(M::sub, K::ImplicitAl, K::Imm8);
    t[0x2D] = E::op2(M::sub, K::ImplicitNativeAx, K::Imm32);
    t[0x2F] = E::op0(M::das);

    t[0x30] = E::op2(M::xor, K::RegMem8, K::Reg8);
    t[0x31] = E::op2(M::xor, K::RegMemNative, K::RegNative);
    t[0x32] = E::op2(M::xor, K::Reg8, K::RegMem8);
    t[0x33] = E::op2(M::xor, K::RegNative, K::RegMemNative);
    t[0x34] = E::op2(M::xor, K::ImplicitAl, K::Imm8);
    t[0x35] = E::op2(M::xor, K::ImplicitNativeAx, K::Imm32);
    t[0x37] = E::op0(M::aaa);

    t[0x38] = E::op2(M::cmp, K::RegMem8, K::Reg8);
    t[0x39] = E::op2(M::cmp, K::RegMemNative, K::RegNative);
    t[0x3A] = E::op2(M::cmp, K::Reg8, K::RegMem8);
    t[0x3B] = E::op2(M::cmp, K::RegNative, K::RegMemNative);
    t[0x3C] = E::op2(M::cmp, K::ImplicitAl, K::Imm8);
    t[0x3D] = E::op2(M::cmp, K::ImplicitNativeAx, K::Imm32);
    t[0x3F] = E::op0(M::aas);

    // 0x40-0x4F are the REX prefix in long mode (absorbed before dispatch
    // reaches here); kept as plain INC/DEC for legacy/compat decoding.
    let mut i = 0x40;
    while i <= 0x47 {
        t[i] = E::op1(M::inc, K::RegNative).direct_register_index();
        i += 1;
    }
    while i <= 0x4F {
        t[i] = E::op1(M::dec, K::RegNative).direct_register_index();
        i += 1;
    }
    while i <= 0x57 {
        t[i] = E::op1(M::push, K::Reg64).direct_register_index().default_64_bit();
        i += 1;
    }
    while i <= 0x5F {
        t[i] = E::op1(M::pop, K::Reg64).direct_register_index().default_64_bit();
        i += 1;
    }

    t[0x60] = E::op0(M::pushad);
    t[0x61] = E::op0(M::popad);
    t[0x62] = E::op2(M::bound, K::Reg32, K::RegMem32Mem16);
    // Source tables this as r64, r/m64; the actual AMD64 encoding sign-extends
    // a 32-bit r/m into a 64-bit register (fixed per DESIGN.md).
    t[0x63] = E::op2(M::movsxd, K::Reg64, K::RegMem32);

    t[0x68] = E::op1(M::push, K::SignExtImm32);
    t[0x69] = E::op3(M::imul, K::RegNative, K::RegMemNative, K::Imm32);
    t[0x6A] = E::op1(M::push, K::Imm8);
    t[0x6B] = E::op3(M::imul, K::RegNative, K::RegMemNative, K::SignExtImm8);
    t[0x6C] = E::op2(M::insb, K::ImplicitMemEsDiByte, K::ImplicitDx);
    t[0x6D] = E::op2(M::ins, K::ImplicitMemEsDi, K::ImplicitDx);
    t[0x6E] = E::op2(M::outsb, K::ImplicitDx, K::ImplicitMemEsDiByte);
    t[0x6F] = E::op2(M::outs, K::ImplicitDx, K::ImplicitMemEsDi);

    t[0x70] = E::op1(M::jo, K::Rel8);
    t[0x71] = E::op1(M::jno, K::Rel8);
    t[0x72] = E::op1(M::jb, K::Rel8);
    t[0x73] = E::op1(M::jnb, K::Rel8);
    t[0x74] = E::op1(M::jz, K::Rel8);
    t[0x75] = E::op1(M::jnz, K::Rel8);
    t[0x76] = E::op1(M::jna, K::Rel8);
    t[0x77] = E::op1(M::ja, K::Rel8);
    t[0x78] = E::op1(M::js, K::Rel8);
    t[0x79] = E::op1(M::jns, K::Rel8);
    t[0x7A] = E::op1(M::jp, K::Rel8);
    t[0x7B] = E::op1(M::jnp, K::Rel8);
    t[0x7C] = E::op1(M::jl, K::Rel8);
    t[0x7D] = E::op1(M::jge, K::Rel8);
    t[0x7E] = E::op1(M::jle, K::Rel8);
    t[0x7F] = E::op1(M::jg, K::Rel8);

    t[0x80] = E::extension(ExtensionKind::Reg, &EXT_80);
    t[0x81] = E::extension(ExtensionKind::Reg, &EXT_81);
    t[0x82] = E::extension(ExtensionKind::Reg, &EXT_82);
    t[0x83] = E::extension(ExtensionKind::Reg, &EXT_83);
    t[0x84] = E::op2(M::test, K::RegMem8, K::Reg8);
    t[0x85] = E::op2(M::test, K::RegMemNative, K::RegNative);
    t[0x86] = E::op2(M::xchg, K::RegMem8, K::Reg8);
    t[0x87] = E::op2(M::xchg, K::RegMemNative, K::RegNative);

    t[0x88] = E::op2(M::mov, K::RegMem8, K::Reg8);
    t[0x89] = E::op2(M::mov, K::RegMemNative, K::RegNative);
    t[0x8A] = E::op2(M::mov, K::Reg8, K::RegMem8);
    t[0x8B] = E::op2(M::mov, K::RegNative, K::RegMemNative);
    t[0x8C] = E::op2(M::mov, K::RegMem16, K::SegmentReg);
    t[0x8D] = E::op2(M::lea, K::RegNative, K::MemAny);
    t[0x8E] = E::op2(M::mov, K::SegmentReg, K::RegMem16);
    // XOP prefix on AMD parts for reg != 0; unimplemented (DESIGN.md).
    t[0x8F] = E::extension(ExtensionKind::Reg, &EXT_8F);

    let mut i = 0x90;
    while i <= 0x97 {
        t[i] = E::op2(M::xchg, K::ImplicitNativeAx, K::RegNative).direct_register_index();
        i += 1;
    }

    t[0x98] = E::op0(M::cwde);
    t[0x99] = E::op0(M::cdq);
    t[0x9A] = E::op1(M::callf, K::Ptr16_32);
    t[0x9B] = E::op0(M::fwait);
    t[0x9C] = E::op0(M::pushf);
    t[0x9D] = E::op0(M::popf);
    t[0x9E] = E::op0(M::sahf);
    t[0x9F] = E::op0(M::lahf);

    t[0xA0] = E::op2(M::mov, K::ImplicitAl, K::MemoryOfs8);
    t[0xA1] = E::op2(M::mov, K::ImplicitNativeAx, K::MemoryOfs32);
    t[0xA2] = E::op2(M::mov, K::MemoryOfs8, K::ImplicitAl);
    t[0xA3] = E::op2(M::mov, K::MemoryOfs32, K::ImplicitNativeAx);
    t[0xA4] = E::op2(M::movsb, K::ImplicitMemEsDiByte, K::ImplicitMemDsSiByte);
    t[0xA5] = E::op2(M::movs, K::ImplicitMemEsDi, K::ImplicitMemDsSi);
    t[0xA6] = E::op2(M::cmpsb, K::ImplicitMemEsDiByte, K::ImplicitMemDsSiByte);
    t[0xA7] = E::op2(M::cmps, K::ImplicitMemEsDi, K::ImplicitMemDsSi);

    t[0xA8] = E::op2(M::test, K::ImplicitAl, K::Imm8);
    t[0xA9] = E::op2(M::test, K::ImplicitNativeAx, K::Imm32);
    t[0xAA] = E::op2(M::stosb, K::ImplicitMemEsDiByte, K::ImplicitAl);
    t[0xAB] = E::op2(M::stos, K::ImplicitMemEsDi, K::ImplicitNativeAx);
    t[0xAC] = E::op2(M::lodsb, K::ImplicitAl, K::ImplicitMemDsSiByte);
    t[0xAD] = E::op2(M::lods, K::ImplicitNativeAx, K::ImplicitMemDsSi);
    t[0xAE] = E::op2(M::scasb, K::ImplicitAl, K::ImplicitMemDsSiByte);
    t[0xAF] = E::op2(M::scas, K::ImplicitNativeAx, K::ImplicitMemDsSi);

    let mut i = 0xB0;
    while i <= 0xB7 {
        t[i] = E::op2(M::mov, K::Reg8, K::Imm8).direct_register_index();
        i += 1;
    }
    while i <= 0xBF {
        t[i] = E::op2(M::mov, K::RegNative, K::Imm64).direct_register_index();
        i += 1;
    }

    t[0xC0] = E::extension(ExtensionKind::Reg, &EXT_C0);
    t[0xC1] = E::extension(ExtensionKind::Reg, &EXT_C1);
    t[0xC2] = E::op1(M::ret, K::Imm16);
    t[0xC3] = E::op0(M::ret);
    // 0xC4/0xC5: two/three-byte VEX escape in long mode; legacy LES/LDS in
    // compat mode are out of scope (see DESIGN.md).
    t[0xC6] = E::extension(ExtensionKind::Reg, &EXT_C6);
    t[0xC7] = E::extension(ExtensionKind::Reg, &EXT_C7);

    t[0xC8] = E::op2(M::enter, K::Imm16, K::Imm8);
    t[0xC9] = E::op0(M::leave);
    t[0xCA] = E::op1(M::retf, K::Imm16);
    t[0xCB] = E::op0(M::retf);
    t[0xCC] = E::op0(M::int3);
    t[0xCD] = E::op1(M::int, K::Imm8);
    t[0xCE] = E::op0(M::into);
    t[0xCF] = E::op0(M::iret);

    t[0xD0] = E::extension(ExtensionKind::Reg, &EXT_D0);
    t[0xD1] = E::extension(ExtensionKind::Reg, &EXT_D1);
    t[0xD2] = E::extension(ExtensionKind::Reg, &EXT_D2);
    t[0xD3] = E::extension(ExtensionKind::Reg, &EXT_D3);
    t[0xD4] = E::op1(M::aam, K::Imm8);
    t[0xD5] = E::op1(M::aad, K::Imm8);
    t[0xD7] = E::op0(M::xlat);

    t[0xD8] = E::extension(ExtensionKind::Reg, &x87::EXT_D8);
    t[0xD9] = E::extension(ExtensionKind::Reg, &x87::EXT_D9);
    t[0xDA] = E::extension(ExtensionKind::Reg, &x87::EXT_DA);
    t[0xDB] = E::extension(ExtensionKind::Reg, &x87::EXT_DB);
    t[0xDC] = E::extension(ExtensionKind::Reg, &x87::EXT_DC);
    t[0xDD] = E::extension(ExtensionKind::Reg, &x87::EXT_DD);
    t[0xDE] = E::extension(ExtensionKind::Reg, &x87::EXT_DE);
    t[0xDF] = E::extension(ExtensionKind::Reg, &x87::EXT_DF);

    t[0xE0] = E::op1(M::loopnz, K::Rel8);
    t[0xE1] = E::op1(M::loopz, K::Rel8);
    t[0xE2] = E::op1(M::LOOP, K::Rel8);
    t[0xE3] = E::op1(M::jecxz, K::Rel8);
    t[0xE4] = E::op2(M::IN, K::ImplicitAl, K::Imm8);
    t[0xE5] = E::op2(M::IN, K::ImplicitNativeAx, K::Imm8);
    t[0xE6] = E::op2(M::out, K::Imm8, K::ImplicitAl);
    t[0xE7] = E::op2(M::out, K::Imm8, K::ImplicitNativeAx);

    t[0xE8] = E::op1(M::call, K::RelNative);
    t[0xE9] = E::op1(M::jmp, K::RelNative);
    t[0xEB] = E::op1(M::jmp, K::Rel8);
    t[0xEC] = E::op2(M::IN, K::ImplicitAl, K::ImplicitDx);
    t[0xED] = E::op2(M::IN, K::ImplicitNativeAx, K::ImplicitDx);
    t[0xEE] = E::op2(M::out, K::ImplicitDx, K::ImplicitAl);
    t[0xEF] = E::op2(M::out, K::ImplicitDx, K::ImplicitNativeAx);

    t[0xF1] = E::op0(M::icebp);
    t[0xF4] = E::op0(M::hlt);
    t[0xF5] = E::op0(M::cmc);
    t[0xF6] = E::extension(ExtensionKind::Reg, &EXT_F6);
    t[0xF7] = E::extension(ExtensionKind::Reg, &EXT_F7);

    t[0xF8] = E::op0(M::clc);
    t[0xF9] = E::op0(M::stc);
    t[0xFA] = E::op0(M::cli);
    t[0xFB] = E::op0(M::sti);
    t[0xFC] = E::op0(M::cld);
    t[0xFD] = E::op0(M::std);
    t[0xFE] = E::extension(ExtensionKind::Reg, &EXT_FE);
    t[0xFF] = E::extension(ExtensionKind::Reg, &EXT_FF);

    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_rm8_r8_is_present_and_needs_modrm() {
        match PRIMARY[0x00] {
            E::Terminal { mnemonic, needs_modrm, .. } => {
                assert_eq!(mnemonic, M::add);
                assert!(needs_modrm);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn group1_extension_slots_point_at_eight_entry_tables() {
        match PRIMARY[0x80] {
            E::Extension { kind: ExtensionKind::Reg, table } => assert_eq!(table.len(), 8),
            _ => panic!("expected reg extension"),
        }
    }

    #[test]
    fn push_pop_reg_family_is_direct_register_indexed_and_defaults_to_64_bit() {
        match PRIMARY[0x50] {
            E::Terminal { direct_register_index, default_64_bit, .. } => {
                assert!(direct_register_index);
                assert!(default_64_bit);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn movsxd_sign_extends_a_32_bit_source_into_a_64_bit_destination() {
        match PRIMARY[0x63] {
            E::Terminal { mnemonic, operands, .. } => {
                assert_eq!(mnemonic, M::movsxd);
                assert_eq!(operands[0], K::Reg64);
                assert_eq!(operands[1], K::RegMem32);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn group5_call_near_defaults_to_64_bit_without_rex_w() {
        match EXT_FF[2] {
            E::Terminal { mnemonic, default_64_bit, .. } => {
                assert_eq!(mnemonic, M::call);
                assert!(default_64_bit);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn rex_prefix_slots_still_carry_legacy_inc_dec_for_non_long_modes() {
        match PRIMARY[0x40] {
            E::Terminal { mnemonic, direct_register_index, .. } => {
                assert_eq!(mnemonic, M::inc);
                assert!(direct_register_index);
            }
            _ => panic!("expected terminal"),
        }
    }
}
