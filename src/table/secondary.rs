//! The two-byte `0F` opcode map (§4.F) and its ModR/M.reg/mod/rm extension
//! groups. Mirrors the structure of [`super::primary`] one escape level
//! deeper: legacy SSE/MMX opcodes fork on the mandatory-prefix channel
//! (none/66/F2/F3), so this module holds four parallel 256-slot tables
//! instead of one.

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::{ExtensionKind, TableEntry as E};

// ---- group 6 (0F 00) ----------------------------------------------------

pub static EXT_00: [E; 8] = [
    E::op1(M::sldt, K::RegMem32),
    E::op1(M::str, K::RegMem32),
    E::op1(M::lldt, K::RegMem16),
    E::op1(M::ltr, K::RegMem16),
    E::op1(M::verr, K::RegMem16),
    E::op1(M::verw, K::RegMem16),
    E::BLANK,
    E::BLANK,
];

// ---- group 7 (0F 01) -----------------------------------------------------
// Reg 1/2/3/7 further fork on ModR/M.rm, but only when mod == 3; the
// mod != 3 form is a plain memory operand (SIDT/LGDT/LIDT/INVLPG and
// friends), sitting at index 0 of each 9-entry sub-table.

pub static EXT_01_REG1_RM: [E; 9] = [
    E::op1(M::sidt, K::MemAny),
    E::op0(M::monitor).requires_modrm(),
    E::op0(M::mwait).requires_modrm(),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

pub static EXT_01_REG2_RM: [E; 9] = [
    E::op1(M::lgdt, K::MemAny),
    E::op0(M::xgetbv).requires_modrm(),
    E::op0(M::xsetbv).requires_modrm(),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

pub static EXT_01_REG3_RM: [E; 9] = [
    E::op1(M::lidt, K::MemAny),
    E::op0(M::vmrun).requires_modrm(),
    E::op0(M::vmcall).requires_modrm(),
    E::op1(M::vmload, K::ImplicitRax).requires_modrm(),
    E::op1(M::vmsave, K::ImplicitRax).requires_modrm(),
    E::op0(M::stgi).requires_modrm(),
    E::op0(M::clgi).requires_modrm(),
    E::op1(M::skinit, K::ImplicitEax).requires_modrm(),
    E::op2(M::invlpga, K::ImplicitRax, K::ImplicitEcx).requires_modrm(),
];

pub static EXT_01_REG7_RM: [E; 9] = [
    E::op1(M::invlpg, K::MemAny),
    E::op0(M::swapgs).requires_modrm(),
    E::op0(M::rdtscp).requires_modrm(),
    E::op0(M::monitorx).requires_modrm(),
    E::op0(M::mwaitx).requires_modrm(),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

pub static EXT_01: [E; 8] = [
    E::op1(M::sgdt, K::MemAny),
    E::extension(ExtensionKind::Rm, &EXT_01_REG1_RM),
    E::extension(ExtensionKind::Rm, &EXT_01_REG2_RM),
    E::extension(ExtensionKind::Rm, &EXT_01_REG3_RM),
    E::op1(M::smsw, K::RegMem32),
    E::BLANK,
    E::op1(M::lmsw, K::RegMem16),
    E::extension(ExtensionKind::Rm, &EXT_01_REG7_RM),
];

// ---- group 16 (0F 18): multi-byte prefetch/NOP hint ----------------------

pub static EXT_18: [E; 8] = [
    E::op1(M::prefetch, K::MemAny),
    E::op1(M::prefetch, K::MemAny),
    E::op1(M::prefetch, K::MemAny),
    E::op1(M::prefetch, K::MemAny),
    E::op0(M::nop).requires_modrm(),
    E::op0(M::nop).requires_modrm(),
    E::op0(M::nop).requires_modrm(),
    E::op0(M::nop).requires_modrm(),
];

// ---- group 15 (0F AE), split by mandatory prefix -------------------------

const EXT_AE_REG4_MOD: [E; 2] = [E::op1(M::xsave, K::MemAny), E::BLANK];
const EXT_AE_REG5_MOD: [E; 2] = [E::op1(M::xrstor, K::MemAny), E::op0(M::lfence).requires_modrm()];
const EXT_AE_REG6_MOD: [E; 2] = [E::op1(M::xsaveopt, K::MemAny), E::op0(M::mfence).requires_modrm()];
const EXT_AE_REG7_MOD: [E; 2] = [E::op1(M::clflush, K::MemAny), E::op0(M::sfence).requires_modrm()];

pub static EXT_AE_PREFIX_NONE: [E; 8] = [
    E::op1(M::fxsave, K::MemAny),
    E::op1(M::fxrstor, K::MemAny),
    E::op1(M::ldmxcsr, K::Mem32),
    E::op1(M::stmxcsr, K::Mem32),
    E::extension(ExtensionKind::Mod, &EXT_AE_REG4_MOD),
    E::extension(ExtensionKind::Mod, &EXT_AE_REG5_MOD),
    E::extension(ExtensionKind::Mod, &EXT_AE_REG6_MOD),
    E::extension(ExtensionKind::Mod, &EXT_AE_REG7_MOD),
];

pub static EXT_AE_PREFIX_F3: [E; 8] = [
    E::op1(M::rdfsbase, K::Reg32Rm),
    E::op1(M::rdgsbase, K::Reg32Rm),
    E::op1(M::wrfsbase, K::Reg32Rm),
    E::op1(M::wrgsbase, K::Reg32Rm),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

// ---- shift-group (0x71/72/73), one per mandatory-prefix channel ----------

pub static EXT_NONE_71: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrlw, K::RegMmxRm, K::Imm8),
    E::BLANK,
    E::op2(M::psraw, K::RegMmxRm, K::Imm8),
    E::BLANK,
    E::op2(M::psllw, K::RegMmxRm, K::Imm8),
    E::BLANK,
];

pub static EXT_NONE_72: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrld, K::RegMmxRm, K::Imm8),
    E::BLANK,
    E::op2(M::psrad, K::RegMmxRm, K::Imm8),
    E::BLANK,
    E::op2(M::pslld, K::RegMmxRm, K::Imm8),
    E::BLANK,
];

pub static EXT_NONE_73: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrlq, K::RegMmxRm, K::Imm8),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::op2(M::psllq, K::RegMmxRm, K::Imm8),
    E::BLANK,
];

pub static EXT_66_71: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrlw, K::RegXmmRm, K::Imm8),
    E::BLANK,
    E::op2(M::psraw, K::RegXmmRm, K::Imm8),
    E::BLANK,
    E::op2(M::psllw, K::RegXmmRm, K::Imm8),
    E::BLANK,
];

pub static EXT_66_72: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrld, K::RegXmmRm, K::Imm8),
    E::BLANK,
    E::op2(M::psrad, K::RegXmmRm, K::Imm8),
    E::BLANK,
    E::op2(M::pslld, K::RegXmmRm, K::Imm8),
    E::BLANK,
];

pub static EXT_66_73: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::op2(M::psrlq, K::RegXmmRm, K::Imm8),
    E::op2(M::psrldq, K::RegXmmRm, K::Imm8),
    E::BLANK,
    E::BLANK,
    E::op2(M::psllq, K::RegXmmRm, K::Imm8),
    E::op2(M::pslldq, K::RegXmmRm, K::Imm8),
];

pub static EXT_66_78: [E; 8] = [
    E::op3(M::extrq, K::RegMmxRm, K::Imm8, K::Imm8),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
];

// ---- UD1 (0F B9), all eight reg slots alias the same undefined opcode ----

pub static EXT_NONE_B9: [E; 8] = [
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
    E::op0(M::ud1),
];

pub static EXT_NONE_BA: [E; 8] = [
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::op2(M::bt, K::RegMem32, K::Imm8),
    E::op2(M::bts, K::RegMem32, K::Imm8),
    E::op2(M::btr, K::RegMem32, K::Imm8),
    E::op2(M::btc, K::RegMem32, K::Imm8),
];

// ---- CMPXCHG8B/16B (0F C7), split by REX.W -------------------------------

const EXT_C7_REG1_REXW: [E; 2] = [
    E::op1(M::cmpxchg8b, K::Mem64),
    E::op1(M::cmpxchg16b, K::Mem128),
];

pub static EXT_ANY_C7: [E; 8] = [
    E::BLANK,
    E::extension(ExtensionKind::RexW, &EXT_C7_REG1_REXW),
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::BLANK,
    E::op1(M::rdrand, K::Reg32Rm),
    E::op1(M::rdseed, K::Reg32Rm),
];

// ---- MOVLPS/MOVHLPS and MOVHPS/MOVLHPS, split by ModR/M.mod --------------
//
// Same opcode byte decodes two completely different instructions depending
// on whether the ModR/M names memory (mod != 3) or a register (mod == 3).
// For the register form the two XMM operands both live in the ModR/M byte,
// so the source/dest roles have to be spelled out explicitly rather than
// inferred from reg/rm position the way a memory operand would be.

const EXT_12_MOD: [E; 2] = [
    E::op2(M::movlps, K::RegXmm, K::Mem64),
    E::op2(M::movhlps, K::RegXmm, K::RegXmmRm),
];

const EXT_16_MOD: [E; 2] = [
    E::op2(M::movhps, K::RegXmm, K::Mem64),
    E::op2(M::movlhps, K::RegXmm, K::RegXmmRm),
];

// ---- the four 256-entry maps ---------------------------------------------

pub static NORMAL: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x00] = E::extension(ExtensionKind::Reg, &EXT_00);
    t[0x01] = E::extension(ExtensionKind::Reg, &EXT_01);
    t[0x02] = E::op2(M::lar, K::Reg32, K::RegMem16);
    t[0x03] = E::op2(M::lsl, K::Reg32, K::RegMem16);
    t[0x05] = E::op0(M::syscall);
    t[0x06] = E::op0(M::clts);
    t[0x07] = E::op0(M::sysret);

    t[0x08] = E::op0(M::invd);
    t[0x09] = E::op0(M::wbinvd);
    t[0x0B] = E::op0(M::ud2);
    t[0x0D] = E::op1(M::prefetch, K::MemAny);
    t[0x0E] = E::op0(M::femms);

    t[0x18] = E::extension(ExtensionKind::Reg, &EXT_18);
    t[0x19] = E::op1(M::nop, K::RegMem32);
    t[0x1A] = E::op1(M::nop, K::RegMem32);
    t[0x1B] = E::op1(M::nop, K::RegMem32);
    t[0x1C] = E::op1(M::nop, K::RegMem32);
    t[0x1D] = E::op1(M::nop, K::RegMem32);
    t[0x1E] = E::op1(M::nop, K::RegMem32);
    t[0x1F] = E::op1(M::nop, K::RegMem32);

    t[0x20] = E::op2(M::mov, K::Reg64Rm, K::ControlReg);
    t[0x21] = E::op2(M::mov, K::Reg64Rm, K::DebugReg);
    t[0x22] = E::op2(M::mov, K::ControlReg, K::Reg64Rm);
    t[0x23] = E::op2(M::mov, K::DebugReg, K::Reg64Rm);

    t[0x30] = E::op0(M::wrmsr);
    t[0x31] = E::op0(M::rdtsc);
    t[0x32] = E::op0(M::rdmsr);
    t[0x33] = E::op0(M::rdpmc);
    t[0x34] = E::op0(M::sysenter);
    t[0x35] = E::op0(M::sysexit);

    let cmovs: [M; 16] = [
        M::cmovo, M::cmovno, M::cmovb, M::cmovnb, M::cmovz, M::cmovnz, M::cmovna, M::cmova,
        M::cmovs, M::cmovns, M::cmovp, M::cmovnp, M::cmovl, M::cmovge, M::cmovle, M::cmovg,
    ];
    let mut i = 0;
    while i < 16 {
        t[0x40 + i] = E::op2(cmovs[i], K::Reg32, K::RegMem32);
        i += 1;
    }

    let jccs: [M; 16] = [
        M::jo, M::jno, M::jb, M::jnb, M::jz, M::jnz, M::jna, M::ja,
        M::js, M::jns, M::jp, M::jnp, M::jl, M::jge, M::jle, M::jg,
    ];
    i = 0;
    while i < 16 {
        t[0x80 + i] = E::op1(jccs[i], K::RelNative);
        i += 1;
    }

    let setccs: [M; 16] = [
        M::seto, M::setno, M::setb, M::setnb, M::setz, M::setnz, M::setna, M::seta,
        M::sets, M::setns, M::setp, M::setnp, M::setl, M::setge, M::setle, M::setg,
    ];
    i = 0;
    while i < 16 {
        t[0x90 + i] = E::op1(setccs[i], K::RegMem8);
        i += 1;
    }

    t[0xA0] = E::op1(M::push, K::ImplicitFs);
    t[0xA1] = E::op1(M::pop, K::ImplicitFs);
    t[0xA2] = E::op0(M::cpuid);
    t[0xA3] = E::op2(M::bt, K::RegMem32, K::Reg32);
    t[0xA4] = E::op3(M::shld, K::RegMem32, K::Reg32, K::Imm8);
    t[0xA5] = E::op3(M::shld, K::RegMem32, K::Reg32, K::ImplicitCl);

    t[0xA8] = E::op1(M::push, K::ImplicitGs);
    t[0xA9] = E::op1(M::pop, K::ImplicitGs);
    t[0xAA] = E::op0(M::rsm);
    t[0xAB] = E::op2(M::bts, K::RegMem32, K::Reg32);
    t[0xAC] = E::op3(M::shld, K::RegMem32, K::Reg32, K::Imm8);
    t[0xAD] = E::op3(M::shld, K::RegMem32, K::Reg32, K::ImplicitCl);
    t[0xAF] = E::op2(M::imul, K::Reg32, K::RegMem32);

    t[0xB0] = E::op2(M::cmpxchg, K::RegMem8, K::Reg8);
    t[0xB1] = E::op2(M::cmpxchg, K::RegMem32, K::Reg32);
    t[0xB2] = E::op2(M::lss, K::Reg32, K::MemPtr16_32);
    t[0xB3] = E::op2(M::btr, K::RegMem32, K::Reg32);
    t[0xB4] = E::op2(M::lfs, K::Reg32, K::MemPtr16_32);
    t[0xB5] = E::op2(M::lgs, K::Reg32, K::MemPtr16_32);
    t[0xB6] = E::op2(M::movzx, K::Reg32, K::RegMem8);
    t[0xB7] = E::op2(M::movzx, K::Reg32, K::RegMem16);

    let mut j = 0xC8;
    while j <= 0xCF {
        t[j] = E::op1(M::bswap, K::RegMem32).direct_register_index();
        j += 1;
    }

    t
};

pub static PREFIX_NONE: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x10] = E::op2(M::movups, K::RegXmm, K::RegXmmMem128);
    t[0x11] = E::op2(M::movups, K::RegXmmMem128, K::RegXmm);
    t[0x12] = E::extension(ExtensionKind::Mod, &EXT_12_MOD);
    t[0x13] = E::op2(M::movlps, K::Mem64, K::RegXmm);
    t[0x14] = E::op2(M::unpcklps, K::RegXmm, K::RegXmmMem128);
    t[0x15] = E::op2(M::unpckhps, K::RegXmm, K::RegXmmMem128);
    t[0x16] = E::extension(ExtensionKind::Mod, &EXT_16_MOD);
    t[0x17] = E::op2(M::movhps, K::Mem64, K::RegXmm);

    t[0x28] = E::op2(M::movaps, K::RegXmm, K::RegXmmMem128);
    t[0x29] = E::op2(M::movaps, K::RegXmmMem128, K::RegXmm);
    t[0x2A] = E::op2(M::cvtpi2ps, K::RegXmm, K::RegMmxMem64);
    t[0x2B] = E::op2(M::movntps, K::Mem128, K::RegXmm);
    t[0x2C] = E::op2(M::cvttps2pi, K::RegMmx, K::RegXmmMem64);
    t[0x2D] = E::op2(M::cvtps2pi, K::RegMmx, K::RegXmmMem64);
    t[0x2E] = E::op2(M::ucomiss, K::RegXmm, K::RegXmmMem32);
    t[0x2F] = E::op2(M::comiss, K::RegXmm, K::RegXmmMem32);

    t[0x50] = E::op2(M::movmskps, K::Reg32, K::RegXmmRm);
    t[0x51] = E::op2(M::sqrtps, K::RegXmm, K::RegXmmMem128);
    t[0x52] = E::op2(M::rsqrtps, K::RegXmm, K::RegXmmMem128);
    t[0x53] = E::op2(M::rcpps, K::RegXmm, K::RegXmmMem128);
    t[0x54] = E::op2(M::andps, K::RegXmm, K::RegXmmMem128);
    t[0x55] = E::op2(M::andnps, K::RegXmm, K::RegXmmMem128);
    t[0x56] = E::op2(M::orps, K::RegXmm, K::RegXmmMem128);
    t[0x57] = E::op2(M::xorps, K::RegXmm, K::RegXmmMem128);

    t[0x58] = E::op2(M::addps, K::RegXmm, K::RegXmmMem128);
    t[0x59] = E::op2(M::mulps, K::RegXmm, K::RegXmmMem128);
    t[0x5A] = E::op2(M::cvtps2pd, K::RegXmm, K::RegXmmMem64);
    t[0x5B] = E::op2(M::cvtdq2ps, K::RegXmm, K::RegXmmMem128);
    t[0x5C] = E::op2(M::subps, K::RegXmm, K::RegXmmMem128);
    t[0x5D] = E::op2(M::minps, K::RegXmm, K::RegXmmMem128);
    t[0x5E] = E::op2(M::divps, K::RegXmm, K::RegXmmMem128);
    t[0x5F] = E::op2(M::maxps, K::RegXmm, K::RegXmmMem128);

    t[0x60] = E::op2(M::punpcklbw, K::RegMmx, K::RegMmxMem32);
    t[0x61] = E::op2(M::punpcklwd, K::RegMmx, K::RegMmxMem32);
    t[0x62] = E::op2(M::punpckldq, K::RegMmx, K::RegMmxMem32);
    t[0x63] = E::op2(M::packsswb, K::RegMmx, K::RegMmxMem64);
    t[0x64] = E::op2(M::pcmpgtb, K::RegMmx, K::RegMmxMem64);
    t[0x65] = E::op2(M::pcmpgtw, K::RegMmx, K::RegMmxMem64);
    t[0x66] = E::op2(M::pcmpgtd, K::RegMmx, K::RegMmxMem64);
    t[0x67] = E::op2(M::packuswb, K::RegMmx, K::RegMmxMem64);

    t[0x68] = E::op2(M::punpckhbw, K::RegMmx, K::RegMmxMem64);
    t[0x69] = E::op2(M::punpckhwd, K::RegMmx, K::RegMmxMem64);
    t[0x6A] = E::op2(M::punpckhdq, K::RegMmx, K::RegMmxMem64);
    t[0x6B] = E::op2(M::packssdw, K::RegMmx, K::RegMmxMem64);
    t[0x6E] = E::op2(M::movd, K::RegMmx, K::RegMem32);
    t[0x6F] = E::op2(M::movq, K::RegMmx, K::RegMmxMem64);

    t[0x70] = E::op3(M::pshufw, K::RegMmx, K::RegMmxMem64, K::Imm8);
    t[0x71] = E::extension(ExtensionKind::Reg, &EXT_NONE_71);
    t[0x72] = E::extension(ExtensionKind::Reg, &EXT_NONE_72);
    t[0x73] = E::extension(ExtensionKind::Reg, &EXT_NONE_73);
    t[0x74] = E::op2(M::pcmpeqb, K::RegMmx, K::RegMmxMem64);
    t[0x75] = E::op2(M::pcmpeqw, K::RegMmx, K::RegMmxMem64);
    t[0x76] = E::op2(M::pcmpeqd, K::RegMmx, K::RegMmxMem64);
    t[0x77] = E::op0(M::emms);

    t[0x7E] = E::op2(M::movd, K::RegMem32, K::RegMmx);
    t[0x7F] = E::op2(M::movq, K::RegMmxMem64, K::RegMmx);

    t[0xAE] = E::extension(ExtensionKind::Reg, &EXT_AE_PREFIX_NONE);

    t[0xB9] = E::extension(ExtensionKind::Reg, &EXT_NONE_B9);
    t[0xBA] = E::extension(ExtensionKind::Reg, &EXT_NONE_BA);
    t[0xBB] = E::op2(M::btc, K::RegMem32, K::Reg32);
    t[0xBC] = E::op2(M::bsf, K::Reg32, K::RegMem32);
    t[0xBD] = E::op2(M::bsr, K::Reg32, K::RegMem32);
    t[0xBE] = E::op2(M::movsx, K::Reg32, K::RegMem8);
    t[0xBF] = E::op2(M::movsx, K::Reg32, K::RegMem16);

    t[0xC0] = E::op2(M::xadd, K::RegMem8, K::Reg8);
    t[0xC1] = E::op2(M::xadd, K::RegMem32, K::Reg32);
    t[0xC2] = E::op3(M::cmpps, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0xC3] = E::op2(M::movnti, K::Mem32, K::Reg32);
    t[0xC4] = E::op3(M::pinsrw, K::RegMmx, K::RegMem32Mem16, K::Imm8);
    t[0xC5] = E::op3(M::pextrw, K::Reg32, K::RegMmxRm, K::Imm8);
    t[0xC6] = E::op3(M::shufps, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0xC7] = E::extension(ExtensionKind::Reg, &EXT_ANY_C7);

    t[0xD1] = E::op2(M::psrlw, K::RegMmx, K::RegMmxMem64);
    t[0xD2] = E::op2(M::psrld, K::RegMmx, K::RegMmxMem64);
    t[0xD3] = E::op2(M::psrlq, K::RegMmx, K::RegMmxMem64);
    t[0xD4] = E::op2(M::paddq, K::RegMmx, K::RegMmxMem64);
    t[0xD5] = E::op2(M::pmullw, K::RegMmx, K::RegMmxMem64);
    t[0xD7] = E::op2(M::pmovmskb, K::Reg32, K::RegMmxRm);

    t[0xD8] = E::op2(M::psubusb, K::RegMmx, K::RegMmxMem64);
    t[0xD9] = E::op2(M::psubusw, K::RegMmx, K::RegMmxMem64);
    t[0xDA] = E::op2(M::pminub, K::RegMmx, K::RegMmxMem64);
    t[0xDB] = E::op2(M::pand, K::RegMmx, K::RegMmxMem64);
    t[0xDC] = E::op2(M::paddusb, K::RegMmx, K::RegMmxMem64);
    t[0xDD] = E::op2(M::paddusw, K::RegMmx, K::RegMmxMem64);
    t[0xDE] = E::op2(M::pmaxub, K::RegMmx, K::RegMmxMem64);
    t[0xDF] = E::op2(M::pandn, K::RegMmx, K::RegMmxMem64);

    t[0xE0] = E::op2(M::pavgb, K::RegMmx, K::RegMmxMem64);
    t[0xE1] = E::op2(M::psraw, K::RegMmx, K::RegMmxMem64);
    t[0xE2] = E::op2(M::psrad, K::RegMmx, K::RegMmxMem64);
    t[0xE3] = E::op2(M::pavgw, K::RegMmx, K::RegMmxMem64);
    t[0xE4] = E::op2(M::pmulhuw, K::RegMmx, K::RegMmxMem64);
    t[0xE5] = E::op2(M::pmulhw, K::RegMmx, K::RegMmxMem64);
    t[0xE7] = E::op2(M::movntq, K::Mem64, K::RegMmx);

    t[0xE8] = E::op2(M::psubsb, K::RegMmx, K::RegMmxMem64);
    t[0xE9] = E::op2(M::psubsw, K::RegMmx, K::RegMmxMem64);
    t[0xEA] = E::op2(M::pminsw, K::RegMmx, K::RegMmxMem64);
    t[0xEB] = E::op2(M::por, K::RegMmx, K::RegMmxMem64);
    t[0xEC] = E::op2(M::paddsb, K::RegMmx, K::RegMmxMem64);
    t[0xED] = E::op2(M::paddsw, K::RegMmx, K::RegMmxMem64);
    t[0xEE] = E::op2(M::pmaxsw, K::RegMmx, K::RegMmxMem64);
    t[0xEF] = E::op2(M::pxor, K::RegMmx, K::RegMmxMem64);

    t[0xF1] = E::op2(M::psllw, K::RegMmx, K::RegMmxMem64);
    t[0xF2] = E::op2(M::pslld, K::RegMmx, K::RegMmxMem64);
    t[0xF3] = E::op2(M::psllq, K::RegMmx, K::RegMmxMem64);
    t[0xF4] = E::op2(M::pmuludq, K::RegMmx, K::RegMmxMem64);
    t[0xF5] = E::op2(M::pmaddwd, K::RegMmx, K::RegMmxMem64);
    t[0xF6] = E::op2(M::psadbw, K::RegMmx, K::RegMmxMem64);
    t[0xF7] = E::op2(M::maskmovq, K::RegMmx, K::RegMmxRm);

    t[0xF8] = E::op2(M::psubb, K::RegMmx, K::RegMmxMem64);
    t[0xF9] = E::op2(M::psubw, K::RegMmx, K::RegMmxMem64);
    t[0xFA] = E::op2(M::psubd, K::RegMmx, K::RegMmxMem64);
    t[0xFB] = E::op2(M::psubq, K::RegMmx, K::RegMmxMem64);
    t[0xFC] = E::op2(M::paddb, K::RegMmx, K::RegMmxMem64);
    t[0xFD] = E::op2(M::paddw, K::RegMmx, K::RegMmxMem64);
    t[0xFE] = E::op2(M::paddd, K::RegMmx, K::RegMmxMem64);

    t[0xFF] = E::op0(M::ud0);
    t
};

pub static PREFIX_66: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x10] = E::op2(M::movupd, K::RegXmm, K::RegXmmMem128);
    t[0x11] = E::op2(M::movupd, K::RegXmmMem128, K::RegXmm);
    t[0x12] = E::op2(M::movlpd, K::RegXmm, K::Mem64);
    t[0x13] = E::op2(M::movlpd, K::Mem64, K::RegXmm);
    t[0x14] = E::op2(M::unpcklpd, K::RegXmm, K::RegXmmMem128);
    t[0x15] = E::op2(M::unpckhpd, K::RegXmm, K::RegXmmMem128);
    t[0x16] = E::op2(M::movhpd, K::RegXmm, K::Mem64);
    t[0x17] = E::op2(M::movhpd, K::Mem64, K::RegXmm);

    t[0x28] = E::op2(M::movapd, K::RegXmm, K::RegXmmMem128);
    t[0x29] = E::op2(M::movapd, K::RegXmmMem128, K::RegXmm);
    t[0x2A] = E::op2(M::cvtpi2pd, K::RegXmm, K::RegMmxMem64);
    t[0x2B] = E::op2(M::movntpd, K::Mem128, K::RegXmm);
    t[0x2C] = E::op2(M::cvttpd2pi, K::RegMmx, K::RegXmmMem128);
    t[0x2D] = E::op2(M::cvtpd2pi, K::RegMmx, K::RegXmmMem128);
    t[0x2E] = E::op2(M::ucomisd, K::RegXmm, K::RegXmmMem64);
    t[0x2F] = E::op2(M::comisd, K::RegXmm, K::RegXmmMem64);

    t[0x50] = E::op2(M::movmskpd, K::Reg32, K::RegXmmRm);
    t[0x51] = E::op2(M::sqrtpd, K::RegXmm, K::RegXmmMem128);
    t[0x54] = E::op2(M::andpd, K::RegXmm, K::RegXmmMem128);
    t[0x55] = E::op2(M::andnpd, K::RegXmm, K::RegXmmMem128);
    t[0x56] = E::op2(M::orpd, K::RegXmm, K::RegXmmMem128);
    t[0x57] = E::op2(M::xorpd, K::RegXmm, K::RegXmmMem128);

    t[0x58] = E::op2(M::addpd, K::RegXmm, K::RegXmmMem128);
    t[0x59] = E::op2(M::mulpd, K::RegXmm, K::RegXmmMem128);
    t[0x5A] = E::op2(M::cvtpd2ps, K::RegXmm, K::RegXmmMem128);
    t[0x5B] = E::op2(M::cvtps2dq, K::RegXmm, K::RegXmmMem128);
    t[0x5C] = E::op2(M::subpd, K::RegXmm, K::RegXmmMem128);
    t[0x5D] = E::op2(M::minpd, K::RegXmm, K::RegXmmMem128);
    t[0x5E] = E::op2(M::divpd, K::RegXmm, K::RegXmmMem128);
    t[0x5F] = E::op2(M::maxpd, K::RegXmm, K::RegXmmMem128);

    t[0x60] = E::op2(M::punpcklbw, K::RegXmm, K::RegXmmMem128);
    t[0x61] = E::op2(M::punpcklwd, K::RegXmm, K::RegXmmMem128);
    t[0x62] = E::op2(M::punpckldq, K::RegXmm, K::RegXmmMem128);
    t[0x63] = E::op2(M::packsswb, K::RegXmm, K::RegXmmMem128);
    t[0x64] = E::op2(M::pcmpgtb, K::RegXmm, K::RegXmmMem128);
    t[0x65] = E::op2(M::pcmpgtw, K::RegXmm, K::RegXmmMem128);
    t[0x66] = E::op2(M::pcmpgtd, K::RegXmm, K::RegXmmMem128);
    t[0x67] = E::op2(M::packuswb, K::RegXmm, K::RegXmmMem128);

    t[0x68] = E::op2(M::punpckhbw, K::RegXmm, K::RegXmmMem128);
    t[0x69] = E::op2(M::punpckhwd, K::RegXmm, K::RegXmmMem128);
    t[0x6A] = E::op2(M::punpckhdq, K::RegXmm, K::RegXmmMem128);
    t[0x6B] = E::op2(M::packssdw, K::RegXmm, K::RegXmmMem128);
    t[0x6C] = E::op2(M::punpcklqdq, K::RegXmm, K::RegXmmMem128);
    t[0x6D] = E::op2(M::punpckhqdq, K::RegXmm, K::RegXmmMem128);
    t[0x6E] = E::op2(M::movd, K::RegXmm, K::RegMem32);
    t[0x6F] = E::op2(M::movdqa, K::RegXmm, K::RegXmmMem128);

    t[0x70] = E::op3(M::pshufd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x71] = E::extension(ExtensionKind::Reg, &EXT_66_71);
    t[0x72] = E::extension(ExtensionKind::Reg, &EXT_66_72);
    t[0x73] = E::extension(ExtensionKind::Reg, &EXT_66_73);
    t[0x74] = E::op2(M::pcmpeqb, K::RegXmm, K::RegXmmMem128);
    t[0x75] = E::op2(M::pcmpeqw, K::RegXmm, K::RegXmmMem128);
    t[0x76] = E::op2(M::pcmpeqd, K::RegXmm, K::RegXmmMem128);

    t[0x78] = E::extension(ExtensionKind::Reg, &EXT_66_78);
    t[0x79] = E::op2(M::extrq, K::RegXmm, K::RegXmmRm);
    t[0x7C] = E::op2(M::haddpd, K::RegXmm, K::RegXmmMem128);
    t[0x7D] = E::op2(M::hsubpd, K::RegXmm, K::RegXmmMem128);
    t[0x7E] = E::op2(M::movd, K::RegMem32, K::RegXmm);
    t[0x7F] = E::op2(M::movdqa, K::RegXmmMem128, K::RegXmm);

    t[0xC0] = E::op2(M::xadd, K::RegMem8, K::Reg8);
    t[0xC1] = E::op2(M::xadd, K::RegMem32, K::Reg32);
    t[0xC2] = E::op3(M::cmppd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0xC4] = E::op3(M::pinsrw, K::RegXmm, K::RegMem32Mem16, K::Imm8);
    t[0xC5] = E::op3(M::pextrw, K::Reg32, K::RegXmmRm, K::Imm8);
    t[0xC6] = E::op3(M::shufpd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0xC7] = E::extension(ExtensionKind::Reg, &EXT_ANY_C7);

    t[0xD0] = E::op2(M::addsubpd, K::RegXmm, K::RegXmmMem128);
    t[0xD1] = E::op2(M::psrlw, K::RegXmm, K::RegXmmMem128);
    t[0xD2] = E::op2(M::psrld, K::RegXmm, K::RegXmmMem128);
    t[0xD3] = E::op2(M::psrlq, K::RegXmm, K::RegXmmMem128);
    t[0xD4] = E::op2(M::paddq, K::RegXmm, K::RegXmmMem128);
    t[0xD5] = E::op2(M::pmullw, K::RegXmm, K::RegXmmMem128);
    t[0xD6] = E::op2(M::movq, K::RegXmmMem64, K::RegXmm);
    t[0xD7] = E::op2(M::pmovmskb, K::Reg32, K::RegXmmRm);

    t[0xD8] = E::op2(M::psubusb, K::RegXmm, K::RegXmmMem128);
    t[0xD9] = E::op2(M::psubusw, K::RegXmm, K::RegXmmMem128);
    t[0xDA] = E::op2(M::pminub, K::RegXmm, K::RegXmmMem128);
    t[0xDB] = E::op2(M::pand, K::RegXmm, K::RegXmmMem128);
    t[0xDC] = E::op2(M::paddusb, K::RegXmm, K::RegXmmMem128);
    t[0xDD] = E::op2(M::paddusw, K::RegXmm, K::RegXmmMem128);
    t[0xDE] = E::op2(M::pmaxub, K::RegXmm, K::RegXmmMem128);
    t[0xDF] = E::op2(M::pandn, K::RegXmm, K::RegXmmMem128);

    t[0xE0] = E::op2(M::pavgb, K::RegXmm, K::RegXmmMem128);
    t[0xE1] = E::op2(M::psraw, K::RegXmm, K::RegXmmMem128);
    t[0xE2] = E::op2(M::psrad, K::RegXmm, K::RegXmmMem128);
    t[0xE3] = E::op2(M::pavgw, K::RegXmm, K::RegXmmMem128);
    t[0xE4] = E::op2(M::pmulhuw, K::RegXmm, K::RegXmmMem128);
    t[0xE5] = E::op2(M::pmulhw, K::RegXmm, K::RegXmmMem128);
    t[0xE6] = E::op2(M::cvttpd2dq, K::RegXmm, K::RegXmmMem128);
    t[0xE7] = E::op2(M::movntdq, K::Mem128, K::RegXmm);

    t[0xE8] = E::op2(M::psubsb, K::RegXmm, K::RegXmmMem128);
    t[0xE9] = E::op2(M::psubsw, K::RegXmm, K::RegXmmMem128);
    t[0xEA] = E::op2(M::pminsw, K::RegXmm, K::RegXmmMem128);
    t[0xEB] = E::op2(M::por, K::RegXmm, K::RegXmmMem128);
    t[0xEC] = E::op2(M::paddsb, K::RegXmm, K::RegXmmMem128);
    t[0xED] = E::op2(M::paddsw, K::RegXmm, K::RegXmmMem128);
    t[0xEE] = E::op2(M::pmaxsw, K::RegXmm, K::RegXmmMem128);
    t[0xEF] = E::op2(M::pxor, K::RegXmm, K::RegXmmMem128);

    t[0xF1] = E::op2(M::psllw, K::RegXmm, K::RegXmmMem128);
    t[0xF2] = E::op2(M::pslld, K::RegXmm, K::RegXmmMem128);
    t[0xF3] = E::op2(M::psllq, K::RegXmm, K::RegXmmMem128);
    t[0xF4] = E::op2(M::pmuludq, K::RegXmm, K::RegXmmMem128);
    t[0xF5] = E::op2(M::pmaddwd, K::RegXmm, K::RegXmmMem128);
    t[0xF6] = E::op2(M::psadbw, K::RegXmm, K::RegXmmMem128);
    t[0xF7] = E::op2(M::maskmovdqu, K::RegXmm, K::RegXmmRm);

    t[0xF8] = E::op2(M::psubb, K::RegXmm, K::RegXmmMem128);
    t[0xF9] = E::op2(M::psubw, K::RegXmm, K::RegXmmMem128);
    t[0xFA] = E::op2(M::psubd, K::RegXmm, K::RegXmmMem128);
    t[0xFB] = E::op2(M::psubq, K::RegXmm, K::RegXmmMem128);
    t[0xFC] = E::op2(M::paddb, K::RegXmm, K::RegXmmMem128);
    t[0xFD] = E::op2(M::paddw, K::RegXmm, K::RegXmmMem128);
    t[0xFE] = E::op2(M::paddd, K::RegXmm, K::RegXmmMem128);

    t[0xFF] = E::op0(M::ud0);
    t
};

pub static PREFIX_F2: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x10] = E::op2(M::movsd, K::RegXmm, K::RegXmmMem64);
    t[0x11] = E::op2(M::movsd, K::RegXmmMem128, K::RegXmm);
    t[0x12] = E::op2(M::movddup, K::RegXmm, K::RegXmmMem64);
    t[0x2A] = E::op2(M::cvtsi2sd, K::RegXmm, K::RegMem32);

    t[0x2B] = E::op2(M::movntsd, K::Mem64, K::RegXmm);
    t[0x2C] = E::op2(M::cvttsd2si, K::Reg32, K::RegXmmMem64);
    t[0x2D] = E::op2(M::cvtsd2si, K::Reg32, K::RegXmmMem64);

    t[0x51] = E::op2(M::sqrtsd, K::RegXmm, K::RegXmmMem64);

    t[0x58] = E::op2(M::addsd, K::RegXmm, K::RegXmmMem64);
    t[0x59] = E::op2(M::mulsd, K::RegXmm, K::RegXmmMem64);
    t[0x5A] = E::op2(M::cvtsd2ss, K::RegXmm, K::RegXmmMem64);
    t[0x5C] = E::op2(M::subsd, K::RegXmm, K::RegXmmMem64);
    t[0x5D] = E::op2(M::minsd, K::RegXmm, K::RegXmmMem64);
    t[0x5E] = E::op2(M::divsd, K::RegXmm, K::RegXmmMem64);
    t[0x5F] = E::op2(M::maxsd, K::RegXmm, K::RegXmmMem64);

    t[0x70] = E::op3(M::pshuflw, K::RegXmm, K::RegXmmMem128, K::Imm8);

    t[0x78] = E::op4(M::insertq, K::RegXmm, K::RegXmmRm, K::Imm8, K::Imm8);
    t[0x79] = E::op2(M::insertq, K::RegXmm, K::RegXmmRm);
    t[0x7C] = E::op2(M::haddps, K::RegXmm, K::RegXmmMem128);
    t[0x7D] = E::op2(M::hsubps, K::RegXmm, K::RegXmmMem128);

    t[0xC0] = E::op2(M::xadd, K::RegMem8, K::Reg8);
    t[0xC1] = E::op2(M::xadd, K::RegMem32, K::Reg32);
    t[0xC2] = E::op3(M::cmpsd, K::RegXmm, K::RegXmmMem64, K::Imm8);
    t[0xC7] = E::extension(ExtensionKind::Reg, &EXT_ANY_C7);

    t[0xD0] = E::op2(M::addsubps, K::RegXmm, K::RegXmmMem128);
    t[0xD6] = E::op2(M::movdq2q, K::RegMmx, K::RegXmmRm);

    t[0xE6] = E::op2(M::cvtpd2dq, K::RegXmm, K::RegXmmMem128);

    t[0xF2] = E::op2(M::lddqu, K::RegXmm, K::Mem128);

    t[0xFF] = E::op0(M::ud0);
    t
};

pub static PREFIX_F3: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x10] = E::op2(M::movss, K::RegXmm, K::RegXmmMem32);
    t[0x11] = E::op2(M::movss, K::RegXmmMem32, K::RegXmm);
    t[0x12] = E::op2(M::movsldup, K::RegXmm, K::RegXmmMem128);
    t[0x16] = E::op2(M::movshdup, K::RegXmm, K::RegXmmMem128);

    t[0x2A] = E::op2(M::cvtsi2ss, K::RegXmm, K::RegMem32);
    t[0x2B] = E::op2(M::movntss, K::Mem32, K::RegXmm);
    t[0x2C] = E::op2(M::cvttss2si, K::Reg32, K::RegXmmMem32);
    t[0x2D] = E::op2(M::cvtss2si, K::Reg32, K::RegXmmMem32);

    t[0x51] = E::op2(M::sqrtss, K::RegXmm, K::RegXmmMem32);
    t[0x52] = E::op2(M::rsqrtss, K::RegXmm, K::RegXmmMem32);
    t[0x53] = E::op2(M::rcpss, K::RegXmm, K::RegXmmMem32);

    t[0x58] = E::op2(M::addss, K::RegXmm, K::RegXmmMem32);
    t[0x59] = E::op2(M::mulss, K::RegXmm, K::RegXmmMem32);
    t[0x5A] = E::op2(M::cvtss2sd, K::RegXmm, K::RegXmmMem32);
    t[0x5B] = E::op2(M::cvttps2dq, K::RegXmm, K::RegXmmMem128);
    t[0x5C] = E::op2(M::subss, K::RegXmm, K::RegXmmMem32);
    t[0x5D] = E::op2(M::minss, K::RegXmm, K::RegXmmMem32);
    t[0x5E] = E::op2(M::divss, K::RegXmm, K::RegXmmMem32);
    t[0x5F] = E::op2(M::maxss, K::RegXmm, K::RegXmmMem32);

    t[0x6F] = E::op2(M::movdqu, K::RegXmm, K::RegXmmMem128);

    t[0x70] = E::op3(M::pshufhw, K::RegXmm, K::RegXmmMem128, K::Imm8);

    t[0x7E] = E::op2(M::movq, K::RegXmm, K::RegXmmMem64);
    t[0x7F] = E::op2(M::movdqu, K::RegXmmMem128, K::RegXmm);

    t[0xAE] = E::extension(ExtensionKind::Reg, &EXT_AE_PREFIX_F3);

    t[0xB8] = E::op2(M::popcnt, K::Reg32, K::RegMem32);
    t[0xBC] = E::op2(M::tzcnt, K::Reg32, K::RegMem32);
    t[0xBD] = E::op2(M::lzcnt, K::Reg32, K::RegMem32);

    t[0xC0] = E::op2(M::xadd, K::RegMem8, K::Reg8);
    t[0xC1] = E::op2(M::xadd, K::RegMem32, K::Reg32);
    t[0xC2] = E::op3(M::cmpss, K::RegXmm, K::RegXmmMem32, K::Imm8);
    t[0xC7] = E::extension(ExtensionKind::Reg, &EXT_ANY_C7);

    t[0xD6] = E::op2(M::movq2dq, K::RegXmm, K::RegMmxRm);

    t[0xE6] = E::op2(M::cvtdq2pd, K::RegXmm, K::RegXmmMem64);

    t[0xFF] = E::op0(M::ud0);
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group6_sldt_needs_modrm() {
        match EXT_00[0] {
            E::Terminal { needs_modrm, .. } => assert!(needs_modrm),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn group7_reg3_rm_table_wires_svm_instructions() {
        match EXT_01_REG3_RM[8] {
            E::Terminal { mnemonic, operand_count, .. } => {
                assert_eq!(mnemonic, M::invlpga);
                assert_eq!(operand_count, 2);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn movlps_movhlps_share_opcode_but_fork_on_mod() {
        match PREFIX_NONE[0x12] {
            E::Extension { kind, .. } => assert_eq!(kind, ExtensionKind::Mod),
            _ => panic!("expected extension"),
        }
        match EXT_12_MOD[1] {
            E::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::movhlps),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn cmpxchg8b_16b_forks_on_rex_w() {
        match EXT_C7_REG1_REXW[1] {
            E::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::cmpxchg16b),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn shufps_and_shufpd_keep_their_own_mnemonics() {
        // Source tables once mislabelled this pair as PINSRW; verify the fix stuck.
        match PREFIX_NONE[0xC6] {
            E::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::shufps),
            _ => panic!("expected terminal"),
        }
        match PREFIX_66[0xC6] {
            E::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::shufpd),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn jcc_near_family_is_size_elastic() {
        match NORMAL[0x84] {
            E::Terminal { mnemonic, operands, .. } => {
                assert_eq!(mnemonic, M::jz);
                assert_eq!(operands[0], K::RelNative);
            }
            _ => panic!("expected terminal"),
        }
    }
}
