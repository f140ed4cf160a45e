//! x87 FPU opcode maps, escape bytes 0xD8-0xDF.
//!
//! The historical source this decoder traces (`instrad`) keeps these eight
//! tables in a header that wasn't part of the retrieved pack, so this module
//! is authored directly from the AMD64 manual's x87 instruction reference
//! rather than transcribed line-for-line. Each top-level table is indexed by
//! ModR/M.reg (8 entries); where the operation genuinely differs between
//! `ModR/M.mod == 3` (register-to-register, operating on the ST(i) stack)
//! and `mod != 3` (memory operand), the reg slot is itself a 2-entry `Mod`
//! extension.

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::{ExtensionKind, TableEntry as E};

/// `mod != 3`: ST(0), m32fp. `mod == 3`: ST(0), ST(i).
const fn arith_mem32_or_sti(mnemonic: M) -> [E; 2] {
    [E::op2(mnemonic, K::ImplicitSt0, K::Mem32), E::op2(mnemonic, K::ImplicitSt0, K::RegSt)]
}

/// 0xD8: single-precision arithmetic against ST(0).
pub static EXT_D8: [E; 8] = [
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fadd)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fmul)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fcom)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fcomp)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fsub)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fsubr)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fdiv)),
    E::extension(ExtensionKind::Mod, &arith_mem32_or_sti(M::fdivr)),
];

const D9_MOD3_REG0: [E; 2] = [E::op1(M::fld, K::Mem32), E::op1(M::fld, K::RegSt)];
const D9_MOD3_REG1: [E; 2] = [E::BLANK, E::op1(M::fxch, K::RegSt)];
const D9_MOD3_REG2: [E; 2] = [E::op1(M::fst, K::Mem32), E::op0(M::fnop)];
const D9_MOD3_REG3: [E; 2] = [E::op1(M::fstp, K::Mem32), E::BLANK];
const D9_MOD3_REG4: [E; 2] = [E::op1(M::fldenv, K::MemAny), E::BLANK];
const D9_MOD3_REG5: [E; 2] = [E::op1(M::fldcw, K::Mem16), E::BLANK];
const D9_MOD3_REG6: [E; 2] = [E::op1(M::fnstenv, K::MemAny), E::BLANK];
const D9_MOD3_REG7: [E; 2] = [E::op1(M::fnstcw, K::Mem16), E::BLANK];

/// 0xD9: load/store ST(0), environment control, and the reg=4..7 "no
/// operand" single-precision transcendental/constant group (only reachable
/// with `mod == 3`, where the low 3 bits of ModR/M.rm select the operation).
pub static EXT_D9: [E; 8] = [
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG0),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG1),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG2),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG3),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG4),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG5),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG6),
    E::extension(ExtensionKind::Mod, &D9_MOD3_REG7),
];

/// The 8 `D9 /4` through `D9 /7`, `mod == 3` no-operand opcodes, keyed by
/// ModR/M.rm (FCHS/FABS/FTST/FXAM and the constant-load family, plus the
/// transcendental group). The dispatcher special-cases these: see
/// [`D9_RM_REG4`]..[`D9_RM_REG7`].
pub static D9_RM_REG4: [E; 8] = [
    E::op0(M::fchs),
    E::op0(M::fabs),
    E::BLANK,
    E::BLANK,
    E::op0(M::ftst),
    E::op0(M::fxam),
    E::BLANK,
    E::BLANK,
];

pub static D9_RM_REG5: [E; 8] = [
    E::op0(M::fld1),
    E::op0(M::fldl2t),
    E::op0(M::fldl2e),
    E::op0(M::fldpi),
    E::op0(M::fldlg2),
    E::op0(M::fldln2),
    E::op0(M::fldz),
    E::BLANK,
];

pub static D9_RM_REG6: [E; 8] = [
    E::op0(M::f2xm1),
    E::op0(M::fyl2x),
    E::op0(M::fptan),
    E::op0(M::fpatan),
    E::op0(M::fxtract),
    E::op0(M::fprem1),
    E::op0(M::fdecstp),
    E::op0(M::fincstp),
];

pub static D9_RM_REG7: [E; 8] = [
    E::op0(M::fprem),
    E::op0(M::fyl2xp1),
    E::op0(M::fsqrt),
    E::op0(M::fsincos),
    E::op0(M::frndint),
    E::op0(M::fscale),
    E::op0(M::fsin),
    E::op0(M::fcos),
];

/// 0xDA: integer (32-bit) arithmetic against ST(0), plus the `mod == 3`
/// FCMOVcc-on-unordered/below/equal and FUCOMPP forms.
pub static EXT_DA: [E; 8] = [
    E::extension(ExtensionKind::Mod, &[E::op2(M::fiadd, K::ImplicitSt0, K::Mem32), E::op2(M::fcmovb, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fimul, K::ImplicitSt0, K::Mem32), E::op2(M::fcmove, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::ficom, K::ImplicitSt0, K::Mem32), E::op2(M::fcmovbe, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::ficomp, K::ImplicitSt0, K::Mem32), E::op2(M::fcmovu, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fisub, K::ImplicitSt0, K::Mem32), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fisubr, K::ImplicitSt0, K::Mem32), E::op0(M::fucompp)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fidiv, K::ImplicitSt0, K::Mem32), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fidivr, K::ImplicitSt0, K::Mem32), E::BLANK]),
];

/// 0xDB: integer (32-bit) load/store, `mod == 3` FCMOVcc-above/not-equal
/// family plus FUCOMI/FCOMI/FNCLEX/FNINIT, and the 80-bit extended load/store.
pub static EXT_DB: [E; 8] = [
    E::extension(ExtensionKind::Mod, &[E::op1(M::fild, K::Mem32), E::op2(M::fcmovnb, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fisttp, K::Mem32), E::op2(M::fcmovne, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fist, K::Mem32), E::op2(M::fcmovnbe, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fistp, K::Mem32), E::op2(M::fcmovnu, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::BLANK, E::op0(M::fnclex)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fld, K::Mem80), E::op2(M::fucomi, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::BLANK, E::op2(M::fcomi, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fstp, K::Mem80), E::BLANK]),
];

/// 0xDC: double-precision arithmetic against ST(0), or (mod==3) against
/// ST(i) with the reversed operand convention (`ST(i), ST(0)`).
pub static EXT_DC: [E; 8] = [
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fadd)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fmul)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fcom)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fcomp)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fsubr)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fsub)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fdivr)),
    E::extension(ExtensionKind::Mod, &arith_mem64_or_sti_rev(M::fdiv)),
];

const fn arith_mem64_or_sti_rev(mnemonic: M) -> [E; 2] {
    [E::op2(mnemonic, K::ImplicitSt0, K::Mem64), E::op2(mnemonic, K::RegSt, K::ImplicitSt0)]
}

/// 0xDD: double-precision load/store, FSAVE/FRSTOR/FNSTSW, and (mod==3)
/// FFREE/FST/FSTP/FUCOM/FUCOMP against ST(i).
pub static EXT_DD: [E; 8] = [
    E::extension(ExtensionKind::Mod, &[E::op1(M::fld, K::Mem64), E::op1(M::ffree, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fisttp, K::Mem64), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fst, K::Mem64), E::op1(M::fst, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fstp, K::Mem64), E::op1(M::fstp, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::frstor, K::MemAny), E::op1(M::fucom, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::BLANK, E::op1(M::fucomp, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fnsave, K::MemAny), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fnstsw, K::Mem16), E::BLANK]),
];

/// 0xDE: 16-bit-integer arithmetic against ST(0), or (mod==3) ST(i)
/// arithmetic that also pops the stack.
pub static EXT_DE: [E; 8] = [
    E::extension(ExtensionKind::Mod, &[E::op2(M::fiadd, K::ImplicitSt0, K::Mem16), E::op2(M::faddp, K::RegSt, K::ImplicitSt0)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fimul, K::ImplicitSt0, K::Mem16), E::op2(M::fmulp, K::RegSt, K::ImplicitSt0)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::ficom, K::ImplicitSt0, K::Mem16), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::ficomp, K::ImplicitSt0, K::Mem16), E::op0(M::fcompp)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fisub, K::ImplicitSt0, K::Mem16), E::op2(M::fsubrp, K::RegSt, K::ImplicitSt0)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fisubr, K::ImplicitSt0, K::Mem16), E::op2(M::fsubp, K::RegSt, K::ImplicitSt0)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fidiv, K::ImplicitSt0, K::Mem16), E::op2(M::fdivrp, K::RegSt, K::ImplicitSt0)]),
    E::extension(ExtensionKind::Mod, &[E::op2(M::fidivr, K::ImplicitSt0, K::Mem16), E::op2(M::fdivp, K::RegSt, K::ImplicitSt0)]),
];

/// 0xDF: 16-bit-integer load/store, BCD load/store, the 64-bit integer
/// load/store, and (mod==3) FNSTSW AX / FUCOMIP / FCOMIP.
pub static EXT_DF: [E; 8] = [
    E::extension(ExtensionKind::Mod, &[E::op1(M::fild, K::Mem16), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fisttp, K::Mem16), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fist, K::Mem16), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fistp, K::Mem16), E::BLANK]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fbld, K::Mem80), E::op1(M::fnstsw, K::ImplicitAx)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fild, K::Mem64), E::op2(M::fucomip, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fbstp, K::Mem80), E::op2(M::fcomip, K::ImplicitSt0, K::RegSt)]),
    E::extension(ExtensionKind::Mod, &[E::op1(M::fistp, K::Mem64), E::BLANK]),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn d8_reg0_mod_not_3_is_fadd_against_memory() {
        match EXT_D8[0] {
            E::Extension { kind: ExtensionKind::Mod, table } => match table[0] {
                E::Terminal { mnemonic, operands, .. } => {
                    assert_eq!(mnemonic, M::fadd);
                    assert_eq!(operands[1], K::Mem32);
                }
                _ => panic!("expected terminal"),
            },
            _ => panic!("expected mod extension"),
        }
    }

    #[test]
    fn d9_reg2_mod3_is_fnop() {
        match EXT_D9[2] {
            E::Extension { kind: ExtensionKind::Mod, table } => {
                assert!(matches!(table[1], E::Terminal { mnemonic: M::fnop, .. }));
            }
            _ => panic!("expected mod extension"),
        }
    }

    #[test]
    fn df_reg4_mod3_is_fnstsw_ax() {
        match EXT_DF[4] {
            E::Extension { kind: ExtensionKind::Mod, table } => {
                assert!(matches!(table[1], E::Terminal { mnemonic: M::fnstsw, .. }));
            }
            _ => panic!("expected mod extension"),
        }
    }
}
