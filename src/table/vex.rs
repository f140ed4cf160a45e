//! The VEX-prefixed opcode maps (AVX, AVX2, FMA3, FMA4, BMI1, BMI2, ADX).
//!
//! Each VEX opcode byte selects a 32-entry slot array instead of a single
//! terminal, keyed on the four bits the AMD manual says actually change a
//! VEX mnemonic or operand shape: whether ModR/M.mod is 3 (register form)
//! or not (memory form), the mandatory-prefix channel carried in VEX.pp,
//! VEX.W, and VEX.L. Unlike the legacy extension tables, the mod-is-3
//! distinction is already folded into the key, so register-form and
//! memory-form terminals are just two different slots rather than a nested
//! `Mod` extension -- e.g. `VMOVLPS`'s load-only memory form and `VMOVHLPS`'s
//! register-only form live at the same opcode, different slots.
//!
//! A small number of opcodes (the 71/72/73 shift-by-immediate group, AE's
//! LDMXCSR/STMXCSR, and BMI1's F3 sub-dispatch) still fork on ModR/M.reg;
//! those slots hold a [`TableEntry::Extension`] pointing at an 8-entry
//! sub-table, reusing the same mechanism the legacy maps use.

use crate::mnemonic::Mnemonic as M;
use crate::modifier::MandatoryPrefix;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::{ExtensionKind, TableEntry as E};

/// One opcode's worth of VEX dispatch slots.
pub type Slots = [E; 32];

const BLANK_SLOTS: Slots = [E::BLANK; 32];

const NONE: u8 = MandatoryPrefix::None as u8;
const P66: u8 = MandatoryPrefix::P66 as u8;
const F2: u8 = MandatoryPrefix::F2 as u8;
const F3: u8 = MandatoryPrefix::F3 as u8;

/// Computes the slot index for a given (mod-is-3, mandatory prefix, W, L).
pub const fn key(mod_is_3: bool, prefix: u8, w: u8, l: u8) -> usize {
    ((mod_is_3 as usize) << 4) | ((prefix as usize) << 2) | ((w as usize) << 1) | (l as usize)
}

/// A builder over one opcode's 32 slots. `mod3`/`w`/`l` parameters below are
/// booleans or 0/1 values rather than the raw VEX bit fields; callers read
/// more like the operation they describe than like bit arithmetic.
#[derive(Clone, Copy)]
struct Builder(Slots);

impl Builder {
    const fn new() -> Self {
        Builder(BLANK_SLOTS)
    }

    const fn at(mut self, mod_is_3: bool, prefix: u8, w: u8, l: u8, e: E) -> Self {
        self.0[key(mod_is_3, prefix, w, l)] = e;
        self
    }

    /// Same entry for both ModR/M.mod forms -- used whenever the operand
    /// kinds (`RegXmmMem128` and friends) already resolve register vs.
    /// memory themselves.
    const fn both_mod(self, prefix: u8, w: u8, l: u8, e: E) -> Self {
        self.at(false, prefix, w, l, e).at(true, prefix, w, l, e)
    }

    /// Same entry regardless of VEX.W -- used whenever a mnemonic doesn't
    /// fork on operand width (almost every packed AVX1/AVX2 op).
    const fn both_w(self, mod_is_3: bool, prefix: u8, l: u8, e: E) -> Self {
        self.at(mod_is_3, prefix, 0, l, e).at(mod_is_3, prefix, 1, l, e)
    }

    /// Both mod forms and both W values, fixed L -- the common case for a
    /// register-or-memory AVX instruction at one vector width.
    const fn both_mod_w(self, prefix: u8, l: u8, e: E) -> Self {
        self.both_mod(prefix, 0, l, e).both_mod(prefix, 1, l, e)
    }

    /// Every mod/W/L combination for one prefix channel -- used for scalar
    /// forms and GPR-only BMI instructions where neither mod, W, nor L
    /// changes the mnemonic (the resolver reads W/L itself where needed).
    const fn all(self, prefix: u8, e: E) -> Self {
        self.both_mod_w(prefix, 0, e).both_mod_w(prefix, 1, e)
    }

    const fn build(self) -> Slots {
        self.0
    }
}

// -- Map 1 (`0F`) ModR/M.reg sub-extensions -----------------------------------

const SHIFT_IMM_71_L0: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrlw, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[4] = E::op3(M::vpsraw, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[6] = E::op3(M::vpsllw, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t
};
const SHIFT_IMM_71_L1: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrlw, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[4] = E::op3(M::vpsraw, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[6] = E::op3(M::vpsllw, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t
};
const SHIFT_IMM_72_L0: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrld, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[4] = E::op3(M::vpsrad, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[6] = E::op3(M::vpslld, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t
};
const SHIFT_IMM_72_L1: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrld, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[4] = E::op3(M::vpsrad, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[6] = E::op3(M::vpslld, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t
};
const SHIFT_IMM_73_L0: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrlq, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[3] = E::op3(M::vpsrldq, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[6] = E::op3(M::vpsllq, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t[7] = E::op3(M::vpslldq, K::RegVvvvXmm, K::RegXmmRm, K::Imm8);
    t
};
const SHIFT_IMM_73_L1: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op3(M::vpsrlq, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[3] = E::op3(M::vpsrldq, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[6] = E::op3(M::vpsllq, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t[7] = E::op3(M::vpslldq, K::RegVvvvYmm, K::RegYmmRm, K::Imm8);
    t
};

const MXCSR: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[2] = E::op1(M::vldmxcsr, K::Mem32);
    t[3] = E::op1(M::vstmxcsr, K::Mem32);
    t
};

// -- Map 2 (`0F 38`) ModR/M.reg sub-extension (BMI1's F3 opcode) --------------

const BMI_F3_W0: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[1] = E::op2(M::blsr, K::Reg32, K::RegMem32);
    t[2] = E::op2(M::blsmsk, K::Reg32, K::RegMem32);
    t[3] = E::op2(M::blsi, K::Reg32, K::RegMem32);
    t
};
const BMI_F3_W1: [E; 8] = {
    let mut t = [E::BLANK; 8];
    t[1] = E::op2(M::blsr, K::Reg64, K::RegMem64);
    t[2] = E::op2(M::blsmsk, K::Reg64, K::RegMem64);
    t[3] = E::op2(M::blsi, K::Reg64, K::RegMem64);
    t
};

// -- Map 1: `0F`-escape VEX instructions (AVX1 floating point + integer) -----

pub static MAP1: [Slots; 256] = {
    let mut t = [BLANK_SLOTS; 256];

    t[0x10] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovups, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vmovups, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op2(M::vmovupd, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vmovupd, K::RegYmm, K::RegYmmMem256))
        .at(true, F2, 0, 0, E::op3(M::vmovsd, K::RegXmm, K::RegVvvvXmm, K::RegXmmRm))
        .at(false, F2, 0, 0, E::op2(M::vmovsd, K::RegXmm, K::Mem64))
        .at(true, F3, 0, 0, E::op3(M::vmovss, K::RegXmm, K::RegVvvvXmm, K::RegXmmRm))
        .at(false, F3, 0, 0, E::op2(M::vmovss, K::RegXmm, K::Mem32))
        .build();

    t[0x11] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovups, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(NONE, 1, E::op2(M::vmovups, K::RegYmmMem256, K::RegYmm))
        .both_mod_w(P66, 0, E::op2(M::vmovupd, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(P66, 1, E::op2(M::vmovupd, K::RegYmmMem256, K::RegYmm))
        .at(true, F2, 0, 0, E::op3(M::vmovsd, K::RegXmmRm, K::RegVvvvXmm, K::RegXmm))
        .at(false, F2, 0, 0, E::op2(M::vmovsd, K::Mem64, K::RegXmm))
        .at(true, F3, 0, 0, E::op3(M::vmovss, K::RegXmmRm, K::RegVvvvXmm, K::RegXmm))
        .at(false, F3, 0, 0, E::op2(M::vmovss, K::Mem32, K::RegXmm))
        .build();

    t[0x12] = Builder::new()
        .at(false, NONE, 0, 0, E::op3(M::vmovlps, K::RegXmm, K::RegVvvvXmm, K::Mem64))
        .at(true, NONE, 0, 0, E::op3(M::vmovhlps, K::RegXmm, K::RegVvvvXmm, K::RegXmmRm))
        .at(false, P66, 0, 0, E::op3(M::vmovlpd, K::RegXmm, K::RegVvvvXmm, K::Mem64))
        .both_mod_w(F2, 0, E::op2(M::vmovddup, K::RegXmm, K::RegXmmMem64))
        .both_mod_w(F2, 1, E::op2(M::vmovddup, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(F3, 0, E::op2(M::vmovsldup, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(F3, 1, E::op2(M::vmovsldup, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x13] = Builder::new()
        .at(false, NONE, 0, 0, E::op2(M::vmovlps, K::Mem64, K::RegXmm))
        .at(false, P66, 0, 0, E::op2(M::vmovlpd, K::Mem64, K::RegXmm))
        .build();

    t[0x14] = Builder::new()
        .both_mod_w(NONE, 0, E::op3(M::vunpcklps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op3(M::vunpcklps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op3(M::vunpcklpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(M::vunpcklpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x15] = Builder::new()
        .both_mod_w(NONE, 0, E::op3(M::vunpckhps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op3(M::vunpckhps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op3(M::vunpckhpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(M::vunpckhpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x16] = Builder::new()
        .at(false, NONE, 0, 0, E::op3(M::vmovhps, K::RegXmm, K::RegVvvvXmm, K::Mem64))
        .at(true, NONE, 0, 0, E::op3(M::vmovlhps, K::RegXmm, K::RegVvvvXmm, K::RegXmmRm))
        .at(false, P66, 0, 0, E::op3(M::vmovhpd, K::RegXmm, K::RegVvvvXmm, K::Mem64))
        .both_mod_w(F3, 0, E::op3(M::vmovshdup, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(F3, 1, E::op3(M::vmovshdup, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x17] = Builder::new()
        .at(false, NONE, 0, 0, E::op2(M::vmovhps, K::Mem64, K::RegXmm))
        .at(false, P66, 0, 0, E::op2(M::vmovhpd, K::Mem64, K::RegXmm))
        .build();

    t[0x28] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovaps, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vmovaps, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op2(M::vmovapd, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vmovapd, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x29] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovaps, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(NONE, 1, E::op2(M::vmovaps, K::RegYmmMem256, K::RegYmm))
        .both_mod_w(P66, 0, E::op2(M::vmovapd, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(P66, 1, E::op2(M::vmovapd, K::RegYmmMem256, K::RegYmm))
        .build();

    t[0x2A] = Builder::new()
        .both_mod(F2, 0, 0, E::op3(M::vcvtsi2sd, K::RegXmm, K::RegVvvvXmm, K::RegMem32))
        .both_mod(F2, 1, 0, E::op3(M::vcvtsi2sd, K::RegXmm, K::RegVvvvXmm, K::RegMem64))
        .both_mod(F3, 0, 0, E::op3(M::vcvtsi2ss, K::RegXmm, K::RegVvvvXmm, K::RegMem32))
        .both_mod(F3, 1, 0, E::op3(M::vcvtsi2ss, K::RegXmm, K::RegVvvvXmm, K::RegMem64))
        .build();

    t[0x2B] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovntps, K::Mem128, K::RegXmm))
        .both_mod_w(P66, 1, E::op2(M::vmovntpd, K::Mem256, K::RegYmm))
        .build();

    t[0x2C] = Builder::new()
        .both_mod(F2, 0, 0, E::op2(M::vcvttsd2si, K::Reg32, K::RegXmmMem64))
        .both_mod(F2, 1, 0, E::op2(M::vcvttsd2si, K::Reg64, K::RegXmmMem64))
        .both_mod(F3, 0, 0, E::op2(M::vcvttss2si, K::Reg32, K::RegXmmMem64))
        .both_mod(F3, 1, 0, E::op2(M::vcvttss2si, K::Reg64, K::RegXmmMem64))
        .build();

    t[0x2D] = Builder::new()
        .both_mod(F2, 0, 0, E::op2(M::vcvtsd2si, K::Reg32, K::RegXmmMem64))
        .both_mod(F2, 1, 0, E::op2(M::vcvtsd2si, K::Reg64, K::RegXmmMem64))
        .both_mod(F3, 0, 0, E::op2(M::vcvtss2si, K::Reg32, K::RegXmmMem64))
        .both_mod(F3, 1, 0, E::op2(M::vcvtss2si, K::Reg64, K::RegXmmMem64))
        .build();

    t[0x2E] = Builder::new()
        .all(NONE, E::op2(M::vucomiss, K::RegXmm, K::RegXmmMem32))
        .all(P66, E::op2(M::vucomisd, K::RegXmm, K::RegXmmMem64))
        .build();

    t[0x2F] = Builder::new()
        .all(NONE, E::op2(M::vcomiss, K::RegXmm, K::RegXmmMem32))
        .all(P66, E::op2(M::vcomisd, K::RegXmm, K::RegXmmMem64))
        .build();

    t[0x50] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vmovmskps, K::Reg32, K::RegXmmRm))
        .both_mod_w(NONE, 1, E::op2(M::vmovmskps, K::Reg32, K::RegYmmRm))
        .both_mod_w(P66, 0, E::op2(M::vmovmskpd, K::Reg32, K::RegXmmRm))
        .both_mod_w(P66, 1, E::op2(M::vmovmskpd, K::Reg32, K::RegYmmRm))
        .build();

    t[0x51] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vsqrtps, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vsqrtps, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op2(M::vsqrtpd, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vsqrtpd, K::RegYmm, K::RegYmmMem256))
        .all(F2, E::op3(M::vsqrtsd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem64))
        .all(F3, E::op3(M::vsqrtss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0x52] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vrsqrtps, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vrsqrtps, K::RegYmm, K::RegYmmMem256))
        .all(F3, E::op3(M::vrsqrtss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0x53] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vrcpps, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vrcpps, K::RegYmm, K::RegYmmMem256))
        .all(F3, E::op3(M::vrcpss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0x54] = binop_logic(M::vandps, M::vandpd);
    t[0x55] = binop_logic(M::vandnps, M::vandnpd);
    t[0x56] = binop_logic(M::vorps, M::vorpd);
    t[0x57] = binop_logic(M::vxorps, M::vxorpd);

    t[0x58] = arith_ps_pd_sd_ss(M::vaddps, M::vaddpd, M::vaddsd, M::vaddss);
    t[0x59] = arith_ps_pd_sd_ss(M::vmulps, M::vmulpd, M::vmulsd, M::vmulss);

    t[0x5A] = Builder::new()
        .both_mod(NONE, 0, 0, E::op2(M::vcvtps2pd, K::RegXmm, K::RegXmmMem64))
        .both_mod(NONE, 0, 1, E::op2(M::vcvtps2pd, K::RegYmm, K::RegXmmMem128))
        .both_mod(P66, 0, 0, E::op2(M::vcvtpd2ps, K::RegXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op2(M::vcvtpd2ps, K::RegXmm, K::RegYmmMem256))
        .all(F3, E::op3(M::vcvtsd2ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem64))
        .all(F2, E::op3(M::vcvtss2sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0x5B] = Builder::new()
        .both_mod_w(NONE, 0, E::op2(M::vcvtdq2ps, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op2(M::vcvtdq2ps, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op2(M::vcvtps2dq, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vcvtps2dq, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(F3, 0, E::op2(M::vcvttps2dq, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(F3, 1, E::op2(M::vcvttps2dq, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x5C] = arith_ps_pd_sd_ss(M::vsubps, M::vsubpd, M::vsubsd, M::vsubss);
    t[0x5D] = arith_ps_pd_sd_ss(M::vminps, M::vminpd, M::vminsd, M::vminss);
    t[0x5E] = arith_ps_pd_sd_ss(M::vdivps, M::vdivpd, M::vdivsd, M::vdivss);
    t[0x5F] = arith_ps_pd_sd_ss(M::vmaxps, M::vmaxpd, M::vmaxsd, M::vmaxss);

    t[0x60] = int_binop_66(M::vpunpcklbw);
    t[0x61] = int_binop_66(M::vpunpcklwd);
    t[0x62] = int_binop_66(M::vpunpckldq);
    t[0x63] = int_binop_66(M::vpacksswb);
    t[0x64] = int_binop_66(M::vpcmpgtb);
    t[0x65] = int_binop_66(M::vpcmpgtw);
    t[0x66] = int_binop_66(M::vpcmpgtd);
    t[0x67] = int_binop_66(M::vpackuswb);
    t[0x68] = int_binop_66(M::vpunpckhbw);
    t[0x69] = int_binop_66(M::vpunpckhwd);
    t[0x6A] = int_binop_66(M::vpunpckhdq);
    t[0x6B] = int_binop_66(M::vpackssdw);
    t[0x6C] = int_binop_66(M::vpunpcklqdq);
    t[0x6D] = int_binop_66(M::vpunpckhqdq);

    t[0x6E] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vmovd, K::RegXmm, K::RegMem32))
        .both_mod(P66, 1, 0, E::op2(M::vmovq, K::RegXmm, K::RegMem64))
        .build();

    t[0x6F] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vmovdqa, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vmovdqa, K::RegYmm, K::RegYmmMem256))
        .both_mod_w(F3, 0, E::op2(M::vmovdqu, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(F3, 1, E::op2(M::vmovdqu, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x70] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vpshufd, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op3(M::vpshufd, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .both_mod_w(F2, 0, E::op3(M::vpshuflw, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(F2, 1, E::op3(M::vpshuflw, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .both_mod_w(F3, 0, E::op3(M::vpshufhw, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(F3, 1, E::op3(M::vpshufhw, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();

    t[0x71] = Builder::new()
        .at(true, P66, 0, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_71_L0))
        .at(true, P66, 1, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_71_L0))
        .at(true, P66, 0, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_71_L1))
        .at(true, P66, 1, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_71_L1))
        .build();
    t[0x72] = Builder::new()
        .at(true, P66, 0, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_72_L0))
        .at(true, P66, 1, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_72_L0))
        .at(true, P66, 0, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_72_L1))
        .at(true, P66, 1, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_72_L1))
        .build();
    t[0x73] = Builder::new()
        .at(true, P66, 0, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_73_L0))
        .at(true, P66, 1, 0, E::extension(ExtensionKind::Reg, &SHIFT_IMM_73_L0))
        .at(true, P66, 0, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_73_L1))
        .at(true, P66, 1, 1, E::extension(ExtensionKind::Reg, &SHIFT_IMM_73_L1))
        .build();

    t[0x74] = int_binop_66(M::vpcmpeqb);
    t[0x75] = int_binop_66(M::vpcmpeqw);
    t[0x76] = int_binop_66(M::vpcmpeqd);

    t[0x77] = Builder::new()
        .all(NONE, E::op0(M::vzeroupper))
        .both_mod_w(NONE, 1, E::op0(M::vzeroall))
        .build();

    t[0x7C] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vhaddpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(M::vhaddpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(F2, 0, E::op3(M::vhaddps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(F2, 1, E::op3(M::vhaddps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x7D] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vhsubpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(M::vhsubpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(F2, 0, E::op3(M::vhsubps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(F2, 1, E::op3(M::vhsubps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x7E] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vmovd, K::RegMem32, K::RegXmm))
        .both_mod(P66, 1, 0, E::op2(M::vmovq, K::RegMem64, K::RegXmm))
        .at(true, F3, 0, 0, E::op2(M::vmovq, K::RegXmm, K::RegXmmRm))
        .at(false, F3, 0, 0, E::op2(M::vmovq, K::RegXmm, K::Mem64))
        .build();

    t[0x7F] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vmovdqa, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(P66, 1, E::op2(M::vmovdqa, K::RegYmmMem256, K::RegYmm))
        .both_mod_w(F3, 0, E::op2(M::vmovdqu, K::RegXmmMem128, K::RegXmm))
        .both_mod_w(F3, 1, E::op2(M::vmovdqu, K::RegYmmMem256, K::RegYmm))
        .build();

    t[0xAE] = Builder::new()
        .at(false, NONE, 0, 0, E::extension(ExtensionKind::Reg, &MXCSR))
        .at(false, NONE, 1, 0, E::extension(ExtensionKind::Reg, &MXCSR))
        .build();

    t[0xC2] = Builder::new()
        .both_mod_w(NONE, 0, E::op4(M::vcmpps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(NONE, 1, E::op4(M::vcmpps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .both_mod_w(P66, 0, E::op4(M::vcmppd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vcmppd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .all(F2, E::op4(M::vcmpps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem64, K::Imm8))
        .all(F3, E::op4(M::vcmpss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32, K::Imm8))
        .build();

    t[0xC4] = Builder::new()
        .both_mod(P66, 0, 0, E::op4(M::vpinsrw, K::RegXmm, K::RegVvvvXmm, K::RegMem32Mem16, K::Imm8))
        .build();

    t[0xC5] = Builder::new()
        .at(true, P66, 0, 0, E::op3(M::vpextrw, K::Reg32, K::RegXmmRm, K::Imm8))
        .build();

    t[0xC6] = Builder::new()
        .both_mod_w(NONE, 0, E::op4(M::vshufps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(NONE, 1, E::op4(M::vshufps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .both_mod_w(P66, 0, E::op4(M::vshufpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vshufpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();

    t[0xD0] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vaddsubpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(M::vaddsubpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(F2, 0, E::op3(M::vaddsubps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(F2, 1, E::op3(M::vaddsubps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0xD1] = int_binop_66(M::vpsrlw);
    t[0xD2] = int_binop_66(M::vpsrld);
    t[0xD3] = int_binop_66(M::vpsrlq);
    t[0xD4] = int_binop_66(M::vpaddq);
    t[0xD5] = int_binop_66(M::vpmullw);

    t[0xD6] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vmovq, K::RegXmmMem64, K::RegXmm))
        .build();

    t[0xD7] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vpmovmskb, K::Reg32, K::RegXmmRm))
        .both_mod_w(P66, 1, E::op2(M::vpmovmskb, K::Reg32, K::RegYmmRm))
        .build();

    t[0xD8] = int_binop_66(M::vpsubusb);
    t[0xD9] = int_binop_66(M::vpsubusw);
    t[0xDA] = int_binop_66(M::vpminub);
    t[0xDB] = int_binop_66(M::vpand);
    t[0xDC] = int_binop_66(M::vpaddusb);
    t[0xDD] = int_binop_66(M::vpaddusw);
    t[0xDE] = int_binop_66(M::vpmaxub);
    t[0xDF] = int_binop_66(M::vpandn);

    t[0xE0] = int_binop_66(M::vpavgb);
    t[0xE1] = int_binop_66(M::vpsraw);
    t[0xE2] = int_binop_66(M::vpsrad);
    t[0xE3] = int_binop_66(M::vpavgw);
    t[0xE4] = int_binop_66(M::vpmulhuw);
    t[0xE5] = int_binop_66(M::vpmulhw);

    t[0xE6] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vcvttpd2dq, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vcvttpd2dq, K::RegYmm, K::RegYmmMem256))
        .both_mod(F2, 0, 0, E::op2(M::vcvtdq2pd, K::RegXmm, K::RegXmmMem128))
        .both_mod(F2, 0, 1, E::op2(M::vcvtdq2pd, K::RegXmm, K::RegYmmMem256))
        .both_mod(F3, 0, 0, E::op2(M::vcvtdq2pd, K::RegXmm, K::RegXmmMem64))
        .both_mod(F3, 0, 1, E::op2(M::vcvtdq2pd, K::RegYmm, K::RegXmmMem128))
        .build();

    t[0xE7] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vmovntdq, K::Mem128, K::RegXmm))
        .both_mod_w(P66, 1, E::op2(M::vmovntdq, K::Mem256, K::RegYmm))
        .build();

    t[0xE8] = int_binop_66(M::vpsubsb);
    t[0xE9] = int_binop_66(M::vpsubsw);
    t[0xEA] = int_binop_66(M::vpminsw);
    t[0xEB] = int_binop_66(M::vpor);
    t[0xEC] = int_binop_66(M::vpaddsb);
    t[0xED] = int_binop_66(M::vpaddsw);
    t[0xEE] = int_binop_66(M::vpmaxsw);
    t[0xEF] = int_binop_66(M::vpxor);

    t[0xF0] = Builder::new()
        .both_mod_w(F2, 0, E::op2(M::vlddqu, K::RegXmm, K::Mem128))
        .both_mod_w(F2, 1, E::op2(M::vlddqu, K::RegYmm, K::Mem256))
        .build();

    t[0xF1] = int_binop_66(M::vpsllw);
    t[0xF2] = int_binop_66(M::vpslld);
    t[0xF3] = int_binop_66(M::vpsllq);
    t[0xF4] = int_binop_66(M::vpmuludq);
    t[0xF5] = int_binop_66(M::vpmaddwd);
    t[0xF6] = int_binop_66(M::vpsadbw);

    t[0xF7] = Builder::new()
        .at(true, P66, 0, 0, E::op2(M::vmaskmovdqu, K::RegXmm, K::RegXmmRm))
        .build();

    t[0xF8] = int_binop_66(M::vpsubb);
    t[0xF9] = int_binop_66(M::vpsubw);
    t[0xFA] = int_binop_66(M::vpsubd);
    t[0xFB] = int_binop_66(M::vpsubq);
    t[0xFC] = int_binop_66(M::vpaddb);
    t[0xFD] = int_binop_66(M::vpaddw);
    t[0xFE] = int_binop_66(M::vpaddd);

    t
};

const fn binop_logic(ps: M, pd: M) -> Slots {
    Builder::new()
        .both_mod_w(NONE, 0, E::op3(ps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op3(ps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op3(pd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(pd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build()
}

const fn arith_ps_pd_sd_ss(ps: M, pd: M, sd: M, ss: M) -> Slots {
    Builder::new()
        .both_mod_w(NONE, 0, E::op3(ps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(NONE, 1, E::op3(ps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod_w(P66, 0, E::op3(pd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(pd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .all(F2, E::op3(sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem64))
        .all(F3, E::op3(ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build()
}

/// The overwhelming majority of the integer SSE2-on-VEX opcodes: 66-only,
/// both vector widths, no W fork.
const fn int_binop_66(mnemonic: M) -> Slots {
    Builder::new()
        .both_mod_w(P66, 0, E::op3(mnemonic, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op3(mnemonic, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build()
}

// -- Map 2: `0F 38`-escape VEX instructions (AVX2 integer, FMA3, BMI2) --------

pub static MAP2: [Slots; 256] = {
    let mut t = [BLANK_SLOTS; 256];

    t[0x00] = int_binop_66(M::vpshufb);
    t[0x01] = int_binop_66(M::vphaddw);
    t[0x02] = int_binop_66(M::vphaddd);
    t[0x03] = int_binop_66(M::vphaddsw);
    t[0x04] = int_binop_66(M::vpmaddubsw);
    t[0x05] = int_binop_66(M::vphsubw);
    t[0x06] = int_binop_66(M::vphsubd);
    t[0x07] = int_binop_66(M::vphsubsw);
    t[0x08] = int_binop_66(M::vpsignb);
    t[0x09] = int_binop_66(M::vpsignw);
    t[0x0A] = int_binop_66(M::vpsignd);
    t[0x0B] = int_binop_66(M::vpmulhrsw);

    t[0x0C] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpermilps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op3(M::vpermilps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x0D] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpermilpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op3(M::vpermilpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x0E] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vtestps, K::RegXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op2(M::vtestps, K::RegYmm, K::RegYmmMem256))
        .build();
    t[0x0F] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vtestpd, K::RegXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op2(M::vtestpd, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x13] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vcvtph2ps, K::RegXmm, K::RegXmmMem64))
        .both_mod(P66, 0, 1, E::op2(M::vcvtph2ps, K::RegYmm, K::RegXmmMem128))
        .build();

    t[0x16] = Builder::new()
        .both_mod(P66, 0, 1, E::op3(M::vpermps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x17] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vptest, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vptest, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x18] = Builder::new()
        .at(true, P66, 0, 0, E::op2(M::vbroadcastss, K::RegXmm, K::RegXmmRm))
        .at(false, P66, 0, 0, E::op2(M::vbroadcastss, K::RegXmm, K::Mem32))
        .at(true, P66, 0, 1, E::op2(M::vbroadcastss, K::RegYmm, K::RegXmmRm))
        .at(false, P66, 0, 1, E::op2(M::vbroadcastss, K::RegYmm, K::Mem32))
        .build();
    t[0x19] = Builder::new()
        .at(true, P66, 0, 1, E::op2(M::vbroadcastsd, K::RegYmm, K::RegXmmRm))
        .at(false, P66, 0, 1, E::op2(M::vbroadcastsd, K::RegYmm, K::Mem64))
        .build();
    t[0x1A] = Builder::new()
        .both_mod(P66, 0, 1, E::op2(M::vbroadcastf128, K::RegYmm, K::Mem128))
        .build();

    t[0x1C] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vpabsb, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vpabsb, K::RegYmm, K::RegYmmMem256))
        .build();
    t[0x1D] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vpabsw, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vpabsw, K::RegYmm, K::RegYmmMem256))
        .build();
    t[0x1E] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vpabsd, K::RegXmm, K::RegXmmMem128))
        .both_mod_w(P66, 1, E::op2(M::vpabsd, K::RegYmm, K::RegYmmMem256))
        .build();

    t[0x20] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxbw, K::RegXmm, K::RegXmmMem64))
        .build();
    t[0x21] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxbd, K::RegXmm, K::RegXmmMem32))
        .build();
    t[0x22] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxbq, K::RegXmm, K::RegXmmMem16))
        .build();
    t[0x23] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxwd, K::RegXmm, K::RegXmmMem64))
        .build();
    t[0x24] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxwq, K::RegXmm, K::RegXmmMem32))
        .build();
    t[0x25] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovsxdq, K::RegXmm, K::RegXmmMem64))
        .build();

    t[0x28] = int_binop_66(M::vpmuldq);
    t[0x29] = int_binop_66(M::vpcmpeqq);
    t[0x2A] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vmovntdqa, K::RegXmm, K::Mem128))
        .build();
    t[0x2B] = int_binop_66(M::vpackusdw);

    t[0x30] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxbw, K::RegXmm, K::RegXmmMem64))
        .build();
    t[0x31] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxbd, K::RegXmm, K::RegXmmMem32))
        .build();
    t[0x32] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxbq, K::RegXmm, K::RegXmmMem16))
        .build();
    t[0x33] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxwd, K::RegXmm, K::RegXmmMem64))
        .build();
    t[0x34] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxwq, K::RegXmm, K::RegXmmMem32))
        .build();
    t[0x35] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpmovzxdq, K::RegXmm, K::RegXmmMem64))
        .build();
    t[0x36] = Builder::new()
        .both_mod(P66, 0, 1, E::op3(M::vpermd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x37] = int_binop_66(M::vpcmpgtq);

    t[0x38] = int_binop_66(M::vpminsb);
    t[0x39] = int_binop_66(M::vpminsd);
    t[0x3A] = int_binop_66(M::vpminuw);
    t[0x3B] = int_binop_66(M::vpminud);
    t[0x3C] = int_binop_66(M::vpmaxsb);
    t[0x3D] = int_binop_66(M::vpmaxsd);
    t[0x3E] = int_binop_66(M::vpmaxuw);
    t[0x3F] = int_binop_66(M::vpmaxud);

    t[0x40] = int_binop_66(M::vpmulld);
    t[0x41] = Builder::new()
        .both_mod_w(P66, 0, E::op2(M::vphminposuw, K::RegXmm, K::RegXmmMem128))
        .build();

    t[0x45] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpsrlvd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op3(M::vpsrlvd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod(P66, 1, 0, E::op3(M::vpsrlvq, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 1, 1, E::op3(M::vpsrlvq, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x46] = Builder::new()
        .both_mod(P66, 0, 1, E::op4(M::vperm2i128, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x47] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpsllvd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op3(M::vpsllvd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod(P66, 1, 0, E::op3(M::vpsllvq, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 1, 1, E::op3(M::vpsllvq, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();

    t[0x58] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpbroadcastd, K::RegXmm, K::RegXmmMem32))
        .both_mod(P66, 0, 1, E::op2(M::vpbroadcastd, K::RegYmm, K::RegXmmMem32))
        .build();
    t[0x59] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpbroadcastq, K::RegXmm, K::RegXmmMem64))
        .both_mod(P66, 0, 1, E::op2(M::vpbroadcastq, K::RegYmm, K::RegXmmMem64))
        .build();
    t[0x5A] = Builder::new()
        .both_mod(P66, 0, 1, E::op2(M::vbroadcasti128, K::RegYmm, K::Mem128))
        .build();

    t[0x78] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpbroadcastb, K::RegXmm, K::RegXmmMem8))
        .both_mod(P66, 0, 1, E::op2(M::vpbroadcastb, K::RegYmm, K::RegXmmMem8))
        .build();
    t[0x79] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vpbroadcastw, K::RegXmm, K::RegXmmMem16))
        .both_mod(P66, 0, 1, E::op2(M::vpbroadcastw, K::RegYmm, K::RegXmmMem16))
        .build();

    t[0x8C] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpmaskmovd, K::RegXmm, K::RegVvvvXmm, K::Mem128))
        .both_mod(P66, 0, 1, E::op3(M::vpmaskmovd, K::RegYmm, K::RegVvvvYmm, K::Mem256))
        .both_mod(P66, 1, 0, E::op3(M::vpmaskmovq, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 1, 1, E::op3(M::vpmaskmovq, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build();
    t[0x8E] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpmaskmovd, K::Mem128, K::RegVvvvXmm, K::RegXmm))
        .both_mod(P66, 0, 1, E::op3(M::vpmaskmovd, K::Mem256, K::RegVvvvYmm, K::RegYmm))
        .both_mod(P66, 1, 0, E::op3(M::vpmaskmovq, K::RegXmmMem128, K::RegVvvvXmm, K::RegXmm))
        .both_mod(P66, 1, 1, E::op3(M::vpmaskmovq, K::RegYmmMem256, K::RegVvvvYmm, K::RegYmm))
        .build();

    // AVX2 gather: recognised, flagged unsupported by `OperandKind::is_unsupported`
    // and materialised as an `R15` placeholder (see `resolver`). Modelling the
    // mask-register write-back and the VSIB-fault semantics faithfully is out
    // of scope for this decoder.
    t[0x90] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpgatherdd, K::RegXmm, K::VsibXmm32, K::RegVvvvXmm))
        .both_mod(P66, 0, 1, E::op3(M::vpgatherdd, K::RegYmm, K::VsibYmm32, K::RegVvvvYmm))
        .build();
    t[0x91] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpgatherqd, K::RegXmm, K::VsibXmm64, K::RegVvvvXmm))
        .both_mod(P66, 0, 1, E::op3(M::vpgatherqd, K::RegYmm, K::VsibYmm64, K::RegVvvvYmm))
        .build();
    t[0x92] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vgatherdps, K::RegXmm, K::VsibXmm32, K::RegVvvvXmm))
        .both_mod(P66, 0, 1, E::op3(M::vgatherdps, K::RegYmm, K::VsibYmm32, K::RegVvvvYmm))
        .build();
    t[0x93] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vgatherqps, K::RegXmm, K::VsibXmm64, K::RegVvvvXmm))
        .both_mod(P66, 0, 1, E::op3(M::vgatherqps, K::RegYmm, K::VsibYmm64, K::RegVvvvYmm))
        .build();

    t[0x96] = fma3_132_213_231(M::vfmaddsub132ps, M::vfmaddsub132pd);
    t[0x97] = fma3_132_213_231(M::vfmsubadd132ps, M::vfmsubadd132pd);
    t[0x98] = fma3_132_213_231(M::vfmadd132ps, M::vfmadd132pd);
    t[0x99] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmadd132ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmadd132sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0x9A] = fma3_132_213_231(M::vfmsub132ps, M::vfmsub132pd);
    t[0x9B] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmsub132ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmsub132sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0x9C] = fma3_132_213_231(M::vfnmadd132ps, M::vfnmadd132pd);
    t[0x9D] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmadd132ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmadd132sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0x9E] = fma3_132_213_231(M::vfnmsub132ps, M::vfnmsub132pd);
    t[0x9F] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmsub132ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmsub132sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0xA6] = fma3_132_213_231(M::vfmaddsub213ps, M::vfmaddsub213pd);
    t[0xA7] = fma3_132_213_231(M::vfmsubadd213ps, M::vfmsubadd213pd);
    t[0xA8] = fma3_132_213_231(M::vfmadd213ps, M::vfmadd213pd);
    t[0xA9] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmadd213ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmadd213sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xAA] = fma3_132_213_231(M::vfmsub213ps, M::vfmsub213pd);
    t[0xAB] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmsub213ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmsub213sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xAC] = fma3_132_213_231(M::vfnmadd213ps, M::vfnmadd213pd);
    t[0xAD] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmadd213ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmadd213sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xAE] = fma3_132_213_231(M::vfnmsub213ps, M::vfnmsub213pd);
    t[0xAF] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmsub213ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmsub213sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0xB6] = fma3_132_213_231(M::vfmaddsub231ps, M::vfmaddsub231pd);
    t[0xB7] = fma3_132_213_231(M::vfmsubadd231ps, M::vfmsubadd231pd);
    t[0xB8] = fma3_132_213_231(M::vfmadd231ps, M::vfmadd231pd);
    t[0xB9] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmadd231ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmadd231sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xBA] = fma3_132_213_231(M::vfmsub231ps, M::vfmsub231pd);
    t[0xBB] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfmsub231ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfmsub231sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xBC] = fma3_132_213_231(M::vfnmadd231ps, M::vfnmadd231pd);
    t[0xBD] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmadd231ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmadd231sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();
    t[0xBE] = fma3_132_213_231(M::vfnmsub231ps, M::vfnmsub231pd);
    t[0xBF] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vfnmsub231ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .both_mod(P66, 1, 0, E::op3(M::vfnmsub231sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32))
        .build();

    t[0xDB] = Builder::new()
        .both_mod(P66, 0, 0, E::op2(M::vaesimc, K::RegXmm, K::RegXmmMem128))
        .build();
    t[0xDC] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vaesenc, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .build();
    t[0xDD] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vaesenclast, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .build();
    t[0xDE] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vaesdec, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .build();
    t[0xDF] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vaesdeclast, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .build();

    // BMI1 / BMI2 / ADX: the unprefixed channel in the `0F 38` map.
    t[0xF2] = Builder::new()
        .both_mod(NONE, 0, 0, E::op3(M::andn, K::Reg32, K::RegVvvvNative, K::RegMem32))
        .both_mod(NONE, 1, 0, E::op3(M::andn, K::Reg64, K::RegVvvvNative, K::RegMem64))
        .build();

    t[0xF3] = Builder::new()
        .at(false, NONE, 0, 0, E::extension(ExtensionKind::Reg, &BMI_F3_W0))
        .at(true, NONE, 0, 0, E::extension(ExtensionKind::Reg, &BMI_F3_W0))
        .at(false, NONE, 1, 0, E::extension(ExtensionKind::Reg, &BMI_F3_W1))
        .at(true, NONE, 1, 0, E::extension(ExtensionKind::Reg, &BMI_F3_W1))
        .build();

    t[0xF5] = Builder::new()
        .both_mod(NONE, 0, 0, E::op3(M::bzhi, K::Reg32, K::RegMem32, K::RegVvvvNative))
        .both_mod(NONE, 1, 0, E::op3(M::bzhi, K::Reg64, K::RegMem64, K::RegVvvvNative))
        .both_mod(F2, 0, 0, E::op3(M::pdep, K::Reg32, K::RegVvvvNative, K::RegMem32))
        .both_mod(F2, 1, 0, E::op3(M::pdep, K::Reg64, K::RegVvvvNative, K::RegMem64))
        .both_mod(F3, 0, 0, E::op3(M::pext, K::Reg32, K::RegVvvvNative, K::RegMem32))
        .both_mod(F3, 1, 0, E::op3(M::pext, K::Reg64, K::RegVvvvNative, K::RegMem64))
        .build();

    t[0xF6] = Builder::new()
        .both_mod(F2, 0, 0, E::op3(M::mulx, K::Reg32, K::RegVvvvNative, K::RegMem32))
        .both_mod(F2, 1, 0, E::op3(M::mulx, K::Reg64, K::RegVvvvNative, K::RegMem64))
        .build();

    t[0xF7] = Builder::new()
        .both_mod(NONE, 0, 0, E::op3(M::bextr, K::Reg32, K::RegMem32, K::RegVvvvNative))
        .both_mod(NONE, 1, 0, E::op3(M::bextr, K::Reg64, K::RegMem64, K::RegVvvvNative))
        .both_mod(P66, 0, 0, E::op3(M::shlx, K::Reg32, K::RegMem32, K::RegVvvvNative))
        .both_mod(P66, 1, 0, E::op3(M::shlx, K::Reg64, K::RegMem64, K::RegVvvvNative))
        .both_mod(F2, 0, 0, E::op3(M::shrx, K::Reg32, K::RegMem32, K::RegVvvvNative))
        .both_mod(F2, 1, 0, E::op3(M::shrx, K::Reg64, K::RegMem64, K::RegVvvvNative))
        .both_mod(F3, 0, 0, E::op3(M::sarx, K::Reg32, K::RegMem32, K::RegVvvvNative))
        .both_mod(F3, 1, 0, E::op3(M::sarx, K::Reg64, K::RegMem64, K::RegVvvvNative))
        .build();

    t
};

/// Builds the `{132,213,231}xx` FMA3 packed-single/packed-double pair that
/// almost every FMA3 opcode byte reduces to (W selects pd vs ps, L selects
/// ymm vs xmm).
const fn fma3_132_213_231(ps: M, pd: M) -> Slots {
    Builder::new()
        .both_mod(P66, 0, 0, E::op3(ps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 0, 1, E::op3(ps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .both_mod(P66, 1, 0, E::op3(pd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128))
        .both_mod(P66, 1, 1, E::op3(pd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256))
        .build()
}

/// An FMA4 packed form: same opcode byte, W forks ps/pd, L forks xmm/ymm.
/// VEX.W also swaps which physical field (ModR/M.rm or the trailing imm8's
/// high nibble) carries the second vs. third source, but the decoder always
/// reads ModR/M.rm into operand index 2 and the imm8 nibble into index 3
/// regardless, so no extra fork is needed for that.
const fn fma4_packed(ps: M, pd: M) -> Slots {
    Builder::new()
        .both_mod(NONE, 0, 0, E::op4(ps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::RegXmmTrailingImm8HighNib))
        .both_mod(NONE, 0, 1, E::op4(ps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::RegYmmTrailingImm8HighNib))
        .both_mod(NONE, 1, 0, E::op4(pd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::RegXmmTrailingImm8HighNib))
        .both_mod(NONE, 1, 1, E::op4(pd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::RegYmmTrailingImm8HighNib))
        .build()
}

/// An FMA4 scalar form: W forks ss/sd. L is reserved (must be 0) for scalar
/// forms, matching the FMA3 scalar entries above, so only L=0 is populated.
const fn fma4_scalar(ss: M, sd: M) -> Slots {
    Builder::new()
        .both_mod(NONE, 0, 0, E::op4(ss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32, K::RegXmmTrailingImm8HighNib))
        .both_mod(NONE, 1, 0, E::op4(sd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem64, K::RegXmmTrailingImm8HighNib))
        .build()
}

// -- Map 3: `0F 3A`-escape VEX instructions (SSE4.1-derived imm8 forms, ----
// -- AVX2 permutes, FMA4, RORX) -----------------------------------------------

pub static MAP3: [Slots; 256] = {
    let mut t = [BLANK_SLOTS; 256];

    t[0x00] = Builder::new()
        .both_mod(P66, 1, 1, E::op3(M::vpermq, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x01] = Builder::new()
        .both_mod(P66, 1, 1, E::op3(M::vpermpd, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x02] = Builder::new()
        .both_mod(P66, 0, 0, E::op4(M::vpblendd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod(P66, 0, 1, E::op4(M::vpblendd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x04] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpermilps, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod(P66, 0, 1, E::op3(M::vpermilps, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x05] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpermilpd, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod(P66, 0, 1, E::op3(M::vpermilpd, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x06] = Builder::new()
        .both_mod(P66, 0, 1, E::op4(M::vperm2f128, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();

    t[0x08] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vroundps, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op3(M::vroundps, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x09] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vroundpd, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op3(M::vroundpd, K::RegYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x0A] = Builder::new()
        .all(P66, E::op4(M::vroundss, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32, K::Imm8))
        .build();
    t[0x0B] = Builder::new()
        .all(P66, E::op4(M::vroundsd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32, K::Imm8))
        .build();
    t[0x0C] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vblendps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vblendps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x0D] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vblendpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vblendpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x0E] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vpblendw, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vpblendw, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x0F] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vpalignr, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vpalignr, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();

    t[0x14] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpextrb, K::RegMem8, K::RegXmm, K::Imm8))
        .build();
    t[0x15] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpextrw, K::RegMem16, K::RegXmm, K::Imm8))
        .build();
    t[0x16] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vpextrd, K::RegMem32, K::RegXmm, K::Imm8))
        .both_mod(P66, 1, 0, E::op3(M::vpextrq, K::RegMem64, K::RegXmm, K::Imm8))
        .build();
    t[0x17] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vextractps, K::RegMem32, K::RegXmm, K::Imm8))
        .build();

    t[0x18] = Builder::new()
        .both_mod(P66, 0, 1, E::op4(M::vinsertf128, K::RegYmm, K::RegVvvvYmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x19] = Builder::new()
        .both_mod(P66, 0, 1, E::op3(M::vextractf128, K::RegXmmMem128, K::RegYmm, K::Imm8))
        .build();
    t[0x1D] = Builder::new()
        .both_mod(P66, 0, 0, E::op3(M::vcvtps2ph, K::RegXmmMem64, K::RegXmm, K::Imm8))
        .both_mod(P66, 0, 1, E::op3(M::vcvtps2ph, K::RegXmmMem128, K::RegYmm, K::Imm8))
        .build();

    t[0x20] = Builder::new()
        .both_mod(P66, 0, 0, E::op4(M::vpinsrb, K::RegXmm, K::RegVvvvXmm, K::RegMem32Mem8, K::Imm8))
        .build();
    t[0x21] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vinsertps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem32, K::Imm8))
        .build();
    t[0x22] = Builder::new()
        .both_mod(P66, 0, 0, E::op4(M::vpinsrd, K::RegXmm, K::RegVvvvXmm, K::RegMem32, K::Imm8))
        .both_mod(P66, 1, 0, E::op4(M::vpinsrq, K::RegXmm, K::RegVvvvXmm, K::RegMem64, K::Imm8))
        .build();

    t[0x38] = Builder::new()
        .both_mod(P66, 0, 1, E::op4(M::vinserti128, K::RegYmm, K::RegVvvvYmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x39] = Builder::new()
        .both_mod(P66, 0, 1, E::op3(M::vextracti128, K::RegXmmMem128, K::RegYmm, K::Imm8))
        .build();

    // FMA4: AMD's four-operand is4-selected multiply-add forms. VEX.W picks
    // ps vs. pd (or ss vs. sd) rather than forking the opcode byte; L picks
    // xmm vs. ymm for the packed forms (the scalar forms have no ymm form).
    t[0x68] = fma4_packed(M::vfmaddps, M::vfmaddpd);
    t[0x69] = fma4_scalar(M::vfmaddss, M::vfmaddsd);
    t[0x6A] = fma4_packed(M::vfmaddsubps, M::vfmaddsubpd);
    t[0x6B] = fma4_packed(M::vfmsubaddps, M::vfmsubaddpd);
    t[0x6C] = fma4_packed(M::vfmsubps, M::vfmsubpd);
    t[0x6D] = fma4_scalar(M::vfmsubss, M::vfmsubsd);
    t[0x6E] = fma4_packed(M::vfnmaddps, M::vfnmaddpd);
    t[0x6F] = fma4_scalar(M::vfnmaddss, M::vfnmaddsd);
    t[0x78] = fma4_packed(M::vfnmsubps, M::vfnmsubpd);
    t[0x79] = fma4_scalar(M::vfnmsubss, M::vfnmsubsd);

    t[0x40] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vdpps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vdpps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x41] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vdppd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x42] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vmpsadbw, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .both_mod_w(P66, 1, E::op4(M::vmpsadbw, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::Imm8))
        .build();
    t[0x44] = Builder::new()
        .both_mod_w(P66, 0, E::op4(M::vpclmulqdq, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::Imm8))
        .build();

    t[0x4A] = Builder::new()
        .both_mod_w(NONE, 0, E::op4(M::vblendvps, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::RegXmmTrailingImm8HighNib))
        .both_mod_w(NONE, 1, E::op4(M::vblendvps, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::RegYmmTrailingImm8HighNib))
        .build();
    t[0x4B] = Builder::new()
        .both_mod_w(NONE, 0, E::op4(M::vblendvpd, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::RegXmmTrailingImm8HighNib))
        .both_mod_w(NONE, 1, E::op4(M::vblendvpd, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::RegYmmTrailingImm8HighNib))
        .build();
    t[0x4C] = Builder::new()
        .both_mod_w(NONE, 0, E::op4(M::vpblendvb, K::RegXmm, K::RegVvvvXmm, K::RegXmmMem128, K::RegXmmTrailingImm8HighNib))
        .both_mod_w(NONE, 1, E::op4(M::vpblendvb, K::RegYmm, K::RegVvvvYmm, K::RegYmmMem256, K::RegYmmTrailingImm8HighNib))
        .build();

    t[0x60] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vpcmpestrm, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x61] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vpcmpestri, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x62] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vpcmpistrm, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .build();
    t[0x63] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vpcmpistri, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .build();

    t[0xDF] = Builder::new()
        .both_mod_w(P66, 0, E::op3(M::vaeskeygenassist, K::RegXmm, K::RegXmmMem128, K::Imm8))
        .build();

    // BMI2: RORX reads only its source and an immediate -- VEX.vvvv is
    // reserved-must-be-1111 and carries no operand.
    t[0xF0] = Builder::new()
        .both_mod(F2, 0, 0, E::op3(M::rorx, K::Reg32, K::RegMem32, K::Imm8))
        .both_mod(F2, 1, 0, E::op3(M::rorx, K::Reg64, K::RegMem64, K::Imm8))
        .build();

    t
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::entry::TableEntry;

    fn terminal_at(slots: &Slots, mod3: bool, prefix: u8, w: u8, l: u8) -> TableEntry {
        slots[key(mod3, prefix, w, l)]
    }

    #[test]
    fn vmovsd_forks_on_mod_for_memory_vs_register_form() {
        match terminal_at(&MAP1[0x10], true, F2, 0, 0) {
            TableEntry::Terminal { mnemonic, operand_count, .. } => {
                assert_eq!(mnemonic, M::vmovsd);
                assert_eq!(operand_count, 3);
            }
            _ => panic!("expected terminal"),
        }
        match terminal_at(&MAP1[0x10], false, F2, 0, 0) {
            TableEntry::Terminal { mnemonic, operand_count, .. } => {
                assert_eq!(mnemonic, M::vmovsd);
                assert_eq!(operand_count, 2);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn vbroadcastss_has_distinct_register_and_memory_terminals() {
        match terminal_at(&MAP2[0x18], true, P66, 0, 0) {
            TableEntry::Terminal { operands, .. } => assert_eq!(operands[1], K::RegXmmRm),
            _ => panic!("expected terminal"),
        }
        match terminal_at(&MAP2[0x18], false, P66, 0, 0) {
            TableEntry::Terminal { operands, .. } => assert_eq!(operands[1], K::Mem32),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn vzeroupper_and_vzeroall_fork_on_l() {
        match terminal_at(&MAP1[0x77], false, NONE, 0, 0) {
            TableEntry::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::vzeroupper),
            _ => panic!("expected terminal"),
        }
        match terminal_at(&MAP1[0x77], false, NONE, 0, 1) {
            TableEntry::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::vzeroall),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn vpsrlw_immediate_group_is_a_reg_extension_forked_on_l() {
        match terminal_at(&MAP1[0x71], true, P66, 0, 0) {
            TableEntry::Extension { kind, table } => {
                assert_eq!(kind, ExtensionKind::Reg);
                match table[2] {
                    TableEntry::Terminal { mnemonic, operands, .. } => {
                        assert_eq!(mnemonic, M::vpsrlw);
                        assert_eq!(operands[0], K::RegVvvvXmm);
                    }
                    _ => panic!("expected terminal"),
                }
            }
            _ => panic!("expected extension"),
        }
    }

    #[test]
    fn bextr_is_the_vex_encoded_form_distinct_from_the_legacy_group7_bt_family() {
        match terminal_at(&MAP2[0xF7], false, NONE, 0, 0) {
            TableEntry::Terminal { mnemonic, operand_count, .. } => {
                assert_eq!(mnemonic, M::bextr);
                assert_eq!(operand_count, 3);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn mulx_reads_an_implicit_rdx_multiplicand_via_vvvv() {
        match terminal_at(&MAP2[0xF6], false, F2, 1, 0) {
            TableEntry::Terminal { mnemonic, operands, .. } => {
                assert_eq!(mnemonic, M::mulx);
                assert_eq!(operands[1], K::RegVvvvNative);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn fma3_132_form_keys_pd_on_w1_and_ymm_on_l1() {
        match terminal_at(&MAP2[0x98], false, P66, 1, 1) {
            TableEntry::Terminal { mnemonic, operands, .. } => {
                assert_eq!(mnemonic, M::vfmadd132pd);
                assert_eq!(operands[0], K::RegYmm);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn vblendvps_takes_its_mask_from_a_trailing_imm8_high_nibble() {
        match terminal_at(&MAP3[0x4A], false, NONE, 0, 0) {
            TableEntry::Terminal { operands, operand_count, .. } => {
                assert_eq!(operand_count, 4);
                assert_eq!(operands[3], K::RegXmmTrailingImm8HighNib);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn rorx_has_no_vvvv_operand() {
        match terminal_at(&MAP3[0xF0], false, F2, 0, 0) {
            TableEntry::Terminal { operand_count, .. } => assert_eq!(operand_count, 3),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn unused_opcode_bytes_are_entirely_blank() {
        assert!(MAP1[0x00].iter().all(|e| !e.present()));
        assert!(MAP2[0xFF].iter().all(|e| !e.present()));
        assert!(MAP3[0xFF].iter().all(|e| !e.present()));
    }
}
