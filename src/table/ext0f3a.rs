//! The three-byte `0F 3A` opcode map: SSE4.1 immediate-carrying instructions
//! (ROUND*, BLEND*, PEXTR*/PINSR*, AES-NI key generation, PCLMULQDQ, the
//! string-compare intrinsics) plus the one SSSE3 holdout, PALIGNR.

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::{ExtensionKind, TableEntry as E};

pub static PREFIX_NONE: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x0F] = E::op3(M::palignr, K::RegMmx, K::RegMmxMem64, K::Imm8);
    t
};

const EXT_22_REXW: [E; 2] = [
    E::op3(M::pinsrd, K::RegXmm, K::RegMem32, K::Imm8),
    E::op3(M::pinsrq, K::RegXmm, K::RegMem64, K::Imm8),
];

pub static PREFIX_66: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x08] = E::op3(M::roundps, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x09] = E::op3(M::roundpd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x0A] = E::op3(M::roundss, K::RegXmm, K::RegXmmMem32, K::Imm8);
    t[0x0B] = E::op3(M::roundsd, K::RegXmm, K::RegXmmMem64, K::Imm8);
    t[0x0C] = E::op3(M::blendps, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x0D] = E::op3(M::blendpd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x0E] = E::op3(M::pblendw, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x0F] = E::op3(M::palignr, K::RegXmm, K::RegXmmMem128, K::Imm8);

    t[0x14] = E::op3(M::pextrb, K::RegMem8, K::RegXmm, K::Imm8);
    t[0x15] = E::op3(M::pextrw, K::RegMem16, K::RegXmm, K::Imm8);
    t[0x16] = E::op3(M::pextrd, K::RegMem32, K::RegXmm, K::Imm8);
    t[0x17] = E::op3(M::extractps, K::RegMem32, K::RegXmm, K::Imm8);

    t[0x20] = E::op3(M::pinsrb, K::RegXmm, K::RegMem32Mem8, K::Imm8);
    t[0x21] = E::op3(M::pinsrw, K::RegXmm, K::RegXmmMem32, K::Imm8);
    t[0x22] = E::extension(ExtensionKind::RexW, &EXT_22_REXW);

    t[0x40] = E::op3(M::dpps, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x41] = E::op3(M::dppd, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x42] = E::op3(M::mpsadbw, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x44] = E::op3(M::pclmulqdq, K::RegXmm, K::RegXmmMem128, K::Imm8);

    t[0x60] = E::op3(M::pcmpestrm, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x61] = E::op3(M::pcmpestri, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x62] = E::op3(M::pcmpistrm, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t[0x63] = E::op3(M::pcmpistri, K::RegXmm, K::RegXmmMem128, K::Imm8);

    t[0xDF] = E::op3(M::aeskeygenassist, K::RegXmm, K::RegXmmMem128, K::Imm8);
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pinsrd_pinsrq_fork_on_rex_w() {
        match EXT_22_REXW[1] {
            E::Terminal { mnemonic, operands, .. } => {
                assert_eq!(mnemonic, M::pinsrq);
                assert_eq!(operands[1], K::RegMem64);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn palignr_exists_in_both_the_mmx_and_xmm_channels() {
        assert!(PREFIX_NONE[0x0F].present());
        assert!(PREFIX_66[0x0F].present());
    }
}
