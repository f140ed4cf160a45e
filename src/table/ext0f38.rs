//! The three-byte `0F 38` opcode map: supplemental SSSE3/SSE4.1/AES-NI
//! opcodes, one 256-entry table per mandatory-prefix channel. Unlike the
//! `0F` map there is no unprefixed channel worth populating -- every
//! instruction in this escape needs a mandatory prefix to disambiguate from
//! plain SSSE3 MMX forms or is itself the MMX form under "no prefix".

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::TableEntry as E;

pub static PREFIX_NONE: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x00] = E::op2(M::pshufb, K::RegMmx, K::RegMmxMem64);
    t[0x01] = E::op2(M::phaddw, K::RegMmx, K::RegMmxMem64);
    t[0x02] = E::op2(M::phaddd, K::RegMmx, K::RegMmxMem64);
    t[0x03] = E::op2(M::phaddsw, K::RegMmx, K::RegMmxMem64);
    t[0x04] = E::op2(M::pmaddubsw, K::RegMmx, K::RegMmxMem64);
    t[0x05] = E::op2(M::phsubw, K::RegMmx, K::RegMmxMem64);
    t[0x06] = E::op2(M::phsubd, K::RegMmx, K::RegMmxMem64);
    t[0x07] = E::op2(M::phsubsw, K::RegMmx, K::RegMmxMem64);

    t[0x08] = E::op2(M::psignb, K::RegMmx, K::RegMmxMem64);
    t[0x09] = E::op2(M::psignw, K::RegMmx, K::RegMmxMem64);
    t[0x0A] = E::op2(M::psignd, K::RegMmx, K::RegMmxMem64);
    t[0x0B] = E::op2(M::pmulhrsw, K::RegMmx, K::RegMmxMem64);

    t[0x1C] = E::op2(M::pabsb, K::RegMmx, K::RegMmxMem64);
    t[0x1D] = E::op2(M::pabsw, K::RegMmx, K::RegMmxMem64);
    t[0x1E] = E::op2(M::pabsd, K::RegMmx, K::RegMmxMem64);

    t[0xF0] = E::op2(M::movbe, K::Reg32, K::Mem32);
    t[0xF1] = E::op2(M::movbe, K::Mem32, K::Reg32);
    t
};

pub static PREFIX_66: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x00] = E::op2(M::pshufb, K::RegXmm, K::RegXmmMem128);
    t[0x01] = E::op2(M::phaddw, K::RegXmm, K::RegXmmMem128);
    t[0x02] = E::op2(M::phaddd, K::RegXmm, K::RegXmmMem128);
    t[0x03] = E::op2(M::phaddsw, K::RegXmm, K::RegXmmMem128);
    t[0x04] = E::op2(M::pmaddubsw, K::RegXmm, K::RegXmmMem128);
    t[0x05] = E::op2(M::phsubw, K::RegXmm, K::RegXmmMem128);
    t[0x06] = E::op2(M::phsubd, K::RegXmm, K::RegXmmMem128);
    t[0x07] = E::op2(M::phsubsw, K::RegXmm, K::RegXmmMem128);

    t[0x08] = E::op2(M::psignb, K::RegXmm, K::RegXmmMem128);
    t[0x09] = E::op2(M::psignw, K::RegXmm, K::RegXmmMem128);
    t[0x0A] = E::op2(M::psignd, K::RegXmm, K::RegXmmMem128);
    t[0x0B] = E::op2(M::pmulhrsw, K::RegXmm, K::RegXmmMem128);

    t[0x10] = E::op3(M::pblendvb, K::RegXmm, K::RegXmmMem128, K::ImplicitXmm0);
    t[0x14] = E::op3(M::blendvps, K::RegXmm, K::RegXmmMem128, K::ImplicitXmm0);
    t[0x15] = E::op3(M::blendvpd, K::RegXmm, K::RegXmmMem128, K::ImplicitXmm0);
    t[0x17] = E::op2(M::ptest, K::RegXmm, K::RegXmmMem128);

    t[0x1C] = E::op2(M::pabsb, K::RegXmm, K::RegXmmMem128);
    t[0x1D] = E::op2(M::pabsw, K::RegXmm, K::RegXmmMem128);
    t[0x1E] = E::op2(M::pabsd, K::RegXmm, K::RegXmmMem128);

    t[0x20] = E::op2(M::pmovsxbw, K::RegXmm, K::RegXmmMem64);
    t[0x21] = E::op2(M::pmovsxbd, K::RegXmm, K::RegXmmMem32);
    t[0x22] = E::op2(M::pmovsxbq, K::RegXmm, K::RegXmmMem16);
    t[0x23] = E::op2(M::pmovsxwd, K::RegXmm, K::RegXmmMem64);
    t[0x24] = E::op2(M::pmovsxwq, K::RegXmm, K::RegXmmMem32);
    t[0x25] = E::op2(M::pmovsxdq, K::RegXmm, K::RegXmmMem64);

    t[0x28] = E::op2(M::pmuldq, K::RegXmm, K::RegXmmMem128);
    t[0x29] = E::op2(M::pcmpeqq, K::RegXmm, K::RegXmmMem128);
    t[0x2A] = E::op2(M::movntdqa, K::RegXmm, K::Mem128);
    t[0x2B] = E::op2(M::packusdw, K::RegXmm, K::RegXmmMem128);

    t[0x30] = E::op2(M::pmovzxbw, K::RegXmm, K::RegXmmMem64);
    t[0x31] = E::op2(M::pmovzxbd, K::RegXmm, K::RegXmmMem32);
    t[0x32] = E::op2(M::pmovzxbq, K::RegXmm, K::RegXmmMem16);
    t[0x33] = E::op2(M::pmovzxwd, K::RegXmm, K::RegXmmMem64);
    t[0x34] = E::op2(M::pmovzxwq, K::RegXmm, K::RegXmmMem32);
    t[0x35] = E::op2(M::pmovzxdq, K::RegXmm, K::RegXmmMem64);
    t[0x37] = E::op2(M::pcmpgtq, K::RegXmm, K::RegXmmMem128);

    t[0x38] = E::op2(M::pminsb, K::RegXmm, K::RegXmmMem128);
    t[0x39] = E::op2(M::pminsd, K::RegXmm, K::RegXmmMem128);
    t[0x3A] = E::op2(M::pminuw, K::RegXmm, K::RegXmmMem128);
    t[0x3B] = E::op2(M::pminud, K::RegXmm, K::RegXmmMem128);
    t[0x3C] = E::op2(M::pmaxsb, K::RegXmm, K::RegXmmMem128);
    t[0x3D] = E::op2(M::pmaxsd, K::RegXmm, K::RegXmmMem128);
    t[0x3E] = E::op2(M::pmaxuw, K::RegXmm, K::RegXmmMem128);
    t[0x3F] = E::op2(M::pmaxud, K::RegXmm, K::RegXmmMem128);

    t[0x40] = E::op2(M::pmulld, K::RegXmm, K::RegXmmMem128);
    t[0x41] = E::op2(M::phminposuw, K::RegXmm, K::RegXmmMem128);

    t[0xDB] = E::op2(M::aesimc, K::RegXmm, K::RegXmmMem128);
    t[0xDC] = E::op2(M::aesenc, K::RegXmm, K::RegXmmMem128);
    t[0xDD] = E::op2(M::aesenclast, K::RegXmm, K::RegXmmMem128);
    t[0xDE] = E::op2(M::aesdec, K::RegXmm, K::RegXmmMem128);
    t[0xDF] = E::op2(M::aesdeclast, K::RegXmm, K::RegXmmMem128);
    t
};

pub static PREFIX_F2: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0xF0] = E::op2(M::crc32, K::Reg32, K::RegMem8);
    t[0xF1] = E::op2(M::crc32, K::Reg32, K::RegMem32);
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crc32_is_the_only_occupant_of_the_f2_channel() {
        let occupied = PREFIX_F2.iter().filter(|e| e.present()).count();
        assert_eq!(occupied, 2);
    }

    #[test]
    fn pblendvb_takes_xmm0_as_an_implicit_mask() {
        match PREFIX_66[0x10] {
            E::Terminal { operands, operand_count, .. } => {
                assert_eq!(operand_count, 3);
                assert_eq!(operands[2], K::ImplicitXmm0);
            }
            _ => panic!("expected terminal"),
        }
    }
}
