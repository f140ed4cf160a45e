//! The 3DNow! suffix-opcode table. 3DNow! inverts the usual escape-byte
//! ordering: the instruction is `0F 0F /r ib`, where ModR/M and any memory
//! operand precede the opcode byte, and the trailing immediate byte (not a
//! prefix) is what selects the mnemonic. `FEMMS` (`0F 0E`) lives directly in
//! [`super::secondary`] since it takes no suffix byte at all.

use crate::mnemonic::Mnemonic as M;
use crate::operand_kind::OperandKind as K;
use crate::table::entry::TableEntry as E;

pub static SUFFIX: [E; 256] = {
    let mut t = [E::BLANK; 256];
    t[0x0C] = E::op2(M::pi2fw, K::RegMmx, K::RegMmxMem64);
    t[0x0D] = E::op2(M::pi2fd, K::RegMmx, K::RegMmxMem64);

    t[0x1C] = E::op2(M::pf2iw, K::RegMmx, K::RegMmxMem64);
    t[0x1D] = E::op2(M::pf2id, K::RegMmx, K::RegMmxMem64);

    t[0x8A] = E::op2(M::pfnacc, K::RegMmx, K::RegMmxMem64);
    t[0x8E] = E::op2(M::pfpnacc, K::RegMmx, K::RegMmxMem64);

    t[0x90] = E::op2(M::pfcmpge, K::RegMmx, K::RegMmxMem64);
    t[0x94] = E::op2(M::pfmin, K::RegMmx, K::RegMmxMem64);
    t[0x96] = E::op2(M::pfrcp, K::RegMmx, K::RegMmxMem64);
    t[0x97] = E::op2(M::pfrsqrt, K::RegMmx, K::RegMmxMem64);

    t[0x9A] = E::op2(M::pfsub, K::RegMmx, K::RegMmxMem64);
    t[0x9E] = E::op2(M::pfadd, K::RegMmx, K::RegMmxMem64);

    t[0xA0] = E::op2(M::pfcmpgt, K::RegMmx, K::RegMmxMem64);
    t[0xA4] = E::op2(M::pfmax, K::RegMmx, K::RegMmxMem64);
    t[0xA6] = E::op2(M::pfrcpit1, K::RegMmx, K::RegMmxMem64);
    t[0xA7] = E::op2(M::pfrsqit1, K::RegMmx, K::RegMmxMem64);

    t[0xAA] = E::op2(M::pfsubr, K::RegMmx, K::RegMmxMem64);
    t[0xAE] = E::op2(M::pfacc, K::RegMmx, K::RegMmxMem64);

    t[0xB0] = E::op2(M::pfcmpeq, K::RegMmx, K::RegMmxMem64);
    t[0xB4] = E::op2(M::pfmul, K::RegMmx, K::RegMmxMem64);
    t[0xB6] = E::op2(M::pfrcpit2, K::RegMmx, K::RegMmxMem64);
    t[0xB7] = E::op2(M::pmulhrw, K::RegMmx, K::RegMmxMem64);

    t[0xBB] = E::op2(M::pswapd, K::RegMmx, K::RegMmxMem64);
    t[0xBF] = E::op2(M::pavgusb, K::RegMmx, K::RegMmxMem64);
    t
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pavgusb_is_the_last_populated_suffix() {
        match SUFFIX[0xBF] {
            E::Terminal { mnemonic, .. } => assert_eq!(mnemonic, M::pavgusb),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn unused_suffix_bytes_are_blank() {
        assert!(!SUFFIX[0x00].present());
        assert!(!SUFFIX[0xFF].present());
    }
}
