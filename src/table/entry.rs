//! A single slot in an opcode table (§3, "Table entry"; §4.E).

use crate::mnemonic::Mnemonic;
use crate::operand_kind::OperandKind;

/// Which ModR/M sub-field (if any) an extension entry dispatches on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtensionKind {
    /// 8-entry sub-table indexed by `ModR/M.reg`.
    Reg,
    /// 9-entry sub-table: index 0 when `ModR/M.mod != 3`, else `1 + ModR/M.rm`.
    Rm,
    /// 2-entry sub-table: index 0 when `ModR/M.mod != 3`, else index 1.
    Mod,
    /// 2-entry sub-table indexed by `REX.W` (no ModR/M consulted).
    RexW,
}

/// One opcode-table slot: either a finished (terminal) entry, a pointer to a
/// sub-table keyed by some ModR/M field or REX.W, or the explicit absence
/// marker.
#[derive(Debug, Clone, Copy)]
pub enum TableEntry {
    /// A resolved mnemonic with 0..4 operand kinds.
    Terminal {
        mnemonic: Mnemonic,
        operands: [OperandKind; 4],
        operand_count: u8,
        /// Whether a ModR/M byte must be consumed even if no extension walk
        /// needed to peek one (e.g. `ADD r/m8, r8` needs ModR/M but isn't an
        /// extension entry).
        needs_modrm: bool,
        /// The eight one-byte PUSH/POP/INC/DEC/XCHG/MOV-immediate families,
        /// whose register operand comes from the low 3 bits of the opcode.
        direct_register_index: bool,
        /// Stack-touching opcodes (PUSH/POP/CALL near/RET) that default to a
        /// 64-bit operand in long mode without needing REX.W.
        default_64_bit: bool,
    },
    /// Dispatch continues into a sub-table selected by `kind`.
    Extension { kind: ExtensionKind, table: &'static [TableEntry] },
    /// No instruction occupies this slot.
    Blank,
}

impl TableEntry {
    pub const BLANK: TableEntry = TableEntry::Blank;

    pub const fn present(&self) -> bool {
        !matches!(self, TableEntry::Blank)
    }

    pub const fn is_extension(&self) -> bool {
        matches!(self, TableEntry::Extension { .. })
    }

    /// Builds a terminal with no operands.
    pub const fn op0(mnemonic: Mnemonic) -> TableEntry {
        TableEntry::Terminal {
            mnemonic,
            operands: [OperandKind::None; 4],
            operand_count: 0,
            needs_modrm: false,
            direct_register_index: false,
            default_64_bit: false,
        }
    }

    pub const fn op1(mnemonic: Mnemonic, a: OperandKind) -> TableEntry {
        TableEntry::Terminal {
            mnemonic,
            operands: [a, OperandKind::None, OperandKind::None, OperandKind::None],
            operand_count: 1,
            needs_modrm: Self::any_needs_modrm(&[a]),
            direct_register_index: false,
            default_64_bit: false,
        }
    }

    pub const fn op2(mnemonic: Mnemonic, a: OperandKind, b: OperandKind) -> TableEntry {
        TableEntry::Terminal {
            mnemonic,
            operands: [a, b, OperandKind::None, OperandKind::None],
            operand_count: 2,
            needs_modrm: Self::any_needs_modrm(&[a, b]),
            direct_register_index: false,
            default_64_bit: false,
        }
    }

    pub const fn op3(mnemonic: Mnemonic, a: OperandKind, b: OperandKind, c: OperandKind) -> TableEntry {
        TableEntry::Terminal {
            mnemonic,
            operands: [a, b, c, OperandKind::None],
            operand_count: 3,
            needs_modrm: Self::any_needs_modrm(&[a, b, c]),
            direct_register_index: false,
            default_64_bit: false,
        }
    }

    pub const fn op4(
        mnemonic: Mnemonic,
        a: OperandKind,
        b: OperandKind,
        c: OperandKind,
        d: OperandKind,
    ) -> TableEntry {
        TableEntry::Terminal {
            mnemonic,
            operands: [a, b, c, d],
            operand_count: 4,
            needs_modrm: Self::any_needs_modrm(&[a, b, c, d]),
            direct_register_index: false,
            default_64_bit: false,
        }
    }

    /// Marks a terminal as direct-register-index (opcode's low 3 bits choose
    /// the register). Used for the PUSH/POP/INC/DEC/XCHG/MOV-imm 0x50..0x5F,
    /// 0x90..0x97, 0xB0..0xBF-style families.
    pub const fn direct_register_index(self) -> TableEntry {
        match self {
            TableEntry::Terminal { mnemonic, operands, operand_count, default_64_bit, .. } => {
                TableEntry::Terminal {
                    mnemonic,
                    operands,
                    operand_count,
                    needs_modrm: false,
                    direct_register_index: true,
                    default_64_bit,
                }
            }
            other => other,
        }
    }

    /// Marks a terminal as defaulting to a 64-bit operand in long mode
    /// without REX.W (PUSH/POP/CALL near/RET/stack-frame opcodes).
    pub const fn default_64_bit(self) -> TableEntry {
        match self {
            TableEntry::Terminal {
                mnemonic,
                operands,
                operand_count,
                needs_modrm,
                direct_register_index,
                ..
            } => TableEntry::Terminal {
                mnemonic,
                operands,
                operand_count,
                needs_modrm,
                direct_register_index,
                default_64_bit: true,
            },
            other => other,
        }
    }

    /// Forces `needs_modrm` even for a terminal whose operand kinds alone
    /// wouldn't require it (used by a handful of no-operand ModR/M-bearing
    /// opcodes, e.g. the `0F 1F` multi-byte NOP group entries).
    pub const fn requires_modrm(self) -> TableEntry {
        match self {
            TableEntry::Terminal {
                mnemonic,
                operands,
                operand_count,
                direct_register_index,
                default_64_bit,
                ..
            } => TableEntry::Terminal {
                mnemonic,
                operands,
                operand_count,
                needs_modrm: true,
                direct_register_index,
                default_64_bit,
            },
            other => other,
        }
    }

    pub const fn extension(kind: ExtensionKind, table: &'static [TableEntry]) -> TableEntry {
        TableEntry::Extension { kind, table }
    }

    const fn any_needs_modrm(kinds: &[OperandKind]) -> bool {
        let mut i = 0;
        while i < kinds.len() {
            if Self::kind_needs_modrm(kinds[i]) {
                return true;
            }
            i += 1;
        }
        false
    }

    /// Whether materialising this operand kind requires a ModR/M byte to
    /// already be available (i.e. every kind except immediates, relative
    /// offsets, moffs, and the various implicit-register/implicit-memory
    /// forms).
    const fn kind_needs_modrm(kind: OperandKind) -> bool {
        !matches!(
            kind,
            OperandKind::None
                | OperandKind::Imm8
                | OperandKind::Imm16
                | OperandKind::Imm32
                | OperandKind::Imm64
                | OperandKind::SignExtImm8
                | OperandKind::SignExtImm32
                | OperandKind::Rel8
                | OperandKind::Rel16
                | OperandKind::Rel32
                | OperandKind::RelNative
                | OperandKind::MemoryOfs8
                | OperandKind::MemoryOfs16
                | OperandKind::MemoryOfs32
                | OperandKind::MemoryOfs64
                | OperandKind::ImplicitAl
                | OperandKind::ImplicitAx
                | OperandKind::ImplicitNativeAx
                | OperandKind::ImplicitCl
                | OperandKind::ImplicitCx
                | OperandKind::ImplicitEcx
                | OperandKind::ImplicitEax
                | OperandKind::ImplicitRax
                | OperandKind::ImplicitDx
                | OperandKind::ImplicitCs
                | OperandKind::ImplicitDs
                | OperandKind::ImplicitEs
                | OperandKind::ImplicitFs
                | OperandKind::ImplicitGs
                | OperandKind::ImplicitSs
                | OperandKind::ImplicitXmm0
                | OperandKind::ImplicitSt0
                | OperandKind::ImplicitSt1
                | OperandKind::ImplicitMemDsSi
                | OperandKind::ImplicitMemEsDi
                | OperandKind::ImplicitMemDsSiByte
                | OperandKind::ImplicitMemEsDiByte
                | OperandKind::Ptr16_16
                | OperandKind::Ptr16_32
                | OperandKind::Ptr16_64
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_is_not_present_and_not_extension() {
        assert!(!TableEntry::BLANK.present());
        assert!(!TableEntry::BLANK.is_extension());
    }

    #[test]
    fn terminal_with_register_operand_needs_modrm_by_default() {
        let e = TableEntry::op2(Mnemonic::add, OperandKind::RegMem32, OperandKind::Reg32);
        match e {
            TableEntry::Terminal { needs_modrm, operand_count, .. } => {
                assert!(needs_modrm);
                assert_eq!(operand_count, 2);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn direct_register_index_clears_needs_modrm() {
        let e = TableEntry::op1(Mnemonic::push, OperandKind::RegNative).direct_register_index();
        match e {
            TableEntry::Terminal { needs_modrm, direct_register_index, .. } => {
                assert!(!needs_modrm);
                assert!(direct_register_index);
            }
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn immediate_only_terminal_needs_no_modrm() {
        let e = TableEntry::op1(Mnemonic::push, OperandKind::Imm32);
        match e {
            TableEntry::Terminal { needs_modrm, .. } => assert!(!needs_modrm),
            _ => panic!("expected terminal"),
        }
    }

    #[test]
    fn extension_entry_reports_present_and_is_extension() {
        static SUB: [TableEntry; 8] = [TableEntry::BLANK; 8];
        let e = TableEntry::extension(ExtensionKind::Reg, &SUB);
        assert!(e.present());
        assert!(e.is_extension());
    }
}
