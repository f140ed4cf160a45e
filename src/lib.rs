//! A table-driven decoder for the x86/x86-64 instruction stream, as defined
//! by the AMD64 architecture (AMD programmer's manual, volume 3).
//!
//! Given a raw byte slice and an [`ExecMode`], [`read`] produces a single
//! fully resolved [`Instruction`]: mnemonic, operands, active prefixes, and
//! the exact byte span consumed. The decoder is a pure, synchronous,
//! allocation-free function over borrowed bytes -- it does not interpret
//! instructions, resolve relative offsets against a program counter, or
//! validate architectural constraints beyond what is needed to pick one
//! opcode over another.
//!
//! The four-phase pipeline (see [`dispatch`]) mirrors AMD volume 3, figure
//! 1-1: prefixes, then opcode (with escape bytes), then ModR/M-driven
//! sub-extensions, then operands.
//!
//! ```
//! use x86_decoder::{read, Cursor, ExecMode, Mnemonic};
//!
//! let bytes = [0x48, 0x8D, 0x46, 0x10]; // lea rax, [rsi + 0x10]
//! let mut cur = Cursor::new(&bytes);
//! let inst = read(&mut cur, ExecMode::Long);
//! assert_eq!(inst.mnemonic, Mnemonic::lea);
//! assert_eq!(inst.len(), 4);
//! ```

#![no_std]
#![allow(clippy::upper_case_acronyms)]

mod cursor;
mod dispatch;
mod instruction;
mod mnemonic;
mod modifier;
mod operand_kind;
mod registers;
mod resolver;
mod sib;
mod table;

pub use cursor::Cursor;
pub use instruction::{
    FarPointer, Instruction, MemoryRef, Operand, PrefixFlags, RelativeOffset,
};
pub use mnemonic::Mnemonic;
pub use modifier::ExecMode;
pub use operand_kind::OperandKind;
pub use registers::{Register, RegisterClass};

/// Decode a single instruction from `cursor` under the given execution mode.
///
/// On a truncated or malformed stream the returned instruction has
/// [`Mnemonic::INVALID`] (or, for a handful of entries, a valid mnemonic
/// paired with an [`Register::INVALID`] operand -- see [`resolver`]). The
/// caller always gets back a well-formed [`Instruction`] and should inspect
/// [`Instruction::bytes`]/[`Instruction::len`] to decide how far to advance.
pub fn read(cursor: &mut Cursor<'_>, mode: ExecMode) -> Instruction {
    dispatch::read(cursor, mode)
}
