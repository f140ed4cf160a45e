//! Opcode tables: one module per escape level, plus the shared [`entry`]
//! vocabulary they're all built from. See [`crate::dispatch`] for how these
//! are walked.

pub mod amd3dnow;
pub mod entry;
pub mod ext0f38;
pub mod ext0f3a;
pub mod primary;
pub mod secondary;
pub mod vex;
pub mod x87;
