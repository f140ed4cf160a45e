//! Property tests for the cross-cutting invariants every decoded instruction
//! must satisfy, regardless of which opcode path produced it. These only
//! touch the public API (`x86_decoder::{read, Cursor, ExecMode, ...}`); they
//! exercise the crate the way an external disassembly loop would.

use proptest::prelude::*;
use x86_decoder::{read, Cursor, ExecMode, Instruction, Mnemonic, Operand};

const MODES: [ExecMode; 3] = [ExecMode::Legacy, ExecMode::Compat, ExecMode::Long];

fn decode(bytes: &[u8], mode: ExecMode) -> Instruction {
    let mut cursor = Cursor::new(bytes);
    read(&mut cursor, mode)
}

proptest! {
    /// A decoded instruction's byte span is a contiguous, in-bounds
    /// subrange of the input, and its length never exceeds what's left.
    #[test]
    fn byte_exactness_and_no_overshoot(bytes in prop::collection::vec(any::<u8>(), 0..32), mode_idx in 0usize..3) {
        let mode = MODES[mode_idx];
        let inst = decode(&bytes, mode);
        prop_assert!(inst.len() <= bytes.len());
        prop_assert_eq!(inst.offset, 0);
        let span = inst.bytes(&bytes);
        prop_assert_eq!(span, &bytes[0..inst.len()]);
    }

    /// No single instruction ever exceeds the architectural 15-byte limit,
    /// no matter how many legacy prefixes or how deep the extension chain.
    #[test]
    fn bounded_length(bytes in prop::collection::vec(any::<u8>(), 0..32), mode_idx in 0usize..3) {
        let mode = MODES[mode_idx];
        let inst = decode(&bytes, mode);
        prop_assert!(inst.len() <= 15);
    }

    /// Decoding the same bytes twice yields the same record: the decoder is
    /// a pure function of (bytes, mode), never reading hidden state.
    #[test]
    fn decoding_is_deterministic(bytes in prop::collection::vec(any::<u8>(), 0..16), mode_idx in 0usize..3) {
        let mode = MODES[mode_idx];
        let a = decode(&bytes, mode);
        let b = decode(&bytes, mode);
        prop_assert_eq!(a.mnemonic, b.mnemonic);
        prop_assert_eq!(a.len(), b.len());
        prop_assert_eq!(a.operand_count(), b.operand_count());
    }

    /// Repeating a legacy prefix byte has the same effect as issuing it
    /// once: `66 66 01 C0` and `66 01 C0` decode to the same mnemonic and
    /// operand shape, just with a different (still in-bounds) length.
    #[test]
    fn legacy_prefix_repetition_is_idempotent(repeats in 1usize..6) {
        let mut once = vec![0x66u8];
        once.extend_from_slice(&[0x01, 0xC0]);
        let mut many = vec![0x66u8; repeats];
        many.extend_from_slice(&[0x01, 0xC0]);

        let a = decode(&once, ExecMode::Long);
        let b = decode(&many, ExecMode::Long);
        prop_assert_eq!(a.mnemonic, b.mnemonic);
        prop_assert_eq!(a.operand_count(), b.operand_count());
        prop_assert_eq!(b.len(), repeats + 2);
    }

    /// Issuing both REP and REPNZ keeps only the later one.
    #[test]
    fn rep_repnz_last_one_wins(first_is_rep in any::<bool>()) {
        let (first, second) = if first_is_rep { (0xF3u8, 0xF2u8) } else { (0xF2u8, 0xF3u8) };
        let bytes = [first, second, 0xA4]; // MOVSB
        let inst = decode(&bytes, ExecMode::Long);
        if first_is_rep {
            prop_assert!(inst.prefixes.repnz);
            prop_assert!(!inst.prefixes.rep);
        } else {
            prop_assert!(inst.prefixes.rep);
            prop_assert!(!inst.prefixes.repnz);
        }
    }

    /// A register-form ModR/M byte under a GPR-operand primary opcode
    /// (`00..03` ADD family) selects the same mnemonic in every execution
    /// mode; only the operand widths differ.
    #[test]
    fn mode_invariance_of_mnemonic(modrm in any::<u8>()) {
        let bytes = [0x01, modrm]; // ADD r/m, r (32/16-bit depending on mode)
        let long = decode(&bytes, ExecMode::Long);
        let compat = decode(&bytes, ExecMode::Compat);
        let legacy = decode(&bytes, ExecMode::Legacy);
        prop_assert_eq!(long.mnemonic, Mnemonic::add);
        prop_assert_eq!(compat.mnemonic, Mnemonic::add);
        prop_assert_eq!(legacy.mnemonic, Mnemonic::add);
    }

    /// ModR/M.reg assembles the same physical register index in both the
    /// REX.W=0 and REX.W=1 encodings of the same instruction; only the
    /// register's width (and therefore its name) changes.
    #[test]
    fn register_class_monotonicity(modrm in 0xC0u8..=0xFF) {
        // 01 /r = ADD r/m32, r32; 48 01 /r = ADD r/m64, r64 (REX.W=1).
        let narrow = decode(&[0x01, modrm], ExecMode::Long);
        let wide = decode(&[0x48, 0x01, modrm], ExecMode::Long);

        if let (Some(Operand::Register(r32)), Some(Operand::Register(r64))) =
            (narrow.operand(1), wide.operand(1))
        {
            prop_assert_eq!(r32.index, r64.index);
            prop_assert!(r32.width < r64.width);
        }
    }
}

#[test]
fn modrm_consumed_exactly_once_through_an_extension_chain() {
    // 83 /0 ib: Group 1 (Reg extension) over a register-form ModR/M plus a
    // trailing imm8. If ModR/M were consumed twice the immediate would be
    // misread and the length would overshoot.
    let bytes = [0x83, 0xC0, 0x2A];
    let inst = decode(&bytes, ExecMode::Long);
    assert_eq!(inst.mnemonic, Mnemonic::add);
    assert_eq!(inst.len(), 3);
}

#[test]
fn modrm_consumed_exactly_once_through_nested_extensions() {
    // D9 E1: x87 Mod(reg=4)->rm(=1) nested special-case path (FABS). No
    // trailing bytes at all -- a double-pop would run length negative or
    // panic, a missed pop would leave `len()` short by one.
    let bytes = [0xD9, 0xE1];
    let inst = decode(&bytes, ExecMode::Long);
    assert_eq!(inst.mnemonic, Mnemonic::fabs);
    assert_eq!(inst.len(), 2);
}

#[test]
fn empty_input_never_panics() {
    let bytes: [u8; 0] = [];
    let inst = decode(&bytes, ExecMode::Long);
    assert_eq!(inst.mnemonic, Mnemonic::INVALID);
    assert_eq!(inst.len(), 0);
}

#[test]
fn byte_span_concatenation_reproduces_a_multi_instruction_stream() {
    // lea rax, [rsi+0x10]; mov [rsi], rax; nop
    let bytes = [0x48, 0x8D, 0x46, 0x10, 0x48, 0x89, 0x06, 0x90];
    let mut cursor = Cursor::new(&bytes);
    let mut consumed = Vec::new();
    for _ in 0..3 {
        let inst = read(&mut cursor, ExecMode::Long);
        consumed.extend_from_slice(inst.bytes(&bytes));
    }
    assert_eq!(consumed, bytes);
}
