//! Execution mode, the decoder-internal modifier record, and the prefix
//! scanner that populates it (§4.H: legacy prefixes, then REX, then VEX,
//! then the opcode-escape bytes).

use crate::cursor::Cursor;

/// Which of the three x86 operating modes a decode runs under. Determines
/// default operand/address sizes and whether REX/VEX prefixes are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecMode {
    /// 16-bit real/legacy mode.
    Legacy,
    /// 32-bit protected/compatibility mode.
    Compat,
    /// 64-bit long mode.
    Long,
}

/// The mandatory-prefix channel selected for the secondary (0F), 0F-38,
/// 0F-3A, and VEX opcode spaces. Repurposes what would otherwise be a
/// legacy prefix as part of the opcode itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MandatoryPrefix {
    None = 0,
    P66 = 1,
    F2 = 2,
    F3 = 3,
}

/// Which segment-override prefix, if any, was seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentOverride {
    None,
    Cs,
    Ds,
    Es,
    Fs,
    Gs,
    Ss,
}

/// The four REX extension bits, present only when a REX prefix byte (or an
/// equivalent VEX field) was consumed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RexBits {
    pub w: bool,
    pub r: bool,
    pub x: bool,
    pub b: bool,
}

/// The fields of a 2- or 3-byte VEX prefix. `mmmmm` selects the escape map
/// (1 = 0F, 2 = 0F-38, 3 = 0F-3A); `pp` is folded into the modifier's
/// `mandatory_prefix` channel rather than kept raw.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VexBits {
    pub w: bool,
    pub l: bool,
    /// The (already-inverted) auxiliary register operand selected by VEX.vvvv.
    pub vvvv: u8,
    pub mmmmm: u8,
}

/// Which opcode-escape space an instruction's opcode byte was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpcodeMap {
    Primary,
    /// `0F xx`.
    Secondary,
    /// `0F 38 xx`.
    Ext0F38,
    /// `0F 3A xx`.
    Ext0F3A,
    /// `0F 0F ... xx` (3DNow!; the opcode byte trails the operands).
    Amd3DNow,
}

/// The decoder-internal state accumulated by the prefix scanner and the
/// opcode dispatcher, consulted throughout operand resolution.
#[derive(Debug, Clone, Copy)]
pub struct Modifier {
    pub mode: ExecMode,
    pub map: OpcodeMap,
    pub opcode: u8,
    pub modrm: Option<u8>,
    pub rex: Option<RexBits>,
    pub vex: Option<VexBits>,
    pub operand_size_override: bool,
    pub address_size_override: bool,
    pub segment_override: SegmentOverride,
    pub lock: bool,
    pub rep: bool,
    pub repnz: bool,
    pub mandatory_prefix: MandatoryPrefix,
    /// Set for opcodes (PUSH/POP/CALL near, stack-frame forms) that default
    /// to a 64-bit operand in long mode without needing REX.W.
    pub default_64_bit: bool,
    /// Set when the register operand's index comes from the low 3 bits of
    /// the opcode byte itself (the eight-wide PUSH/POP/XCHG/MOV-imm families).
    pub direct_register_index: bool,
}

impl Modifier {
    fn new(mode: ExecMode) -> Self {
        Modifier {
            mode,
            map: OpcodeMap::Primary,
            opcode: 0,
            modrm: None,
            rex: None,
            vex: None,
            operand_size_override: false,
            address_size_override: false,
            segment_override: SegmentOverride::None,
            lock: false,
            rep: false,
            repnz: false,
            mandatory_prefix: MandatoryPrefix::None,
            default_64_bit: false,
            direct_register_index: false,
        }
    }

    /// REX.W, or the VEX.W bit when the instruction is VEX-encoded.
    pub fn rex_w(&self) -> bool {
        self.vex.map(|v| v.w).unwrap_or_else(|| self.rex.map(|r| r.w).unwrap_or(false))
    }

    pub fn rex_r(&self) -> bool {
        self.rex.map(|r| r.r).unwrap_or(false)
    }

    pub fn rex_x(&self) -> bool {
        self.rex.map(|r| r.x).unwrap_or(false)
    }

    pub fn rex_b(&self) -> bool {
        self.rex.map(|r| r.b).unwrap_or(false)
    }

    pub fn is_vex(&self) -> bool {
        self.vex.is_some()
    }

    /// ModR/M fields, or all-zero if no ModR/M byte was consumed.
    pub fn modrm_mod(&self) -> u8 {
        self.modrm.map(|m| (m >> 6) & 0b11).unwrap_or(0)
    }

    pub fn modrm_reg(&self) -> u8 {
        self.modrm.map(|m| (m >> 3) & 0b111).unwrap_or(0)
    }

    pub fn modrm_rm(&self) -> u8 {
        self.modrm.map(|m| m & 0b111).unwrap_or(0)
    }
}

/// pp is the raw 2-bit VEX field (`00`=none, `01`=66, `10`=F3, `11`=F2); this
/// maps it onto the channel enumeration shared with the non-VEX 0F paths.
fn pp_to_channel(pp: u8) -> MandatoryPrefix {
    match pp & 0b11 {
        0b00 => MandatoryPrefix::None,
        0b01 => MandatoryPrefix::P66,
        0b10 => MandatoryPrefix::F3,
        _ => MandatoryPrefix::F2,
    }
}

/// Run the legacy-prefix loop, then the REX test, then the VEX test, then
/// consume the opcode-escape bytes, leaving `cursor` positioned at the real
/// opcode byte (or, for 3DNow!, at the start of the operand bytes -- the
/// 3DNow suffix itself is read later, after the operands).
pub fn scan_prefixes(cursor: &mut Cursor<'_>, mode: ExecMode) -> Modifier {
    let mut m = Modifier::new(mode);

    loop {
        let b = cursor.pop();
        match b {
            0x66 => m.operand_size_override = true,
            0x67 => m.address_size_override = true,
            0x2E => m.segment_override = SegmentOverride::Cs,
            0x3E => m.segment_override = SegmentOverride::Ds,
            0x26 => m.segment_override = SegmentOverride::Es,
            0x64 => m.segment_override = SegmentOverride::Fs,
            0x65 => m.segment_override = SegmentOverride::Gs,
            0x36 => m.segment_override = SegmentOverride::Ss,
            0xF0 => m.lock = true,
            0xF3 => {
                m.rep = true;
                m.repnz = false;
            }
            0xF2 => {
                m.repnz = true;
                m.rep = false;
            }
            _ => {
                cursor.unpop();
                break;
            }
        }
    }

    if mode == ExecMode::Long && (cursor.peek(0) & 0xF0) == 0x40 {
        let rex = cursor.pop();
        m.rex = Some(RexBits {
            w: rex & 0x08 != 0,
            r: rex & 0x04 != 0,
            x: rex & 0x02 != 0,
            b: rex & 0x01 != 0,
        });
    }

    scan_vex(cursor, mode, &mut m);

    if m.vex.is_none() {
        scan_escape(cursor, &mut m);
    } else {
        // The VEX header's mmmmm field already selected the escape map; no
        // further escape bytes follow.
        m.map = match m.vex.unwrap().mmmmm {
            2 => OpcodeMap::Ext0F38,
            3 => OpcodeMap::Ext0F3A,
            _ => OpcodeMap::Secondary,
        };
    }

    m
}

/// A C4/C5 byte in non-long mode is LES/LDS unless the following byte's
/// mod field reads `11` -- a pattern LES/LDS (which requires a memory
/// operand) can never encode. In long mode LES/LDS don't exist at all, so
/// C4/C5 is unconditionally a VEX introducer there.
fn looks_like_vex(cursor: &Cursor<'_>, mode: ExecMode) -> bool {
    mode == ExecMode::Long || (cursor.peek(1) >> 6) == 0b11
}

fn scan_vex(cursor: &mut Cursor<'_>, mode: ExecMode, m: &mut Modifier) {
    match cursor.peek(0) {
        0xC5 if looks_like_vex(cursor, mode) => {
            cursor.pop();
            let b1 = cursor.pop();
            let r = (b1 >> 7) & 1 == 0;
            let vvvv = (!(b1 >> 3) & 0b1111) as u8;
            let l = (b1 >> 2) & 1 != 0;
            let pp = b1 & 0b11;

            m.mandatory_prefix = pp_to_channel(pp);
            m.vex = Some(VexBits { w: false, l, vvvv, mmmmm: 1 });
            // 2-byte VEX carries only R of the three extension bits; X and B
            // are implicitly 1 (no extension) since the encoding has no room
            // for them. Store it rex-style so register-index assembly (which
            // reads rex_r/rex_x/rex_b uniformly) doesn't need a VEX special case.
            m.rex = Some(RexBits { w: false, r, x: false, b: false });
        }
        0xC4 if looks_like_vex(cursor, mode) => {
            cursor.pop();
            let b1 = cursor.pop();
            let b2 = cursor.pop();

            let r = (b1 >> 7) & 1 == 0;
            let x = (b1 >> 6) & 1 == 0;
            let b = (b1 >> 5) & 1 == 0;
            let mmmmm = b1 & 0b1_1111;

            let w = (b2 >> 7) & 1 != 0;
            let vvvv = (!(b2 >> 3) & 0b1111) as u8;
            let l = (b2 >> 2) & 1 != 0;
            let pp = b2 & 0b11;

            m.rex = Some(RexBits { w, r, x, b });
            m.mandatory_prefix = pp_to_channel(pp);
            m.vex = Some(VexBits { w, l, vvvv, mmmmm });
        }
        _ => {}
    }
}

fn scan_escape(cursor: &mut Cursor<'_>, m: &mut Modifier) {
    if !cursor.matches(0x0F) {
        m.map = OpcodeMap::Primary;
        return;
    }

    if cursor.matches(0x0F) {
        m.map = OpcodeMap::Amd3DNow;
    } else if cursor.matches(0x38) {
        m.map = OpcodeMap::Ext0F38;
        m.mandatory_prefix = non_vex_channel(m);
    } else if cursor.matches(0x3A) {
        m.map = OpcodeMap::Ext0F3A;
        m.mandatory_prefix = non_vex_channel(m);
    } else {
        m.map = OpcodeMap::Secondary;
        m.mandatory_prefix = non_vex_channel(m);
    }
}

/// Precedence for the non-VEX 0F paths: `repnz (F2) > rep (F3) > 66 > none`.
fn non_vex_channel(m: &Modifier) -> MandatoryPrefix {
    if m.repnz {
        MandatoryPrefix::F2
    } else if m.rep {
        MandatoryPrefix::F3
    } else if m.operand_size_override {
        MandatoryPrefix::P66
    } else {
        MandatoryPrefix::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_opcode_has_no_prefixes() {
        let bytes = [0x90];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert_eq!(cur.position(), 0);
        assert!(m.rex.is_none());
        assert_eq!(m.map, OpcodeMap::Primary);
    }

    #[test]
    fn rex_prefix_consumed_only_in_long_mode() {
        let bytes = [0x48, 0x01, 0xC0];
        let mut long = Cursor::new(&bytes);
        let m = scan_prefixes(&mut long, ExecMode::Long);
        assert!(m.rex_w());
        assert_eq!(long.position(), 1);

        let mut compat = Cursor::new(&bytes);
        let m2 = scan_prefixes(&mut compat, ExecMode::Compat);
        assert!(!m2.rex_w());
        assert_eq!(compat.position(), 0);
    }

    #[test]
    fn rep_and_repnz_are_mutually_exclusive_last_wins() {
        let bytes = [0xF3, 0xF2, 0x90];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert!(m.repnz);
        assert!(!m.rep);
    }

    #[test]
    fn legacy_prefix_run_terminates_on_first_non_prefix_byte() {
        let bytes = [0x66, 0x67, 0x2E, 0x90];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert!(m.operand_size_override);
        assert!(m.address_size_override);
        assert_eq!(m.segment_override, SegmentOverride::Cs);
        assert_eq!(cur.position(), 3);
    }

    #[test]
    fn two_byte_vex_sets_mandatory_prefix_from_pp() {
        // C5 FB 10 07  ->  pp=11 (F2)
        let bytes = [0xC5, 0xFB, 0x10, 0x07];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert!(m.is_vex());
        assert_eq!(m.mandatory_prefix, MandatoryPrefix::F2);
        assert_eq!(m.map, OpcodeMap::Secondary);
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn three_byte_vex_selects_0f38_map() {
        // C4 E2 79 18 00 -> mmmmm=2 (0F38), pp=01 (66), W=0, L=0
        let bytes = [0xC4, 0xE2, 0x79, 0x18, 0x00];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert!(m.is_vex());
        assert_eq!(m.map, OpcodeMap::Ext0F38);
        assert_eq!(m.mandatory_prefix, MandatoryPrefix::P66);
        assert!(!m.rex_w());
        assert_eq!(cur.position(), 3);
    }

    #[test]
    fn c5_in_legacy_mode_without_mod3_tail_is_not_vex() {
        // LDS ECX, [EAX] in compat mode: C5 08 -> modrm.mod = 0, not VEX.
        let bytes = [0xC5, 0x08];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Compat);
        assert!(!m.is_vex());
        assert_eq!(cur.position(), 0);
    }

    #[test]
    fn escape_0f_selects_secondary_map_and_prefix_precedence() {
        let bytes = [0xF2, 0x0F, 0x10, 0xC0];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert_eq!(m.map, OpcodeMap::Secondary);
        assert_eq!(m.mandatory_prefix, MandatoryPrefix::F2);
        assert_eq!(cur.position(), 2);
    }

    #[test]
    fn amd_3dnow_escape_is_recognised() {
        let bytes = [0x0F, 0x0F, 0x00];
        let mut cur = Cursor::new(&bytes);
        let m = scan_prefixes(&mut cur, ExecMode::Long);
        assert_eq!(m.map, OpcodeMap::Amd3DNow);
        assert_eq!(cur.position(), 2);
    }
}
