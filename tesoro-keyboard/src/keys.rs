//! Per-key LED identifiers
//!
//! The codes are Tesoro-specific scan-code-like values taken from the
//! Gram Spectrum firmware; they are part of the wire contract and bear
//! no relation to USB HID usage codes.

/// Wire identifier of a single key LED.
///
/// A newtype rather than an enum: the device addresses keys by raw
/// byte, and callers may sweep arbitrary ids (the demo does), so the
/// type must admit every `u8` without a fallible conversion.
/// [`LedId::NONE`] is the sentinel for "no key at this position" and
/// must never reach the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LedId(pub u8);

impl LedId {
    /// Sentinel: no physical key. Never a paintable target.
    pub const NONE: Self = Self(0xFF);

    // Function row
    pub const ESCAPE: Self = Self(0x0B);
    pub const F1: Self = Self(0x16);
    pub const F2: Self = Self(0x1E);
    pub const F3: Self = Self(0x19);
    pub const F4: Self = Self(0x1B);
    pub const F5: Self = Self(0x07);
    pub const F6: Self = Self(0x33);
    pub const F7: Self = Self(0x39);
    pub const F8: Self = Self(0x3E);
    pub const F9: Self = Self(0x56);
    pub const F10: Self = Self(0x57);
    pub const F11: Self = Self(0x53);
    pub const F12: Self = Self(0x55);
    pub const PRINT_SCREEN: Self = Self(0x4F);
    pub const SCROLL_LOCK: Self = Self(0x48);
    pub const PAUSE: Self = Self(0x00);

    // Digit row
    pub const GRAVE: Self = Self(0x0E);
    pub const D1: Self = Self(0x0F);
    pub const D2: Self = Self(0x17);
    pub const D3: Self = Self(0x1F);
    pub const D4: Self = Self(0x27);
    pub const D5: Self = Self(0x26);
    pub const D6: Self = Self(0x2E);
    pub const D7: Self = Self(0x2F);
    pub const D8: Self = Self(0x37);
    pub const D9: Self = Self(0x3F);
    pub const D0: Self = Self(0x47);
    pub const MINUS: Self = Self(0x46);
    pub const EQUALS: Self = Self(0x36);
    pub const BACKSPACE: Self = Self(0x51);
    pub const INSERT: Self = Self(0x66);
    pub const HOME: Self = Self(0x76);
    pub const PAGE_UP: Self = Self(0x6E);

    // Top letter row
    pub const TAB: Self = Self(0x09);
    pub const Q: Self = Self(0x08);
    pub const W: Self = Self(0x10);
    pub const E: Self = Self(0x18);
    pub const R: Self = Self(0x20);
    pub const T: Self = Self(0x21);
    pub const Y: Self = Self(0x29);
    pub const U: Self = Self(0x28);
    pub const I: Self = Self(0x30);
    pub const O: Self = Self(0x38);
    pub const P: Self = Self(0x40);
    pub const LEFT_BRACKET: Self = Self(0x41);
    pub const RIGHT_BRACKET: Self = Self(0x31);
    pub const BACKSLASH: Self = Self(0x52);
    pub const DELETE: Self = Self(0x5E);
    pub const END: Self = Self(0x77);
    pub const PAGE_DOWN: Self = Self(0x6F);

    // Home row
    pub const CAPS_LOCK: Self = Self(0x11);
    pub const A: Self = Self(0x0A);
    pub const S: Self = Self(0x12);
    pub const D: Self = Self(0x1A);
    pub const F: Self = Self(0x22);
    pub const G: Self = Self(0x23);
    pub const H: Self = Self(0x2B);
    pub const J: Self = Self(0x2A);
    pub const K: Self = Self(0x32);
    pub const L: Self = Self(0x3A);
    pub const SEMICOLON: Self = Self(0x42);
    pub const APOSTROPHE: Self = Self(0x43);
    pub const ENTER: Self = Self(0x54);

    // Bottom letter row
    pub const LEFT_SHIFT: Self = Self(0x79);
    pub const Z: Self = Self(0x0C);
    pub const X: Self = Self(0x14);
    pub const C: Self = Self(0x1C);
    pub const V: Self = Self(0x24);
    pub const B: Self = Self(0x25);
    pub const N: Self = Self(0x2D);
    pub const M: Self = Self(0x2C);
    pub const COMMA: Self = Self(0x34);
    pub const PERIOD: Self = Self(0x3C);
    pub const SLASH: Self = Self(0x45);
    pub const RIGHT_SHIFT: Self = Self(0x7A);
    pub const UP: Self = Self(0x73);

    // Modifier row
    pub const LEFT_CTRL: Self = Self(0x06);
    pub const SUPER: Self = Self(0x7C);
    pub const LEFT_ALT: Self = Self(0x4B);
    pub const SPACE: Self = Self(0x5B);
    pub const RIGHT_ALT: Self = Self(0x4D);
    pub const FN: Self = Self(0x7D);
    pub const MENU: Self = Self(0x3D);
    pub const RIGHT_CTRL: Self = Self(0x04);
    pub const LEFT: Self = Self(0x75);
    pub const DOWN: Self = Self(0x5D);
    pub const RIGHT: Self = Self(0x65);

    // Numpad
    pub const NUM_LOCK: Self = Self(0x5C);
    pub const KP_DIVIDE: Self = Self(0x64);
    pub const KP_MULTIPLY: Self = Self(0x6C);
    pub const KP_MINUS: Self = Self(0x6D);
    pub const KP_7: Self = Self(0x58);
    pub const KP_8: Self = Self(0x60);
    pub const KP_9: Self = Self(0x68);
    pub const KP_4: Self = Self(0x59);
    pub const KP_5: Self = Self(0x61);
    pub const KP_6: Self = Self(0x69);
    pub const KP_PLUS: Self = Self(0x70);
    pub const KP_1: Self = Self(0x5A);
    pub const KP_2: Self = Self(0x62);
    pub const KP_3: Self = Self(0x6A);
    pub const KP_0: Self = Self(0x63);
    pub const KP_DOT: Self = Self(0x6B);
    pub const KP_ENTER: Self = Self(0x72);

    /// Raw wire code
    pub fn raw(self) -> u8 {
        self.0
    }

    /// True for the "no key here" sentinel
    pub fn is_none(self) -> bool {
        self == Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentinel_is_distinct() {
        assert!(LedId::NONE.is_none());
        assert!(!LedId::ESCAPE.is_none());
        assert_eq!(LedId::NONE.raw(), 0xFF);
    }

    #[test]
    fn wire_codes_match_firmware() {
        assert_eq!(LedId::ESCAPE.raw(), 0x0B);
        assert_eq!(LedId::PAUSE.raw(), 0x00);
        assert_eq!(LedId::SPACE.raw(), 0x5B);
        assert_eq!(LedId::KP_ENTER.raw(), 0x72);
    }
}
