//! Typed command-frame builders for the Tesoro lighting protocol
//!
//! Every lighting operation is a fixed 8-byte feature report:
//! `[report id, opcode, profile, args...]`. Building a frame is pure
//! and touches no device state; the quirky parts (channel wrap-around,
//! the pseudo key ids for clear/save) live here in one place.

use crate::keys::LedId;
use crate::led::{LightingMode, Profile, Rgb, SpectrumMode};

/// HID report id carried by every lighting frame
pub const REPORT_ID: u8 = 0x07;

/// Size of a complete frame, report id included
pub const FRAME_SIZE: usize = tesoro_transport::FRAME_SIZE;

/// Frame opcodes (byte 1)
pub mod opcode {
    /// Switch the active profile
    pub const SET_PROFILE: u8 = 0x03;
    /// Select a built-in lighting effect
    pub const SET_LIGHTING_MODE: u8 = 0x0A;
    /// Set the profile base color
    pub const SET_PROFILE_COLOR: u8 = 0x0B;
    /// Per-key spectrum operations (key color, clear, save)
    pub const SET_SPECTRUM: u8 = 0x0D;
}

/// Pseudo key id meaning "clear all per-key colors"
const SPECTRUM_CLEAR: u8 = 0xFE;

/// Pseudo key id meaning "save the per-key layout to the device"
const SPECTRUM_SAVE: u8 = 0xFF;

/// A fully encoded 8-byte feature-report frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandFrame([u8; FRAME_SIZE]);

impl CommandFrame {
    /// Raw frame bytes, ready for `Transport::write_feature`
    pub fn bytes(&self) -> &[u8; FRAME_SIZE] {
        &self.0
    }
}

/// A lighting operation that encodes to a fixed 8-byte frame
pub trait Command {
    /// Opcode at byte 1 of the frame
    const OPCODE: u8;

    /// Profile slot, always at byte 2
    fn profile(&self) -> Profile;

    /// Payload bytes 3..8
    fn args(&self) -> [u8; 5];

    /// Build the complete frame, report id included
    fn frame(&self) -> CommandFrame {
        let a = self.args();
        CommandFrame([
            REPORT_ID,
            Self::OPCODE,
            self.profile() as u8,
            a[0],
            a[1],
            a[2],
            a[3],
            a[4],
        ])
    }
}

/// Switch the keyboard to a profile
#[derive(Debug, Clone, Copy)]
pub struct SetProfile {
    pub profile: Profile,
}

impl SetProfile {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Command for SetProfile {
    const OPCODE: u8 = opcode::SET_PROFILE;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [0; 5]
    }
}

/// Select a built-in lighting effect on a profile
#[derive(Debug, Clone, Copy)]
pub struct SetLightingMode {
    pub mode: LightingMode,
    pub spectrum: SpectrumMode,
    pub profile: Profile,
}

impl SetLightingMode {
    /// Non-spectrum form; the sub-mode byte stays 0
    pub fn new(mode: LightingMode, profile: Profile) -> Self {
        Self {
            mode,
            spectrum: SpectrumMode::default(),
            profile,
        }
    }

    /// Spectrum-colors form with an explicit sub-behavior
    pub fn with_spectrum(mode: LightingMode, spectrum: SpectrumMode, profile: Profile) -> Self {
        Self {
            mode,
            spectrum,
            profile,
        }
    }
}

impl Command for SetLightingMode {
    const OPCODE: u8 = opcode::SET_LIGHTING_MODE;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [self.mode as u8, self.spectrum as u8, 0, 0, 0]
    }
}

/// Set the base color used by the standard effects
#[derive(Debug, Clone, Copy)]
pub struct SetProfileColor {
    pub color: Rgb,
    pub profile: Profile,
}

impl SetProfileColor {
    pub fn new(color: Rgb, profile: Profile) -> Self {
        Self { color, profile }
    }
}

impl Command for SetProfileColor {
    const OPCODE: u8 = opcode::SET_PROFILE_COLOR;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [self.color.r, self.color.g, self.color.b, 0, 0]
    }
}

/// Set the LED color of a single key
///
/// The builder is total over `LedId`, including the sentinel; the
/// session layer guarantees a sentinel never reaches the wire by
/// skipping the write before a frame is built.
#[derive(Debug, Clone, Copy)]
pub struct SetKeyColor {
    pub key: LedId,
    pub color: Rgb,
    pub profile: Profile,
}

impl SetKeyColor {
    pub fn new(key: LedId, color: Rgb, profile: Profile) -> Self {
        Self {
            key,
            color,
            profile,
        }
    }
}

impl Command for SetKeyColor {
    const OPCODE: u8 = opcode::SET_SPECTRUM;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [self.key.raw(), self.color.r, self.color.g, self.color.b, 0]
    }
}

/// Turn off every per-key LED on a profile
#[derive(Debug, Clone, Copy)]
pub struct ClearSpectrum {
    pub profile: Profile,
}

impl ClearSpectrum {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Command for ClearSpectrum {
    const OPCODE: u8 = opcode::SET_SPECTRUM;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [SPECTRUM_CLEAR, 0, 0, 0, 0]
    }
}

/// Persist the current per-key layout on the device
///
/// Switching profiles without saving first loses every unsaved change.
#[derive(Debug, Clone, Copy)]
pub struct SaveSpectrum {
    pub profile: Profile,
}

impl SaveSpectrum {
    pub fn new(profile: Profile) -> Self {
        Self { profile }
    }
}

impl Command for SaveSpectrum {
    const OPCODE: u8 = opcode::SET_SPECTRUM;

    fn profile(&self) -> Profile {
        self.profile
    }

    fn args(&self) -> [u8; 5] {
        [SPECTRUM_SAVE, 0, 0, 0, 0]
    }
}
