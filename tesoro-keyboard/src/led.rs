//! Color, profile and lighting-effect types
//!
//! All numeric values here are part of the wire contract and must not
//! be renumbered.

/// Wrap an arbitrary integer into one 8-bit color channel.
///
/// Truncation wraps instead of clamping: 0 and 256 both encode 0x00.
/// Existing callers feed animation math straight into the channels and
/// rely on the wrap, so this is modulo, not `min(255)`.
pub fn wrap_channel(value: i32) -> u8 {
    value.rem_euclid(256) as u8
}

/// RGB color value
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Create a new RGB color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Truncating constructor; each channel wraps via [`wrap_channel`]
    pub fn from_ints(r: i32, g: i32, b: i32) -> Self {
        Self {
            r: wrap_channel(r),
            g: wrap_channel(g),
            b: wrap_channel(b),
        }
    }

    /// Create color from HSV values
    pub fn from_hsv(h: f32, s: f32, v: f32) -> Self {
        let h = h % 360.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - ((h / 60.0) % 2.0 - 1.0).abs());
        let m = v - c;

        let (r, g, b) = match (h / 60.0) as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        Self {
            r: ((r + m) * 255.0) as u8,
            g: ((g + m) * 255.0) as u8,
            b: ((b + m) * 255.0) as u8,
        }
    }

    /// Black (all LEDs off)
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// White (all LEDs full)
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Red
    pub const RED: Self = Self::new(255, 0, 0);
    /// Green
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Blue
    pub const BLUE: Self = Self::new(0, 0, 255);
}

/// Device-resident lighting configuration slot
///
/// Exactly one profile is active at a time, tracked by the device and
/// not by this crate; color operations must be given the profile that
/// is currently active or the device ignores them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Profile {
    Profile1 = 1,
    Profile2 = 2,
    Profile3 = 3,
    Profile4 = 4,
    Profile5 = 5,
    /// The software-controlled "PC" slot
    Pc = 6,
}

impl Profile {
    /// Get profile from numeric value (1-6)
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            1 => Some(Self::Profile1),
            2 => Some(Self::Profile2),
            3 => Some(Self::Profile3),
            4 => Some(Self::Profile4),
            5 => Some(Self::Profile5),
            6 => Some(Self::Pc),
            _ => None,
        }
    }
}

/// Built-in lighting effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum LightingMode {
    Shine = 0x00,
    Trigger = 0x01,
    Ripple = 0x02,
    Fireworks = 0x03,
    Radiation = 0x04,
    Breathing = 0x05,
    RainbowWave = 0x06,
    /// Per-key colors; sub-behavior selected by [`SpectrumMode`]
    SpectrumColors = 0x08,
}

impl LightingMode {
    /// Get mode from numeric value
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x00 => Some(Self::Shine),
            0x01 => Some(Self::Trigger),
            0x02 => Some(Self::Ripple),
            0x03 => Some(Self::Fireworks),
            0x04 => Some(Self::Radiation),
            0x05 => Some(Self::Breathing),
            0x06 => Some(Self::RainbowWave),
            0x08 => Some(Self::SpectrumColors),
            _ => None,
        }
    }

    /// Get the display name for this mode
    pub fn name(&self) -> &'static str {
        match self {
            Self::Shine => "Shine",
            Self::Trigger => "Trigger",
            Self::Ripple => "Ripple",
            Self::Fireworks => "Fireworks",
            Self::Radiation => "Radiation",
            Self::Breathing => "Breathing",
            Self::RainbowWave => "Rainbow Wave",
            Self::SpectrumColors => "Spectrum Colors",
        }
    }
}

/// Sub-behavior for [`LightingMode::SpectrumColors`]
///
/// Stays at the default (`Shine`, wire value 0) for every other mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum SpectrumMode {
    #[default]
    Shine = 0x00,
    Breathing = 0x01,
    Trigger = 0x02,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_wraps_instead_of_clamping() {
        assert_eq!(wrap_channel(0), 0x00);
        assert_eq!(wrap_channel(255), 0xFF);
        assert_eq!(wrap_channel(256), 0x00);
        assert_eq!(wrap_channel(300), 44);
        assert_eq!(wrap_channel(-1), 0xFF);
    }

    #[test]
    fn from_ints_truncates_per_channel() {
        let c = Rgb::from_ints(256, 257, -2);
        assert_eq!(c, Rgb::new(0, 1, 254));
    }

    #[test]
    fn hsv_primaries() {
        assert_eq!(Rgb::from_hsv(0.0, 1.0, 1.0), Rgb::new(255, 0, 0));
        assert_eq!(Rgb::from_hsv(120.0, 1.0, 1.0), Rgb::new(0, 255, 0));
        assert_eq!(Rgb::from_hsv(240.0, 1.0, 1.0), Rgb::new(0, 0, 255));
    }

    #[test]
    fn profile_values() {
        assert_eq!(Profile::Pc as u8, 6);
        assert_eq!(Profile::from_u8(6), Some(Profile::Pc));
        assert_eq!(Profile::from_u8(0), None);
        assert_eq!(Profile::from_u8(7), None);
    }

    #[test]
    fn lighting_mode_values() {
        assert_eq!(LightingMode::SpectrumColors as u8, 0x08);
        // 0x07 is a hole in the firmware's mode table
        assert_eq!(LightingMode::from_u8(0x07), None);
        assert_eq!(LightingMode::from_u8(0x06), Some(LightingMode::RainbowWave));
    }
}
