// CLI definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tesoro_keyboard::{LightingMode, SpectrumMode};

#[derive(Parser)]
#[command(name = "tesoro-rgb")]
#[command(author, version, about = "Tesoro Gram Spectrum RGB Driver")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Profile slot to target (1-5, or 6 for the software-controlled PC profile)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = 6,
        value_parser = clap::value_parser!(u8).range(1..=6)
    )]
    pub profile: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Switch the keyboard to the target profile
    #[command(visible_alias = "sp")]
    SetProfile,

    /// Select a built-in lighting effect
    #[command(visible_alias = "m")]
    Mode {
        /// Lighting effect
        effect: EffectArg,

        /// Sub-behavior for the spectrum effect (ignored by the others)
        #[arg(long, value_enum, default_value_t = SpectrumArg::Shine)]
        spectrum: SpectrumArg,
    },

    /// Set the base color used by the standard effects
    #[command(visible_alias = "c")]
    Color {
        /// Red channel (0-255)
        r: u8,
        /// Green channel (0-255)
        g: u8,
        /// Blue channel (0-255)
        b: u8,
    },

    /// Set one key's LED color
    #[command(visible_alias = "k")]
    Key {
        /// Key LED id (decimal, or hex with 0x prefix)
        #[arg(value_parser = parse_key_id)]
        key: u8,
        /// Red channel (0-255)
        r: u8,
        /// Green channel (0-255)
        g: u8,
        /// Blue channel (0-255)
        b: u8,
    },

    /// Paint an image across the per-key grid and save it
    Paint {
        /// PNG or JPEG file to paint
        file: PathBuf,

        /// Use the shorter inter-key pacing
        #[arg(long)]
        fast: bool,
    },

    /// Turn off all per-key LEDs on the target profile
    Clear,

    /// Persist the current per-key layout on the device
    Save,

    /// Rainbow sweep across every key LED id
    Demo,
}

/// Built-in lighting effects by name
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EffectArg {
    Shine,
    Trigger,
    Ripple,
    Fireworks,
    Radiation,
    Breathing,
    RainbowWave,
    Spectrum,
}

impl From<EffectArg> for LightingMode {
    fn from(arg: EffectArg) -> Self {
        match arg {
            EffectArg::Shine => LightingMode::Shine,
            EffectArg::Trigger => LightingMode::Trigger,
            EffectArg::Ripple => LightingMode::Ripple,
            EffectArg::Fireworks => LightingMode::Fireworks,
            EffectArg::Radiation => LightingMode::Radiation,
            EffectArg::Breathing => LightingMode::Breathing,
            EffectArg::RainbowWave => LightingMode::RainbowWave,
            EffectArg::Spectrum => LightingMode::SpectrumColors,
        }
    }
}

/// Spectrum sub-behaviors by name
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SpectrumArg {
    Shine,
    Breathing,
    Trigger,
}

impl From<SpectrumArg> for SpectrumMode {
    fn from(arg: SpectrumArg) -> Self {
        match arg {
            SpectrumArg::Shine => SpectrumMode::Shine,
            SpectrumArg::Breathing => SpectrumMode::Breathing,
            SpectrumArg::Trigger => SpectrumMode::Trigger,
        }
    }
}

fn parse_key_id(s: &str) -> Result<u8, String> {
    let parsed = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => u8::from_str_radix(hex, 16),
        None => s.parse(),
    };
    parsed.map_err(|_| format!("invalid key id '{s}' (use decimal or 0xNN)"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_id_accepts_decimal_and_hex() {
        assert_eq!(parse_key_id("11"), Ok(11));
        assert_eq!(parse_key_id("0x0B"), Ok(0x0B));
        assert_eq!(parse_key_id("0XFF"), Ok(0xFF));
        assert!(parse_key_id("0x100").is_err());
        assert!(parse_key_id("escape").is_err());
    }
}
