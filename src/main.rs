//! Tesoro Gram Spectrum RGB Driver CLI
//!
//! A command-line interface for controlling the per-key lighting of
//! Tesoro Spectrum keyboards.

use std::time::Duration;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tesoro_keyboard::{Keyboard, LedId, LightingMode, Profile, Rgb, SpectrumMode};
use tesoro_rgb::{ImagePainter, PaintPace};

mod cli;
use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let profile = Profile::from_u8(cli.profile).context("profile must be 1-6")?;

    let mut keyboard = Keyboard::new();
    if !keyboard.initialize().await? {
        bail!("no Tesoro Spectrum keyboard found (is the lighting interface accessible?)");
    }

    match cli.command {
        Commands::SetProfile => {
            keyboard.set_profile(profile).await?;
            info!("Switched to profile {}", cli.profile);
        }
        Commands::Mode { effect, spectrum } => {
            let mode: LightingMode = effect.into();
            keyboard
                .set_lighting_mode(mode, spectrum.into(), profile)
                .await?;
            info!("Lighting mode set to {}", mode.name());
        }
        Commands::Color { r, g, b } => {
            keyboard
                .set_profile_color(Rgb::new(r, g, b), profile)
                .await?;
        }
        Commands::Key { key, r, g, b } => {
            keyboard
                .set_key_color(LedId(key), Rgb::new(r, g, b), profile)
                .await?;
        }
        Commands::Paint { file, fast } => {
            let image = image::open(&file)
                .with_context(|| format!("failed to open image {}", file.display()))?;
            let pace = if fast { PaintPace::Fast } else { PaintPace::Safe };

            keyboard.set_profile(profile).await?;
            keyboard
                .set_lighting_mode(LightingMode::SpectrumColors, SpectrumMode::Shine, profile)
                .await?;
            let painted = ImagePainter::new(pace)
                .paint(&keyboard, &image, profile)
                .await?;
            keyboard.save_spectrum(profile).await?;
            info!("Painted {painted} keys");
        }
        Commands::Clear => {
            keyboard.clear_spectrum(profile).await?;
        }
        Commands::Save => {
            keyboard.save_spectrum(profile).await?;
        }
        Commands::Demo => {
            run_demo(&keyboard, profile).await?;
        }
    }

    keyboard.close().await?;
    Ok(())
}

/// Sweep a rainbow across the whole LED id space. Ids 0xFE and 0xFF
/// are the clear/save pseudo keys and stay out of the sweep.
async fn run_demo(keyboard: &Keyboard, profile: Profile) -> anyhow::Result<()> {
    keyboard.set_profile(profile).await?;
    keyboard
        .set_lighting_mode(LightingMode::SpectrumColors, SpectrumMode::Shine, profile)
        .await?;

    for raw in 0..=0xFDu8 {
        let hue = f32::from(raw) / 254.0 * 360.0;
        keyboard
            .set_key_color_with_delay(
                LedId(raw),
                Rgb::from_hsv(hue, 1.0, 1.0),
                profile,
                Duration::from_millis(1),
            )
            .await?;
    }

    keyboard.save_spectrum(profile).await?;
    info!("Demo sweep complete");
    Ok(())
}
