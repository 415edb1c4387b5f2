//! High-level lighting interface for Tesoro Spectrum keyboards
//!
//! This crate provides the stateful session API on top of any
//! transport: discovery and initialization, the six lighting
//! operations, and the post-write settle pacing the hardware needs.
//!
//! The device wants breathing room between consecutive feature-report
//! writes; without it, key updates get dropped or corrupted. The
//! default form of every operation therefore sleeps [`SETTLE_DELAY`]
//! after the write. The `*_with_delay` forms take an explicit wait for
//! callers running their own pacing (pass `Duration::ZERO` to write
//! and return immediately).

pub mod command;
pub mod error;
pub mod keys;
pub mod layout;
pub mod led;

pub use error::KeyboardError;
pub use keys::LedId;
pub use layout::{KeyLayout, LAYOUT_HEIGHT, LAYOUT_WIDTH};
pub use led::{LightingMode, Profile, Rgb, SpectrumMode};

use std::time::Duration;

use tesoro_transport::{BoxedTransport, DeviceDiscovery, HidDiscovery};
use tracing::{debug, info};

use crate::command::{
    ClearSpectrum, Command, CommandFrame, SaveSpectrum, SetKeyColor, SetLightingMode, SetProfile,
    SetProfileColor,
};

/// Post-write settle delay applied by the default operation forms
pub const SETTLE_DELAY: Duration = Duration::from_millis(100);

enum SessionState {
    Uninitialized,
    Ready {
        transport: BoxedTransport,
        layout: KeyLayout,
    },
    Closed,
}

/// A session with one Tesoro keyboard
///
/// State machine: Uninitialized -> Ready -> Closed. Every command
/// operation requires Ready and fails with
/// [`KeyboardError::NotInitialized`] otherwise, without touching the
/// transport.
///
/// The device accepts one feature report at a time and this API issues
/// one write per call; callers are expected to hold a single command
/// stream (no interleaving from multiple owners).
pub struct Keyboard {
    state: SessionState,
    settle: Duration,
}

impl Default for Keyboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Keyboard {
    /// Create an uninitialized session
    pub fn new() -> Self {
        Self {
            state: SessionState::Uninitialized,
            settle: SETTLE_DELAY,
        }
    }

    /// Create a session that is immediately Ready on a caller-supplied
    /// transport, with the reference key layout
    pub fn with_transport(transport: BoxedTransport) -> Self {
        Self {
            state: SessionState::Ready {
                transport,
                layout: KeyLayout::gram_spectrum(),
            },
            settle: SETTLE_DELAY,
        }
    }

    /// Override the settle delay used by the default operation forms
    pub fn set_settle(&mut self, settle: Duration) {
        self.settle = settle;
    }

    /// True once `initialize` has succeeded and before `close`
    pub fn is_ready(&self) -> bool {
        matches!(self.state, SessionState::Ready { .. })
    }

    /// Find and open a Tesoro keyboard via HID discovery.
    ///
    /// Returns `Ok(false)` when no lighting interface is present; the
    /// session stays Uninitialized and the caller may retry.
    pub async fn initialize(&mut self) -> Result<bool, KeyboardError> {
        self.initialize_with(&HidDiscovery::new()).await
    }

    /// Initialize against a specific discovery backend.
    ///
    /// When several interfaces match, the last enumerated one wins;
    /// the original driver scanned the same way and the preference is
    /// kept as-is.
    pub async fn initialize_with(
        &mut self,
        discovery: &dyn DeviceDiscovery,
    ) -> Result<bool, KeyboardError> {
        let devices = discovery.list_devices().await?;
        let Some(device) = devices.last() else {
            debug!("No lighting interface found");
            return Ok(false);
        };

        let transport = discovery.open_device(device).await?;
        info!(path = %device.info.device_path, "Keyboard session ready");

        self.state = SessionState::Ready {
            transport,
            layout: KeyLayout::gram_spectrum(),
        };
        Ok(true)
    }

    fn transport(&self) -> Result<&BoxedTransport, KeyboardError> {
        match &self.state {
            SessionState::Ready { transport, .. } => Ok(transport),
            _ => Err(KeyboardError::NotInitialized),
        }
    }

    /// Key-position grid built at initialization
    pub fn layout(&self) -> Result<&KeyLayout, KeyboardError> {
        match &self.state {
            SessionState::Ready { layout, .. } => Ok(layout),
            _ => Err(KeyboardError::NotInitialized),
        }
    }

    async fn send(&self, frame: CommandFrame, delay: Duration) -> Result<(), KeyboardError> {
        let transport = self.transport()?;
        transport.write_feature(frame.bytes()).await?;
        // Suspend only after the write has completed; cancellation can
        // land in this sleep but never mid-frame.
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        Ok(())
    }

    /// Switch the keyboard to the given profile
    pub async fn set_profile(&self, profile: Profile) -> Result<(), KeyboardError> {
        self.set_profile_with_delay(profile, self.settle).await
    }

    /// [`Keyboard::set_profile`] with an explicit post-write wait
    pub async fn set_profile_with_delay(
        &self,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.send(SetProfile::new(profile).frame(), delay).await
    }

    /// Select a built-in lighting effect on a profile. The spectrum
    /// sub-mode stays at its default for non-spectrum modes.
    pub async fn set_lighting_mode(
        &self,
        mode: LightingMode,
        spectrum: SpectrumMode,
        profile: Profile,
    ) -> Result<(), KeyboardError> {
        self.set_lighting_mode_with_delay(mode, spectrum, profile, self.settle)
            .await
    }

    /// [`Keyboard::set_lighting_mode`] with an explicit post-write wait
    pub async fn set_lighting_mode_with_delay(
        &self,
        mode: LightingMode,
        spectrum: SpectrumMode,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.send(
            SetLightingMode::with_spectrum(mode, spectrum, profile).frame(),
            delay,
        )
        .await
    }

    /// Set the base color used by the standard effects
    pub async fn set_profile_color(
        &self,
        color: Rgb,
        profile: Profile,
    ) -> Result<(), KeyboardError> {
        self.set_profile_color_with_delay(color, profile, self.settle)
            .await
    }

    /// [`Keyboard::set_profile_color`] with an explicit post-write wait
    pub async fn set_profile_color_with_delay(
        &self,
        color: Rgb,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.send(SetProfileColor::new(color, profile).frame(), delay)
            .await
    }

    /// Set the LED color of a single key.
    ///
    /// The sentinel key is a logical no-op: the call succeeds and
    /// nothing is written. The session must still be Ready.
    pub async fn set_key_color(
        &self,
        key: LedId,
        color: Rgb,
        profile: Profile,
    ) -> Result<(), KeyboardError> {
        self.set_key_color_with_delay(key, color, profile, self.settle)
            .await
    }

    /// [`Keyboard::set_key_color`] with an explicit post-write wait
    pub async fn set_key_color_with_delay(
        &self,
        key: LedId,
        color: Rgb,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.transport()?;
        if key.is_none() {
            return Ok(());
        }
        self.send(SetKeyColor::new(key, color, profile).frame(), delay)
            .await
    }

    /// Turn off all per-key LEDs on a profile
    pub async fn clear_spectrum(&self, profile: Profile) -> Result<(), KeyboardError> {
        self.clear_spectrum_with_delay(profile, self.settle).await
    }

    /// [`Keyboard::clear_spectrum`] with an explicit post-write wait
    pub async fn clear_spectrum_with_delay(
        &self,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.send(ClearSpectrum::new(profile).frame(), delay).await
    }

    /// Persist the current per-key layout on the device. Switching
    /// profiles without saving first loses all unsaved changes.
    pub async fn save_spectrum(&self, profile: Profile) -> Result<(), KeyboardError> {
        self.save_spectrum_with_delay(profile, self.settle).await
    }

    /// [`Keyboard::save_spectrum`] with an explicit post-write wait
    pub async fn save_spectrum_with_delay(
        &self,
        profile: Profile,
        delay: Duration,
    ) -> Result<(), KeyboardError> {
        self.send(SaveSpectrum::new(profile).frame(), delay).await
    }

    /// Close communications with the device.
    ///
    /// Idempotent: closing an Uninitialized, Closed, or already
    /// disconnected session is a no-op, never an error.
    pub async fn close(&mut self) -> Result<(), KeyboardError> {
        if let SessionState::Ready { transport, .. } = &self.state {
            if transport.is_connected().await {
                transport.close().await?;
            }
        }
        self.state = SessionState::Closed;
        Ok(())
    }
}
