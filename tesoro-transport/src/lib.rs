//! Transport abstraction layer for Tesoro Spectrum keyboard communication
//!
//! The lighting protocol is fire-and-forget: every command is a single
//! 8-byte HID feature report and no response is ever read. This crate
//! exposes that capability behind the [`Transport`] trait together with
//! device discovery, keeping hidapi out of the higher layers.

pub mod error;
pub mod types;

mod discovery;
mod hid_wired;

pub use discovery::{is_lighting_path, DeviceDiscovery, HidDiscovery};
pub use error::TransportError;
pub use hid_wired::HidWiredTransport;
pub use types::{DiscoveredDevice, TransportDeviceInfo};

use std::sync::Arc;

use async_trait::async_trait;

/// Size of a complete command frame, report id included
pub const FRAME_SIZE: usize = 8;

/// The core transport trait - all backends implement this
///
/// A transport is a write-only channel for lighting command frames.
/// Writes are atomic: a frame either reaches the device in full or the
/// write fails. No retries happen at this layer.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Write a single feature report to the device
    async fn write_feature(&self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError>;

    /// Get device information
    fn device_info(&self) -> &TransportDeviceInfo;

    /// Check if the transport is still connected
    async fn is_connected(&self) -> bool;

    /// Close the transport. Closing an already-closed transport is a no-op.
    async fn close(&self) -> Result<(), TransportError>;
}

/// Type alias for a shared transport
pub type BoxedTransport = Arc<dyn Transport>;
