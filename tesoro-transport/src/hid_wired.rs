//! HID wired transport implementation for direct USB connection

use std::sync::Mutex;

use async_trait::async_trait;
use hidapi::HidDevice;
use tracing::debug;

use crate::error::TransportError;
use crate::types::TransportDeviceInfo;
use crate::{Transport, FRAME_SIZE};

/// HID transport for the wired lighting interface
///
/// Writes lighting command frames as HID feature reports. The handle
/// lives behind a mutex so writes are serialized; `close` drops the
/// handle and further writes fail with `Disconnected`.
pub struct HidWiredTransport {
    /// Feature interface for commands; `None` once closed
    feature_device: Mutex<Option<HidDevice>>,
    /// Device information
    info: TransportDeviceInfo,
}

impl HidWiredTransport {
    /// Create a new wired transport from an opened HID device
    pub fn new(feature_device: HidDevice, info: TransportDeviceInfo) -> Self {
        Self {
            feature_device: Mutex::new(Some(feature_device)),
            info,
        }
    }
}

#[async_trait]
impl Transport for HidWiredTransport {
    async fn write_feature(&self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError> {
        let guard = self.feature_device.lock().unwrap();
        let device = guard.as_ref().ok_or(TransportError::Disconnected)?;
        debug!("Writing feature report: {:02X?}", frame);
        device.send_feature_report(frame)?;
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }

    async fn is_connected(&self) -> bool {
        let guard = self.feature_device.lock().unwrap();
        match guard.as_ref() {
            Some(device) => device.get_product_string().is_ok(),
            None => false,
        }
    }

    async fn close(&self) -> Result<(), TransportError> {
        // Dropping the HidDevice releases the handle; a second close
        // finds None and does nothing.
        let mut guard = self.feature_device.lock().unwrap();
        if guard.take().is_some() {
            debug!("Closed lighting interface at {}", self.info.device_path);
        }
        Ok(())
    }
}
