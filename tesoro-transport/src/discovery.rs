//! Device discovery for Tesoro Spectrum keyboards
//!
//! Tesoro keyboards expose several HID interfaces; the lighting
//! commands only work on the vendor collection reachable through the
//! interface whose platform path carries both the vendor fragment and
//! the `mi_01/col05` fragment. Matching is done by path containment,
//! not by exact equality.

use std::sync::Arc;

use async_trait::async_trait;
use hidapi::HidApi;
use tracing::{debug, info};

use crate::error::TransportError;
use crate::hid_wired::HidWiredTransport;
use crate::types::{DiscoveredDevice, TransportDeviceInfo};
use crate::BoxedTransport;

/// Vendor fragment present in every Tesoro HID device path
pub const VENDOR_PATH_TAG: &str = "hid#vid_195d";

/// Interface/collection fragment of the lighting control endpoint
pub const LIGHTING_PATH_TAG: &str = "&mi_01&col05";

/// True when a platform device path names the lighting interface.
///
/// Both fragments must be present; the vendor fragment alone matches
/// every interface of the keyboard, the collection fragment alone can
/// match unrelated vendors.
pub fn is_lighting_path(path: &str) -> bool {
    path.contains(VENDOR_PATH_TAG) && path.contains(LIGHTING_PATH_TAG)
}

/// Device discovery abstraction
#[async_trait]
pub trait DeviceDiscovery: Send + Sync {
    /// List lighting interfaces currently available, in enumeration order
    async fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError>;

    /// Open a specific device
    async fn open_device(
        &self,
        device: &DiscoveredDevice,
    ) -> Result<BoxedTransport, TransportError>;
}

/// HID device discovery for the wired lighting interface
pub struct HidDiscovery;

impl Default for HidDiscovery {
    fn default() -> Self {
        Self::new()
    }
}

impl HidDiscovery {
    /// Create a new HID discovery instance
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl DeviceDiscovery for HidDiscovery {
    async fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError> {
        let api = HidApi::new().map_err(|e| TransportError::HidError(e.to_string()))?;
        let mut devices = Vec::new();

        for device_info in api.device_list() {
            let path = device_info.path().to_string_lossy().to_string();
            if !is_lighting_path(&path) {
                continue;
            }

            debug!(
                "Found lighting interface: VID={:04X} PID={:04X} path={}",
                device_info.vendor_id(),
                device_info.product_id(),
                path
            );

            devices.push(DiscoveredDevice {
                info: TransportDeviceInfo {
                    vid: device_info.vendor_id(),
                    pid: device_info.product_id(),
                    device_path: path,
                    product_name: device_info.product_string().map(|s| s.to_string()),
                },
            });
        }

        info!("Found {} lighting interfaces", devices.len());
        Ok(devices)
    }

    async fn open_device(
        &self,
        device: &DiscoveredDevice,
    ) -> Result<BoxedTransport, TransportError> {
        let api = HidApi::new().map_err(|e| TransportError::HidError(e.to_string()))?;

        let feature_info = api
            .device_list()
            .find(|d| d.path().to_string_lossy() == device.info.device_path)
            .ok_or_else(|| TransportError::DeviceNotFound(device.info.device_path.clone()))?;

        let feature_device = feature_info
            .open_device(&api)
            .map_err(TransportError::from)?;

        info!(
            "Opened lighting interface {:04X}:{:04X} at {}",
            device.info.vid, device.info.pid, device.info.device_path
        );

        Ok(Arc::new(HidWiredTransport::new(
            feature_device,
            device.info.clone(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lighting_path_requires_both_fragments() {
        // vendor fragment only (a non-lighting interface of the keyboard)
        assert!(!is_lighting_path(
            r"\\?\hid#vid_195d&pid_2047&mi_00#8&2d&0&0000#{4d1e55b2}"
        ));
        // collection fragment only (another vendor's device)
        assert!(!is_lighting_path(
            r"\\?\hid#vid_046d&pid_c52b&mi_01&col05#8&2d&0&0004#{4d1e55b2}"
        ));
        assert!(!is_lighting_path(""));
    }

    #[test]
    fn lighting_path_matches_lighting_interface() {
        assert!(is_lighting_path(
            r"\\?\hid#vid_195d&pid_2047&mi_01&col05#8&2d&0&0004#{4d1e55b2}"
        ));
    }

    #[test]
    fn lighting_path_rejects_neighboring_collections() {
        assert!(!is_lighting_path(
            r"\\?\hid#vid_195d&pid_2047&mi_01&col06#8&2d&0&0005#{4d1e55b2}"
        ));
        assert!(!is_lighting_path(
            r"\\?\hid#vid_195d&pid_2047&mi_02&col05#8&2d&0&0006#{4d1e55b2}"
        ));
    }
}
