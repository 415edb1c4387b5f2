//! Session state machine and wire-format tests over a mock transport

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use tesoro_keyboard::{
    Keyboard, KeyboardError, LedId, LightingMode, Profile, Rgb, SpectrumMode, SETTLE_DELAY,
};
use tesoro_transport::{
    BoxedTransport, DeviceDiscovery, DiscoveredDevice, Transport, TransportDeviceInfo,
    TransportError, FRAME_SIZE,
};

#[derive(Default)]
struct MockTransport {
    info: TransportDeviceInfo,
    writes: Mutex<Vec<[u8; FRAME_SIZE]>>,
    closes: AtomicUsize,
}

impl MockTransport {
    fn written(&self) -> Vec<[u8; FRAME_SIZE]> {
        self.writes.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn write_feature(&self, frame: &[u8; FRAME_SIZE]) -> Result<(), TransportError> {
        self.writes.lock().unwrap().push(*frame);
        Ok(())
    }

    fn device_info(&self) -> &TransportDeviceInfo {
        &self.info
    }

    async fn is_connected(&self) -> bool {
        true
    }

    async fn close(&self) -> Result<(), TransportError> {
        self.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct MockDiscovery {
    devices: Vec<DiscoveredDevice>,
    opened: Mutex<Vec<Arc<MockTransport>>>,
}

impl MockDiscovery {
    fn with_paths(paths: &[&str]) -> Self {
        Self {
            devices: paths
                .iter()
                .map(|p| DiscoveredDevice {
                    info: TransportDeviceInfo {
                        device_path: p.to_string(),
                        ..Default::default()
                    },
                })
                .collect(),
            opened: Mutex::new(Vec::new()),
        }
    }

    fn empty() -> Self {
        Self::with_paths(&[])
    }

    fn opened_paths(&self) -> Vec<String> {
        self.opened
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.info.device_path.clone())
            .collect()
    }
}

#[async_trait]
impl DeviceDiscovery for MockDiscovery {
    async fn list_devices(&self) -> Result<Vec<DiscoveredDevice>, TransportError> {
        Ok(self.devices.clone())
    }

    async fn open_device(
        &self,
        device: &DiscoveredDevice,
    ) -> Result<BoxedTransport, TransportError> {
        let transport = Arc::new(MockTransport {
            info: device.info.clone(),
            ..Default::default()
        });
        self.opened.lock().unwrap().push(transport.clone());
        Ok(transport)
    }
}

fn ready_keyboard() -> (Keyboard, Arc<MockTransport>) {
    let transport = Arc::new(MockTransport::default());
    let mut keyboard = Keyboard::with_transport(transport.clone());
    keyboard.set_settle(Duration::ZERO);
    (keyboard, transport)
}

#[tokio::test]
async fn operations_encode_expected_frames() {
    let (keyboard, transport) = ready_keyboard();

    keyboard.set_profile(Profile::Pc).await.unwrap();
    keyboard
        .set_lighting_mode(LightingMode::SpectrumColors, SpectrumMode::Shine, Profile::Pc)
        .await
        .unwrap();
    keyboard
        .set_key_color(LedId::ESCAPE, Rgb::new(10, 20, 30), Profile::Pc)
        .await
        .unwrap();
    keyboard.clear_spectrum(Profile::Pc).await.unwrap();
    keyboard.save_spectrum(Profile::Pc).await.unwrap();

    assert_eq!(
        transport.written(),
        vec![
            [0x07, 0x03, 0x06, 0, 0, 0, 0, 0],
            [0x07, 0x0A, 0x06, 0x08, 0x00, 0, 0, 0],
            [0x07, 0x0D, 0x06, 0x0B, 0x0A, 0x14, 0x1E, 0x00],
            [0x07, 0x0D, 0x06, 0xFE, 0, 0, 0, 0],
            [0x07, 0x0D, 0x06, 0xFF, 0, 0, 0, 0],
        ]
    );
}

#[tokio::test]
async fn sentinel_key_writes_nothing() {
    let (keyboard, transport) = ready_keyboard();

    keyboard
        .set_key_color(LedId::NONE, Rgb::WHITE, Profile::Pc)
        .await
        .unwrap();

    assert!(transport.written().is_empty());
}

#[tokio::test]
async fn commands_fail_before_initialize() {
    let keyboard = Keyboard::new();
    assert!(!keyboard.is_ready());

    let err = keyboard.set_profile(Profile::Pc).await.unwrap_err();
    assert!(matches!(err, KeyboardError::NotInitialized));
    assert!(keyboard.layout().is_err());

    // the sentinel no-op still requires an open session
    let err = keyboard
        .set_key_color(LedId::NONE, Rgb::WHITE, Profile::Pc)
        .await
        .unwrap_err();
    assert!(matches!(err, KeyboardError::NotInitialized));
}

#[tokio::test]
async fn commands_fail_after_close() {
    let (mut keyboard, transport) = ready_keyboard();
    keyboard.close().await.unwrap();
    assert!(!keyboard.is_ready());

    let err = keyboard.save_spectrum(Profile::Pc).await.unwrap_err();
    assert!(matches!(err, KeyboardError::NotInitialized));
    assert!(transport.written().is_empty());
}

#[tokio::test]
async fn close_is_idempotent() {
    let (mut keyboard, transport) = ready_keyboard();

    keyboard.close().await.unwrap();
    keyboard.close().await.unwrap();
    keyboard.close().await.unwrap();

    assert_eq!(transport.closes.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn initialize_reports_absence_without_error() {
    let mut keyboard = Keyboard::new();
    let found = keyboard.initialize_with(&MockDiscovery::empty()).await.unwrap();
    assert!(!found);
    assert!(!keyboard.is_ready());
}

#[tokio::test]
async fn initialize_picks_last_matching_device() {
    let discovery = MockDiscovery::with_paths(&[
        "hid#vid_195d&pid_2047&mi_01&col05#a",
        "hid#vid_195d&pid_2047&mi_01&col05#b",
    ]);

    let mut keyboard = Keyboard::new();
    let found = keyboard.initialize_with(&discovery).await.unwrap();
    assert!(found);
    assert!(keyboard.is_ready());
    assert_eq!(
        discovery.opened_paths(),
        vec!["hid#vid_195d&pid_2047&mi_01&col05#b".to_string()]
    );
}

#[tokio::test]
async fn layout_available_when_ready() {
    let (keyboard, _transport) = ready_keyboard();
    let layout = keyboard.layout().unwrap();
    assert_eq!(layout.width(), 22);
    assert_eq!(layout.height(), 6);
}

#[tokio::test(start_paused = true)]
async fn default_forms_pace_by_settle_delay() {
    let transport = Arc::new(MockTransport::default());
    let keyboard = Keyboard::with_transport(transport.clone());

    let start = tokio::time::Instant::now();
    keyboard.set_profile(Profile::Pc).await.unwrap();
    assert_eq!(start.elapsed(), SETTLE_DELAY);
}

#[tokio::test(start_paused = true)]
async fn zero_delay_form_returns_immediately() {
    let transport = Arc::new(MockTransport::default());
    let keyboard = Keyboard::with_transport(transport.clone());

    let start = tokio::time::Instant::now();
    keyboard
        .set_profile_with_delay(Profile::Pc, Duration::ZERO)
        .await
        .unwrap();
    assert_eq!(start.elapsed(), Duration::ZERO);
    assert_eq!(transport.written().len(), 1);
}
