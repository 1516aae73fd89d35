use std::sync::Arc;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::core::models::{EncodedImage, FacingMode, PipelineError};
use crate::global_constants::LOG_TAG_CAMERA;

/// Owns at most one camera stream and releases it on every exit path,
/// including drop.
pub struct CameraSession {
    camera_device: Arc<dyn CameraDevice>,
    active_stream: Option<Box<dyn CameraStream>>,
    facing_mode: FacingMode,
}

impl CameraSession {
    pub fn new(camera_device: Arc<dyn CameraDevice>, facing_mode: FacingMode) -> Self {
        Self {
            camera_device,
            active_stream: None,
            facing_mode,
        }
    }

    pub fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    pub fn is_active(&self) -> bool {
        self.active_stream.is_some()
    }

    pub async fn open(&mut self) -> Result<FacingMode, PipelineError> {
        self.close();
        self.acquire(self.facing_mode).await
    }

    pub async fn toggle_facing_mode(&mut self) -> Result<FacingMode, PipelineError> {
        let next_facing_mode = self.facing_mode.opposite();
        log::info!(
            "{} Switching camera {} -> {}",
            LOG_TAG_CAMERA,
            self.facing_mode,
            next_facing_mode
        );

        self.close();
        self.facing_mode = next_facing_mode;
        self.acquire(next_facing_mode).await
    }

    /// Snapshots one frame and releases the stream whether or not the grab succeeded.
    pub async fn capture(&mut self) -> Result<EncodedImage, PipelineError> {
        let Some(mut stream) = self.active_stream.take() else {
            return Err(PipelineError::Device("camera is not active".to_string()));
        };

        let captured = stream.capture_frame().await;
        stream.release();

        match &captured {
            Ok(image) => log::info!(
                "{} Captured {} frame, camera released",
                LOG_TAG_CAMERA,
                image.mime_type()
            ),
            Err(e) => log::error!("{} Frame capture failed: {}", LOG_TAG_CAMERA, e),
        }

        captured
    }

    pub fn close(&mut self) {
        if let Some(mut stream) = self.active_stream.take() {
            log::info!(
                "{} Releasing {} camera stream",
                LOG_TAG_CAMERA,
                stream.facing_mode()
            );
            stream.release();
        }
    }

    /// Releases the stream and waits until the device has stopped.
    pub async fn shutdown(&mut self) {
        self.close();
        self.camera_device.wait_for_release().await;
    }

    async fn acquire(&mut self, facing_mode: FacingMode) -> Result<FacingMode, PipelineError> {
        let camera_device = Arc::clone(&self.camera_device);

        match camera_device.acquire_stream(facing_mode).await {
            Ok(stream) => {
                log::info!("{} Acquired {} camera stream", LOG_TAG_CAMERA, facing_mode);
                self.active_stream = Some(stream);
                Ok(facing_mode)
            }
            Err(e) => {
                log::error!(
                    "{} Failed to acquire {} camera: {}",
                    LOG_TAG_CAMERA,
                    facing_mode,
                    e
                );
                Err(e)
            }
        }
    }
}

impl Drop for CameraSession {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::ImageMimeType;
    use async_trait::async_trait;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum CameraEvent {
        Acquire(FacingMode),
        Capture(FacingMode),
        Release(FacingMode),
        AwaitStopped,
    }

    #[derive(Default)]
    struct CameraLedger {
        events: Vec<CameraEvent>,
        active_streams: usize,
        peak_active_streams: usize,
    }

    struct MockCameraDevice {
        ledger: Arc<Mutex<CameraLedger>>,
        deny_access: bool,
        fail_capture: bool,
    }

    impl MockCameraDevice {
        fn new() -> Self {
            Self {
                ledger: Arc::new(Mutex::new(CameraLedger::default())),
                deny_access: false,
                fail_capture: false,
            }
        }

        fn events(&self) -> Vec<CameraEvent> {
            self.ledger.lock().unwrap().events.clone()
        }

        fn active_streams(&self) -> usize {
            self.ledger.lock().unwrap().active_streams
        }

        fn peak_active_streams(&self) -> usize {
            self.ledger.lock().unwrap().peak_active_streams
        }
    }

    struct MockCameraStream {
        facing_mode: FacingMode,
        ledger: Arc<Mutex<CameraLedger>>,
        fail_capture: bool,
        released: bool,
    }

    #[async_trait]
    impl CameraDevice for MockCameraDevice {
        async fn acquire_stream(
            &self,
            facing_mode: FacingMode,
        ) -> Result<Box<dyn CameraStream>, PipelineError> {
            if self.deny_access {
                return Err(PipelineError::Device("permission denied".to_string()));
            }

            let mut ledger = self.ledger.lock().unwrap();
            ledger.events.push(CameraEvent::Acquire(facing_mode));
            ledger.active_streams += 1;
            ledger.peak_active_streams = ledger.peak_active_streams.max(ledger.active_streams);

            Ok(Box::new(MockCameraStream {
                facing_mode,
                ledger: Arc::clone(&self.ledger),
                fail_capture: self.fail_capture,
                released: false,
            }))
        }

        async fn wait_for_release(&self) {
            self.ledger
                .lock()
                .unwrap()
                .events
                .push(CameraEvent::AwaitStopped);
        }
    }

    #[async_trait]
    impl CameraStream for MockCameraStream {
        fn facing_mode(&self) -> FacingMode {
            self.facing_mode
        }

        async fn capture_frame(&mut self) -> Result<EncodedImage, PipelineError> {
            self.ledger
                .lock()
                .unwrap()
                .events
                .push(CameraEvent::Capture(self.facing_mode));

            if self.fail_capture {
                return Err(PipelineError::Device("frame grab failed".to_string()));
            }

            Ok(EncodedImage::from_bytes(ImageMimeType::Jpeg, &[0xFF, 0xD8, 0xFF]))
        }

        fn release(&mut self) {
            if self.released {
                return;
            }
            self.released = true;

            let mut ledger = self.ledger.lock().unwrap();
            ledger.events.push(CameraEvent::Release(self.facing_mode));
            ledger.active_streams -= 1;
        }
    }

    fn create_session(device: &Arc<MockCameraDevice>) -> CameraSession {
        CameraSession::new(
            Arc::clone(device) as Arc<dyn CameraDevice>,
            FacingMode::Environment,
        )
    }

    #[tokio::test]
    async fn test_open_acquires_requested_facing_mode() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);

        let facing_mode = session.open().await.unwrap();

        assert_eq!(facing_mode, FacingMode::Environment);
        assert!(session.is_active());
        assert_eq!(device.events(), vec![CameraEvent::Acquire(FacingMode::Environment)]);
    }

    #[tokio::test]
    async fn test_toggle_releases_before_reacquiring() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);
        session.open().await.unwrap();

        session.toggle_facing_mode().await.unwrap();
        session.toggle_facing_mode().await.unwrap();
        session.toggle_facing_mode().await.unwrap();

        assert_eq!(
            device.events(),
            vec![
                CameraEvent::Acquire(FacingMode::Environment),
                CameraEvent::Release(FacingMode::Environment),
                CameraEvent::Acquire(FacingMode::User),
                CameraEvent::Release(FacingMode::User),
                CameraEvent::Acquire(FacingMode::Environment),
                CameraEvent::Release(FacingMode::Environment),
                CameraEvent::Acquire(FacingMode::User),
            ]
        );
        assert_eq!(device.active_streams(), 1);
        assert_eq!(device.peak_active_streams(), 1);
        assert_eq!(session.facing_mode(), FacingMode::User);
    }

    #[tokio::test]
    async fn test_reopening_never_holds_two_streams() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);

        session.open().await.unwrap();
        session.open().await.unwrap();

        assert_eq!(device.active_streams(), 1);
        assert_eq!(device.peak_active_streams(), 1);
    }

    #[tokio::test]
    async fn test_capture_releases_stream_after_snapshot() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);
        session.open().await.unwrap();

        let image = session.capture().await.unwrap();

        assert_eq!(image.mime_type(), ImageMimeType::Jpeg);
        assert!(!session.is_active());
        assert_eq!(device.active_streams(), 0);
        assert_eq!(
            device.events().last(),
            Some(&CameraEvent::Release(FacingMode::Environment))
        );
    }

    #[tokio::test]
    async fn test_failed_capture_still_releases_stream() {
        let device = Arc::new(MockCameraDevice {
            fail_capture: true,
            ..MockCameraDevice::new()
        });
        let mut session = create_session(&device);
        session.open().await.unwrap();

        let result = session.capture().await;

        assert!(matches!(result, Err(PipelineError::Device(_))));
        assert_eq!(device.active_streams(), 0);
    }

    #[tokio::test]
    async fn test_capture_without_stream_is_device_error() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);

        let result = session.capture().await;

        assert!(matches!(result, Err(PipelineError::Device(_))));
        assert!(device.events().is_empty());
    }

    #[tokio::test]
    async fn test_denied_access_surfaces_device_error_and_holds_nothing() {
        let device = Arc::new(MockCameraDevice {
            deny_access: true,
            ..MockCameraDevice::new()
        });
        let mut session = create_session(&device);

        let result = session.open().await;

        assert_eq!(
            result,
            Err(PipelineError::Device("permission denied".to_string()))
        );
        assert!(!session.is_active());
        assert_eq!(device.active_streams(), 0);
    }

    #[tokio::test]
    async fn test_close_and_drop_release_the_stream() {
        let device = Arc::new(MockCameraDevice::new());

        let mut session = create_session(&device);
        session.open().await.unwrap();
        session.close();
        session.close();
        assert_eq!(device.active_streams(), 0);

        let mut dropped_session = create_session(&device);
        dropped_session.open().await.unwrap();
        assert_eq!(device.active_streams(), 1);
        drop(dropped_session);

        assert_eq!(device.active_streams(), 0);
    }

    #[tokio::test]
    async fn test_shutdown_releases_then_waits_for_the_device() {
        let device = Arc::new(MockCameraDevice::new());
        let mut session = create_session(&device);
        session.open().await.unwrap();

        session.shutdown().await;

        assert!(!session.is_active());
        assert_eq!(
            device.events(),
            vec![
                CameraEvent::Acquire(FacingMode::Environment),
                CameraEvent::Release(FacingMode::Environment),
                CameraEvent::AwaitStopped,
            ]
        );
    }
}
