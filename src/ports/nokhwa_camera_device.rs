use std::sync::{mpsc, Arc, Mutex};
use std::thread::JoinHandle;

use async_trait::async_trait;
use nokhwa::pixel_format::RgbFormat;
use nokhwa::utils::{ApiBackend, RequestedFormat, RequestedFormatType};
use nokhwa::Camera;
use tokio::sync::oneshot;

use crate::core::interfaces::ports::{CameraDevice, CameraStream};
use crate::core::models::{EncodedImage, FacingMode, PipelineError};
use crate::global_constants::{CAMERA_JPEG_QUALITY, LOG_TAG_CAMERA};

const CAMERA_WORKER_THREAD_NAME: &str = "camera-worker";

enum CameraCommand {
    Capture(oneshot::Sender<Result<EncodedImage, PipelineError>>),
    Release,
}

type RetiredWorkers = Arc<Mutex<Vec<JoinHandle<()>>>>;

/// Native camera access. Each acquired stream gets its own worker thread that
/// owns the device, since platform camera handles are not `Send` everywhere.
///
/// Releasing a stream never blocks: the stopping worker is parked here and joined
/// on the blocking pool before the next acquire.
pub struct NokhwaCameraDevice {
    retired_workers: RetiredWorkers,
}

impl NokhwaCameraDevice {
    pub fn initialize() -> Self {
        log::debug!("{} initializing native camera device", LOG_TAG_CAMERA);
        Self {
            retired_workers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn take_retired_workers(&self) -> Vec<JoinHandle<()>> {
        match self.retired_workers.lock() {
            Ok(mut workers) => std::mem::take(&mut *workers),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }
}

async fn join_workers(workers: Vec<JoinHandle<()>>) {
    if workers.is_empty() {
        return;
    }

    log::debug!("{} Waiting for {} camera worker(s) to stop", LOG_TAG_CAMERA, workers.len());
    let joined = tokio::task::spawn_blocking(move || {
        workers
            .into_iter()
            .map(JoinHandle::join)
            .filter(Result::is_err)
            .count()
    })
    .await;

    match joined {
        Ok(0) => {}
        Ok(panicked) => log::error!("{} {} camera worker(s) panicked", LOG_TAG_CAMERA, panicked),
        Err(e) => log::error!("{} Failed to join camera workers: {}", LOG_TAG_CAMERA, e),
    }
}

/// Front is the first enumerated device, back is the last. A single camera serves both.
pub fn select_camera_index(device_count: usize, facing_mode: FacingMode) -> Option<usize> {
    if device_count == 0 {
        return None;
    }

    match facing_mode {
        FacingMode::User => Some(0),
        FacingMode::Environment => Some(device_count - 1),
    }
}

fn device_error(context: &str, error: impl std::fmt::Display) -> PipelineError {
    PipelineError::Device(format!("{}: {}", context, error))
}

fn open_camera(facing_mode: FacingMode) -> Result<Camera, PipelineError> {
    let devices =
        nokhwa::query(ApiBackend::Auto).map_err(|e| device_error("failed to list cameras", e))?;

    let device_index = select_camera_index(devices.len(), facing_mode)
        .ok_or_else(|| PipelineError::Device("no camera found".to_string()))?;
    let device_info = &devices[device_index];

    log::info!(
        "{} Opening '{}' for {} facing mode ({} devices)",
        LOG_TAG_CAMERA,
        device_info.human_name(),
        facing_mode,
        devices.len()
    );

    let requested_format =
        RequestedFormat::new::<RgbFormat>(RequestedFormatType::AbsoluteHighestResolution);
    let mut camera = Camera::new(device_info.index().clone(), requested_format)
        .map_err(|e| device_error("failed to open camera", e))?;

    camera
        .open_stream()
        .map_err(|e| device_error("failed to start camera stream", e))?;

    Ok(camera)
}

fn grab_frame(camera: &mut Camera) -> Result<EncodedImage, PipelineError> {
    let frame = camera
        .frame()
        .map_err(|e| device_error("failed to read camera frame", e))?;
    let decoded = frame
        .decode_image::<RgbFormat>()
        .map_err(|e| device_error("failed to decode camera frame", e))?;

    let (width, height) = (decoded.width(), decoded.height());
    let rgb_frame = image::RgbImage::from_raw(width, height, decoded.into_raw())
        .ok_or_else(|| PipelineError::Device("camera frame has an invalid size".to_string()))?;

    log::debug!("{} Captured {}x{} frame", LOG_TAG_CAMERA, width, height);
    EncodedImage::encode_jpeg_frame(&rgb_frame, CAMERA_JPEG_QUALITY)
}

fn run_camera_worker(
    facing_mode: FacingMode,
    commands: mpsc::Receiver<CameraCommand>,
    ready: oneshot::Sender<Result<(), PipelineError>>,
) {
    let mut camera = match open_camera(facing_mode) {
        Ok(camera) => {
            let _ = ready.send(Ok(()));
            camera
        }
        Err(e) => {
            let _ = ready.send(Err(e));
            return;
        }
    };

    // A dropped sender ends the loop the same way an explicit release does.
    while let Ok(command) = commands.recv() {
        match command {
            CameraCommand::Capture(reply) => {
                let _ = reply.send(grab_frame(&mut camera));
            }
            CameraCommand::Release => break,
        }
    }

    if let Err(e) = camera.stop_stream() {
        log::warn!("{} Failed to stop camera stream: {}", LOG_TAG_CAMERA, e);
    }
    log::info!("{} {} camera stopped", LOG_TAG_CAMERA, facing_mode);
}

#[async_trait]
impl CameraDevice for NokhwaCameraDevice {
    async fn acquire_stream(
        &self,
        facing_mode: FacingMode,
    ) -> Result<Box<dyn CameraStream>, PipelineError> {
        join_workers(self.take_retired_workers()).await;

        let (command_sender, command_receiver) = mpsc::channel();
        let (ready_sender, ready_receiver) = oneshot::channel();

        let worker = std::thread::Builder::new()
            .name(CAMERA_WORKER_THREAD_NAME.to_string())
            .spawn(move || run_camera_worker(facing_mode, command_receiver, ready_sender))
            .map_err(|e| device_error("failed to start camera worker", e))?;

        let startup = ready_receiver
            .await
            .unwrap_or_else(|_| Err(PipelineError::Device("camera worker stopped".to_string())));

        if let Err(e) = startup {
            join_workers(vec![worker]).await;
            return Err(e);
        }

        Ok(Box::new(NokhwaCameraStream {
            facing_mode,
            command_sender,
            worker: Some(worker),
            retired_workers: Arc::clone(&self.retired_workers),
        }))
    }

    async fn wait_for_release(&self) {
        join_workers(self.take_retired_workers()).await;
    }
}

struct NokhwaCameraStream {
    facing_mode: FacingMode,
    command_sender: mpsc::Sender<CameraCommand>,
    worker: Option<JoinHandle<()>>,
    retired_workers: RetiredWorkers,
}

#[async_trait]
impl CameraStream for NokhwaCameraStream {
    fn facing_mode(&self) -> FacingMode {
        self.facing_mode
    }

    async fn capture_frame(&mut self) -> Result<EncodedImage, PipelineError> {
        if self.worker.is_none() {
            return Err(PipelineError::Device("camera was released".to_string()));
        }

        let (reply_sender, reply_receiver) = oneshot::channel();
        self.command_sender
            .send(CameraCommand::Capture(reply_sender))
            .map_err(|_| PipelineError::Device("camera worker stopped".to_string()))?;

        reply_receiver
            .await
            .map_err(|_| PipelineError::Device("camera worker stopped".to_string()))?
    }

    fn release(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };

        let _ = self.command_sender.send(CameraCommand::Release);
        match self.retired_workers.lock() {
            Ok(mut workers) => workers.push(worker),
            Err(poisoned) => poisoned.into_inner().push(worker),
        }
    }
}

impl Drop for NokhwaCameraStream {
    fn drop(&mut self) {
        self.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_devices_selects_nothing() {
        assert_eq!(select_camera_index(0, FacingMode::User), None);
        assert_eq!(select_camera_index(0, FacingMode::Environment), None);
    }

    #[test]
    fn test_front_is_first_and_back_is_last() {
        assert_eq!(select_camera_index(3, FacingMode::User), Some(0));
        assert_eq!(select_camera_index(3, FacingMode::Environment), Some(2));
    }

    #[test]
    fn test_single_camera_serves_both_facing_modes() {
        assert_eq!(select_camera_index(1, FacingMode::User), Some(0));
        assert_eq!(select_camera_index(1, FacingMode::Environment), Some(0));
    }

    fn idle_worker(
        stopped: Arc<std::sync::atomic::AtomicBool>,
    ) -> (mpsc::Sender<CameraCommand>, JoinHandle<()>) {
        let (command_sender, command_receiver) = mpsc::channel::<CameraCommand>();
        let worker = std::thread::spawn(move || {
            while let Ok(command) = command_receiver.recv() {
                if matches!(command, CameraCommand::Release) {
                    break;
                }
            }
            std::thread::sleep(std::time::Duration::from_millis(50));
            stopped.store(true, std::sync::atomic::Ordering::SeqCst);
        });
        (command_sender, worker)
    }

    #[tokio::test]
    async fn test_release_hands_the_worker_to_the_device_without_joining() {
        let device = NokhwaCameraDevice::initialize();
        let stopped = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let (command_sender, worker) = idle_worker(Arc::clone(&stopped));
        let mut stream = NokhwaCameraStream {
            facing_mode: FacingMode::Environment,
            command_sender,
            worker: Some(worker),
            retired_workers: Arc::clone(&device.retired_workers),
        };

        stream.release();
        stream.release();

        assert!(stream.worker.is_none());
        assert_eq!(device.retired_workers.lock().unwrap().len(), 1);

        device.wait_for_release().await;

        assert!(stopped.load(std::sync::atomic::Ordering::SeqCst));
        assert!(device.retired_workers.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_dropped_stream_is_retired_too() {
        let device = NokhwaCameraDevice::initialize();
        let stopped = Arc::new(std::sync::atomic::AtomicBool::new(false));
        let (command_sender, worker) = idle_worker(Arc::clone(&stopped));

        drop(NokhwaCameraStream {
            facing_mode: FacingMode::User,
            command_sender,
            worker: Some(worker),
            retired_workers: Arc::clone(&device.retired_workers),
        });
        device.wait_for_release().await;

        assert!(stopped.load(std::sync::atomic::Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_released_stream_refuses_capture() {
        let (command_sender, _command_receiver) = mpsc::channel();
        let mut stream = NokhwaCameraStream {
            facing_mode: FacingMode::User,
            command_sender,
            worker: None,
            retired_workers: Arc::new(Mutex::new(Vec::new())),
        };

        stream.release();
        let result = stream.capture_frame().await;

        assert!(matches!(result, Err(PipelineError::Device(_))));
    }
}
