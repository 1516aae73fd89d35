use async_trait::async_trait;

use crate::core::models::{EncodedImage, FacingMode, PipelineError};

#[async_trait]
pub trait CameraDevice: Send + Sync {
    async fn acquire_stream(
        &self,
        facing_mode: FacingMode,
    ) -> Result<Box<dyn CameraStream>, PipelineError>;

    /// Resolves once every released stream has actually stopped the hardware.
    async fn wait_for_release(&self) {}
}

/// A live device stream. Holding one means holding the camera hardware.
#[async_trait]
pub trait CameraStream: Send {
    fn facing_mode(&self) -> FacingMode;

    async fn capture_frame(&mut self) -> Result<EncodedImage, PipelineError>;

    /// Stops the device. Calling it more than once is a no-op.
    fn release(&mut self);
}
