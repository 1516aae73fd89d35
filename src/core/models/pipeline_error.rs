use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PipelineError {
    /// The camera could not be acquired or stopped delivering frames.
    #[error("Camera unavailable: {0}")]
    Device(String),
    /// The selected image could not be read.
    #[error("Could not read the image: {0}")]
    Decode(String),
    #[error("No plant detected in the image. Please try again with a clearer photo of a plant.")]
    NoPlantDetected,
    #[error("Failed to identify plant: {0}")]
    IdentificationFailed(String),
}
