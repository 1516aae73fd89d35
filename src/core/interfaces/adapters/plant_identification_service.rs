use async_trait::async_trait;

use crate::core::models::{EncodedImage, IdentificationResult, PipelineError};

#[async_trait]
pub trait PlantIdentificationService: Send + Sync {
    async fn identify(&self, image: &EncodedImage) -> Result<IdentificationResult, PipelineError>;
}
