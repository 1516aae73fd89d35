use async_trait::async_trait;

use crate::core::models::{EncodedImage, PipelineError};

#[async_trait]
pub trait RemoteImageLoader: Send + Sync {
    async fn load_remote_image(&self, url: &str) -> Result<EncodedImage, PipelineError>;
}
