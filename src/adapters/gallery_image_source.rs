use async_trait::async_trait;

use crate::core::interfaces::adapters::RemoteImageLoader;
use crate::core::models::{EncodedImage, ImageMimeType, PipelineError};
use crate::global_constants::LOG_TAG_GALLERY;

/// Downloads gallery sample images so they can enter the pipeline like any other source.
pub struct GalleryImageSource {
    http_client: reqwest::Client,
}

impl GalleryImageSource {
    pub fn new(http_client: reqwest::Client) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl RemoteImageLoader for GalleryImageSource {
    async fn load_remote_image(&self, url: &str) -> Result<EncodedImage, PipelineError> {
        if url.starts_with("data:") {
            log::debug!("{} Sample image is inline, skipping download", LOG_TAG_GALLERY);
            return EncodedImage::from_data_url(url);
        }

        log::info!("{} Downloading sample image", LOG_TAG_GALLERY);
        log::debug!("{} GET {}", LOG_TAG_GALLERY, url);

        let response = self.http_client.get(url).send().await.map_err(|e| {
            log::error!("{} Download failed: {}", LOG_TAG_GALLERY, e);
            PipelineError::Decode(format!("failed to download sample image: {}", e))
        })?;

        let status = response.status();
        if !status.is_success() {
            log::error!("{} Sample image request returned {}", LOG_TAG_GALLERY, status);
            return Err(PipelineError::Decode(format!(
                "sample image request returned {}",
                status
            )));
        }

        let declared_mime_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .and_then(ImageMimeType::from_content_type);

        let raw_bytes = response.bytes().await.map_err(|e| {
            PipelineError::Decode(format!("failed to read sample image body: {}", e))
        })?;

        let mime_type = declared_mime_type
            .or_else(|| ImageMimeType::sniff(&raw_bytes))
            .ok_or_else(|| {
                PipelineError::Decode("sample image is not a jpeg, png or webp image".to_string())
            })?;

        log::debug!(
            "{} Downloaded {} bytes as {}",
            LOG_TAG_GALLERY,
            raw_bytes.len(),
            mime_type
        );

        Ok(EncodedImage::from_bytes(mime_type, &raw_bytes))
    }
}
