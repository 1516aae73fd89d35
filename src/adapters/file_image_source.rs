use std::path::{Path, PathBuf};

use crate::core::models::{EncodedImage, ImageMimeType, PipelineError};
use crate::global_constants::{ACCEPTED_FILE_EXTENSIONS, LOG_TAG_FILE_SOURCE};

pub struct FileImageSource;

impl FileImageSource {
    /// Loads the first dropped or picked file. Extra paths are ignored.
    pub async fn load_first(paths: &[PathBuf]) -> Result<EncodedImage, PipelineError> {
        let Some(first_path) = paths.first() else {
            return Err(PipelineError::Decode("no file was provided".to_string()));
        };

        if paths.len() > 1 {
            log::info!(
                "{} Received {} files, only {:?} will be used",
                LOG_TAG_FILE_SOURCE,
                paths.len(),
                first_path
            );
        }

        Self::load(first_path).await
    }

    pub async fn load(path: &Path) -> Result<EncodedImage, PipelineError> {
        let declared_mime_type = Self::mime_type_from_path(path)?;

        log::info!("{} Reading {:?}", LOG_TAG_FILE_SOURCE, path);
        let raw_bytes = tokio::fs::read(path).await.map_err(|e| {
            log::error!("{} Failed to read {:?}: {}", LOG_TAG_FILE_SOURCE, path, e);
            PipelineError::Decode(format!("failed to read {}: {}", path.display(), e))
        })?;

        let mime_type = match declared_mime_type {
            Some(mime_type) => mime_type,
            None => ImageMimeType::sniff(&raw_bytes).ok_or_else(|| {
                PipelineError::Decode(format!(
                    "{} is not a jpeg, png or webp image",
                    path.display()
                ))
            })?,
        };

        log::debug!(
            "{} Loaded {} bytes as {}",
            LOG_TAG_FILE_SOURCE,
            raw_bytes.len(),
            mime_type
        );

        Ok(EncodedImage::from_bytes(mime_type, &raw_bytes))
    }

    /// `Ok(None)` means the path has no extension and the bytes must be sniffed.
    fn mime_type_from_path(path: &Path) -> Result<Option<ImageMimeType>, PipelineError> {
        let Some(extension) = path.extension().and_then(|ext| ext.to_str()) else {
            return Ok(None);
        };

        ImageMimeType::from_extension(extension)
            .map(Some)
            .ok_or_else(|| {
                PipelineError::Decode(format!(
                    "unsupported file type '.{}', expected one of: {}",
                    extension,
                    ACCEPTED_FILE_EXTENSIONS.join(", ")
                ))
            })
    }
}
