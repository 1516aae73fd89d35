use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::fmt;

use super::PipelineError;
use crate::global_constants::LOG_TAG_ENCODED_IMAGE;

const DATA_URL_SCHEME: &str = "data:";
const BASE64_MARKER: &str = ";base64";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Webp,
}

impl ImageMimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageMimeType::Jpeg => "image/jpeg",
            ImageMimeType::Png => "image/png",
            ImageMimeType::Webp => "image/webp",
        }
    }

    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.trim().to_ascii_lowercase().as_str() {
            "jpg" | "jpeg" => Some(ImageMimeType::Jpeg),
            "png" => Some(ImageMimeType::Png),
            "webp" => Some(ImageMimeType::Webp),
            _ => None,
        }
    }

    /// Accepts a full `Content-Type` value, parameters included.
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();

        match essence.as_str() {
            "image/jpeg" | "image/jpg" | "image/pjpeg" => Some(ImageMimeType::Jpeg),
            "image/png" => Some(ImageMimeType::Png),
            "image/webp" => Some(ImageMimeType::Webp),
            _ => None,
        }
    }

    pub fn sniff(bytes: &[u8]) -> Option<Self> {
        match image::guess_format(bytes).ok()? {
            image::ImageFormat::Jpeg => Some(ImageMimeType::Jpeg),
            image::ImageFormat::Png => Some(ImageMimeType::Png),
            image::ImageFormat::WebP => Some(ImageMimeType::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageMimeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An in-memory image carrying its mime type and base64 payload.
///
/// Every constructor guarantees the payload decodes back into raw bytes.
#[derive(Clone, PartialEq)]
pub struct EncodedImage {
    mime_type: ImageMimeType,
    payload: String,
}

impl fmt::Debug for EncodedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EncodedImage")
            .field("mime_type", &self.mime_type)
            .field("payload_len", &self.payload.len())
            .finish()
    }
}

impl EncodedImage {
    pub fn from_bytes(mime_type: ImageMimeType, raw_bytes: &[u8]) -> Self {
        log::debug!(
            "{} encoding {} bytes as {}",
            LOG_TAG_ENCODED_IMAGE,
            raw_bytes.len(),
            mime_type
        );

        Self {
            mime_type,
            payload: STANDARD.encode(raw_bytes),
        }
    }

    pub fn from_data_url(data_url: &str) -> Result<Self, PipelineError> {
        let without_scheme = data_url
            .strip_prefix(DATA_URL_SCHEME)
            .ok_or_else(|| PipelineError::Decode("missing data URL scheme".to_string()))?;

        let (header, payload) = without_scheme
            .split_once(',')
            .ok_or_else(|| PipelineError::Decode("missing data URL payload".to_string()))?;

        let declared_type = header
            .strip_suffix(BASE64_MARKER)
            .ok_or_else(|| PipelineError::Decode("data URL is not base64 encoded".to_string()))?;

        let mime_type = ImageMimeType::from_content_type(declared_type).ok_or_else(|| {
            PipelineError::Decode(format!("unsupported image type '{}'", declared_type))
        })?;

        STANDARD
            .decode(payload)
            .map_err(|e| PipelineError::Decode(format!("invalid base64 payload: {}", e)))?;

        Ok(Self {
            mime_type,
            payload: payload.to_string(),
        })
    }

    pub fn encode_jpeg_frame(frame: &image::RgbImage, quality: u8) -> Result<Self, PipelineError> {
        let mut jpeg_bytes = Vec::new();
        let mut encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);

        encoder
            .encode_image(frame)
            .map_err(|e| PipelineError::Device(format!("failed to encode camera frame: {}", e)))?;

        Ok(Self::from_bytes(ImageMimeType::Jpeg, &jpeg_bytes))
    }

    pub fn mime_type(&self) -> ImageMimeType {
        self.mime_type
    }

    /// The raw base64 payload with the data URL header stripped.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn to_data_url(&self) -> String {
        format!(
            "{}{}{},{}",
            DATA_URL_SCHEME,
            self.mime_type.as_str(),
            BASE64_MARKER,
            self.payload
        )
    }

    pub fn decode_bytes(&self) -> Result<Vec<u8>, PipelineError> {
        STANDARD
            .decode(&self.payload)
            .map_err(|e| PipelineError::Decode(format!("invalid base64 payload: {}", e)))
    }
}
