mod encoded_image;
mod facing_mode;
mod identification;
mod pipeline_error;
mod pipeline_state;
mod text_field;
mod user_settings;

pub use encoded_image::{EncodedImage, ImageMimeType};
pub use facing_mode::FacingMode;
pub use identification::{
    CareInstructions, IdentificationRequest, IdentificationResult, Taxonomy,
};
pub use pipeline_error::PipelineError;
pub use pipeline_state::{IdentificationTicket, PipelineState};
pub use text_field::TextField;
pub use user_settings::{Language, ThemeMode, UserSettings};
