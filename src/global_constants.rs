use std::time::Duration;

pub const APPLICATION_TITLE: &str = "Plant Identifier";

pub const LOG_TAG_APP: &str = "[APP]";
pub const LOG_TAG_PLANT_ID: &str = "[PLANT_ID]";
pub const LOG_TAG_PIPELINE: &str = "[PIPELINE]";
pub const LOG_TAG_ORCHESTRATOR: &str = "[ORCHESTRATOR]";
pub const LOG_TAG_CAMERA: &str = "[CAMERA]";
pub const LOG_TAG_FILE_SOURCE: &str = "[FILE_SOURCE]";
pub const LOG_TAG_GALLERY: &str = "[GALLERY]";
pub const LOG_TAG_SETTINGS: &str = "[SETTINGS]";
pub const LOG_TAG_ENCODED_IMAGE: &str = "[ENCODED_IMAGE]";

pub const PLANT_ID_API_URL: &str = "https://api.plant.id/v2/identify";
pub const PLANT_ID_API_KEY_HEADER: &str = "Api-Key";
pub const PLANT_ID_API_KEY: &str = match option_env!("PLANT_ID_API_KEY") {
    Some(api_key) => api_key,
    None => "",
};

pub const PLANT_DETAIL_CATEGORIES: [&str; 4] = [
    "common_names",
    "taxonomy",
    "description",
    "care_instructions",
];

pub const MINIMUM_CONFIDENCE: f64 = 0.30;
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub const PROGRESS_TICK_INTERVAL: Duration = Duration::from_millis(500);
pub const PROGRESS_STEP_PERCENT: u8 = 10;
pub const PROGRESS_CAP_PERCENT: u8 = 90;
pub const PROGRESS_COMPLETE_PERCENT: u8 = 100;

pub const CAMERA_JPEG_QUALITY: u8 = 80;

pub const NOTIFICATION_DISPLAY_DURATION: Duration = Duration::from_secs(5);

pub const ACCEPTED_FILE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "webp"];

pub const SETTINGS_DIRECTORY_NAME: &str = "plant-identifier";
pub const SETTINGS_FILE_NAME: &str = "settings.json";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SampleImage {
    pub id: u32,
    pub url: &'static str,
    pub alt: &'static str,
}

pub const SAMPLE_IMAGES: [SampleImage; 4] = [
    SampleImage {
        id: 1,
        url: "https://images.unsplash.com/photo-1520412099551-62b6bafeb5bb?w=500&auto=format",
        alt: "Snake Plant",
    },
    SampleImage {
        id: 2,
        url: "https://images.unsplash.com/photo-1463936575829-25148e1db1b8?w=500&auto=format",
        alt: "Monstera",
    },
    SampleImage {
        id: 3,
        url: "https://images.unsplash.com/photo-1512428813834-c702c7702b78?w=500&auto=format",
        alt: "Succulent",
    },
    SampleImage {
        id: 4,
        url: "https://images.unsplash.com/photo-1509423350716-97f9360b4e09?w=500&auto=format",
        alt: "Fiddle Leaf Fig",
    },
];
