mod file_image_source;
mod gallery_image_source;
mod plant_id_api_client;

pub use file_image_source::FileImageSource;
pub use gallery_image_source::GalleryImageSource;
pub use plant_id_api_client::{build_http_client, PlantIdApiClient};
