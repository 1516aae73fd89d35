mod plant_identification_service;
mod remote_image_loader;

pub use plant_identification_service::PlantIdentificationService;
pub use remote_image_loader::RemoteImageLoader;
