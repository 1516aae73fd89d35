pub mod app_orchestrator;
mod camera_session;
mod identification_pipeline;
mod progress_ticker;


pub use camera_session::CameraSession;
pub use identification_pipeline::IdentificationPipeline;
pub use progress_ticker::ProgressTicker;
