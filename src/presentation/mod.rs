pub mod app_theme;
mod camera_view;
mod gallery_view;
pub mod i18n;
mod identification_result_view;
mod notification_toast;
mod upload_view;

pub use camera_view::{render_camera_panel, CameraPanelState, CameraViewMessage};
pub use gallery_view::{render_gallery, GalleryViewMessage};
pub use notification_toast::{render_notifications, Notification};
pub use upload_view::{UploadView, UploadViewMessage};
