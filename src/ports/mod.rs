mod nokhwa_camera_device;

pub use nokhwa_camera_device::NokhwaCameraDevice;
