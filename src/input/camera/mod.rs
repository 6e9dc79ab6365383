//! Camera input source producing frames for cat detection.

mod input;

pub use input::{CameraInput, run_camera_feed};
