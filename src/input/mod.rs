//! Input sources feeding the security service.
//!
//! Each input runs as a tokio task that pushes events into a shared
//! `SecurityService`:
//! - `camera`: periodic camera frames for cat detection
//! - `simulation`: random sensor activity for development

pub mod camera;
pub mod simulation;

pub use camera::{CameraInput, run_camera_feed};
pub use simulation::run_sensor_simulation;
