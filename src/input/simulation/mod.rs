//! Simulated input sources for development and testing.

pub mod sensors;

pub use sensors::{run_sensor_simulation, simulate_sensor_step};
