//! Sensor entities reported to the security engine.
//!
//! A [`Sensor`] is a named door, window or motion detector with a boolean
//! active state. Its identity ([`SensorId`]) is the name plus the type and
//! never includes the active flag, so repositories can key their storage by
//! it while the flag changes.

pub mod sensor;

pub use sensor::{Sensor, SensorId, SensorType};
