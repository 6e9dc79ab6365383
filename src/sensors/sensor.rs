use serde::{Deserialize, Serialize};
use std::fmt;
use strum::{Display, EnumString};

/// Kind of physical detector behind a sensor.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum SensorType {
    Door,
    Window,
    Motion,
}

/// Immutable identity of a sensor: name plus type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SensorId {
    pub name: String,
    pub sensor_type: SensorType,
}

impl fmt::Display for SensorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.sensor_type)
    }
}

/// A door, window or motion sensor and its last known activation state.
///
/// Sensors are created inactive. Only the security engine flips the active
/// flag, through `SecurityService::change_sensor_activation_status`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sensor {
    name: String,
    sensor_type: SensorType,
    active: bool,
}

impl Sensor {
    /// Create a new inactive sensor.
    pub fn new(name: impl Into<String>, sensor_type: SensorType) -> Self {
        Self {
            name: name.into(),
            sensor_type,
            active: false,
        }
    }

    /// Set the initial activation state while building a sensor.
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn sensor_type(&self) -> SensorType {
        self.sensor_type
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Identity used for storage and lookups.
    pub fn id(&self) -> SensorId {
        SensorId {
            name: self.name.clone(),
            sensor_type: self.sensor_type,
        }
    }

    pub(crate) fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Sensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {})",
            self.name,
            self.sensor_type,
            if self.active { "active" } else { "inactive" }
        )
    }
}
