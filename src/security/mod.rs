//! Alarm decision engine.
//!
//! [`SecurityService`] owns the rules that turn sensor events and camera
//! verdicts into alarm status changes. The status enums live here; the
//! transition rules themselves are spelled out in [`transitions`].

pub mod service;
pub mod transitions;

pub use service::{CAT_CONFIDENCE_THRESHOLD, SecurityService, StatusSnapshot};
pub use transitions::{ArmingChange, SensorEvent};

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Current alert level of the system.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum AlarmStatus {
    #[default]
    NoAlarm,
    PendingAlarm,
    Alarm,
}

/// Whether the system is monitoring, and in which mode.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum ArmingStatus {
    #[default]
    Disarmed,
    ArmedHome,
    ArmedAway,
}

impl ArmingStatus {
    pub fn is_armed(self) -> bool {
        self != ArmingStatus::Disarmed
    }
}
