//! Transition tables for the alarm and arming state machines.
//!
//! Both tables are exhaustive matches so that adding a status forces every
//! combination to be decided here.

use super::{AlarmStatus, ArmingStatus};

/// Sensor event fed into the alarm state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorEvent {
    /// A sensor reported active while the system is armed.
    Activated,
    /// A previously active sensor reported inactive.
    Deactivated,
}

/// Next alarm status for a sensor event, or `None` when the status stays.
///
/// `Alarm` is a sink: sensor events never leave it.
pub fn next_alarm_status(current: AlarmStatus, event: SensorEvent) -> Option<AlarmStatus> {
    use AlarmStatus::*;
    use SensorEvent::*;

    match (current, event) {
        (NoAlarm, Activated) => Some(PendingAlarm),
        (PendingAlarm, Activated) => Some(Alarm),
        (Alarm, Activated) => None,
        (NoAlarm, Deactivated) => None,
        (PendingAlarm, Deactivated) => Some(NoAlarm),
        (Alarm, Deactivated) => None,
    }
}

/// What a requested arming status change does to the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArmingChange {
    /// Store `Disarmed` and clear the alarm.
    Disarm,
    /// Store the new status and reset every sensor to inactive.
    ArmFromDisarmed,
    /// Store the new status, sensors keep their state.
    Rearm,
    /// Nothing is written.
    Ignore,
}

/// Classify a change from `current` to `requested`.
///
/// Leaving `ArmedHome` for another armed mode is ignored, as is requesting
/// the status the system already has while armed.
pub fn arming_change(current: ArmingStatus, requested: ArmingStatus) -> ArmingChange {
    use ArmingStatus::*;

    match (current, requested) {
        (_, Disarmed) => ArmingChange::Disarm,
        (Disarmed, ArmedHome | ArmedAway) => ArmingChange::ArmFromDisarmed,
        (ArmedAway, ArmedHome | ArmedAway) => ArmingChange::Rearm,
        (ArmedHome, ArmedHome | ArmedAway) => ArmingChange::Ignore,
    }
}
