//! Storage of sensors and system status.
//!
//! The security engine never owns sensors or statuses; it reads and writes
//! them through a [`SecurityRepository`] on every operation.

pub mod memory;

pub use memory::InMemorySecurityRepository;

use crate::error::Result;
use crate::security::{AlarmStatus, ArmingStatus};
use crate::sensors::Sensor;

/// Store of sensors, alarm status and arming status.
///
/// Every call is synchronous. Implementations only need to guarantee
/// read-your-writes per field; the engine does no locking of its own.
#[cfg_attr(test, mockall::automock)]
pub trait SecurityRepository: Send + Sync {
    fn alarm_status(&self) -> Result<AlarmStatus>;

    fn set_alarm_status(&self, status: AlarmStatus) -> Result<()>;

    fn arming_status(&self) -> Result<ArmingStatus>;

    fn set_arming_status(&self, status: ArmingStatus) -> Result<()>;

    /// Snapshot of every known sensor.
    fn sensors(&self) -> Result<Vec<Sensor>>;

    /// Persist the active flag of an already known sensor.
    fn update_sensor(&self, sensor: &Sensor) -> Result<()>;

    fn add_sensor(&self, sensor: Sensor) -> Result<()>;

    fn remove_sensor(&self, sensor: &Sensor) -> Result<()>;
}
