//! In-memory security repository.
//!
//! Holds all state behind a single `parking_lot::RwLock`, so it can be shared
//! between the camera task and the sensor task of the monitor.

use super::SecurityRepository;
use crate::error::{Result, SecurityError};
use crate::security::{AlarmStatus, ArmingStatus};
use crate::sensors::{Sensor, SensorId};
use parking_lot::RwLock;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct RepositoryState {
    alarm_status: AlarmStatus,
    arming_status: ArmingStatus,
    sensors: BTreeMap<SensorId, Sensor>,
}

/// Thread-safe repository keeping sensors keyed by their identity.
#[derive(Debug, Default)]
pub struct InMemorySecurityRepository {
    state: RwLock<RepositoryState>,
}

impl InMemorySecurityRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with sensors.
    ///
    /// Later sensors replace earlier ones with the same identity.
    pub fn with_sensors(sensors: impl IntoIterator<Item = Sensor>) -> Self {
        let sensors = sensors
            .into_iter()
            .map(|sensor| (sensor.id(), sensor))
            .collect();
        Self {
            state: RwLock::new(RepositoryState {
                sensors,
                ..Default::default()
            }),
        }
    }
}

impl SecurityRepository for InMemorySecurityRepository {
    fn alarm_status(&self) -> Result<AlarmStatus> {
        Ok(self.state.read().alarm_status)
    }

    fn set_alarm_status(&self, status: AlarmStatus) -> Result<()> {
        self.state.write().alarm_status = status;
        Ok(())
    }

    fn arming_status(&self) -> Result<ArmingStatus> {
        Ok(self.state.read().arming_status)
    }

    fn set_arming_status(&self, status: ArmingStatus) -> Result<()> {
        self.state.write().arming_status = status;
        Ok(())
    }

    fn sensors(&self) -> Result<Vec<Sensor>> {
        Ok(self.state.read().sensors.values().cloned().collect())
    }

    fn update_sensor(&self, sensor: &Sensor) -> Result<()> {
        let mut state = self.state.write();
        match state.sensors.get_mut(&sensor.id()) {
            Some(stored) => {
                *stored = sensor.clone();
                Ok(())
            }
            None => Err(SecurityError::UnknownSensor(sensor.id().to_string())),
        }
    }

    fn add_sensor(&self, sensor: Sensor) -> Result<()> {
        self.state.write().sensors.insert(sensor.id(), sensor);
        Ok(())
    }

    fn remove_sensor(&self, sensor: &Sensor) -> Result<()> {
        self.state.write().sensors.remove(&sensor.id());
        Ok(())
    }
}
