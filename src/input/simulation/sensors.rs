//! Sensor simulation for testing.
//!
//! Provides simulated sensor activity for development and testing purposes.

use crate::error::Result;
use crate::security::SecurityService;
use crate::sensors::Sensor;
use log::{info, warn};
use rand::Rng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use std::sync::Arc;
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Toggle one randomly chosen sensor.
///
/// Returns the sensor as it was after the toggle, or `None` when there are
/// no sensors.
pub fn simulate_sensor_step(service: &SecurityService, rng: &mut impl Rng) -> Result<Option<Sensor>> {
    let mut sensors = service.sensors()?;
    let Some(sensor) = sensors.choose_mut(rng) else {
        return Ok(None);
    };

    let active = !sensor.is_active();
    service.change_sensor_activation_status(sensor, active)?;
    Ok(Some(sensor.clone()))
}

/// Spawn a task that toggles a random sensor every `period`.
///
/// # Returns
///
/// A `JoinHandle` that can be used to abort the simulation task.
pub fn run_sensor_simulation(
    service: Arc<SecurityService>,
    period: Duration,
    mut rng: StdRng,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(period);
        // Skip the immediate first tick so sensors start quiet
        interval.tick().await;
        loop {
            interval.tick().await;
            match simulate_sensor_step(&service, &mut rng) {
                Ok(Some(sensor)) => info!("[Sim] {}", sensor),
                Ok(None) => {}
                Err(e) => warn!("[Sim] Sensor update failed: {}", e),
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::FakeImageService;
    use crate::repository::InMemorySecurityRepository;
    use crate::security::{AlarmStatus, ArmingStatus};
    use crate::sensors::SensorType;
    use rand::SeedableRng;

    fn service_with(sensors: Vec<Sensor>) -> SecurityService {
        SecurityService::new(
            Arc::new(InMemorySecurityRepository::with_sensors(sensors)),
            Arc::new(FakeImageService::with_seed(0)),
        )
    }

    #[test]
    fn test_step_without_sensors() {
        let service = service_with(vec![]);
        let mut rng = StdRng::seed_from_u64(5);
        assert!(simulate_sensor_step(&service, &mut rng).unwrap().is_none());
    }

    #[test]
    fn test_step_toggles_and_persists() {
        let service = service_with(vec![Sensor::new("Front Door", SensorType::Door)]);
        let mut rng = StdRng::seed_from_u64(5);

        let toggled = simulate_sensor_step(&service, &mut rng).unwrap().unwrap();
        assert!(toggled.is_active());
        assert!(service.sensors().unwrap()[0].is_active());

        let toggled = simulate_sensor_step(&service, &mut rng).unwrap().unwrap();
        assert!(!toggled.is_active());
        assert!(!service.sensors().unwrap()[0].is_active());
    }

    #[test]
    fn test_step_drives_alarm_when_armed() {
        let service = service_with(vec![Sensor::new("Hallway", SensorType::Motion)]);
        service.set_arming_status(ArmingStatus::ArmedAway).unwrap();
        let mut rng = StdRng::seed_from_u64(9);

        simulate_sensor_step(&service, &mut rng).unwrap();
        assert_eq!(service.alarm_status().unwrap(), AlarmStatus::PendingAlarm);
        simulate_sensor_step(&service, &mut rng).unwrap();
        assert_eq!(service.alarm_status().unwrap(), AlarmStatus::NoAlarm);
    }
}
