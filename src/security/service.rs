//! The security service: alarm decisions for sensor and camera events.
//!
//! Every operation is a synchronous sequence of repository reads and writes.
//! The service keeps only two pieces of state of its own: the registered
//! listeners and the verdict of the most recent camera frame.

use super::transitions::{self, ArmingChange, SensorEvent};
use super::{AlarmStatus, ArmingStatus};
use crate::error::Result;
use crate::image::{CameraImage, ImageService};
use crate::listeners::StatusListener;
use crate::repository::SecurityRepository;
use crate::sensors::Sensor;
use chrono::{DateTime, Utc};
use log::{debug, info};
use parking_lot::RwLock;
use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Confidence (percent) an image service must reach to report a cat.
pub const CAT_CONFIDENCE_THRESHOLD: f32 = 50.0;

/// Point-in-time view of the system, for reporting.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    pub taken_at: DateTime<Utc>,
    pub arming_status: ArmingStatus,
    pub alarm_status: AlarmStatus,
    pub cat_detected: bool,
    pub sensors: Vec<Sensor>,
}

/// Alarm decision engine.
///
/// Shared between tasks as `Arc<SecurityService>`. It does no locking around
/// its read-decide-write sequences; callers that need two operations to be
/// atomic with respect to each other must serialize them.
pub struct SecurityService {
    repository: Arc<dyn SecurityRepository>,
    image_service: Arc<dyn ImageService>,
    status_listeners: RwLock<Vec<Arc<dyn StatusListener>>>,
    /// Verdict of the last analyzed frame. Not persisted.
    cat_detected: AtomicBool,
}

impl SecurityService {
    pub fn new(
        repository: Arc<dyn SecurityRepository>,
        image_service: Arc<dyn ImageService>,
    ) -> Self {
        Self {
            repository,
            image_service,
            status_listeners: RwLock::new(Vec::new()),
            cat_detected: AtomicBool::new(false),
        }
    }

    /// Change the arming status.
    ///
    /// Disarming always clears the alarm. Arming from `Disarmed` resets every
    /// sensor to inactive. Moving to `ArmedHome` while the last frame showed a
    /// cat raises the alarm. Changes away from `ArmedHome` to another armed
    /// mode are ignored and nothing is written.
    pub fn set_arming_status(&self, requested: ArmingStatus) -> Result<()> {
        let change = if requested == ArmingStatus::Disarmed {
            ArmingChange::Disarm
        } else {
            transitions::arming_change(self.repository.arming_status()?, requested)
        };

        match change {
            ArmingChange::Disarm => {
                info!("Disarming system");
                self.repository.set_arming_status(requested)?;
                self.set_alarm_status(AlarmStatus::NoAlarm)?;
            }
            ArmingChange::ArmFromDisarmed => {
                info!("Arming system: {}", requested);
                self.repository.set_arming_status(requested)?;
                self.deactivate_all_sensors()?;
                self.raise_alarm_if_cat_at_home(requested)?;
            }
            ArmingChange::Rearm => {
                info!("Re-arming system: {}", requested);
                self.repository.set_arming_status(requested)?;
                self.raise_alarm_if_cat_at_home(requested)?;
            }
            ArmingChange::Ignore => {
                debug!("Ignoring arming change to {} from ARMED_HOME", requested);
            }
        }
        Ok(())
    }

    fn raise_alarm_if_cat_at_home(&self, requested: ArmingStatus) -> Result<()> {
        if requested == ArmingStatus::ArmedHome && self.cat_detected() {
            self.set_alarm_status(AlarmStatus::Alarm)?;
        }
        Ok(())
    }

    /// Set every known sensor inactive, then announce the reset once.
    fn deactivate_all_sensors(&self) -> Result<()> {
        let mut sensors = self.repository.sensors()?;
        for sensor in sensors.iter_mut() {
            self.change_sensor_activation_status(sensor, false)?;
        }
        debug!("Reset {} sensors to inactive", sensors.len());
        self.notify_listeners(|listener| listener.on_sensor_statuses_reset());
        Ok(())
    }

    /// Record a sensor's new activation state and update the alarm status.
    ///
    /// Activating a sensor while armed escalates the alarm, even when the
    /// sensor was already active. Deactivating an active sensor clears a
    /// pending alarm. An active alarm is never changed by sensor activity.
    /// The sensor's flag is updated and persisted in every case.
    pub fn change_sensor_activation_status(&self, sensor: &mut Sensor, active: bool) -> Result<()> {
        let alarm_status = self.repository.alarm_status()?;

        if alarm_status != AlarmStatus::Alarm {
            let event = if active && self.repository.arming_status()?.is_armed() {
                Some(SensorEvent::Activated)
            } else if !active && sensor.is_active() {
                Some(SensorEvent::Deactivated)
            } else {
                None
            };

            if let Some(event) = event
                && let Some(next) = transitions::next_alarm_status(alarm_status, event)
            {
                debug!("Sensor {} {:?}: {} -> {}", sensor.name(), event, alarm_status, next);
                self.set_alarm_status(next)?;
            }
        }

        sensor.set_active(active);
        self.repository.update_sensor(sensor)
    }

    /// Analyze a camera frame for a cat and update the alarm status.
    ///
    /// A cat while `ArmedHome` raises the alarm. No cat while every sensor
    /// is inactive clears it. Listeners always receive the verdict.
    pub fn process_image(&self, image: &CameraImage) -> Result<()> {
        let cat = self
            .image_service
            .contains_cat(image, CAT_CONFIDENCE_THRESHOLD)?;
        self.cat_detected.store(cat, Ordering::SeqCst);
        debug!("Frame {} analyzed, cat: {}", image.id(), cat);

        if cat {
            if self.repository.arming_status()? == ArmingStatus::ArmedHome {
                self.set_alarm_status(AlarmStatus::Alarm)?;
            }
        } else if self.all_sensors_inactive()? {
            self.set_alarm_status(AlarmStatus::NoAlarm)?;
        }

        self.notify_listeners(|listener| listener.on_cat_detected(cat));
        Ok(())
    }

    fn all_sensors_inactive(&self) -> Result<bool> {
        Ok(self
            .repository
            .sensors()?
            .iter()
            .all(|sensor| !sensor.is_active()))
    }

    /// Write the alarm status and notify every listener.
    ///
    /// This is the only place the alarm status is written.
    pub fn set_alarm_status(&self, status: AlarmStatus) -> Result<()> {
        self.repository.set_alarm_status(status)?;
        info!("Alarm status set to {}", status);
        self.notify_listeners(|listener| listener.on_alarm_status_changed(status));
        Ok(())
    }

    /// Register a listener. Registering the same listener twice has no effect.
    pub fn add_status_listener(&self, listener: Arc<dyn StatusListener>) {
        let mut listeners = self.status_listeners.write();
        if !listeners.iter().any(|l| Arc::ptr_eq(l, &listener)) {
            listeners.push(listener);
        }
    }

    /// Unregister a listener. Returns `false` if it was not registered.
    pub fn remove_status_listener(&self, listener: &Arc<dyn StatusListener>) -> bool {
        let mut listeners = self.status_listeners.write();
        let before = listeners.len();
        listeners.retain(|l| !Arc::ptr_eq(l, listener));
        listeners.len() != before
    }

    pub fn listener_count(&self) -> usize {
        self.status_listeners.read().len()
    }

    fn notify_listeners(&self, notify: impl Fn(&dyn StatusListener)) {
        // Snapshot so a listener may register or unregister while being notified
        let listeners = self.status_listeners.read().clone();
        debug!("Notifying {} status listeners", listeners.len());
        for listener in &listeners {
            notify(listener.as_ref());
        }
    }

    pub fn add_sensor(&self, sensor: Sensor) -> Result<()> {
        self.repository.add_sensor(sensor)
    }

    pub fn remove_sensor(&self, sensor: &Sensor) -> Result<()> {
        self.repository.remove_sensor(sensor)
    }

    pub fn sensors(&self) -> Result<Vec<Sensor>> {
        self.repository.sensors()
    }

    pub fn alarm_status(&self) -> Result<AlarmStatus> {
        self.repository.alarm_status()
    }

    pub fn arming_status(&self) -> Result<ArmingStatus> {
        self.repository.arming_status()
    }

    /// Verdict of the most recent camera frame.
    pub fn cat_detected(&self) -> bool {
        self.cat_detected.load(Ordering::SeqCst)
    }

    pub fn snapshot(&self) -> Result<StatusSnapshot> {
        Ok(StatusSnapshot {
            taken_at: Utc::now(),
            arming_status: self.arming_status()?,
            alarm_status: self.alarm_status()?,
            cat_detected: self.cat_detected(),
            sensors: self.sensors()?,
        })
    }
}
