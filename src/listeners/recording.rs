//! Listener that keeps every notification it receives.

use super::StatusListener;
use crate::security::AlarmStatus;
use parking_lot::Mutex;

/// A single notification as seen by a listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusEvent {
    AlarmStatusChanged(AlarmStatus),
    CatDetected(bool),
    SensorStatusesReset,
}

/// Records notifications in arrival order.
#[derive(Debug, Default)]
pub struct RecordingStatusListener {
    events: Mutex<Vec<StatusEvent>>,
}

impl RecordingStatusListener {
    pub fn new() -> Self {
        Self::default()
    }

    /// All notifications received so far.
    pub fn events(&self) -> Vec<StatusEvent> {
        self.events.lock().clone()
    }

    /// Alarm statuses received so far, oldest first.
    pub fn alarm_statuses(&self) -> Vec<AlarmStatus> {
        self.events
            .lock()
            .iter()
            .filter_map(|event| match event {
                StatusEvent::AlarmStatusChanged(status) => Some(*status),
                _ => None,
            })
            .collect()
    }

    pub fn reset_count(&self) -> usize {
        self.events
            .lock()
            .iter()
            .filter(|event| **event == StatusEvent::SensorStatusesReset)
            .count()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl StatusListener for RecordingStatusListener {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        self.events
            .lock()
            .push(StatusEvent::AlarmStatusChanged(status));
    }

    fn on_cat_detected(&self, cat_detected: bool) {
        self.events.lock().push(StatusEvent::CatDetected(cat_detected));
    }

    fn on_sensor_statuses_reset(&self) {
        self.events.lock().push(StatusEvent::SensorStatusesReset);
    }
}
