use super::StatusListener;
use crate::security::AlarmStatus;
use log::{info, warn};

/// Writes every notification to the log.
#[derive(Debug, Default)]
pub struct LoggingStatusListener;

impl StatusListener for LoggingStatusListener {
    fn on_alarm_status_changed(&self, status: AlarmStatus) {
        match status {
            AlarmStatus::Alarm => warn!("[Status] ALARM raised"),
            other => info!("[Status] Alarm status: {}", other),
        }
    }

    fn on_cat_detected(&self, cat_detected: bool) {
        if cat_detected {
            info!("[Status] Cat detected on camera");
        } else {
            info!("[Status] No cat on camera");
        }
    }

    fn on_sensor_statuses_reset(&self) {
        info!("[Status] All sensors reset to inactive");
    }
}
