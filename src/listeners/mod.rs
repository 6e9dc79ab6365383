//! Subscribers to security status changes.
//!
//! Listeners are registered on a `SecurityService` instance and called
//! synchronously, before the triggering operation returns.

pub mod logging;
pub mod recording;

pub use logging::LoggingStatusListener;
pub use recording::{RecordingStatusListener, StatusEvent};

use crate::security::AlarmStatus;

/// Receives notifications from the security engine.
pub trait StatusListener: Send + Sync {
    /// The alarm status was written.
    fn on_alarm_status_changed(&self, status: AlarmStatus);

    /// A camera frame was analyzed.
    fn on_cat_detected(&self, cat_detected: bool);

    /// Arming reset every sensor to inactive. Fired once per reset.
    fn on_sensor_statuses_reset(&self);
}
