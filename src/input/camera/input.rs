//! Camera input source.
//!
//! Captures frames on a fixed interval and hands each one to the security
//! service for analysis. Frames are synthetic noise until a real capture
//! backend is wired in.

use crate::config::CameraConfig;
use crate::error::{Result, SecurityError};
use crate::image::CameraImage;
use crate::security::SecurityService;
use log::{info, warn};
use rand::Rng;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use tokio::task::JoinHandle;
use tokio::time::{Duration, interval};

/// Periodic camera frame source.
pub struct CameraInput {
    config: CameraConfig,
    running: AtomicBool,
    frames_captured: AtomicU64,
}

impl CameraInput {
    /// Create a new camera input with the given configuration.
    pub fn new(config: CameraConfig) -> Self {
        Self {
            config,
            running: AtomicBool::new(false),
            frames_captured: AtomicU64::new(0),
        }
    }

    /// Mark the camera as running so the feed task starts capturing.
    pub fn initialize(&self) {
        info!(
            "Initializing camera input ({}x{}, every {}s)",
            self.config.frame_width, self.config.frame_height, self.config.capture_interval_secs
        );
        self.running.store(true, Ordering::SeqCst);
    }

    /// Capture a single frame.
    pub fn capture_frame(&self) -> Result<CameraImage> {
        let (width, height) = (self.config.frame_width, self.config.frame_height);
        let size = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                SecurityError::InvalidConfig(format!("frame size {width}x{height} overflows"))
            })?;
        let mut data = vec![0u8; size];
        rand::thread_rng().fill(&mut data[..]);
        self.frames_captured.fetch_add(1, Ordering::SeqCst);
        Ok(CameraImage::new(width, height, data))
    }

    pub fn capture_interval(&self) -> Duration {
        Duration::from_secs(self.config.capture_interval_secs)
    }

    pub fn frames_captured(&self) -> u64 {
        self.frames_captured.load(Ordering::SeqCst)
    }

    /// Check if the camera input is running.
    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Stop capturing. The feed task exits on its next tick.
    pub fn shutdown(&self) {
        info!("Shutting down camera input...");
        self.running.store(false, Ordering::SeqCst);
    }
}

/// Spawn a task that captures a frame every interval and processes it.
///
/// Analysis failures are logged and the feed keeps running.
pub fn run_camera_feed(camera: Arc<CameraInput>, service: Arc<SecurityService>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = interval(camera.capture_interval());
        loop {
            interval.tick().await;
            if !camera.is_running() {
                break;
            }

            let frame = match camera.capture_frame() {
                Ok(frame) => frame,
                Err(e) => {
                    warn!("[Camera] Failed to capture frame: {}", e);
                    continue;
                }
            };
            if let Err(e) = service.process_image(&frame) {
                warn!("[Camera] Failed to process frame {}: {}", frame.id(), e);
            }
        }
        info!("[Camera] Feed stopped");
    })
}
