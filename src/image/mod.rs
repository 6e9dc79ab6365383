//! Camera frames and the cat-detection capability.
//!
//! Image recognition itself is opaque to the security engine: it only asks
//! an [`ImageService`] whether a frame contains a cat.

pub mod fake;

pub use fake::FakeImageService;

use crate::error::Result;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A single frame captured from the camera.
#[derive(Debug, Clone)]
pub struct CameraImage {
    id: Uuid,
    captured_at: DateTime<Utc>,
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl CameraImage {
    /// Wrap raw frame bytes captured now.
    pub fn new(width: u32, height: u32, data: Vec<u8>) -> Self {
        Self {
            id: Uuid::new_v4(),
            captured_at: Utc::now(),
            width,
            height,
            data,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn captured_at(&self) -> DateTime<Utc> {
        self.captured_at
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Decides whether a camera frame shows a cat.
#[cfg_attr(test, mockall::automock)]
pub trait ImageService: Send + Sync {
    /// Returns `true` if a cat is present with at least `confidence_threshold`
    /// percent confidence.
    fn contains_cat(&self, image: &CameraImage, confidence_threshold: f32) -> Result<bool>;
}
