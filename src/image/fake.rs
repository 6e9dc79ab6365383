//! Stand-in image analysis for development.
//!
//! Draws a random confidence for every frame instead of running a real
//! recognizer. Seed it to get reproducible runs.

use super::{CameraImage, ImageService};
use crate::error::{Result, SecurityError};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct FakeImageService {
    rng: Mutex<StdRng>,
}

impl FakeImageService {
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }
}

impl Default for FakeImageService {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageService for FakeImageService {
    fn contains_cat(&self, image: &CameraImage, confidence_threshold: f32) -> Result<bool> {
        if !(0.0..=100.0).contains(&confidence_threshold) {
            return Err(SecurityError::ImageAnalysisFailed(format!(
                "confidence threshold {confidence_threshold} outside 0..=100"
            )));
        }
        if image.is_empty() {
            return Err(SecurityError::ImageAnalysisFailed(format!(
                "frame {} has no data",
                image.id()
            )));
        }

        let confidence: f32 = self.rng.lock().gen_range(0.0..100.0);
        log::debug!(
            "[Fake] frame {} cat confidence {:.1}% (threshold {:.1}%)",
            image.id(),
            confidence,
            confidence_threshold
        );
        Ok(confidence >= confidence_threshold)
    }
}
