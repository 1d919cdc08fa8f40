use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::detection::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;

/// Replays landmarks computed ahead of time, regardless of the frame.
///
/// Used when detection already ran elsewhere (e.g., a client-side face
/// mesh) and only the overlay needs to happen here.
pub struct FixedLandmarkDetector {
    landmarks: Option<LandmarkSet>,
}

impl FixedLandmarkDetector {
    pub fn new(landmarks: Option<LandmarkSet>) -> Self {
        Self { landmarks }
    }

    /// A detector that never finds a face.
    pub fn none() -> Self {
        Self { landmarks: None }
    }
}

impl LandmarkDetector for FixedLandmarkDetector {
    fn detect(&mut self, _frame: &Frame) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>> {
        Ok(self.landmarks.clone().filter(|lm| !lm.is_empty()))
    }
}
