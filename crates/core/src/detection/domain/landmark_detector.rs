use crate::shared::frame::Frame;

use super::landmark_set::LandmarkSet;

/// Domain interface for facial landmark detection.
///
/// Returns the landmarks of the first detected face, or `None` when no face
/// is found. Implementations may be stateful (e.g., caching a loaded model),
/// hence `&mut self`.
pub trait LandmarkDetector: Send {
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>>;
}
