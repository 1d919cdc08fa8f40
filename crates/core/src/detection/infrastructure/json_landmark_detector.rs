use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::detection::domain::landmark_set::LandmarkSet;
use crate::shared::frame::Frame;
use crate::shared::region::Point;

#[derive(Error, Debug)]
pub enum LandmarksFileError {
    #[error("failed to read landmarks from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed landmarks file: {0}")]
    Parse(#[from] serde_json::Error),
}

/// On-disk layout: either a bare point list (one face, pixel coordinates)
/// or a document listing faces, optionally in normalized coordinates.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum LandmarksDocument {
    Faces {
        #[serde(default)]
        normalized: bool,
        faces: Vec<Vec<[f64; 2]>>,
    },
    Points(Vec<[f64; 2]>),
}

/// Replays landmarks exported by an external face-mesh tool.
///
/// Only the first face is used. Normalized coordinates (fractions of the
/// frame size) are converted to pixels against the frame passed to
/// [`LandmarkDetector::detect`], truncating toward zero.
pub struct JsonLandmarkDetector {
    face: Option<Vec<[f64; 2]>>,
    normalized: bool,
}

impl JsonLandmarkDetector {
    pub fn from_path(path: &Path) -> Result<Self, LandmarksFileError> {
        let json = fs::read_to_string(path).map_err(|source| LandmarksFileError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    pub fn from_json(json: &str) -> Result<Self, LandmarksFileError> {
        let document: LandmarksDocument = serde_json::from_str(json)?;
        let (face, normalized) = match document {
            LandmarksDocument::Faces { normalized, faces } => {
                if faces.len() > 1 {
                    log::debug!("Landmarks file lists {} faces, using the first", faces.len());
                }
                (faces.into_iter().next(), normalized)
            }
            LandmarksDocument::Points(points) => (Some(points), false),
        };
        Ok(Self {
            face: face.filter(|points| !points.is_empty()),
            normalized,
        })
    }
}

impl LandmarkDetector for JsonLandmarkDetector {
    fn detect(&mut self, frame: &Frame) -> Result<Option<LandmarkSet>, Box<dyn std::error::Error>> {
        let Some(face) = &self.face else {
            return Ok(None);
        };

        let (sx, sy) = if self.normalized {
            (frame.width() as f64, frame.height() as f64)
        } else {
            (1.0, 1.0)
        };

        let points = face
            .iter()
            .map(|[x, y]| Point::new((x * sx) as i32, (y * sy) as i32))
            .collect();
        Ok(Some(LandmarkSet::new(points)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(width: u32, height: u32) -> Frame {
        Frame::new(vec![0u8; (width * height * 3) as usize], width, height, 3)
    }

    #[test]
    fn test_bare_point_list_is_one_face_in_pixels() {
        let mut detector = JsonLandmarkDetector::from_json("[[10, 20], [30.7, 40.2]]").unwrap();
        let lm = detector.detect(&frame(100, 100)).unwrap().unwrap();
        assert_eq!(lm.points(), &[Point::new(10, 20), Point::new(30, 40)]);
    }

    #[test]
    fn test_normalized_coordinates_scale_to_frame() {
        let json = r#"{"normalized": true, "faces": [[[0.5, 0.25], [0.999, 1.0]]]}"#;
        let mut detector = JsonLandmarkDetector::from_json(json).unwrap();
        let lm = detector.detect(&frame(200, 100)).unwrap().unwrap();
        assert_eq!(lm.points(), &[Point::new(100, 25), Point::new(199, 100)]);
    }

    #[test]
    fn test_uses_first_face_only() {
        let json = r#"{"faces": [[[1, 1]], [[9, 9]]]}"#;
        let mut detector = JsonLandmarkDetector::from_json(json).unwrap();
        let lm = detector.detect(&frame(10, 10)).unwrap().unwrap();
        assert_eq!(lm.points(), &[Point::new(1, 1)]);
    }

    #[test]
    fn test_no_faces_means_none() {
        let mut detector = JsonLandmarkDetector::from_json(r#"{"faces": []}"#).unwrap();
        assert!(detector.detect(&frame(10, 10)).unwrap().is_none());

        let mut detector = JsonLandmarkDetector::from_json("[]").unwrap();
        assert!(detector.detect(&frame(10, 10)).unwrap().is_none());
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = JsonLandmarkDetector::from_json(r#"{"faces": "nope"}"#)
            .err()
            .unwrap();
        assert!(matches!(err, LandmarksFileError::Parse(_)));
    }

    #[test]
    fn test_from_path_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("landmarks.json");
        std::fs::write(&path, "[[5, 6], [7, 8]]").unwrap();

        let mut detector = JsonLandmarkDetector::from_path(&path).unwrap();
        let lm = detector.detect(&frame(10, 10)).unwrap().unwrap();
        assert_eq!(lm.len(), 2);
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = JsonLandmarkDetector::from_path(Path::new("/nonexistent/landmarks.json"))
            .err()
            .unwrap();
        assert!(matches!(err, LandmarksFileError::Read { .. }));
    }
}
