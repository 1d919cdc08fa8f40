pub mod fixed_landmark_detector;
pub mod json_landmark_detector;
