//! Landmark-driven cosmetic overlays: blush on the cheeks and lip color,
//! blended into a photograph with soft, texture-preserving edges.
//!
//! The entry point is [`pipeline::apply_makeup_use_case::ApplyMakeupUseCase`],
//! which takes an injected [`detection::domain::landmark_detector::LandmarkDetector`].

pub mod color;
pub mod compositing;
pub mod detection;
pub mod geometry;
pub mod io;
pub mod pipeline;
pub mod shared;
