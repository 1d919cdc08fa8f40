use std::time::Instant;

use crate::compositing::{blend_engine, mask_compositor};
use crate::detection::domain::landmark_detector::LandmarkDetector;
use crate::detection::domain::landmark_set::LandmarkSet;
use crate::geometry::RegionGeometryBuilder;
use crate::shared::error::OverlayError;
use crate::shared::frame::Frame;

use super::makeup_request::MakeupRequest;
use super::pipeline_logger::PipelineLogger;

/// Applies blush and lip color to a single image.
///
/// Never fails outward: missing input yields `None`; no face, a detector
/// failure, or an internal compositing error yields an unmodified copy of
/// the input. The caller's frame is never mutated.
pub struct ApplyMakeupUseCase {
    detector: Box<dyn LandmarkDetector>,
    geometry: RegionGeometryBuilder,
    logger: Box<dyn PipelineLogger>,
}

impl ApplyMakeupUseCase {
    pub fn new(
        detector: Box<dyn LandmarkDetector>,
        geometry: RegionGeometryBuilder,
        logger: Box<dyn PipelineLogger>,
    ) -> Self {
        Self {
            detector,
            geometry,
            logger,
        }
    }

    pub fn apply_makeup(&mut self, image: Option<&Frame>, request: &MakeupRequest) -> Option<Frame> {
        let image = match image {
            Some(frame) if !frame.is_empty() => frame,
            _ => {
                log::warn!("No image to apply makeup to");
                return None;
            }
        };

        let output = self.run(image, request);
        self.logger.run_finished();
        Some(output)
    }

    pub fn logger(&self) -> &dyn PipelineLogger {
        self.logger.as_ref()
    }

    fn run(&mut self, image: &Frame, request: &MakeupRequest) -> Frame {
        if request.is_noop() {
            log::debug!("Both intensities are zero, returning original image");
            return image.clone();
        }

        let started = Instant::now();
        let detected = self.detector.detect(image);
        self.logger.timing("detect", elapsed_ms(started));

        let landmarks = match detected {
            Ok(Some(landmarks)) if !landmarks.is_empty() => landmarks,
            Ok(_) => {
                log::info!("No face landmarks detected, returning original image");
                return image.clone();
            }
            Err(e) => {
                log::warn!("Landmark detection failed, returning original image: {e}");
                return image.clone();
            }
        };
        log::debug!("Detected {} landmarks", landmarks.len());

        match self.compose(image, &landmarks, request) {
            Ok(frame) => frame,
            Err(e) => {
                log::error!("Makeup compositing failed, returning original image: {e}");
                image.clone()
            }
        }
    }

    /// Composites every requested region onto one working buffer, so lips
    /// land on top of any blush already applied.
    fn compose(
        &mut self,
        image: &Frame,
        landmarks: &LandmarkSet,
        request: &MakeupRequest,
    ) -> Result<Frame, OverlayError> {
        image.check_layout()?;
        let dimensions = (image.width(), image.height());
        let mut working = image.clone();
        let mut applied = 0usize;

        for pass in request.passes() {
            let polygon = self.geometry.build(landmarks, pass.region);
            if polygon.is_empty() {
                continue;
            }

            let started = Instant::now();
            let mask = mask_compositor::rasterize(&polygon, dimensions, pass.region);
            working = blend_engine::blend(&working, &mask, pass.color, pass.intensity, pass.region)?;
            self.logger.timing(pass.region.name(), elapsed_ms(started));
            applied += 1;
        }

        self.logger.metric("regions_applied", applied as f64);
        self.logger.info(&format!("Applied makeup to {applied} region(s)"));
        Ok(working)
    }
}

fn elapsed_ms(started: Instant) -> f64 {
    started.elapsed().as_secs_f64() * 1000.0
}
