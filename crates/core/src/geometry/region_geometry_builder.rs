use crate::detection::domain::landmark_set::LandmarkSet;
use crate::shared::constants::{
    CHEEK_ANGLE_STEP_DEG, CHEEK_RADIUS_X, CHEEK_RADIUS_Y, MIN_REGION_LANDMARKS,
};
use crate::shared::region::{Point, Polygon, RegionKind};

/// Converts landmark indices into an outline per facial region.
///
/// Lips follow the landmark contour in table order. Cheeks are a synthetic
/// ellipse of fixed pixel radii centered on the landmarks' centroid; the
/// radii do not scale with image or face size.
#[derive(Clone, Debug)]
pub struct RegionGeometryBuilder {
    left_cheek: Vec<usize>,
    right_cheek: Vec<usize>,
    lips: Vec<usize>,
}

impl RegionGeometryBuilder {
    pub fn new() -> Self {
        Self {
            left_cheek: RegionKind::LeftCheek.landmark_indices().to_vec(),
            right_cheek: RegionKind::RightCheek.landmark_indices().to_vec(),
            lips: RegionKind::Lips.landmark_indices().to_vec(),
        }
    }

    /// Replaces the index table for one region.
    pub fn with_indices(mut self, region: RegionKind, indices: Vec<usize>) -> Self {
        *self.table_mut(region) = indices;
        self
    }

    pub fn indices(&self, region: RegionKind) -> &[usize] {
        match region {
            RegionKind::LeftCheek => &self.left_cheek,
            RegionKind::RightCheek => &self.right_cheek,
            RegionKind::Lips => &self.lips,
        }
    }

    /// Returns an empty polygon when fewer than [`MIN_REGION_LANDMARKS`]
    /// indices fall inside the landmark set.
    pub fn build(&self, landmarks: &LandmarkSet, region: RegionKind) -> Polygon {
        let points = landmarks.select(self.indices(region));
        if points.len() < MIN_REGION_LANDMARKS {
            log::debug!(
                "{region}: only {} of {} landmarks present, skipping",
                points.len(),
                self.indices(region).len()
            );
            return Vec::new();
        }

        match region {
            RegionKind::Lips => points,
            RegionKind::LeftCheek | RegionKind::RightCheek => cheek_ellipse(&points),
        }
    }

    fn table_mut(&mut self, region: RegionKind) -> &mut Vec<usize> {
        match region {
            RegionKind::LeftCheek => &mut self.left_cheek,
            RegionKind::RightCheek => &mut self.right_cheek,
            RegionKind::Lips => &mut self.lips,
        }
    }
}

impl Default for RegionGeometryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Mean position of the points. Caller guarantees a non-empty slice.
fn centroid(points: &[Point]) -> (f64, f64) {
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|p| p.x as f64).sum();
    let sum_y: f64 = points.iter().map(|p| p.y as f64).sum();
    (sum_x / n, sum_y / n)
}

fn cheek_ellipse(points: &[Point]) -> Polygon {
    let (cx, cy) = centroid(points);
    (0..360)
        .step_by(CHEEK_ANGLE_STEP_DEG)
        .map(|deg| {
            let rad = (deg as f64).to_radians();
            Point::new(
                (cx + CHEEK_RADIUS_X * rad.cos()) as i32,
                (cy + CHEEK_RADIUS_Y * rad.sin()) as i32,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    /// 478 landmarks (full face mesh) all sitting at one point.
    fn uniform_landmarks(x: i32, y: i32) -> LandmarkSet {
        LandmarkSet::from(vec![(x, y); 478])
    }

    #[test]
    fn test_lips_follow_table_order() {
        let points: Vec<(i32, i32)> = (0..478).map(|i| (i, i * 2)).collect();
        let landmarks = LandmarkSet::from(points);
        let polygon = RegionGeometryBuilder::new().build(&landmarks, RegionKind::Lips);

        let expected: Vec<Point> = RegionKind::Lips
            .landmark_indices()
            .iter()
            .map(|&i| Point::new(i as i32, i as i32 * 2))
            .collect();
        assert_eq!(polygon, expected);
    }

    #[rstest]
    #[case::left(RegionKind::LeftCheek)]
    #[case::right(RegionKind::RightCheek)]
    fn test_cheek_is_18_point_ellipse(#[case] region: RegionKind) {
        let polygon = RegionGeometryBuilder::new().build(&uniform_landmarks(200, 300), region);

        assert_eq!(polygon.len(), 18);
        assert_eq!(polygon[0], Point::new(235, 300)); // 0 deg: +radius_x
        assert_eq!(polygon[9], Point::new(165, 300)); // 180 deg: -radius_x
        for p in &polygon {
            assert!((p.x - 200).abs() <= CHEEK_RADIUS_X as i32);
            assert!((p.y - 300).abs() <= CHEEK_RADIUS_Y as i32);
        }
    }

    #[test]
    fn test_cheek_radius_independent_of_landmark_spread() {
        // Wide landmark spread should not change the ellipse size.
        let points: Vec<(i32, i32)> = (0..478).map(|i| (i * 10, 400)).collect();
        let landmarks = LandmarkSet::from(points);
        let polygon = RegionGeometryBuilder::new().build(&landmarks, RegionKind::LeftCheek);

        let min_x = polygon.iter().map(|p| p.x).min().unwrap();
        let max_x = polygon.iter().map(|p| p.x).max().unwrap();
        assert!(max_x - min_x <= 70);
    }

    #[test]
    fn test_centroid_is_mean() {
        let (cx, cy) = centroid(&[Point::new(0, 0), Point::new(10, 0), Point::new(5, 9)]);
        assert_relative_eq!(cx, 5.0);
        assert_relative_eq!(cy, 3.0);
    }

    #[test]
    fn test_ellipse_coordinates_truncate_toward_zero() {
        let polygon = cheek_ellipse(&[Point::new(0, 0), Point::new(1, 1)]);
        // centroid (0.5, 0.5); 20 deg: 0.5 + 35*cos(20) = 33.39..., 0.5 + 25*sin(20) = 9.05...
        assert_eq!(polygon[1], Point::new(33, 9));
        // 180 deg: 0.5 - 35 = -34.5 truncates to -34
        assert_eq!(polygon[9].x, -34);
    }

    #[rstest]
    #[case::lips(RegionKind::Lips)]
    #[case::left(RegionKind::LeftCheek)]
    #[case::right(RegionKind::RightCheek)]
    fn test_too_few_landmarks_gives_empty_polygon(#[case] region: RegionKind) {
        let landmarks = LandmarkSet::from(vec![(10, 10); 30]);
        assert!(RegionGeometryBuilder::new().build(&landmarks, region).is_empty());
    }

    #[test]
    fn test_out_of_range_table_skips_only_that_region() {
        let builder =
            RegionGeometryBuilder::new().with_indices(RegionKind::RightCheek, vec![1, 2, 9000, 9001]);
        let landmarks = uniform_landmarks(100, 100);

        assert!(builder.build(&landmarks, RegionKind::RightCheek).is_empty());
        assert_eq!(builder.build(&landmarks, RegionKind::LeftCheek).len(), 18);
        assert_eq!(builder.build(&landmarks, RegionKind::Lips).len(), 32);
    }

    #[test]
    fn test_exactly_four_present_is_enough() {
        let builder = RegionGeometryBuilder::new()
            .with_indices(RegionKind::LeftCheek, vec![0, 1, 2, 3, 9000]);
        let polygon = builder.build(&uniform_landmarks(50, 50), RegionKind::LeftCheek);
        assert_eq!(polygon.len(), 18);
    }

    #[test]
    fn test_truncated_landmark_set_drops_right_cheek() {
        // 300 points cover every left cheek index but only two right cheek indices.
        let landmarks = LandmarkSet::from(vec![(100, 100); 300]);
        let builder = RegionGeometryBuilder::new();

        assert_eq!(builder.build(&landmarks, RegionKind::LeftCheek).len(), 18);
        assert!(builder.build(&landmarks, RegionKind::RightCheek).is_empty());
    }
}
