//! Ordered facial keypoints for a single face.

use crate::shared::region::Point;

#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct LandmarkSet {
    points: Vec<Point>,
}

impl LandmarkSet {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Points at the given indices, in index order, silently dropping
    /// indices past the end of the set.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }
}

impl From<Vec<(i32, i32)>> for LandmarkSet {
    fn from(points: Vec<(i32, i32)>) -> Self {
        Self::new(points.into_iter().map(Point::from).collect())
    }
}
