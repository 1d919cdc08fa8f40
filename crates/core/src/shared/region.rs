use std::fmt;

use super::constants::{LEFT_CHEEK_LANDMARKS, LIPS_LANDMARKS, RIGHT_CHEEK_LANDMARKS};

/// A facial area that can receive an overlay.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    LeftCheek,
    RightCheek,
    Lips,
}

impl RegionKind {
    pub const ALL: [RegionKind; 3] = [RegionKind::LeftCheek, RegionKind::RightCheek, RegionKind::Lips];

    pub fn is_cheek(self) -> bool {
        matches!(self, RegionKind::LeftCheek | RegionKind::RightCheek)
    }

    /// Default landmark indices for this region.
    pub fn landmark_indices(self) -> &'static [usize] {
        match self {
            RegionKind::LeftCheek => LEFT_CHEEK_LANDMARKS,
            RegionKind::RightCheek => RIGHT_CHEEK_LANDMARKS,
            RegionKind::Lips => LIPS_LANDMARKS,
        }
    }

    /// Stage name used for timings and log lines.
    pub fn name(self) -> &'static str {
        match self {
            RegionKind::LeftCheek => "left_cheek",
            RegionKind::RightCheek => "right_cheek",
            RegionKind::Lips => "lips",
        }
    }
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Integer pixel coordinate, as produced by the landmark detector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Closed outline of a region; the last point connects back to the first.
pub type Polygon = Vec<Point>;
