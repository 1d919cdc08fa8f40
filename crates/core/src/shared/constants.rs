//! Compiled-in overlay configuration. Changing any of these changes output.

/// Outer lip contour in face-mesh indexing. Order defines the fill shape.
pub const LIPS_LANDMARKS: &[usize] = &[
    61, 146, 91, 181, 84, 17, 314, 405, 320, 307, 375, 321, 308, 324, 318, 402, 317, 14, 87, 178,
    88, 95, 78, 191, 80, 81, 82, 13, 312, 311, 310, 415,
];

pub const LEFT_CHEEK_LANDMARKS: &[usize] = &[116, 117, 118, 50, 36, 205, 206, 207, 213, 192, 147];

pub const RIGHT_CHEEK_LANDMARKS: &[usize] =
    &[345, 346, 347, 280, 266, 425, 426, 427, 436, 416, 376];

/// A region needs at least this many in-range landmarks to produce geometry.
pub const MIN_REGION_LANDMARKS: usize = 4;

/// Cheek ellipse semi-axes in pixels, independent of image resolution.
pub const CHEEK_RADIUS_X: f64 = 35.0;
pub const CHEEK_RADIUS_Y: f64 = 25.0;

/// Angular step between sampled cheek ellipse points, in degrees.
pub const CHEEK_ANGLE_STEP_DEG: usize = 20;

/// Mask blur kernel as a fraction of `min(width, height)`, with a floor.
pub const LIPS_BLUR_FRACTION: f64 = 0.008;
pub const LIPS_BLUR_MIN_KERNEL: usize = 3;
pub const CHEEKS_BLUR_FRACTION: f64 = 0.025;
pub const CHEEKS_BLUR_MIN_KERNEL: usize = 15;

/// Maximum overlay opacity at intensity 100.
pub const CHEEKS_MAX_OPACITY: f64 = 0.4;
pub const LIPS_MAX_OPACITY: f64 = 0.7;

pub const MAX_INTENSITY: i64 = 100;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "tiff", "tif", "webp"];
