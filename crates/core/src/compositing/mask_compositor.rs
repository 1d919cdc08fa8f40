use image::{GrayImage, Luma};
use imageproc::drawing::draw_polygon_mut;
use imageproc::geometry::convex_hull;
use imageproc::point::Point as CanvasPoint;

use crate::shared::constants::{
    CHEEKS_BLUR_FRACTION, CHEEKS_BLUR_MIN_KERNEL, LIPS_BLUR_FRACTION, LIPS_BLUR_MIN_KERNEL,
};
use crate::shared::mask::Mask;
use crate::shared::region::{Point, RegionKind};

use super::gaussian::{self, RoiRect};

const FILL: Luma<u8> = Luma([255]);

/// Rasterizes a region outline into a soft-edged opacity mask the size of
/// the frame.
///
/// Lips are filled exactly as outlined so the lip corners and cupid's bow
/// keep their concavity. Cheeks are filled through their convex hull.
/// Fewer than three usable points produce an all-zero mask.
pub fn rasterize(polygon: &[Point], (width, height): (u32, u32), region: RegionKind) -> Mask {
    if polygon.len() < 3 || width == 0 || height == 0 {
        return Mask::zeros(width, height);
    }

    let points: Vec<CanvasPoint<i32>> = polygon
        .iter()
        .map(|p| to_canvas(p, width, height))
        .collect();
    let outline = match region {
        RegionKind::Lips => open_ring(points),
        RegionKind::LeftCheek | RegionKind::RightCheek => open_ring(convex_hull(&points[..])),
    };

    if outline.len() < 3 {
        return Mask::zeros(width, height);
    }

    let mut canvas = GrayImage::new(width, height);
    draw_polygon_mut(&mut canvas, &outline, FILL);

    let mut data = canvas.into_raw();
    let kernel_size = blur_kernel_size(region, width, height);
    if let Some(rect) = blur_window(&data, width as usize, height as usize, kernel_size / 2) {
        gaussian::blur_roi_in_place(&mut data, width as usize, 1, rect, kernel_size);
    }

    Mask::new(data, width, height)
}

/// Odd blur kernel size proportional to the smaller frame side.
///
/// Lips get a tight kernel to keep the lip line crisp; cheeks a wide one
/// so the flush fades out.
pub fn blur_kernel_size(region: RegionKind, width: u32, height: u32) -> usize {
    let min_side = width.min(height) as f64;
    let (fraction, floor) = match region {
        RegionKind::Lips => (LIPS_BLUR_FRACTION, LIPS_BLUR_MIN_KERNEL),
        RegionKind::LeftCheek | RegionKind::RightCheek => {
            (CHEEKS_BLUR_FRACTION, CHEEKS_BLUR_MIN_KERNEL)
        }
    };
    let size = ((min_side * fraction) as usize).max(floor);
    size | 1
}

/// Clamps a point into the frame padded by one frame size on every side.
/// The fill works in `i32`, so far-off landmarks must not reach it raw.
fn to_canvas(p: &Point, width: u32, height: u32) -> CanvasPoint<i32> {
    let (w, h) = (width as i64, height as i64);
    CanvasPoint::new(
        (p.x as i64).clamp(-w, 2 * w) as i32,
        (p.y as i64).clamp(-h, 2 * h) as i32,
    )
}

/// Bounding box of the filled pixels grown by `margin`, clipped to the
/// canvas. `None` when nothing was filled.
fn blur_window(data: &[u8], width: usize, height: usize, margin: usize) -> Option<RoiRect> {
    let mut min_x = usize::MAX;
    let mut min_y = usize::MAX;
    let mut max_x = 0;
    let mut max_y = 0;
    for (y, row) in data.chunks_exact(width).enumerate() {
        if let Some(first) = row.iter().position(|&v| v > 0) {
            let last = row.iter().rposition(|&v| v > 0).unwrap_or(first);
            min_x = min_x.min(first);
            max_x = max_x.max(last);
            min_y = min_y.min(y);
            max_y = y;
        }
    }
    if min_y == usize::MAX {
        return None;
    }

    let x0 = min_x.saturating_sub(margin);
    let y0 = min_y.saturating_sub(margin);
    let x1 = (max_x + margin).min(width - 1);
    let y1 = (max_y + margin).min(height - 1);
    Some(RoiRect {
        x: x0,
        y: y0,
        w: x1 - x0 + 1,
        h: y1 - y0 + 1,
    })
}

/// Drops trailing points that repeat the first one; the fill closes the
/// ring implicitly.
fn open_ring(mut points: Vec<CanvasPoint<i32>>) -> Vec<CanvasPoint<i32>> {
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    points
}
