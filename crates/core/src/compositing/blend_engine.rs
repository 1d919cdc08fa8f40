use ndarray::{Axis, Zip};

use crate::color::ColorTriple;
use crate::shared::constants::{CHEEKS_MAX_OPACITY, LIPS_MAX_OPACITY};
use crate::shared::error::OverlayError;
use crate::shared::frame::Frame;
use crate::shared::intensity::Intensity;
use crate::shared::mask::Mask;
use crate::shared::region::RegionKind;

/// Blends a solid color into a copy of `base` through `mask`.
///
/// Cheeks interpolate straight toward the color, capped at 40% opacity.
/// Lips interpolate toward a multiply blend of base and color, capped at
/// 70%, which keeps the lip texture visible under the pigment.
/// The input frame is never modified.
pub fn blend(
    base: &Frame,
    mask: &Mask,
    color: ColorTriple,
    intensity: Intensity,
    region: RegionKind,
) -> Result<Frame, OverlayError> {
    if base.channels() != 3 {
        return Err(OverlayError::UnsupportedChannels(base.channels()));
    }
    base.check_layout()?;
    if mask.dimensions() != (base.width(), base.height()) {
        return Err(OverlayError::MaskMismatch {
            expected: (base.width(), base.height()),
            actual: mask.dimensions(),
        });
    }

    let weight = intensity.factor() * max_opacity(region);
    let color = color.to_array();
    let mut output = base.clone();

    {
        let mask_view = mask.as_ndarray()?;
        let mut pixels = output.as_ndarray_mut()?;
        Zip::from(pixels.lanes_mut(Axis(2)))
            .and(&mask_view)
            .for_each(|mut px, &m| {
                if m == 0 {
                    return;
                }
                let alpha = m as f64 / 255.0 * weight;
                for (v, &c) in px.iter_mut().zip(color.iter()) {
                    *v = mix_channel(*v, c, alpha, region);
                }
            });
    }

    Ok(output)
}

fn max_opacity(region: RegionKind) -> f64 {
    match region {
        RegionKind::Lips => LIPS_MAX_OPACITY,
        RegionKind::LeftCheek | RegionKind::RightCheek => CHEEKS_MAX_OPACITY,
    }
}

fn mix_channel(base: u8, color: u8, alpha: f64, region: RegionKind) -> u8 {
    let b = base as f64;
    let target = match region {
        RegionKind::Lips => b * color as f64 / 255.0,
        RegionKind::LeftCheek | RegionKind::RightCheek => color as f64,
    };
    (b * (1.0 - alpha) + target * alpha).clamp(0.0, 255.0) as u8
}
