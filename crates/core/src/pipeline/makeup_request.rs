use std::fmt;
use std::str::FromStr;

use crate::color::{normalize, ColorTriple, FALLBACK_COLOR};
use crate::shared::intensity::Intensity;
use crate::shared::region::RegionKind;

/// Which products a caller wants applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MakeupType {
    Lips,
    Cheeks,
    Both,
}

impl FromStr for MakeupType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "lips" => Ok(MakeupType::Lips),
            "cheeks" => Ok(MakeupType::Cheeks),
            "both" => Ok(MakeupType::Both),
            other => Err(format!(
                "Makeup type must be one of: lips, cheeks, both, got '{other}'"
            )),
        }
    }
}

impl fmt::Display for MakeupType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MakeupType::Lips => write!(f, "lips"),
            MakeupType::Cheeks => write!(f, "cheeks"),
            MakeupType::Both => write!(f, "both"),
        }
    }
}

/// Per-region colors and intensities for one overlay call.
///
/// Colors stay in caller form until [`MakeupRequest::passes`] normalizes
/// them; a missing color resolves to the fallback color.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MakeupRequest {
    pub lips_color: Option<String>,
    pub lips_intensity: Intensity,
    pub cheeks_color: Option<String>,
    pub cheeks_intensity: Intensity,
}

/// One region to composite, with its color already normalized.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionPass {
    pub region: RegionKind,
    pub color: ColorTriple,
    pub intensity: Intensity,
}

impl MakeupRequest {
    pub fn new(
        lips_color: Option<&str>,
        lips_intensity: i64,
        cheeks_color: Option<&str>,
        cheeks_intensity: i64,
    ) -> Self {
        Self {
            lips_color: lips_color.map(str::to_string),
            lips_intensity: Intensity::from_untrusted(lips_intensity),
            cheeks_color: cheeks_color.map(str::to_string),
            cheeks_intensity: Intensity::from_untrusted(cheeks_intensity),
        }
    }

    pub fn lips(color: &str, intensity: i64) -> Self {
        Self::new(Some(color), intensity, None, 0)
    }

    pub fn cheeks(color: &str, intensity: i64) -> Self {
        Self::new(None, 0, Some(color), intensity)
    }

    /// Drops the products `makeup_type` does not cover.
    pub fn restricted_to(mut self, makeup_type: MakeupType) -> Self {
        match makeup_type {
            MakeupType::Lips => {
                self.cheeks_color = None;
                self.cheeks_intensity = Intensity::ZERO;
            }
            MakeupType::Cheeks => {
                self.lips_color = None;
                self.lips_intensity = Intensity::ZERO;
            }
            MakeupType::Both => {}
        }
        self
    }

    pub fn is_noop(&self) -> bool {
        self.lips_intensity.is_zero() && self.cheeks_intensity.is_zero()
    }

    /// Regions to composite, in application order: left cheek, right cheek,
    /// then lips on top. Zero-intensity products contribute no passes.
    pub fn passes(&self) -> Vec<RegionPass> {
        let mut passes = Vec::with_capacity(3);

        if !self.cheeks_intensity.is_zero() {
            let color = resolve(self.cheeks_color.as_deref());
            for region in [RegionKind::LeftCheek, RegionKind::RightCheek] {
                passes.push(RegionPass {
                    region,
                    color,
                    intensity: self.cheeks_intensity,
                });
            }
        }

        if !self.lips_intensity.is_zero() {
            passes.push(RegionPass {
                region: RegionKind::Lips,
                color: resolve(self.lips_color.as_deref()),
                intensity: self.lips_intensity,
            });
        }

        passes
    }
}

fn resolve(color: Option<&str>) -> ColorTriple {
    color.map(normalize).unwrap_or(FALLBACK_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::lips("lips", MakeupType::Lips)]
    #[case::cheeks("Cheeks", MakeupType::Cheeks)]
    #[case::both(" BOTH ", MakeupType::Both)]
    fn test_makeup_type_parse(#[case] input: &str, #[case] expected: MakeupType) {
        assert_eq!(input.parse::<MakeupType>().unwrap(), expected);
    }

    #[test]
    fn test_makeup_type_rejects_unknown() {
        let err = "eyes".parse::<MakeupType>().unwrap_err();
        assert!(err.contains("eyes"));
    }

    #[test]
    fn test_makeup_type_display_roundtrips() {
        for t in [MakeupType::Lips, MakeupType::Cheeks, MakeupType::Both] {
            assert_eq!(t.to_string().parse::<MakeupType>().unwrap(), t);
        }
    }

    #[test]
    fn test_passes_order_cheeks_then_lips() {
        let request = MakeupRequest::new(Some("red"), 60, Some("coral"), 30);
        let regions: Vec<RegionKind> = request.passes().iter().map(|p| p.region).collect();
        assert_eq!(
            regions,
            vec![RegionKind::LeftCheek, RegionKind::RightCheek, RegionKind::Lips]
        );
    }

    #[test]
    fn test_passes_normalize_colors() {
        let request = MakeupRequest::new(Some("#ff0000"), 60, Some("rgb(1,2,3)"), 30);
        let passes = request.passes();
        assert_eq!(passes[0].color, ColorTriple::new(1, 2, 3));
        assert_eq!(passes[1].color, ColorTriple::new(1, 2, 3));
        assert_eq!(passes[2].color, ColorTriple::new(255, 0, 0));
        assert_eq!(passes[2].intensity.value(), 60);
    }

    #[test]
    fn test_zero_intensity_products_skipped() {
        assert_eq!(MakeupRequest::lips("red", 50).passes().len(), 1);
        assert_eq!(MakeupRequest::cheeks("red", 50).passes().len(), 2);
        assert!(MakeupRequest::new(Some("red"), 0, Some("red"), 0).passes().is_empty());
        assert!(MakeupRequest::default().is_noop());
    }

    #[test]
    fn test_intensities_clamped_from_untrusted_input() {
        let request = MakeupRequest::new(Some("red"), 500, Some("red"), -20);
        assert_eq!(request.lips_intensity, Intensity::FULL);
        assert!(request.cheeks_intensity.is_zero());
        assert_eq!(request.passes().len(), 1);
    }

    #[test]
    fn test_missing_color_uses_fallback() {
        let request = MakeupRequest::new(None, 40, None, 0);
        assert_eq!(request.passes()[0].color, FALLBACK_COLOR);
    }

    #[test]
    fn test_restricted_to() {
        let both = MakeupRequest::new(Some("red"), 60, Some("coral"), 30);

        let lips = both.clone().restricted_to(MakeupType::Lips);
        assert!(lips.cheeks_intensity.is_zero());
        assert_eq!(lips.cheeks_color, None);
        assert_eq!(lips.lips_intensity.value(), 60);

        let cheeks = both.clone().restricted_to(MakeupType::Cheeks);
        assert!(cheeks.lips_intensity.is_zero());
        assert_eq!(cheeks.cheeks_color.as_deref(), Some("coral"));

        assert_eq!(both.clone().restricted_to(MakeupType::Both), both);
    }
}
