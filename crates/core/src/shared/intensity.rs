use super::constants::MAX_INTENSITY;

/// Overlay strength in [0, 100]. Built from untrusted caller input by
/// clamping, never by rejecting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Intensity(u8);

impl Intensity {
    pub const ZERO: Intensity = Intensity(0);
    pub const FULL: Intensity = Intensity(MAX_INTENSITY as u8);

    pub fn from_untrusted(value: i64) -> Self {
        Self(value.clamp(0, MAX_INTENSITY) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Blend factor in [0.0, 1.0].
    pub fn factor(self) -> f64 {
        self.0 as f64 / MAX_INTENSITY as f64
    }
}
