pub mod color_spec;
pub mod palette;

pub use color_spec::{normalize, ColorSpec, ColorTriple, FALLBACK_COLOR};
