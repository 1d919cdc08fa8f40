pub mod blend_engine;
pub mod gaussian;
pub mod mask_compositor;
