pub mod constants;
pub mod error;
pub mod frame;
pub mod intensity;
pub mod mask;
pub mod region;
