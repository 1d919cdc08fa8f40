pub mod region_geometry_builder;

pub use region_geometry_builder::RegionGeometryBuilder;
