//! Coordinate reference systems and transformations between them.
//!
//! Projection math is delegated to `proj4rs`; EPSG codes are resolved to
//! PROJ definitions through the `crs-definitions` registry.

pub mod error;
pub mod spatial_ref;
pub mod transform;

pub use error::{ProjectionError, ProjectionResult};
pub use spatial_ref::SpatialReference;
pub use transform::CoordinateTransformation;
