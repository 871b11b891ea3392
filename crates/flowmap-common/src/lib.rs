//! Common types shared across the flowmap crates.

pub mod canvas;
pub mod crs;
pub mod error;
pub mod grid;

pub use canvas::{Canvas, CanvasValue};
pub use crs::EpsgCode;
pub use error::{GridError, GridResult};
pub use grid::{format_shape, ArrayData, ArrayLike, DType, Grid, GridArray, Scalar};
