//! Error types for NetCDF format operations.

use thiserror::Error;

/// Result type for NetCDF format operations.
pub type NetCdfResult<T> = Result<T, NetCdfError>;

/// Error types for NetCDF format operations.
#[derive(Error, Debug)]
pub enum NetCdfError {
    /// A reference system or transformation could not be built
    #[error("Projection error: {0}")]
    Projection(#[from] projection::ProjectionError),

    /// Invalid grid data
    #[error("Grid error: {0}")]
    Grid(#[from] flowmap_common::GridError),

    /// Missing required variable or attribute
    #[error("Missing required data: {0}")]
    MissingData(String),

    /// Configuration values that cannot be used
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Text rendering failed
    #[error("Formatting failed: {0}")]
    Fmt(#[from] std::fmt::Error),
}
