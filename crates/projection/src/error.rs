//! Error types for reference-system operations.

use thiserror::Error;

/// Result type for projection operations.
pub type ProjectionResult<T> = Result<T, ProjectionError>;

/// Errors raised while building or applying reference systems.
#[derive(Error, Debug)]
pub enum ProjectionError {
    /// No definition is known for this EPSG code
    #[error("Unknown EPSG code: {0}")]
    UnknownEpsg(u32),

    /// The definition exists but the projection library rejected it
    #[error("Cannot initialize EPSG:{epsg} from '{definition}': {message}")]
    InvalidDefinition {
        epsg: u32,
        definition: String,
        message: String,
    },

    /// A coordinate could not be transformed
    #[error("Transform failed for ({x:.6}, {y:.6}): {message}")]
    TransformFailed { x: f64, y: f64, message: String },
}
