//! Error types for grid and reference-system primitives.

use thiserror::Error;

/// Result type alias using GridError.
pub type GridResult<T> = Result<T, GridError>;

/// Errors raised while building or inspecting grid data.
#[derive(Debug, Error)]
pub enum GridError {
    #[error("Array '{0}' is empty, min/max undefined")]
    EmptyArray(String),

    #[error("Shape {shape} expects {expected} elements, got {actual}")]
    ShapeMismatch {
        shape: String,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid EPSG code: {0}")]
    InvalidEpsg(String),
}
