//! Error types for shape construction and validation.
//!
//! Queries never fail; only building shapes from caller data can.

use thiserror::Error;

/// Result type alias for shape construction.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors raised while validating or building shapes.
#[derive(Debug, Error, PartialEq)]
pub enum ShapeError {
    /// A size-like parameter is negative or not finite.
    #[error("invalid {name}: {value}")]
    InvalidParameter { name: &'static str, value: f32 },

    /// Triangle mesh input has no triangles.
    #[error("triangle mesh is empty")]
    EmptyMesh,

    /// Triangle mesh input was rejected by the mesh builder.
    #[error("invalid triangle mesh: {0}")]
    InvalidMesh(String),
}

impl ShapeError {
    /// Create an invalid parameter error.
    #[must_use]
    pub const fn invalid_parameter(name: &'static str, value: f32) -> Self {
        Self::InvalidParameter { name, value }
    }

    /// Create an invalid mesh error.
    #[must_use]
    pub fn invalid_mesh(details: impl Into<String>) -> Self {
        Self::InvalidMesh(details.into())
    }
}

/// Check that `value` is finite and non-negative.
pub(crate) fn check_non_negative(name: &'static str, value: f32) -> ShapeResult<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ShapeError::invalid_parameter(name, value))
    }
}
