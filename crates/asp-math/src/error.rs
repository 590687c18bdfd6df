//! Error types shared by every asp crate.

use thiserror::Error;

/// Errors raised by geometric construction and computation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A vector-valued input did not have the expected number of components.
    #[error("expected {expected} components, got {actual}")]
    Dimension {
        /// Required component count.
        expected: usize,
        /// Component count actually supplied.
        actual: usize,
    },

    /// An argument was outside the domain of the operation.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The geometry admits no well-defined answer (zero-length or parallel vectors).
    #[error("degenerate geometry: {0}")]
    DegenerateGeometry(String),
}

/// Result type for geometric operations.
pub type Result<T> = std::result::Result<T, GeometryError>;
