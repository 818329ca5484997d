//! Error types for isomesh-grid.

use thiserror::Error;

/// The error type for grid construction.
#[derive(Error, Debug)]
pub enum GridError {
    /// Sample count does not match the requested shape.
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}

/// A specialized Result type for isomesh-grid operations.
pub type Result<T> = std::result::Result<T, GridError>;
