//! Error types for the symbolic time-series engine
//!
//! Provides a unified error type shared by all sax-series crates.

use thiserror::Error;

/// Core error type for symbolic encoding operations
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Operation on an object in an unusable state (defensive)
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// Memory allocation failure
    #[error("Memory error: {0}")]
    Memory(String),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a cardinality outside [2, 16]
    pub fn invalid_cardinality(c: usize) -> Self {
        Self::InvalidParameter(format!("Cardinality {c} must be in [2, 16]"))
    }

    /// Create an error for series/word geometry that does not divide evenly
    pub fn non_dividing(n: usize, w: usize) -> Self {
        Self::InvalidParameter(format!(
            "Series length {n} must be evenly divisible by word length {w}"
        ))
    }

    /// Create an error for a length outside its admissible range
    pub fn length_out_of_range(what: &str, value: usize, max: usize) -> Self {
        Self::InvalidParameter(format!("{what} {value} must be in (1, {max}]"))
    }

    /// Create an error for a failed buffer allocation
    pub fn allocation(what: &str, capacity: usize) -> Self {
        Self::Memory(format!("failed to allocate {what} of {capacity} elements"))
    }
}
