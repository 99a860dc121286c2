//! Error types for dispersion diagnostics
//!
//! Provides the unified error type shared by all scedastic crates.

use thiserror::Error;

/// Core error type for regressogram construction and estimation
#[derive(Error, Debug)]
pub enum Error {
    /// Malformed or mismatched sample data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to an estimator or binning scheme
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Binning produced fewer than two distinct boundaries
    #[error("Degenerate binning: {0}")]
    DegenerateBinning(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InvalidInput(format!("{operation} requires a non-empty sample"))
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for an out-of-range probability
    pub fn invalid_probability(p: f64) -> Self {
        Self::InvalidParameter(format!("Probability {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }
}
