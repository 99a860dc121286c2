//! Shared foundation for the scedastic workspace
//!
//! This crate provides the pieces the dispersion-regressogram crates build
//! on: the unified error type, quantile estimation behind a common trait,
//! and validated paired samples.
//!
//! # Examples
//!
//! ```rust
//! use scedastic_core::{HarrellDavis, QuantileEstimator, SampleQuantile};
//!
//! let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
//!
//! // Classical empirical quantile
//! let median = SampleQuantile.median_sorted(&data).unwrap();
//! assert_eq!(median, 3.0);
//!
//! // Harrell-Davis smooths over all order statistics
//! let hd = HarrellDavis.quantile_sorted(&data, 0.25).unwrap();
//! assert!(hd > 1.0 && hd < 3.0);
//! ```

pub mod error;
pub mod quantile;
pub mod sample;

// Re-export core types
pub use error::{Error, Result};
pub use quantile::{HarrellDavis, QuantileEstimator, SampleQuantile};
pub use sample::PairedSample;
