//! Robust dispersion estimators for the scedastic workspace
//!
//! Traditional spread measures like the standard deviation are dominated
//! by outliers. The estimators here are built on medians instead:
//!
//! - **MAD**: `median(|x - median(x)|)`, raw or scaled by 1.4826 for
//!   consistency with the standard deviation under normality.
//! - **Relative MAD**: standardized MAD divided by the median, the
//!   per-bin statistic of a dispersion regressogram.
//!
//! # Examples
//!
//! ```rust
//! use scedastic_core::SampleQuantile;
//! use scedastic_spread::{DispersionEstimator, Mad, RelativeMad};
//!
//! let mut sample = vec![1.0, 2.0, 3.0, 4.0, 5.0, 100.0]; // Outlier!
//!
//! // MAD shrugs off the outlier
//! let mad = Mad::standardized();
//! let spread = mad.estimate(&mut sample, &SampleQuantile).unwrap();
//! assert!(spread < 4.0);
//!
//! // Relative MAD normalizes by the sample's own level
//! let relative = RelativeMad::new();
//! let ratio = relative.estimate(&mut sample, &SampleQuantile).unwrap();
//! assert!(ratio > 0.0);
//! ```

pub mod mad;
pub mod relative;
pub mod traits;

// Re-exports
pub use mad::{Mad, MAD_CONSISTENCY_FACTOR};
pub use relative::RelativeMad;
pub use traits::{DispersionEstimator, DispersionEstimatorProperties};

pub use scedastic_core::Result;
