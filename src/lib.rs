//! Robust dispersion diagnostics for regression assumptions
//!
//! The classical linear model assumes the response scatters around the fit
//! with constant variance. The dispersion regressogram is the robust
//! visual check of that assumption: bin a predictor (a raw covariate, or a
//! model's fitted values when the response column holds residuals),
//! compute standardized-MAD-over-median within each bin, and plot the
//! per-bin points. Flat means homoscedastic; a trend means the assumption
//! is violated.
//!
//! This crate re-exports the workspace members:
//!
//! - [`scedastic_core`]: error taxonomy, quantile estimators, validated
//!   paired samples
//! - [`scedastic_spread`]: MAD and relative-MAD dispersion estimators
//! - [`scedastic_regressogram`]: binning strategies and the regressogram
//!   builder
//!
//! # Examples
//!
//! ```rust
//! use scedastic::{dispersion_regressogram, BinningScheme};
//!
//! // Fitted values and residuals from some external model fit
//! let fitted: Vec<f64> = (0..40).map(|i| 10.0 + i as f64).collect();
//! let resid: Vec<f64> = (0..40).map(|i| if i % 2 == 0 { 1.0 } else { 1.5 }).collect();
//!
//! let rg = dispersion_regressogram(&fitted, &resid, &BinningScheme::Uniform { bins: None })
//!     .unwrap();
//! for (midpoint, dispersion) in rg.finite_points() {
//!     println!("{midpoint:.1}\t{dispersion:.3}");
//! }
//! ```

pub use scedastic_core::{
    Error, HarrellDavis, PairedSample, QuantileEstimator, Result, SampleQuantile,
};
pub use scedastic_regressogram::{
    decile_grid, decile_regressogram, dispersion_regressogram, sturges, uniform_regressogram,
    BinningScheme, BinningStrategy, DispersionBin, QuantileBins, Regressogram,
    RegressogramBuilder, UniformBins,
};
pub use scedastic_spread::{
    DispersionEstimator, DispersionEstimatorProperties, Mad, RelativeMad,
    MAD_CONSISTENCY_FACTOR,
};
