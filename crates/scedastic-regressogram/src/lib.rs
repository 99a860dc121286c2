//! Dispersion regressograms over binned predictors
//!
//! A regressogram partitions a predictor's range into contiguous bins and
//! summarizes the response within each bin. Here the summary is robust
//! relative dispersion (standardized MAD over median), which makes
//! non-constant response scatter visible when plotted against a raw
//! covariate or against a fitted model's predictions — the classic visual
//! check that a regression's constant-variance assumption holds.
//!
//! # Examples
//!
//! ## Uniform bins with the Sturges bin count
//!
//! ```rust
//! use scedastic_regressogram::uniform_regressogram;
//!
//! let predictor: Vec<f64> = (0..50).map(|i| i as f64).collect();
//! let response: Vec<f64> = predictor.iter().map(|x| 10.0 + x * 0.5).collect();
//!
//! let rg = uniform_regressogram(&predictor, &response).unwrap();
//! for bin in rg.bins() {
//!     println!("{bin}");
//! }
//! ```
//!
//! ## Decile bins from empirical predictor quantiles
//!
//! ```rust
//! use scedastic_regressogram::decile_regressogram;
//!
//! let predictor: Vec<f64> = (0..50).map(|i| i as f64).collect();
//! let response: Vec<f64> = predictor.iter().map(|x| 10.0 + x * 0.5).collect();
//!
//! let rg = decile_regressogram(&predictor, &response).unwrap();
//! // (midpoint, dispersion) pairs, ready for a scatter overlay
//! let points = rg.points();
//! assert!(points.len() <= 10);
//! ```
//!
//! ## Explicit scheme selection
//!
//! ```rust
//! use scedastic_regressogram::{dispersion_regressogram, BinningScheme};
//!
//! let predictor: Vec<f64> = (0..30).map(|i| i as f64).collect();
//! let response: Vec<f64> = predictor.iter().map(|x| 5.0 + x).collect();
//!
//! let scheme = BinningScheme::Uniform { bins: Some(4) };
//! let rg = dispersion_regressogram(&predictor, &response, &scheme).unwrap();
//! assert_eq!(rg.len(), 4);
//! ```
//!
//! ## Custom estimators at the seams
//!
//! ```rust
//! use scedastic_core::SampleQuantile;
//! use scedastic_regressogram::{RegressogramBuilder, UniformBins};
//! use scedastic_spread::RelativeMad;
//!
//! let predictor: Vec<f64> = (0..20).map(|i| i as f64).collect();
//! let response: Vec<f64> = predictor.iter().map(|x| x + 1.0).collect();
//!
//! let builder = RegressogramBuilder::new(UniformBins::with_bins(5));
//! let rg = builder
//!     .build(&predictor, &response, &RelativeMad::new(), &SampleQuantile)
//!     .unwrap();
//! assert_eq!(rg.len(), 5);
//! ```

pub mod builder;
pub mod strategies;
pub mod types;

// Re-export main types and traits
pub use builder::RegressogramBuilder;
pub use strategies::{decile_grid, sturges, BinningStrategy, QuantileBins, UniformBins};
pub use types::{DispersionBin, Regressogram};

use scedastic_core::HarrellDavis;
use scedastic_spread::RelativeMad;

pub use scedastic_core::{Error, Result};

/// Tagged choice of binning scheme
///
/// `Uniform { bins: None }` derives the bin count from Sturges' rule on
/// the sample size; `Quantile { grid: None }` uses the decile grid.
#[derive(Debug, Clone, PartialEq)]
pub enum BinningScheme {
    /// Equal-width bins over the predictor's observed range
    Uniform { bins: Option<usize> },
    /// Bins with edges at empirical predictor quantiles
    Quantile { grid: Option<Vec<f64>> },
}

/// Build a dispersion regressogram with the default estimators
///
/// The per-bin statistic is standardized MAD over median, with medians
/// from the Harrell-Davis estimator; quantile-scheme bin edges come from
/// the empirical quantiles of the predictor. Zero-median bins carry a NaN
/// dispersion (see [`Regressogram::finite_points`]).
pub fn dispersion_regressogram(
    predictor: &[f64],
    response: &[f64],
    scheme: &BinningScheme,
) -> Result<Regressogram> {
    let dispersion = RelativeMad::new();
    let quantile_est = HarrellDavis;
    match scheme {
        BinningScheme::Uniform { bins } => {
            let strategy = match bins {
                Some(k) => UniformBins::with_bins(*k),
                None => UniformBins::sturges(),
            };
            RegressogramBuilder::new(strategy).build(predictor, response, &dispersion, &quantile_est)
        }
        BinningScheme::Quantile { grid } => {
            let strategy = match grid {
                Some(g) => QuantileBins::with_grid(g.clone())?,
                None => QuantileBins::deciles(),
            };
            RegressogramBuilder::new(strategy).build(predictor, response, &dispersion, &quantile_est)
        }
    }
}

/// Uniform-bin regressogram with the Sturges bin count
pub fn uniform_regressogram(predictor: &[f64], response: &[f64]) -> Result<Regressogram> {
    dispersion_regressogram(predictor, response, &BinningScheme::Uniform { bins: None })
}

/// Decile-bin regressogram from empirical predictor quantiles
pub fn decile_regressogram(predictor: &[f64], response: &[f64]) -> Result<Regressogram> {
    dispersion_regressogram(predictor, response, &BinningScheme::Quantile { grid: None })
}
