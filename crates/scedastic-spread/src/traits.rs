//! Core traits for dispersion estimation

use scedastic_core::{QuantileEstimator, Result};

/// Intrinsic properties of a dispersion estimator
pub trait DispersionEstimatorProperties {
    /// Name of this estimator
    fn name(&self) -> &str;

    /// Whether this estimator is robust to outliers
    fn is_robust(&self) -> bool;

    /// Asymptotic breakdown point (0.0 to 0.5)
    fn breakdown_point(&self) -> f64;
}

/// Parameterized trait for dispersion estimators
///
/// Estimators are parameterized by their quantile estimator rather than
/// storing one internally, so the same statistic can run over classical or
/// Harrell-Davis medians.
pub trait DispersionEstimator<Q: QuantileEstimator>: DispersionEstimatorProperties {
    /// Estimate dispersion with the provided quantile estimator
    ///
    /// Sorts the data in place. Use `estimate_sorted` with pre-sorted data
    /// to preserve the original order.
    fn estimate(&self, data: &mut [f64], quantile_est: &Q) -> Result<f64> {
        data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.estimate_sorted(data, quantile_est)
    }

    /// Estimate dispersion from pre-sorted data
    fn estimate_sorted(&self, sorted: &[f64], quantile_est: &Q) -> Result<f64>;
}
