//! Quantile estimation
//!
//! Two estimators share one trait: the classical empirical quantile with
//! linear interpolation between order statistics, and the Harrell-Davis
//! estimator, which smooths over all order statistics with Beta-CDF
//! weights. The empirical estimator reproduces textbook quantiles exactly;
//! Harrell-Davis trades that for lower variance and lets a lone outlier in
//! an otherwise constant sample register in the median.

use crate::error::{Error, Result};
use statrs::distribution::{Beta, ContinuousCDF};

/// Main trait for quantile estimation
pub trait QuantileEstimator {
    /// Estimate a single quantile from pre-sorted data
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64>;

    /// Estimate a single quantile
    ///
    /// Sorts the data in place. Use `quantile_sorted` with pre-sorted data
    /// to preserve the original order.
    fn quantile(&self, data: &mut [f64], p: f64) -> Result<f64> {
        data.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        self.quantile_sorted(data, p)
    }

    /// Estimate multiple quantiles from pre-sorted data
    fn quantiles_sorted(&self, sorted: &[f64], ps: &[f64]) -> Result<Vec<f64>> {
        ps.iter().map(|&p| self.quantile_sorted(sorted, p)).collect()
    }

    /// Estimate the median from pre-sorted data
    fn median_sorted(&self, sorted: &[f64]) -> Result<f64> {
        self.quantile_sorted(sorted, 0.5)
    }

    /// Name of this estimator
    fn name(&self) -> &'static str;
}

fn check_args(sorted: &[f64], p: f64) -> Result<()> {
    if sorted.is_empty() {
        return Err(Error::empty_input("quantile estimation"));
    }
    if !(0.0..=1.0).contains(&p) {
        return Err(Error::invalid_probability(p));
    }
    Ok(())
}

/// Classical empirical quantile with linear interpolation (R type 7)
#[derive(Debug, Clone, Copy, Default)]
pub struct SampleQuantile;

impl QuantileEstimator for SampleQuantile {
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64> {
        check_args(sorted, p)?;
        let n = sorted.len();
        if n == 1 {
            return Ok(sorted[0]);
        }

        let h = (n - 1) as f64 * p;
        let lo = h.floor() as usize;
        let hi = (lo + 1).min(n - 1);
        let frac = h - lo as f64;
        Ok(sorted[lo] + frac * (sorted[hi] - sorted[lo]))
    }

    fn name(&self) -> &'static str {
        "sample"
    }
}

/// Harrell-Davis quantile estimator
///
/// A weighted sum of all order statistics, with weights taken as CDF
/// increments of `Beta((n+1)p, (n+1)(1-p))`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarrellDavis;

impl QuantileEstimator for HarrellDavis {
    fn quantile_sorted(&self, sorted: &[f64], p: f64) -> Result<f64> {
        check_args(sorted, p)?;
        let n = sorted.len();
        if n == 1 {
            return Ok(sorted[0]);
        }
        if p == 0.0 {
            return Ok(sorted[0]);
        }
        if p == 1.0 {
            return Ok(sorted[n - 1]);
        }

        let n_f = n as f64;
        let alpha = (n_f + 1.0) * p;
        let beta = (n_f + 1.0) * (1.0 - p);
        let dist = Beta::new(alpha, beta)
            .map_err(|e| Error::Computation(format!("Beta({alpha}, {beta}): {e}")))?;

        let mut estimate = 0.0;
        let mut cdf_right = 0.0;
        let mut cumulative = 0.0;
        for &x in sorted {
            let cdf_left = cdf_right;
            cumulative += 1.0 / n_f;
            cdf_right = dist.cdf(cumulative);
            estimate += (cdf_right - cdf_left) * x;
        }
        Ok(estimate)
    }

    fn name(&self) -> &'static str {
        "harrell-davis"
    }
}
