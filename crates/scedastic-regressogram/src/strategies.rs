//! Bin boundary strategies
//!
//! Two ways of cutting the predictor's range into contiguous intervals sit
//! behind one trait, so the regressogram assembly is written once.

use scedastic_core::{Error, QuantileEstimator, Result, SampleQuantile};
use tracing::trace;

/// Tolerance below which adjacent edges count as duplicates
const EDGE_EPSILON: f64 = 1e-10;

/// Sturges' rule bin count: `ceil(log2(n) + 1)`
pub fn sturges(n: usize) -> usize {
    debug_assert!(n > 0);
    ((n as f64).log2() + 1.0).ceil() as usize
}

/// The default probability grid: deciles from 0 to 1
pub fn decile_grid() -> Vec<f64> {
    (0..=10).map(|i| i as f64 / 10.0).collect()
}

/// Computes ascending, deduplicated bin edges from a sorted predictor
pub trait BinningStrategy {
    /// Bin edges for the given pre-sorted predictor values
    ///
    /// Returns at least two distinct edges; fewer is `DegenerateBinning`.
    fn edges(&self, sorted_predictor: &[f64]) -> Result<Vec<f64>>;

    /// Name of this strategy
    fn name(&self) -> &str;
}

/// Equal-width bins over the predictor's observed range
pub struct UniformBins {
    num_bins: Option<usize>,
}

impl UniformBins {
    /// Derive the bin count from Sturges' rule on the sample size
    pub fn sturges() -> Self {
        Self { num_bins: None }
    }

    /// Explicit bin count
    pub fn with_bins(num_bins: usize) -> Self {
        Self {
            num_bins: Some(num_bins.max(1)),
        }
    }
}

impl BinningStrategy for UniformBins {
    fn edges(&self, sorted_predictor: &[f64]) -> Result<Vec<f64>> {
        if sorted_predictor.is_empty() {
            return Err(Error::empty_input("uniform binning"));
        }

        let n = sorted_predictor.len();
        let min = sorted_predictor[0];
        let max = sorted_predictor[n - 1];
        if (max - min).abs() < EDGE_EPSILON {
            return Err(Error::DegenerateBinning(format!(
                "predictor range [{min}, {max}] yields fewer than 2 distinct boundaries"
            )));
        }

        let k = self.num_bins.unwrap_or_else(|| sturges(n));
        let width = (max - min) / k as f64;
        let mut edges = Vec::with_capacity(k + 1);
        for i in 0..=k {
            let edge = if i == k {
                max // exact max so the final bin can be right-inclusive
            } else {
                min + i as f64 * width
            };
            edges.push(edge);
        }
        Ok(edges)
    }

    fn name(&self) -> &str {
        "uniform"
    }
}

/// Bins with edges at predictor quantiles
///
/// Defaults to the decile grid and the empirical quantile estimator.
/// Duplicate edges from ties or degenerate quantiles collapse adjacent
/// bins.
pub struct QuantileBins<Q = SampleQuantile> {
    grid: Vec<f64>,
    estimator: Q,
}

impl QuantileBins<SampleQuantile> {
    /// Decile bins from empirical quantiles
    pub fn deciles() -> Self {
        Self {
            grid: decile_grid(),
            estimator: SampleQuantile,
        }
    }

    /// Empirical quantile bins over a custom probability grid
    pub fn with_grid(grid: Vec<f64>) -> Result<Self> {
        Self::with_estimator(SampleQuantile, grid)
    }
}

impl<Q: QuantileEstimator> QuantileBins<Q> {
    /// Quantile bins with a custom estimator and probability grid
    pub fn with_estimator(estimator: Q, grid: Vec<f64>) -> Result<Self> {
        validate_grid(&grid)?;
        Ok(Self { grid, estimator })
    }

    /// The probability grid
    pub fn grid(&self) -> &[f64] {
        &self.grid
    }
}

fn validate_grid(grid: &[f64]) -> Result<()> {
    if grid.len() < 2 {
        return Err(Error::InvalidParameter(format!(
            "probability grid needs at least 2 points, got {}",
            grid.len()
        )));
    }
    for &p in grid {
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(Error::invalid_probability(p));
        }
    }
    for pair in grid.windows(2) {
        if pair[1] <= pair[0] {
            return Err(Error::InvalidParameter(format!(
                "probability grid must be strictly ascending, got {} after {}",
                pair[1], pair[0]
            )));
        }
    }
    Ok(())
}

impl<Q: QuantileEstimator> BinningStrategy for QuantileBins<Q> {
    fn edges(&self, sorted_predictor: &[f64]) -> Result<Vec<f64>> {
        if sorted_predictor.is_empty() {
            return Err(Error::empty_input("quantile binning"));
        }

        let mut edges = self
            .estimator
            .quantiles_sorted(sorted_predictor, &self.grid)?;

        let before = edges.len();
        let span_end = edges.last().copied();
        edges.dedup_by(|a, b| (*a - *b).abs() < EDGE_EPSILON);
        if edges.len() < before {
            trace!(
                collapsed = before - edges.len(),
                "collapsed duplicate quantile edges"
            );
            // dedup keeps the first of a near-tie; the final edge must stay
            // at the span endpoint so the maximum remains assignable
            if let (Some(last), Some(span_end)) = (edges.last_mut(), span_end) {
                if span_end > *last {
                    *last = span_end;
                }
            }
        }

        if edges.len() < 2 {
            return Err(Error::DegenerateBinning(
                "quantile grid collapsed to fewer than 2 distinct boundaries".to_string(),
            ));
        }
        Ok(edges)
    }

    fn name(&self) -> &str {
        "quantile"
    }
}
