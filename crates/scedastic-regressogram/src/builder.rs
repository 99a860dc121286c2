//! Regressogram assembly

use crate::strategies::BinningStrategy;
use crate::types::{DispersionBin, Regressogram};
use scedastic_core::{PairedSample, QuantileEstimator, Result};
use scedastic_spread::DispersionEstimator;
use tracing::{debug, trace};

/// Builds dispersion regressograms with a fixed binning strategy
///
/// The quantile and dispersion estimators are provided at build time, the
/// same way histogram builders take their quantile estimator per call.
pub struct RegressogramBuilder<S: BinningStrategy> {
    strategy: S,
}

impl<S: BinningStrategy> RegressogramBuilder<S> {
    /// Create a builder for the given binning strategy
    pub fn new(strategy: S) -> Self {
        Self { strategy }
    }

    /// The binning strategy
    pub fn strategy(&self) -> &S {
        &self.strategy
    }

    /// Build a regressogram of the response's dispersion over predictor bins
    ///
    /// Validates the sample, stably sorts pairs by predictor, cuts edges
    /// with the strategy, assigns each pair to the half-open bin containing
    /// its predictor (the last bin is right-inclusive), and computes the
    /// dispersion statistic per non-empty bin. Empty bins are dropped.
    pub fn build<Q, D>(
        &self,
        predictor: &[f64],
        response: &[f64],
        dispersion: &D,
        quantile_est: &Q,
    ) -> Result<Regressogram>
    where
        Q: QuantileEstimator,
        D: DispersionEstimator<Q>,
    {
        let sample = PairedSample::new(predictor, response)?;
        let (xs, ys) = sample.sorted_by_predictor();
        let edges = self.strategy.edges(&xs)?;
        let num_bins = edges.len() - 1;
        debug!(
            scheme = self.strategy.name(),
            bins = num_bins,
            n = xs.len(),
            "binning predictor"
        );

        // Forward pass over sorted predictors: each bin's members form a
        // contiguous run, so a start index and a count suffice.
        let mut starts = vec![0usize; num_bins];
        let mut counts = vec![0usize; num_bins];
        let mut bin = 0usize;
        for (i, &x) in xs.iter().enumerate() {
            if x < edges[0] || x > edges[num_bins] {
                // Outside the edge span; happens with partial grids
                continue;
            }
            while bin < num_bins - 1 && x >= edges[bin + 1] {
                bin += 1;
            }
            if counts[bin] == 0 {
                starts[bin] = i;
            }
            counts[bin] += 1;
        }

        let mut bins = Vec::with_capacity(num_bins);
        for b in 0..num_bins {
            if counts[b] == 0 {
                trace!(bin = b, left = edges[b], right = edges[b + 1], "dropping empty bin");
                continue;
            }
            let members = &ys[starts[b]..starts[b] + counts[b]];
            let mut sorted_members = members.to_vec();
            sorted_members.sort_by(|x, y| x.partial_cmp(y).unwrap_or(std::cmp::Ordering::Equal));
            let stat = dispersion.estimate_sorted(&sorted_members, quantile_est)?;
            bins.push(DispersionBin::new(edges[b], edges[b + 1], counts[b], stat));
        }

        Ok(Regressogram::new(bins, xs.len(), xs[0], xs[xs.len() - 1]))
    }
}
