//! Relative dispersion: MAD over median
//!
//! The regressogram statistic. Dividing the standardized MAD by the
//! (unscaled) median makes the spread of one predictor bin comparable to
//! another's even when their response levels differ. A bin whose median is
//! exactly zero has no defined relative dispersion; the estimate is then
//! `f64::NAN` so one bad bin cannot abort a whole regressogram.

use crate::mad::Mad;
use crate::traits::{DispersionEstimator, DispersionEstimatorProperties};
use scedastic_core::{QuantileEstimator, Result};

/// Relative MAD estimator: `StandardizedMad(x) / median(x)`
#[derive(Debug, Clone)]
pub struct RelativeMad {
    mad: Mad,
}

impl RelativeMad {
    /// Relative dispersion with the standardized MAD numerator
    pub fn new() -> Self {
        Self {
            mad: Mad::standardized(),
        }
    }

    /// Relative dispersion with a custom MAD numerator
    pub fn with_mad(mad: Mad) -> Self {
        Self { mad }
    }
}

impl Default for RelativeMad {
    fn default() -> Self {
        Self::new()
    }
}

impl DispersionEstimatorProperties for RelativeMad {
    fn name(&self) -> &str {
        "Relative MAD"
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl<Q: QuantileEstimator> DispersionEstimator<Q> for RelativeMad {
    fn estimate_sorted(&self, sorted: &[f64], quantile_est: &Q) -> Result<f64> {
        let center = quantile_est.median_sorted(sorted)?;
        if center == 0.0 {
            // Undefined ratio, reported as a non-finite marker
            return Ok(f64::NAN);
        }
        let scale = self.mad.estimate_sorted(sorted, quantile_est)?;
        Ok(scale / center)
    }
}
