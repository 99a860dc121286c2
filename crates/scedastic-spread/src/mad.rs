//! Median Absolute Deviation (MAD) estimators

use crate::traits::{DispersionEstimator, DispersionEstimatorProperties};
use scedastic_core::{Error, QuantileEstimator, Result};

/// Consistency factor making MAD comparable to the standard deviation
/// under normality
pub const MAD_CONSISTENCY_FACTOR: f64 = 1.4826;

/// Median Absolute Deviation estimator
///
/// Computes `constant * median(|x_i - median(x)|)`. The median comes from
/// whichever quantile estimator is supplied at estimation time.
#[derive(Debug, Clone)]
pub struct Mad {
    constant: f64,
}

impl Mad {
    /// Raw MAD without standardization (constant 1.0)
    pub fn raw() -> Self {
        Self { constant: 1.0 }
    }

    /// MAD scaled by the normal-consistency factor 1.4826
    pub fn standardized() -> Self {
        Self {
            constant: MAD_CONSISTENCY_FACTOR,
        }
    }

    /// MAD with a custom consistency factor
    pub fn with_factor(constant: f64) -> Result<Self> {
        if constant <= 0.0 || !constant.is_finite() {
            return Err(Error::InvalidParameter(
                "consistency factor must be positive and finite".to_string(),
            ));
        }
        Ok(Self { constant })
    }

    /// The consistency factor
    pub fn constant(&self) -> f64 {
        self.constant
    }
}

impl DispersionEstimatorProperties for Mad {
    fn name(&self) -> &str {
        if self.constant == 1.0 {
            "MAD"
        } else {
            "Standardized MAD"
        }
    }

    fn is_robust(&self) -> bool {
        true
    }

    fn breakdown_point(&self) -> f64 {
        0.5
    }
}

impl<Q: QuantileEstimator> DispersionEstimator<Q> for Mad {
    fn estimate_sorted(&self, sorted: &[f64], quantile_est: &Q) -> Result<f64> {
        let center = quantile_est.median_sorted(sorted)?;

        let mut deviations: Vec<f64> = sorted.iter().map(|x| (x - center).abs()).collect();
        deviations.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

        let mad = quantile_est.median_sorted(&deviations)?;
        Ok(self.constant * mad)
    }
}
