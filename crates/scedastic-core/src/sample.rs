//! Paired predictor/response samples

use crate::error::{Error, Result};

/// A validated (predictor, response) sample
///
/// Construction checks the invariants every downstream routine relies on:
/// equal lengths, at least [`PairedSample::MIN_LEN`] observations, and
/// finite values throughout.
#[derive(Debug, Clone, PartialEq)]
pub struct PairedSample {
    predictor: Vec<f64>,
    response: Vec<f64>,
}

impl PairedSample {
    /// Minimum number of observations
    pub const MIN_LEN: usize = 2;

    /// Validate and copy a paired sample from caller-supplied slices
    pub fn new(predictor: &[f64], response: &[f64]) -> Result<Self> {
        if predictor.len() != response.len() {
            return Err(Error::size_mismatch(
                predictor.len(),
                response.len(),
                "paired sample",
            ));
        }
        if predictor.len() < Self::MIN_LEN {
            return Err(Error::InvalidInput(format!(
                "paired sample needs at least {} observations, got {}",
                Self::MIN_LEN,
                predictor.len()
            )));
        }
        if predictor.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("predictor"));
        }
        if response.iter().any(|y| !y.is_finite()) {
            return Err(Error::non_finite("response"));
        }

        Ok(Self {
            predictor: predictor.to_vec(),
            response: response.to_vec(),
        })
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.predictor.len()
    }

    /// Always false for a validated sample; provided for slice-like APIs
    pub fn is_empty(&self) -> bool {
        self.predictor.is_empty()
    }

    /// Predictor values in input order
    pub fn predictor(&self) -> &[f64] {
        &self.predictor
    }

    /// Response values in input order
    pub fn response(&self) -> &[f64] {
        &self.response
    }

    /// Pairs sorted by predictor ascending; ties keep input order
    pub fn sorted_by_predictor(&self) -> (Vec<f64>, Vec<f64>) {
        let mut order: Vec<usize> = (0..self.len()).collect();
        order.sort_by(|&a, &b| {
            self.predictor[a]
                .partial_cmp(&self.predictor[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let xs = order.iter().map(|&i| self.predictor[i]).collect();
        let ys = order.iter().map(|&i| self.response[i]).collect();
        (xs, ys)
    }
}
