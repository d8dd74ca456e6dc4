use crate::error::ScaleError;
use std::fmt::Debug;

/// Maps values to discrete outputs through explicit ascending cut points.
///
/// `n` thresholds split the number line into `n + 1` bins. A value equal to a
/// threshold belongs to the bin above it.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    thresholds: Vec<f32>,
    range: Vec<R>,
    default: R,
}

impl<R> ThresholdScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(range: Vec<R>, thresholds: Vec<f32>, default: R) -> Result<Self, ScaleError> {
        if !thresholds.windows(2).all(|w| w[0] <= w[1]) {
            return Err(ScaleError::ThresholdsNotAscending(thresholds));
        }

        if range.len() != thresholds.len() + 1 {
            return Err(ScaleError::ThresholdDomainMismatch {
                domain_len: thresholds.len(),
                range_len: range.len(),
            });
        }
        Ok(Self {
            thresholds,
            range,
            default,
        })
    }

    /// Returns a reference to the threshold values
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    /// Returns the value used for non-finite input
    pub fn default_value(&self) -> &R {
        &self.default
    }

    pub fn scale_value(&self, x: f32) -> R {
        if x.is_finite() {
            let idx = self.thresholds.partition_point(|t| *t <= x);
            self.range[idx].clone()
        } else {
            self.default.clone()
        }
    }

    pub fn scale(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|x| self.scale_value(*x)).collect()
    }
}
