use crate::error::ScaleError;
use crate::threshold::ThresholdScale;
use std::fmt::Debug;

/// Splits a continuous `(min, max)` domain into `range.len()` equal-width bins.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantizeScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    domain: (f32, f32),
    range: Vec<R>,
    default: R,
    thresholds: Vec<f32>,
}

impl<R> QuantizeScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(domain: (f32, f32), range: Vec<R>, default: R) -> Result<Self, ScaleError> {
        if range.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        let mut this = Self {
            domain,
            range,
            default,
            thresholds: vec![],
        };
        this.update_thresholds();
        Ok(this)
    }

    pub fn domain(&self) -> (f32, f32) {
        self.domain
    }

    /// Interior bin edges
    pub fn thresholds(&self) -> &[f32] {
        &self.thresholds
    }

    fn update_thresholds(&mut self) {
        let bins = self.range.len();
        let (min, max) = self.domain;
        self.thresholds = (1..bins)
            .map(|i| {
                let t = i as f32 / bins as f32;
                min * (1.0 - t) + max * t
            })
            .collect();
    }

    pub fn scale_value(&self, x: f32) -> R {
        if !x.is_finite() {
            return self.default.clone();
        }
        let idx = self.thresholds.partition_point(|t| *t <= x);
        self.range[idx].clone()
    }

    pub fn scale(&self, values: &[f32]) -> Vec<R> {
        values.iter().map(|x| self.scale_value(*x)).collect()
    }

    /// Equivalent threshold scale over the uniform boundaries
    pub fn to_threshold_scale(&self) -> Result<ThresholdScale<R>, ScaleError> {
        ThresholdScale::try_new(
            self.range.clone(),
            self.thresholds.clone(),
            self.default.clone(),
        )
    }
}
