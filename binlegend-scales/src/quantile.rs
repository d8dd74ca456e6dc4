use crate::error::ScaleError;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

#[derive(Debug, Clone)]
pub struct QuantileScaleConfig {
    /// Sample values, in any order
    pub domain: Vec<f32>,
}

impl Default for QuantileScaleConfig {
    fn default() -> Self {
        Self {
            domain: vec![0.0, 1.0],
        }
    }
}

/// Bins a sample population into `range.len()` groups of (roughly) equal count.
///
/// The `i`-th of the `range.len() - 1` thresholds is the sorted sample at
/// index `floor(len * i / n)`. Bin edges therefore always fall on sample
/// values, and a value equal to an edge belongs to the upper bin.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantileScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    domain: Vec<f32>,
    range: Vec<R>,
    default: R,
    thresholds: Vec<f32>,
}

impl<R> QuantileScale<R>
where
    R: Clone + Debug + Sync + 'static,
{
    pub fn try_new(
        range: Vec<R>,
        default: R,
        config: &QuantileScaleConfig,
    ) -> Result<Self, ScaleError> {
        if range.is_empty() {
            return Err(ScaleError::EmptyRange);
        }
        let mut this = Self {
            domain: vec![],
            range,
            default,
            thresholds: vec![],
        };
        this = this.with_domain(config.domain.clone())?;
        Ok(this)
    }

    /// Sets the domain from a sample population. Non-finite samples are dropped.
    pub fn with_domain(mut self, domain: Vec<f32>) -> Result<Self, ScaleError> {
        let mut domain: Vec<f32> = domain.into_iter().filter(|v| v.is_finite()).collect();
        if domain.is_empty() {
            return Err(ScaleError::EmptyDomain);
        }
        domain.sort_by_key(|v| OrderedFloat(*v));
        self.domain = domain;
        self.update_thresholds();
        Ok(self)
    }

    /// Returns the sorted sample population
    pub fn domain(&self) -> &[f32] {
        &self.domain
    }

    /// Returns the smallest and largest sample
    pub fn extent(&self) -> Option<(f32, f32)> {
        Some((*self.domain.first()?, *self.domain.last()?))
    }

    /// Interior bin edges, ascending
    pub fn quantiles(&self) -> &[f32] {
        &self.thresholds
    }

    fn update_thresholds(&mut self) {
        let bins = self.range.len();
        let samples = &self.domain;
        self.thresholds = if bins < 2 || samples.is_empty() {
            Vec::new()
        } else {
            (1..bins).map(|i| samples[samples.len() * i / bins]).collect()
        };
    }

    pub fn scale_value(&self, x: f32) -> R {
        if self.range.len() == 1 {
            return self.range[0].clone();
        }
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

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_ties_fall_into_upper_bin() -> Result<(), ScaleError> {
        let scale = QuantileScale::try_new(
            vec!["low", "mid", "high"],
            "none",
            &QuantileScaleConfig {
                domain: vec![2.0, 2.0, 4.0, 6.0, 6.0, 6.0, 8.0, 8.0, 9.0],
            },
        )?;

        // Indices 3 and 6 of the sorted sample
        assert_approx_eq!(f32, scale.quantiles()[0], 6.0);
        assert_approx_eq!(f32, scale.quantiles()[1], 8.0);

        assert_eq!(
            scale.scale(&[5.9, 6.0, 8.0, f32::INFINITY]),
            vec!["low", "mid", "high", "none"]
        );
        Ok(())
    }

    #[test]
    fn test_unsorted_sample_and_extent() -> Result<(), ScaleError> {
        let scale = QuantileScale::try_new(
            vec![0, 1, 2, 3],
            -1,
            &QuantileScaleConfig {
                domain: vec![80.0, 10.0, f32::NAN, 40.0, 20.0, 60.0, 30.0, 70.0, 50.0],
            },
        )?;
        assert_eq!(scale.extent(), Some((10.0, 80.0)));
        assert_eq!(scale.domain(), &[10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0]);
        assert_eq!(scale.quantiles(), &[30.0, 50.0, 70.0]);
        Ok(())
    }

    #[test]
    fn test_empty_inputs() {
        let err = QuantileScale::try_new(Vec::<i32>::new(), 0, &Default::default()).unwrap_err();
        assert_eq!(err, ScaleError::EmptyRange);

        let err = QuantileScale::try_new(vec![1], 0, &QuantileScaleConfig { domain: vec![] })
            .unwrap_err();
        assert_eq!(err, ScaleError::EmptyDomain);
    }
}
