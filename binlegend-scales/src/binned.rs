use binlegend_common::color::{RgbaColor, TRANSPARENT};

use crate::error::ScaleError;
use crate::quantile::QuantileScale;
use crate::quantize::QuantizeScale;
use crate::threshold::ThresholdScale;

/// Source of the interior bin boundaries of a binned color scale.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundaryProvider {
    /// Explicit thresholds (threshold and quantize scales)
    ThresholdBased(ThresholdScale<RgbaColor>),
    /// Thresholds computed from a sample population
    QuantileBased(QuantileScale<RgbaColor>),
}

impl BoundaryProvider {
    /// Interior boundaries in ascending order
    pub fn boundaries(&self) -> Vec<f32> {
        match self {
            BoundaryProvider::ThresholdBased(scale) => scale.thresholds().to_vec(),
            BoundaryProvider::QuantileBased(scale) => scale.quantiles().to_vec(),
        }
    }

    pub fn color(&self, value: f32) -> RgbaColor {
        match self {
            BoundaryProvider::ThresholdBased(scale) => scale.scale_value(value),
            BoundaryProvider::QuantileBased(scale) => scale.scale_value(value),
        }
    }
}

impl From<ThresholdScale<RgbaColor>> for BoundaryProvider {
    fn from(scale: ThresholdScale<RgbaColor>) -> Self {
        BoundaryProvider::ThresholdBased(scale)
    }
}

impl From<QuantileScale<RgbaColor>> for BoundaryProvider {
    fn from(scale: QuantileScale<RgbaColor>) -> Self {
        BoundaryProvider::QuantileBased(scale)
    }
}

/// A binned color scale: a domain extent partitioned into flat-colored bins.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedColorScale {
    extent: (f32, f32),
    provider: BoundaryProvider,
}

impl BinnedColorScale {
    pub fn new(extent: (f32, f32), provider: impl Into<BoundaryProvider>) -> Self {
        Self {
            extent,
            provider: provider.into(),
        }
    }

    /// Binned scale over the extent of the quantile sample population
    pub fn from_quantile(scale: QuantileScale<RgbaColor>) -> Result<Self, ScaleError> {
        let extent = scale.extent().ok_or(ScaleError::EmptyDomain)?;
        Ok(Self::new(extent, scale))
    }

    /// Binned scale over the domain of a quantize scale
    pub fn from_quantize(scale: &QuantizeScale<RgbaColor>) -> Result<Self, ScaleError> {
        Ok(Self::new(scale.domain(), scale.to_threshold_scale()?))
    }

    /// Convenience constructor from thresholds and one color per bin
    pub fn from_thresholds(
        extent: (f32, f32),
        thresholds: Vec<f32>,
        colors: Vec<RgbaColor>,
    ) -> Result<Self, ScaleError> {
        let scale = ThresholdScale::try_new(colors, thresholds, TRANSPARENT)?;
        Ok(Self::new(extent, scale))
    }

    pub fn extent(&self) -> (f32, f32) {
        self.extent
    }

    pub fn provider(&self) -> &BoundaryProvider {
        &self.provider
    }

    pub fn thresholds(&self) -> Vec<f32> {
        self.provider.boundaries()
    }

    /// Extent min, interior thresholds and extent max
    pub fn boundaries(&self) -> Vec<f32> {
        let thresholds = self.provider.boundaries();
        let mut boundaries = Vec::with_capacity(thresholds.len() + 2);
        boundaries.push(self.extent.0);
        boundaries.extend(thresholds);
        boundaries.push(self.extent.1);
        boundaries
    }

    pub fn color(&self, value: f32) -> RgbaColor {
        self.provider.color(value)
    }

    /// Check that the boundaries form a strictly increasing sequence inside a
    /// finite, non-empty extent.
    pub fn validate(&self) -> Result<(), ScaleError> {
        let (min, max) = self.extent;
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleError::InvalidScale(format!(
                "domain extent [{min}, {max}] is not finite"
            )));
        }
        if min >= max {
            return Err(ScaleError::InvalidScale(format!(
                "domain extent [{min}, {max}] is empty"
            )));
        }
        if !(max - min).is_finite() {
            return Err(ScaleError::InvalidScale(format!(
                "width of domain extent [{min}, {max}] overflows"
            )));
        }

        let thresholds = self.provider.boundaries();
        if let Some(t) = thresholds.iter().find(|t| !(min < **t && **t < max)) {
            return Err(ScaleError::InvalidScale(format!(
                "threshold {t} lies outside the open domain ({min}, {max})"
            )));
        }
        if !thresholds.windows(2).all(|w| w[0] < w[1]) {
            return Err(ScaleError::InvalidScale(format!(
                "thresholds are not strictly increasing: {thresholds:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quantile::QuantileScaleConfig;

    const RED: RgbaColor = [1.0, 0.0, 0.0, 1.0];
    const GREEN: RgbaColor = [0.0, 1.0, 0.0, 1.0];
    const BLUE: RgbaColor = [0.0, 0.0, 1.0, 1.0];

    #[test]
    fn test_threshold_based_boundaries() -> Result<(), ScaleError> {
        let scale = BinnedColorScale::from_thresholds((0.0, 100.0), vec![30.0, 60.0], vec![RED, GREEN, BLUE])?;
        assert_eq!(scale.boundaries(), vec![0.0, 30.0, 60.0, 100.0]);
        assert_eq!(scale.color(45.0), GREEN);
        scale.validate()
    }

    #[test]
    fn test_quantile_based_uses_sample_extent() -> Result<(), ScaleError> {
        let quantile = QuantileScale::try_new(
            vec![RED, BLUE],
            TRANSPARENT,
            &QuantileScaleConfig {
                domain: vec![4.0, 1.0, 3.0, 2.0],
            },
        )?;
        let scale = BinnedColorScale::from_quantile(quantile)?;
        assert_eq!(scale.extent(), (1.0, 4.0));
        assert_eq!(scale.thresholds(), vec![3.0]);
        assert_eq!(scale.color(1.5), RED);
        scale.validate()
    }

    #[test]
    fn test_quantize_based() -> Result<(), ScaleError> {
        let quantize = QuantizeScale::try_new((0.0, 40.0), vec![RED, GREEN, BLUE, RED], TRANSPARENT)?;
        let scale = BinnedColorScale::from_quantize(&quantize)?;
        assert!(matches!(scale.provider(), BoundaryProvider::ThresholdBased(_)));
        assert_eq!(scale.boundaries(), vec![0.0, 10.0, 20.0, 30.0, 40.0]);
        Ok(())
    }

    #[test]
    fn test_validate_rejects_bad_scales() -> Result<(), ScaleError> {
        // Duplicate thresholds
        let scale = BinnedColorScale::from_thresholds((0.0, 100.0), vec![25.0, 25.0], vec![RED, GREEN, BLUE])?;
        assert!(matches!(scale.validate(), Err(ScaleError::InvalidScale(_))));

        // Threshold on the domain edge
        let scale = BinnedColorScale::from_thresholds((0.0, 100.0), vec![100.0], vec![RED, GREEN])?;
        assert!(matches!(scale.validate(), Err(ScaleError::InvalidScale(_))));

        // Zero-width domain
        let scale = BinnedColorScale::from_thresholds((5.0, 5.0), vec![], vec![RED])?;
        assert!(matches!(scale.validate(), Err(ScaleError::InvalidScale(_))));

        // Non-finite domain
        let scale = BinnedColorScale::from_thresholds((0.0, f32::INFINITY), vec![], vec![RED])?;
        assert!(matches!(scale.validate(), Err(ScaleError::InvalidScale(_))));

        // Finite ends whose distance is not
        let scale = BinnedColorScale::from_thresholds((-2e38, 2e38), vec![0.0], vec![RED, BLUE])?;
        assert!(matches!(scale.validate(), Err(ScaleError::InvalidScale(_))));
        Ok(())
    }
}
