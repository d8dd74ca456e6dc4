use binlegend_common::color::{parse_css_color, RgbaColor, TRANSPARENT};
use serde::{Deserialize, Serialize};

use crate::binned::BinnedColorScale;
use crate::color_interpolator::{sample_ramp, ColorSpaceKind};
use crate::error::ScaleError;
use crate::quantile::{QuantileScale, QuantileScaleConfig};
use crate::quantize::QuantizeScale;
use crate::threshold::ThresholdScale;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScaleKind {
    Threshold,
    Quantile,
    Quantize,
    Linear,
    Ordinal,
}

/// Declarative description of a color scale, e.g. loaded from JSON.
///
/// Only the binned kinds (`threshold`, `quantile`, `quantize`) can drive a
/// legend bar. When the number of `range` colors differs from the number of
/// bins, the bin colors are sampled along a ramp through the `range` colors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColorScaleSpec {
    pub kind: ScaleKind,
    #[serde(default)]
    pub domain: Option<(f32, f32)>,
    pub range: Vec<String>,
    #[serde(default)]
    pub thresholds: Option<Vec<f32>>,
    #[serde(default)]
    pub sample: Option<Vec<f32>>,
    #[serde(default)]
    pub bins: Option<usize>,
    #[serde(default)]
    pub color_space: ColorSpaceKind,
}

impl ColorScaleSpec {
    pub fn to_binned_scale(&self) -> Result<BinnedColorScale, ScaleError> {
        match self.kind {
            ScaleKind::Threshold => {
                let domain = self.domain.ok_or(ScaleError::MissingField("domain"))?;
                let thresholds = self
                    .thresholds
                    .clone()
                    .ok_or(ScaleError::MissingField("thresholds"))?;
                let colors = self.bin_colors(thresholds.len() + 1)?;
                let scale = ThresholdScale::try_new(colors, thresholds, TRANSPARENT)?;
                Ok(BinnedColorScale::new(domain, scale))
            }
            ScaleKind::Quantile => {
                let sample = self.sample.clone().ok_or(ScaleError::MissingField("sample"))?;
                let colors = self.bin_colors(self.bins.unwrap_or(self.range.len()))?;
                let scale =
                    QuantileScale::try_new(colors, TRANSPARENT, &QuantileScaleConfig { domain: sample })?;
                BinnedColorScale::from_quantile(scale)
            }
            ScaleKind::Quantize => {
                let domain = self.domain.ok_or(ScaleError::MissingField("domain"))?;
                let colors = self.bin_colors(self.bins.unwrap_or(self.range.len()))?;
                let scale = QuantizeScale::try_new(domain, colors, TRANSPARENT)?;
                BinnedColorScale::from_quantize(&scale)
            }
            ScaleKind::Linear | ScaleKind::Ordinal => {
                Err(ScaleError::UnsupportedScaleKind(self.kind.to_string()))
            }
        }
    }

    fn bin_colors(&self, bins: usize) -> Result<Vec<RgbaColor>, ScaleError> {
        let anchors = self
            .range
            .iter()
            .map(|s| parse_css_color(s))
            .collect::<Result<Vec<_>, _>>()?;
        if anchors.len() == bins {
            Ok(anchors)
        } else {
            sample_ramp(&anchors, bins, self.color_space)
        }
    }
}
