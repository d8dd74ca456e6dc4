use binlegend_common::color::RgbaColor;
use palette::{Hsla, IntoColor, Laba, Mix, Srgba};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::error::ScaleError;

/// Color space used to build a discrete ramp between anchor colors
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorSpaceKind {
    #[default]
    Srgba,
    Hsla,
    Laba,
}

/// A trait for color spaces that can be mixed by palette
pub trait ColorSpace:
    Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static
{
}

impl<T: Mix<Scalar = f32> + Copy + IntoColor<Srgba> + Debug + Send + Sync + 'static> ColorSpace
    for T
{
}

/// Sample `n` evenly spaced colors along the piecewise ramp through `anchors`.
///
/// Used to derive one flat color per bin for binned scales.
pub fn sample_ramp(
    anchors: &[RgbaColor],
    n: usize,
    space: ColorSpaceKind,
) -> Result<Vec<RgbaColor>, ScaleError> {
    if anchors.is_empty() {
        return Err(ScaleError::EmptyRange);
    }
    let positions: Vec<f32> = match n {
        0 => vec![],
        1 => vec![0.5],
        n => (0..n).map(|i| i as f32 / (n - 1) as f32).collect(),
    };
    let to_srgba = |c: &RgbaColor| Srgba::from_components((c[0], c[1], c[2], c[3]));

    let colors = match space {
        ColorSpaceKind::Srgba => {
            let colors: Vec<Srgba> = anchors.iter().map(to_srgba).collect();
            interpolate_color(&colors, &positions)
        }
        ColorSpaceKind::Hsla => {
            let colors: Vec<Hsla> = anchors.iter().map(|c| to_srgba(c).into_color()).collect();
            interpolate_color(&colors, &positions)
        }
        ColorSpaceKind::Laba => {
            let colors: Vec<Laba> = anchors.iter().map(|c| to_srgba(c).into_color()).collect();
            interpolate_color(&colors, &positions)
        }
    };
    Ok(colors)
}

/// Generic helper function to interpolate colors using palette's `Mix` trait
fn interpolate_color<C: ColorSpace>(colors: &[C], values: &[f32]) -> Vec<RgbaColor> {
    let scale_factor = (colors.len() - 1) as f32;
    values
        .iter()
        .map(|v| {
            let continuous_index = (v * scale_factor).clamp(0.0, scale_factor);
            let lower_index = continuous_index.floor() as usize;
            let upper_index = continuous_index.ceil() as usize;

            let srgba_color: Srgba = if lower_index == upper_index {
                colors[lower_index].into_color()
            } else {
                let t = continuous_index - lower_index as f32;
                colors[lower_index].mix(colors[upper_index], t).into_color()
            };
            let (r, g, b, a) = srgba_color.into_components();
            [r, g, b, a]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::assert_approx_eq;

    #[test]
    fn test_srgba_ramp_endpoints_and_midpoint() -> Result<(), ScaleError> {
        let ramp = sample_ramp(
            &[[0.0, 0.0, 0.0, 1.0], [1.0, 1.0, 1.0, 1.0]],
            3,
            ColorSpaceKind::Srgba,
        )?;
        assert_eq!(ramp.len(), 3);
        assert_eq!(ramp[0], [0.0, 0.0, 0.0, 1.0]);
        assert_approx_eq!(f32, ramp[1][0], 0.5);
        assert_eq!(ramp[2], [1.0, 1.0, 1.0, 1.0]);
        Ok(())
    }

    #[test]
    fn test_single_sample_and_single_anchor() -> Result<(), ScaleError> {
        let ramp = sample_ramp(&[[0.2, 0.4, 0.6, 1.0]], 4, ColorSpaceKind::Laba)?;
        assert_eq!(ramp.len(), 4);
        for c in ramp {
            assert_approx_eq!(f32, c[0], 0.2, epsilon = 1e-3);
            assert_approx_eq!(f32, c[2], 0.6, epsilon = 1e-3);
        }

        let ramp = sample_ramp(
            &[[0.0, 0.0, 0.0, 1.0], [1.0, 0.0, 0.0, 1.0]],
            1,
            ColorSpaceKind::Srgba,
        )?;
        assert_approx_eq!(f32, ramp[0][0], 0.5);
        Ok(())
    }

    #[test]
    fn test_empty_anchors() {
        assert_eq!(
            sample_ramp(&[], 3, ColorSpaceKind::Hsla).unwrap_err(),
            ScaleError::EmptyRange
        );
    }
}
