//! Geometry strategy for horizontal and vertical legend bars.
//!
//! The legend algorithm works in (primary, secondary) coordinates. This
//! module is the only place that knows how those map to (x, y).
use serde::{Deserialize, Serialize};

use crate::axis::AxisPlacement;
use crate::config::{LegendConfig, VerticalDirection};
use crate::legend::DrawRegion;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

impl LegendOrientation {
    /// Region size along the direction the segments are laid out
    pub fn primary_extent(&self, region: &DrawRegion) -> f32 {
        match self {
            LegendOrientation::Horizontal => region.width,
            LegendOrientation::Vertical => region.height,
        }
    }

    /// Region size across the bar
    pub fn secondary_extent(&self, region: &DrawRegion) -> f32 {
        match self {
            LegendOrientation::Horizontal => region.height,
            LegendOrientation::Vertical => region.width,
        }
    }

    /// Pixel interval the domain `[min, max]` maps onto
    pub fn primary_range(&self, region: &DrawRegion, config: &LegendConfig) -> (f32, f32) {
        let start = config.insets.near;
        let end = self.primary_extent(region) - config.insets.far;
        match (self, config.vertical_direction) {
            (LegendOrientation::Vertical, VerticalDirection::MinAtBottom) => (end, start),
            _ => (start, end),
        }
    }

    /// `[x, y, width, height]` for a span along the primary axis
    pub fn rect(
        &self,
        primary: (f32, f32),
        secondary_start: f32,
        thickness: f32,
    ) -> [f32; 4] {
        let (p0, p1) = (primary.0.min(primary.1), primary.0.max(primary.1));
        match self {
            LegendOrientation::Horizontal => [p0, secondary_start, p1 - p0, thickness],
            LegendOrientation::Vertical => [secondary_start, p0, thickness, p1 - p0],
        }
    }

    pub fn axis_placement(&self) -> AxisPlacement {
        match self {
            LegendOrientation::Horizontal => AxisPlacement::Bottom,
            LegendOrientation::Vertical => AxisPlacement::Left,
        }
    }

    /// Axis origin in region coordinates, `axis_offset` away from the bar
    pub fn axis_translate(&self, config: &LegendConfig, thickness: f32) -> [f32; 2] {
        match self {
            LegendOrientation::Horizontal => [
                0.0,
                config.insets.secondary_near + thickness + config.axis_offset,
            ],
            LegendOrientation::Vertical => {
                [config.insets.secondary_near - config.axis_offset, 0.0]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LegendInsets;

    #[test]
    fn test_extents_swap() {
        let region = DrawRegion::new(300.0, 50.0);
        assert_eq!(LegendOrientation::Horizontal.primary_extent(&region), 300.0);
        assert_eq!(LegendOrientation::Vertical.primary_extent(&region), 50.0);
        assert_eq!(LegendOrientation::Vertical.secondary_extent(&region), 300.0);
    }

    #[test]
    fn test_primary_range_direction() {
        let region = DrawRegion::new(100.0, 200.0);
        let config = LegendConfig::vertical();
        assert_eq!(
            LegendOrientation::Vertical.primary_range(&region, &config),
            (10.0, 195.0)
        );

        let config = config.with_vertical_direction(VerticalDirection::MinAtBottom);
        assert_eq!(
            LegendOrientation::Vertical.primary_range(&region, &config),
            (195.0, 10.0)
        );
        // Direction only applies to vertical bars
        let config = config.with_insets(LegendInsets::zero());
        assert_eq!(
            LegendOrientation::Horizontal.primary_range(&region, &config),
            (0.0, 100.0)
        );
    }

    #[test]
    fn test_rect_normalizes_reversed_span() {
        assert_eq!(
            LegendOrientation::Vertical.rect((50.0, 20.0), 40.0, 10.0),
            [40.0, 20.0, 10.0, 30.0]
        );
        assert_eq!(
            LegendOrientation::Horizontal.rect((20.0, 50.0), 2.0, 10.0),
            [20.0, 2.0, 30.0, 10.0]
        );
    }

    #[test]
    fn test_axis_translate() {
        let config = LegendConfig::horizontal();
        assert_eq!(
            LegendOrientation::Horizontal.axis_translate(&config, 24.0),
            [0.0, 31.0]
        );
        let config = LegendConfig::vertical();
        assert_eq!(
            LegendOrientation::Vertical.axis_translate(&config, 60.0),
            [35.0, 0.0]
        );
    }
}
