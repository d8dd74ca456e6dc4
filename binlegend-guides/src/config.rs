use binlegend_scales::formatter::TickFormatter;
use serde::{Deserialize, Serialize};

use crate::error::LegendError;
use crate::orientation::LegendOrientation;

/// Insets of the color bar from the edges of the drawing region.
///
/// `near`/`far` are measured along the primary axis (left/right for a
/// horizontal bar, top/bottom for a vertical one). `secondary_near` and
/// `secondary_far` trim the bar thickness (top/bottom for horizontal,
/// left/right for vertical).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendInsets {
    pub near: f32,
    pub far: f32,
    pub secondary_near: f32,
    pub secondary_far: f32,
}

impl LegendInsets {
    pub fn zero() -> Self {
        Self {
            near: 0.0,
            far: 0.0,
            secondary_near: 0.0,
            secondary_far: 0.0,
        }
    }

    pub fn primary(&self) -> f32 {
        self.near + self.far
    }

    pub fn secondary(&self) -> f32 {
        self.secondary_near + self.secondary_far
    }
}

impl Default for LegendInsets {
    fn default() -> Self {
        Self {
            near: 30.0,
            far: 30.0,
            secondary_near: 2.0,
            secondary_far: 24.0,
        }
    }
}

/// Where the domain minimum sits on a vertical bar
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalDirection {
    #[default]
    MinAtTop,
    MinAtBottom,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub insets: LegendInsets,
    /// Gap between the bar and its axis
    pub axis_offset: f32,
    /// Symmetric padding of the axis domain as a fraction of its width
    pub extend_percent: f32,
    pub vertical_direction: VerticalDirection,
    pub tick_format: TickFormatter,
}

impl LegendConfig {
    /// Bar inset 30px from the sides, axis below it
    pub fn horizontal() -> Self {
        Self::default()
    }

    /// Bar standing 40px in from the left with the axis to its left
    pub fn vertical() -> Self {
        Self {
            insets: LegendInsets {
                near: 10.0,
                far: 5.0,
                secondary_near: 40.0,
                secondary_far: 0.0,
            },
            ..Self::default()
        }
    }

    pub fn for_orientation(orientation: LegendOrientation) -> Self {
        match orientation {
            LegendOrientation::Horizontal => Self::horizontal(),
            LegendOrientation::Vertical => Self::vertical(),
        }
    }

    pub fn with_insets(mut self, insets: LegendInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn with_extend_percent(mut self, extend_percent: f32) -> Self {
        self.extend_percent = extend_percent;
        self
    }

    pub fn with_vertical_direction(mut self, direction: VerticalDirection) -> Self {
        self.vertical_direction = direction;
        self
    }

    pub fn with_tick_format(mut self, tick_format: TickFormatter) -> Self {
        self.tick_format = tick_format;
        self
    }

    pub fn validate(&self) -> Result<(), LegendError> {
        let insets = [
            ("near", self.insets.near),
            ("far", self.insets.far),
            ("secondary_near", self.insets.secondary_near),
            ("secondary_far", self.insets.secondary_far),
            ("axis_offset", self.axis_offset),
            ("extend_percent", self.extend_percent),
        ];
        for (name, value) in insets {
            if !value.is_finite() || value < 0.0 {
                return Err(LegendError::InvalidConfig(format!(
                    "{name} must be a finite, non-negative number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            insets: LegendInsets::default(),
            axis_offset: 5.0,
            extend_percent: 0.0,
            vertical_direction: VerticalDirection::default(),
            tick_format: TickFormatter::default(),
        }
    }
}
