use binlegend_common::color::BLACK;
use binlegend_common::value::ScalarOrArray;
use binlegend_scales::formatter::TickFormatter;
use binlegend_scales::linear::LinearScale;
use binlegend_scenegraph::marks::group::SceneGroup;
use binlegend_scenegraph::marks::rule::SceneRuleMark;
use binlegend_scenegraph::marks::text::{SceneTextMark, TextAlign, TextBaseline};
use serde::{Deserialize, Serialize};

const TICK_LENGTH: f32 = 5.0;
const TEXT_MARGIN: f32 = 3.0;
const TICK_FONT_SIZE: f32 = 10.0;

/// Screen edge of the bar the axis is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AxisPlacement {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    /// Data-space value
    pub value: f32,
    /// Position along the axis in region coordinates
    pub position: f32,
    pub label: String,
}

/// Tick axis attached to a legend bar.
///
/// Tick positions are along the axis direction in region coordinates; the
/// `translate` offset moves the axis line next to the bar on the other axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    pub placement: AxisPlacement,
    pub ticks: Vec<AxisTick>,
    pub translate: [f32; 2],
    /// Pixel interval of the axis line
    pub range: (f32, f32),
}

impl AxisSpec {
    /// One tick per value, with positions from `scale` and labels from `formatter`
    pub fn from_values(
        values: &[f32],
        scale: &LinearScale,
        placement: AxisPlacement,
        translate: [f32; 2],
        formatter: &TickFormatter,
    ) -> Self {
        let ticks = values
            .iter()
            .map(|value| AxisTick {
                value: *value,
                position: scale.scale_value(*value),
                label: formatter.format_value(*value),
            })
            .collect();
        Self {
            placement,
            ticks,
            translate,
            range: scale.range(),
        }
    }

    pub fn tick_values(&self) -> Vec<f32> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    pub fn tick_positions(&self) -> Vec<f32> {
        self.ticks.iter().map(|t| t.position).collect()
    }

    pub fn labels(&self) -> Vec<String> {
        self.ticks.iter().map(|t| t.label.clone()).collect()
    }
}

/// Build the axis line, tick rules and tick labels for an axis
pub fn make_axis_marks(axis: &AxisSpec) -> SceneGroup {
    let positions = axis.tick_positions();
    let len = positions.len() as u32;
    let (start, end) = (
        f32::min(axis.range.0, axis.range.1),
        f32::max(axis.range.0, axis.range.1),
    );
    let along = ScalarOrArray::new_array(positions);

    let (line, ticks, labels) = match axis.placement {
        AxisPlacement::Bottom => (
            SceneRuleMark {
                name: "axis_line".to_string(),
                x: start.into(),
                x2: end.into(),
                ..Default::default()
            },
            SceneRuleMark {
                name: "ticks".to_string(),
                len,
                x: along.clone(),
                x2: along.clone(),
                y: 0.0.into(),
                y2: TICK_LENGTH.into(),
                ..Default::default()
            },
            SceneTextMark {
                name: "tick_labels".to_string(),
                len,
                text: axis.labels().into(),
                x: along,
                y: (TICK_LENGTH + TEXT_MARGIN).into(),
                align: TextAlign::Center.into(),
                baseline: TextBaseline::Top.into(),
                font_size: TICK_FONT_SIZE.into(),
                color: BLACK.into(),
                ..Default::default()
            },
        ),
        AxisPlacement::Left => (
            SceneRuleMark {
                name: "axis_line".to_string(),
                y: start.into(),
                y2: end.into(),
                ..Default::default()
            },
            SceneRuleMark {
                name: "ticks".to_string(),
                len,
                y: along.clone(),
                y2: along.clone(),
                x: 0.0.into(),
                x2: (-TICK_LENGTH).into(),
                ..Default::default()
            },
            SceneTextMark {
                name: "tick_labels".to_string(),
                len,
                text: axis.labels().into(),
                x: (-TICK_LENGTH - TEXT_MARGIN).into(),
                y: along,
                align: TextAlign::Right.into(),
                baseline: TextBaseline::Middle.into(),
                font_size: TICK_FONT_SIZE.into(),
                color: BLACK.into(),
                ..Default::default()
            },
        ),
    };

    SceneGroup {
        name: "axis".to_string(),
        origin: axis.translate,
        marks: vec![line.into(), ticks.into(), labels.into()],
        zindex: Some(1),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use binlegend_scenegraph::marks::mark::SceneMark;

    fn axis(placement: AxisPlacement) -> AxisSpec {
        let scale = LinearScale::default()
            .with_domain((0.0, 100.0))
            .with_range((30.0, 270.0));
        AxisSpec::from_values(
            &[0.0, 50.0, 100.0],
            &scale,
            placement,
            [0.0, 31.0],
            &TickFormatter::default().with_suffix("%"),
        )
    }

    #[test]
    fn test_ticks_from_values() {
        let axis = axis(AxisPlacement::Bottom);
        assert_eq!(axis.tick_values(), vec![0.0, 50.0, 100.0]);
        assert_eq!(axis.tick_positions(), vec![30.0, 150.0, 270.0]);
        assert_eq!(axis.labels(), vec!["0%", "50%", "100%"]);
        assert_eq!(axis.range, (30.0, 270.0));
    }

    #[test]
    fn test_bottom_axis_marks() {
        let group = make_axis_marks(&axis(AxisPlacement::Bottom));
        assert_eq!(group.origin, [0.0, 31.0]);
        let SceneMark::Rule(line) = &group.marks[0] else {
            panic!("expected axis line");
        };
        assert_eq!(line.segments(), vec![[30.0, 0.0, 270.0, 0.0]]);

        let SceneMark::Rule(ticks) = &group.marks[1] else {
            panic!("expected tick rules");
        };
        assert_eq!(ticks.len, 3);
        assert_eq!(ticks.segments()[1], [150.0, 0.0, 150.0, TICK_LENGTH]);

        let SceneMark::Text(labels) = &group.marks[2] else {
            panic!("expected tick labels");
        };
        assert_eq!(labels.text_iter().cloned().collect::<Vec<_>>(), vec!["0%", "50%", "100%"]);
    }

    #[test]
    fn test_left_axis_marks() {
        let group = make_axis_marks(&axis(AxisPlacement::Left));
        let SceneMark::Rule(ticks) = &group.marks[1] else {
            panic!("expected tick rules");
        };
        assert_eq!(ticks.segments()[0], [0.0, 30.0, -TICK_LENGTH, 30.0]);

        let SceneMark::Text(labels) = &group.marks[2] else {
            panic!("expected tick labels");
        };
        assert_eq!(labels.align_iter().next(), Some(&TextAlign::Right));
        assert_eq!(labels.x_iter().next(), Some(&(-TICK_LENGTH - TEXT_MARGIN)));
    }
}
