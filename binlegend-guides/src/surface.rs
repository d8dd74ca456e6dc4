use binlegend_scenegraph::marks::group::SceneGroup;
use binlegend_scenegraph::marks::mark::SceneMark;
use binlegend_scenegraph::marks::rect::{RectInstance, SceneRectMark};

use crate::axis::{make_axis_marks, AxisSpec};
use crate::legend::LegendRect;

/// Drawing target for a legend.
///
/// A legend for `n` thresholds issues exactly `n + 1` [`append_rect`] calls
/// followed by one [`attach_axis`] call.
///
/// [`append_rect`]: LegendSurface::append_rect
/// [`attach_axis`]: LegendSurface::attach_axis
pub trait LegendSurface {
    fn append_rect(&mut self, rect: &LegendRect);
    fn attach_axis(&mut self, axis: &AxisSpec);
}

/// Collects legend draw calls into a scene graph
#[derive(Debug, Clone)]
pub struct SceneGraphSurface {
    bar: SceneRectMark,
    axes: Vec<SceneGroup>,
}

impl SceneGraphSurface {
    pub fn new() -> Self {
        Self {
            bar: SceneRectMark {
                name: "segments".to_string(),
                len: 0,
                ..Default::default()
            },
            axes: vec![],
        }
    }

    pub fn rect_count(&self) -> usize {
        self.bar.len as usize
    }

    pub fn axis_count(&self) -> usize {
        self.axes.len()
    }

    /// Group with a `colorbar` child holding the segments followed by the axes
    pub fn into_scene_group(self) -> SceneGroup {
        let colorbar = SceneGroup {
            name: "colorbar".to_string(),
            marks: vec![self.bar.into()],
            ..Default::default()
        };
        let mut marks: Vec<SceneMark> = vec![colorbar.into()];
        marks.extend(self.axes.into_iter().map(Into::into));
        SceneGroup {
            name: "legend".to_string(),
            marks,
            ..Default::default()
        }
    }
}

impl Default for SceneGraphSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl LegendSurface for SceneGraphSurface {
    fn append_rect(&mut self, rect: &LegendRect) {
        self.bar.push(RectInstance {
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            fill: rect.fill,
        });
    }

    fn attach_axis(&mut self, axis: &AxisSpec) {
        self.axes.push(make_axis_marks(axis));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::axis::AxisPlacement;

    #[test]
    fn test_scene_graph_structure() {
        let mut surface = SceneGraphSurface::new();
        surface.append_rect(&LegendRect {
            x: 0.0,
            y: 0.0,
            width: 10.0,
            height: 5.0,
            fill: [1.0, 0.0, 0.0, 1.0],
        });
        surface.attach_axis(&AxisSpec {
            placement: AxisPlacement::Bottom,
            ticks: vec![],
            translate: [0.0, 10.0],
            range: (0.0, 10.0),
        });
        assert_eq!(surface.rect_count(), 1);
        assert_eq!(surface.axis_count(), 1);

        let group = surface.into_scene_group();
        let colorbar = group.find_group("colorbar").unwrap();
        let SceneMark::Rect(bar) = &colorbar.marks[0] else {
            panic!("expected rect mark");
        };
        assert_eq!(bar.instances()[0].width, 10.0);
        assert_eq!(group.find_group("axis").map(|g| g.origin), Some([0.0, 10.0]));
    }
}
