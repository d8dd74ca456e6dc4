use super::mark::SceneMark;
use binlegend_common::color::{RgbaColor, BLACK};
use binlegend_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

/// Vectorized line segment mark from (x, y) to (x2, y2)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRuleMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub x2: ScalarOrArray<f32>,
    pub y2: ScalarOrArray<f32>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

impl SceneRuleMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }
    pub fn x2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x2.as_iter(self.len as usize)
    }
    pub fn y2_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y2.as_iter(self.len as usize)
    }
    pub fn stroke_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.stroke.as_iter(self.len as usize)
    }
    pub fn stroke_width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.stroke_width.as_iter(self.len as usize)
    }

    /// Segments as `[x, y, x2, y2]`
    pub fn segments(&self) -> Vec<[f32; 4]> {
        izip!(self.x_iter(), self.y_iter(), self.x2_iter(), self.y2_iter())
            .map(|(x, y, x2, y2)| [*x, *y, *x2, *y2])
            .collect()
    }
}

impl Default for SceneRuleMark {
    fn default() -> Self {
        Self {
            name: "rule_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            x2: ScalarOrArray::new_scalar(0.0),
            y2: ScalarOrArray::new_scalar(0.0),
            stroke: ScalarOrArray::new_scalar(BLACK),
            stroke_width: ScalarOrArray::new_scalar(1.0),
            zindex: None,
        }
    }
}

impl From<SceneRuleMark> for SceneMark {
    fn from(mark: SceneRuleMark) -> Self {
        SceneMark::Rule(mark)
    }
}
