use binlegend_common::color::{RgbaColor, TRANSPARENT};
use binlegend_common::value::ScalarOrArray;
use itertools::izip;
use serde::{Deserialize, Serialize};

use super::mark::SceneMark;

/// Vectorized rectangle mark: `len` axis-aligned rectangles
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneRectMark {
    pub name: String,
    pub len: u32,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub width: ScalarOrArray<f32>,
    pub height: ScalarOrArray<f32>,
    pub fill: ScalarOrArray<RgbaColor>,
    pub stroke: ScalarOrArray<RgbaColor>,
    pub stroke_width: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

/// A single rectangle read back out of a [`SceneRectMark`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectInstance {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub fill: RgbaColor,
}

impl SceneRectMark {
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }

    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }

    pub fn width_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.width.as_iter(self.len as usize)
    }

    pub fn height_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.height.as_iter(self.len as usize)
    }

    pub fn fill_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.fill.as_iter(self.len as usize)
    }

    pub fn instances(&self) -> Vec<RectInstance> {
        izip!(
            self.x_iter(),
            self.y_iter(),
            self.width_iter(),
            self.height_iter(),
            self.fill_iter()
        )
        .map(|(x, y, width, height, fill)| RectInstance {
            x: *x,
            y: *y,
            width: *width,
            height: *height,
            fill: *fill,
        })
        .collect()
    }

    /// Append one rectangle, promoting scalar properties to arrays as needed
    pub fn push(&mut self, rect: RectInstance) {
        let len = self.len as usize;
        self.x.push(len, rect.x);
        self.y.push(len, rect.y);
        self.width.push(len, rect.width);
        self.height.push(len, rect.height);
        self.fill.push(len, rect.fill);
        self.len += 1;
    }
}

impl Default for SceneRectMark {
    fn default() -> Self {
        Self {
            name: "rect_mark".to_string(),
            len: 1,
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            width: ScalarOrArray::new_scalar(0.0),
            height: ScalarOrArray::new_scalar(0.0),
            fill: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke: ScalarOrArray::new_scalar(TRANSPARENT),
            stroke_width: ScalarOrArray::new_scalar(0.0),
            zindex: None,
        }
    }
}

impl From<SceneRectMark> for SceneMark {
    fn from(mark: SceneRectMark) -> Self {
        SceneMark::Rect(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_into_empty_mark() {
        let mut mark = SceneRectMark {
            len: 0,
            ..Default::default()
        };
        let a = RectInstance {
            x: 0.0,
            y: 2.0,
            width: 10.0,
            height: 5.0,
            fill: [1.0, 0.0, 0.0, 1.0],
        };
        let b = RectInstance {
            x: 10.0,
            fill: [0.0, 0.0, 1.0, 1.0],
            ..a
        };
        mark.push(a);
        mark.push(b);

        assert_eq!(mark.len, 2);
        assert_eq!(mark.instances(), vec![a, b]);
        assert_eq!(mark.x, ScalarOrArray::Array(vec![0.0, 10.0]));
    }

    #[test]
    fn test_scalar_properties_broadcast() {
        let mark = SceneRectMark {
            len: 3,
            x: vec![0.0, 1.0, 2.0].into(),
            width: 1.0.into(),
            height: 4.0.into(),
            ..Default::default()
        };
        let heights: Vec<f32> = mark.instances().iter().map(|r| r.height).collect();
        assert_eq!(heights, vec![4.0, 4.0, 4.0]);
    }
}
