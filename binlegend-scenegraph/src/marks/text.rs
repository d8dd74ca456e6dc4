use super::mark::SceneMark;
use binlegend_common::color::{RgbaColor, BLACK};
use binlegend_common::value::ScalarOrArray;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl TextAlign {
    /// SVG `text-anchor` value
    pub fn text_anchor(&self) -> &'static str {
        match self {
            TextAlign::Left => "start",
            TextAlign::Center => "middle",
            TextAlign::Right => "end",
        }
    }
}

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextBaseline {
    Alphabetic,
    Top,
    Middle,
    #[default]
    Bottom,
}

impl TextBaseline {
    /// SVG `dominant-baseline` value
    pub fn dominant_baseline(&self) -> &'static str {
        match self {
            TextBaseline::Alphabetic => "alphabetic",
            TextBaseline::Top => "hanging",
            TextBaseline::Middle => "middle",
            TextBaseline::Bottom => "text-after-edge",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SceneTextMark {
    pub name: String,
    pub len: u32,
    pub text: ScalarOrArray<String>,
    pub x: ScalarOrArray<f32>,
    pub y: ScalarOrArray<f32>,
    pub align: ScalarOrArray<TextAlign>,
    pub baseline: ScalarOrArray<TextBaseline>,
    pub angle: ScalarOrArray<f32>,
    pub color: ScalarOrArray<RgbaColor>,
    pub font_size: ScalarOrArray<f32>,
    pub zindex: Option<i32>,
}

impl SceneTextMark {
    pub fn text_iter(&self) -> Box<dyn Iterator<Item = &String> + '_> {
        self.text.as_iter(self.len as usize)
    }
    pub fn x_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.x.as_iter(self.len as usize)
    }
    pub fn y_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.y.as_iter(self.len as usize)
    }
    pub fn align_iter(&self) -> Box<dyn Iterator<Item = &TextAlign> + '_> {
        self.align.as_iter(self.len as usize)
    }
    pub fn baseline_iter(&self) -> Box<dyn Iterator<Item = &TextBaseline> + '_> {
        self.baseline.as_iter(self.len as usize)
    }
    pub fn angle_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.angle.as_iter(self.len as usize)
    }
    pub fn color_iter(&self) -> Box<dyn Iterator<Item = &RgbaColor> + '_> {
        self.color.as_iter(self.len as usize)
    }
    pub fn font_size_iter(&self) -> Box<dyn Iterator<Item = &f32> + '_> {
        self.font_size.as_iter(self.len as usize)
    }
}

impl Default for SceneTextMark {
    fn default() -> Self {
        Self {
            name: "text_mark".to_string(),
            len: 1,
            text: ScalarOrArray::new_scalar("".to_string()),
            x: ScalarOrArray::new_scalar(0.0),
            y: ScalarOrArray::new_scalar(0.0),
            align: ScalarOrArray::new_scalar(TextAlign::default()),
            baseline: ScalarOrArray::new_scalar(TextBaseline::default()),
            angle: ScalarOrArray::new_scalar(0.0),
            color: ScalarOrArray::new_scalar(BLACK),
            font_size: ScalarOrArray::new_scalar(10.0),
            zindex: None,
        }
    }
}

impl From<SceneTextMark> for SceneMark {
    fn from(mark: SceneTextMark) -> Self {
        SceneMark::Text(Arc::new(mark))
    }
}
