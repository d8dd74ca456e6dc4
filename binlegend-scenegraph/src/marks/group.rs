use crate::marks::mark::SceneMark;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SceneGroup {
    pub name: String,
    pub origin: [f32; 2],
    pub marks: Vec<SceneMark>,
    pub zindex: Option<i32>,
}

impl SceneGroup {
    /// Marks in paint order: stable sort by zindex, unset zindex counts as 0
    pub fn sorted_marks(&self) -> Vec<&SceneMark> {
        let mut marks: Vec<&SceneMark> = self.marks.iter().collect();
        marks.sort_by_key(|m| m.zindex().unwrap_or(0));
        marks
    }

    /// Depth-first search for a descendant group by name
    pub fn find_group(&self, name: &str) -> Option<&SceneGroup> {
        self.marks.iter().find_map(|mark| match mark {
            SceneMark::Group(group) if group.name == name => Some(group),
            SceneMark::Group(group) => group.find_group(name),
            _ => None,
        })
    }
}

impl Default for SceneGroup {
    fn default() -> Self {
        Self {
            name: "".to_string(),
            origin: [0.0, 0.0],
            marks: vec![],
            zindex: None,
        }
    }
}

impl From<SceneGroup> for SceneMark {
    fn from(mark: SceneGroup) -> Self {
        SceneMark::Group(mark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::rect::SceneRectMark;
    use crate::marks::rule::SceneRuleMark;
    use crate::marks::text::{SceneTextMark, TextAlign};

    #[test]
    fn test_find_nested_group_and_sort() {
        let inner = SceneGroup {
            name: "inner".to_string(),
            zindex: Some(-1),
            ..Default::default()
        };
        let middle = SceneGroup {
            name: "middle".to_string(),
            marks: vec![inner.into()],
            ..Default::default()
        };
        let root = SceneGroup {
            marks: vec![
                SceneRuleMark {
                    zindex: Some(1),
                    ..Default::default()
                }
                .into(),
                middle.into(),
            ],
            ..Default::default()
        };

        assert_eq!(root.find_group("inner").map(|g| g.zindex), Some(Some(-1)));
        assert!(root.find_group("missing").is_none());

        let sorted = root.sorted_marks();
        assert!(matches!(sorted[0], SceneMark::Group(_)));
        assert!(matches!(sorted[1], SceneMark::Rule(_)));
    }

    #[test]
    fn test_json_round_trip() {
        let group = SceneGroup {
            name: "legend".to_string(),
            origin: [0.0, 31.0],
            marks: vec![
                SceneRectMark {
                    len: 2,
                    x: vec![30.0, 90.0].into(),
                    width: 60.0.into(),
                    height: 24.0.into(),
                    fill: vec![[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.5]].into(),
                    ..Default::default()
                }
                .into(),
                SceneTextMark {
                    len: 2,
                    text: vec!["0".to_string(), "50%".to_string()].into(),
                    x: vec![30.0, 90.0].into(),
                    align: TextAlign::Center.into(),
                    ..Default::default()
                }
                .into(),
            ],
            zindex: Some(1),
        };

        let json = serde_json::to_string(&group).unwrap();
        assert!(json.contains(r#""type":"array""#));
        assert!(json.contains(r#""value":"center""#));
        let parsed: SceneGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, group);
    }
}
