//! Serialize a scene graph into a standalone SVG document.
use std::fmt::Write;

use binlegend_common::color::{to_css_hex, RgbaColor};
use binlegend_common::value::ScalarOrArray;
use itertools::izip;

use crate::error::SceneGraphError;
use crate::marks::group::SceneGroup;
use crate::marks::mark::SceneMark;
use crate::marks::rect::SceneRectMark;
use crate::marks::rule::SceneRuleMark;
use crate::marks::text::SceneTextMark;

impl SceneGroup {
    pub fn to_svg(&self, width: f32, height: f32) -> Result<String, SceneGraphError> {
        let mut svg = String::new();
        writeln!(
            &mut svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        )?;
        write_group(&mut svg, self, 1)?;
        writeln!(&mut svg, "</svg>")?;
        Ok(svg)
    }
}

fn write_group(svg: &mut String, group: &SceneGroup, depth: usize) -> Result<(), SceneGraphError> {
    let indent = "  ".repeat(depth);
    let class = if group.name.is_empty() {
        String::new()
    } else {
        format!(r#" class="{}""#, escape(&group.name))
    };
    writeln!(
        svg,
        r#"{indent}<g{class} transform="translate({},{})">"#,
        group.origin[0], group.origin[1]
    )?;
    for mark in group.sorted_marks() {
        match mark {
            SceneMark::Rect(mark) => write_rects(svg, mark, depth + 1)?,
            SceneMark::Rule(mark) => write_rules(svg, mark, depth + 1)?,
            SceneMark::Text(mark) => write_text(svg, mark, depth + 1)?,
            SceneMark::Group(child) => write_group(svg, child, depth + 1)?,
        }
    }
    writeln!(svg, "{indent}</g>")?;
    Ok(())
}

fn write_rects(svg: &mut String, mark: &SceneRectMark, depth: usize) -> Result<(), SceneGraphError> {
    let len = mark.len as usize;
    check_len(&mark.name, "x", &mark.x, len)?;
    check_len(&mark.name, "y", &mark.y, len)?;
    check_len(&mark.name, "width", &mark.width, len)?;
    check_len(&mark.name, "height", &mark.height, len)?;
    check_len(&mark.name, "fill", &mark.fill, len)?;

    let indent = "  ".repeat(depth);
    for (x, y, width, height, fill, stroke, stroke_width) in izip!(
        mark.x_iter(),
        mark.y_iter(),
        mark.width_iter(),
        mark.height_iter(),
        mark.fill_iter(),
        mark.stroke.as_iter(len),
        mark.stroke_width.as_iter(len)
    ) {
        // Negative extents come from reversed scale ranges
        let (x, width) = if *width < 0.0 { (x + width, -width) } else { (*x, *width) };
        let (y, height) = if *height < 0.0 { (y + height, -height) } else { (*y, *height) };
        write!(
            svg,
            r#"{indent}<rect x="{x}" y="{y}" width="{width}" height="{height}"{}"#,
            paint("fill", fill)
        )?;
        if *stroke_width > 0.0 {
            write!(svg, r#"{} stroke-width="{stroke_width}""#, paint("stroke", stroke))?;
        }
        writeln!(svg, "/>")?;
    }
    Ok(())
}

fn write_rules(svg: &mut String, mark: &SceneRuleMark, depth: usize) -> Result<(), SceneGraphError> {
    let len = mark.len as usize;
    check_len(&mark.name, "x", &mark.x, len)?;
    check_len(&mark.name, "y", &mark.y, len)?;
    check_len(&mark.name, "x2", &mark.x2, len)?;
    check_len(&mark.name, "y2", &mark.y2, len)?;

    let indent = "  ".repeat(depth);
    for (x, y, x2, y2, stroke, stroke_width) in izip!(
        mark.x_iter(),
        mark.y_iter(),
        mark.x2_iter(),
        mark.y2_iter(),
        mark.stroke_iter(),
        mark.stroke_width_iter()
    ) {
        writeln!(
            svg,
            r#"{indent}<line x1="{x}" y1="{y}" x2="{x2}" y2="{y2}"{} stroke-width="{stroke_width}"/>"#,
            paint("stroke", stroke)
        )?;
    }
    Ok(())
}

fn write_text(svg: &mut String, mark: &SceneTextMark, depth: usize) -> Result<(), SceneGraphError> {
    let len = mark.len as usize;
    check_len(&mark.name, "text", &mark.text, len)?;
    check_len(&mark.name, "x", &mark.x, len)?;
    check_len(&mark.name, "y", &mark.y, len)?;

    let indent = "  ".repeat(depth);
    for (text, x, y, align, baseline, angle, color, font_size) in izip!(
        mark.text_iter(),
        mark.x_iter(),
        mark.y_iter(),
        mark.align_iter(),
        mark.baseline_iter(),
        mark.angle_iter(),
        mark.color_iter(),
        mark.font_size_iter()
    ) {
        let rotate = if *angle != 0.0 {
            format!(r#" transform="rotate({angle},{x},{y})""#)
        } else {
            String::new()
        };
        writeln!(
            svg,
            r#"{indent}<text x="{x}" y="{y}" font-size="{font_size}" text-anchor="{}" dominant-baseline="{}"{}{rotate}>{}</text>"#,
            align.text_anchor(),
            baseline.dominant_baseline(),
            paint("fill", color),
            escape(text)
        )?;
    }
    Ok(())
}

fn check_len<T: Sync + Clone>(
    name: &str,
    field: &'static str,
    values: &ScalarOrArray<T>,
    expected: usize,
) -> Result<(), SceneGraphError> {
    match values {
        ScalarOrArray::Array(values) if values.len() != expected => {
            Err(SceneGraphError::MarkLengthMismatch {
                name: name.to_string(),
                field,
                expected,
                actual: values.len(),
            })
        }
        _ => Ok(()),
    }
}

fn paint(attr: &str, color: &RgbaColor) -> String {
    if color[3] >= 1.0 {
        format!(r#" {attr}="{}""#, to_css_hex(color))
    } else {
        format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            to_css_hex(color),
            color[3].max(0.0)
        )
    }
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marks::text::{TextAlign, TextBaseline};

    #[test]
    fn test_rects_lines_and_text() -> Result<(), SceneGraphError> {
        let group = SceneGroup {
            name: "legend".to_string(),
            origin: [10.0, 2.0],
            marks: vec![
                SceneRectMark {
                    len: 2,
                    x: vec![0.0, 50.0].into(),
                    width: 50.0.into(),
                    height: 20.0.into(),
                    fill: vec![[1.0, 0.0, 0.0, 1.0], [0.0, 0.0, 1.0, 0.5]].into(),
                    ..Default::default()
                }
                .into(),
                SceneRuleMark {
                    x2: 100.0.into(),
                    ..Default::default()
                }
                .into(),
                SceneTextMark {
                    text: "a < b".to_string().into(),
                    align: TextAlign::Center.into(),
                    baseline: TextBaseline::Top.into(),
                    ..Default::default()
                }
                .into(),
            ],
            ..Default::default()
        };

        let svg = group.to_svg(120.0, 40.0)?;
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"<g class="legend" transform="translate(10,2)">"#));
        assert!(svg.contains(r##"<rect x="0" y="0" width="50" height="20" fill="#ff0000"/>"##));
        assert!(svg.contains(r##"fill="#0000ff" fill-opacity="0.5""##));
        assert!(svg.contains(r##"<line x1="0" y1="0" x2="100" y2="0" stroke="#000000" stroke-width="1"/>"##));
        assert!(svg.contains(">a &lt; b</text>"));
        assert!(svg.contains(r#"text-anchor="middle" dominant-baseline="hanging""#));
        assert!(svg.trim_end().ends_with("</svg>"));
        Ok(())
    }

    #[test]
    fn test_negative_height_is_normalized() -> Result<(), SceneGraphError> {
        let group = SceneGroup {
            marks: vec![SceneRectMark {
                y: 100.0.into(),
                width: 10.0.into(),
                height: (-25.0).into(),
                fill: [0.0, 0.0, 0.0, 1.0].into(),
                ..Default::default()
            }
            .into()],
            ..Default::default()
        };
        let svg = group.to_svg(10.0, 100.0)?;
        assert!(svg.contains(r#"y="75" width="10" height="25""#));
        Ok(())
    }

    #[test]
    fn test_length_mismatch() {
        let group = SceneGroup {
            marks: vec![SceneRectMark {
                len: 3,
                x: vec![0.0, 1.0].into(),
                ..Default::default()
            }
            .into()],
            ..Default::default()
        };
        assert!(matches!(
            group.to_svg(10.0, 10.0),
            Err(SceneGraphError::MarkLengthMismatch { field: "x", expected: 3, actual: 2, .. })
        ));
    }
}
