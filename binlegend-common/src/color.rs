use css_color_parser::Color;

/// Straight RGBA color with components in [0, 1]
pub type RgbaColor = [f32; 4];

pub const BLACK: RgbaColor = [0.0, 0.0, 0.0, 1.0];
pub const TRANSPARENT: RgbaColor = [0.0, 0.0, 0.0, 0.0];

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Unable to parse color {input:?}: {reason}")]
pub struct ColorParseError {
    pub input: String,
    pub reason: String,
}

/// Parse a CSS color string (`"#4682b4"`, `"steelblue"`, `"rgba(70, 130, 180, 0.5)"`)
pub fn parse_css_color(s: &str) -> Result<RgbaColor, ColorParseError> {
    match s.trim().parse::<Color>() {
        Ok(color) => Ok([
            color.r as f32 / 255.0,
            color.g as f32 / 255.0,
            color.b as f32 / 255.0,
            color.a,
        ]),
        Err(e) => Err(ColorParseError {
            input: s.to_string(),
            reason: format!("{e:?}"),
        }),
    }
}

/// Format the RGB part of a color as `#rrggbb`
pub fn to_css_hex(color: &RgbaColor) -> String {
    let [r, g, b] = [color[0], color[1], color[2]].map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    format!("#{r:02x}{g:02x}{b:02x}")
}
