use egui::{Color32, Pos2};
use serde::{Deserialize, Serialize};

/// A sampled pointer location together with the stroke width that was in
/// effect when it was captured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub pos: Pos2,
    pub stroke_width: f32,
}

impl Point {
    pub fn new(pos: Pos2, stroke_width: f32) -> Self {
        Self { pos, stroke_width }
    }
}

/// Paint parameters captured when an entity or preview is created.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub color: Color32,
    pub stroke_width: f32,
}

impl Style {
    pub fn new(color: Color32, stroke_width: f32) -> Self {
        Self {
            color,
            stroke_width,
        }
    }
}

impl Default for Style {
    fn default() -> Self {
        Self {
            color: Color32::BLACK,
            stroke_width: 1.0,
        }
    }
}

/// Parses `#rrggbb` / `rrggbb` into an opaque color.
pub fn parse_hex_color(text: &str) -> Option<Color32> {
    let hex = text.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();
    Some(Color32::from_rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff0000"), Some(Color32::RED));
        assert_eq!(parse_hex_color("00ff00"), Some(Color32::from_rgb(0, 255, 0)));
        assert_eq!(parse_hex_color("  #000000 "), Some(Color32::BLACK));
    }

    #[test]
    fn test_parse_hex_color_rejects_garbage() {
        assert_eq!(parse_hex_color(""), None);
        assert_eq!(parse_hex_color("#fff"), None);
        assert_eq!(parse_hex_color("#gg0000"), None);
        assert_eq!(parse_hex_color("#ff00é"), None);
    }
}
