use egui::Pos2;

use super::Drawable;
use crate::style::{Point, Style};
use crate::surface::Surface;

/// Font size of a stamp drawn at width 0; each unit of width adds `STAMP_SIZE_PER_WIDTH`.
pub const STAMP_BASE_SIZE: f32 = 12.0;
pub const STAMP_SIZE_PER_WIDTH: f32 = 4.0;

/// A single glyph placed at an anchor point
#[derive(Debug, Clone, PartialEq)]
pub struct Stamp {
    anchor: Point,
    style: Style,
    glyph: String,
}

impl Stamp {
    pub fn new(pos: Pos2, style: Style, glyph: impl Into<String>) -> Self {
        Self {
            anchor: Point::new(pos, style.stroke_width),
            style,
            glyph: glyph.into(),
        }
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Font size in canvas pixels; the stroke width acts as a size multiplier here.
    pub fn font_size(&self) -> f32 {
        font_size_for_width(self.style.stroke_width)
    }
}

pub fn font_size_for_width(width: f32) -> f32 {
    STAMP_BASE_SIZE + STAMP_SIZE_PER_WIDTH * width
}

impl Drawable for Stamp {
    fn kind(&self) -> &'static str {
        "stamp"
    }

    fn style(&self) -> Style {
        self.style
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.glyph(&self.glyph, self.anchor.pos, self.font_size(), self.style.color);
    }
}
