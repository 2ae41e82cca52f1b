use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::SketchError;
use crate::style::Style;

mod controller;

pub use controller::{ToolController, ToolMode};

/// Identifies the tool that turns pointer input into drawables.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ToolId {
    /// Freehand marker producing strokes
    Marker,
    /// Sticker producing a stamp of the given glyph
    Sticker(String),
}

impl ToolId {
    /// Text shown on the tool's button
    pub fn label(&self) -> &str {
        match self {
            Self::Marker => "marker",
            Self::Sticker(glyph) => glyph,
        }
    }

    pub fn glyph(&self) -> Option<&str> {
        match self {
            Self::Marker => None,
            Self::Sticker(glyph) => Some(glyph),
        }
    }
}

impl std::fmt::Display for ToolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Active tool plus the paint parameters new drawables pick up.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolState {
    pub active: ToolId,
    pub stroke_width: f32,
    pub color: Color32,
}

impl ToolState {
    pub fn style(&self) -> Style {
        Style::new(self.color, self.stroke_width)
    }
}

impl Default for ToolState {
    fn default() -> Self {
        Self {
            active: ToolId::Marker,
            stroke_width: 1.0,
            color: Color32::BLACK,
        }
    }
}

/// The tools the user can pick from, marker first, stickers in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct ToolPalette {
    tools: Vec<ToolId>,
}

impl Default for ToolPalette {
    fn default() -> Self {
        Self {
            tools: vec![ToolId::Marker],
        }
    }
}

impl ToolPalette {
    pub fn with_stickers<I, S>(stickers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut palette = Self::default();
        for glyph in stickers {
            // Blank entries in a config are skipped rather than failing startup.
            let _ = palette.add_sticker(glyph.as_ref());
        }
        palette
    }

    pub fn tools(&self) -> &[ToolId] {
        &self.tools
    }

    pub fn contains(&self, id: &ToolId) -> bool {
        self.tools.contains(id)
    }

    /// Adds a sticker tool for `glyph` (trimmed) and returns its id.
    /// An existing sticker with the same glyph is returned instead of duplicated.
    pub fn add_sticker(&mut self, glyph: &str) -> Result<ToolId, SketchError> {
        let glyph = glyph.trim();
        if glyph.is_empty() {
            return Err(SketchError::EmptyGlyph);
        }
        let id = ToolId::Sticker(glyph.to_owned());
        if !self.tools.contains(&id) {
            self.tools.push(id.clone());
        }
        Ok(id)
    }
}
