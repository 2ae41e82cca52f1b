use egui::Pos2;

use crate::drawable::{Drawable, Stamp};
use crate::style::Style;
use crate::surface::Surface;
use crate::tool::ToolId;

/// Radius of the marker preview dot never drops below this.
const MIN_MARKER_RADIUS: f32 = 1.0;

/// What the active tool would do at the pointer. Never enters the history.
#[derive(Debug, Clone, PartialEq)]
pub enum Preview {
    /// Dot sized like the stroke the marker would draw
    Marker { pos: Pos2, style: Style },
    /// The stamp a release would place
    Sticker(Stamp),
}

impl Preview {
    pub fn build(pos: Pos2, tool: &ToolId, style: Style) -> Self {
        match tool {
            ToolId::Marker => Self::Marker { pos, style },
            ToolId::Sticker(glyph) => Self::Sticker(Stamp::new(pos, style, glyph.as_str())),
        }
    }

    pub fn pos(&self) -> Pos2 {
        match self {
            Self::Marker { pos, .. } => *pos,
            Self::Sticker(stamp) => stamp.anchor().pos,
        }
    }

    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Marker { pos, style } => {
                let radius = (style.stroke_width * 0.5).max(MIN_MARKER_RADIUS);
                surface.disc(*pos, radius, style.color);
            }
            Self::Sticker(stamp) => stamp.render(surface),
        }
    }
}

/// Holds the current preview, if the pointer is over the canvas.
#[derive(Debug, Clone, Default)]
pub struct CursorPreview {
    current: Option<Preview>,
}

impl CursorPreview {
    /// Replace the preview; `None` clears it.
    pub fn update(&mut self, pos: Option<Pos2>, tool: &ToolId, style: Style) {
        self.current = pos.map(|pos| Preview::build(pos, tool, style));
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn get(&self) -> Option<&Preview> {
        self.current.as_ref()
    }
}
