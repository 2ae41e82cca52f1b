//! Decides whether pointer input produces a stroke or a stamp.
//!
//! ```text
//!            pointer-down (marker)
//!   ┌──────┐ ───────────────────► ┌─────────┐
//!   │ Idle │                      │ Drawing │ ◄─┐ pointer-move
//!   └──────┘ ◄─────────────────── └─────────┘ ──┘
//!      ▲  │        pointer-up
//!      └──┘
//!   pointer-up (sticker): append stamp
//! ```

use egui::{Color32, Pos2};
use log::{debug, info, warn};

use super::{ToolId, ToolPalette, ToolState};
use crate::drawable::{Stamp, Stroke};
use crate::error::SketchError;
use crate::history::History;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    #[default]
    Idle,
    /// A stroke is being drawn; it already sits at the tail of the history.
    Drawing,
}

/// Owns the tool state and the gesture mode.
///
/// Pointer handlers mutate the history they are given and return `true`
/// when the drawing changed.
#[derive(Debug, Clone, Default)]
pub struct ToolController {
    state: ToolState,
    palette: ToolPalette,
    mode: ToolMode,
}

impl ToolController {
    pub fn new(state: ToolState, palette: ToolPalette) -> Self {
        Self {
            state,
            palette,
            mode: ToolMode::Idle,
        }
    }

    pub fn state(&self) -> &ToolState {
        &self.state
    }

    pub fn palette(&self) -> &ToolPalette {
        &self.palette
    }

    pub fn mode(&self) -> ToolMode {
        self.mode
    }

    pub fn is_drawing(&self) -> bool {
        self.mode == ToolMode::Drawing
    }

    pub fn on_pointer_down(&mut self, pos: Pos2, history: &mut History) -> bool {
        if self.is_drawing() {
            warn!("Pointer down at {:?} while already drawing, ignored", pos);
            return false;
        }
        match self.state.active {
            ToolId::Marker => {
                history.append(Stroke::new(pos, self.state.style()));
                self.mode = ToolMode::Drawing;
                debug!("Idle -> Drawing at {:?}", pos);
                true
            }
            // Stickers commit on release
            ToolId::Sticker(_) => false,
        }
    }

    pub fn on_pointer_move(&mut self, pos: Pos2, history: &mut History) -> bool {
        if !self.is_drawing() {
            return false;
        }
        self.current_stroke(history).extend(pos);
        true
    }

    pub fn on_pointer_up(&mut self, pos: Pos2, history: &mut History) -> bool {
        if self.is_drawing() {
            let points = self.current_stroke(history).len();
            self.mode = ToolMode::Idle;
            debug!("Drawing -> Idle, stroke finished with {} points", points);
            return true;
        }
        match &self.state.active {
            ToolId::Marker => false,
            ToolId::Sticker(glyph) => {
                history.append(Stamp::new(pos, self.state.style(), glyph.as_str()));
                debug!("Stamped {} at {:?}", glyph, pos);
                true
            }
        }
    }

    /// The stroke being drawn.
    ///
    /// # Panics
    /// Outside of `Drawing`; asking for it then is a sequencing bug in the caller.
    pub fn current_stroke<'h>(&self, history: &'h mut History) -> &'h mut Stroke {
        assert!(
            self.is_drawing(),
            "current stroke requested while {:?}",
            self.mode
        );
        history.tail_stroke_mut()
    }

    /// Ends a gesture without finishing it, after its stroke left the history.
    pub fn abandon_gesture(&mut self) {
        if self.is_drawing() {
            debug!("Drawing -> Idle, gesture abandoned");
            self.mode = ToolMode::Idle;
        }
    }

    pub fn set_tool(&mut self, id: ToolId) -> Result<(), SketchError> {
        if self.is_drawing() {
            return Err(SketchError::ToolBusy {
                requested: id.to_string(),
            });
        }
        if !self.palette.contains(&id) {
            return Err(SketchError::UnknownTool(id.to_string()));
        }
        info!("Tool selected: {}", id);
        self.state.active = id;
        Ok(())
    }

    /// Registers a sticker and makes it the active tool.
    pub fn add_custom_tool(&mut self, glyph: &str) -> Result<ToolId, SketchError> {
        if self.is_drawing() {
            return Err(SketchError::ToolBusy {
                requested: glyph.trim().to_owned(),
            });
        }
        let id = self.palette.add_sticker(glyph)?;
        self.set_tool(id.clone())?;
        Ok(id)
    }

    /// New width applies to the next drawable; a stroke in progress keeps its own.
    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), SketchError> {
        if !width.is_finite() || width <= 0.0 {
            return Err(SketchError::InvalidStrokeWidth(width));
        }
        self.state.stroke_width = width;
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.state.color = color;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn sticker(glyph: &str) -> ToolId {
        ToolId::Sticker(glyph.to_owned())
    }

    fn controller() -> ToolController {
        ToolController::new(ToolState::default(), ToolPalette::with_stickers(["★"]))
    }

    #[test]
    fn test_marker_gesture() {
        let mut tools = controller();
        let mut history = History::new();

        assert!(tools.on_pointer_down(pos2(10.0, 10.0), &mut history));
        assert_eq!(tools.mode(), ToolMode::Drawing);
        assert!(tools.on_pointer_move(pos2(20.0, 10.0), &mut history));
        assert!(tools.on_pointer_up(pos2(20.0, 10.0), &mut history));
        assert_eq!(tools.mode(), ToolMode::Idle);

        assert_eq!(history.len(), 1);
        assert_eq!(history.snapshot()[0].as_stroke().unwrap().len(), 2);
    }

    #[test]
    fn test_move_while_idle_records_nothing() {
        let mut tools = controller();
        let mut history = History::new();
        assert!(!tools.on_pointer_move(pos2(1.0, 1.0), &mut history));
        assert!(!tools.on_pointer_up(pos2(1.0, 1.0), &mut history));
        assert!(history.is_empty());
    }

    #[test]
    fn test_sticker_commits_on_release() {
        let mut tools = controller();
        let mut history = History::new();
        tools.set_tool(sticker("★")).unwrap();

        assert!(!tools.on_pointer_down(pos2(50.0, 50.0), &mut history));
        assert!(history.is_empty());
        assert!(tools.on_pointer_up(pos2(50.0, 50.0), &mut history));

        let stamp = history.snapshot()[0].as_stamp().unwrap();
        assert_eq!(stamp.glyph(), "★");
        assert_eq!(stamp.anchor().pos, pos2(50.0, 50.0));
    }

    #[test]
    fn test_set_tool_while_drawing_is_refused() {
        let mut tools = controller();
        let mut history = History::new();
        tools.on_pointer_down(pos2(0.0, 0.0), &mut history);

        let err = tools.set_tool(sticker("★")).unwrap_err();
        assert!(matches!(err, SketchError::ToolBusy { .. }));
        assert_eq!(tools.state().active, ToolId::Marker);
        assert!(tools.add_custom_tool("🎈").is_err());
        assert_eq!(tools.palette().tools().len(), 2);
    }

    #[test]
    fn test_set_unknown_tool_is_refused() {
        let mut tools = controller();
        assert!(matches!(
            tools.set_tool(sticker("?")),
            Err(SketchError::UnknownTool(_))
        ));
    }

    #[test]
    fn test_width_change_mid_stroke_keeps_stroke_width() {
        let mut tools = controller();
        let mut history = History::new();
        tools.on_pointer_down(pos2(0.0, 0.0), &mut history);
        tools.set_stroke_width(5.0).unwrap();
        tools.on_pointer_move(pos2(3.0, 3.0), &mut history);

        let stroke = history.snapshot()[0].as_stroke().unwrap();
        assert!(stroke.points().iter().all(|p| p.stroke_width == 1.0));
        assert_eq!(tools.state().stroke_width, 5.0);
    }

    #[test]
    fn test_invalid_width_is_rejected() {
        let mut tools = controller();
        assert!(tools.set_stroke_width(0.0).is_err());
        assert!(tools.set_stroke_width(f32::NAN).is_err());
        assert_eq!(tools.state().stroke_width, 1.0);
    }

    #[test]
    #[should_panic(expected = "current stroke requested")]
    fn test_current_stroke_outside_drawing_panics() {
        let tools = controller();
        let mut history = History::new();
        tools.current_stroke(&mut history);
    }
}
