//! The sketch session: history, tools, preview and notifications in one owner.
//!
//! Every mutation goes through a `Sketch` method, which emits
//! [`SketchEvent::DrawingChanged`] when the history or an in-progress stroke
//! changed and [`SketchEvent::CursorChanged`] when only the preview did.
//! All access happens on the UI thread, one input event at a time.

use egui::{Color32, Pos2, Rect, Vec2};
use log::{debug, info};

use crate::config::SketchConfig;
use crate::cursor::{CursorPreview, Preview};
use crate::drawable::{Drawable, DrawableType};
use crate::error::SketchError;
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::export;
use crate::history::History;
use crate::input::InputEvent;
use crate::render;
use crate::surface::{GlyphFonts, Surface};
use crate::tool::{ToolController, ToolId, ToolPalette, ToolState};

#[derive(Debug)]
pub struct Sketch {
    config: SketchConfig,
    history: History,
    tools: ToolController,
    cursor: CursorPreview,
    /// Whether the pointer is over the canvas; the preview only follows it then.
    pointer_inside: bool,
    events: EventBus,
    fonts: GlyphFonts,
}

impl Default for Sketch {
    fn default() -> Self {
        Self::new(SketchConfig::default())
    }
}

impl Sketch {
    pub fn new(config: SketchConfig) -> Self {
        Self::with_fonts(config, GlyphFonts::bundled())
    }

    pub fn with_fonts(config: SketchConfig, fonts: GlyphFonts) -> Self {
        let config = config.sanitized();
        let state = ToolState {
            active: ToolId::Marker,
            stroke_width: config.thin_width,
            color: config.default_color,
        };
        let palette = ToolPalette::with_stickers(&config.default_stickers);
        Self {
            tools: ToolController::new(state, palette),
            config,
            history: History::new(),
            cursor: CursorPreview::default(),
            pointer_inside: false,
            events: EventBus::new(),
            fonts,
        }
    }

    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tools(&self) -> &ToolController {
        &self.tools
    }

    pub fn tool_state(&self) -> &ToolState {
        self.tools.state()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.cursor.get()
    }

    pub fn fonts(&self) -> &GlyphFonts {
        &self.fonts
    }

    pub fn canvas_size(&self) -> Vec2 {
        self.config.canvas_dimensions()
    }

    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.events.subscribe(handler);
    }

    fn notify(&self, event: SketchEvent) {
        self.events.emit(event);
    }

    fn contains(&self, pos: Pos2) -> bool {
        Rect::from_min_size(Pos2::ZERO, self.canvas_size()).contains(pos)
    }

    fn set_preview(&mut self, pos: Option<Pos2>) {
        let state = self.tools.state();
        self.cursor.update(pos, &state.active, state.style());
        self.notify(SketchEvent::CursorChanged);
    }

    /// Rebuild the preview for the current tool and style without moving it.
    fn refresh_preview(&mut self) {
        if let Some(pos) = self.cursor.get().map(Preview::pos) {
            self.set_preview(Some(pos));
        }
    }

    // ---------------------------------------------------------------------
    // Pointer input

    pub fn handle_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerEnter { pos } => self.pointer_enter(pos),
            InputEvent::PointerLeave => self.pointer_leave(),
            InputEvent::PointerDown { pos } => self.pointer_down(pos),
            InputEvent::PointerMove { pos } => self.pointer_move(pos),
            InputEvent::PointerUp { pos } => self.pointer_up(pos),
        }
    }

    pub fn pointer_enter(&mut self, pos: Pos2) {
        self.pointer_inside = true;
        self.set_preview(Some(pos));
    }

    /// Hides the preview. A stroke in progress keeps recording until release.
    pub fn pointer_leave(&mut self) {
        self.pointer_inside = false;
        self.cursor.clear();
        self.notify(SketchEvent::CursorChanged);
    }

    pub fn pointer_down(&mut self, pos: Pos2) {
        if self.tools.on_pointer_down(pos, &mut self.history) {
            self.notify(SketchEvent::DrawingChanged);
        }
    }

    pub fn pointer_move(&mut self, pos: Pos2) {
        if self.pointer_inside && self.contains(pos) {
            self.set_preview(Some(pos));
        }
        if self.tools.on_pointer_move(pos, &mut self.history) {
            self.notify(SketchEvent::DrawingChanged);
        }
    }

    pub fn pointer_up(&mut self, pos: Pos2) {
        if self.tools.on_pointer_up(pos, &mut self.history) {
            self.notify(SketchEvent::DrawingChanged);
        }
    }

    // ---------------------------------------------------------------------
    // Commands

    /// Undo the newest drawable. While drawing, the whole stroke in progress is undone.
    /// Returns false when there was nothing to undo.
    pub fn undo(&mut self) -> bool {
        let Some(kind) = self.history.undo().map(|entity| entity.kind()) else {
            debug!("Nothing to undo");
            return false;
        };
        self.tools.abandon_gesture();
        info!("Undid {}", kind);
        self.notify(SketchEvent::DrawingChanged);
        true
    }

    /// Redo the most recently undone drawable. Returns false when the redo buffer is empty.
    pub fn redo(&mut self) -> bool {
        if self.tools.is_drawing() {
            debug!("Redo ignored while drawing");
            return false;
        }
        if self.history.redo().is_none() {
            debug!("Nothing to redo");
            return false;
        }
        info!("Redid drawable, history now {}", self.history.len());
        self.notify(SketchEvent::DrawingChanged);
        true
    }

    /// Drop every drawable, including undone ones and a stroke in progress.
    pub fn clear_all(&mut self) -> bool {
        self.tools.abandon_gesture();
        if !self.history.clear() {
            return false;
        }
        info!("Cleared canvas");
        self.notify(SketchEvent::DrawingChanged);
        true
    }

    pub fn set_tool(&mut self, id: ToolId) -> Result<(), SketchError> {
        self.tools.set_tool(id)?;
        self.refresh_preview();
        Ok(())
    }

    pub fn set_stroke_width(&mut self, width: f32) -> Result<(), SketchError> {
        self.tools.set_stroke_width(width)?;
        self.refresh_preview();
        Ok(())
    }

    pub fn set_color(&mut self, color: Color32) {
        self.tools.set_color(color);
        self.refresh_preview();
    }

    /// Adds a sticker tool for `glyph` and selects it. Blank text is rejected
    /// without touching the tool state.
    pub fn add_custom_tool(&mut self, glyph: &str) -> Result<ToolId, SketchError> {
        let id = self.tools.add_custom_tool(glyph)?;
        self.refresh_preview();
        Ok(id)
    }

    /// PNG of the committed drawables at `scale`, preview excluded.
    pub fn export(&self, scale: f32) -> Result<Vec<u8>, SketchError> {
        Ok(export::export_png(
            self.history.snapshot(),
            self.canvas_size(),
            scale,
            self.config.background,
            &self.fonts,
        )?)
    }

    /// Owned copy of the committed drawables, for exports that run elsewhere.
    pub fn snapshot(&self) -> Vec<DrawableType> {
        self.history.snapshot().to_vec()
    }

    /// Full redraw of the current state onto `surface`.
    pub fn repaint(&self, surface: &mut dyn Surface) {
        render::repaint(
            surface,
            self.config.background,
            self.history.snapshot(),
            self.cursor.get(),
        );
    }
}
