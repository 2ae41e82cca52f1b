use egui::{Key, KeyboardShortcut, Modifiers, Rect};
use log::{error, warn};

use crate::canvas_texture::CanvasTexture;
use crate::config::SketchConfig;
use crate::error::SketchError;
use crate::export;
use crate::input::InputHandler;
use crate::panels::{central_panel, tools_panel};
use crate::sketch::Sketch;
use crate::tool::ToolId;

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);
const REDO_SHORTCUT: KeyboardShortcut =
    KeyboardShortcut::new(Modifiers::COMMAND.plus(Modifiers::SHIFT), Key::Z);

pub struct SketchApp {
    sketch: Sketch,
    canvas: CanvasTexture,
    input: InputHandler,
    /// Text field of the "add sticker" form
    pub(crate) sticker_text: String,
    /// Result of the last command that can fail, shown under the tools
    pub(crate) status: Option<String>,
}

impl SketchApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        Self::with_config(SketchConfig::from_env(), &cc.egui_ctx)
    }

    pub fn with_config(config: SketchConfig, ctx: &egui::Context) -> Self {
        let sketch = Sketch::new(config);
        let canvas = CanvasTexture::attach(&sketch, ctx);
        Self {
            sketch,
            canvas,
            input: InputHandler::new(Rect::NOTHING),
            sticker_text: String::new(),
            status: None,
        }
    }

    pub fn sketch(&self) -> &Sketch {
        &self.sketch
    }

    pub fn sketch_mut(&mut self) -> &mut Sketch {
        &mut self.sketch
    }

    pub fn select_tool(&mut self, id: ToolId) {
        if let Err(err) = self.sketch.set_tool(id) {
            warn!("{}", err);
            self.status = Some(err.to_string());
        }
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        if let Err(err) = self.sketch.set_stroke_width(width) {
            warn!("{}", err);
            self.status = Some(err.to_string());
        }
    }

    /// Adds the sticker typed into the form; the text stays put if it was rejected.
    pub fn add_custom_sticker(&mut self) {
        match self.sketch.add_custom_tool(&self.sticker_text) {
            Ok(id) => {
                self.status = Some(format!("Added sticker {}", id));
                self.sticker_text.clear();
            }
            Err(err) => {
                warn!("Custom sticker rejected: {}", err);
                self.status = Some(err.to_string());
            }
        }
    }

    /// Exports at the configured scale and writes the configured file name.
    pub fn export_to_file(&mut self) {
        let config = self.sketch.config();
        let file_name = config.export_file_name.clone();
        let result = self
            .sketch
            .export(config.export_scale)
            .and_then(|bytes| export::save_export(&bytes, &file_name).map_err(SketchError::from));
        self.status = Some(match result {
            Ok(()) => format!("Saved {}", file_name),
            Err(err) => {
                error!("Export failed: {}", err);
                format!("Export failed: {}", err)
            }
        });
    }

    /// Undo/redo keys, unless a text field owns the keyboard.
    fn handle_shortcuts(&mut self, ctx: &egui::Context) {
        if ctx.wants_keyboard_input() {
            return;
        }
        // Redo first: its shortcut is a superset of undo's.
        if ctx.input_mut(|i| i.consume_shortcut(&REDO_SHORTCUT)) {
            self.sketch.redo();
        } else if ctx.input_mut(|i| i.consume_shortcut(&UNDO_SHORTCUT)) {
            self.sketch.undo();
        }
    }

    /// Feeds this frame's pointer input to the sketch and returns the canvas texture.
    pub(crate) fn update_canvas(&mut self, ctx: &egui::Context, canvas_rect: Rect) -> egui::TextureId {
        self.input.set_canvas_rect(canvas_rect);
        for event in self.input.process_input(ctx) {
            self.sketch.handle_input(event);
        }
        self.canvas.sync(&self.sketch, ctx)
    }
}

impl eframe::App for SketchApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_shortcuts(ctx);
        tools_panel(self, ctx);
        central_panel(self, ctx);
    }
}
