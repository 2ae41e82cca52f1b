#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas_texture;
pub mod config;
pub mod cursor;
pub mod drawable;
pub mod error;
pub mod event;
pub mod export;
pub mod history;
pub mod input;
pub mod panels;
pub mod render;
pub mod sketch;
pub mod style;
pub mod surface;
pub mod tool;

pub use app::SketchApp;
pub use config::SketchConfig;
pub use cursor::{CursorPreview, Preview};
pub use drawable::{Drawable, DrawableType, Stamp, Stroke};
pub use error::{ConfigError, ExportError, SketchError};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use history::History;
pub use input::{InputEvent, InputHandler};
pub use sketch::Sketch;
pub use style::{Point, Style};
pub use surface::{GlyphFonts, RasterSurface, Surface};
pub use tool::{ToolController, ToolId, ToolMode, ToolPalette, ToolState};
