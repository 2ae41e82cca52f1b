use std::cell::Cell;
use std::rc::Rc;

use egui::{Context, TextureHandle, TextureId, TextureOptions};
use log::debug;

use crate::event::SketchEvent;
use crate::sketch::Sketch;
use crate::surface::RasterSurface;

/// On-screen copy of the canvas.
///
/// The sketch is repainted into a raster surface only after a notification,
/// then uploaded as a single egui texture.
pub struct CanvasTexture {
    surface: RasterSurface,
    handle: Option<TextureHandle>,
    /// Set by the sketch's event handler, consumed by `sync`.
    stale: Rc<Cell<bool>>,
    repaints: u64,
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("surface", &self.surface)
            .field("stale", &self.stale.get())
            .field("repaints", &self.repaints)
            .finish()
    }
}

impl CanvasTexture {
    /// Creates the texture and subscribes it to `sketch`'s notifications.
    pub fn attach(sketch: &Sketch, ctx: &Context) -> Self {
        let stale = Rc::new(Cell::new(true));

        let flag = Rc::clone(&stale);
        let egui_ctx = ctx.clone();
        sketch.subscribe(move |event: SketchEvent| {
            debug!("Canvas stale after {:?}", event);
            flag.set(true);
            egui_ctx.request_repaint();
        });

        Self {
            surface: RasterSurface::new(sketch.canvas_size(), 1.0, sketch.fonts().clone()),
            handle: None,
            stale,
            repaints: 0,
        }
    }

    pub fn is_stale(&self) -> bool {
        self.stale.get()
    }

    /// Number of full repaints performed so far
    pub fn repaints(&self) -> u64 {
        self.repaints
    }

    /// Repaints and re-uploads if a notification arrived since the last call.
    pub fn sync(&mut self, sketch: &Sketch, ctx: &Context) -> TextureId {
        if self.stale.replace(false) || self.handle.is_none() {
            sketch.repaint(&mut self.surface);
            self.repaints += 1;

            let image = self.surface.to_color_image();
            match &mut self.handle {
                Some(handle) => handle.set(image, TextureOptions::NEAREST),
                None => {
                    self.handle = Some(ctx.load_texture("sketch_canvas", image, TextureOptions::NEAREST));
                }
            }
        }

        match &self.handle {
            Some(handle) => handle.id(),
            None => TextureId::default(),
        }
    }
}
