use egui::Color32;

use crate::cursor::Preview;
use crate::drawable::{Drawable, DrawableType};
use crate::surface::Surface;

/// Full redraw: background, every drawable in paint order, then the preview on top.
///
/// Output depends only on the arguments and the surface size.
pub fn repaint(
    surface: &mut dyn Surface,
    background: Color32,
    drawables: &[DrawableType],
    preview: Option<&Preview>,
) {
    surface.fill(background);
    for drawable in drawables {
        drawable.render(surface);
    }
    if let Some(preview) = preview {
        preview.render(surface);
    }
}
