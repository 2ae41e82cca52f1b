use std::io::Cursor;
use std::path::Path;

use egui::{Color32, Vec2};
use image::ImageFormat;
use log::info;

use crate::drawable::DrawableType;
use crate::error::ExportError;
use crate::render;
use crate::surface::{GlyphFonts, RasterSurface};

/// Largest export side, in pixels.
pub const MAX_EXPORT_DIMENSION: u32 = 8192;

/// Paints `drawables` on a fresh surface of `canvas_size * scale` pixels.
///
/// The preview is never part of an export.
pub fn render_export(
    drawables: &[DrawableType],
    canvas_size: Vec2,
    scale: f32,
    background: Color32,
    fonts: &GlyphFonts,
) -> Result<RasterSurface, ExportError> {
    if !scale.is_finite() || scale <= 0.0 {
        return Err(ExportError::InvalidScale(scale));
    }
    let (width, height) = RasterSurface::pixel_dimensions(canvas_size, scale);
    if width == 0 || height == 0 {
        return Err(ExportError::InvalidScale(scale));
    }
    if width > MAX_EXPORT_DIMENSION || height > MAX_EXPORT_DIMENSION {
        return Err(ExportError::SurfaceTooLarge { width, height });
    }

    let mut surface = RasterSurface::new(canvas_size, scale, fonts.clone());
    render::repaint(&mut surface, background, drawables, None);
    Ok(surface)
}

/// Renders and encodes an export as PNG bytes.
pub fn export_png(
    drawables: &[DrawableType],
    canvas_size: Vec2,
    scale: f32,
    background: Color32,
    fonts: &GlyphFonts,
) -> Result<Vec<u8>, ExportError> {
    let surface = render_export(drawables, canvas_size, scale, background, fonts)?;
    let image = surface.into_image();

    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    info!(
        "Exported {} drawables at {}x{} ({} bytes)",
        drawables.len(),
        image.width(),
        image.height(),
        bytes.len()
    );
    Ok(bytes)
}

/// Writes encoded export bytes to `path`.
pub fn save_export(bytes: &[u8], path: impl AsRef<Path>) -> Result<(), ExportError> {
    let path = path.as_ref();
    std::fs::write(path, bytes)?;
    info!("Saved export to {}", path.display());
    Ok(())
}
