use egui::{Color32, Pos2, Vec2};

mod fonts;
mod raster;

pub use fonts::GlyphFonts;
pub use raster::RasterSurface;

/// Paint target for drawables, previews and the background.
///
/// Coordinates are canvas coordinates. A surface is free to apply its own
/// transform (the export surface scales everything uniformly).
pub trait Surface {
    /// Logical size in canvas coordinates.
    fn size(&self) -> Vec2;

    /// Replace every pixel with `color`.
    fn fill(&mut self, color: Color32);

    /// One continuous path through `points` with round joins and caps.
    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32);

    /// Filled circle.
    fn disc(&mut self, center: Pos2, radius: f32, color: Color32);

    /// Text centered on `center`, `size` being the font size in pixels.
    fn glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32);
}
