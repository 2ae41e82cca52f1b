use ab_glyph::{Font, ScaleFont, point};
use egui::{Color32, ColorImage, Pos2, Rect, Vec2, pos2};
use image::{Rgba, RgbaImage};

use super::{GlyphFonts, Surface};

/// Smallest radius a line or dot is rasterized with, in pixels, so that
/// hairlines stay visible.
const MIN_PIXEL_RADIUS: f32 = 0.5;

/// Software surface backed by an RGBA buffer.
///
/// All canvas coordinates and sizes are multiplied by `scale` before they
/// hit the buffer, so the same drawables can be painted at screen resolution
/// or upscaled for export.
pub struct RasterSurface {
    image: RgbaImage,
    size: Vec2,
    scale: f32,
    fonts: GlyphFonts,
}

impl std::fmt::Debug for RasterSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RasterSurface")
            .field("size", &self.size)
            .field("scale", &self.scale)
            .field("pixels", &self.image.dimensions())
            .finish()
    }
}

impl RasterSurface {
    /// Creates a transparent surface of `size * scale` pixels.
    pub fn new(size: Vec2, scale: f32, fonts: GlyphFonts) -> Self {
        let (width, height) = Self::pixel_dimensions(size, scale);
        Self {
            image: RgbaImage::new(width, height),
            size,
            scale,
            fonts,
        }
    }

    /// Buffer dimensions for a logical size at a given scale.
    pub fn pixel_dimensions(size: Vec2, scale: f32) -> (u32, u32) {
        (
            (size.x * scale).round().max(0.0) as u32,
            (size.y * scale).round().max(0.0) as u32,
        )
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    /// Pixel under a canvas position, if it lies on the surface.
    pub fn pixel_at(&self, pos: Pos2) -> Option<Color32> {
        let x = (pos.x * self.scale).floor();
        let y = (pos.y * self.scale).floor();
        if x < 0.0 || y < 0.0 || x >= self.image.width() as f32 || y >= self.image.height() as f32 {
            return None;
        }
        let [r, g, b, a] = self.image.get_pixel(x as u32, y as u32).0;
        Some(Color32::from_rgba_unmultiplied(r, g, b, a))
    }

    /// Copy of the buffer in the form egui uploads as a texture.
    pub fn to_color_image(&self) -> ColorImage {
        let size = [self.image.width() as usize, self.image.height() as usize];
        ColorImage::from_rgba_unmultiplied(size, self.image.as_raw())
    }

    fn to_pixels(&self, pos: Pos2) -> Pos2 {
        pos2(pos.x * self.scale, pos.y * self.scale)
    }

    /// Pixel-space bounds clipped to the buffer, as `(x0, y0, x1, y1)` exclusive.
    fn clip(&self, rect: Rect) -> Option<(u32, u32, u32, u32)> {
        let x0 = rect.min.x.floor().max(0.0);
        let y0 = rect.min.y.floor().max(0.0);
        let x1 = rect.max.x.ceil().min(self.image.width() as f32);
        let y1 = rect.max.y.ceil().min(self.image.height() as f32);
        if x0 >= x1 || y0 >= y1 {
            return None;
        }
        Some((x0 as u32, y0 as u32, x1 as u32, y1 as u32))
    }

    fn blend(&mut self, x: u32, y: u32, color: Color32, coverage: f32) {
        let [r, g, b, a] = color.to_srgba_unmultiplied();
        let alpha = (a as f32 / 255.0) * coverage.clamp(0.0, 1.0);
        if alpha <= 0.0 {
            return;
        }
        if alpha >= 1.0 {
            self.image.put_pixel(x, y, Rgba([r, g, b, 255]));
            return;
        }
        let Rgba(dst) = self.image.get_pixel_mut(x, y);
        for (channel, src) in dst.iter_mut().zip([r, g, b, 255]) {
            let mixed = *channel as f32 + (src as f32 - *channel as f32) * alpha;
            *channel = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Paints the union of capsules along `points` once, so overlapping
    /// segments of a translucent stroke do not darken each other.
    ///
    /// Each segment marks its covered row spans in a mask over the stroke's
    /// bounds; the mask is blended in a single pass afterwards.
    fn fill_capsules(&mut self, points: &[Pos2], radius: f32, color: Color32) {
        if points.is_empty() {
            return;
        }
        let bounds = Rect::from_points(points).expand(radius + 1.0);
        let Some((x0, y0, x1, y1)) = self.clip(bounds) else {
            return;
        };
        let stride = (x1 - x0) as usize;
        let mut mask = vec![false; stride * (y1 - y0) as usize];

        let segments: Vec<(Pos2, Pos2)> = if points.len() == 1 {
            vec![(points[0], points[0])]
        } else {
            points.windows(2).map(|pair| (pair[0], pair[1])).collect()
        };

        for (a, b) in segments {
            let Some((_, sy0, _, sy1)) = self.clip(Rect::from_two_pos(a, b).expand(radius + 1.0)) else {
                continue;
            };
            for y in sy0..sy1 {
                let Some((lo, hi)) = capsule_row_span(a, b, radius, y as f32 + 0.5) else {
                    continue;
                };
                // Pixel x is covered when its center x + 0.5 lies in [lo, hi].
                let first = (lo - 0.5).ceil().max(x0 as f32);
                let last = (hi - 0.5).floor().min((x1 - 1) as f32);
                if last < first {
                    continue;
                }
                let row = (y - y0) as usize * stride;
                let start = row + (first as u32 - x0) as usize;
                let end = row + (last as u32 - x0) as usize;
                mask[start..=end].fill(true);
            }
        }

        for (index, covered) in mask.into_iter().enumerate() {
            if covered {
                let x = x0 + (index % stride) as u32;
                let y = y0 + (index / stride) as u32;
                self.blend(x, y, color, 1.0);
            }
        }
    }
}

/// The x range of row `cy` lying within `radius` of segment `a`-`b`.
///
/// A capsule is the union of its two end discs and the band around the
/// segment; it is convex, so the three row intervals merge into one.
fn capsule_row_span(a: Pos2, b: Pos2, radius: f32, cy: f32) -> Option<(f32, f32)> {
    let mut span: Option<(f32, f32)> = None;
    let mut include = |lo: f32, hi: f32| {
        if lo <= hi {
            span = Some(match span {
                Some((l, h)) => (l.min(lo), h.max(hi)),
                None => (lo, hi),
            });
        }
    };

    for end in [a, b] {
        let dy = cy - end.y;
        let h_sq = radius * radius - dy * dy;
        if h_sq >= 0.0 {
            let h = h_sq.sqrt();
            include(end.x - h, end.x + h);
        }
    }

    let d = b - a;
    let len_sq = d.length_sq();
    if len_sq > 0.0 {
        let reach = radius * len_sq.sqrt();
        let (mut lo, mut hi) = (f32::NEG_INFINITY, f32::INFINITY);
        // Projection onto the segment: (x - a.x) * d.x + (cy - a.y) * d.y in [0, |d|²]
        narrow_linear(d.x, (cy - a.y) * d.y - a.x * d.x, 0.0, len_sq, &mut lo, &mut hi);
        // Signed distance from the line, times |d|: (x - a.x) * d.y - (cy - a.y) * d.x
        narrow_linear(d.y, -(cy - a.y) * d.x - a.x * d.y, -reach, reach, &mut lo, &mut hi);
        include(lo, hi);
    }

    span
}

/// Narrows `[lo, hi]` to the x for which `k * x + c` lies in `[min, max]`.
fn narrow_linear(k: f32, c: f32, min: f32, max: f32, lo: &mut f32, hi: &mut f32) {
    if k == 0.0 {
        if c < min || c > max {
            *lo = f32::INFINITY;
            *hi = f32::NEG_INFINITY;
        }
        return;
    }
    let (from, to) = ((min - c) / k, (max - c) / k);
    let (from, to) = if k > 0.0 { (from, to) } else { (to, from) };
    *lo = lo.max(from);
    *hi = hi.min(to);
}

impl Surface for RasterSurface {
    fn size(&self) -> Vec2 {
        self.size
    }

    fn fill(&mut self, color: Color32) {
        let pixel = Rgba(color.to_srgba_unmultiplied());
        for p in self.image.pixels_mut() {
            *p = pixel;
        }
    }

    fn polyline(&mut self, points: &[Pos2], width: f32, color: Color32) {
        let scaled: Vec<Pos2> = points.iter().map(|p| self.to_pixels(*p)).collect();
        let radius = (width * self.scale * 0.5).max(MIN_PIXEL_RADIUS);
        self.fill_capsules(&scaled, radius, color);
    }

    fn disc(&mut self, center: Pos2, radius: f32, color: Color32) {
        let center = self.to_pixels(center);
        let radius = (radius * self.scale).max(MIN_PIXEL_RADIUS);
        self.fill_capsules(&[center], radius, color);
    }

    fn glyph(&mut self, text: &str, center: Pos2, size: f32, color: Color32) {
        if self.fonts.is_empty() || text.is_empty() {
            return;
        }
        let px = size * self.scale;
        let center = self.to_pixels(center);

        // Measure the run first so it can be centered on the anchor.
        let mut width = 0.0;
        let mut ascent: f32 = 0.0;
        let mut descent: f32 = 0.0;
        for ch in text.chars() {
            if let Some((face, id)) = self.fonts.face_for(ch) {
                let scaled = face.as_scaled(px);
                width += scaled.h_advance(id);
                ascent = ascent.max(scaled.ascent());
                descent = descent.min(scaled.descent());
            }
        }

        let baseline = center.y + (ascent + descent) * 0.5;
        let mut caret = center.x - width * 0.5;
        let mut coverage = Vec::new();
        for ch in text.chars() {
            let Some((face, id)) = self.fonts.face_for(ch) else {
                continue;
            };
            let advance = face.as_scaled(px).h_advance(id);
            let glyph = id.with_scale_and_position(px, point(caret, baseline));
            if let Some(outlined) = face.outline_glyph(glyph) {
                let bounds = outlined.px_bounds();
                outlined.draw(|gx, gy, cov| {
                    let x = bounds.min.x + gx as f32;
                    let y = bounds.min.y + gy as f32;
                    coverage.push((x, y, cov));
                });
            }
            caret += advance;
        }

        let (w, h) = (self.image.width() as f32, self.image.height() as f32);
        for (x, y, cov) in coverage {
            if x >= 0.0 && y >= 0.0 && x < w && y < h {
                self.blend(x as u32, y as u32, color, cov);
            }
        }
    }
}
