use ab_glyph::{Font, FontArc, GlyphId};
use log::{debug, warn};

/// Faces tried in order for each character of a sticker glyph.
const FACE_NAMES: [&str; 4] = ["Hack", "Ubuntu-Light", "NotoEmoji-Regular", "emoji-icon-font"];

/// Glyph outlines used by raster surfaces, taken from the fonts bundled
/// with egui so stickers look the same on screen and in exports.
#[derive(Clone)]
pub struct GlyphFonts {
    faces: Vec<FontArc>,
}

impl std::fmt::Debug for GlyphFonts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlyphFonts")
            .field("faces", &self.faces.len())
            .finish()
    }
}

impl Default for GlyphFonts {
    fn default() -> Self {
        Self::bundled()
    }
}

impl GlyphFonts {
    /// Load egui's default font definitions.
    pub fn bundled() -> Self {
        let definitions = egui::FontDefinitions::default();
        let mut faces = Vec::with_capacity(FACE_NAMES.len());

        for name in FACE_NAMES {
            let Some(data) = definitions.font_data.get(name) else {
                warn!("Bundled font '{}' not available", name);
                continue;
            };
            match FontArc::try_from_vec(data.font.to_vec()) {
                Ok(face) => faces.push(face),
                Err(err) => warn!("Failed to parse bundled font '{}': {}", name, err),
            }
        }

        debug!("Loaded {} glyph faces", faces.len());
        Self { faces }
    }

    /// A set without any faces; glyphs render as nothing.
    pub fn empty() -> Self {
        Self { faces: Vec::new() }
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// First face that has an outline for `ch`, falling back to the first face.
    pub fn face_for(&self, ch: char) -> Option<(&FontArc, GlyphId)> {
        self.faces
            .iter()
            .map(|face| (face, face.glyph_id(ch)))
            .find(|(_, id)| id.0 != 0)
            .or_else(|| self.faces.first().map(|face| (face, face.glyph_id(ch))))
    }
}
