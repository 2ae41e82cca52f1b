use crate::surface::Surface;
use crate::style::Style;

mod stamp;
mod stroke;

pub use stamp::{Stamp, font_size_for_width};
pub use stroke::Stroke;

/// Common trait that every recorded drawing action implements
pub trait Drawable {
    /// Short name of the entity kind, used in logs and the history panel
    fn kind(&self) -> &'static str;

    /// Paint parameters the entity was created with
    fn style(&self) -> Style;

    /// Paint the entity onto `surface`
    fn render(&self, surface: &mut dyn Surface);
}

/// Enumeration of all drawable kinds that can live in the history
#[derive(Debug, Clone, PartialEq)]
pub enum DrawableType {
    Stroke(Stroke),
    Stamp(Stamp),
}

impl DrawableType {
    pub fn as_stroke(&self) -> Option<&Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_stroke_mut(&mut self) -> Option<&mut Stroke> {
        match self {
            Self::Stroke(stroke) => Some(stroke),
            _ => None,
        }
    }

    pub fn as_stamp(&self) -> Option<&Stamp> {
        match self {
            Self::Stamp(stamp) => Some(stamp),
            _ => None,
        }
    }
}

impl Drawable for DrawableType {
    fn kind(&self) -> &'static str {
        match self {
            Self::Stroke(s) => s.kind(),
            Self::Stamp(s) => s.kind(),
        }
    }

    fn style(&self) -> Style {
        match self {
            Self::Stroke(s) => s.style(),
            Self::Stamp(s) => s.style(),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Self::Stroke(s) => s.render(surface),
            Self::Stamp(s) => s.render(surface),
        }
    }
}

impl From<Stroke> for DrawableType {
    fn from(stroke: Stroke) -> Self {
        Self::Stroke(stroke)
    }
}

impl From<Stamp> for DrawableType {
    fn from(stamp: Stamp) -> Self {
        Self::Stamp(stamp)
    }
}
