use egui::Pos2;

use super::Drawable;
use crate::style::{Point, Style};
use crate::surface::Surface;

/// Freehand polyline built from sequential pointer samples.
///
/// The width is fixed when the stroke starts; every sample records that
/// width so a point on its own still says how it was drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    points: Vec<Point>,
    style: Style,
}

impl Stroke {
    /// Start a stroke at `start`.
    pub fn new(start: Pos2, style: Style) -> Self {
        Self {
            points: vec![Point::new(start, style.stroke_width)],
            style,
        }
    }

    /// Append a sample to the end of the stroke.
    pub fn extend(&mut self, pos: Pos2) {
        self.points.push(Point::new(pos, self.style.stroke_width));
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Drawable for Stroke {
    fn kind(&self) -> &'static str {
        "stroke"
    }

    fn style(&self) -> Style {
        self.style
    }

    fn render(&self, surface: &mut dyn Surface) {
        let path: Vec<Pos2> = self.points.iter().map(|p| p.pos).collect();
        surface.polyline(&path, self.style.stroke_width, self.style.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::{Color32, pos2};

    #[test]
    fn test_new_stroke_is_seeded_with_start() {
        let stroke = Stroke::new(pos2(10.0, 10.0), Style::new(Color32::BLACK, 3.0));
        assert_eq!(stroke.len(), 1);
        assert_eq!(stroke.points()[0], Point::new(pos2(10.0, 10.0), 3.0));
    }

    #[test]
    fn test_extend_keeps_start_width() {
        let mut stroke = Stroke::new(pos2(0.0, 0.0), Style::new(Color32::BLACK, 5.0));
        stroke.extend(pos2(1.0, 2.0));
        stroke.extend(pos2(3.0, 4.0));
        assert_eq!(stroke.len(), 3);
        assert!(stroke.points().iter().all(|p| p.stroke_width == 5.0));
        assert_eq!(stroke.points()[2].pos, pos2(3.0, 4.0));
    }
}
