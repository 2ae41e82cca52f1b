use egui::{Context, PointerButton, Pos2, Rect};

/// Pointer events in canvas coordinates (origin at the canvas' top-left corner).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Pointer moved onto the canvas
    PointerEnter { pos: Pos2 },
    /// Pointer left the canvas (or the window)
    PointerLeave,
    /// Primary button pressed over the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved over the canvas, or anywhere while a press that began on it is held
    PointerMove { pos: Pos2 },
    /// Primary button released after a press that began on the canvas
    PointerUp { pos: Pos2 },
}

/// Handles converting raw egui input into canvas `InputEvent`s
#[derive(Debug)]
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    inside: bool,
    pressed_on_canvas: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            inside: false,
            pressed_on_canvas: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        Pos2::ZERO + (pos - self.canvas_rect.min)
    }

    /// Process raw egui input and generate canvas events
    pub fn process_input(&mut self, ctx: &Context) -> Vec<InputEvent> {
        let (hover, pressed, released) = ctx.input(|input| {
            (
                input.pointer.hover_pos(),
                input.pointer.button_pressed(PointerButton::Primary),
                input.pointer.button_released(PointerButton::Primary),
            )
        });
        self.translate(hover, pressed, released)
    }

    /// Turns one frame of pointer state (screen coordinates) into events.
    pub fn translate(&mut self, hover: Option<Pos2>, pressed: bool, released: bool) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside_now = hover.is_some_and(|pos| self.canvas_rect.contains(pos));
        if let Some(pos) = hover {
            let local = self.to_canvas(pos);
            if inside_now && !self.inside {
                events.push(InputEvent::PointerEnter { pos: local });
            }
            if !inside_now && self.inside {
                events.push(InputEvent::PointerLeave);
            }
            if Some(pos) != self.last_pointer_pos && (inside_now || self.pressed_on_canvas) {
                events.push(InputEvent::PointerMove { pos: local });
            }
        } else if self.inside {
            events.push(InputEvent::PointerLeave);
        }
        self.inside = inside_now;
        if hover.is_some() {
            self.last_pointer_pos = hover;
        }

        if pressed && inside_now {
            if let Some(pos) = hover {
                events.push(InputEvent::PointerDown { pos: self.to_canvas(pos) });
                self.pressed_on_canvas = true;
            }
        }
        if released && self.pressed_on_canvas {
            // The pointer may have left the window; release where it was last seen.
            if let Some(pos) = hover.or(self.last_pointer_pos) {
                events.push(InputEvent::PointerUp { pos: self.to_canvas(pos) });
            }
            self.pressed_on_canvas = false;
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use egui::pos2;

    fn handler() -> InputHandler {
        InputHandler::new(Rect::from_min_size(pos2(100.0, 50.0), egui::vec2(256.0, 256.0)))
    }

    #[test]
    fn test_enter_move_down_up_in_canvas_coordinates() {
        let mut input = handler();
        assert_eq!(
            input.translate(Some(pos2(110.0, 60.0)), true, false),
            vec![
                InputEvent::PointerEnter { pos: pos2(10.0, 10.0) },
                InputEvent::PointerMove { pos: pos2(10.0, 10.0) },
                InputEvent::PointerDown { pos: pos2(10.0, 10.0) },
            ]
        );
        assert_eq!(
            input.translate(Some(pos2(120.0, 60.0)), false, true),
            vec![
                InputEvent::PointerMove { pos: pos2(20.0, 10.0) },
                InputEvent::PointerUp { pos: pos2(20.0, 10.0) },
            ]
        );
    }

    #[test]
    fn test_drag_outside_keeps_reporting_moves() {
        let mut input = handler();
        input.translate(Some(pos2(110.0, 60.0)), true, false);
        assert_eq!(
            input.translate(Some(pos2(50.0, 60.0)), false, false),
            vec![
                InputEvent::PointerLeave,
                InputEvent::PointerMove { pos: pos2(-50.0, 10.0) },
            ]
        );
        assert_eq!(
            input.translate(None, false, true),
            vec![InputEvent::PointerUp { pos: pos2(-50.0, 10.0) }]
        );
    }

    #[test]
    fn test_release_without_canvas_press_is_dropped() {
        let mut input = handler();
        input.translate(Some(pos2(10.0, 10.0)), true, false);
        let events = input.translate(Some(pos2(110.0, 60.0)), false, true);
        assert_eq!(
            events,
            vec![
                InputEvent::PointerEnter { pos: pos2(10.0, 10.0) },
                InputEvent::PointerMove { pos: pos2(10.0, 10.0) },
            ]
        );
    }
}
