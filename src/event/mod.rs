mod bus;

pub use bus::EventBus;

/// Signals telling collaborators the visible canvas is stale.
///
/// Neither carries a payload: subscribers read the current state from the
/// sketch when they repaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SketchEvent {
    /// History or an in-progress stroke changed.
    DrawingChanged,
    /// Only the tool preview moved, appeared or disappeared.
    CursorChanged,
}

pub trait EventHandler {
    fn handle_event(&mut self, event: SketchEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(SketchEvent),
{
    fn handle_event(&mut self, event: SketchEvent) {
        self(event)
    }
}
