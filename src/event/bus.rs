use std::cell::RefCell;

use super::{EventHandler, SketchEvent};

/// Broadcasts sketch events to registered handlers, in subscription order.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: impl EventHandler + 'static) {
        self.handlers.borrow_mut().push(Box::new(handler));
    }

    /// Emit an event to all registered handlers
    pub fn emit(&self, event: SketchEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(event);
        }
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.borrow().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn test_emit_reaches_every_handler_in_order() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let bus = EventBus::new();

        let first = Rc::clone(&seen);
        bus.subscribe(move |event: SketchEvent| first.borrow_mut().push((1, event)));
        let second = Rc::clone(&seen);
        bus.subscribe(move |event: SketchEvent| second.borrow_mut().push((2, event)));

        bus.emit(SketchEvent::CursorChanged);

        assert_eq!(
            *seen.borrow(),
            vec![(1, SketchEvent::CursorChanged), (2, SketchEvent::CursorChanged)]
        );
        assert_eq!(bus.handler_count(), 2);
    }
}
