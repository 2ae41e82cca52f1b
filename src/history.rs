use log::debug;

use crate::drawable::{Drawable, DrawableType, Stroke};

/// Ordered log of committed drawables plus the redo buffer.
///
/// Insertion order is paint order. An entity lives in exactly one of the two
/// stacks; undo and redo move it between their tails without touching it.
#[derive(Debug, Default, Clone)]
pub struct History {
    /// Drawables currently on the canvas, bottom layer first
    entities: Vec<DrawableType>,
    /// Undone drawables, most recently undone last
    redo_stack: Vec<DrawableType>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a new drawable and drop everything that could have been redone.
    pub fn append(&mut self, entity: impl Into<DrawableType>) {
        let entity = entity.into();
        debug!(
            "History: append {} (discarding {} redo entries)",
            entity.kind(),
            self.redo_stack.len()
        );
        self.entities.push(entity);
        self.redo_stack.clear();
    }

    /// Move the newest drawable to the redo buffer. `None` when there is nothing to undo.
    pub fn undo(&mut self) -> Option<&DrawableType> {
        let entity = self.entities.pop()?;
        debug!("History: undo {}", entity.kind());
        self.redo_stack.push(entity);
        self.redo_stack.last()
    }

    /// Move the most recently undone drawable back. `None` when the redo buffer is empty.
    pub fn redo(&mut self) -> Option<&DrawableType> {
        let entity = self.redo_stack.pop()?;
        debug!("History: redo {}", entity.kind());
        self.entities.push(entity);
        self.entities.last()
    }

    /// Empty both stacks. Returns false if they were already empty.
    pub fn clear(&mut self) -> bool {
        if self.entities.is_empty() && self.redo_stack.is_empty() {
            return false;
        }
        self.entities.clear();
        self.redo_stack.clear();
        true
    }

    /// Drawables in paint order, including a stroke that is still being drawn.
    pub fn snapshot(&self) -> &[DrawableType] {
        &self.entities
    }

    pub fn redo_buffer(&self) -> &[DrawableType] {
        &self.redo_stack
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Returns true if there are drawables that can be undone
    pub fn can_undo(&self) -> bool {
        !self.entities.is_empty()
    }

    /// Returns true if there are drawables that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }

    /// The stroke at the tail of the history, which is the one being drawn.
    ///
    /// # Panics
    /// If the tail is missing or is not a stroke. Callers only reach this
    /// while a stroke gesture is in progress.
    pub(crate) fn tail_stroke_mut(&mut self) -> &mut Stroke {
        match self.entities.last_mut() {
            Some(DrawableType::Stroke(stroke)) => stroke,
            Some(other) => panic!("in-progress stroke expected at history tail, found {}", other.kind()),
            None => panic!("in-progress stroke expected at history tail, history is empty"),
        }
    }
}
