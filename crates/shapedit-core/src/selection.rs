//! Single-shape selection and drag state machine.

use crate::registry::ShapeRegistry;
use crate::shapes::{Position, Shape, ShapeId};

/// Selection/drag state.
///
/// The selected shape is held by id; the registry keeps ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing selected.
    #[default]
    Idle,
    /// A shape is selected but has not moved yet. `anchor` is the last
    /// pointer position of the active gesture, or `None` once released.
    Selected {
        id: ShapeId,
        anchor: Option<Position>,
    },
    /// The selected shape is following the pointer.
    Dragging { id: ShapeId, anchor: Position },
}

impl SelectionState {
    pub fn selected(&self) -> Option<ShapeId> {
        match *self {
            SelectionState::Idle => None,
            SelectionState::Selected { id, .. } | SelectionState::Dragging { id, .. } => Some(id),
        }
    }

    pub fn anchor(&self) -> Option<Position> {
        match *self {
            SelectionState::Idle => None,
            SelectionState::Selected { anchor, .. } => anchor,
            SelectionState::Dragging { anchor, .. } => Some(anchor),
        }
    }
}

/// Tracks at most one selected shape and its drag anchor.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    state: SelectionState,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    /// Id of the selected shape, if any.
    pub fn selected(&self) -> Option<ShapeId> {
        self.state.selected()
    }

    /// Last pointer position of the active drag gesture.
    pub fn drag_anchor(&self) -> Option<Position> {
        self.state.anchor()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, SelectionState::Dragging { .. })
    }

    /// Unselect the current shape, if any. Returns true if a selection was cleared.
    pub fn clear(&mut self, registry: &mut ShapeRegistry) -> bool {
        let Some(id) = self.state.selected() else {
            return false;
        };
        if let Some(shape) = registry.get_mut(id) {
            shape.unselect();
        }
        self.state = SelectionState::Idle;
        log::debug!("Cleared selection of {id}");
        true
    }

    /// Clear any prior selection, then select the topmost shape under
    /// `point` and anchor a drag there.
    pub fn select_at(&mut self, registry: &mut ShapeRegistry, point: Position) -> Option<ShapeId> {
        self.clear(registry);

        let id = registry.shape_at(point)?;
        let shape = registry.get_mut(id)?;
        shape.select();
        self.state = SelectionState::Selected {
            id,
            anchor: Some(point),
        };
        log::debug!("Selected {} {id} at ({}, {})", shape.kind_name(), point.x, point.y);
        Some(id)
    }

    /// Move the selected shape by the pointer delta since the last anchor,
    /// then re-anchor at `point`. Returns true if the shape moved.
    pub fn drag_to(&mut self, registry: &mut ShapeRegistry, point: Position) -> bool {
        let (id, anchor) = match self.state {
            SelectionState::Selected {
                id,
                anchor: Some(anchor),
            }
            | SelectionState::Dragging { id, anchor } => (id, anchor),
            _ => return false,
        };

        let Some(shape) = registry.get_mut(id) else {
            // Selected shape is gone; nothing left to drag.
            self.state = SelectionState::Idle;
            return false;
        };

        let dx = point.x.saturating_sub(anchor.x);
        let dy = point.y.saturating_sub(anchor.y);
        shape.move_by(dx, dy);
        self.state = SelectionState::Dragging { id, anchor: point };
        log::trace!("Dragged {id} by ({dx}, {dy})");
        true
    }

    /// End the drag gesture. The shape stays selected.
    pub fn release(&mut self) {
        if let Some(id) = self.state.selected() {
            self.state = SelectionState::Selected { id, anchor: None };
        }
    }

    /// Unselect and remove the selected shape. No-op when nothing is selected.
    pub fn delete_selected(&mut self, registry: &mut ShapeRegistry) -> Option<Shape> {
        let id = self.state.selected()?;
        self.state = SelectionState::Idle;

        let mut removed = registry.remove(id)?;
        removed.unselect();
        log::debug!("Deleted {} {id}", removed.kind_name());
        Some(removed)
    }
}
