//! Canvas controller: routes host input into the shape model.

use crate::config::EditorConfig;
use crate::input::{InputEvent, KeyEvent, MouseButton, PointerEvent};
use crate::paint::{DrawCommand, Surface};
use crate::registry::ShapeRegistry;
use crate::selection::{SelectionController, SelectionState};
use crate::shapes::{Position, ShapeId};
use crate::tools::PendingShapeKind;

/// Top-level facade the host UI talks to.
///
/// Every `handle_*` method returns `true` when the host should repaint.
#[derive(Debug, Clone, Default)]
pub struct CanvasController {
    registry: ShapeRegistry,
    selection: SelectionController,
    pending: PendingShapeKind,
    config: EditorConfig,
}

impl CanvasController {
    /// Create an empty canvas with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty canvas with the given settings.
    pub fn with_config(config: EditorConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn shapes(&self) -> &ShapeRegistry {
        &self.registry
    }

    pub fn selection_state(&self) -> SelectionState {
        self.selection.state()
    }

    pub fn selected(&self) -> Option<ShapeId> {
        self.selection.selected()
    }

    pub fn pending_shape_kind(&self) -> PendingShapeKind {
        self.pending
    }

    /// Arm the shape kind that the next primary click creates.
    pub fn set_pending_shape_kind(&mut self, kind: PendingShapeKind) {
        log::debug!("Pending shape kind: {kind:?}");
        self.pending = kind;
    }

    /// Dispatch any input event.
    pub fn handle(&mut self, event: &InputEvent) -> bool {
        match event {
            InputEvent::Pointer(pointer) => self.handle_pointer(*pointer),
            InputEvent::Key(key) => self.handle_key(key),
        }
    }

    /// Process a pointer event.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> bool {
        match event {
            PointerEvent::Down { position, button } => self.pointer_down(position, button),
            PointerEvent::Move { position } => self.pointer_move(position),
            PointerEvent::Up { .. } => {
                self.selection.release();
                false
            }
        }
    }

    /// Process a key event.
    pub fn handle_key(&mut self, event: &KeyEvent) -> bool {
        let KeyEvent::Pressed(key) = event;
        if key.is_delete() {
            self.selection.delete_selected(&mut self.registry);
        }
        true
    }

    fn pointer_down(&mut self, position: Position, button: MouseButton) -> bool {
        match button {
            MouseButton::Left => {
                self.selection.clear(&mut self.registry);
                self.create_pending_shape(position);
                true
            }
            MouseButton::Right => {
                // select_at clears any prior selection before hit-testing.
                self.selection.select_at(&mut self.registry, position);
                true
            }
            MouseButton::Middle => self.selection.clear(&mut self.registry),
        }
    }

    fn pointer_move(&mut self, position: Position) -> bool {
        if self.selection.selected().is_none() {
            return false;
        }
        if !self.config.drag_requires_armed_tool || self.pending.is_armed() {
            self.selection.drag_to(&mut self.registry, position);
        }
        true
    }

    fn create_pending_shape(&mut self, click: Position) -> Option<ShapeId> {
        match self.pending.instantiate(click, &self.config)? {
            Ok(shape) => {
                log::debug!(
                    "Created {} at ({}, {})",
                    shape.kind_name(),
                    shape.position().x,
                    shape.position().y
                );
                Some(self.registry.add(shape))
            }
            Err(e) => {
                log::warn!("Failed to create {:?}: {}", self.pending, e);
                None
            }
        }
    }

    /// Paint every shape, oldest first.
    pub fn paint(&self, surface: &mut dyn Surface) {
        for shape in self.registry.paint_order() {
            shape.paint(surface);
        }
    }

    /// Collect the draw commands for the current frame.
    pub fn draw_commands(&self) -> Vec<DrawCommand> {
        let mut commands = Vec::with_capacity(self.registry.len());
        self.paint(&mut commands);
        commands
    }
}
