//! shapedit Core Library
//!
//! Platform-agnostic shape model and pointer-interaction state machine for
//! the shapedit canvas. Hosts feed input events into a [`CanvasController`]
//! and repaint from the draw commands it emits.

pub mod canvas;
pub mod config;
pub mod input;
pub mod paint;
pub mod registry;
pub mod selection;
pub mod shapes;
pub mod tools;

pub use canvas::CanvasController;
pub use config::EditorConfig;
pub use input::{InputEvent, Key, KeyEvent, MouseButton, PointerEvent};
pub use paint::{DrawCommand, Geometry, Surface};
pub use registry::ShapeRegistry;
pub use selection::{SelectionController, SelectionState};
pub use shapes::{Circle, Position, Rectangle, Shape, ShapeColor, ShapeError, ShapeId, ShapeTrait};
pub use tools::PendingShapeKind;
