//! Pending shape kind armed by the host's tool selector.

use crate::config::EditorConfig;
use crate::shapes::{Circle, Position, Rectangle, Shape, ShapeError};
use serde::{Deserialize, Serialize};

/// The shape that the next primary click will create.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PendingShapeKind {
    #[default]
    None,
    Rectangle,
    Circle,
}

impl PendingShapeKind {
    /// Whether a shape tool is armed.
    pub fn is_armed(self) -> bool {
        self != PendingShapeKind::None
    }

    /// Build the shape for a click at `click`, or `None` when no tool is armed.
    ///
    /// Rectangles are centered on the click; circles are placed with their
    /// bounding square offset by the full radius below-right of the click.
    pub fn instantiate(
        self,
        click: Position,
        config: &EditorConfig,
    ) -> Option<Result<Shape, ShapeError>> {
        match self {
            PendingShapeKind::None => None,
            PendingShapeKind::Rectangle => {
                Some(Rectangle::centered_on(click, config.rectangle_size).map(Shape::from))
            }
            PendingShapeKind::Circle => {
                Some(Circle::offset_from(click, config.circle_radius).map(Shape::from))
            }
        }
    }

    /// Parse a tool name as used by hosts ("rectangle", "circle", "none").
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "none" => Some(PendingShapeKind::None),
            "rectangle" | "rect" => Some(PendingShapeKind::Rectangle),
            "circle" => Some(PendingShapeKind::Circle),
            _ => None,
        }
    }
}
