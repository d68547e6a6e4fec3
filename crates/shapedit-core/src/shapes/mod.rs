//! Shape definitions for the canvas.
//!
//! The domain is closed: only rectangles and circles exist. Each variant
//! carries an integer anchor position, a selection flag, and fixed colors.

mod circle;
mod rectangle;

pub use circle::Circle;
pub use rectangle::Rectangle;

use crate::paint::{Geometry, Surface};
use peniko::Color;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Shape construction errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("{what} must be positive, got {value}")]
    InvalidDimension { what: &'static str, value: i32 },
    #[error("{what} does not fit in canvas coordinates")]
    OutOfRange { what: &'static str },
}

/// Integer position in canvas coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this position by a delta, or `None` if it leaves the `i32` range.
    pub fn checked_offset(self, dx: i32, dy: i32) -> Option<Self> {
        Some(Self::new(self.x.checked_add(dx)?, self.y.checked_add(dy)?))
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ShapeColor {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 255)
    }

    /// Format as an SVG/CSS hex color (alpha dropped).
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<Color> for ShapeColor {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self {
            r: rgba.r,
            g: rgba.g,
            b: rgba.b,
            a: rgba.a,
        }
    }
}

impl From<ShapeColor> for Color {
    fn from(color: ShapeColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Reject non-positive dimensions at construction time.
pub(crate) fn require_positive(what: &'static str, value: i32) -> Result<i32, ShapeError> {
    if value > 0 {
        Ok(value)
    } else {
        Err(ShapeError::InvalidDimension { what, value })
    }
}

/// Check that a box anchored at `position` with the given extent is representable.
pub(crate) fn require_in_range(
    what: &'static str,
    position: Position,
    width: i32,
    height: i32,
) -> Result<(), ShapeError> {
    position
        .checked_offset(width, height)
        .map(|_| ())
        .ok_or(ShapeError::OutOfRange { what })
}

/// Translate a box anchored at `position`, clamping so its far edges stay
/// representable.
pub(crate) fn clamped_move(position: Position, dx: i32, dy: i32, width: i32, height: i32) -> Position {
    Position::new(
        position.x.saturating_add(dx).min(i32::MAX - width),
        position.y.saturating_add(dy).min(i32::MAX - height),
    )
}

/// Common trait for all shapes.
pub trait ShapeTrait {
    /// Get the unique identifier.
    fn id(&self) -> ShapeId;

    /// Get the anchor position (top-left of the bounding box).
    fn position(&self) -> Position;

    /// Get the drawable geometry in canvas coordinates.
    fn geometry(&self) -> Geometry;

    /// Check if a point lies inside this shape.
    fn contains_point(&self, point: Position) -> bool;

    /// Emit the draw command for this shape.
    fn paint(&self, surface: &mut dyn Surface);

    /// Whether the shape is currently selected.
    fn is_selected(&self) -> bool;

    fn select(&mut self);

    fn unselect(&mut self);

    /// Translate the shape by a delta. Clamped at the edges of the `i32` range.
    fn move_by(&mut self, dx: i32, dy: i32);
}

/// Enum wrapper for the two shape kinds.
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Rectangle(s) => s.id(),
            Shape::Circle(s) => s.id(),
        }
    }

    pub fn position(&self) -> Position {
        match self {
            Shape::Rectangle(s) => s.position(),
            Shape::Circle(s) => s.position(),
        }
    }

    pub fn geometry(&self) -> Geometry {
        match self {
            Shape::Rectangle(s) => s.geometry(),
            Shape::Circle(s) => s.geometry(),
        }
    }

    pub fn contains_point(&self, point: Position) -> bool {
        match self {
            Shape::Rectangle(s) => s.contains_point(point),
            Shape::Circle(s) => s.contains_point(point),
        }
    }

    pub fn paint(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Rectangle(s) => s.paint(surface),
            Shape::Circle(s) => s.paint(surface),
        }
    }

    pub fn is_selected(&self) -> bool {
        match self {
            Shape::Rectangle(s) => s.is_selected(),
            Shape::Circle(s) => s.is_selected(),
        }
    }

    pub fn select(&mut self) {
        match self {
            Shape::Rectangle(s) => s.select(),
            Shape::Circle(s) => s.select(),
        }
    }

    pub fn unselect(&mut self) {
        match self {
            Shape::Rectangle(s) => s.unselect(),
            Shape::Circle(s) => s.unselect(),
        }
    }

    pub fn move_by(&mut self, dx: i32, dy: i32) {
        match self {
            Shape::Rectangle(s) => s.move_by(dx, dy),
            Shape::Circle(s) => s.move_by(dx, dy),
        }
    }

    /// Short name of the shape kind, for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
        }
    }
}

impl From<Rectangle> for Shape {
    fn from(rect: Rectangle) -> Self {
        Shape::Rectangle(rect)
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}
