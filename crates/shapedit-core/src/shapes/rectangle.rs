//! Rectangle shape.

use super::{
    Position, ShapeColor, ShapeError, ShapeId, ShapeTrait, clamped_move, require_in_range,
    require_positive,
};
use crate::paint::{DrawCommand, Geometry, Surface};
use uuid::Uuid;

/// An axis-aligned rectangle.
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    pub(crate) id: ShapeId,
    /// Top-left corner position.
    position: Position,
    width: i32,
    height: i32,
    selected: bool,
}

impl Rectangle {
    pub const FILL: ShapeColor = ShapeColor::rgb(255, 0, 255);
    pub const OUTLINE: ShapeColor = ShapeColor::rgb(255, 0, 0);

    /// Create a new rectangle. Width and height must be positive and the
    /// far corner must stay within `i32` coordinates.
    pub fn new(position: Position, width: i32, height: i32) -> Result<Self, ShapeError> {
        let width = require_positive("width", width)?;
        let height = require_positive("height", height)?;
        require_in_range("rectangle", position, width, height)?;
        Ok(Self {
            id: Uuid::new_v4(),
            position,
            width,
            height,
            selected: false,
        })
    }

    /// Create a `size`-by-`size` square centered on a click point.
    pub fn centered_on(click: Position, size: i32) -> Result<Self, ShapeError> {
        let half = size / 2;
        let position = click
            .checked_offset(-half, -half)
            .ok_or(ShapeError::OutOfRange { what: "rectangle" })?;
        Self::new(position, size, size)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }
}

impl ShapeTrait for Rectangle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn geometry(&self) -> Geometry {
        Geometry::Rect {
            x: self.position.x,
            y: self.position.y,
            width: self.width,
            height: self.height,
        }
    }

    fn contains_point(&self, point: Position) -> bool {
        // Half-open on both axes: the right and bottom edges are outside.
        let (x, y) = (i64::from(point.x), i64::from(point.y));
        let (px, py) = (i64::from(self.position.x), i64::from(self.position.y));
        x >= px && x < px + i64::from(self.width) && y >= py && y < py + i64::from(self.height)
    }

    fn paint(&self, surface: &mut dyn Surface) {
        surface.draw(DrawCommand {
            id: self.id,
            geometry: self.geometry(),
            fill: Self::FILL,
            outline: self.selected.then_some(Self::OUTLINE),
        });
    }

    fn is_selected(&self) -> bool {
        self.selected
    }

    fn select(&mut self) {
        self.selected = true;
    }

    fn unselect(&mut self) {
        self.selected = false;
    }

    fn move_by(&mut self, dx: i32, dy: i32) {
        self.position = clamped_move(self.position, dx, dy, self.width, self.height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_creation() {
        let rect = Rectangle::new(Position::new(10, 20), 100, 50).unwrap();
        assert_eq!(rect.position(), Position::new(10, 20));
        assert_eq!(rect.width(), 100);
        assert_eq!(rect.height(), 50);
        assert!(!rect.is_selected());
    }

    #[test]
    fn test_rejects_non_positive_size() {
        assert!(Rectangle::new(Position::new(0, 0), 0, 10).is_err());
        assert_eq!(
            Rectangle::new(Position::new(0, 0), 10, -3),
            Err(ShapeError::InvalidDimension { what: "height", value: -3 })
        );
    }

    #[test]
    fn test_rejects_out_of_range_geometry() {
        assert_eq!(
            Rectangle::new(Position::new(i32::MAX - 5, 0), 10, 10),
            Err(ShapeError::OutOfRange { what: "rectangle" })
        );
        assert!(Rectangle::centered_on(Position::new(i32::MIN + 3, 0), 50).is_err());
        assert!(Rectangle::centered_on(Position::new(0, i32::MAX - 3), 50).is_err());
        assert!(Rectangle::new(Position::new(i32::MAX - 10, i32::MIN), 10, 10).is_ok());
    }

    #[test]
    fn test_centered_on_click() {
        let rect = Rectangle::centered_on(Position::new(100, 100), 50).unwrap();
        assert_eq!(rect.position(), Position::new(75, 75));
        assert_eq!(rect.width(), 50);
        assert_eq!(rect.height(), 50);
        assert!(rect.contains_point(Position::new(75, 75)));
        assert!(!rect.contains_point(Position::new(125, 125)));
    }

    #[test]
    fn test_containment_is_half_open() {
        let rect = Rectangle::new(Position::new(0, 0), 10, 20).unwrap();
        assert!(rect.contains_point(Position::new(0, 0)));
        assert!(rect.contains_point(Position::new(9, 19)));
        assert!(!rect.contains_point(Position::new(10, 0)));
        assert!(!rect.contains_point(Position::new(0, 20)));
        assert!(!rect.contains_point(Position::new(-1, 5)));
    }

    #[test]
    fn test_move_is_additive() {
        let mut stepped = Rectangle::new(Position::new(0, 0), 10, 10).unwrap();
        stepped.move_by(3, 0);
        stepped.move_by(0, 4);

        let mut single = Rectangle::new(Position::new(0, 0), 10, 10).unwrap();
        single.move_by(3, 4);

        assert_eq!(stepped.position(), single.position());
        assert_eq!(stepped.position(), Position::new(3, 4));
    }

    #[test]
    fn test_move_clamps_at_extremes() {
        let mut rect = Rectangle::new(Position::new(0, 0), 10, 20).unwrap();
        rect.move_by(i32::MAX, i32::MAX);
        assert_eq!(rect.position(), Position::new(i32::MAX - 10, i32::MAX - 20));
        assert!(rect.contains_point(Position::new(i32::MAX - 1, i32::MAX - 1)));

        rect.move_by(i32::MIN, i32::MIN);
        rect.move_by(i32::MIN, 0);
        assert_eq!(rect.position().x, i32::MIN);
    }

    #[test]
    fn test_select_is_idempotent() {
        let mut rect = Rectangle::new(Position::new(0, 0), 10, 10).unwrap();
        rect.select();
        rect.select();
        assert!(rect.is_selected());
        rect.unselect();
        rect.unselect();
        assert!(!rect.is_selected());
    }

    #[test]
    fn test_paint_outline_only_when_selected() {
        let mut rect = Rectangle::new(Position::new(1, 2), 3, 4).unwrap();
        let mut commands: Vec<DrawCommand> = Vec::new();
        rect.paint(&mut commands);
        rect.select();
        rect.paint(&mut commands);

        assert_eq!(commands.len(), 2);
        assert_eq!(commands[0].fill, Rectangle::FILL);
        assert_eq!(commands[0].outline, None);
        assert_eq!(commands[1].outline, Some(Rectangle::OUTLINE));
        assert_eq!(
            commands[1].geometry,
            Geometry::Rect { x: 1, y: 2, width: 3, height: 4 }
        );
    }
}
