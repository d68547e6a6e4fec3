//! Circle shape.

use super::{
    Position, ShapeColor, ShapeError, ShapeId, ShapeTrait, clamped_move, require_in_range,
    require_positive,
};
use crate::paint::{DrawCommand, Geometry, Surface};
use uuid::Uuid;

/// A circle anchored at the top-left of its bounding square.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub(crate) id: ShapeId,
    /// Top-left corner of the bounding square.
    position: Position,
    radius: i32,
    selected: bool,
}

impl Circle {
    pub const FILL: ShapeColor = ShapeColor::rgb(255, 255, 0);
    pub const OUTLINE: ShapeColor = ShapeColor::rgb(0, 0, 255);

    /// Create a new circle. The radius must be positive and the bounding
    /// square must stay within `i32` coordinates.
    pub fn new(position: Position, radius: i32) -> Result<Self, ShapeError> {
        let radius = require_positive("radius", radius)?;
        let diameter = radius
            .checked_mul(2)
            .ok_or(ShapeError::OutOfRange { what: "radius" })?;
        require_in_range("circle", position, diameter, diameter)?;
        Ok(Self {
            id: Uuid::new_v4(),
            position,
            radius,
            selected: false,
        })
    }

    /// Create a circle whose bounding square starts `radius` below-right of
    /// the click point. The circle is not centered on the click.
    pub fn offset_from(click: Position, radius: i32) -> Result<Self, ShapeError> {
        let position = click
            .checked_offset(radius, radius)
            .ok_or(ShapeError::OutOfRange { what: "circle" })?;
        Self::new(position, radius)
    }

    pub fn radius(&self) -> i32 {
        self.radius
    }

    fn diameter(&self) -> i32 {
        // Checked at construction.
        2 * self.radius
    }

    pub fn center(&self) -> Position {
        Position::new(self.position.x + self.radius, self.position.y + self.radius)
    }
}

impl ShapeTrait for Circle {
    fn id(&self) -> ShapeId {
        self.id
    }

    fn position(&self) -> Position {
        self.position
    }

    fn geometry(&self) -> Geometry {
        Geometry::Ellipse {
            x: self.position.x,
            y: self.position.y,
            width: self.diameter(),
            height: self.diameter(),
        }
    }

    fn contains_point(&self, point: Position) -> bool {
        // Open disk: points exactly on the circumference are outside.
        let center = self.center();
        let dx = i64::from(point.x) - i64::from(center.x);
        let dy = i64::from(point.y) - i64::from(center.y);
        let r = i64::from(self.radius);
        dx * dx + dy * dy < r * r
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
        let diameter = self.diameter();
        self.position = clamped_move(self.position, dx, dy, diameter, diameter);
    }
}
