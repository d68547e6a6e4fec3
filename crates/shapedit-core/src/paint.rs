//! Draw-command output consumed by host rasterizers.
//!
//! The core never touches pixels. Shapes describe themselves as
//! [`DrawCommand`]s pushed onto a [`Surface`], in paint order.

use crate::shapes::{ShapeColor, ShapeId};
use kurbo::{BezPath, Ellipse, Rect, Shape as KurboShape};
use serde::{Deserialize, Serialize};

/// Geometry of a single draw command, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Geometry {
    /// Axis-aligned rectangle.
    Rect { x: i32, y: i32, width: i32, height: i32 },
    /// Ellipse inscribed in the given box.
    Ellipse { x: i32, y: i32, width: i32, height: i32 },
}

impl Geometry {
    /// Bounding box in floating-point canvas coordinates.
    ///
    /// Edges are summed in `f64`, so boxes touching the `i32` limits stay exact.
    pub fn bounds(&self) -> Rect {
        let (Geometry::Rect { x, y, width, height } | Geometry::Ellipse { x, y, width, height }) =
            *self;
        let (x, y) = (f64::from(x), f64::from(y));
        Rect::new(x, y, x + f64::from(width), y + f64::from(height))
    }

    /// Path outline for vector renderers.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Geometry::Rect { .. } => self.bounds().to_path(tolerance),
            Geometry::Ellipse { .. } => Ellipse::from_rect(self.bounds()).to_path(tolerance),
        }
    }
}

/// A single shape to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawCommand {
    pub id: ShapeId,
    pub geometry: Geometry,
    pub fill: ShapeColor,
    /// Outline color; `None` means no outline is drawn.
    pub outline: Option<ShapeColor>,
}

/// Sink for draw commands.
pub trait Surface {
    fn draw(&mut self, command: DrawCommand);
}

impl Surface for Vec<DrawCommand> {
    fn draw(&mut self, command: DrawCommand) {
        self.push(command);
    }
}
