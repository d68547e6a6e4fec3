//! Ordered shape storage.

use crate::shapes::{Position, Shape, ShapeId};

/// Owns every shape on the canvas, in z-order (back to front).
///
/// Creation order is paint order: the most recently added shape is drawn
/// last and wins hit-tests on overlap.
#[derive(Debug, Clone, Default)]
pub struct ShapeRegistry {
    shapes: Vec<Shape>,
}

impl ShapeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a shape on top of all others. Returns its id.
    pub fn add(&mut self, shape: Shape) -> ShapeId {
        let id = shape.id();
        self.shapes.push(shape);
        id
    }

    /// Remove a shape by identity. Absent ids are a no-op.
    pub fn remove(&mut self, id: ShapeId) -> Option<Shape> {
        let index = self.shapes.iter().position(|s| s.id() == id)?;
        Some(self.shapes.remove(index))
    }

    /// Get a shape by ID.
    pub fn get(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Get a mutable reference to a shape by ID.
    pub fn get_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn contains(&self, id: ShapeId) -> bool {
        self.get(id).is_some()
    }

    /// Shapes oldest first, for painting.
    pub fn paint_order(&self) -> impl DoubleEndedIterator<Item = &Shape> + ExactSizeIterator {
        self.shapes.iter()
    }

    /// Shapes newest first, for resolving overlaps topmost-first.
    pub fn hit_test_order(&self) -> impl Iterator<Item = &Shape> {
        self.shapes.iter().rev()
    }

    /// Find the topmost shape containing a point.
    pub fn shape_at(&self, point: Position) -> Option<ShapeId> {
        self.hit_test_order()
            .find(|s| s.contains_point(point))
            .map(Shape::id)
    }

    /// Get the number of shapes.
    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Circle, Rectangle};

    fn rect(x: i32, y: i32, size: i32) -> Shape {
        Rectangle::new(Position::new(x, y), size, size).unwrap().into()
    }

    #[test]
    fn test_add_and_remove() {
        let mut registry = ShapeRegistry::new();
        let id = registry.add(rect(0, 0, 10));
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(id));

        let removed = registry.remove(id);
        assert!(removed.is_some());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut registry = ShapeRegistry::new();
        let id = registry.add(rect(0, 0, 10));
        registry.remove(id);
        assert!(registry.remove(id).is_none());
        assert!(registry.remove(ShapeId::new_v4()).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_paint_and_hit_test_order() {
        let mut registry = ShapeRegistry::new();
        let id1 = registry.add(rect(0, 0, 10));
        let id2 = registry.add(rect(5, 5, 10));
        let id3 = registry.add(Circle::new(Position::new(0, 0), 3).unwrap().into());

        let painted: Vec<_> = registry.paint_order().map(Shape::id).collect();
        assert_eq!(painted, vec![id1, id2, id3]);

        let hit: Vec<_> = registry.hit_test_order().map(Shape::id).collect();
        assert_eq!(hit, vec![id3, id2, id1]);

        // Restartable: a second pass yields the same sequence.
        let again: Vec<_> = registry.paint_order().map(Shape::id).collect();
        assert_eq!(again, painted);
    }

    #[test]
    fn test_remove_keeps_relative_order() {
        let mut registry = ShapeRegistry::new();
        let id1 = registry.add(rect(0, 0, 10));
        let id2 = registry.add(rect(0, 0, 10));
        let id3 = registry.add(rect(0, 0, 10));
        registry.remove(id2);

        let painted: Vec<_> = registry.paint_order().map(Shape::id).collect();
        assert_eq!(painted, vec![id1, id3]);
    }

    #[test]
    fn test_shape_at_prefers_topmost() {
        let mut registry = ShapeRegistry::new();
        let id1 = registry.add(rect(0, 0, 100));
        let id2 = registry.add(rect(50, 50, 100));

        assert_eq!(registry.shape_at(Position::new(75, 75)), Some(id2));
        assert_eq!(registry.shape_at(Position::new(25, 25)), Some(id1));
        assert_eq!(registry.shape_at(Position::new(500, 500)), None);
    }

    #[test]
    fn test_shape_at_non_overlapping() {
        let mut registry = ShapeRegistry::new();
        let ids: Vec<_> = (0..4).map(|i| registry.add(rect(i * 20, 0, 10))).collect();

        for (i, id) in ids.iter().enumerate() {
            let x = i as i32 * 20 + 5;
            assert_eq!(registry.shape_at(Position::new(x, 5)), Some(*id));
            // Gap between squares.
            assert_eq!(registry.shape_at(Position::new(x + 10, 5)), None);
        }
    }
}
