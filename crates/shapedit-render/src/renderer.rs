//! Renderer trait abstraction.

use kurbo::Size;
use peniko::Color;
use shapedit_core::CanvasController;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The canvas to render.
    pub canvas: &'a CanvasController,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Background color.
    pub background_color: Color,
    /// Stroke width of selection outlines.
    pub outline_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(canvas: &'a CanvasController, viewport_size: Size) -> Self {
        Self {
            canvas,
            viewport_size,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            outline_width: 1.0,
        }
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the selection outline width.
    pub fn with_outline_width(mut self, width: f64) -> Self {
        self.outline_width = width;
        self
    }
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the scene for a frame. Called once per repaint, from scratch.
    fn build_scene(&mut self, ctx: &RenderContext);

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
