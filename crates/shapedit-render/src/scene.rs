//! Vector scene built from canvas draw commands.

use crate::renderer::{RenderContext, Renderer};
use kurbo::{BezPath, Point, Rect};
use peniko::Color;
use shapedit_core::{DrawCommand, ShapeColor};

/// One filled (and optionally stroked) path.
#[derive(Debug, Clone)]
pub struct SceneItem {
    pub path: BezPath,
    pub fill: Color,
    /// Stroke color and width.
    pub stroke: Option<(Color, f64)>,
}

/// Renderer that collects paths in paint order.
#[derive(Debug, Clone, Default)]
pub struct SceneRenderer {
    items: Vec<SceneItem>,
    viewport: Rect,
    background: Option<Color>,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items of the last built scene, back to front.
    pub fn items(&self) -> &[SceneItem] {
        &self.items
    }

    fn item_for(command: &DrawCommand, outline_width: f64) -> SceneItem {
        SceneItem {
            path: command.geometry.to_path(0.1),
            fill: command.fill.into(),
            stroke: command.outline.map(|c| (c.into(), outline_width)),
        }
    }

    /// Serialize the last built scene as an SVG document.
    pub fn to_svg(&self) -> String {
        let (width, height) = (self.viewport.width(), self.viewport.height());
        let mut svg = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}">"#
        );
        svg.push('\n');
        if let Some(background) = self.background {
            svg.push_str(&format!(
                "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>\n",
                hex(background)
            ));
        }
        for item in &self.items {
            let stroke = match item.stroke {
                Some((color, width)) => format!(r#" stroke="{}" stroke-width="{}""#, hex(color), width),
                None => r#" stroke="none""#.to_string(),
            };
            svg.push_str(&format!(
                "  <path d=\"{}\" fill=\"{}\"{}/>\n",
                item.path.to_svg(),
                hex(item.fill),
                stroke
            ));
        }
        svg.push_str("</svg>\n");
        svg
    }
}

impl Renderer for SceneRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) {
        self.items = ctx
            .canvas
            .draw_commands()
            .iter()
            .map(|command| Self::item_for(command, ctx.outline_width))
            .collect();
        self.viewport = Rect::from_origin_size(Point::ZERO, ctx.viewport_size);
        self.background = Some(self.background_color(ctx));
        log::trace!("Built scene with {} items", self.items.len());
    }
}

fn hex(color: Color) -> String {
    ShapeColor::from(color).to_hex()
}
