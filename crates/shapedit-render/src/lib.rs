//! shapedit Render Library
//!
//! Renderer abstraction over the canvas draw commands. The default
//! implementation builds a vector scene that can be serialized to SVG.

mod renderer;
mod scene;

pub use renderer::{RenderContext, Renderer};
pub use scene::{SceneItem, SceneRenderer};
