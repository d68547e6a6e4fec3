//! Editor configuration.

use serde::{Deserialize, Serialize};

/// Default side length of newly created rectangles.
pub const DEFAULT_RECTANGLE_SIZE: i32 = 50;
/// Default radius of newly created circles.
pub const DEFAULT_CIRCLE_RADIUS: i32 = 50;

/// Tunables for shape creation and dragging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Side length of rectangles created by a primary click.
    pub rectangle_size: i32,
    /// Radius of circles created by a primary click.
    pub circle_radius: i32,
    /// Only drag the selected shape while a shape tool is armed.
    pub drag_requires_armed_tool: bool,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            rectangle_size: DEFAULT_RECTANGLE_SIZE,
            circle_radius: DEFAULT_CIRCLE_RADIUS,
            drag_requires_armed_tool: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EditorConfig::default();
        assert_eq!(config.rectangle_size, 50);
        assert_eq!(config.circle_radius, 50);
        assert!(config.drag_requires_armed_tool);
    }

    #[test]
    fn test_partial_deserialize_fills_defaults() {
        let config: EditorConfig =
            serde_json::from_str(r#"{ "drag_requires_armed_tool": false }"#).unwrap();
        assert_eq!(config.rectangle_size, DEFAULT_RECTANGLE_SIZE);
        assert!(!config.drag_requires_armed_tool);
    }
}
