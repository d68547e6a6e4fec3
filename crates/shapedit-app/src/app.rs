//! Application state and configuration.

use crate::script::ScriptCommand;
use anyhow::{Context, Result};
use kurbo::Size;
use serde::{Deserialize, Serialize};
use shapedit_core::{CanvasController, EditorConfig, ShapeColor};
use shapedit_render::{RenderContext, Renderer, SceneRenderer};
use std::fs;
use std::path::Path;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub background_color: ShapeColor,
    pub editor: EditorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "shapedit".to_string(),
            width: 500,
            height: 500,
            background_color: ShapeColor::rgb(255, 255, 255),
            editor: EditorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file. Missing fields take defaults.
    pub fn load(path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {}", path.display()))?;
        let config: AppConfig = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        log::info!("Loaded config from {}", path.display());
        log::debug!("Config: {:?}", config);
        Ok(config)
    }

    fn viewport_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Main application struct: a canvas plus the renderer that repaints it.
pub struct App {
    config: AppConfig,
    canvas: CanvasController,
    renderer: SceneRenderer,
    repaints: usize,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Create a new application with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    /// Create a new application with custom configuration.
    pub fn with_config(config: AppConfig) -> Self {
        let canvas = CanvasController::with_config(config.editor.clone());
        let mut app = Self {
            config,
            canvas,
            renderer: SceneRenderer::new(),
            repaints: 0,
        };
        app.repaint();
        app
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn canvas(&self) -> &CanvasController {
        &self.canvas
    }

    pub fn renderer(&self) -> &SceneRenderer {
        &self.renderer
    }

    /// Number of frames rendered so far, including the initial one.
    pub fn repaint_count(&self) -> usize {
        self.repaints
    }

    /// Apply one scripted action, repainting if the canvas asks for it.
    pub fn apply(&mut self, command: &ScriptCommand) {
        let needs_repaint = match command {
            ScriptCommand::Tool(kind) => {
                self.canvas.set_pending_shape_kind(*kind);
                false
            }
            ScriptCommand::Input(event) => self.canvas.handle(event),
        };
        if needs_repaint {
            self.repaint();
        }
    }

    /// Apply a sequence of actions in order.
    pub fn run_script(&mut self, commands: &[ScriptCommand]) {
        for command in commands {
            self.apply(command);
        }
    }

    /// Rebuild the scene from scratch.
    pub fn repaint(&mut self) {
        let ctx = RenderContext::new(&self.canvas, self.config.viewport_size())
            .with_background(self.config.background_color.into());
        self.renderer.build_scene(&ctx);
        self.repaints += 1;
    }

    /// The last rendered frame as SVG.
    pub fn to_svg(&self) -> String {
        self.renderer.to_svg()
    }
}
