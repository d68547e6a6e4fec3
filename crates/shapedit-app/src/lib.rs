//! shapedit Application
//!
//! A headless host for the shapedit canvas: it replays scripted input
//! events, repaints on request, and writes out the final frame.

mod app;
mod script;

pub use app::{App, AppConfig};
pub use script::{ScriptCommand, ScriptError, parse_script};
