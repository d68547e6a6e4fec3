//! Main application entry point.

use anyhow::Context;
use clap::Parser;
use shapedit_app::{App, AppConfig, parse_script};
use std::fs;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "shapedit")]
#[command(version, about = "Replay pointer and keyboard events against a shape canvas")]
struct Cli {
    /// Event script to replay
    script: PathBuf,

    /// TOML configuration file
    #[arg(long, short = 'c', value_name = "PATH")]
    config: Option<PathBuf>,

    /// Write the final frame as SVG
    #[arg(long, value_name = "PATH")]
    svg: Option<PathBuf>,

    /// Print the final draw commands as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    log::info!("Starting {}", config.title);

    let source = fs::read_to_string(&cli.script)
        .with_context(|| format!("Failed to read script from {}", cli.script.display()))?;
    let commands = parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", cli.script.display()))?;

    let mut app = App::with_config(config);
    app.run_script(&commands);
    log::info!(
        "Replayed {} events: {} shapes, selection {:?}, {} repaints",
        commands.len(),
        app.canvas().shapes().len(),
        app.canvas().selected(),
        app.repaint_count()
    );

    if let Some(path) = &cli.svg {
        fs::write(path, app.to_svg())
            .with_context(|| format!("Failed to write SVG to {}", path.display()))?;
        log::info!("Wrote frame to {}", path.display());
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&app.canvas().draw_commands())
            .context("Failed to serialize draw commands")?;
        println!("{json}");
    }

    Ok(())
}
