//! Naksha - occupancy grid map editor
//!
//! Usage:
//!   naksha                     # start empty, load via "Load Map"
//!   naksha maps/lab            # open a map folder at startup
//!   naksha -c naksha.toml --log-level debug

use std::path::PathBuf;

use clap::Parser;
use eframe::egui;

use naksha::app::MapEditorApp;
use naksha::{EditorConfig, MapEditor};

/// Edit ROS-style PGM+YAML occupancy grid maps
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Map folder (one .yaml + one .pgm) to open at startup
    map: Option<PathBuf>,

    /// Configuration file path (default: ./naksha.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log level override (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = EditorConfig::load_or_default(args.config.as_deref())?;

    let level = args
        .log_level
        .clone()
        .unwrap_or_else(|| config.logging.level.clone());
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    log::info!("Naksha v{} starting", env!("CARGO_PKG_VERSION"));
    log::info!(
        "Undo depth: {}",
        match config.editor.undo_depth {
            0 => "unbounded".to_string(),
            n => n.to_string(),
        }
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window.width, config.window.height])
            .with_maximized(config.window.maximized)
            .with_title("Map Editor"),
        ..Default::default()
    };

    let mut app = MapEditorApp::new(MapEditor::new(config));
    if let Some(dir) = &args.map {
        app.load_folder(dir);
    }

    eframe::run_native("Naksha", options, Box::new(|_cc| Ok(Box::new(app))))?;

    log::info!("Naksha stopped");
    Ok(())
}
