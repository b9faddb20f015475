//! Gomoku GUI
//!
//! Play freestyle Gomoku against the computer or another player.
//! Settings are read from `gomoku.toml` (or the file named by
//! `GOMOKU_CONFIG`); log verbosity follows `RUST_LOG`.

use std::path::PathBuf;

use gomoku::ui::GomokuApp;
use gomoku::GameConfig;
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_PATH: &str = "gomoku.toml";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config_path = std::env::var_os("GOMOKU_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = GameConfig::load_or_default(&config_path)?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(move |cc| Ok(Box::new(GomokuApp::new(cc, &config)?))),
    )?;
    Ok(())
}
