// Card Editor - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Config loading and logging initialisation
// 3. Headless export (--export-to) or eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` can use
// `crate::app::...`, `crate::ui::...` etc.
pub use card_editor::app;
pub use card_editor::core;
pub use card_editor::platform;
pub use card_editor::ui;
pub use card_editor::util;

use clap::Parser;
use std::path::PathBuf;

/// Card Editor - edit bilingual flashcard collections stored as JSON.
///
/// Opens a card file (an object with a "cards" array), fills in missing
/// language blocks, and exports the collection back to JSON.
#[derive(Parser, Debug)]
#[command(name = "card-editor", version, about)]
struct Cli {
    /// Card file to open on startup.
    path: Option<PathBuf>,

    /// Config file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    config: Option<PathBuf>,

    /// Load PATH and write its export to this file without opening a window.
    #[arg(short = 'e', long = "export-to", requires = "path")]
    export_to: Option<PathBuf>,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Config is read before logging so its level can take effect; its
    // problems are logged once the subscriber is up.
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| platform::config::PlatformPaths::resolve().config_file());
    let (config, config_warnings) = platform::config::load_config(&config_path);

    util::logging::init(
        cli.debug,
        config.log_level.as_deref(),
        config.log_file.as_deref(),
    );

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        config = %config_path.display(),
        "Card Editor starting"
    );
    for warning in &config_warnings {
        tracing::warn!(error = %warning, "Config warning");
    }

    if let (Some(input), Some(output)) = (&cli.path, &cli.export_to) {
        if let Err(e) = app::state::export_file(input, output, &config) {
            tracing::error!(error = %e, "Headless export failed");
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
        return;
    }

    let mut state = app::state::AppState::new(config, cli.debug);
    for warning in config_warnings {
        state.push_warning(warning.to_string());
    }
    state.pending_load = cli.path.clone();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(format!(
                "{} v{}",
                util::constants::APP_NAME,
                util::constants::APP_VERSION
            ))
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |_cc| Ok(Box::new(gui::CardEditorApp::new(state)))),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch Card Editor GUI: {e}");
        std::process::exit(1);
    }
}
