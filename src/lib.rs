#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod engine;
pub mod models;
pub mod ui;

// Re-export commonly used types outside of crate (for the bins)
pub use models::{ModelCatalog, ModelCode};
pub use ui::App;

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Preselect an investment model (A, B or C)
    #[arg(long)]
    pub model: Option<ModelCode>,
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli, catalog: ModelCatalog) -> App {
    App::new(cc, args, catalog)
}
