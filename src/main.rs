//! MedVision screening prototype
//!
//! Main entry point: logging, configuration, then the desktop shell.

use anyhow::Context;
use iced::{Application, Settings};
use tracing_subscriber::EnvFilter;

use medvision::config;
use medvision::ui::MedVision;

fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Initialize logger
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("MEDVISION_LOG").unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Load configuration
    let config = config::load_config().context("Failed to load configuration")?;
    tracing::info!(title = %config.app.title, "starting MedVision");

    // Hand the loop to the UI shell
    MedVision::run(Settings::with_flags(config))
        .map_err(|error| anyhow::anyhow!("UI loop failed: {error}"))
}
