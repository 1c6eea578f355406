// src/main.rs
use anyhow::Result;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod analysis;
mod app;
mod chart;
mod extract;
mod state;
mod ui;

use app::SentiscopeApp;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("sentiscope=info")),
        )
        .init();

    tracing::info!("starting sentiscope");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1024.0, 768.0])
            .with_title("Sentiscope"),
        ..Default::default()
    };

    eframe::run_native(
        "Sentiscope",
        options,
        Box::new(|_cc| Box::new(SentiscopeApp::new())),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
