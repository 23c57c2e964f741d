// main.rs - Opens a window filled with the animated Game of Life background

use anyhow::{anyhow, Result};
use eframe::egui;
use tracing::info;

use life_background::config::WINDOW_SIZE;
use life_background::host::BackgroundApp;

fn main() -> Result<()> {
    init_tracing();
    info!("starting life background");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        "Life Background",
        options,
        Box::new(|_cc| Box::new(BackgroundApp::new())),
    )
    .map_err(|err| anyhow!("failed to run the background window: {err}"))
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
