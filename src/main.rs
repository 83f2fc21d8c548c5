mod domain;
mod services;
mod ui;

use std::sync::Arc;

use anyhow::Result;
use eframe::egui;
use services::InMemoryRelationshipService;
use ui::LifeMapApp;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let runtime = tokio::runtime::Runtime::new()?;
    let relationships = Arc::new(InMemoryRelationshipService::new());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 800.0])
            .with_min_inner_size([480.0, 480.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Life Areas Management",
        options,
        Box::new(move |cc| Box::new(LifeMapApp::new(cc, runtime, relationships))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
