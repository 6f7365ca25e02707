use eframe::egui;
use std::sync::Arc;

mod api;
mod app;
mod clipboard;
mod config;
mod error;
mod format;
mod repos;
mod state;
mod ui;

use api::HttpSearchClient;
use app::PartnerSearchApp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = config::load_config();
    let client = HttpSearchClient::new(&config.service.base_url, config.service.timeout())?;
    log::info!("Using analysis service at {}", client.endpoint());
    let initial_repo = config.search.initial_repo();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Partner Resource Search")
            .with_resizable(true)
            .with_inner_size([config.window.width, config.window.height]),
        ..Default::default()
    };

    eframe::run_native(
        "Partner Resource Search",
        options,
        Box::new(move |cc| Ok(Box::new(PartnerSearchApp::new(cc, Arc::new(client), initial_repo)))),
    )?;

    Ok(())
}
