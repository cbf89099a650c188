mod engine;
mod model;
mod ui;

use eframe::egui;
use log::info;

use crate::ui::app::TravelApp;
use crate::ui::settings_io::{load_settings, settings_path};

fn setup_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}

fn main() -> eframe::Result<()> {
    setup_logging();

    let path = settings_path();
    let settings = load_settings(&path);
    info!("Loaded settings from {}", path.display());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([960.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "GPTravel - Holiday Planner",
        options,
        Box::new(move |cc| Ok(Box::new(TravelApp::new(cc, settings, path)?))),
    )
}
