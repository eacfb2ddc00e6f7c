//! Main application entry point.

use designer_app::{AppConfig, DesignerApp};

/// Config file picked up from the working directory when present.
const CONFIG_FILE: &str = "designer.json";

fn main() -> eframe::Result<()> {
    env_logger::init();
    log::info!("Starting Designer Panel");

    let config = AppConfig::load_or_default(CONFIG_FILE);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.title.clone())
            .with_inner_size([config.width, config.height]),
        ..Default::default()
    };

    let title = config.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(DesignerApp::new(config)))),
    )
}
