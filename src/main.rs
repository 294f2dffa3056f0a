use eframe::egui;
use provider_search::app::ProviderSearchApp;
use provider_search::config;

fn main() -> eframe::Result {
    env_logger::init();

    let config = config::load_config().unwrap_or_else(|e| {
        log::warn!("Failed to load config, using defaults: {e:#}");
        config::AppConfig::default()
    });

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 700.0])
            .with_min_inner_size([700.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Provider Search",
        options,
        Box::new(|_cc| Ok(Box::new(ProviderSearchApp::new(config)))),
    )
}
