use eframe::egui;

use crate::config::AppConfig;
use crate::state::AppState;
use crate::ui::{panels, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ProviderSearchApp {
    pub state: AppState,
}

impl ProviderSearchApp {
    /// Build the app and run the initial VPN-gate → resolve → load pass.
    pub fn new(config: AppConfig) -> Self {
        let mut state = AppState::new(config);
        state.refresh();
        ProviderSearchApp { state }
    }
}

impl eframe::App for ProviderSearchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar + status ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: search controls ----
        egui::SidePanel::left("search_panel")
            .default_width(220.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::search_panel(ui, &mut self.state);
            });

        // ---- Central panel: results table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            table::results_table(ui, &self.state);
        });
    }
}
