use eframe::egui::{self, Color32, RichText, Ui};

use crate::data::filter::SearchMode;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / status bar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose export directory…").clicked() {
                choose_export_directory(state);
                ui.close_menu();
            }
            if ui.button("Reload").clicked() {
                state.refresh();
                ui.close_menu();
            }
        });

        ui.separator();

        if state.vpn_connected {
            ui.label(RichText::new("VPN active").color(Color32::DARK_GREEN));
        } else {
            ui.label(RichText::new("VPN not connected").color(Color32::RED));
        }

        ui.separator();

        if let Some(export) = &state.export {
            let file_name = export
                .source
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| export.source.display().to_string());
            ui.label(format!(
                "Loaded {file_name}  ({} records)",
                export.table.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Left side panel – search controls
// ---------------------------------------------------------------------------

/// Render the search panel: mode selector, query box, match count.
pub fn search_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Provider Search");
    ui.separator();

    if state.export.is_none() {
        ui.label("No export loaded.");
        return;
    }

    ui.strong("Search by");
    let mut mode_changed = false;
    for mode in [SearchMode::AnyColumn, SearchMode::NpiColumn] {
        mode_changed |= ui
            .radio_value(&mut state.mode, mode, mode.label())
            .changed();
    }

    ui.add_space(4.0);
    ui.strong("Search term");
    let response = ui.text_edit_singleline(&mut state.query);
    let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

    // Search runs on Enter, on the button, or when the mode flips under an
    // existing query — never on every keystroke.
    if ui.button("Search").clicked() || submitted || mode_changed {
        state.run_search();
    }

    if let Some(matches) = &state.matches {
        ui.add_space(4.0);
        ui.label(format!("{} matching provider(s)", matches.len()));
    }
}

// ---------------------------------------------------------------------------
// Folder dialog
// ---------------------------------------------------------------------------

fn choose_export_directory(state: &mut AppState) {
    let dir = rfd::FileDialog::new()
        .set_title("Choose export directory")
        .pick_folder();

    if let Some(dir) = dir {
        log::info!("Export directory set to {}", dir.display());
        state.set_data_dir(dir);
    }
}
