use eframe::egui::{self, Color32, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

// ---------------------------------------------------------------------------
// Results table (central panel)
// ---------------------------------------------------------------------------

/// Render the matching rows in the central panel.
pub fn results_table(ui: &mut Ui, state: &AppState) {
    let Some(export) = &state.export else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Load a provider export to begin  (File → Reload)");
        });
        return;
    };

    let Some(matches) = &state.matches else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Enter a search term to find providers");
        });
        return;
    };

    if matches.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(
                egui::RichText::new("No matching providers found.").color(Color32::GOLD),
            );
        });
        return;
    }

    let table = &export.table;
    let headers = &table.headers;

    egui::ScrollArea::horizontal()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            TableBuilder::new(ui)
                .striped(true)
                .resizable(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
                .columns(Column::auto().clip(true).at_least(60.0), headers.len())
                .header(20.0, |mut header| {
                    for name in headers {
                        header.col(|ui| {
                            ui.strong(name);
                        });
                    }
                })
                .body(|body| {
                    body.rows(18.0, matches.len(), |mut row| {
                        let record = &table.rows[matches[row.index()]];
                        for name in headers {
                            row.col(|ui| {
                                ui.label(record.get(name).map(String::as_str).unwrap_or(""));
                            });
                        }
                    });
                });
        });
}
