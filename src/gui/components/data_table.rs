// src/gui/components/data_table.rs
//
// Draws the live result table. Purely a view over App's headers/rows.

use eframe::egui::{self, Align, Layout, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

// Name and URL get room; flag columns stay narrow.
const WIDE_COLS: usize = 2;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(headers) = app.headers.clone() else {
        ui.label("No data yet — scrape a collection to fill the table.");
        return;
    };
    let cols = headers.len();

    let mut table = TableBuilder::new(ui)
        .striped(true)
        .min_scrolled_height(0.0)
        .id_salt(("results_table", cols));

    for ci in 0..cols {
        let w = if ci < WIDE_COLS { 220.0 } else { 120.0 };
        table = table.column(Column::initial(w).at_least(40.0).resizable(true).clip(true));
    }

    table
        .header(24.0, |mut header| {
            for h in &headers {
                header.col(|ui| {
                    ui.scope(|ui| {
                        ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                        ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                            ui.label(RichText::new(h).strong());
                        });
                    });
                });
            }
        })
        .body(|body| {
            body.rows(20.0, app.rows.len(), |mut row| {
                let row_idx = row.index();
                if let Some(data) = app.rows.get(row_idx) {
                    for ci in 0..cols {
                        let cell = data.get(ci).cloned().unwrap_or_default();
                        row.col(|ui| {
                            ui.scope(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Extend);
                                if ci == 1 {
                                    // Mod URL column
                                    ui.hyperlink(&cell);
                                } else {
                                    ui.with_layout(Layout::left_to_right(Align::Center), |ui| {
                                        ui.label(&cell);
                                    });
                                }
                            });
                        });
                    }
                }
            });
        });
}
