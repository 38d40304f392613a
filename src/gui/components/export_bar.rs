// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    csv, file,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");

            ui.checkbox(&mut export.include_headers, "Include headers");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }
    }

    // --- Output field + actions ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
        }

        // Copy
        if ui.button("Copy").clicked() {
            if app.rows.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else {
                let export = &app.state.options.export;
                let txt = csv::to_export_string(
                    &app.headers,
                    &app.rows,
                    export.include_headers,
                    export.format.delim(),
                );
                logf!("Copy: {} row(s)", app.rows.len());
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            if app.rows.is_empty() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text);
                    logf!(
                        "Export: Out path set → {}",
                        app.state.options.export.out_path().display()
                    );
                    app.out_path_dirty = false;
                }

                let export = &app.state.options.export;
                match file::write_export_single(export, &app.headers, &app.rows) {
                    Ok(path) => {
                        logf!("Export: OK → {}", path.display());
                        app.status(format!("Exported {}", path.display()));
                    }
                    Err(e) => {
                        loge!("Export: Error: {}", e);
                        app.status(format!("Export error: {e}"));
                    }
                }
            }
        }
    });
}
