// src/gui/components/controls.rs
//
// URL input, field checkboxes and the SCRAPE trigger.

use eframe::egui;

use crate::{
    config::consts::{VERSION_FAMILIES, family_label},
    gui::app::App,
    gui::progress::GuiProgress,
    scrape,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.label("Collection URL:");
        ui.add(
            egui::TextEdit::singleline(&mut app.url_text)
                .desired_width(420.0)
                .font(egui::TextStyle::Monospace),
        );
    });

    ui.label("Select fields to extract:");

    let mut selection_changed = false;
    ui.horizontal(|ui| {
        let fields = &mut app.state.options.scrape.fields;

        // Accepted, but loader columns stay regardless; see FieldOptions.
        ui.checkbox(&mut fields.include_fabric, "Include Fabric Modloader");
        ui.checkbox(&mut fields.include_forge, "Include Forge Modloader");

        for (ix, prefix) in VERSION_FAMILIES.iter().enumerate() {
            if let Some(flag) = fields.families.get_mut(ix) {
                if ui.checkbox(flag, family_label(prefix)).changed() {
                    selection_changed = true;
                }
            }
        }

        ui.checkbox(&mut app.state.gui.show_charts, "Show charts");
    });
    if selection_changed && !app.records.is_empty() {
        // Family toggles change which columns exist; reproject.
        app.rebuild_view();
    }

    ui.horizontal(|ui| {
        let red = egui::Color32::from_rgb(220, 30, 30);
        let black = egui::Color32::BLACK;
        if ui
            .add(
                egui::Button::new(egui::RichText::new("SCRAPE").color(black).strong())
                    .fill(red),
            )
            .clicked()
        {
            run_scrape(app);
        }

        let status = app.status.lock().unwrap().clone();
        ui.label(format!("Status: {status}"));
    });
}

fn run_scrape(app: &mut App) {
    app.state.options.scrape.url = app.url_text.trim().to_string();

    logf!("Scrape: Begin url={}", app.state.options.scrape.url);

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the scrape happens ←
    match scrape::run(&app.client, &app.state.options.scrape, Some(&mut prog)) {
        Ok(records) => {
            logf!("Scrape: OK, {} record(s)", records.len());
            app.records = records;
            app.rebuild_view();
            if app.records.is_empty() {
                app.status("No mod data fetched");
            }
        }
        Err(e) => {
            loge!("Scrape: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
