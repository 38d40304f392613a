// src/gui/app.rs
use std::{
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::state::AppState,
    core::net::Client,
    data::{self, ModRecord},
};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Modrinth Collection Scraper",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    pub client: Client,

    // URL text field UX (applied to options.scrape.url on SCRAPE)
    pub url_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // enriched records from the last run, plus their table projection
    pub records: Vec<ModRecord>,
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // status/progress
    pub status: Arc<Mutex<String>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let url_text = state.options.scrape.url.clone();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        logf!("Init: default url={url_text}");

        Self {
            state,
            client: Client::default(),
            url_text,
            out_path_text,
            out_path_dirty: false,
            records: Vec::new(),
            headers: None,
            rows: Vec::new(),
            status: Arc::new(Mutex::new(s!("Idle"))),
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Re-project records → headers/rows with the current field selection.
    /// Cheap; runs after a scrape and after any checkbox change.
    pub fn rebuild_view(&mut self) {
        let ds = data::to_dataset(&self.records, &self.state.options.scrape.fields);
        self.headers = ds.headers;
        self.rows = ds.rows;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading("Modrinth Collection Scraper");
            ui.separator();

            crate::gui::components::controls::draw(ui, self);

            ui.separator();

            crate::gui::components::export_bar::draw(ui, self);

            ui.separator();

            let table_h = if self.state.gui.show_charts {
                ui.available_height() - 220.0
            } else {
                ui.available_height()
            };
            egui::ScrollArea::horizontal()
                .id_salt("table_hscroll")
                .max_height(table_h.max(120.0))
                .show(ui, |ui| {
                    crate::gui::components::data_table::draw(ui, self);
                });

            if self.state.gui.show_charts && !self.records.is_empty() {
                ui.separator();
                crate::gui::components::charts::draw(ui, self);
            }
        });
    }
}
