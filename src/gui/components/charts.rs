// src/gui/components/charts.rs
//
// Summary pies over the enriched records: loader usage and version-family
// coverage. Drawn straight with the painter; no plotting dependency.

use std::f32::consts::TAU;

use eframe::egui::{self, Color32, Pos2, Sense, Shape, Stroke, Vec2};

use crate::data::{family_coverage, loader_usage};
use crate::gui::app::App;

const PIE_DIAMETER: f32 = 150.0;
const ARC_STEP: f32 = 0.05; // radians per fan segment

const PALETTE: [Color32; 6] = [
    Color32::from_rgb(0x64, 0xB4, 0xFF),
    Color32::from_rgb(0xF0, 0xD2, 0x3C),
    Color32::from_rgb(0xDC, 0x61, 0x49),
    Color32::from_rgb(0x7C, 0xCE, 0x6B),
    Color32::from_rgb(0xC0, 0x8F, 0xE8),
    Color32::from_rgb(0xFF, 0xA5, 0x00),
];

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let usage = loader_usage(&app.records);
    let loader_slices: Vec<(String, usize)> = vec![
        (s!("Fabric only"), usage.fabric_only),
        (s!("Forge only"), usage.forge_only),
        (s!("Both"), usage.both),
        (s!("Neither"), usage.neither),
    ];

    let coverage = family_coverage(&app.records, &app.state.options.scrape.fields);

    ui.horizontal(|ui| {
        pie(ui, "Loader usage", &loader_slices);
        ui.add_space(24.0);
        pie(ui, "Version-family coverage", &coverage);
    });
}

fn pie(ui: &mut egui::Ui, title: &str, slices: &[(String, usize)]) {
    let total: usize = slices.iter().map(|(_, n)| n).sum();

    ui.vertical(|ui| {
        ui.label(egui::RichText::new(title).strong());

        if total == 0 {
            ui.label("(no data)");
            return;
        }

        ui.horizontal(|ui| {
            let (rect, _resp) =
                ui.allocate_exact_size(Vec2::splat(PIE_DIAMETER), Sense::hover());
            let painter = ui.painter();
            let center = rect.center();
            let radius = PIE_DIAMETER * 0.5 - 2.0;

            // 12 o'clock start, clockwise
            let mut angle = -TAU / 4.0;
            for (ix, (_, count)) in slices.iter().enumerate() {
                if *count == 0 {
                    continue;
                }
                let sweep = TAU * (*count as f32) / (total as f32);
                let color = PALETTE[ix % PALETTE.len()];
                // convex_polygon needs convex input; emit the slice in
                // quarter-turn chunks so a dominant slice stays valid.
                let mut drawn = 0.0;
                while drawn < sweep {
                    let chunk = (sweep - drawn).min(TAU / 4.0);
                    painter.add(Shape::convex_polygon(
                        fan_points(center, radius, angle + drawn, chunk),
                        color,
                        Stroke::NONE,
                    ));
                    drawn += chunk;
                }
                angle += sweep;
            }

            // Legend
            ui.vertical(|ui| {
                for (ix, (label, count)) in slices.iter().enumerate() {
                    let color = PALETTE[ix % PALETTE.len()];
                    let pct = 100.0 * (*count as f32) / (total as f32);
                    ui.colored_label(color, format!("■ {label}: {count} ({pct:.0}%)"));
                }
            });
        });
    });
}

/// Triangle-fan outline for one slice chunk: center plus the arc sampled
/// every ARC_STEP radians. Callers keep each chunk within a quarter turn.
fn fan_points(center: Pos2, radius: f32, start: f32, sweep: f32) -> Vec<Pos2> {
    let mut pts = vec![center];
    let steps = ((sweep / ARC_STEP).ceil() as usize).max(2);
    for i in 0..=steps {
        let a = start + sweep * (i as f32) / (steps as f32);
        pts.push(Pos2::new(
            center.x + radius * a.cos(),
            center.y + radius * a.sin(),
        ));
    }
    pts
}
