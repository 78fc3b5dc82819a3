// src/gui/components/action_bar.rs
//
// Reload / Run pipeline buttons and the status line.

use eframe::egui;
use crate::gui::{actions, app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        let idle = !app.running();

        if ui.add_enabled(idle, egui::Button::new("Reload")).clicked() {
            logf!("UI: Reload");
            app.reload();
        }

        if ui.add_enabled(idle, egui::Button::new("Run pipeline"))
            .on_hover_text("Normalize the raw dump and correct placeholder packs from the catalog")
            .clicked()
        {
            actions::start_pipeline(app);
        }

        if app.running() {
            ui.spinner();
        }

        ui.separator();
        ui.label(app.status_text());
    });
}
