use eframe::egui;

use crate::egui_app::theme::colors;

/// Shown while the startup probe is in flight
pub fn render(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 40.0);
        ui.spinner();
        ui.add_space(12.0);
        ui.colored_label(colors::ON_SURFACE_VARIANT, "Connecting to sync service…");
    });
}
