use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.colored_label(colors::ON_SURFACE, egui::RichText::new("Peers").size(28.0).strong());
    ui.add_space(16.0);

    let peers = state
        .dashboard
        .as_ref()
        .and_then(|d| d.view())
        .map(|view| view.status.peers_connected);

    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(280.0);
        ui.colored_label(colors::ON_SURFACE_VARIANT, "Connected peers");
        ui.add_space(4.0);
        let value = peers.map_or_else(|| "–".to_string(), |n| n.to_string());
        ui.colored_label(colors::ON_SURFACE, egui::RichText::new(value).size(22.0).strong());
    });

    ui.add_space(24.0);
    if ui.add(styles::primary_button("Pair New Device")).clicked() {
        state.open_pairing();
    }
}
