use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.colored_label(colors::ON_SURFACE, egui::RichText::new("Settings").size(28.0).strong());
    ui.add_space(16.0);

    let config = &state.config;
    let config_path = config
        .config_path()
        .map_or_else(|| "(none)".to_string(), |path| path.display().to_string());

    styles::card_frame().show(ui, |ui| {
        egui::Grid::new("settings_grid")
            .num_columns(2)
            .spacing([24.0, 10.0])
            .show(ui, |ui| {
                ui.colored_label(colors::ON_SURFACE_VARIANT, "Sync service");
                ui.colored_label(colors::ON_SURFACE, egui::RichText::new(config.backend_url()).monospace());
                ui.end_row();

                ui.colored_label(colors::ON_SURFACE_VARIANT, "Refresh interval");
                ui.colored_label(colors::ON_SURFACE, format!("{} s", config.poll_interval().as_secs()));
                ui.end_row();

                ui.colored_label(colors::ON_SURFACE_VARIANT, "Config file");
                ui.colored_label(colors::ON_SURFACE, egui::RichText::new(config_path).monospace());
                ui.end_row();
            });
    });
}
