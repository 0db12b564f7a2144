use chrono::Utc;
use eframe::egui;

use crate::egui_app::dashboard::{relative_time, DashboardView};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::shared::FileActivityEntry;

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.colored_label(colors::ON_SURFACE, egui::RichText::new("Sync").size(28.0).strong());
    ui.add_space(16.0);

    let Some(view) = state.dashboard.as_ref().and_then(|d| d.view()) else {
        ui.horizontal(|ui| {
            ui.spinner();
            ui.colored_label(colors::ON_SURFACE_VARIANT, "Loading status…");
        });
        return;
    };

    render_badges(ui, view);
    ui.add_space(4.0);
    ui.colored_label(
        colors::ON_SURFACE_VARIANT,
        egui::RichText::new(view.refreshed_label(Utc::now())).size(12.0),
    );
    ui.add_space(12.0);
    render_stats(ui, view);
    ui.add_space(24.0);

    ui.colored_label(colors::ON_SURFACE, egui::RichText::new("Recent Activity").size(18.0).strong());
    ui.add_space(8.0);

    if view.activity.is_empty() {
        ui.colored_label(colors::ON_SURFACE_VARIANT, "No files synced yet.");
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for entry in &view.activity {
                render_activity_row(ui, entry);
                ui.add_space(6.0);
            }
        });
}

fn badge(ui: &mut egui::Ui, text: &str, color: egui::Color32) {
    egui::Frame::new()
        .stroke(egui::Stroke::new(1.0, color))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::symmetric(10, 4))
        .show(ui, |ui| {
            ui.colored_label(color, egui::RichText::new(text).size(13.0));
        });
}

fn render_badges(ui: &mut egui::Ui, view: &DashboardView) {
    ui.horizontal(|ui| {
        let peer_color = if view.status.has_peers() {
            colors::STATUS_ONLINE
        } else {
            colors::STATUS_OFFLINE
        };
        badge(ui, view.peer_label(), peer_color);

        let sync_color = if view.status.is_syncing {
            colors::PRIMARY
        } else {
            colors::STATUS_OFFLINE
        };
        badge(ui, view.sync_label(), sync_color);
    });
}

fn stat_card(ui: &mut egui::Ui, title: &str, value: String) {
    styles::card_frame().show(ui, |ui| {
        ui.set_min_width(180.0);
        ui.colored_label(colors::ON_SURFACE_VARIANT, title);
        ui.add_space(4.0);
        ui.colored_label(colors::ON_SURFACE, egui::RichText::new(value).size(22.0).strong());
    });
}

fn render_stats(ui: &mut egui::Ui, view: &DashboardView) {
    ui.horizontal(|ui| {
        stat_card(ui, "Active Peers", view.status.peers_connected.to_string());
        stat_card(ui, "Last Sync", view.last_sync_label(Utc::now()));
        stat_card(ui, "Tracked Files", view.activity.len().to_string());
    });
}

fn render_activity_row(ui: &mut egui::Ui, entry: &FileActivityEntry) {
    styles::card_frame()
        .inner_margin(egui::Margin::symmetric(16, 10))
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.colored_label(colors::ON_SURFACE, &entry.path);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.colored_label(
                        colors::ON_SURFACE_VARIANT,
                        egui::RichText::new(entry.short_hash()).monospace(),
                    );
                    ui.add_space(12.0);
                    ui.colored_label(colors::ON_SURFACE_VARIANT, entry.size_label());
                    ui.add_space(12.0);
                    ui.colored_label(
                        colors::ON_SURFACE_VARIANT,
                        relative_time(entry.last_modified, Utc::now()),
                    );
                });
            });
        });
}
