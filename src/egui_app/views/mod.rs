use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::{AppPhase, NavSection};

pub mod loading_view;
pub mod onboarding_view;
pub mod dashboard_view;
pub mod pairing_view;
pub mod peers_view;
pub mod settings_view;

/// Navigation rail, only shown once the app is ready
pub fn render_nav_rail(ctx: &egui::Context, state: &mut AppState) {
    if state.phase() != AppPhase::Ready {
        return;
    }

    egui::SidePanel::left("nav_rail")
        .resizable(false)
        .exact_width(104.0)
        .frame(styles::nav_rail_frame())
        .show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.colored_label(
                    colors::PRIMARY,
                    egui::RichText::new("OverSync").size(16.0).strong(),
                );
                ui.add_space(32.0);

                for section in NavSection::ALL {
                    let selected = state.current_section == section;
                    let (fill, text_color) = if selected {
                        (colors::SECONDARY_CONTAINER, colors::ON_SURFACE)
                    } else {
                        (egui::Color32::TRANSPARENT, colors::ON_SURFACE_VARIANT)
                    };

                    let button = egui::Button::new(
                        egui::RichText::new(section.label()).color(text_color).size(14.0),
                    )
                    .fill(fill)
                    .corner_radius(egui::CornerRadius::same(16))
                    .min_size(egui::vec2(88.0, 36.0));

                    if ui.add(button).clicked() {
                        state.current_section = section;
                    }
                    ui.add_space(12.0);
                }
            });
        });
}

pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    egui::CentralPanel::default()
        .frame(styles::content_frame())
        .show(ctx, |ui| match state.phase() {
            AppPhase::Unknown => loading_view::render(ui),
            AppPhase::NeedsOnboarding => onboarding_view::render(ui, state),
            AppPhase::Ready => match state.current_section {
                NavSection::Sync => dashboard_view::render(ui, state),
                NavSection::Peers => peers_view::render(ui, state),
                NavSection::Settings => settings_view::render(ui, state),
            },
        });

    if state.pairing.is_open() {
        pairing_view::render(ctx, state);
    }
}
