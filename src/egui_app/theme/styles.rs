//! Theme Styling Functions
//!
//! Helper functions for applying the palette consistently across views.

use eframe::egui::{self, Color32, CornerRadius, Stroke};
use super::colors;

/// Apply the global theme to the egui context
pub fn apply_global_theme(ctx: &egui::Context) {
    let mut style = (*ctx.style()).clone();

    // Window styling
    style.visuals.window_fill = colors::SURFACE_CONTAINER_HIGH;
    style.visuals.window_stroke = Stroke::new(1.0, colors::OUTLINE_VARIANT);

    // Panel styling
    style.visuals.panel_fill = colors::SURFACE;

    // Widget styling
    style.visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, colors::ON_SURFACE);
    style.visuals.widgets.inactive.bg_fill = colors::SURFACE_CONTAINER_HIGH;
    style.visuals.widgets.inactive.fg_stroke = Stroke::new(1.0, colors::ON_SURFACE);
    style.visuals.widgets.hovered.bg_fill = colors::SECONDARY_CONTAINER;
    style.visuals.widgets.active.bg_fill = colors::PRIMARY;
    style.visuals.widgets.active.fg_stroke = Stroke::new(1.0, colors::ON_PRIMARY);

    style.visuals.selection.bg_fill = colors::SECONDARY_CONTAINER;
    style.visuals.selection.stroke = Stroke::new(1.0, colors::PRIMARY);

    ctx.set_style(style);
}

/// Frame for the navigation rail
pub fn nav_rail_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE_CONTAINER)
        .stroke(Stroke::new(1.0, colors::OUTLINE_VARIANT))
        .inner_margin(egui::Margin::symmetric(8, 24))
}

/// Frame for the main content area
pub fn content_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE)
        .inner_margin(egui::Margin::same(24))
}

/// Frame for the onboarding card
pub fn wizard_card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE_CONTAINER)
        .stroke(Stroke::new(1.0, colors::OUTLINE_VARIANT))
        .corner_radius(CornerRadius::same(32))
        .inner_margin(egui::Margin::same(32))
}

/// Frame for dashboard stat cards and activity rows
pub fn card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE_CONTAINER_HIGH)
        .stroke(Stroke::new(1.0, colors::OUTLINE_VARIANT))
        .corner_radius(CornerRadius::same(20))
        .inner_margin(egui::Margin::same(16))
}

/// Frame for the pairing dialog
pub fn modal_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(colors::SURFACE_CONTAINER_HIGH)
        .stroke(Stroke::new(1.0, colors::OUTLINE_VARIANT))
        .corner_radius(CornerRadius::same(32))
        .inner_margin(egui::Margin::same(24))
        .shadow(egui::epaint::Shadow {
            offset: [0, 4],
            blur: 12,
            spread: 0,
            color: Color32::from_black_alpha(60),
        })
}

/// Filled primary button
pub fn primary_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::ON_PRIMARY).strong())
        .fill(colors::PRIMARY)
        .corner_radius(CornerRadius::same(24))
        .min_size(egui::vec2(0.0, 44.0))
}

/// Outlined secondary button
pub fn outlined_button(text: &str) -> egui::Button<'static> {
    egui::Button::new(egui::RichText::new(text.to_string()).color(colors::PRIMARY))
        .fill(Color32::TRANSPARENT)
        .stroke(Stroke::new(1.0, colors::OUTLINE_VARIANT))
        .corner_radius(CornerRadius::same(24))
        .min_size(egui::vec2(44.0, 44.0))
}
