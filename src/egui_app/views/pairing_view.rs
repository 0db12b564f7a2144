use std::time::Instant;

use eframe::egui;

use crate::egui_app::pairing::COPIED_FEEDBACK;
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};

/// Pairing dialog, drawn on top of whatever section is active
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let Some(session) = state.pairing.session_mut() else {
        return;
    };

    let mut open = true;
    let mut connect = false;
    let now = Instant::now();

    egui::Window::new("Pair New Device")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .frame(styles::modal_frame())
        .open(&mut open)
        .show(ctx, |ui| {
            ui.set_width(420.0);

            ui.colored_label(colors::ON_SURFACE_VARIANT, "Share this ticket with the other device:");
            ui.add_space(8.0);

            match session.local_ticket.clone() {
                Some(ticket) => {
                    ui.horizontal(|ui| {
                        ui.add(
                            egui::TextEdit::singleline(&mut ticket.as_str())
                                .font(egui::TextStyle::Monospace)
                                .desired_width(320.0),
                        );

                        let label = if session.recently_copied(now) { "Copied" } else { "Copy" };
                        if ui.add(styles::outlined_button(label)).clicked() {
                            if let Some(ticket) = session.copy_ticket(now) {
                                ui.ctx().copy_text(ticket);
                                ui.ctx().request_repaint_after(COPIED_FEEDBACK);
                            }
                        }
                    });
                }
                None if session.is_generating() => {
                    ui.horizontal(|ui| {
                        ui.spinner();
                        ui.colored_label(colors::ON_SURFACE_VARIANT, "Generating ticket…");
                    });
                }
                None => {
                    ui.colored_label(colors::ON_SURFACE_VARIANT, "No ticket available.");
                }
            }

            ui.add_space(20.0);
            ui.separator();
            ui.add_space(12.0);

            ui.colored_label(colors::ON_SURFACE_VARIANT, "Or paste a ticket from another device:");
            ui.add_space(8.0);
            ui.add_enabled(
                !session.connecting,
                egui::TextEdit::singleline(&mut session.remote_ticket_input)
                    .hint_text("Ticket")
                    .font(egui::TextStyle::Monospace)
                    .desired_width(f32::INFINITY),
            );

            if let Some(error) = &session.last_error {
                ui.add_space(8.0);
                ui.colored_label(colors::ERROR, error);
            }

            ui.add_space(16.0);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if session.connecting {
                    ui.spinner();
                } else if ui
                    .add_enabled(session.can_connect(), styles::primary_button("Connect"))
                    .clicked()
                {
                    connect = true;
                }
            });
        });

    if !open {
        state.close_pairing();
    } else if connect {
        state.connect_peer();
    }
}
