use eframe::egui;

use crate::egui_app::onboarding::{OnboardingWizard, RECOMMENDED_KEY_LEN};
use crate::egui_app::state::AppState;
use crate::egui_app::theme::{colors, styles};
use crate::egui_app::WizardStep;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WizardAction {
    Next,
    Back,
    Browse,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let Some(wizard) = state.wizard.as_mut() else {
        return;
    };

    let mut action = None;

    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.set_max_width(560.0);

        styles::wizard_card_frame().show(ui, |ui| {
            render_progress(ui, wizard.step());
            ui.add_space(24.0);

            match wizard.step() {
                WizardStep::Welcome => render_welcome(ui),
                WizardStep::Vault => {
                    if render_vault(ui, wizard) {
                        action = Some(WizardAction::Browse);
                    }
                }
                WizardStep::GitHub => render_github(ui, wizard),
                WizardStep::Encryption => render_encryption(ui, wizard),
            }

            if let Some(error) = wizard.error() {
                ui.add_space(12.0);
                ui.colored_label(colors::ERROR, error);
            }

            ui.add_space(24.0);
            ui.horizontal(|ui| {
                if wizard.step() != WizardStep::Welcome
                    && ui
                        .add_enabled(wizard.can_go_back(), styles::outlined_button("Back"))
                        .clicked()
                {
                    action = Some(WizardAction::Back);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if wizard.is_submitting() {
                        ui.spinner();
                    } else if ui
                        .add_enabled(
                            wizard.can_advance(),
                            styles::primary_button(wizard.forward_label()),
                        )
                        .clicked()
                    {
                        action = Some(WizardAction::Next);
                    }
                });
            });
        });
    });

    match action {
        Some(WizardAction::Next) => state.wizard_next(),
        Some(WizardAction::Back) => state.wizard_back(),
        Some(WizardAction::Browse) => state.browse_vault(),
        None => {}
    }
}

fn render_progress(ui: &mut egui::Ui, step: WizardStep) {
    const DOT: f32 = 8.0;
    const GAP: f32 = 8.0;

    let width = WizardStep::COUNT as f32 * (DOT + GAP) - GAP;
    let (rect, _) = ui.allocate_exact_size(egui::vec2(width, DOT), egui::Sense::hover());

    for (i, _) in WizardStep::ALL.iter().enumerate() {
        let center = egui::pos2(rect.left() + DOT / 2.0 + i as f32 * (DOT + GAP), rect.center().y);
        let color = if i <= step.index() {
            colors::PRIMARY
        } else {
            colors::DOT_INACTIVE
        };
        ui.painter().circle_filled(center, DOT / 2.0, color);
    }
}

fn heading(ui: &mut egui::Ui, title: &str, subtitle: &str) {
    ui.colored_label(colors::ON_SURFACE, egui::RichText::new(title).size(26.0).strong());
    ui.add_space(8.0);
    ui.colored_label(colors::ON_SURFACE_VARIANT, subtitle);
    ui.add_space(20.0);
}

fn render_welcome(ui: &mut egui::Ui) {
    heading(
        ui,
        "Welcome to OverSync",
        "Keep a folder in sync across your devices. Peers talk directly to each \
         other, and an encrypted GitHub backup is optional.",
    );
}

/// Returns whether the browse button was clicked
fn render_vault(ui: &mut egui::Ui, wizard: &OnboardingWizard) -> bool {
    heading(ui, "Choose your vault", "Select the folder OverSync should keep in sync.");

    let mut browse = false;
    ui.horizontal(|ui| {
        let path = wizard.draft().vault_path.as_deref().unwrap_or("No folder selected");
        let color = if wizard.draft().has_vault_path() {
            colors::ON_SURFACE
        } else {
            colors::ON_SURFACE_VARIANT
        };
        ui.colored_label(color, egui::RichText::new(path).monospace());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if wizard.is_browsing() {
                ui.spinner();
            } else if ui.add(styles::outlined_button("Browse…")).clicked() {
                browse = true;
            }
        });
    });
    browse
}

fn render_github(ui: &mut egui::Ui, wizard: &mut OnboardingWizard) {
    heading(
        ui,
        "GitHub backup",
        "Optionally mirror encrypted snapshots to a repository. Leave blank to skip.",
    );

    let github = &mut wizard.draft_mut().github;
    egui::Grid::new("github_fields")
        .num_columns(2)
        .spacing([12.0, 10.0])
        .show(ui, |ui| {
            ui.colored_label(colors::ON_SURFACE_VARIANT, "Token");
            ui.add(
                egui::TextEdit::singleline(&mut github.token)
                    .password(true)
                    .hint_text("ghp_…")
                    .desired_width(320.0),
            );
            ui.end_row();

            ui.colored_label(colors::ON_SURFACE_VARIANT, "Owner");
            ui.add(egui::TextEdit::singleline(&mut github.owner).desired_width(320.0));
            ui.end_row();

            ui.colored_label(colors::ON_SURFACE_VARIANT, "Repository");
            ui.add(egui::TextEdit::singleline(&mut github.repo).desired_width(320.0));
            ui.end_row();

            ui.colored_label(colors::ON_SURFACE_VARIANT, "Branch");
            ui.add(egui::TextEdit::singleline(&mut github.branch).desired_width(320.0));
            ui.end_row();
        });
}

fn render_encryption(ui: &mut egui::Ui, wizard: &mut OnboardingWizard) {
    heading(
        ui,
        "Encryption key",
        "Your files are encrypted with this key before they leave the device. \
         Use the same key on every device.",
    );

    let submitting = wizard.is_submitting();
    let draft = wizard.draft_mut();
    ui.add_enabled(
        !submitting,
        egui::TextEdit::singleline(&mut draft.encryption_key)
            .password(true)
            .hint_text("Passphrase")
            .desired_width(f32::INFINITY),
    );

    if draft.key_is_weak() {
        ui.add_space(6.0);
        ui.colored_label(
            colors::WARNING,
            format!("Minimum {} characters recommended", RECOMMENDED_KEY_LEN),
        );
    }
}
