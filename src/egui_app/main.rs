//! OverSync desktop shell - main entry point
//!
//! Loads configuration, installs logging, starts the tokio runtime that
//! carries every daemon call, and hands control to eframe.

use std::sync::Arc;

use eframe::egui;
use oversync::egui_app::{
    logging, theme, views, AppState, Config, HttpBackend, NativeDirectoryPicker, Services,
};

/// Idle repaint cadence; keeps pending results flowing without input events
const REPAINT_INTERVAL: std::time::Duration = std::time::Duration::from_millis(250);

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    logging::init(config.log_filter());

    tracing::info!(
        backend = config.backend_url(),
        interval = ?config.poll_interval(),
        "Starting OverSync"
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .thread_name("oversync-io")
        .build()?;

    let backend = Arc::new(HttpBackend::new(config.clone())?);
    let services = Services::new(backend, Arc::new(NativeDirectoryPicker), runtime.handle().clone());

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 760.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "OverSync",
        options,
        Box::new(move |cc| {
            theme::apply_global_theme(&cc.egui_ctx);
            Ok(Box::new(OverSyncApp {
                state: AppState::new(config, services),
            }))
        }),
    )?;

    // Stop background work before the runtime goes away
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));
    Ok(())
}

/// Main application state
struct OverSyncApp {
    state: AppState,
}

impl eframe::App for OverSyncApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.update();

        views::render_nav_rail(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        ctx.request_repaint_after(REPAINT_INTERVAL);
    }
}
