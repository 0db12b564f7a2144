use tokio::sync::watch;

use crate::egui_app::{
    AppPhase, BootstrapController, Config, DashboardPoller, NavSection, OnboardingWizard,
    PairingCoordinator, Services, SubmissionOutcome,
};

/// Central application state shared across egui views.
///
/// Owns every orchestration component. `update` runs once per frame on the
/// UI thread and is the only place component results are applied.
pub struct AppState {
    pub config: Config,
    services: Services,
    bootstrap: BootstrapController,
    phase_rx: watch::Receiver<AppPhase>,
    /// Present while the phase is `NeedsOnboarding`
    pub wizard: Option<OnboardingWizard>,
    /// Present while the phase is `Ready`
    pub dashboard: Option<DashboardPoller>,
    pub pairing: PairingCoordinator,
    pub current_section: NavSection,
}

impl AppState {
    /// Build the state and issue the startup probe
    pub fn new(config: Config, services: Services) -> Self {
        let mut bootstrap = BootstrapController::new();
        let phase_rx = bootstrap.subscribe();
        bootstrap.start(&services);

        Self {
            config,
            services,
            bootstrap,
            phase_rx,
            wizard: None,
            dashboard: None,
            pairing: PairingCoordinator::new(),
            current_section: NavSection::default(),
        }
    }

    pub fn phase(&self) -> AppPhase {
        *self.phase_rx.borrow()
    }

    pub fn services(&self) -> &Services {
        &self.services
    }

    /// Apply pending results from every component
    pub fn update(&mut self) {
        self.bootstrap.poll();

        if let Some(wizard) = self.wizard.as_mut() {
            if let Some(SubmissionOutcome::Completed) = wizard.poll() {
                self.bootstrap.complete_onboarding();
            }
        }

        self.sync_phase();

        if let Some(dashboard) = self.dashboard.as_mut() {
            dashboard.poll();
        }

        self.pairing.poll();
    }

    /// Wait for the startup probe, for headless drivers
    pub async fn settle_bootstrap(&mut self) -> AppPhase {
        self.bootstrap.settle().await;
        self.sync_phase();
        self.phase()
    }

    /// Wait for an in-flight onboarding submission, for headless drivers
    pub async fn settle_onboarding(&mut self) -> Option<SubmissionOutcome> {
        let outcome = self.wizard.as_mut()?.settle_submission().await;
        if let Some(SubmissionOutcome::Completed) = outcome {
            self.bootstrap.complete_onboarding();
        }
        self.sync_phase();
        outcome
    }

    /// React to phase changes: build or tear down the phase's views
    fn sync_phase(&mut self) {
        if !self.phase_rx.has_changed().unwrap_or(false) {
            return;
        }
        let phase = *self.phase_rx.borrow_and_update();

        match phase {
            AppPhase::Unknown => {}
            AppPhase::NeedsOnboarding => {
                self.stop_dashboard();
                if self.wizard.is_none() {
                    self.wizard = Some(OnboardingWizard::new());
                }
            }
            AppPhase::Ready => {
                self.wizard = None;
                if self.dashboard.is_none() {
                    self.dashboard = Some(DashboardPoller::start(
                        self.services.status_client(),
                        self.services.runtime(),
                        self.config.poll_interval(),
                    ));
                }
            }
        }
    }

    fn stop_dashboard(&mut self) {
        if let Some(mut dashboard) = self.dashboard.take() {
            dashboard.cancel();
        }
        self.pairing.close();
    }

    /// Release long-lived resources before exit
    pub fn shutdown(&mut self) {
        self.stop_dashboard();
    }

    pub fn open_pairing(&mut self) {
        self.pairing.open(&self.services);
    }

    pub fn close_pairing(&mut self) {
        self.pairing.close();
    }

    pub fn connect_peer(&mut self) -> bool {
        self.pairing.connect(&self.services)
    }

    pub fn wizard_next(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.next(&self.services);
        }
    }

    pub fn wizard_back(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.back();
        }
    }

    pub fn browse_vault(&mut self) {
        if let Some(wizard) = self.wizard.as_mut() {
            wizard.browse_vault(&self.services);
        }
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        self.shutdown();
    }
}
