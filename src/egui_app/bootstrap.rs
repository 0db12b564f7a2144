//! Bootstrap Controller
//!
//! Decides once per process whether the daemon is already initialized. The
//! answer lives in a `watch` channel: the controller is the only writer and
//! every view that cares about the phase subscribes to it.
//!
//! A failed probe is read as "not initialized yet" rather than as a network
//! fault, and is not retried.

use tokio::sync::watch;

use crate::egui_app::services::{Pending, Services};
use crate::egui_app::types::AppPhase;
use crate::shared::{BackendError, SyncStatus};

pub struct BootstrapController {
    phase_tx: watch::Sender<AppPhase>,
    probe: Option<Pending<SyncStatus>>,
    probe_started: bool,
}

impl BootstrapController {
    pub fn new() -> Self {
        let (phase_tx, _) = watch::channel(AppPhase::Unknown);
        Self {
            phase_tx,
            probe: None,
            probe_started: false,
        }
    }

    pub fn phase(&self) -> AppPhase {
        *self.phase_tx.borrow()
    }

    pub fn subscribe(&self) -> watch::Receiver<AppPhase> {
        self.phase_tx.subscribe()
    }

    /// Whether the startup probe is still outstanding
    pub fn is_probing(&self) -> bool {
        self.probe.is_some()
    }

    /// Issue the startup probe. Only the first call has any effect.
    pub fn start(&mut self, services: &Services) -> bool {
        if self.probe_started {
            return false;
        }
        self.probe_started = true;

        tracing::info!("Probing sync daemon status");
        let status = services.status_client();
        self.probe = Some(services.request(move |_| async move { status.probe().await }));
        true
    }

    /// Apply the probe result if it has arrived
    pub fn poll(&mut self) -> Option<AppPhase> {
        let result = self.probe.as_mut()?.try_take()?;
        self.probe = None;
        Some(self.resolve_probe(result))
    }

    /// Wait for the probe result and apply it
    pub async fn settle(&mut self) -> Option<AppPhase> {
        let mut probe = self.probe.take()?;
        let result = probe.wait().await;
        Some(self.resolve_probe(result))
    }

    /// Route to onboarding or the live app. Ignored once the phase is known.
    pub fn resolve_probe(&mut self, result: Result<SyncStatus, BackendError>) -> AppPhase {
        if self.phase() != AppPhase::Unknown {
            tracing::debug!("Ignoring probe result, phase already {:?}", self.phase());
            return self.phase();
        }

        let next = match result {
            Ok(status) => {
                tracing::info!(peers = status.peers_connected, "Sync daemon already initialized");
                AppPhase::Ready
            }
            Err(e) => {
                tracing::info!("Status probe failed, starting onboarding: {}", e);
                AppPhase::NeedsOnboarding
            }
        };

        self.transition(AppPhase::Unknown, next);
        self.phase()
    }

    /// Called by the wizard after a successful initialization
    ///
    /// Only valid from `NeedsOnboarding`; before the probe has answered this
    /// is a no-op.
    pub fn complete_onboarding(&mut self) -> bool {
        self.transition(AppPhase::NeedsOnboarding, AppPhase::Ready)
    }

    /// Move `from -> next` if the phase is still `from`
    fn transition(&self, from: AppPhase, next: AppPhase) -> bool {
        let changed = self.phase_tx.send_if_modified(|phase| {
            if *phase == from && phase.can_transition_to(next) {
                *phase = next;
                true
            } else {
                false
            }
        });

        if changed {
            tracing::info!("App phase is now {:?}", next);
        } else {
            tracing::debug!("Rejected phase change to {:?}", next);
        }
        changed
    }
}

impl Default for BootstrapController {
    fn default() -> Self {
        Self::new()
    }
}
