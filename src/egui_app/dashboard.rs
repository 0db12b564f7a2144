//! # Dashboard Poller
//!
//! Keeps the dashboard view model fresh while the live application is shown.
//!
//! ## Architecture
//!
//! - A tokio task ticks on a fixed interval, first tick immediately.
//! - Each tick issues the status and activity queries concurrently and
//!   publishes the pair, tagged with the poller's generation, to the owner.
//!   Only the latest report is kept; reports the owner never looked at (a
//!   minimized window stops calling `poll`) are overwritten, not queued.
//! - A tick that has not finished within one interval is abandoned, so a
//!   daemon that accepts connections but never answers cannot stall polling.
//! - The owner swaps the view model in one step, and only for reports of the
//!   current generation. `cancel` bumps the generation, so a report that was
//!   already in flight when the dashboard went away is dropped on arrival.
//! - A failing tick is logged and leaves the view model untouched. There is
//!   no backoff; the next tick simply tries again.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::egui_app::status_client::{StatusClient, StatusSnapshot};
use crate::shared::{FileActivityEntry, SyncStatus};

/// Consistent status + activity pair shown by the dashboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardView {
    pub status: SyncStatus,
    pub activity: Vec<FileActivityEntry>,
    pub refreshed_at: DateTime<Utc>,
}

impl DashboardView {
    pub fn from_snapshot(snapshot: StatusSnapshot, refreshed_at: DateTime<Utc>) -> Self {
        Self {
            status: snapshot.status,
            activity: snapshot.activity,
            refreshed_at,
        }
    }

    pub fn peer_label(&self) -> &'static str {
        if self.status.has_peers() {
            "P2P Online"
        } else {
            "P2P Offline"
        }
    }

    pub fn sync_label(&self) -> &'static str {
        if self.status.is_syncing {
            "Syncing…"
        } else {
            "Idle"
        }
    }

    pub fn last_sync_label(&self, now: DateTime<Utc>) -> String {
        match self.status.last_sync {
            Some(at) => relative_time(at, now),
            None => "Never".to_string(),
        }
    }

    /// "Updated just now", "Updated 2 min ago"
    pub fn refreshed_label(&self, now: DateTime<Utc>) -> String {
        format!("Updated {}", relative_time(self.refreshed_at, now).to_lowercase())
    }
}

/// "Just now", "5 min ago", "3 h ago", "2 d ago"
pub fn relative_time(at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let secs = (now - at).num_seconds().max(0);
    match secs {
        0..=59 => "Just now".to_string(),
        60..=3_599 => format!("{} min ago", secs / 60),
        3_600..=86_399 => format!("{} h ago", secs / 3_600),
        _ => format!("{} d ago", secs / 86_400),
    }
}

#[derive(Debug, Clone)]
struct TickReport {
    generation: u64,
    snapshot: StatusSnapshot,
}

pub struct DashboardPoller {
    view: Option<DashboardView>,
    revision: u64,
    generation: u64,
    updates: watch::Receiver<Option<TickReport>>,
    shutdown_tx: watch::Sender<bool>,
    task: Option<JoinHandle<()>>,
}

impl DashboardPoller {
    /// Start polling on `runtime`
    pub fn start(status: StatusClient, runtime: &Handle, interval: Duration) -> Self {
        let generation = 1;
        let (updates_tx, updates) = watch::channel(None);
        let (shutdown_tx, shutdown_rx) = watch::channel(false);

        tracing::info!("Starting dashboard polling every {:?}", interval);
        let task = runtime.spawn(Self::poll_loop(
            status,
            interval,
            generation,
            updates_tx,
            shutdown_rx,
        ));

        Self {
            view: None,
            revision: 0,
            generation,
            updates,
            shutdown_tx,
            task: Some(task),
        }
    }

    async fn poll_loop(
        status: StatusClient,
        interval: Duration,
        generation: u64,
        updates_tx: watch::Sender<Option<TickReport>>,
        mut shutdown_rx: watch::Receiver<bool>,
    ) {
        let mut ticker = tokio::time::interval(interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = shutdown_rx.changed() => break,
                _ = ticker.tick() => {}
            }

            let result = tokio::select! {
                _ = shutdown_rx.changed() => break,
                result = tokio::time::timeout(interval, status.snapshot()) => result,
            };

            match result {
                Ok(Ok(snapshot)) => {
                    tracing::debug!(
                        peers = snapshot.status.peers_connected,
                        files = snapshot.activity.len(),
                        "Dashboard tick"
                    );
                    if updates_tx.send(Some(TickReport { generation, snapshot })).is_err() {
                        break;
                    }
                }
                Ok(Err(e)) => tracing::warn!("Dashboard refresh failed, keeping last view: {}", e),
                Err(_) => tracing::warn!(
                    "Dashboard refresh timed out after {:?}, keeping last view",
                    interval
                ),
            }
        }

        tracing::debug!("Dashboard polling stopped");
    }

    /// Latest consistent view; `None` until the first successful tick
    pub fn view(&self) -> Option<&DashboardView> {
        self.view.as_ref()
    }

    /// Number of view swaps so far
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Apply the latest report if there is a new one. Returns whether the
    /// view changed.
    pub fn poll(&mut self) -> bool {
        if !self.updates.has_changed().unwrap_or(false) {
            return false;
        }
        let report = self.updates.borrow_and_update().clone();
        report.is_some_and(|report| self.apply(report))
    }

    /// Wait for the next report and apply it
    ///
    /// Returns `false` once the poll task is gone.
    pub async fn recv_update(&mut self) -> bool {
        if self.updates.changed().await.is_err() {
            return false;
        }
        let report = self.updates.borrow_and_update().clone();
        report.is_some_and(|report| self.apply(report))
    }

    fn apply(&mut self, report: TickReport) -> bool {
        if report.generation != self.generation {
            tracing::debug!("Discarding dashboard report from a cancelled poller");
            return false;
        }

        self.view = Some(DashboardView::from_snapshot(report.snapshot, Utc::now()));
        self.revision += 1;
        true
    }

    /// Stop polling; nothing issued before this call can change the view
    pub fn cancel(&mut self) {
        let Some(task) = self.task.take() else {
            return;
        };

        self.generation += 1;
        let _ = self.shutdown_tx.send(true);
        task.abort();
        tracing::info!("Dashboard polling cancelled");
    }
}

impl Drop for DashboardPoller {
    fn drop(&mut self) {
        self.cancel();
    }
}
