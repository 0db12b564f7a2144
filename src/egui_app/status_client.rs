//! Status Client
//!
//! Thin wrapper over the status and activity queries. Holds no state of its
//! own; the two dashboard queries are issued concurrently and only returned
//! together.

use std::sync::Arc;

use futures_util::future::try_join;

use crate::egui_app::backend::SyncBackend;
use crate::shared::{BackendError, FileActivityEntry, SyncStatus};

/// Status and activity fetched within the same refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub status: SyncStatus,
    pub activity: Vec<FileActivityEntry>,
}

#[derive(Clone)]
pub struct StatusClient {
    backend: Arc<dyn SyncBackend>,
}

impl StatusClient {
    pub fn new(backend: Arc<dyn SyncBackend>) -> Self {
        Self { backend }
    }

    /// Startup probe
    pub async fn probe(&self) -> Result<SyncStatus, BackendError> {
        self.backend.probe_status().await
    }

    /// Both dashboard queries, concurrently. Fails if either fails.
    pub async fn snapshot(&self) -> Result<StatusSnapshot, BackendError> {
        let (status, activity) =
            try_join(self.backend.fetch_status(), self.backend.fetch_activity()).await?;
        Ok(StatusSnapshot { status, activity })
    }
}
