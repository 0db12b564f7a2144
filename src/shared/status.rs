/**
 * Sync Status Types
 *
 * Read-only snapshots produced by the sync daemon: the overall sync status
 * and the list of recent file events. Both are replaced wholesale on every
 * dashboard refresh and never mutated in place.
 */
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Snapshot of the sync engine state
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncStatus {
    /// Whether a sync pass is currently running
    pub is_syncing: bool,
    /// Time of the last completed sync, if any
    pub last_sync: Option<DateTime<Utc>>,
    /// Number of peers currently connected
    pub peers_connected: usize,
}

impl SyncStatus {
    /// Whether at least one peer link is up
    pub fn has_peers(&self) -> bool {
        self.peers_connected > 0
    }
}

/// One recent file event in the vault
///
/// The daemon sends the content hash as a raw byte array under `hash` and the
/// modification time as unix seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileActivityEntry {
    /// Vault-relative path
    pub path: String,
    /// File size in bytes
    pub size: u64,
    /// Content hash bytes
    #[serde(rename = "hash")]
    pub content_hash: Vec<u8>,
    #[serde(with = "chrono::serde::ts_seconds")]
    pub last_modified: DateTime<Utc>,
}

impl FileActivityEntry {
    /// First eight hex characters of the content hash
    pub fn short_hash(&self) -> String {
        self.content_hash
            .iter()
            .take(4)
            .map(|byte| format!("{:02x}", byte))
            .collect()
    }

    /// Size formatted with 1024-based units
    pub fn size_label(&self) -> String {
        const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

        if self.size < 1024 {
            return format!("{} B", self.size);
        }

        let mut value = self.size as f64 / 1024.0;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{:.1} {}", value, UNITS[unit])
    }
}
