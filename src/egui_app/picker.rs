//! Directory selection
//!
//! The vault directory comes from an external selection dialog. Its result is
//! opaque input: the wizard stores whatever path comes back and leaves
//! existence checks to the daemon.

use async_trait::async_trait;
use std::path::PathBuf;

/// Source of a user-chosen directory
#[async_trait]
pub trait DirectoryPicker: Send + Sync {
    /// `None` when the user dismissed the dialog
    async fn pick_directory(&self, title: &str) -> Option<PathBuf>;
}

/// Native folder dialog
#[derive(Debug, Default, Clone, Copy)]
pub struct NativeDirectoryPicker;

#[async_trait]
impl DirectoryPicker for NativeDirectoryPicker {
    async fn pick_directory(&self, title: &str) -> Option<PathBuf> {
        let title = title.to_string();
        let picked = tokio::task::spawn_blocking(move || {
            rfd::FileDialog::new().set_title(title.as_str()).pick_folder()
        })
        .await;

        match picked {
            Ok(path) => path,
            Err(e) => {
                tracing::warn!("Directory dialog task failed: {}", e);
                None
            }
        }
    }
}
