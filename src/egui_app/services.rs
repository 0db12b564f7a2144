//! # Services
//!
//! Bundles the backend, the directory picker and the tokio runtime handle
//! that every component needs to issue remote calls.
//!
//! Remote calls run as tokio tasks. The result comes back through a
//! [`Pending`] slot owned by the component that issued the call, so the
//! component's state is only ever mutated by its owner: either on the UI
//! thread via [`Pending::try_take`] once per frame, or by awaiting
//! [`Pending::wait`] in async drivers and tests. Dropping a `Pending`
//! discards whatever the task eventually produces.

use std::fmt;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::egui_app::backend::SyncBackend;
use crate::egui_app::picker::DirectoryPicker;
use crate::egui_app::status_client::StatusClient;
use crate::shared::BackendError;

/// Result slot of one in-flight remote call
pub struct Pending<T> {
    rx: oneshot::Receiver<Result<T, BackendError>>,
}

impl<T> Pending<T> {
    /// Non-blocking check for the result
    ///
    /// Returns `Some` exactly once; the caller drops the slot afterwards.
    pub fn try_take(&mut self) -> Option<Result<T, BackendError>> {
        match self.rx.try_recv() {
            Ok(result) => Some(result),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => Some(Err(BackendError::Cancelled)),
        }
    }

    /// Wait for the result
    pub async fn wait(&mut self) -> Result<T, BackendError> {
        (&mut self.rx).await.unwrap_or(Err(BackendError::Cancelled))
    }
}

impl<T> fmt::Debug for Pending<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Pending")
    }
}

/// Everything a component needs to talk to the outside world
#[derive(Clone)]
pub struct Services {
    backend: Arc<dyn SyncBackend>,
    picker: Arc<dyn DirectoryPicker>,
    runtime: Handle,
}

impl Services {
    pub fn new(
        backend: Arc<dyn SyncBackend>,
        picker: Arc<dyn DirectoryPicker>,
        runtime: Handle,
    ) -> Self {
        Self { backend, picker, runtime }
    }

    pub fn runtime(&self) -> &Handle {
        &self.runtime
    }

    /// Status queries against the same backend
    pub fn status_client(&self) -> StatusClient {
        StatusClient::new(Arc::clone(&self.backend))
    }

    /// Run a backend call on the runtime and hand back its result slot
    pub fn request<T, F, Fut>(&self, call: F) -> Pending<T>
    where
        F: FnOnce(Arc<dyn SyncBackend>) -> Fut,
        Fut: Future<Output = Result<T, BackendError>> + Send + 'static,
        T: Send + 'static,
    {
        let (tx, rx) = oneshot::channel();
        let fut = call(Arc::clone(&self.backend));
        self.runtime.spawn(async move {
            // The receiver is gone when the owning view closed; nothing to do then.
            let _ = tx.send(fut.await);
        });
        Pending { rx }
    }

    /// Open the directory dialog
    pub fn pick_directory(&self, title: &str) -> Pending<Option<PathBuf>> {
        let (tx, rx) = oneshot::channel();
        let picker = Arc::clone(&self.picker);
        let title = title.to_string();
        self.runtime.spawn(async move {
            let picked = picker.pick_directory(&title).await;
            let _ = tx.send(Ok(picked));
        });
        Pending { rx }
    }
}

impl fmt::Debug for Services {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Services").finish_non_exhaustive()
    }
}
