/**
 * Backend Command Boundary
 *
 * The sync daemon owns hashing, transport, encryption and remote storage.
 * The desktop shell only reaches it through the operations of `SyncBackend`.
 * `HttpBackend` is the production implementation, talking JSON to the local
 * daemon; tests substitute scripted implementations.
 */

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::egui_app::config::Config;
use crate::shared::onboarding::{ConnectRequest, TicketResponse};
use crate::shared::{BackendError, FileActivityEntry, InitializeRequest, SyncStatus};

/// Connect timeout for daemon requests
const CONNECT_TIMEOUT: Duration = Duration::from_secs(3);

/// Upper bound on a whole request, including a daemon that never answers
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Remote operations offered by the sync daemon
#[async_trait]
pub trait SyncBackend: Send + Sync {
    /// Startup probe; fails when the daemon is uninitialized or unreachable
    async fn probe_status(&self) -> Result<SyncStatus, BackendError> {
        self.fetch_status().await
    }

    async fn fetch_status(&self) -> Result<SyncStatus, BackendError>;

    /// Most recent file events, most recent first
    async fn fetch_activity(&self) -> Result<Vec<FileActivityEntry>, BackendError>;

    /// Initialize the engine. Not idempotent; called at most once per onboarding.
    async fn initialize(&self, request: InitializeRequest) -> Result<(), BackendError>;

    async fn generate_pairing_ticket(&self) -> Result<String, BackendError>;

    async fn connect_peer(&self, ticket: String) -> Result<(), BackendError>;
}

/// JSON-over-HTTP client for the local sync daemon
#[derive(Debug, Clone)]
pub struct HttpBackend {
    config: Config,
    client: Client,
}

impl HttpBackend {
    pub fn new(config: Config) -> Result<Self, BackendError> {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { config, client })
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, BackendError> {
        let response = self.client.get(self.config.api_url(path)).send().await?;
        let response = Self::check(response).await?;
        Ok(response.json::<T>().await?)
    }

    async fn post<B: serde::Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<Response, BackendError> {
        let response = self
            .client
            .post(self.config.api_url(path))
            .json(body)
            .send()
            .await?;
        Self::check(response).await
    }

    /// Turn a non-success response into `Rejected` carrying the body text
    async fn check(response: Response) -> Result<Response, BackendError> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        let message = if text.trim().is_empty() {
            status.to_string()
        } else {
            text
        };
        Err(BackendError::rejected(message))
    }
}

#[async_trait]
impl SyncBackend for HttpBackend {
    async fn fetch_status(&self) -> Result<SyncStatus, BackendError> {
        self.get_json("/api/sync_status").await
    }

    async fn fetch_activity(&self) -> Result<Vec<FileActivityEntry>, BackendError> {
        self.get_json("/api/recent_activity").await
    }

    async fn initialize(&self, request: InitializeRequest) -> Result<(), BackendError> {
        self.post("/api/initialize_sync", &request).await?;
        Ok(())
    }

    async fn generate_pairing_ticket(&self) -> Result<String, BackendError> {
        let response = self.post("/api/p2p_ticket", &serde_json::json!({})).await?;
        let body: TicketResponse = response.json().await?;
        Ok(body.ticket)
    }

    async fn connect_peer(&self, ticket: String) -> Result<(), BackendError> {
        self.post("/api/connect_peer", &ConnectRequest { ticket }).await?;
        Ok(())
    }
}
