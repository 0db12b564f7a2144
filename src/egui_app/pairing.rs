//! # Peer Pairing
//!
//! One pairing dialog = one `PairingSession`. Opening the dialog requests a
//! local ticket straight away; the user may also paste a remote ticket and
//! connect. A successful connect consumes the session: the dialog closes and
//! the next pairing starts from a fresh session with a fresh ticket.
//!
//! Results of calls issued by a session are delivered to that session only.
//! Closing the dialog drops the session together with its result slots, so a
//! late answer has nowhere to land.

use std::time::{Duration, Instant};

use uuid::Uuid;

use crate::egui_app::services::{Pending, Services};
use crate::shared::BackendError;

/// How long the "copied" indicator stays visible
pub const COPIED_FEEDBACK: Duration = Duration::from_secs(2);

/// State of one pairing dialog
#[derive(Debug)]
pub struct PairingSession {
    id: Uuid,
    pub local_ticket: Option<String>,
    pub remote_ticket_input: String,
    pub connecting: bool,
    pub last_error: Option<String>,
    copied_at: Option<Instant>,
    ticket_request: Option<Pending<String>>,
    connect_request: Option<Pending<()>>,
}

/// What a finished connect attempt means for the dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PairingOutcome {
    /// Peer connected; the session is over
    Paired,
    /// Connect failed; the session stays open for a retry
    Failed(String),
}

impl PairingSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            local_ticket: None,
            remote_ticket_input: String::new(),
            connecting: false,
            last_error: None,
            copied_at: None,
            ticket_request: None,
            connect_request: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Whether the local ticket is still being generated
    pub fn is_generating(&self) -> bool {
        self.ticket_request.is_some()
    }

    /// Connect is enabled with some input and no attempt in flight
    pub fn can_connect(&self) -> bool {
        !self.remote_ticket_input.is_empty() && !self.connecting
    }

    /// Enter the connecting state; returns the ticket to connect with
    pub fn begin_connect(&mut self) -> Option<String> {
        if !self.can_connect() {
            return None;
        }
        self.connecting = true;
        self.last_error = None;
        Some(self.remote_ticket_input.clone())
    }

    /// Apply the connect result
    pub fn finish_connect(&mut self, result: Result<(), BackendError>) -> PairingOutcome {
        self.connecting = false;
        match result {
            Ok(()) => PairingOutcome::Paired,
            Err(e) => {
                let message = e.to_string();
                self.last_error = Some(message.clone());
                PairingOutcome::Failed(message)
            }
        }
    }

    /// Apply the ticket generation result
    pub fn finish_ticket(&mut self, result: Result<String, BackendError>) {
        match result {
            Ok(ticket) => self.local_ticket = Some(ticket),
            Err(e) => {
                tracing::warn!(session = %self.id, "Pairing ticket generation failed: {}", e);
                self.last_error = Some(e.to_string());
            }
        }
    }

    /// The ticket to put on the clipboard, stamping the copy time
    ///
    /// Clipboard failures are not tracked.
    pub fn copy_ticket(&mut self, now: Instant) -> Option<String> {
        let ticket = self.local_ticket.clone()?;
        self.copied_at = Some(now);
        Some(ticket)
    }

    pub fn recently_copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FEEDBACK)
    }
}

impl Default for PairingSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Owns the pairing dialog's session for as long as the dialog is open
#[derive(Debug, Default)]
pub struct PairingCoordinator {
    session: Option<PairingSession>,
}

impl PairingCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session(&self) -> Option<&PairingSession> {
        self.session.as_ref()
    }

    pub fn session_mut(&mut self) -> Option<&mut PairingSession> {
        self.session.as_mut()
    }

    /// Open the dialog and request a local ticket. No-op if already open.
    pub fn open(&mut self, services: &Services) -> bool {
        if self.session.is_some() {
            return false;
        }

        let mut session = PairingSession::new();
        tracing::info!(session = %session.id(), "Opening pairing dialog");
        session.ticket_request =
            Some(services.request(|backend| async move { backend.generate_pairing_ticket().await }));
        self.session = Some(session);
        true
    }

    /// Close the dialog, dropping the session and anything still in flight
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::info!(session = %session.id(), "Closing pairing dialog");
        }
    }

    /// Connect with the entered remote ticket
    ///
    /// Returns `false` without calling the backend when the dialog is closed,
    /// the input is empty, or a connect is already in flight.
    pub fn connect(&mut self, services: &Services) -> bool {
        let Some(session) = self.session.as_mut() else {
            return false;
        };
        let Some(ticket) = session.begin_connect() else {
            return false;
        };

        tracing::info!(session = %session.id(), "Connecting to peer");
        session.connect_request =
            Some(services.request(move |backend| async move { backend.connect_peer(ticket).await }));
        true
    }

    /// Apply results that have arrived
    pub fn poll(&mut self) -> Option<PairingOutcome> {
        let session = self.session.as_mut()?;

        if let Some(result) = session.ticket_request.as_mut().and_then(Pending::try_take) {
            session.ticket_request = None;
            session.finish_ticket(result);
        }

        let result = session.connect_request.as_mut()?.try_take()?;
        session.connect_request = None;
        Some(self.apply_connect(result))
    }

    /// Wait for the ticket request
    pub async fn settle_ticket(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if let Some(mut request) = session.ticket_request.take() {
            let result = request.wait().await;
            session.finish_ticket(result);
        }
    }

    /// Wait for the connect request
    pub async fn settle_connect(&mut self) -> Option<PairingOutcome> {
        let mut request = self.session.as_mut()?.connect_request.take()?;
        let result = request.wait().await;
        Some(self.apply_connect(result))
    }

    fn apply_connect(&mut self, result: Result<(), BackendError>) -> PairingOutcome {
        let Some(session) = self.session.as_mut() else {
            return PairingOutcome::Failed(BackendError::Cancelled.to_string());
        };

        let outcome = session.finish_connect(result);
        match &outcome {
            PairingOutcome::Paired => {
                tracing::info!(session = %session.id(), "Peer paired");
                self.close();
            }
            PairingOutcome::Failed(message) => {
                tracing::warn!(session = %session.id(), "Peer connect failed: {}", message);
            }
        }
        outcome
    }
}
