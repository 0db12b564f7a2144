//! Pairing dialog against the backend

use std::sync::Arc;

use assert_matches::assert_matches;

use oversync::egui_app::{PairingCoordinator, PairingOutcome};
use oversync::shared::BackendError;

use crate::common::{services, MockBackend, Op};

#[tokio::test]
async fn test_open_generates_local_ticket() {
    let backend = Arc::new(MockBackend::new());
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    assert!(pairing.open(&services));
    assert!(pairing.session().unwrap().is_generating());
    pairing.settle_ticket().await;

    let session = pairing.session().unwrap();
    assert_eq!(session.local_ticket.as_deref(), Some("ticket-local-0001"));
    assert!(!session.is_generating());
    assert_eq!(session.last_error, None);
}

#[tokio::test]
async fn test_open_twice_keeps_one_session() {
    let backend = Arc::new(MockBackend::new());
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    pairing.open(&services);
    let id = pairing.session().unwrap().id();
    assert!(!pairing.open(&services));
    assert_eq!(pairing.session().unwrap().id(), id);

    pairing.settle_ticket().await;
    assert_eq!(backend.calls(Op::Ticket), 1);
}

#[tokio::test]
async fn test_ticket_failure_leaves_connect_available() {
    let backend = Arc::new(MockBackend::new());
    backend.set_ticket(Err(BackendError::rejected("Endpoint not bound")));
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    pairing.open(&services);
    pairing.settle_ticket().await;

    let session = pairing.session_mut().unwrap();
    assert_eq!(session.local_ticket, None);
    assert_eq!(session.last_error.as_deref(), Some("Endpoint not bound"));

    session.remote_ticket_input = "ticket-remote-0002".to_string();
    assert!(session.can_connect());
    assert!(pairing.connect(&services));

    assert_eq!(pairing.settle_connect().await, Some(PairingOutcome::Paired));
    assert!(!pairing.is_open());
}

#[tokio::test]
async fn test_double_connect_issues_one_call() {
    let backend = Arc::new(MockBackend::new());
    backend.gate(Op::Connect);
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    pairing.open(&services);
    pairing.settle_ticket().await;
    pairing.session_mut().unwrap().remote_ticket_input = "ticket-remote-0002".to_string();

    assert!(pairing.connect(&services));
    assert!(!pairing.connect(&services));
    assert!(pairing.session().unwrap().connecting);

    backend.release(Op::Connect, 1);
    assert_eq!(pairing.settle_connect().await, Some(PairingOutcome::Paired));

    assert_eq!(backend.connect_tickets(), vec!["ticket-remote-0002".to_string()]);
    assert!(!pairing.is_open());
}

#[tokio::test]
async fn test_connect_failure_keeps_dialog_for_retry() {
    let backend = Arc::new(MockBackend::new());
    backend.set_connect(Err(BackendError::rejected("Ticket expired")));
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    pairing.open(&services);
    pairing.settle_ticket().await;
    pairing.session_mut().unwrap().remote_ticket_input = "ticket-remote-0002".to_string();
    pairing.connect(&services);

    assert_matches!(
        pairing.settle_connect().await,
        Some(PairingOutcome::Failed(message)) if message == "Ticket expired"
    );

    let session = pairing.session().unwrap();
    assert!(!session.connecting);
    assert_eq!(session.last_error.as_deref(), Some("Ticket expired"));
    assert_eq!(session.remote_ticket_input, "ticket-remote-0002");
    assert_eq!(session.local_ticket.as_deref(), Some("ticket-local-0001"));

    backend.set_connect(Ok(()));
    assert!(pairing.connect(&services));
    assert_eq!(pairing.settle_connect().await, Some(PairingOutcome::Paired));
    assert_eq!(backend.calls(Op::Connect), 2);
}

#[tokio::test]
async fn test_empty_input_never_calls_backend() {
    let backend = Arc::new(MockBackend::new());
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    assert!(!pairing.connect(&services));
    pairing.open(&services);
    assert!(!pairing.connect(&services));

    pairing.settle_ticket().await;
    assert_eq!(backend.calls(Op::Connect), 0);
}

#[tokio::test]
async fn test_close_drops_late_results() {
    let backend = Arc::new(MockBackend::new());
    backend.gate(Op::Ticket);
    let services = services(&backend);
    let mut pairing = PairingCoordinator::new();

    pairing.open(&services);
    let first = pairing.session().unwrap().id();
    crate::eventually!(backend.calls(Op::Ticket) == 1);
    pairing.close();

    backend.release(Op::Ticket, 1);
    tokio::task::yield_now().await;
    assert_eq!(pairing.poll(), None);
    assert!(!pairing.is_open());

    // A new dialog starts from scratch
    backend.release(Op::Ticket, 1);
    pairing.open(&services);
    assert_ne!(pairing.session().unwrap().id(), first);
    assert_eq!(pairing.session().unwrap().local_ticket, None);
    pairing.settle_ticket().await;
    assert_eq!(backend.calls(Op::Ticket), 2);
}
