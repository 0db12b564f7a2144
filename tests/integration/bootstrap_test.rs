//! Startup probe and phase routing

use std::sync::Arc;

use oversync::egui_app::{AppPhase, BootstrapController};
use oversync::shared::BackendError;

use crate::common::{services, MockBackend, Op};

#[tokio::test]
async fn test_failed_probe_routes_to_onboarding() {
    let backend = Arc::new(MockBackend::uninitialized());
    let services = services(&backend);

    let mut bootstrap = BootstrapController::new();
    let mut phase_rx = bootstrap.subscribe();
    assert!(bootstrap.start(&services));
    assert_eq!(bootstrap.phase(), AppPhase::Unknown);

    assert_eq!(bootstrap.settle().await, Some(AppPhase::NeedsOnboarding));
    assert!(phase_rx.has_changed().unwrap());
    assert_eq!(*phase_rx.borrow_and_update(), AppPhase::NeedsOnboarding);
    assert_eq!(backend.calls(Op::Status), 1);
}

#[tokio::test]
async fn test_unreachable_daemon_also_routes_to_onboarding() {
    let backend = Arc::new(MockBackend::new());
    backend.set_status(Err(BackendError::transport("connection refused")));
    let services = services(&backend);

    let mut bootstrap = BootstrapController::new();
    bootstrap.start(&services);

    assert_eq!(bootstrap.settle().await, Some(AppPhase::NeedsOnboarding));
}

#[tokio::test]
async fn test_successful_probe_routes_to_ready() {
    let backend = Arc::new(MockBackend::new());
    let services = services(&backend);

    let mut bootstrap = BootstrapController::new();
    bootstrap.start(&services);

    assert_eq!(bootstrap.settle().await, Some(AppPhase::Ready));
    assert!(!bootstrap.is_probing());
}

#[tokio::test]
async fn test_probe_is_issued_once() {
    let backend = Arc::new(MockBackend::new());
    let services = services(&backend);

    let mut bootstrap = BootstrapController::new();
    assert!(bootstrap.start(&services));
    assert!(!bootstrap.start(&services));
    bootstrap.settle().await;
    assert!(!bootstrap.start(&services));

    assert_eq!(backend.calls(Op::Status), 1);
}

#[tokio::test]
async fn test_poll_is_empty_while_probe_in_flight() {
    let backend = Arc::new(MockBackend::new());
    backend.gate(Op::Status);
    let services = services(&backend);

    let mut bootstrap = BootstrapController::new();
    bootstrap.start(&services);
    tokio::task::yield_now().await;

    assert_eq!(bootstrap.poll(), None);
    assert_eq!(bootstrap.phase(), AppPhase::Unknown);

    backend.release(Op::Status, 1);
    crate::eventually!(bootstrap.poll().is_some());
    assert_eq!(bootstrap.phase(), AppPhase::Ready);
}
