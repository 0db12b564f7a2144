//! Interval refresh of the dashboard view

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;

use oversync::egui_app::{DashboardPoller, StatusClient, SyncBackend};
use oversync::shared::BackendError;

use crate::common::{sample_entry, sample_status, MockBackend, Op};

const INTERVAL: Duration = Duration::from_secs(5);

fn start(backend: &Arc<MockBackend>) -> DashboardPoller {
    let status = StatusClient::new(Arc::clone(backend) as Arc<dyn SyncBackend>);
    DashboardPoller::start(status, &Handle::current(), INTERVAL)
}

#[tokio::test(start_paused = true)]
async fn test_first_tick_is_immediate() {
    let backend = Arc::new(MockBackend::new());
    let mut poller = start(&backend);
    assert!(poller.view().is_none());

    let started = tokio::time::Instant::now();
    assert!(poller.recv_update().await);
    assert_eq!(started.elapsed(), Duration::ZERO);

    let view = poller.view().unwrap();
    assert_eq!(view.status, sample_status(1));
    assert_eq!(view.activity, vec![sample_entry("notes/today.md")]);
    assert_eq!(poller.revision(), 1);
    assert_eq!(backend.calls(Op::Status), 1);
    assert_eq!(backend.calls(Op::Activity), 1);
}

#[tokio::test(start_paused = true)]
async fn test_refreshes_on_interval() {
    let backend = Arc::new(MockBackend::new());
    let mut poller = start(&backend);
    poller.recv_update().await;

    backend.set_status(Ok(sample_status(4)));
    assert!(poller.recv_update().await);

    assert_eq!(poller.view().unwrap().status.peers_connected, 4);
    assert_eq!(poller.revision(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_failed_half_keeps_previous_view() {
    let backend = Arc::new(MockBackend::new());
    let mut poller = start(&backend);
    poller.recv_update().await;
    let before = poller.view().cloned().unwrap();

    // New status, but activity fails: nothing of this tick may show
    backend.set_status(Ok(sample_status(3)));
    backend.set_activity(Err(BackendError::transport("connection reset")));
    tokio::time::sleep(INTERVAL + Duration::from_secs(2)).await;

    assert!(!poller.poll());
    assert_eq!(poller.view(), Some(&before));
    assert_eq!(poller.revision(), 1);
    assert_eq!(backend.calls(Op::Activity), 2);

    // Recovers on the next tick
    backend.set_activity(Ok(vec![sample_entry("a.md"), sample_entry("b.md")]));
    assert!(poller.recv_update().await);
    let view = poller.view().unwrap();
    assert_eq!(view.status.peers_connected, 3);
    assert_eq!(view.activity.len(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_cancel_while_in_flight_discards_result() {
    let backend = Arc::new(MockBackend::new());
    backend.gate(Op::Activity);
    let mut poller = start(&backend);

    crate::eventually!(backend.calls(Op::Activity) == 1);
    poller.cancel();
    assert!(!poller.is_running());

    backend.release(Op::Activity, 1);
    tokio::time::sleep(INTERVAL * 3).await;

    assert!(!poller.poll());
    assert!(poller.view().is_none());
    assert_eq!(poller.revision(), 0);
    assert_eq!(backend.calls(Op::Activity), 1);
    assert!(!poller.recv_update().await);
}

#[tokio::test(start_paused = true)]
async fn test_drop_stops_polling() {
    let backend = Arc::new(MockBackend::new());
    let mut poller = start(&backend);
    poller.recv_update().await;
    drop(poller);

    tokio::time::sleep(INTERVAL * 4).await;
    assert_eq!(backend.calls(Op::Status), 1);
}

#[tokio::test(start_paused = true)]
async fn test_unpolled_reports_collapse_to_latest() {
    let backend = Arc::new(MockBackend::new());
    let mut poller = start(&backend);
    poller.recv_update().await;

    // Owner stops looking, e.g. the window is minimized
    backend.set_status(Ok(sample_status(7)));
    tokio::time::sleep(INTERVAL * 20 + Duration::from_secs(1)).await;
    assert_eq!(backend.calls(Op::Status), 21);

    assert!(poller.poll());
    assert_eq!(poller.revision(), 2);
    assert_eq!(poller.view().unwrap().status.peers_connected, 7);

    // Nothing left behind
    assert!(!poller.poll());
    assert_eq!(poller.revision(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_hung_tick_does_not_stall_polling() {
    let backend = Arc::new(MockBackend::new());
    backend.gate(Op::Activity);
    let mut poller = start(&backend);

    crate::eventually!(backend.calls(Op::Activity) == 1);

    // The first tick never answers; the next interval still issues a query
    tokio::time::sleep(INTERVAL + Duration::from_secs(1)).await;
    assert!(backend.calls(Op::Status) >= 2);
    assert!(backend.calls(Op::Activity) >= 2);
    assert!(poller.view().is_none());

    backend.release(Op::Activity, 1);
    assert!(poller.recv_update().await);
    assert_eq!(poller.view().unwrap().status, sample_status(1));
}
