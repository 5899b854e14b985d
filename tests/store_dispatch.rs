mod common;

use std::sync::Arc;

use hrdesk::domain::Role;
use hrdesk::store::{AppAction, OutcomeStatus, RemoteOutcome, ResourceAction, Store};

fn loading_action() -> AppAction {
    AppAction::Role(ResourceAction::Get(Arc::new(RemoteOutcome::Loading)))
}

#[tokio::test]
async fn dispatch_updates_snapshot() {
    let store = Store::new();
    assert_eq!(store.state().role.get_result.status(), OutcomeStatus::Idle);

    store.dispatch(loading_action());

    assert_eq!(
        store.state().role.get_result.status(),
        OutcomeStatus::Loading
    );
}

#[tokio::test]
async fn subscriber_observes_dispatch() {
    let store = Store::new();
    let mut receiver = store.subscribe();

    store.dispatch(loading_action());

    receiver.changed().await.expect("store dropped");
    let state = receiver.borrow_and_update().clone();
    assert!(state.role.get_result.is_loading());
}

#[tokio::test]
async fn subscriber_sees_latest_state_after_burst() {
    let store = Store::new();
    let mut receiver = store.subscribe();

    store.dispatch(loading_action());
    store.dispatch(AppAction::Role(ResourceAction::Get(Arc::new(
        RemoteOutcome::Success {
            message: "ok".to_string(),
            data: vec![Role::default()],
        },
    ))));

    receiver.changed().await.expect("store dropped");
    let state = receiver.borrow_and_update().clone();
    // The watch channel coalesces: the subscriber lands on the newest tree.
    assert_eq!(
        state.role.get_result.status(),
        OutcomeStatus::Success
    );
}

#[tokio::test]
async fn dispatches_from_many_tasks_all_land() {
    let store = Arc::new(Store::new());

    let mut handles = Vec::new();
    for _ in 0..16 {
        let store = store.clone();
        handles.push(tokio::spawn(async move {
            store.dispatch(loading_action());
        }));
    }
    for handle in handles {
        handle.await.expect("dispatch task panicked");
    }

    assert!(store.state().role.get_result.is_loading());
}
