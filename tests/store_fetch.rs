//! Load cycle of the rocket list driven through the store.

mod common;

use common::*;
use launchpad::api::FetchError;
use launchpad::motion::NoMotion;
use launchpad::ui::mvi::Store;
use launchpad::ui::rocket_list::{LoadStatus, RocketListAction, RocketListReducer, FETCH_ROCKETS};
use std::sync::Arc;
use std::time::Duration;

const WAIT: Duration = Duration::from_secs(2);

fn completions(actions: &[RocketListAction]) -> usize {
    actions
        .iter()
        .filter(|a| matches!(a, RocketListAction::LoadCompleted { .. }))
        .count()
}

async fn run_to_idle(store: &mut Store<RocketListReducer>) -> Vec<RocketListAction> {
    let mut applied = Vec::new();
    while let Some(action) = tokio::time::timeout(WAIT, store.next())
        .await
        .expect("store did not settle")
    {
        applied.push(action);
    }
    applied
}

#[tokio::test]
async fn load_installs_fetched_rockets() {
    let provider = FakeProvider::new();
    provider.respond(Duration::ZERO, Ok(fixture_rockets()));
    let mut store = list_store(provider.clone(), Arc::new(NoMotion));

    store.send(RocketListAction::Load);
    assert!(store.state().is_loading);
    assert!(store.is_running(&FETCH_ROCKETS));

    let applied = run_to_idle(&mut store).await;
    assert_eq!(completions(&applied), 1);
    assert_eq!(store.state().status(), LoadStatus::Loaded);
    assert_eq!(store.state().rockets, fixture_rockets());
    assert!(store.state().error.is_none());
    assert!(!store.is_running(&FETCH_ROCKETS));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn failed_fetch_leaves_no_records_and_an_error() {
    let provider = FakeProvider::new();
    let error = FetchError::Status {
        url: "http://localhost/v3/rockets".to_string(),
        status: 500,
    };
    provider.respond(Duration::ZERO, Err(error.clone()));
    let mut store = list_store(provider, Arc::new(NoMotion));

    store.send(RocketListAction::Load);
    run_to_idle(&mut store).await;

    let state = store.state();
    assert!(!state.is_loading);
    assert!(state.rockets.is_empty());
    assert_eq!(state.error, Some(error));
    assert_eq!(state.status(), LoadStatus::Failed);
}

#[tokio::test]
async fn second_load_supersedes_running_fetch() {
    let provider = FakeProvider::new();
    let mut first = fixture_rockets();
    first.truncate(1);
    provider
        .respond(Duration::from_millis(200), Ok(first))
        .respond(Duration::from_millis(10), Ok(fixture_rockets()));
    let mut store = list_store(provider.clone(), Arc::new(NoMotion));

    store.send(RocketListAction::Load);
    store.send(RocketListAction::Load);

    let applied = run_to_idle(&mut store).await;
    assert_eq!(completions(&applied), 1);
    assert_eq!(store.state().rockets.len(), 2);

    // The first fetch would have completed by now if it were still alive.
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert!(store.drain().is_empty());
    assert_eq!(store.state().rockets.len(), 2);
    assert_eq!(provider.calls(), 2);
}

#[tokio::test]
async fn completion_queued_before_reload_is_discarded() {
    let provider = FakeProvider::new();
    provider
        .respond(Duration::ZERO, Ok(fixture_rockets()))
        .respond(
            Duration::from_millis(20),
            Err(FetchError::Timeout { duration: 30 }),
        );
    let mut store = list_store(provider, Arc::new(NoMotion));

    store.send(RocketListAction::Load);
    wait_for_pending(&store, WAIT).await;
    // The first completion is sitting in the channel; reload before it is applied.
    store.send(RocketListAction::Load);

    let applied = run_to_idle(&mut store).await;
    assert_eq!(
        applied,
        vec![RocketListAction::LoadCompleted {
            rockets: Vec::new(),
            error: Some(FetchError::Timeout { duration: 30 }),
        }]
    );
    assert!(store.state().rockets.is_empty());
    assert!(!store.state().is_loading);
}

#[tokio::test]
async fn repeated_failed_completion_is_idempotent() {
    let mut store = list_store(FakeProvider::new(), Arc::new(NoMotion));
    let completed = RocketListAction::LoadCompleted {
        rockets: Vec::new(),
        error: Some(FetchError::Decode {
            message: "expected value at line 1 column 1".to_string(),
        }),
    };

    store.send(completed.clone());
    let once = store.state().clone();
    store.send(completed);
    assert_eq!(store.state(), &once);
    assert_eq!(store.running_effects().count(), 0);
}

#[tokio::test]
async fn idle_store_returns_none() {
    let mut store = list_store(FakeProvider::new(), Arc::new(NoMotion));
    assert!(store.next().await.is_none());
    assert!(!store.has_pending());
}

#[tokio::test]
async fn panicking_fetch_ends_load_with_an_error() {
    let mut store = store_with(Arc::new(PanickingProvider), Arc::new(NoMotion));

    store.send(RocketListAction::Load);
    let applied = run_to_idle(&mut store).await;

    assert_eq!(
        applied,
        vec![RocketListAction::LoadCompleted {
            rockets: Vec::new(),
            error: Some(FetchError::Interrupted),
        }]
    );
    assert!(!store.is_running(&FETCH_ROCKETS));
    assert!(!store.state().is_loading);
    assert_eq!(store.state().status(), LoadStatus::Failed);
}
