//! Shared test utilities: fixtures, fake collaborators and store builders.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use futures::future::BoxFuture;
use futures::stream::{self, BoxStream};
use futures::{FutureExt, StreamExt};
use launchpad::api::{FetchError, RocketsProvider};
use launchpad::model::Rocket;
use launchpad::motion::{MotionHandle, MotionSensor};
use launchpad::ui::mvi::Store;
use launchpad::ui::rocket_launch::RocketLaunchEnvironment;
use launchpad::ui::rocket_list::{RocketListEnvironment, RocketListReducer, RocketListState};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

pub const ROCKETS_JSON: &str = include_str!("../fixtures/rockets.json");

pub fn fixture_rockets() -> Vec<Rocket> {
    serde_json::from_str(ROCKETS_JSON).expect("fixture should decode")
}

// -- Rockets provider ---------------------------------------------------------

/// One scripted fetch outcome.
pub struct Scripted {
    pub delay: Duration,
    pub result: Result<Vec<Rocket>, FetchError>,
}

/// Provider answering from a queue of scripted outcomes, in call order.
#[derive(Clone, Default)]
pub struct FakeProvider {
    script: Arc<Mutex<VecDeque<Scripted>>>,
    calls: Arc<AtomicUsize>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, delay: Duration, result: Result<Vec<Rocket>, FetchError>) -> &Self {
        self.script.lock().push_back(Scripted { delay, result });
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RocketsProvider for FakeProvider {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Rocket>, FetchError>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().pop_front();
        async move {
            match next {
                Some(Scripted { delay, result }) => {
                    tokio::time::sleep(delay).await;
                    result
                }
                None => Err(FetchError::Decode {
                    message: "no scripted response".to_string(),
                }),
            }
        }
        .boxed()
    }
}

/// Provider whose fetch panics once polled.
pub struct PanickingProvider;

impl RocketsProvider for PanickingProvider {
    fn fetch(&self) -> BoxFuture<'static, Result<Vec<Rocket>, FetchError>> {
        async { panic!("provider exploded") }.boxed()
    }
}

// -- Motion sensor -------------------------------------------------------------

/// Sensor fed by the test through a channel; ignores the interval.
pub struct ChannelMotion {
    receiver: Mutex<Option<mpsc::UnboundedReceiver<f64>>>,
}

impl ChannelMotion {
    pub fn new() -> (Self, mpsc::UnboundedSender<f64>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let sensor = Self {
            receiver: Mutex::new(Some(receiver)),
        };
        (sensor, sender)
    }
}

impl MotionSensor for ChannelMotion {
    fn is_available(&self) -> bool {
        true
    }

    fn pitch_updates(&self, _interval: Duration) -> BoxStream<'static, f64> {
        match self.receiver.lock().take() {
            Some(receiver) => stream::unfold(receiver, |mut receiver| async move {
                receiver.recv().await.map(|pitch| (pitch, receiver))
            })
            .boxed(),
            None => stream::empty().boxed(),
        }
    }
}

/// Sensor whose pitch stream panics on the first poll.
pub struct PanickingMotion;

impl MotionSensor for PanickingMotion {
    fn is_available(&self) -> bool {
        true
    }

    fn pitch_updates(&self, _interval: Duration) -> BoxStream<'static, f64> {
        stream::poll_fn(|_| -> std::task::Poll<Option<f64>> { panic!("sensor exploded") }).boxed()
    }
}

// -- Store builders ------------------------------------------------------------

pub fn list_store(
    provider: FakeProvider,
    sensor: Arc<dyn MotionSensor>,
) -> Store<RocketListReducer> {
    store_with(Arc::new(provider), sensor)
}

pub fn store_with(
    provider: Arc<dyn RocketsProvider>,
    sensor: Arc<dyn MotionSensor>,
) -> Store<RocketListReducer> {
    let motion = MotionHandle::new(sensor, Duration::from_millis(1));
    let environment =
        RocketListEnvironment::new(provider, RocketLaunchEnvironment::new(motion));
    Store::new(RocketListState::default(), Arc::new(environment))
}

/// Wait until `store` has effect output queued, or panic after `timeout`.
pub async fn wait_for_pending(store: &Store<RocketListReducer>, timeout: Duration) {
    let start = std::time::Instant::now();
    while !store.has_pending() {
        assert!(start.elapsed() < timeout, "no effect output within {:?}", timeout);
        tokio::time::sleep(Duration::from_millis(2)).await;
    }
}
