//! Pitch (device tilt) signal for the launch screen.
//!
//! A [`MotionSensor`] produces a stream of pitch samples in radians. The
//! launch feature never touches a sensor directly: it gets a
//! [`MotionHandle`], which owns the sampling interval and allows at most one
//! live subscription at a time.

mod sensors;

pub use sensors::{ManualMotion, NoMotion, SimulatedMotion};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use futures::future;
use futures::stream::{self, BoxStream};
use futures::StreamExt;

/// Sampling interval used when nothing else is configured.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);

/// A source of attitude pitch samples.
pub trait MotionSensor: Send + Sync + 'static {
    /// False when the hardware (or stand-in) cannot deliver samples.
    fn is_available(&self) -> bool;

    /// Successive pitch samples, one per `interval`, until dropped.
    fn pitch_updates(&self, interval: Duration) -> BoxStream<'static, f64>;
}

/// Shared handle to the single pitch sensor.
///
/// Cloning is cheap; all clones share the subscription slot. Starting a new
/// subscription ends the previous stream before it yields another sample.
#[derive(Clone)]
pub struct MotionHandle {
    sensor: Arc<dyn MotionSensor>,
    interval: Duration,
    active: Arc<AtomicU64>,
}

impl MotionHandle {
    pub fn new(sensor: Arc<dyn MotionSensor>, interval: Duration) -> Self {
        Self {
            sensor,
            interval,
            active: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_available(&self) -> bool {
        self.sensor.is_available()
    }

    /// Subscribe to pitch samples.
    ///
    /// An unavailable sensor yields an empty stream: no samples, no error.
    pub fn subscribe(&self) -> BoxStream<'static, f64> {
        if !self.sensor.is_available() {
            tracing::debug!("Motion sensor unavailable, pitch updates disabled");
            return stream::empty().boxed();
        }

        let token = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        let active = Arc::clone(&self.active);
        tracing::debug!(subscription = token, "Pitch subscription started");

        self.sensor
            .pitch_updates(self.interval)
            .take_while(move |_| future::ready(active.load(Ordering::SeqCst) == token))
            .boxed()
    }
}
