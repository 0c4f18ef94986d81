use std::f64::consts::{FRAC_PI_2, PI};
use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, BoxStream};
use futures::StreamExt;
use parking_lot::Mutex;
use tokio::time::{Instant, MissedTickBehavior};

use super::MotionSensor;

/// No sensor present.
pub struct NoMotion;

impl MotionSensor for NoMotion {
    fn is_available(&self) -> bool {
        false
    }

    fn pitch_updates(&self, _interval: Duration) -> BoxStream<'static, f64> {
        stream::empty().boxed()
    }
}

/// Pitch set from the keyboard; sampled like a real sensor.
#[derive(Clone)]
pub struct ManualMotion {
    pitch: Arc<Mutex<f64>>,
}

impl ManualMotion {
    pub fn new(initial: f64) -> Self {
        Self {
            pitch: Arc::new(Mutex::new(initial.clamp(-FRAC_PI_2, FRAC_PI_2))),
        }
    }

    pub fn pitch(&self) -> f64 {
        *self.pitch.lock()
    }

    pub fn set_pitch(&self, pitch: f64) {
        *self.pitch.lock() = pitch.clamp(-FRAC_PI_2, FRAC_PI_2);
    }

    /// Adjust the pitch by `delta` radians, clamped to ±π/2. Returns the new pitch.
    pub fn tilt(&self, delta: f64) -> f64 {
        let mut pitch = self.pitch.lock();
        *pitch = (*pitch + delta).clamp(-FRAC_PI_2, FRAC_PI_2);
        *pitch
    }
}

impl MotionSensor for ManualMotion {
    fn is_available(&self) -> bool {
        true
    }

    fn pitch_updates(&self, interval: Duration) -> BoxStream<'static, f64> {
        let pitch = Arc::clone(&self.pitch);
        sampled(interval, move |_| *pitch.lock())
    }
}

/// Pitch swinging slowly across the launch threshold.
pub struct SimulatedMotion {
    period: Duration,
}

impl SimulatedMotion {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for SimulatedMotion {
    fn default() -> Self {
        Self::new(Duration::from_secs(8))
    }
}

impl MotionSensor for SimulatedMotion {
    fn is_available(&self) -> bool {
        true
    }

    fn pitch_updates(&self, interval: Duration) -> BoxStream<'static, f64> {
        let period = self.period.as_secs_f64().max(f64::EPSILON);
        sampled(interval, move |elapsed| {
            0.2 + 0.6 * (2.0 * PI * elapsed.as_secs_f64() / period).sin()
        })
    }
}

/// One sample per tick; `read` gets the time since the stream started.
fn sampled<F>(interval: Duration, read: F) -> BoxStream<'static, f64>
where
    F: Fn(Duration) -> f64 + Send + 'static,
{
    let mut ticker = tokio::time::interval(interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let started = Instant::now();

    stream::unfold((ticker, read), move |(mut ticker, read)| async move {
        ticker.tick().await;
        let sample = read(started.elapsed());
        Some((sample, (ticker, read)))
    })
    .boxed()
}
