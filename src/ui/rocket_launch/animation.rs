//! Launch animation: vertical travel of the rocket across the canvas.

use std::time::{Duration, Instant};

use crate::ui::geometry::Bounds;

/// Time the rocket takes to leave (or come back into) the canvas.
pub const LAUNCH_DURATION: Duration = Duration::from_secs(2);

/// Extra travel past the canvas top, so the rocket fully leaves the view.
pub const OVERSHOOT: f32 = 8.0;

/// Offset in `0.0..=1.0` easing towards the launched (1) or landed (0) end.
#[derive(Debug, Clone, Copy)]
pub struct LaunchAnimation {
    from: f32,
    to: f32,
    started: Option<Instant>,
}

impl Default for LaunchAnimation {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            started: None,
        }
    }
}

impl LaunchAnimation {
    /// Retarget the animation; a change mid-flight continues from the current offset.
    pub fn set_launched(&mut self, launched: bool, now: Instant) {
        let to = if launched { 1.0 } else { 0.0 };
        if to == self.to {
            return;
        }
        self.from = self.offset(now);
        self.to = to;
        self.started = Some(now);
    }

    pub fn offset(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return self.to;
        };
        let t = (now.saturating_duration_since(started).as_secs_f32()
            / LAUNCH_DURATION.as_secs_f32())
        .clamp(0.0, 1.0);
        self.from + (self.to - self.from) * ease_in(t)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.started
            .is_some_and(|started| now.saturating_duration_since(started) < LAUNCH_DURATION)
    }
}

fn ease_in(t: f32) -> f32 {
    t * t
}

/// Vertical center of the rocket inside `canvas` at `offset`.
///
/// Offset 0 rests the rocket on the canvas bottom; offset 1 carries it a
/// full canvas height plus [`OVERSHOOT`] upwards.
pub fn rocket_center_y(canvas: Bounds, rocket_height: f32, offset: f32) -> f32 {
    canvas.height - rocket_height / 2.0 - offset * (canvas.height + OVERSHOOT)
}
