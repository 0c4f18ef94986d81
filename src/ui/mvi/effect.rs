//! Effects: async work described as data.
//!
//! Reducers never perform I/O. They return an [`Effect`] naming the work
//! and the store decides how and when to run it.

use std::fmt;

use crate::ui::navigation::FrameId;

/// Marker trait for task descriptions carried by [`Effect::Run`].
pub trait Task: fmt::Debug + Send + 'static {}

/// Identity of a running effect.
///
/// Running an effect under an id that is already running replaces the old
/// run. Ids scoped to a navigation frame are cancelled when that frame is
/// popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EffectId {
    name: &'static str,
    frame: Option<FrameId>,
}

impl EffectId {
    pub const fn new(name: &'static str) -> Self {
        Self { name, frame: None }
    }

    /// The same id, owned by `frame`.
    pub fn scoped(self, frame: FrameId) -> Self {
        Self {
            frame: Some(frame),
            ..self
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn frame(&self) -> Option<FrameId> {
        self.frame
    }
}

impl fmt::Display for EffectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.frame {
            Some(frame) => write!(f, "{}@{}", self.name, frame),
            None => write!(f, "{}", self.name),
        }
    }
}

/// Work requested by a reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect<T> {
    /// Nothing to do.
    None,

    /// Start `task` under `id`, cancelling any run already under `id`.
    Run { id: EffectId, task: T },

    /// Stop the run under `id`. Output it already produced is discarded.
    Cancel(EffectId),

    /// Stop every run scoped to `frame`.
    CancelFrame(FrameId),

    /// Several effects, applied in order.
    Batch(Vec<Effect<T>>),
}

impl<T> Effect<T> {
    pub fn run(id: EffectId, task: T) -> Self {
        Effect::Run { id, task }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Effect::None)
    }

    /// Lift the task type, e.g. from a child screen into its parent.
    pub fn map<U, F>(self, f: F) -> Effect<U>
    where
        F: Fn(T) -> U,
    {
        self.map_with(&f)
    }

    fn map_with<U, F>(self, f: &F) -> Effect<U>
    where
        F: Fn(T) -> U,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Run { id, task } => Effect::Run { id, task: f(task) },
            Effect::Cancel(id) => Effect::Cancel(id),
            Effect::CancelFrame(frame) => Effect::CancelFrame(frame),
            Effect::Batch(effects) => {
                Effect::Batch(effects.into_iter().map(|e| e.map_with(f)).collect())
            }
        }
    }

    /// Attach every run and cancel in this effect to `frame`.
    pub fn scoped(self, frame: FrameId) -> Self {
        match self {
            Effect::Run { id, task } => Effect::Run {
                id: id.scoped(frame),
                task,
            },
            Effect::Cancel(id) => Effect::Cancel(id.scoped(frame)),
            Effect::Batch(effects) => {
                Effect::Batch(effects.into_iter().map(|e| e.scoped(frame)).collect())
            }
            other => other,
        }
    }

    /// Combine two effects, dropping empty ones.
    pub fn merge(self, other: Effect<T>) -> Self {
        match (self, other) {
            (Effect::None, other) => other,
            (this, Effect::None) => this,
            (Effect::Batch(mut effects), other) => {
                effects.push(other);
                Effect::Batch(effects)
            }
            (this, other) => Effect::Batch(vec![this, other]),
        }
    }
}

impl<T> FromIterator<Effect<T>> for Effect<T> {
    fn from_iter<I: IntoIterator<Item = Effect<T>>>(iter: I) -> Self {
        iter.into_iter().fold(Effect::None, Effect::merge)
    }
}
