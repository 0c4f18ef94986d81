//! Store: owns a screen state, applies actions and runs their effects.

use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::stream::BoxStream;
use futures::{FutureExt, StreamExt};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use super::effect::{Effect, EffectId};
use super::reducer::Reducer;

/// Turns task descriptions into streams of actions.
///
/// One-shot work yields a single action; subscriptions keep yielding until
/// the store cancels them.
pub trait Executor<T, A>: Send + Sync + 'static {
    fn execute(&self, task: T) -> BoxStream<'static, A>;
}

/// Output of a running effect, tagged with the run it came from.
/// `action: None` marks the end of the stream.
struct Envelope<A> {
    id: EffectId,
    generation: u64,
    action: Option<A>,
}

struct Running {
    generation: u64,
    handle: JoinHandle<()>,
}

/// Single owner of a screen state.
///
/// Mutation happens only through [`Store::send`] (user actions) and
/// [`Store::next`] / [`Store::drain`] (effect output), all from the owning
/// task, so the store needs no locks. Effects run on the tokio runtime and
/// talk back only through the store's channel; output from a run that was
/// cancelled or superseded is dropped before it reaches the reducer.
pub struct Store<R: Reducer> {
    state: R::State,
    executor: Arc<dyn Executor<R::Task, R::Action>>,
    running: HashMap<EffectId, Running>,
    next_generation: u64,
    sender: mpsc::UnboundedSender<Envelope<R::Action>>,
    receiver: mpsc::UnboundedReceiver<Envelope<R::Action>>,
}

impl<R> Store<R>
where
    R: Reducer,
    R::State: Default,
{
    pub fn new(state: R::State, executor: Arc<dyn Executor<R::Task, R::Action>>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state,
            executor,
            running: HashMap::new(),
            next_generation: 0,
            sender,
            receiver,
        }
    }

    pub fn state(&self) -> &R::State {
        &self.state
    }

    /// Apply `action` and start its effect. Must be called inside a tokio runtime.
    pub fn send(&mut self, action: R::Action) {
        tracing::debug!(action = ?action, "dispatch");
        let (state, effect) = R::reduce(std::mem::take(&mut self.state), action);
        self.state = state;
        self.apply(effect);
    }

    /// Wait for the next action produced by a running effect and apply it.
    ///
    /// Returns the applied action, or `None` once no effect is running and
    /// nothing is left to deliver. Cancel-safe.
    pub async fn next(&mut self) -> Option<R::Action> {
        loop {
            if self.running.is_empty() {
                // Whatever is still queued belongs to cancelled runs.
                self.drain();
                return None;
            }
            let envelope = self.receiver.recv().await?;
            if let Some(action) = self.accept(envelope) {
                self.send(action.clone());
                return Some(action);
            }
        }
    }

    /// Apply every effect action already delivered, without waiting.
    pub fn drain(&mut self) -> Vec<R::Action> {
        let mut applied = Vec::new();
        while let Ok(envelope) = self.receiver.try_recv() {
            if let Some(action) = self.accept(envelope) {
                self.send(action.clone());
                applied.push(action);
            }
        }
        applied
    }

    /// True when effect output is waiting in the channel.
    pub fn has_pending(&self) -> bool {
        !self.receiver.is_empty()
    }

    /// True while a run under `id` has not finished or been cancelled.
    pub fn is_running(&self, id: &EffectId) -> bool {
        self.running.contains_key(id)
    }

    pub fn running_effects(&self) -> impl Iterator<Item = &EffectId> {
        self.running.keys()
    }

    fn apply(&mut self, effect: Effect<R::Task>) {
        match effect {
            Effect::None => {}
            Effect::Run { id, task } => self.spawn(id, task),
            Effect::Cancel(id) => {
                self.cancel(&id);
            }
            Effect::CancelFrame(frame) => {
                let scoped: Vec<EffectId> = self
                    .running
                    .keys()
                    .filter(|id| id.frame() == Some(frame))
                    .copied()
                    .collect();
                for id in scoped {
                    self.cancel(&id);
                }
            }
            Effect::Batch(effects) => {
                for effect in effects {
                    self.apply(effect);
                }
            }
        }
    }

    fn spawn(&mut self, id: EffectId, task: R::Task) {
        if self.cancel(&id) {
            tracing::debug!(effect = %id, "superseded by a new run");
        }

        self.next_generation += 1;
        let generation = self.next_generation;
        tracing::debug!(effect = %id, generation, task = ?task, "effect started");

        let mut stream = self.executor.execute(task);
        let sender = self.sender.clone();
        let handle = tokio::spawn(async move {
            let forward = async {
                while let Some(action) = stream.next().await {
                    let envelope = Envelope {
                        id,
                        generation,
                        action: Some(action),
                    };
                    if sender.send(envelope).is_err() {
                        return;
                    }
                }
            };
            // Sent even when the stream panics.
            if AssertUnwindSafe(forward).catch_unwind().await.is_err() {
                tracing::warn!(effect = %id, generation, "effect panicked");
            }
            let _ = sender.send(Envelope {
                id,
                generation,
                action: None,
            });
        });

        self.running.insert(id, Running { generation, handle });
    }

    fn cancel(&mut self, id: &EffectId) -> bool {
        match self.running.remove(id) {
            Some(running) => {
                running.handle.abort();
                tracing::debug!(effect = %id, generation = running.generation, "effect cancelled");
                true
            }
            None => false,
        }
    }

    /// Check an envelope against the live runs; returns the action to apply.
    fn accept(&mut self, envelope: Envelope<R::Action>) -> Option<R::Action> {
        let current = self
            .running
            .get(&envelope.id)
            .is_some_and(|running| running.generation == envelope.generation);

        if !current {
            tracing::trace!(
                effect = %envelope.id,
                generation = envelope.generation,
                "dropping output of a cancelled run"
            );
            return None;
        }

        match envelope.action {
            Some(action) => Some(action),
            None => {
                self.running.remove(&envelope.id);
                tracing::debug!(effect = %envelope.id, "effect finished");
                None
            }
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        for running in self.running.values() {
            running.handle.abort();
        }
    }
}
