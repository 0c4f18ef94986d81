//! Navigation stack: pushed child screens, owned by a parent screen state.
//!
//! Frames are addressed by [`FrameId`], never by position. Indices shift on
//! every push and pop, so an effect that outlives a back navigation must not
//! be able to hit whatever frame slid into its old slot.

use std::fmt;

use crate::ui::mvi::{Effect, Reducer};

/// Stable identity of a pushed frame. Never reused within one stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(u64);

impl fmt::Display for FrameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "frame#{}", self.0)
    }
}

/// One pushed screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame<S> {
    id: FrameId,
    pub state: S,
}

impl<S> Frame<S> {
    pub fn id(&self) -> FrameId {
        self.id
    }
}

/// Structural navigation request addressed to a stack, or an action for one
/// of its frames.
#[derive(Debug, Clone, PartialEq)]
pub enum PathAction<A> {
    /// Deliver `action` to the frame `id`.
    Element { id: FrameId, action: A },
    /// Back: remove the top frame.
    Pop,
    /// Remove every frame above `id`, keeping `id` on top.
    PopTo { id: FrameId },
    /// Remove every frame.
    PopToRoot,
}

/// Ordered stack of child screen states.
///
/// Equality compares the frames only; the id allocator is not part of the
/// value, so pushing and then popping yields a stack equal to the one before.
#[derive(Debug, Clone)]
pub struct NavigationStack<S> {
    frames: Vec<Frame<S>>,
    next_id: u64,
}

impl<S> Default for NavigationStack<S> {
    fn default() -> Self {
        Self {
            frames: Vec::new(),
            next_id: 0,
        }
    }
}

impl<S: PartialEq> PartialEq for NavigationStack<S> {
    fn eq(&self, other: &Self) -> bool {
        self.frames == other.frames
    }
}

impl<S> NavigationStack<S> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, state: S) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.frames.push(Frame { id, state });
        id
    }

    pub fn pop(&mut self) -> Option<Frame<S>> {
        self.frames.pop()
    }

    /// Pop everything above `id`. Returns the removed frames, top first.
    /// Unknown `id` removes nothing.
    pub fn pop_to(&mut self, id: FrameId) -> Vec<Frame<S>> {
        match self.index_of(id) {
            Some(index) => self.frames.drain(index + 1..).rev().collect(),
            None => Vec::new(),
        }
    }

    /// Pop every frame. Returns the removed frames, top first.
    pub fn pop_to_root(&mut self) -> Vec<Frame<S>> {
        self.frames.drain(..).rev().collect()
    }

    pub fn get(&self, id: FrameId) -> Option<&S> {
        self.frames.iter().find(|f| f.id == id).map(|f| &f.state)
    }

    pub fn index_of(&self, id: FrameId) -> Option<usize> {
        self.frames.iter().position(|f| f.id == id)
    }

    /// Resolve a position to an identity. Only valid until the next push/pop.
    pub fn id_at(&self, index: usize) -> Option<FrameId> {
        self.frames.get(index).map(|f| f.id)
    }

    pub fn top(&self) -> Option<&Frame<S>> {
        self.frames.last()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Frame<S>> {
        self.frames.iter()
    }

    /// Run `R` on the frame `id`, replacing its state in place.
    ///
    /// Returns the child's effect, not yet scoped to the frame, or `None`
    /// when no frame has that id (it was popped while the action was in
    /// flight).
    pub fn route<R>(&mut self, id: FrameId, action: R::Action) -> Option<Effect<R::Task>>
    where
        R: Reducer<State = S>,
    {
        let index = self.index_of(id)?;
        let Frame { id, state } = self.frames.remove(index);
        let (state, effect) = R::reduce(state, action);
        self.frames.insert(index, Frame { id, state });
        Some(effect)
    }
}
