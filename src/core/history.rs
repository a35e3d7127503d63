//! Undo/redo stacks of previously active states.
//!
//! `History` holds two last-in-first-out stacks. The past stack receives
//! the state that was left on every transition; the future stack receives
//! the state that was left on every undo.

use super::state::StateId;

/// Linear undo/redo history of state identifiers.
///
/// Both stacks are ordered most-recent-last.
///
/// # Example
///
/// ```rust
/// use waymark::core::History;
///
/// let mut history = History::new();
/// history.record("idle".to_string());
///
/// // Currently in "running": step back to "idle".
/// let previous = history.step_back("running");
/// assert_eq!(previous.as_deref(), Some("idle"));
/// assert_eq!(history.future(), ["running".to_string()]);
///
/// // And forward again.
/// let next = history.step_forward("idle");
/// assert_eq!(next.as_deref(), Some("running"));
/// assert_eq!(history.past(), ["idle".to_string()]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct History {
    past: Vec<StateId>,
    future: Vec<StateId>,
}

impl History {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push the state being left onto the past stack.
    ///
    /// The future stack is left alone; callers decide when redo is
    /// invalidated.
    pub fn record(&mut self, left: StateId) {
        self.past.push(left);
    }

    /// Drop every redo entry.
    pub fn discard_future(&mut self) {
        self.future.clear();
    }

    /// Move one step back from `current`.
    ///
    /// Returns the state to restore, or `None` without touching either
    /// stack when there is nothing to undo.
    pub fn step_back(&mut self, current: &str) -> Option<StateId> {
        let previous = self.past.pop()?;
        self.future.push(current.to_owned());
        Some(previous)
    }

    /// Move one step forward from `current`.
    ///
    /// Returns the state to restore, or `None` without touching either
    /// stack when there is nothing to redo.
    pub fn step_forward(&mut self, current: &str) -> Option<StateId> {
        let next = self.future.pop()?;
        self.past.push(current.to_owned());
        Some(next)
    }

    /// Empty both stacks.
    pub fn clear(&mut self) {
        self.past.clear();
        self.future.clear();
    }

    pub fn past(&self) -> &[StateId] {
        &self.past
    }

    pub fn future(&self) -> &[StateId] {
        &self.future
    }

    pub fn can_step_back(&self) -> bool {
        !self.past.is_empty()
    }

    pub fn can_step_forward(&self) -> bool {
        !self.future.is_empty()
    }
}
