//! State identifiers and per-state transition tables.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Identifier of a state.
pub type StateId = String;

/// Identifier of an event.
pub type EventId = String;

/// Maps event identifiers to target state identifiers, in insertion order.
pub type TransitionTable = IndexMap<EventId, StateId>;

/// Maps state identifiers to their definitions, in insertion order.
pub type StateTable = IndexMap<StateId, StateDefinition>;

/// Configuration of a single state.
///
/// Targets are plain identifiers and are not checked against the set of
/// configured states. A machine may therefore move into a state that has
/// no definition of its own; from there no event can fire.
///
/// # Example
///
/// ```rust
/// use waymark::core::StateDefinition;
///
/// let idle = StateDefinition::new().with_transition("start", "running");
///
/// assert_eq!(idle.target("start"), Some("running"));
/// assert!(!idle.handles("stop"));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDefinition {
    /// Outgoing transitions keyed by event. Absent in a document means none.
    #[serde(default)]
    pub transitions: TransitionTable,
}

impl StateDefinition {
    /// Create a state with no outgoing transitions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a transition, returning the updated definition.
    pub fn with_transition(
        mut self,
        event: impl Into<EventId>,
        target: impl Into<StateId>,
    ) -> Self {
        self.transitions.insert(event.into(), target.into());
        self
    }

    /// Target state for `event`, if this state handles it.
    pub fn target(&self, event: &str) -> Option<&str> {
        self.transitions.get(event).map(String::as_str)
    }

    /// Check whether `event` has a transition out of this state.
    pub fn handles(&self, event: &str) -> bool {
        self.transitions.contains_key(event)
    }

    /// Events handled by this state in configured order.
    pub fn events(&self) -> impl Iterator<Item = &str> + '_ {
        self.transitions.keys().map(String::as_str)
    }
}
