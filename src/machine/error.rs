//! Transition error types.

use crate::core::{EventId, StateId};
use thiserror::Error;

/// Errors that can occur when requesting a transition
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransitionError {
    /// Directed transition to a state that is not configured
    #[error("State '{state}' is not defined in the configuration")]
    InvalidState { state: StateId },

    /// The active state has no transition for the event
    #[error("No transition for event '{event}' from state '{state}'")]
    InvalidEvent { event: EventId, state: StateId },
}
