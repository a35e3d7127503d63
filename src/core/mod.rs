//! Core data types of the state machine.
//!
//! This module contains the pieces the machine is assembled from:
//! - State definitions and their transition tables
//! - Undo/redo history stacks
//!
//! Nothing in here knows about the active state; that lives in
//! [`crate::machine::StateMachine`].

mod history;
mod state;

pub use history::History;
pub use state::{EventId, StateDefinition, StateId, StateTable, TransitionTable};
