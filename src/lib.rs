//! Waymark: a string-keyed finite state machine with undo/redo
//!
//! Waymark tracks a single active state, validates transitions against a
//! configured transition table, and keeps a linear history of past states
//! so moves can be undone and redone. It is meant to be embedded in larger
//! applications: UI logic, workflow steps, protocol stage tracking.
//!
//! # Core Concepts
//!
//! - **Configuration**: The initial state plus a table of states, each with
//!   its own event → target transitions
//! - **Directed transitions**: Jump to any configured state by name
//! - **Event transitions**: Follow the active state's transition table
//! - **History**: Undo/redo stacks of previously active states
//!
//! # Example
//!
//! ```rust
//! use waymark::{StateMachine, TransitionError};
//!
//! let mut machine = StateMachine::from_json(
//!     r#"{
//!         "initial": "idle",
//!         "states": {
//!             "idle": { "transitions": { "start": "running" } },
//!             "running": { "transitions": { "stop": "idle" } }
//!         }
//!     }"#,
//! )
//! .unwrap();
//!
//! machine.trigger("start").unwrap();
//! assert_eq!(machine.current_state(), "running");
//! assert_eq!(machine.history(), ["idle".to_string()]);
//!
//! assert!(matches!(
//!     machine.trigger("start"),
//!     Err(TransitionError::InvalidEvent { .. })
//! ));
//!
//! assert!(machine.undo());
//! assert_eq!(machine.current_state(), "idle");
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machine;

// Re-export commonly used types
pub use builder::{BuildError, ConfigBuilder};
pub use config::{ConfigError, MachineConfig};
pub use crate::core::{EventId, History, StateDefinition, StateId};
pub use machine::{StateMachine, TransitionError};
