//! The state machine: active state, transitions and undo/redo.

use crate::config::{ConfigError, MachineConfig};
use crate::core::{History, StateId};
use std::sync::Arc;
use tracing::{debug, trace};

pub mod error;

pub use error::TransitionError;

/// Finite state machine over string identifiers.
///
/// The machine holds a shared handle to its configuration, the active
/// state, and the undo/redo history. Every successful transition records
/// the state it left. Every transition attempt, successful or not, drops
/// the redo stack.
///
/// # Example
///
/// ```rust
/// use waymark::{machine_config, StateMachine};
///
/// let config = machine_config! {
///     initial: "idle",
///     states: {
///         "idle" => { "start" => "running" },
///         "running" => { "stop" => "idle" },
///     }
/// }
/// .unwrap();
///
/// let mut machine = StateMachine::new(config);
/// machine.trigger("start").unwrap();
/// assert_eq!(machine.current_state(), "running");
///
/// assert!(machine.undo());
/// assert_eq!(machine.current_state(), "idle");
///
/// assert!(machine.redo());
/// assert_eq!(machine.current_state(), "running");
/// ```
#[derive(Clone, Debug)]
pub struct StateMachine {
    config: Arc<MachineConfig>,
    active: StateId,
    history: History,
}

impl StateMachine {
    /// Create a machine in the configured initial state.
    ///
    /// Passing an `Arc` shares the configuration with the caller instead of
    /// copying it. The initial state is not checked against the state table.
    pub fn new(config: impl Into<Arc<MachineConfig>>) -> Self {
        let config = config.into();
        let active = config.initial.clone();
        debug!(initial = %active, states = config.states.len(), "state machine created");
        Self {
            config,
            active,
            history: History::new(),
        }
    }

    /// Create a machine from a configuration that may be absent.
    ///
    /// Returns [`ConfigError::MissingConfiguration`] for `None`.
    pub fn from_config<C>(config: Option<C>) -> Result<Self, ConfigError>
    where
        C: Into<Arc<MachineConfig>>,
    {
        config
            .map(Self::new)
            .ok_or(ConfigError::MissingConfiguration)
    }

    /// Create a machine from a JSON configuration document.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        MachineConfig::from_json(json).map(Self::new)
    }

    /// Get the active state (pure)
    pub fn current_state(&self) -> &str {
        &self.active
    }

    /// Get the initial state (pure)
    pub fn initial(&self) -> &str {
        &self.config.initial
    }

    /// Get the shared configuration handle (pure)
    pub fn config(&self) -> &Arc<MachineConfig> {
        &self.config
    }

    /// States that were left, most recent last (pure)
    pub fn history(&self) -> &[StateId] {
        self.history.past()
    }

    /// States available for redo, most recent last (pure)
    pub fn future(&self) -> &[StateId] {
        self.history.future()
    }

    /// Check if there is a state to undo to (pure)
    pub fn can_undo(&self) -> bool {
        self.history.can_step_back()
    }

    /// Check if there is a state to redo to (pure)
    pub fn can_redo(&self) -> bool {
        self.history.can_step_forward()
    }

    /// Move directly to `target`.
    ///
    /// Fails with [`TransitionError::InvalidState`] if `target` is not a
    /// configured state. The redo stack is cleared even when the move is
    /// rejected.
    pub fn change_state(&mut self, target: &str) -> Result<(), TransitionError> {
        self.history.discard_future();

        if !self.config.has_state(target) {
            trace!(from = %self.active, to = target, "directed transition rejected");
            return Err(TransitionError::InvalidState {
                state: target.to_owned(),
            });
        }

        debug!(from = %self.active, to = target, "directed transition");
        self.enter(target.to_owned());
        Ok(())
    }

    /// Fire `event` from the active state.
    ///
    /// Fails with [`TransitionError::InvalidEvent`] if the active state has
    /// no transition for `event`, including when the active state has no
    /// definition at all. The redo stack is cleared even when the event is
    /// rejected.
    pub fn trigger(&mut self, event: &str) -> Result<(), TransitionError> {
        self.history.discard_future();

        let target = self
            .config
            .state(&self.active)
            .and_then(|definition| definition.target(event))
            .map(str::to_owned);

        let Some(target) = target else {
            trace!(from = %self.active, event, "event rejected");
            return Err(TransitionError::InvalidEvent {
                event: event.to_owned(),
                state: self.active.clone(),
            });
        };

        debug!(from = %self.active, to = %target, event, "event transition");
        self.enter(target);
        Ok(())
    }

    /// Return to the initial state.
    ///
    /// History and redo stacks are kept as they are.
    pub fn reset(&mut self) {
        debug!(from = %self.active, to = %self.config.initial, "reset");
        self.active = self.config.initial.clone();
    }

    /// Configured states, optionally only those handling `event`.
    ///
    /// Results follow configuration order.
    pub fn states(&self, event: Option<&str>) -> Vec<&str> {
        match event {
            None => self.config.state_ids().collect(),
            Some(event) => self
                .config
                .states
                .iter()
                .filter(|(_, definition)| definition.handles(event))
                .map(|(id, _)| id.as_str())
                .collect(),
        }
    }

    /// Events the active state can fire, in configuration order.
    pub fn available_events(&self) -> Vec<&str> {
        self.config
            .state(&self.active)
            .map(|definition| definition.events().collect())
            .unwrap_or_default()
    }

    /// Step back to the previously active state.
    ///
    /// Returns `false` without changing anything when there is no history.
    pub fn undo(&mut self) -> bool {
        match self.history.step_back(&self.active) {
            Some(previous) => {
                debug!(from = %self.active, to = %previous, "undo");
                self.active = previous;
                true
            }
            None => false,
        }
    }

    /// Step forward to the most recently undone state.
    ///
    /// Returns `false` without changing anything when there is nothing to
    /// redo.
    pub fn redo(&mut self) -> bool {
        match self.history.step_forward(&self.active) {
            Some(next) => {
                debug!(from = %self.active, to = %next, "redo");
                self.active = next;
                true
            }
            None => false,
        }
    }

    /// Forget all undo and redo entries. The active state is kept.
    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn enter(&mut self, target: StateId) {
        let left = std::mem::replace(&mut self.active, target);
        self.history.record(left);
    }
}
