//! Machine configuration.
//!
//! A configuration names the initial state and the table of states with
//! their outgoing transitions. It is loaded once and never changed by the
//! machine afterwards.
//!
//! Only presence is validated. The initial state and transition targets
//! are free-form identifiers and need not be keys of the state table.

use crate::core::{StateDefinition, StateId, StateTable};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::ConfigError;

/// Configuration of a state machine.
///
/// # Example
///
/// ```rust
/// use waymark::config::MachineConfig;
///
/// let config = MachineConfig::from_json(
///     r#"{
///         "initial": "idle",
///         "states": {
///             "idle": { "transitions": { "start": "running" } },
///             "running": { "transitions": { "stop": "idle" } }
///         }
///     }"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.initial, "idle");
/// assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["idle", "running"]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MachineConfig {
    /// State the machine starts in and returns to on reset
    pub initial: StateId,

    /// All configured states in document order
    #[serde(default)]
    pub states: StateTable,
}

impl MachineConfig {
    /// Create a configuration with no states.
    pub fn new(initial: impl Into<StateId>) -> Self {
        Self {
            initial: initial.into(),
            states: StateTable::new(),
        }
    }

    /// Parse a configuration from a JSON document.
    ///
    /// A `null` document means no configuration was supplied and yields
    /// [`ConfigError::MissingConfiguration`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let parsed: Option<Self> = serde_json::from_str(json)?;
        parsed.ok_or(ConfigError::MissingConfiguration)
    }

    /// Render the configuration as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Definition of `id`, if configured.
    pub fn state(&self, id: &str) -> Option<&StateDefinition> {
        self.states.get(id)
    }

    pub fn has_state(&self, id: &str) -> bool {
        self.states.contains_key(id)
    }

    /// Configured state identifiers in document order.
    pub fn state_ids(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.keys().map(String::as_str)
    }
}
