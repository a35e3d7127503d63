//! Builder for constructing machine configurations.

use crate::builder::error::BuildError;
use crate::config::MachineConfig;
use crate::core::{EventId, StateDefinition, StateId, StateTable};

/// Builder for [`MachineConfig`] with a fluent API.
#[derive(Clone, Debug, Default)]
pub struct ConfigBuilder {
    initial: Option<StateId>,
    states: StateTable,
}

impl ConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial state (required).
    ///
    /// The state does not have to be declared.
    pub fn initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Declare a state with its transitions.
    ///
    /// Declaring the same state again adds to its existing transitions.
    pub fn state<I, E, T>(mut self, id: impl Into<StateId>, transitions: I) -> Self
    where
        I: IntoIterator<Item = (E, T)>,
        E: Into<EventId>,
        T: Into<StateId>,
    {
        let definition = self
            .states
            .entry(id.into())
            .or_insert_with(StateDefinition::new);
        definition.transitions.extend(
            transitions
                .into_iter()
                .map(|(event, target)| (event.into(), target.into())),
        );
        self
    }

    /// Add one transition, declaring `from` if needed.
    pub fn transition(
        mut self,
        from: impl Into<StateId>,
        event: impl Into<EventId>,
        to: impl Into<StateId>,
    ) -> Self {
        self.states
            .entry(from.into())
            .or_insert_with(StateDefinition::new)
            .transitions
            .insert(event.into(), to.into());
        self
    }

    /// Build the configuration.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<MachineConfig, BuildError> {
        let initial = self.initial.ok_or(BuildError::MissingInitialState)?;
        Ok(MachineConfig {
            initial,
            states: self.states,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_validates_required_fields() {
        let result = ConfigBuilder::new().state("a", [("go", "b")]).build();
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }

    #[test]
    fn fluent_api_builds_config() {
        let config = ConfigBuilder::new()
            .initial("draft")
            .state("draft", [("submit", "review")])
            .state("review", [("approve", "published"), ("reject", "draft")])
            .state("published", Vec::<(&str, &str)>::new())
            .build()
            .unwrap();

        assert_eq!(config.initial, "draft");
        assert_eq!(
            config.state_ids().collect::<Vec<_>>(),
            vec!["draft", "review", "published"]
        );
        assert_eq!(
            config.state("review").and_then(|s| s.target("reject")),
            Some("draft")
        );
        assert!(config.state("published").unwrap().transitions.is_empty());
    }

    #[test]
    fn transition_declares_source_state() {
        let config = ConfigBuilder::new()
            .initial("off")
            .transition("off", "toggle", "on")
            .transition("on", "toggle", "off")
            .build()
            .unwrap();

        assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["off", "on"]);
        assert_eq!(
            config.state("on").and_then(|s| s.target("toggle")),
            Some("off")
        );
    }

    #[test]
    fn redeclaring_state_merges_transitions() {
        let config = ConfigBuilder::new()
            .initial("a")
            .state("a", [("x", "b")])
            .state("a", [("y", "c")])
            .build()
            .unwrap();

        let a = config.state("a").unwrap();
        assert_eq!(a.events().collect::<Vec<_>>(), vec!["x", "y"]);
    }

    #[test]
    fn initial_need_not_be_declared() {
        let config = ConfigBuilder::new().initial("limbo").build().unwrap();
        assert_eq!(config.initial, "limbo");
        assert!(!config.has_state("limbo"));
    }
}
