//! Builder API for ergonomic configuration construction.
//!
//! This module provides a fluent builder and a macro for assembling a
//! [`MachineConfig`] in code instead of loading it from a document.

pub mod config;
pub mod error;
pub mod macros;

pub use config::ConfigBuilder;
pub use error::BuildError;

use crate::config::MachineConfig;
use crate::core::StateId;

/// Create a configuration where one event cycles through `states` in order.
///
/// The last state loops back to the first; the first state is initial.
/// Returns an error if `states` is empty.
///
/// # Example
///
/// ```
/// use waymark::builder::cyclic_config;
///
/// let config = cyclic_config(["red", "green", "yellow"], "next").unwrap();
///
/// assert_eq!(config.initial, "red");
/// assert_eq!(
///     config.state("yellow").and_then(|s| s.target("next")),
///     Some("red")
/// );
/// ```
pub fn cyclic_config<I, S>(states: I, event: &str) -> Result<MachineConfig, BuildError>
where
    I: IntoIterator<Item = S>,
    S: Into<StateId>,
{
    let states: Vec<StateId> = states.into_iter().map(Into::into).collect();
    let Some(first) = states.first() else {
        return Err(BuildError::MissingInitialState);
    };

    let builder = ConfigBuilder::new().initial(first.clone());
    let successors = states.iter().skip(1).chain(std::iter::once(first));
    states
        .iter()
        .zip(successors)
        .fold(builder, |builder, (from, to)| {
            builder.transition(from.clone(), event, to.clone())
        })
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cyclic_config_links_states_in_a_ring() {
        let config = cyclic_config(["a", "b", "c"], "step").unwrap();

        assert_eq!(config.initial, "a");
        assert_eq!(config.state_ids().collect::<Vec<_>>(), vec!["a", "b", "c"]);
        assert_eq!(config.state("a").and_then(|s| s.target("step")), Some("b"));
        assert_eq!(config.state("b").and_then(|s| s.target("step")), Some("c"));
        assert_eq!(config.state("c").and_then(|s| s.target("step")), Some("a"));
    }

    #[test]
    fn cyclic_config_single_state_loops_to_itself() {
        let config = cyclic_config(["solo"], "tick").unwrap();
        assert_eq!(
            config.state("solo").and_then(|s| s.target("tick")),
            Some("solo")
        );
    }

    #[test]
    fn cyclic_config_requires_states() {
        let result = cyclic_config(Vec::<String>::new(), "tick");
        assert_eq!(result, Err(BuildError::MissingInitialState));
    }
}
