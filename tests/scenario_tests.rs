//! End-to-end scenarios driven through the public API.

use std::sync::Arc;
use waymark::{ConfigError, MachineConfig, StateMachine, TransitionError};

const IDLE_RUNNING: &str = r#"{
    "initial": "idle",
    "states": {
        "idle": { "transitions": { "start": "running" } },
        "running": { "transitions": { "stop": "idle" } }
    }
}"#;

fn ids(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn start_undo_redo_scenario() {
    let mut machine = StateMachine::from_json(IDLE_RUNNING).unwrap();

    machine.trigger("start").unwrap();
    assert_eq!(machine.current_state(), "running");
    assert_eq!(machine.history(), ids(&["idle"]).as_slice());

    assert!(machine.undo());
    assert_eq!(machine.current_state(), "idle");
    assert_eq!(machine.future(), ids(&["running"]).as_slice());

    assert!(machine.redo());
    assert_eq!(machine.current_state(), "running");
    assert_eq!(machine.history(), ids(&["idle"]).as_slice());
    assert!(machine.future().is_empty());
}

// A rejected directed transition still wipes the redo stack.
#[test]
fn rejected_change_state_still_clears_future() {
    let mut machine = StateMachine::from_json(IDLE_RUNNING).unwrap();
    machine.trigger("start").unwrap();
    assert!(machine.undo());
    assert_eq!(machine.future(), ids(&["running"]).as_slice());

    let result = machine.change_state("crashed");

    assert_eq!(
        result,
        Err(TransitionError::InvalidState {
            state: "crashed".into()
        })
    );
    assert_eq!(machine.current_state(), "idle");
    assert!(machine.history().is_empty());
    assert!(machine.future().is_empty());
    assert!(!machine.redo());
}

// Same for a rejected event.
#[test]
fn rejected_trigger_still_clears_future() {
    let mut machine = StateMachine::from_json(IDLE_RUNNING).unwrap();
    machine.trigger("start").unwrap();
    assert!(machine.undo());

    let result = machine.trigger("stop");

    assert_eq!(
        result,
        Err(TransitionError::InvalidEvent {
            event: "stop".into(),
            state: "idle".into()
        })
    );
    assert_eq!(machine.current_state(), "idle");
    assert!(machine.history().is_empty());
    assert!(machine.future().is_empty());
}

#[test]
fn missing_configuration_is_rejected() {
    assert!(matches!(
        StateMachine::from_config(None::<Arc<MachineConfig>>),
        Err(ConfigError::MissingConfiguration)
    ));
    assert!(matches!(
        StateMachine::from_json("null"),
        Err(ConfigError::MissingConfiguration)
    ));
}

#[test]
fn state_without_transitions_field_rejects_events() {
    let mut machine = StateMachine::from_json(
        r#"{"initial": "start", "states": {"start": {}, "end": {}}}"#,
    )
    .unwrap();

    assert!(matches!(
        machine.trigger("anything"),
        Err(TransitionError::InvalidEvent { .. })
    ));

    machine.change_state("end").unwrap();
    assert_eq!(machine.current_state(), "end");
}

#[test]
fn enumerates_states_in_document_order() {
    let machine = StateMachine::from_json(
        r#"{
            "initial": "c",
            "states": {
                "c": { "transitions": { "go": "a" } },
                "a": { "transitions": { "go": "b", "back": "c" } },
                "b": { "transitions": { "back": "a" } }
            }
        }"#,
    )
    .unwrap();

    assert_eq!(machine.states(None), vec!["c", "a", "b"]);
    assert_eq!(machine.states(Some("go")), vec!["c", "a"]);
    assert_eq!(machine.states(Some("back")), vec!["a", "b"]);
    assert!(machine.states(Some("none")).is_empty());
}

#[test]
fn machines_sharing_a_configuration_are_independent() {
    let config = Arc::new(MachineConfig::from_json(IDLE_RUNNING).unwrap());
    let mut first = StateMachine::new(Arc::clone(&config));
    let second = StateMachine::new(Arc::clone(&config));

    first.trigger("start").unwrap();

    assert_eq!(first.current_state(), "running");
    assert_eq!(second.current_state(), "idle");
    assert!(second.history().is_empty());
}

#[test]
fn reset_after_undo_keeps_redo_available() {
    let mut machine = StateMachine::from_json(IDLE_RUNNING).unwrap();
    machine.trigger("start").unwrap();
    machine.trigger("stop").unwrap();
    assert!(machine.undo());
    assert_eq!(machine.current_state(), "running");

    machine.reset();
    assert_eq!(machine.current_state(), "idle");
    assert_eq!(machine.history(), ids(&["idle"]).as_slice());
    assert_eq!(machine.future(), ids(&["idle"]).as_slice());

    assert!(machine.redo());
    assert_eq!(machine.current_state(), "idle");
    assert_eq!(machine.history(), ids(&["idle", "idle"]).as_slice());
}
