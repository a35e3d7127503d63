//! Traffic Light State Machine
//!
//! This example demonstrates a simple cyclic state machine.
//!
//! Key concepts:
//! - Cyclic event transitions (states repeat)
//! - Directed jumps for maintenance overrides
//! - Undo/redo through the light's history
//!
//! Run with: cargo run --example traffic_light

use waymark::builder::cyclic_config;
use waymark::{StateMachine, TransitionError};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== Traffic Light State Machine ===\n");

    let mut config = cyclic_config(["red", "green", "yellow"], "next")?;
    config
        .states
        .insert("flashing".to_string(), Default::default());

    let mut light = StateMachine::new(config);
    println!("Initial state: {}", light.current_state());
    println!("States: {:?}\n", light.states(None));

    println!("Transition sequence:");
    for _ in 0..4 {
        let from = light.current_state().to_string();
        light.trigger("next")?;
        println!("  {} -> {}", from, light.current_state());
    }

    println!("\nMaintenance override:");
    light.change_state("flashing")?;
    println!("  now {}", light.current_state());

    match light.trigger("next") {
        Err(TransitionError::InvalidEvent { event, state }) => {
            println!("  '{}' is ignored while {}", event, state);
        }
        other => println!("  unexpected: {:?}", other),
    }

    println!("\nUndoing the override:");
    while light.undo() {
        println!("  back to {}", light.current_state());
    }
    println!("  history empty, {} redo steps available", light.future().len());

    light.reset();
    println!("\nAfter reset: {}", light.current_state());

    println!("\n=== Example Complete ===");
    Ok(())
}
