//! Traffic Light with Undo/Redo
//!
//! This example walks a cyclic light through a few transitions, then
//! rewinds and replays them.
//!
//! Key concepts:
//! - Declarative configuration with `fsm_config!`
//! - The bootstrap state before the first transition
//! - Undo/redo over the transition history
//!
//! Run with: RUST_LOG=debug cargo run --example traffic_light

use linear_fsm::engine::{Fsm, FsmError};
use linear_fsm::fsm_config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), FsmError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    println!("=== Traffic Light State Machine ===\n");

    let config = fsm_config! {
        initial: red,
        states: {
            red => { next => green },
            green => { next => yellow, emergency => red },
            yellow => { next => red },
        }
    };

    let mut light = Fsm::new(config)?;
    println!("Before reset: {}", light.state());

    light.reset()?;
    println!("After reset:  {}", light.state());

    for _ in 0..2 {
        light.trigger("next")?;
        println!("next       -> {}", light.state());
    }

    if let Err(err) = light.trigger("emergency") {
        println!("emergency  -> rejected: {}", err);
    }

    println!("\nStates handling 'emergency': {:?}", light.states(Some("emergency")));

    println!("\nRewinding:");
    while light.undo() {
        println!("undo       -> {}", light.state());
    }

    println!("\nReplaying:");
    while light.redo() {
        println!("redo       -> {}", light.state());
    }

    println!("\nPath: {}", light.history().path().join(" -> "));

    println!("\n=== Example Complete ===");
    Ok(())
}
