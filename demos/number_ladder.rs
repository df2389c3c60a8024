//! Number Ladder
//!
//! A counter drives which of four states is shown. The machine owns its
//! data and state cell, so every button press is a single `update_data`.
//!
//! Key concepts:
//! - Guarded automatic transitions, first match wins
//! - Some states are only reachable from specific others
//! - Components receive the data payload as props
//!
//! Run with: cargo run --example number_ladder

use serde::Serialize;
use statecraft::core::{StateDefinition, StateTable};
use statecraft::{Component, ManagedStateMachine, MachineError, RenderProps};

#[derive(Clone, Debug, Serialize)]
struct Counter {
    n: i64,
}

struct Banner(&'static str);

impl Component<String> for Banner {
    fn render(&self, props: &RenderProps<'_>) -> String {
        let n = props.get("n").and_then(|v| v.as_i64()).unwrap_or_default();
        format!("{} (n = {n})", self.0)
    }
}

fn states() -> Result<StateTable<Counter, String>, MachineError> {
    StateTable::new(vec![
        StateDefinition::new("theNumberOne")
            .auto_transition(|c: &Counter| c.n == 2, "theNumberTwo")
            .component(Banner("State #1")),
        StateDefinition::new("theNumberTwo")
            .auto_transition(|c: &Counter| c.n == 1, "theNumberOne")
            .auto_transition(|c: &Counter| c.n == 10, "theNumberTen")
            .component(Banner("State #2")),
        StateDefinition::new("theNumberTen")
            .auto_transition(|c: &Counter| c.n == 1, "theNumberOne")
            .auto_transition(|c: &Counter| c.n == 42, "lifeTheUniverseAndEverything")
            .component(Banner("State #10")),
        StateDefinition::new("lifeTheUniverseAndEverything").component(Banner(
            "There's a frood who really knows where his towel is.",
        )),
    ])
}

fn main() -> Result<(), MachineError> {
    println!("=== Number Ladder Example ===\n");

    let mut machine = ManagedStateMachine::new(states()?, Counter { n: 1 })?;
    println!("{}", machine.render()?);

    for delta in [9, -8, 8, -9, 1, 8, 32] {
        machine.update_data(|c| c.n += delta)?;
        println!("{:+4} -> {}", delta, machine.render()?);
    }

    println!("\nFinal state: {}", machine.current_state());
    println!("\n=== Example Complete ===");
    Ok(())
}
