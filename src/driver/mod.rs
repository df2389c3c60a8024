//! Driving a state table against externally owned data and state.
//!
//! This module is the imperative shell around [`crate::core`]:
//!
//! - **Transitions**: automatic (guarded, evaluated once per host update)
//!   and manual (checked against the source state's whitelist)
//! - **Hooks**: `before_enter` runs after the state write, before any render
//! - **Rendering**: the active state's render function or component is
//!   invoked with injected props
//!
//! Everything is synchronous and runs on the calling thread. A single
//! machine must not be driven from two places at once.

mod machine;
mod managed;

pub use machine::{StateMachine, UpdateOutcome};
pub use managed::{ManagedStateMachine, MAX_SETTLE_CYCLES};
