//! Statecraft: a declarative state machine driver
//!
//! Statecraft separates "which state am I in and what should render" from
//! "where is that state stored". A machine is a validated table of named
//! states; the active state name lives in a store the caller owns and is
//! reached only through a [`StateAccessor`].
//!
//! # Core Concepts
//!
//! - **State table**: named states with guarded automatic transitions, a
//!   whitelist of manually reachable states, an entry hook and a renderer
//! - **Accessor**: read/write capability over the externally stored state
//! - **Update cycle**: the host calls
//!   [`StateMachine::on_external_update`] after every change to the data or
//!   the stored state; at most one automatic transition fires per cycle
//! - **Rendering**: the active state's render function or component
//!   receives injected props, including a transition handle bound to it
//!
//! # Example
//!
//! ```rust
//! use statecraft::core::{LocalState, StateDefinition, StateTable};
//! use statecraft::{MachineError, StateMachine};
//! use serde::Serialize;
//! use std::rc::Rc;
//!
//! #[derive(Serialize)]
//! struct Form {
//!     a: i64,
//! }
//!
//! let table = StateTable::new(vec![
//!     StateDefinition::new("s1")
//!         .auto_transition(|f: &Form| f.a == 2, "s2")
//!         .render(|props| format!("{} with a={}", props.current_state(), props.get("a").unwrap())),
//!     StateDefinition::new("s2").render(|_| "done".to_string()),
//! ])?;
//!
//! let store = Rc::new(LocalState::new("s1"));
//! let machine = StateMachine::new(table, Rc::clone(&store), &Form { a: 1 })?;
//! assert_eq!(machine.render(&Form { a: 1 })?, "s1 with a=1");
//!
//! // The host reports that the data changed.
//! let data = Form { a: 2 };
//! machine.on_external_update(&data)?;
//! assert_eq!(machine.render(&data)?, "done");
//! # Ok::<(), MachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod driver;

// Re-export commonly used types
pub use builder::{BuildError, StateMachineBuilder};
pub use crate::core::{
    Component, MachineError, RenderProps, StateAccessor, StateDefinition, StateTable,
};
pub use driver::{ManagedStateMachine, StateMachine, UpdateOutcome};
