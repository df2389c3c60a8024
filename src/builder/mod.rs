//! Builder API for ergonomic state machine construction.
//!
//! Configuration is construction-time only: the state table, the accessor
//! over the external state store, and static render props.
//!
//! # Example
//!
//! ```
//! use statecraft::builder::StateMachineBuilder;
//! use statecraft::core::{LocalState, StateDefinition};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Form {
//!     submitted: bool,
//! }
//!
//! let machine = StateMachineBuilder::new()
//!     .state(
//!         StateDefinition::new("editing")
//!             .auto_transition(|f: &Form| f.submitted, "done")
//!             .render(|_| "editing".to_string()),
//!     )
//!     .state(StateDefinition::new("done").render(|_| "done".to_string()))
//!     .accessor(LocalState::new("editing"))
//!     .build(&Form { submitted: false })
//!     .unwrap();
//!
//! assert_eq!(machine.render(&Form { submitted: false }).unwrap(), "editing");
//! ```

pub mod error;
pub mod machine;

pub use error::BuildError;
pub use machine::StateMachineBuilder;
