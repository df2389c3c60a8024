//! Core state table types.
//!
//! This module contains the declarative description of a machine:
//! - Guard predicates over the data payload
//! - State definitions and the validated state table
//! - The accessor capability over the externally owned active state
//! - What hooks and renderers are handed: transition handles, hook
//!   context and render props
//! - The error taxonomy shared by tables and machines
//!
//! Nothing here drives transitions; see [`crate::driver`] for that.

mod accessor;
mod binding;
mod error;
mod guard;
mod render;
mod state;
mod table;

pub use accessor::{FnAccessor, LocalState, StateAccessor};
pub use binding::{HookContext, TransitionTo};
pub use error::MachineError;
pub use guard::{AutoTransition, Guard};
pub use render::{Component, RenderProps};
pub(crate) use render::inject_fields;
pub use state::{BeforeEnter, RenderFn, StateDefinition};
pub use table::{validate_state_names, StateTable};

/// Source state name reported for the initial transition of a machine.
pub const NO_STATE: &str = "<no state>";
