//! Build errors for the state machine builder.

use crate::core::MachineError;
use thiserror::Error;

/// Errors that can occur when building a state machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("State accessor not specified. Call .accessor(accessor) before .build()")]
    MissingAccessor,

    #[error("No states defined. Add at least one state")]
    NoStates,

    #[error(transparent)]
    Machine(#[from] MachineError),
}
