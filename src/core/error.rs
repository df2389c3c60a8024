//! Errors raised while validating, transitioning and rendering.
//!
//! All of these describe configuration defects. None are retried and none
//! are downgraded to no-ops; they propagate to whoever drives the machine.

use thiserror::Error;

/// Errors that can occur while driving a state machine.
#[derive(Debug, Error)]
pub enum MachineError {
    #[error(
        "State names must be unique. The following state names were duplicated: [{}]",
        .names.join(", ")
    )]
    DuplicateStateNames { names: Vec<String> },

    #[error(
        "Tried to transition from state '{from}' to '{to}'. Valid states are: [{}]",
        .valid.join(", ")
    )]
    UnknownState {
        from: String,
        to: String,
        valid: Vec<String>,
    },

    #[error("'{to}' is not listed in the valid transitions of state '{from}'")]
    UnauthorizedTransition { from: String, to: String },

    #[error("Neither a render function nor a component was found for state '{state}'")]
    MissingRenderer { state: String },

    #[error("Failed to build render props from the data payload: {0}")]
    Props(#[from] serde_json::Error),

    #[error("State table is empty. Add at least one state")]
    EmptyTable,

    #[error("Automatic transitions did not settle after {cycles} update cycles")]
    Unsettled { cycles: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_lists_valid_names() {
        let err = MachineError::UnknownState {
            from: "s1".into(),
            to: "s3".into(),
            valid: vec!["s1".into(), "s2".into()],
        };

        assert_eq!(
            err.to_string(),
            "Tried to transition from state 's1' to 's3'. Valid states are: [s1, s2]"
        );
    }

    #[test]
    fn unauthorized_names_both_states() {
        let err = MachineError::UnauthorizedTransition {
            from: "s1".into(),
            to: "s3".into(),
        };

        assert_eq!(
            err.to_string(),
            "'s3' is not listed in the valid transitions of state 's1'"
        );
    }
}
