//! State tables and their structural validation.
//!
//! A table is validated once, when it is built, and is immutable afterwards.
//! Only name uniqueness is checked eagerly. Transition targets are resolved
//! lazily, when a transition actually runs.

use super::state::StateDefinition;
use super::error::MachineError;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Check that every name in `names` is unique.
///
/// Names are sorted and adjacent pairs compared. Every duplicate is
/// collected, so the error lists each duplicated name once, in sorted order.
///
/// # Example
///
/// ```rust
/// use statecraft::core::validate_state_names;
/// use statecraft::MachineError;
///
/// assert!(validate_state_names(["s1", "s2"]).is_ok());
///
/// match validate_state_names(["b", "a", "b", "a", "c"]) {
///     Err(MachineError::DuplicateStateNames { names }) => assert_eq!(names, ["a", "b"]),
///     other => panic!("unexpected: {other:?}"),
/// }
/// ```
pub fn validate_state_names<'a, I>(names: I) -> Result<(), MachineError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut sorted: Vec<&str> = names.into_iter().collect();
    sorted.sort_unstable();

    let checks: Vec<Validation<(), NonEmptyVec<String>>> = sorted
        .windows(2)
        .map(|pair| {
            if pair[0] == pair[1] {
                Validation::fail(pair[0].to_string())
            } else {
                Validation::success(())
            }
        })
        .collect();

    match Validation::all_vec(checks) {
        Validation::Success(_) => Ok(()),
        Validation::Failure(duplicates) => {
            let mut names: Vec<String> = duplicates.iter().cloned().collect();
            // A name repeated three times shows up in two adjacent pairs.
            names.dedup();
            Err(MachineError::DuplicateStateNames { names })
        }
    }
}

/// Ordered, validated collection of state definitions.
#[derive(Debug)]
pub struct StateTable<D, R> {
    states: Vec<StateDefinition<D, R>>,
}

impl<D, R> StateTable<D, R> {
    /// Build a table, failing if any state name is duplicated.
    pub fn new(states: Vec<StateDefinition<D, R>>) -> Result<Self, MachineError> {
        validate_state_names(states.iter().map(StateDefinition::name))?;
        Ok(Self { states })
    }

    /// Exact-name lookup.
    pub fn get(&self, name: &str) -> Option<&StateDefinition<D, R>> {
        self.states.iter().find(|s| s.name() == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// State names in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.states.iter().map(StateDefinition::name)
    }

    pub fn first(&self) -> Option<&StateDefinition<D, R>> {
        self.states.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StateDefinition<D, R>> + '_ {
        self.states.iter()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Build the error for a transition whose target is not in this table.
    pub(crate) fn unknown_state(&self, from: &str, to: &str) -> MachineError {
        MachineError::UnknownState {
            from: from.to_string(),
            to: to.to_string(),
            valid: self.names().map(str::to_string).collect(),
        }
    }
}
