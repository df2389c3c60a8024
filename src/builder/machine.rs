//! Builder for constructing state machines.

use crate::builder::error::BuildError;
use crate::core::{StateAccessor, StateDefinition, StateTable};
use crate::driver::StateMachine;
use serde_json::{Map, Value};

/// Builder for constructing state machines with a fluent API.
pub struct StateMachineBuilder<D, R, A> {
    states: Vec<StateDefinition<D, R>>,
    accessor: Option<A>,
    extra_props: Map<String, Value>,
}

impl<D, R, A: StateAccessor> StateMachineBuilder<D, R, A> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            accessor: None,
            extra_props: Map::new(),
        }
    }

    /// Append a state. Declaration order is kept.
    pub fn state(mut self, state: StateDefinition<D, R>) -> Self {
        self.states.push(state);
        self
    }

    /// Append multiple states at once.
    pub fn states<I>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = StateDefinition<D, R>>,
    {
        self.states.extend(states);
        self
    }

    /// Set where the active state is stored (required).
    pub fn accessor(mut self, accessor: A) -> Self {
        self.accessor = Some(accessor);
        self
    }

    /// Replace the static props merged into every render.
    pub fn extra_props(mut self, props: Map<String, Value>) -> Self {
        self.extra_props = props;
        self
    }

    /// Add one static render prop.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_props.insert(key.into(), value.into());
        self
    }

    /// Validate the table and start the machine against `data`.
    ///
    /// Starting runs the initial transition into whatever state the
    /// accessor reports, then one update cycle.
    pub fn build(self, data: &D) -> Result<StateMachine<D, R, A>, BuildError> {
        let accessor = self.accessor.ok_or(BuildError::MissingAccessor)?;

        if self.states.is_empty() {
            return Err(BuildError::NoStates);
        }

        let table = StateTable::new(self.states)?;
        let machine = StateMachine::with_extra_props(table, accessor, self.extra_props, data)?;

        Ok(machine)
    }
}

impl<D, R, A: StateAccessor> Default for StateMachineBuilder<D, R, A> {
    fn default() -> Self {
        Self::new()
    }
}
