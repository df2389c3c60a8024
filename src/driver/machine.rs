//! State machine driver over an externally stored active state.

use crate::core::{
    inject_fields, Component, HookContext, MachineError, RenderFn, RenderProps, StateAccessor,
    StateDefinition, StateTable, TransitionTo, NO_STATE,
};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// Result of one update cycle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// No automatic transition fired
    Unchanged,

    /// An automatic transition fired and was committed
    ///
    /// `to` is the target of the guard that fired. When that state's
    /// `before_enter` hook moves on again, [`StateMachine::current_state`]
    /// reports where the machine came to rest.
    Transitioned { from: String, to: String },
}

impl UpdateOutcome {
    pub fn is_transitioned(&self) -> bool {
        matches!(self, Self::Transitioned { .. })
    }
}

enum Renderer<'s, R> {
    Function(&'s RenderFn<R>),
    Component(&'s dyn Component<R>),
}

/// Declarative state machine whose active state lives outside of it.
///
/// The machine owns only its validated table, the accessor it commits
/// through, and static extra props. Everything else is passed in on each
/// call: the host calls [`on_external_update`](Self::on_external_update)
/// after every change to the data or the stored state, and
/// [`render`](Self::render) whenever it needs output.
pub struct StateMachine<D, R, A> {
    table: StateTable<D, R>,
    accessor: A,
    extra_props: Map<String, Value>,
}

impl<D, R, A: StateAccessor> StateMachine<D, R, A> {
    /// Create a machine and enter the state the accessor currently reports.
    ///
    /// Runs the initial transition from [`NO_STATE`] (including the entered
    /// state's `before_enter` hook) followed by one update cycle.
    pub fn new(table: StateTable<D, R>, accessor: A, data: &D) -> Result<Self, MachineError> {
        Self::with_extra_props(table, accessor, Map::new(), data)
    }

    /// Like [`new`](Self::new), with static props merged into every render.
    pub fn with_extra_props(
        table: StateTable<D, R>,
        accessor: A,
        extra_props: Map<String, Value>,
        data: &D,
    ) -> Result<Self, MachineError> {
        Self::start(table, accessor, extra_props, data).map(|(machine, _)| machine)
    }

    /// Construct the machine and also return the outcome of its first update cycle.
    pub(crate) fn start(
        table: StateTable<D, R>,
        accessor: A,
        extra_props: Map<String, Value>,
        data: &D,
    ) -> Result<(Self, UpdateOutcome), MachineError> {
        let machine = Self {
            table,
            accessor,
            extra_props,
        };

        let initial = machine.accessor.read();
        machine.attempt_transition(NO_STATE, &initial, data)?;
        let outcome = machine.on_external_update(data)?;

        Ok((machine, outcome))
    }

    /// Name of the active state, as the accessor reports it.
    pub fn current_state(&self) -> String {
        self.accessor.read()
    }

    pub fn table(&self) -> &StateTable<D, R> {
        &self.table
    }

    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    pub fn extra_props(&self) -> &Map<String, Value> {
        &self.extra_props
    }

    /// Commit a transition from `from` to `to`.
    ///
    /// The target is resolved first; if it is not in the table nothing is
    /// written. Otherwise the accessor is written, then the target's
    /// `before_enter` hook runs with a handle bound to the target.
    pub fn attempt_transition(&self, from: &str, to: &str, data: &D) -> Result<(), MachineError> {
        let Some(next) = self.table.get(to) else {
            debug!(from, to, "rejected transition to unknown state");
            return Err(self.table.unknown_state(from, to));
        };

        debug!(from, to, "committing state transition");
        self.accessor.write(to);

        if let Some(hook) = next.before_enter_hook() {
            let context = HookContext {
                data,
                current_state: next.name(),
                handle: self.bind(next, data),
            };
            hook(&context)?;
        }

        Ok(())
    }

    /// Run one update cycle against `data`.
    ///
    /// Guards of the active state are checked in declaration order and the
    /// first match is committed. At most one transition fires per call; the
    /// host's next update cycle picks up from the new state.
    pub fn on_external_update(&self, data: &D) -> Result<UpdateOutcome, MachineError> {
        let current = self.accessor.read();
        let state = self.resolve(&current)?;

        let Some(transition) = state.first_firing(data) else {
            return Ok(UpdateOutcome::Unchanged);
        };

        trace!(state = %current, target = %transition.target, "guard matched");
        self.attempt_transition(&current, &transition.target, data)?;

        Ok(UpdateOutcome::Transitioned {
            from: current,
            to: transition.target.clone(),
        })
    }

    /// Manually transition from the active state to `target`.
    pub fn transition_to(&self, target: &str, data: &D) -> Result<(), MachineError> {
        let current = self.accessor.read();
        let state = self.resolve(&current)?;
        self.transition_from(state, target, data)
    }

    /// Build a manual-transition handle bound to the active state.
    pub fn transitioner<'a>(&'a self, data: &'a D) -> Result<TransitionTo<'a>, MachineError> {
        let current = self.accessor.read();
        let state = self.resolve(&current)?;
        Ok(self.bind(state, data))
    }

    fn transition_from(
        &self,
        state: &StateDefinition<D, R>,
        target: &str,
        data: &D,
    ) -> Result<(), MachineError> {
        if !state.allows(target) {
            debug!(from = state.name(), to = target, "rejected unlisted manual transition");
            return Err(MachineError::UnauthorizedTransition {
                from: state.name().to_string(),
                to: target.to_string(),
            });
        }
        self.attempt_transition(state.name(), target, data)
    }

    fn bind<'a>(&'a self, state: &'a StateDefinition<D, R>, data: &'a D) -> TransitionTo<'a> {
        TransitionTo::new(state.name(), move |target: &str| {
            self.transition_from(state, target, data)
        })
    }

    /// Look up the stored active state. A name missing from the table means
    /// the store was written behind the machine's back.
    fn resolve(&self, name: &str) -> Result<&StateDefinition<D, R>, MachineError> {
        self.table
            .get(name)
            .ok_or_else(|| self.table.unknown_state(name, name))
    }
}

impl<D: Serialize, R, A: StateAccessor> StateMachine<D, R, A> {
    /// Render the active state.
    ///
    /// A render function takes precedence over a component. The props carry
    /// the data payload's fields, the extra props, the state name and a
    /// transition handle bound to the rendered state.
    pub fn render(&self, data: &D) -> Result<R, MachineError> {
        let current = self.accessor.read();
        let state = self.resolve(&current)?;

        let renderer = match (state.render_fn(), state.component_ref()) {
            (Some(render), _) => Renderer::Function(render),
            (None, Some(component)) => Renderer::Component(component),
            (None, None) => return Err(MachineError::MissingRenderer { state: current }),
        };

        let props = RenderProps::new(
            state.name(),
            inject_fields(data, &self.extra_props)?,
            self.bind(state, data),
        );

        Ok(match renderer {
            Renderer::Function(render) => render(&props),
            Renderer::Component(component) => component.render(&props),
        })
    }
}
