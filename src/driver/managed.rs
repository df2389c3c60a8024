//! Self-contained machine that owns its data and its state cell.
//!
//! Where [`StateMachine`] leaves storage and update scheduling to the host,
//! [`ManagedStateMachine`] keeps both: it starts in the table's first state
//! and, after every change it makes, keeps running update cycles until no
//! automatic transition fires.

use super::machine::StateMachine;
use crate::core::{LocalState, MachineError, StateTable};
use serde::Serialize;
use serde_json::{Map, Value};

/// Most automatic transitions a single change may chain before the machine
/// is considered to be oscillating.
pub const MAX_SETTLE_CYCLES: usize = 64;

/// State machine with component-local data and state storage.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{StateDefinition, StateTable};
/// use statecraft::driver::ManagedStateMachine;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Counter {
///     n: u32,
/// }
///
/// let table = StateTable::new(vec![
///     StateDefinition::new("low")
///         .auto_transition(|c: &Counter| c.n >= 10, "high")
///         .render(|_| "low".to_string()),
///     StateDefinition::new("high").render(|_| "high".to_string()),
/// ])?;
///
/// let mut machine = ManagedStateMachine::new(table, Counter { n: 1 })?;
/// assert_eq!(machine.render()?, "low");
///
/// machine.update_data(|c| c.n = 12)?;
/// assert_eq!(machine.render()?, "high");
/// # Ok::<(), statecraft::MachineError>(())
/// ```
pub struct ManagedStateMachine<D, R> {
    machine: StateMachine<D, R, LocalState>,
    data: D,
}

impl<D, R> ManagedStateMachine<D, R> {
    /// Create a machine in the first state of `table` and settle it.
    pub fn new(table: StateTable<D, R>, data: D) -> Result<Self, MachineError> {
        Self::with_extra_props(table, Map::new(), data)
    }

    pub fn with_extra_props(
        table: StateTable<D, R>,
        extra_props: Map<String, Value>,
        data: D,
    ) -> Result<Self, MachineError> {
        let initial = table
            .first()
            .map(|state| state.name().to_string())
            .ok_or(MachineError::EmptyTable)?;

        let (machine, first_cycle) =
            StateMachine::start(table, LocalState::new(initial), extra_props, &data)?;
        let managed = Self { machine, data };
        managed.settle_after(usize::from(first_cycle.is_transitioned()))?;

        Ok(managed)
    }

    pub fn data(&self) -> &D {
        &self.data
    }

    pub fn current_state(&self) -> String {
        self.machine.current_state()
    }

    pub fn machine(&self) -> &StateMachine<D, R, LocalState> {
        &self.machine
    }

    /// Replace the data payload and settle.
    pub fn set_data(&mut self, data: D) -> Result<(), MachineError> {
        self.data = data;
        self.settle()
    }

    /// Modify the data payload in place and settle.
    pub fn update_data<F>(&mut self, update: F) -> Result<(), MachineError>
    where
        F: FnOnce(&mut D),
    {
        update(&mut self.data);
        self.settle()
    }

    /// Manually transition from the active state, then settle.
    pub fn transition_to(&self, target: &str) -> Result<(), MachineError> {
        self.machine.transition_to(target, &self.data)?;
        self.settle()
    }

    /// Run update cycles until one fires no transition.
    ///
    /// Call this after a transition requested from inside a render, since
    /// a render cannot schedule the follow-up cycles itself.
    pub fn settle(&self) -> Result<(), MachineError> {
        self.settle_after(0)
    }

    /// Settle with `fired` automatic transitions already spent.
    ///
    /// Up to [`MAX_SETTLE_CYCLES`] transitions may fire in total; the
    /// machine must then be quiet.
    fn settle_after(&self, mut fired: usize) -> Result<(), MachineError> {
        while self.machine.on_external_update(&self.data)?.is_transitioned() {
            fired += 1;
            if fired > MAX_SETTLE_CYCLES {
                return Err(MachineError::Unsettled {
                    cycles: MAX_SETTLE_CYCLES,
                });
            }
        }
        Ok(())
    }
}

impl<D: Serialize, R> ManagedStateMachine<D, R> {
    /// Render the active state with the owned data.
    pub fn render(&self) -> Result<R, MachineError> {
        self.machine.render(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StateDefinition;

    #[derive(Clone, Debug, Default, Serialize)]
    struct Counter {
        n: i64,
    }

    fn ladder() -> StateTable<Counter, String> {
        StateTable::new(vec![
            StateDefinition::new("one")
                .auto_transition(|c: &Counter| c.n >= 2, "two")
                .render(|p| p.current_state().to_string()),
            StateDefinition::new("two")
                .auto_transition(|c: &Counter| c.n >= 10, "ten")
                .valid_transitions(["one"])
                .render(|p| p.current_state().to_string()),
            StateDefinition::new("ten").render(|p| p.current_state().to_string()),
        ])
        .unwrap()
    }

    /// States s0..=sN where each steps to the next while the data is 1.
    fn chain(transitions: usize) -> StateTable<i64, String> {
        StateTable::new(
            (0..=transitions)
                .map(|i| {
                    let state = StateDefinition::new(format!("s{i}"));
                    if i < transitions {
                        state.auto_transition(|d: &i64| *d == 1, format!("s{}", i + 1))
                    } else {
                        state
                    }
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn starts_in_first_state() {
        let machine = ManagedStateMachine::new(ladder(), Counter { n: 0 }).unwrap();

        assert_eq!(machine.current_state(), "one");
        assert_eq!(machine.render().unwrap(), "one");
    }

    #[test]
    fn chained_transitions_settle_in_one_update() {
        let mut machine = ManagedStateMachine::new(ladder(), Counter { n: 0 }).unwrap();

        machine.set_data(Counter { n: 42 }).unwrap();

        assert_eq!(machine.current_state(), "ten");
        assert_eq!(machine.data().n, 42);
    }

    #[test]
    fn construction_settles_too() {
        let machine = ManagedStateMachine::new(ladder(), Counter { n: 42 }).unwrap();

        assert_eq!(machine.current_state(), "ten");
    }

    #[test]
    fn manual_transition_settles_afterwards() {
        let mut machine = ManagedStateMachine::new(ladder(), Counter { n: 0 }).unwrap();
        machine.update_data(|c| c.n = 5).unwrap();
        assert_eq!(machine.current_state(), "two");

        // n is still 5, so "one" immediately moves back to "two".
        machine.transition_to("one").unwrap();
        assert_eq!(machine.current_state(), "two");

        machine.update_data(|c| c.n = 0).unwrap();
        machine.transition_to("one").unwrap();
        assert_eq!(machine.current_state(), "one");
    }

    #[test]
    fn empty_table_is_rejected() {
        let table: StateTable<Counter, String> = StateTable::new(Vec::new()).unwrap();

        assert!(matches!(
            ManagedStateMachine::new(table, Counter::default()),
            Err(MachineError::EmptyTable)
        ));
    }

    #[test]
    fn oscillating_guards_are_reported() {
        let table: StateTable<Counter, String> = StateTable::new(vec![
            StateDefinition::new("ping").auto_transition(|_: &Counter| true, "pong"),
            StateDefinition::new("pong").auto_transition(|_: &Counter| true, "ping"),
        ])
        .unwrap();

        match ManagedStateMachine::new(table, Counter::default()) {
            Err(MachineError::Unsettled { cycles }) => assert_eq!(cycles, MAX_SETTLE_CYCLES),
            other => panic!("Expected Unsettled, got {:?}", other.err()),
        }
    }

    #[test]
    fn chain_of_exactly_the_limit_settles() {
        let mut machine = ManagedStateMachine::new(chain(MAX_SETTLE_CYCLES), 0).unwrap();

        machine.set_data(1).unwrap();

        assert_eq!(machine.current_state(), format!("s{MAX_SETTLE_CYCLES}"));
    }

    #[test]
    fn chain_past_the_limit_is_unsettled() {
        let mut machine = ManagedStateMachine::new(chain(MAX_SETTLE_CYCLES + 1), 0).unwrap();

        match machine.set_data(1) {
            Err(MachineError::Unsettled { cycles }) => assert_eq!(cycles, MAX_SETTLE_CYCLES),
            other => panic!("Expected Unsettled, got {other:?}"),
        }
    }

    #[test]
    fn construction_has_the_same_budget_as_updates() {
        let machine = ManagedStateMachine::new(chain(MAX_SETTLE_CYCLES), 1).unwrap();
        assert_eq!(machine.current_state(), format!("s{MAX_SETTLE_CYCLES}"));

        match ManagedStateMachine::new(chain(MAX_SETTLE_CYCLES + 1), 1) {
            Err(MachineError::Unsettled { cycles }) => assert_eq!(cycles, MAX_SETTLE_CYCLES),
            other => panic!("Expected Unsettled, got {:?}", other.err()),
        }
    }
}
