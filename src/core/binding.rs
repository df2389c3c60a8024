//! Manual-transition handles bound to a single state.
//!
//! A fresh [`TransitionTo`] is built for every render and every hook call,
//! scoped to the state being rendered or entered. Its whitelist check uses
//! that state, not whichever state happens to be active when it is called.

use super::error::MachineError;
use std::fmt;

type Trigger<'a> = Box<dyn Fn(&str) -> Result<(), MachineError> + 'a>;

/// Request a manual transition away from the state this handle is bound to.
pub struct TransitionTo<'a> {
    from: &'a str,
    trigger: Trigger<'a>,
}

impl<'a> TransitionTo<'a> {
    pub(crate) fn new<F>(from: &'a str, trigger: F) -> Self
    where
        F: Fn(&str) -> Result<(), MachineError> + 'a,
    {
        Self {
            from,
            trigger: Box::new(trigger),
        }
    }

    /// Name of the state this handle was bound to.
    pub fn bound_state(&self) -> &str {
        self.from
    }

    /// Transition to `target`.
    ///
    /// Fails with [`MachineError::UnauthorizedTransition`] unless the bound
    /// state whitelists `target`, and with [`MachineError::UnknownState`]
    /// if the whitelisted name is not in the table.
    pub fn call(&self, target: &str) -> Result<(), MachineError> {
        (self.trigger)(target)
    }
}

impl fmt::Debug for TransitionTo<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransitionTo")
            .field("from", &self.from)
            .finish_non_exhaustive()
    }
}

/// Arguments handed to a state's `before_enter` hook.
#[derive(Debug)]
pub struct HookContext<'a, D> {
    /// Data payload of the update cycle that triggered the transition.
    pub data: &'a D,
    /// Name of the state just entered.
    pub current_state: &'a str,
    /// Manual transitions from the entered state.
    pub handle: TransitionTo<'a>,
}

impl<D> HookContext<'_, D> {
    /// Shorthand for `self.handle.call(target)`.
    pub fn transition_to(&self, target: &str) -> Result<(), MachineError> {
        self.handle.call(target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn call_forwards_target_to_trigger() {
        let seen = RefCell::new(Vec::new());
        let handle = TransitionTo::new("s1", |target| {
            seen.borrow_mut().push(target.to_string());
            Ok(())
        });

        handle.call("s2").unwrap();
        handle.call("s3").unwrap();

        assert_eq!(handle.bound_state(), "s1");
        assert_eq!(*seen.borrow(), ["s2", "s3"]);
    }

    #[test]
    fn call_propagates_trigger_errors() {
        let handle = TransitionTo::new("s1", |target| {
            Err(MachineError::UnauthorizedTransition {
                from: "s1".into(),
                to: target.into(),
            })
        });

        assert!(matches!(
            handle.call("s9"),
            Err(MachineError::UnauthorizedTransition { .. })
        ));
    }
}
