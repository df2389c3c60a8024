//! Access to the externally owned "current state" cell.
//!
//! The driver never stores the active state itself. It reads and writes it
//! through a [`StateAccessor`], so the state may live in a local cell, an
//! observable, or an application-wide store.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

/// Read/write capability over wherever the active state name is stored.
pub trait StateAccessor {
    /// Name of the state the store currently reports as active.
    fn read(&self) -> String;

    /// Commit `name` as the new active state.
    fn write(&self, name: &str);
}

impl<T: StateAccessor + ?Sized> StateAccessor for &T {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, name: &str) {
        (**self).write(name)
    }
}

impl<T: StateAccessor + ?Sized> StateAccessor for Box<T> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, name: &str) {
        (**self).write(name)
    }
}

impl<T: StateAccessor + ?Sized> StateAccessor for Rc<T> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, name: &str) {
        (**self).write(name)
    }
}

impl<T: StateAccessor + ?Sized> StateAccessor for Arc<T> {
    fn read(&self) -> String {
        (**self).read()
    }

    fn write(&self, name: &str) {
        (**self).write(name)
    }
}

/// Component-local storage for the active state name.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{LocalState, StateAccessor};
///
/// let cell = LocalState::new("idle");
/// cell.write("busy");
/// assert_eq!(cell.read(), "busy");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LocalState {
    current: RefCell<String>,
}

impl LocalState {
    pub fn new(initial: impl Into<String>) -> Self {
        Self {
            current: RefCell::new(initial.into()),
        }
    }
}

impl StateAccessor for LocalState {
    fn read(&self) -> String {
        self.current.borrow().clone()
    }

    fn write(&self, name: &str) {
        let mut current = self.current.borrow_mut();
        current.clear();
        current.push_str(name);
    }
}

/// Accessor built from a caller-supplied getter and setter.
///
/// This is the shape to use when the state lives in an external store:
/// the getter selects it, the setter dispatches the update.
///
/// # Example
///
/// ```rust
/// use statecraft::core::{FnAccessor, StateAccessor};
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let store = Rc::new(RefCell::new(String::from("s1")));
/// let (get, set) = (Rc::clone(&store), Rc::clone(&store));
///
/// let accessor = FnAccessor::new(
///     move || get.borrow().clone(),
///     move |name: &str| *set.borrow_mut() = name.to_string(),
/// );
///
/// accessor.write("s2");
/// assert_eq!(*store.borrow(), "s2");
/// ```
pub struct FnAccessor<G, S> {
    get: G,
    set: S,
}

impl<G, S> FnAccessor<G, S>
where
    G: Fn() -> String,
    S: Fn(&str),
{
    pub fn new(get: G, set: S) -> Self {
        Self { get, set }
    }
}

impl<G, S> StateAccessor for FnAccessor<G, S>
where
    G: Fn() -> String,
    S: Fn(&str),
{
    fn read(&self) -> String {
        (self.get)()
    }

    fn write(&self, name: &str) {
        (self.set)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn local_state_round_trips_writes() {
        let cell = LocalState::new("s1");
        assert_eq!(cell.read(), "s1");

        cell.write("s2");
        assert_eq!(cell.read(), "s2");
    }

    #[test]
    fn fn_accessor_delegates_to_closures() {
        let writes = Cell::new(0);
        let accessor = FnAccessor::new(|| "fixed".to_string(), |_name: &str| {
            writes.set(writes.get() + 1)
        });

        accessor.write("ignored");
        accessor.write("ignored");

        assert_eq!(accessor.read(), "fixed");
        assert_eq!(writes.get(), 2);
    }

    #[test]
    fn shared_handles_see_the_same_cell() {
        let cell = Rc::new(LocalState::new("a"));
        let handle: Box<dyn StateAccessor> = Box::new(Rc::clone(&cell));

        handle.write("b");

        assert_eq!(cell.read(), "b");
        assert_eq!((&*cell).read(), "b");
    }
}
