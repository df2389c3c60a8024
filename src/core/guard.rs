//! Guard predicates for automatic transitions.
//!
//! Guards are pure boolean functions over the externally owned data payload.
//! They decide whether an automatic transition fires during an update cycle.

use std::fmt;

/// Pure predicate that decides whether an automatic transition fires.
///
/// Guards see only the data payload, never the machine. They must be
/// deterministic and fast: they run on every update cycle.
///
/// # Example
///
/// ```rust
/// use statecraft::core::Guard;
///
/// struct Counter {
///     n: u32,
/// }
///
/// let reached_ten = Guard::new(|c: &Counter| c.n >= 10);
///
/// assert!(!reached_ten.check(&Counter { n: 3 }));
/// assert!(reached_ten.check(&Counter { n: 10 }));
/// ```
pub struct Guard<D> {
    predicate: Box<dyn Fn(&D) -> bool + Send + Sync>,
}

impl<D> Guard<D> {
    /// Create a guard from a pure predicate function.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Evaluate the guard against the data payload.
    pub fn check(&self, data: &D) -> bool {
        (self.predicate)(data)
    }
}

impl<D> fmt::Debug for Guard<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(<predicate>)")
    }
}

/// A guarded automatic transition: when `guard` holds, move to `target`.
pub struct AutoTransition<D> {
    pub guard: Guard<D>,
    pub target: String,
}

impl<D> AutoTransition<D> {
    pub fn new<F>(guard: F, target: impl Into<String>) -> Self
    where
        F: Fn(&D) -> bool + Send + Sync + 'static,
    {
        Self {
            guard: Guard::new(guard),
            target: target.into(),
        }
    }

    /// Check whether this transition fires for `data`.
    pub fn fires(&self, data: &D) -> bool {
        self.guard.check(data)
    }
}

impl<D> fmt::Debug for AutoTransition<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoTransition")
            .field("target", &self.target)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug)]
    struct Form {
        a: i64,
        b: i64,
    }

    #[test]
    fn guard_allows_matching_data() {
        let guard = Guard::new(|f: &Form| f.a == 2);

        assert!(guard.check(&Form { a: 2, b: 0 }));
        assert!(!guard.check(&Form { a: 1, b: 0 }));
    }

    #[test]
    fn guard_is_deterministic() {
        let form = Form { a: 2, b: 2 };
        let guard = Guard::new(|f: &Form| f.a == f.b);

        let result1 = guard.check(&form);
        let result2 = guard.check(&form);

        assert_eq!(result1, result2);
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|f: &Form| f.a > 0 && (f.b == 2 || f.b == 3));

        assert!(guard.check(&Form { a: 1, b: 2 }));
        assert!(guard.check(&Form { a: 1, b: 3 }));
        assert!(!guard.check(&Form { a: 0, b: 2 }));
        assert!(!guard.check(&Form { a: 1, b: 4 }));
    }

    #[test]
    fn auto_transition_fires_with_its_guard() {
        let transition = AutoTransition::new(|f: &Form| f.b == 2, "s3");

        assert_eq!(transition.target, "s3");
        assert!(transition.fires(&Form { a: 1, b: 2 }));
        assert!(!transition.fires(&Form { a: 1, b: 1 }));
    }
}
