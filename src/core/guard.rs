//! Guard predicates for choosing between competing transitions.
//!
//! Guards are pure boolean functions over a machine's context. When a state
//! declares several candidates for the same event, the first candidate whose
//! guard passes is taken.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that decides whether a transition candidate applies.
///
/// The predicate is shared behind an `Arc`, so cloning a guard is cheap and
/// a single guard can back several transitions.
///
/// # Example
///
/// ```rust
/// use quizset::core::Guard;
///
/// struct Counter {
///     value: u32,
/// }
///
/// let at_limit = Guard::new(|c: &Counter| c.value >= 3);
///
/// assert!(!at_limit.check(&Counter { value: 1 }));
/// assert!(at_limit.check(&Counter { value: 3 }));
/// ```
pub struct Guard<T> {
    predicate: Arc<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the predicate against a value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }

    /// Guard that passes exactly when `self` fails.
    ///
    /// Useful for declaring a pair of exhaustive, mutually exclusive
    /// candidates from a single predicate.
    pub fn negate(&self) -> Self
    where
        T: 'static,
    {
        let inner = Arc::clone(&self.predicate);
        Guard {
            predicate: Arc::new(move |value: &T| !inner(value)),
        }
    }
}

impl<T> Clone for Guard<T> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Ctx {
        done: bool,
        count: u32,
    }

    #[test]
    fn guard_allows_matching_values() {
        let guard = Guard::new(|c: &Ctx| c.done);

        assert!(guard.check(&Ctx { done: true, count: 0 }));
        assert!(!guard.check(&Ctx { done: false, count: 0 }));
    }

    #[test]
    fn guard_is_deterministic() {
        let ctx = Ctx { done: false, count: 7 };
        let guard = Guard::new(|c: &Ctx| c.count > 5);

        assert_eq!(guard.check(&ctx), guard.check(&ctx));
    }

    #[test]
    fn negated_guard_is_the_complement() {
        let guard = Guard::new(|c: &Ctx| c.count % 2 == 0);
        let negated = guard.negate();

        for count in 0..10 {
            let ctx = Ctx { done: false, count };
            assert_ne!(guard.check(&ctx), negated.check(&ctx));
        }
    }

    #[test]
    fn cloned_guard_shares_predicate() {
        let guard = Guard::new(|c: &Ctx| c.done && c.count == 1);
        let cloned = guard.clone();
        let ctx = Ctx { done: true, count: 1 };

        assert!(guard.check(&ctx));
        assert!(cloned.check(&ctx));
    }
}
