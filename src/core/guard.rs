//! Guard predicates for controlling transitions.
//!
//! Guards are pure boolean functions evaluated before a rule fires. They
//! let the transition table state its preconditions declaratively.

use std::fmt;
use std::sync::Arc;

/// Pure predicate over some context `C` that decides whether a rule may fire.
///
/// # Example
///
/// ```rust
/// use slidestack::core::Guard;
///
/// struct Counter {
///     value: usize,
///     max: usize,
/// }
///
/// let below_max = Guard::new(|c: &Counter| c.value + 1 < c.max);
///
/// assert!(below_max.check(&Counter { value: 0, max: 5 }));
/// assert!(!below_max.check(&Counter { value: 4, max: 5 }));
/// ```
pub struct Guard<C> {
    predicate: Arc<dyn Fn(&C) -> bool + Send + Sync>,
}

impl<C> Guard<C> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Check if the guard allows the rule for this context.
    pub fn check(&self, context: &C) -> bool {
        (self.predicate)(context)
    }
}

impl<C> Clone for Guard<C> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C> fmt::Debug for Guard<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
