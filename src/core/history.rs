//! Phase transition history.
//!
//! Keeps a bounded, timestamped record of the phases the slideshow went
//! through, for diagnostics and tests.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use slidestack::core::{Phase, StateTransition};
/// use chrono::Utc;
///
/// let transition = StateTransition {
///     from: Phase::Closed,
///     to: Phase::Opening,
///     timestamp: Utc::now(),
///     cause: "open".to_string(),
/// };
/// assert_eq!(transition.cause, "open");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// What triggered it (a command or a completion)
    pub cause: String,
}

/// Ordered history of state transitions, oldest first.
///
/// Once `limit` entries are stored the oldest entry is dropped for each new
/// one. A limit of zero keeps nothing.
///
/// # Example
///
/// ```rust
/// use slidestack::core::{Phase, StateHistory, StateTransition};
/// use chrono::Utc;
///
/// let mut history = StateHistory::with_limit(8);
/// history.record(StateTransition {
///     from: Phase::Closed,
///     to: Phase::Opening,
///     timestamp: Utc::now(),
///     cause: "open".to_string(),
/// });
/// history.record(StateTransition {
///     from: Phase::Opening,
///     to: Phase::Open,
///     timestamp: Utc::now(),
///     cause: "settle".to_string(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&Phase::Closed, &Phase::Opening, &Phase::Open]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: VecDeque<StateTransition<S>>,
    limit: usize,
}

/// Default number of transitions kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 64;

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::with_limit(DEFAULT_HISTORY_LIMIT)
    }
}

impl<S: State> StateHistory<S> {
    /// Create an empty history keeping at most `limit` transitions.
    pub fn with_limit(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit.min(DEFAULT_HISTORY_LIMIT)),
            limit,
        }
    }

    /// Record a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition<S>) {
        if self.limit == 0 {
            return;
        }
        while self.transitions.len() >= self.limit {
            self.transitions.pop_front();
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of states traversed.
    ///
    /// Returns the `from` state of the oldest kept transition followed by
    /// the `to` state of every transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Elapsed time between the oldest and newest kept transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.back()
    }

    /// All kept transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition<S>> {
        self.transitions.iter()
    }

    /// Number of kept transitions.
    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    /// Whether nothing has been recorded (or the limit is zero).
    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }
}
