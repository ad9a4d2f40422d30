//! Core state machine types.
//!
//! This module contains the pure part of the slideshow state machine:
//! - State definitions via the `State` trait and the `Phase` enum
//! - Guard predicates for rule preconditions
//! - Bounded history of phase transitions
//!
//! Nothing in here talks to the transition service or the page.

mod guard;
mod history;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition, DEFAULT_HISTORY_LIMIT};
pub use state::{Phase, State};
