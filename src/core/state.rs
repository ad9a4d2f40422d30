//! State trait and the slideshow's phases.
//!
//! States are plain values: inspecting them never has side effects.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: States are copied into history records
/// - `PartialEq`: Rules match on the source state
/// - `Debug`: States show up in logs
/// - `Serialize` + `Deserialize`: History can be exported for diagnostics
///
/// # Example
///
/// ```rust
/// use slidestack::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
/// enum Door {
///     Shut,
///     Swinging,
///     Ajar,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &str {
///         match self {
///             Self::Shut => "Shut",
///             Self::Swinging => "Swinging",
///             Self::Ajar => "Ajar",
///         }
///     }
///
///     fn is_transient(&self) -> bool {
///         matches!(self, Self::Swinging)
///     }
/// }
///
/// assert!(Door::Swinging.is_transient());
/// assert!(Door::Ajar.is_settled());
/// ```
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this state only exists while something is in flight.
    ///
    /// Transient states are left by a completion signal rather than by
    /// a command. Default implementation returns `false`.
    fn is_transient(&self) -> bool {
        false
    }

    /// Check if this state is waiting for a command.
    fn is_settled(&self) -> bool {
        !self.is_transient()
    }
}

/// Where the slideshow is in its open/close/navigate cycle.
///
/// `Opening`, `Closing` and `Navigating` are the phases during which a
/// transition is in flight; they are left only through a completion cue.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize, Default)]
pub enum Phase {
    /// Grid is showing, no item selected.
    #[default]
    Closed,
    /// Flip from grid into detail view is running.
    Opening,
    /// Detail view is showing and idle.
    Open,
    /// Flip from detail view back to the grid is running.
    Closing,
    /// Detail view is sliding to a neighbouring item.
    Navigating,
}

impl Phase {
    /// Whether the detail view counts as open.
    ///
    /// Turns on only once opening completes and off only once closing
    /// completes.
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open | Self::Closing | Self::Navigating)
    }

    /// Whether a transition is in flight. Commands are ignored meanwhile.
    pub fn is_animating(&self) -> bool {
        self.is_transient()
    }
}

impl State for Phase {
    fn name(&self) -> &str {
        match self {
            Self::Closed => "Closed",
            Self::Opening => "Opening",
            Self::Open => "Open",
            Self::Closing => "Closing",
            Self::Navigating => "Navigating",
        }
    }

    fn is_transient(&self) -> bool {
        matches!(self, Self::Opening | Self::Closing | Self::Navigating)
    }
}
