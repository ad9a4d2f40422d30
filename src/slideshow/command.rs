//! Commands accepted by the controller and what became of them.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which neighbour to move to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Prev,
    Next,
}

impl Direction {
    /// Index reached by moving one step from `from`, or `None` past an edge.
    pub fn step(self, from: usize, total: usize) -> Option<usize> {
        match self {
            Self::Prev => from.checked_sub(1),
            Self::Next => from.checked_add(1).filter(|&next| next < total),
        }
    }

    /// Sign of the detail container's travel: content moves up for `Next`.
    pub fn travel_sign(self) -> f32 {
        match self {
            Self::Prev => 1.0,
            Self::Next => -1.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Prev => "prev",
            Self::Next => "next",
        }
    }
}

/// One of the three state-changing requests.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Command {
    Open(usize),
    Close,
    Navigate(Direction),
}

impl Command {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Open(_) => "open",
            Self::Close => "close",
            Self::Navigate(_) => "navigate",
        }
    }
}

/// Why a command or gesture was ignored.
///
/// None of these are failures: fast input routinely races in-flight
/// transitions and is absorbed here.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Rejection {
    /// A transition is in flight.
    Busy,
    AlreadyOpen,
    NotOpen,
    /// Navigation would move past the first or last item.
    AtEdge,
    /// No item with that index or surface.
    OutOfRange,
    /// The scroll-close observer is disabled.
    ObserverDisabled,
    /// The gesture was not strong enough, or of a type not observed.
    BelowTolerance,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::Busy => "a transition is in flight",
            Self::AlreadyOpen => "slideshow is already open",
            Self::NotOpen => "slideshow is not open",
            Self::AtEdge => "no item in that direction",
            Self::OutOfRange => "no such item",
            Self::ObserverDisabled => "scroll observer is disabled",
            Self::BelowTolerance => "gesture ignored by observer",
        };
        f.write_str(text)
    }
}

/// Result of handing a command to the controller.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Outcome {
    Accepted,
    Ignored(Rejection),
}

impl Outcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }

    /// Why the command was ignored, if it was.
    pub fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted => None,
            Self::Ignored(rejection) => Some(*rejection),
        }
    }
}
