//! Slideshow state owned by the controller.

use super::command::Direction;
use crate::core::Phase;
use serde::{Deserialize, Serialize};

/// Which navigation arrows should be visible.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct ArrowVisibility {
    pub prev: bool,
    pub next: bool,
}

impl ArrowVisibility {
    /// Edge policy: no `prev` on the first item, no `next` on the last.
    pub fn at(current: usize, total: usize) -> Self {
        Self {
            prev: current > 0,
            next: current + 1 < total,
        }
    }

    pub fn get(&self, direction: Direction) -> bool {
        match direction {
            Direction::Prev => self.prev,
            Direction::Next => self.next,
        }
    }
}

/// Phase, current item and item count.
///
/// `is_open` and `is_animating` are derived from the phase, so the two
/// flags can never disagree with the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct SlideshowState {
    phase: Phase,
    current: Option<usize>,
    total_items: usize,
}

impl SlideshowState {
    pub fn new(total_items: usize) -> Self {
        Self {
            phase: Phase::Closed,
            current: None,
            total_items,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Item shown in the detail view; `None` is the "no item" sentinel.
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn is_open(&self) -> bool {
        self.phase.is_open()
    }

    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Arrow visibility for the current item; both hidden with no item.
    pub fn arrows(&self) -> ArrowVisibility {
        self.current
            .map(|current| ArrowVisibility::at(current, self.total_items))
            .unwrap_or_default()
    }

    pub(crate) fn enter(&mut self, phase: Phase, current: Option<usize>) {
        self.phase = phase;
        self.current = current;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_closed_without_item() {
        let state = SlideshowState::new(5);
        assert_eq!(state.phase(), Phase::Closed);
        assert_eq!(state.current(), None);
        assert!(!state.is_open());
        assert!(!state.is_animating());
        assert_eq!(state.arrows(), ArrowVisibility::default());
    }

    #[test]
    fn arrows_follow_edge_policy() {
        assert_eq!(
            ArrowVisibility::at(0, 5),
            ArrowVisibility {
                prev: false,
                next: true
            }
        );
        assert_eq!(
            ArrowVisibility::at(2, 5),
            ArrowVisibility {
                prev: true,
                next: true
            }
        );
        assert_eq!(
            ArrowVisibility::at(4, 5),
            ArrowVisibility {
                prev: true,
                next: false
            }
        );
        assert_eq!(ArrowVisibility::at(0, 1), ArrowVisibility::default());
    }

    #[test]
    fn flags_derive_from_phase() {
        let mut state = SlideshowState::new(3);
        state.enter(Phase::Opening, Some(1));
        assert!(state.is_animating());
        assert!(!state.is_open());

        state.enter(Phase::Open, Some(1));
        assert!(state.is_open());
        assert!(!state.is_animating());
        assert!(state.arrows().get(Direction::Prev));
        assert!(state.arrows().get(Direction::Next));
    }
}
