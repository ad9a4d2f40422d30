//! Guarded transition rules of the slideshow.
//!
//! The table only answers "may this happen, and which phase follows". It
//! knows nothing about animations or how completions are delivered, so
//! the same rules hold whatever the host's event model is.

use super::command::{Command, Rejection};
use super::state::SlideshowState;
use crate::core::{Guard, Phase, State};

/// What moves the state machine.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Trigger {
    Open,
    Close,
    Navigate,
    /// The in-flight transition reported completion.
    Settle,
}

impl From<Command> for Trigger {
    fn from(command: Command) -> Self {
        match command {
            Command::Open(_) => Self::Open,
            Command::Close => Self::Close,
            Command::Navigate(_) => Self::Navigate,
        }
    }
}

/// Context a guard sees: the state and the command being attempted.
#[derive(Clone, Copy, Debug)]
pub struct Attempt {
    pub state: SlideshowState,
    pub command: Option<Command>,
}

/// A single row of the table.
#[derive(Clone, Debug)]
pub struct Rule {
    pub trigger: Trigger,
    pub from: Phase,
    pub to: Phase,
    pub guard: Option<Guard<Attempt>>,
    /// Reported when the guard refuses.
    pub rejects_with: Rejection,
}

impl Rule {
    fn new(trigger: Trigger, from: Phase, to: Phase) -> Self {
        Self {
            trigger,
            from,
            to,
            guard: None,
            rejects_with: Rejection::Busy,
        }
    }

    fn when<F>(mut self, rejects_with: Rejection, predicate: F) -> Self
    where
        F: Fn(&Attempt) -> bool + Send + Sync + 'static,
    {
        self.guard = Some(Guard::new(predicate));
        self.rejects_with = rejects_with;
        self
    }

    /// Check if this rule can fire for the attempt (pure).
    pub fn can_fire(&self, trigger: Trigger, attempt: &Attempt) -> bool {
        if trigger != self.trigger || attempt.state.phase() != self.from {
            return false;
        }
        self.guard.as_ref().map_or(true, |g| g.check(attempt))
    }
}

/// Ordered rules deciding which phase each command or completion leads to.
#[derive(Clone, Debug)]
pub struct TransitionTable {
    rules: Vec<Rule>,
}

impl Default for TransitionTable {
    fn default() -> Self {
        Self::standard()
    }
}

impl TransitionTable {
    /// The slideshow's rules:
    ///
    /// | trigger  | from       | to         | guard                       |
    /// |----------|------------|------------|-----------------------------|
    /// | open     | Closed     | Opening    | index in range              |
    /// | close    | Open       | Closing    |                             |
    /// | navigate | Open       | Navigating | a neighbour exists          |
    /// | settle   | Opening    | Open       |                             |
    /// | settle   | Closing    | Closed     |                             |
    /// | settle   | Navigating | Open       |                             |
    pub fn standard() -> Self {
        let rules = vec![
            Rule::new(Trigger::Open, Phase::Closed, Phase::Opening).when(
                Rejection::OutOfRange,
                |a| matches!(a.command, Some(Command::Open(i)) if i < a.state.total_items()),
            ),
            Rule::new(Trigger::Close, Phase::Open, Phase::Closing),
            Rule::new(Trigger::Navigate, Phase::Open, Phase::Navigating).when(
                Rejection::AtEdge,
                |a| match (a.command, a.state.current()) {
                    (Some(Command::Navigate(direction)), Some(current)) => direction
                        .step(current, a.state.total_items())
                        .is_some(),
                    _ => false,
                },
            ),
            Rule::new(Trigger::Settle, Phase::Opening, Phase::Open),
            Rule::new(Trigger::Settle, Phase::Closing, Phase::Closed),
            Rule::new(Trigger::Settle, Phase::Navigating, Phase::Open),
        ];
        Self { rules }
    }

    /// All rules, in the order they are tried.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Phase a command leads to, or why it must be ignored.
    pub fn resolve(&self, state: &SlideshowState, command: Command) -> Result<Phase, Rejection> {
        let trigger = Trigger::from(command);
        let attempt = Attempt {
            state: *state,
            command: Some(command),
        };

        let mut refused = None;
        for rule in self
            .rules
            .iter()
            .filter(|r| r.trigger == trigger && r.from == state.phase())
        {
            if rule.can_fire(trigger, &attempt) {
                return Ok(rule.to);
            }
            refused = Some(rule.rejects_with);
        }

        Err(refused.unwrap_or_else(|| Self::phase_rejection(state.phase(), trigger)))
    }

    /// Phase reached when the transition in flight from `phase` completes.
    pub fn settle(&self, state: &SlideshowState) -> Option<Phase> {
        let attempt = Attempt {
            state: *state,
            command: None,
        };
        self.rules
            .iter()
            .find(|r| r.can_fire(Trigger::Settle, &attempt))
            .map(|r| r.to)
    }

    fn phase_rejection(phase: Phase, trigger: Trigger) -> Rejection {
        if phase.is_transient() {
            return Rejection::Busy;
        }
        match trigger {
            Trigger::Open => Rejection::AlreadyOpen,
            Trigger::Close | Trigger::Navigate => Rejection::NotOpen,
            Trigger::Settle => Rejection::Busy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slideshow::Direction;

    fn state(phase: Phase, current: Option<usize>, total: usize) -> SlideshowState {
        let mut state = SlideshowState::new(total);
        state.enter(phase, current);
        state
    }

    #[test]
    fn open_from_closed_in_range() {
        let table = TransitionTable::standard();
        let closed = state(Phase::Closed, None, 5);

        assert_eq!(table.resolve(&closed, Command::Open(4)), Ok(Phase::Opening));
        assert_eq!(
            table.resolve(&closed, Command::Open(5)),
            Err(Rejection::OutOfRange)
        );
    }

    #[test]
    fn every_command_is_busy_while_animating() {
        let table = TransitionTable::standard();
        for phase in [Phase::Opening, Phase::Closing, Phase::Navigating] {
            let s = state(phase, Some(2), 5);
            for command in [
                Command::Open(1),
                Command::Close,
                Command::Navigate(Direction::Next),
                Command::Navigate(Direction::Prev),
            ] {
                assert_eq!(table.resolve(&s, command), Err(Rejection::Busy));
            }
        }
    }

    #[test]
    fn settled_phase_rejections() {
        let table = TransitionTable::standard();
        let open = state(Phase::Open, Some(1), 5);
        let closed = state(Phase::Closed, None, 5);

        assert_eq!(
            table.resolve(&open, Command::Open(0)),
            Err(Rejection::AlreadyOpen)
        );
        assert_eq!(table.resolve(&closed, Command::Close), Err(Rejection::NotOpen));
        assert_eq!(
            table.resolve(&closed, Command::Navigate(Direction::Next)),
            Err(Rejection::NotOpen)
        );
    }

    #[test]
    fn navigate_respects_edges() {
        let table = TransitionTable::standard();
        let first = state(Phase::Open, Some(0), 5);
        let last = state(Phase::Open, Some(4), 5);

        assert_eq!(
            table.resolve(&first, Command::Navigate(Direction::Prev)),
            Err(Rejection::AtEdge)
        );
        assert_eq!(
            table.resolve(&first, Command::Navigate(Direction::Next)),
            Ok(Phase::Navigating)
        );
        assert_eq!(
            table.resolve(&last, Command::Navigate(Direction::Next)),
            Err(Rejection::AtEdge)
        );
        assert_eq!(
            table.resolve(&last, Command::Navigate(Direction::Prev)),
            Ok(Phase::Navigating)
        );
    }

    #[test]
    fn close_from_open() {
        let table = TransitionTable::standard();
        let open = state(Phase::Open, Some(3), 5);
        assert_eq!(table.resolve(&open, Command::Close), Ok(Phase::Closing));
    }

    #[test]
    fn settle_leaves_transient_phases() {
        let table = TransitionTable::standard();

        assert_eq!(
            table.settle(&state(Phase::Opening, Some(0), 2)),
            Some(Phase::Open)
        );
        assert_eq!(
            table.settle(&state(Phase::Closing, Some(0), 2)),
            Some(Phase::Closed)
        );
        assert_eq!(
            table.settle(&state(Phase::Navigating, Some(1), 2)),
            Some(Phase::Open)
        );
        assert_eq!(table.settle(&state(Phase::Open, Some(1), 2)), None);
        assert_eq!(table.settle(&state(Phase::Closed, None, 2)), None);
    }

    #[test]
    fn every_transient_phase_has_a_settle_rule() {
        let table = TransitionTable::standard();
        for phase in [Phase::Opening, Phase::Closing, Phase::Navigating] {
            assert!(table
                .rules()
                .iter()
                .any(|r| r.trigger == Trigger::Settle && r.from == phase));
        }
    }
}
