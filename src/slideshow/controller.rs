//! The interaction controller.

use super::choreography::{self, Scene};
use super::command::{Command, Direction, Outcome, Rejection};
use super::cue::Cue;
use super::selection::Selection;
use super::state::{ArrowVisibility, SlideshowState};
use super::table::TransitionTable;
use crate::config::SlideshowConfig;
use crate::core::{Phase, State, StateHistory, StateTransition};
use crate::gallery::{ElementId, Gallery};
use crate::input::{Gesture, GestureObserver, ObserverService};
use crate::motion::{Headless, Offset, Property, Props, TransitionService};
use crate::stage::Stage;
use crate::viewport::Viewport;
use chrono::Utc;
use std::time::Duration;

/// Owns the slideshow state and sequences every transition.
///
/// Commands return immediately. The latch (`is_animating`) is set before
/// anything is handed to the collaborators and is only released by the
/// matching completion [`Cue`], so overlapping input is ignored rather
/// than queued.
pub struct Slideshow<S, T, O> {
    gallery: Gallery,
    config: SlideshowConfig,
    viewport: Viewport,
    table: TransitionTable,
    state: SlideshowState,
    selection: Selection,
    history: StateHistory<Phase>,
    /// `(previous, upcoming)` of the navigation in flight; `None` outside
    /// `Navigating`.
    navigation: Option<(usize, usize)>,
    stage: S,
    motion: T,
    observer: O,
}

impl<S, T, O> Slideshow<S, T, O>
where
    S: Stage,
    T: TransitionService,
    O: GestureObserver,
{
    /// Create a closed slideshow. The scroll-close observer is created
    /// from `config.observer` and stays disabled until the first open.
    pub fn new<F>(
        gallery: Gallery,
        config: SlideshowConfig,
        viewport: Viewport,
        stage: S,
        motion: T,
        observers: &mut F,
    ) -> Self
    where
        F: ObserverService<Handle = O>,
    {
        let mut observer = observers.create_observer(&config.observer);
        observer.disable();

        Self {
            state: SlideshowState::new(gallery.len()),
            history: StateHistory::with_limit(config.history_limit),
            table: TransitionTable::standard(),
            selection: Selection::new(),
            navigation: None,
            gallery,
            config,
            viewport,
            stage,
            motion,
            observer,
        }
    }

    /// Run any command.
    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::Open(index) => self.open(index),
            Command::Close => self.close(),
            Command::Navigate(direction) => self.navigate(direction),
        }
    }

    /// Open item `index` in the detail view.
    pub fn open(&mut self, index: usize) -> Outcome {
        let command = Command::Open(index);
        let to = match self.table.resolve(&self.state, command) {
            Ok(to) => to,
            Err(rejection) => return self.ignore(command, rejection),
        };
        let Some(record) = self.gallery.get(index) else {
            return self.ignore(command, Rejection::OutOfRange);
        };
        let surface = record.surface().clone();
        let block = record.block().clone();

        self.enter(to, Some(index), command.name());
        self.observer.enable();

        let scroll_y = self.stage.scroll_y();
        self.stage.set_scroll_locked(true);
        self.stage.set_content_open(self.gallery.content(), true);
        self.mark(&block);
        self.mark(&surface);

        let token = self
            .motion
            .snapshot(self.gallery.surfaces(), &[Property::Opacity]);
        self.stage.reparent(self.gallery.stack(), self.gallery.detail());

        let offset = self
            .viewport
            .center_offset(self.stage.center_of(&surface), scroll_y);
        self.stage.set_scroll_top(0.0);
        self.motion.set_immediate(
            std::slice::from_ref(self.gallery.stack()),
            Props::new().y(Offset::To(offset)),
        );
        self.stage.set_scroll_top(0.0);

        let plan = choreography::open(&self.scene(), index, token, scroll_y);
        plan.play(&mut self.motion);
        Outcome::Accepted
    }

    /// Return from the detail view to the grid.
    pub fn close(&mut self) -> Outcome {
        let command = Command::Close;
        let to = match self.table.resolve(&self.state, command) {
            Ok(to) => to,
            Err(rejection) => return self.ignore(command, rejection),
        };
        let Some((index, surface)) = self.current_surface() else {
            return self.ignore(command, Rejection::NotOpen);
        };

        self.enter(to, Some(index), command.name());
        self.observer.disable();

        self.unmark(&surface);
        self.stage.set_scroll_locked(false);

        let token = self
            .motion
            .snapshot(self.gallery.surfaces(), &[Property::Opacity]);
        self.stage.reparent(self.gallery.stack(), self.gallery.grid());
        self.motion.set_immediate(
            std::slice::from_ref(self.gallery.stack()),
            Props::new().y(Offset::To(0.0)),
        );

        let plan = choreography::close(&self.scene(), index, token);
        plan.play(&mut self.motion);
        Outcome::Accepted
    }

    /// Move to the neighbouring item.
    pub fn navigate(&mut self, direction: Direction) -> Outcome {
        let command = Command::Navigate(direction);
        let to = match self.table.resolve(&self.state, command) {
            Ok(to) => to,
            Err(rejection) => return self.ignore(command, rejection),
        };
        let neighbours = self.state.current().and_then(|previous| {
            direction
                .step(previous, self.gallery.len())
                .map(|upcoming| (previous, upcoming))
        });
        let Some((previous, upcoming)) = neighbours else {
            return self.ignore(command, Rejection::AtEdge);
        };
        let (Some(leaving), Some(arriving)) =
            (self.gallery.get(previous), self.gallery.get(upcoming))
        else {
            return self.ignore(command, Rejection::OutOfRange);
        };
        let leaving = leaving.surface().clone();
        let arriving = arriving.surface().clone();

        self.enter(to, Some(upcoming), direction.name());
        self.navigation = Some((previous, upcoming));

        self.unmark(&leaving);
        self.mark(&arriving);

        let visibility = ArrowVisibility::at(upcoming, self.gallery.len());
        let writes = choreography::arrow_visibility(&self.scene(), visibility);
        for (arrow, props) in writes {
            self.motion.set_immediate(std::slice::from_ref(&arrow), props);
        }

        let plan = choreography::navigate(&self.scene(), previous, upcoming, direction);
        plan.play(&mut self.motion);
        Outcome::Accepted
    }

    /// A scroll/touch/pointer gesture reported by the observer.
    ///
    /// Only closes while the observer is enabled, which is exactly while
    /// the slideshow is open or opening and no close has begun.
    pub fn on_gesture(&mut self, gesture: &Gesture) -> Outcome {
        if !self.observer.is_enabled() {
            log::debug!("gesture {:?} ignored: observer disabled", gesture.kind);
            return Outcome::Ignored(Rejection::ObserverDisabled);
        }
        if self.config.observer.classify(gesture).is_none() {
            return Outcome::Ignored(Rejection::BelowTolerance);
        }
        self.close()
    }

    /// Completion callback from the transition service.
    pub fn on_cue(&mut self, cue: Cue) {
        match cue {
            Cue::RestoreScroll(top) => self.stage.set_scroll_top(top),
            Cue::OpenSettled => {
                self.settle(Phase::Opening, &cue);
            }
            Cue::CloseSettled => {
                if self.state.phase() != Phase::Closing {
                    self.drop_stale(&cue);
                    return;
                }
                self.stage.set_content_open(self.gallery.content(), false);
                if let Some(block) = self.current_block() {
                    self.unmark(&block);
                }
                self.settle(Phase::Closing, &cue);
            }
            Cue::NavigateSettled => {
                if !self.settle(Phase::Navigating, &cue) {
                    return;
                }
                // Text cues may have been dropped; the settled item owns the marker.
                if let Some((previous, upcoming)) = self.navigation.take() {
                    self.set_block_marked(previous, false);
                    self.set_block_marked(upcoming, true);
                }
            }
            Cue::OutgoingTextCleared(index) => {
                if self.navigation.map(|(previous, _)| previous) == Some(index) {
                    self.set_block_marked(index, false);
                } else {
                    self.drop_stale(&cue);
                }
            }
            Cue::IncomingTextShown(index) => {
                if self.navigation.map(|(_, upcoming)| upcoming) == Some(index) {
                    self.set_block_marked(index, true);
                } else {
                    self.drop_stale(&cue);
                }
            }
        }
    }

    /// Deliver a batch of cues in order.
    pub fn deliver<I>(&mut self, cues: I)
    where
        I: IntoIterator<Item = Cue>,
    {
        for cue in cues {
            self.on_cue(cue);
        }
    }

    /// The host's viewport changed size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.viewport.resize(width, height);
    }

    /// Current state snapshot (phase, item, total).
    pub fn state(&self) -> &SlideshowState {
        &self.state
    }

    /// Current phase.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// Index of the current item, if any.
    pub fn current(&self) -> Option<usize> {
        self.state.current()
    }

    /// Whether the detail view is open.
    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    /// Whether a transition is in flight.
    pub fn is_animating(&self) -> bool {
        self.state.is_animating()
    }

    /// Which navigation arrows should be visible.
    pub fn arrows(&self) -> ArrowVisibility {
        self.state.arrows()
    }

    /// The validated gallery.
    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    /// Active configuration.
    pub fn config(&self) -> &SlideshowConfig {
        &self.config
    }

    /// Latest viewport metrics.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Elements currently marked "current".
    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Recorded phase transitions, oldest first.
    pub fn history(&self) -> &StateHistory<Phase> {
        &self.history
    }

    /// The page collaborator.
    pub fn stage(&self) -> &S {
        &self.stage
    }

    /// Mutable access to the page collaborator.
    pub fn stage_mut(&mut self) -> &mut S {
        &mut self.stage
    }

    /// The transition service.
    pub fn motion(&self) -> &T {
        &self.motion
    }

    /// Mutable access to the transition service.
    pub fn motion_mut(&mut self) -> &mut T {
        &mut self.motion
    }

    /// The scroll-close observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    fn scene(&self) -> Scene<'_> {
        Scene {
            gallery: &self.gallery,
            motion: &self.config.motion,
            viewport: self.viewport,
        }
    }

    fn current_surface(&self) -> Option<(usize, ElementId)> {
        let index = self.state.current()?;
        let record = self.gallery.get(index)?;
        Some((index, record.surface().clone()))
    }

    fn current_block(&self) -> Option<ElementId> {
        let index = self.state.current()?;
        self.gallery.get(index).map(|r| r.block().clone())
    }

    fn mark(&mut self, element: &ElementId) {
        if self.selection.mark(element) {
            self.stage.set_marked(element, true);
        }
    }

    fn unmark(&mut self, element: &ElementId) {
        if self.selection.unmark(element) {
            self.stage.set_marked(element, false);
        }
    }

    fn set_block_marked(&mut self, index: usize, marked: bool) {
        let Some(block) = self.gallery.get(index).map(|r| r.block().clone()) else {
            return;
        };
        if marked {
            self.mark(&block);
        } else {
            self.unmark(&block);
        }
    }

    fn drop_stale(&self, cue: &Cue) {
        log::warn!(
            "cue {} arrived in phase {}",
            cue.name(),
            self.state.phase().name()
        );
    }

    fn ignore(&self, command: Command, rejection: Rejection) -> Outcome {
        log::debug!(
            "{:?} ignored in phase {}: {}",
            command,
            self.state.phase().name(),
            rejection
        );
        Outcome::Ignored(rejection)
    }

    fn settle(&mut self, expected: Phase, cue: &Cue) -> bool {
        if self.state.phase() != expected {
            self.drop_stale(cue);
            return false;
        }
        let Some(to) = self.table.settle(&self.state) else {
            return false;
        };
        let current = if to == Phase::Closed {
            None
        } else {
            self.state.current()
        };
        self.enter(to, current, cue.name());
        true
    }

    fn enter(&mut self, to: Phase, current: Option<usize>, cause: &str) {
        let from = self.state.phase();
        self.state.enter(to, current);
        self.history.record(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            cause: cause.to_string(),
        });
        log::info!(
            "{} -> {} ({}, current: {:?})",
            from.name(),
            to.name(),
            cause,
            current
        );
    }
}

impl<S, O> Slideshow<S, Headless, O>
where
    S: Stage,
    O: GestureObserver,
{
    /// Advance the headless clock and deliver the cues that fired.
    pub fn advance(&mut self, by: Duration) {
        let cues = self.motion.advance(by);
        self.deliver(cues);
    }

    /// Run every pending animation to completion.
    pub fn finish_transitions(&mut self) {
        let cues = self.motion.finish();
        self.deliver(cues);
    }
}
