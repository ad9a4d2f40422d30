//! Pure builders for the animation sequences of each transition.
//!
//! Each builder returns a [`Choreography`]: an owned description of one
//! timeline that can be inspected in tests and then played against any
//! [`TransitionService`].

use super::command::Direction;
use super::cue::Cue;
use super::state::ArrowVisibility;
use crate::config::MotionConfig;
use crate::gallery::{ElementId, Gallery};
use crate::motion::{
    FlipOptions, Offset, Props, StateToken, TimelineHandle, TransitionService, Tween,
};
use crate::viewport::Viewport;

/// How the timeline begins.
#[derive(Clone, PartialEq, Debug)]
pub enum Lead {
    /// A layout transition from a snapshot.
    Flip {
        token: StateToken,
        options: FlipOptions,
    },
    /// An empty timeline.
    Timeline,
}

/// A tween placed `offset` seconds into the timeline.
#[derive(Clone, PartialEq, Debug)]
pub struct Step {
    pub tween: Tween,
    pub offset: f32,
}

/// One timeline: how it begins and the tweens placed on it.
#[derive(Clone, PartialEq, Debug)]
pub struct Choreography {
    pub lead: Lead,
    pub steps: Vec<Step>,
}

impl Choreography {
    fn new(lead: Lead) -> Self {
        Self {
            lead,
            steps: Vec::new(),
        }
    }

    fn at(mut self, offset: f32, tween: Tween) -> Self {
        self.steps.push(Step { tween, offset });
        self
    }

    /// Tweens animating `element`, in timeline order.
    pub fn tweens_on<'a>(&'a self, element: &'a ElementId) -> impl Iterator<Item = &'a Step> {
        self.steps
            .iter()
            .filter(move |step| step.tween.targets.contains(element))
    }

    /// Hand the whole timeline to the service.
    pub fn play<T: TransitionService>(self, service: &mut T) -> TimelineHandle {
        let handle = match self.lead {
            Lead::Flip { token, options } => service.animate_from_snapshot(token, options),
            Lead::Timeline => service.timeline(),
        };
        self.steps.into_iter().fold(handle, |handle, step| {
            service.add_to_timeline(handle, step.tween, step.offset)
        })
    }
}

/// What the builders read: the page, the timings and the viewport.
#[derive(Clone, Copy, Debug)]
pub struct Scene<'a> {
    pub gallery: &'a Gallery,
    pub motion: &'a MotionConfig,
    pub viewport: Viewport,
}

impl Scene<'_> {
    fn fragments(&self, index: usize) -> Vec<ElementId> {
        self.gallery
            .get(index)
            .map(|record| record.fragments().to_vec())
            .unwrap_or_default()
    }

    fn arrow(&self, direction: Direction) -> Vec<ElementId> {
        vec![self.gallery.arrows().get(direction).clone()]
    }
}

fn opacity(visible: bool) -> f32 {
    if visible {
        1.0
    } else {
        0.0
    }
}

/// Grid to detail view for item `index`.
///
/// All segments start together; arrows come in from their role's offset
/// and end up visible according to the edge policy.
pub fn open(scene: &Scene<'_>, index: usize, token: StateToken, scroll_y: f32) -> Choreography {
    let m = scene.motion;
    let travel = m.text_travel;
    let visible = ArrowVisibility::at(index, scene.gallery.len());

    let flip = FlipOptions::new(m.flip)
        .on_start(Cue::RestoreScroll(scroll_y))
        .on_complete(Cue::OpenSettled);

    let mut plan = Choreography::new(Lead::Flip {
        token,
        options: flip,
    })
    .at(
        0.0,
        Tween::new(
            scene.gallery.title_fragments().to_vec(),
            Props::new().y_percent(-travel),
            m.title,
        ),
    )
    .at(
        0.0,
        Tween::new(scene.fragments(index), Props::new().y_percent(0.0), m.text)
            .start_at(Props::new().y_percent(travel)),
    )
    .at(
        0.0,
        Tween::new(
            vec![scene.gallery.back_control().clone()],
            Props::new().opacity(1.0),
            m.controls,
        )
        .start_at(Props::new().opacity(0.0)),
    );

    for direction in [Direction::Prev, Direction::Next] {
        let offsets = m.arrows.get(direction);
        plan = plan.at(
            0.0,
            Tween::new(
                scene.arrow(direction),
                Props::new()
                    .y(Offset::To(0.0))
                    .opacity(opacity(visible.get(direction))),
                m.controls,
            )
            .start_at(Props::new().opacity(0.0).y(Offset::To(offsets.enter_from))),
        );
    }
    plan
}

/// Detail view of item `index` back to the grid.
pub fn close(scene: &Scene<'_>, index: usize, token: StateToken) -> Choreography {
    let m = scene.motion;
    let travel = m.text_travel;

    let mut plan = Choreography::new(Lead::Flip {
        token,
        options: FlipOptions::new(m.flip).on_complete(Cue::CloseSettled),
    })
    .at(
        0.0,
        Tween::new(
            scene.gallery.title_fragments().to_vec(),
            Props::new().y_percent(0.0),
            m.title,
        )
        .start_at(Props::new().y_percent(travel)),
    )
    .at(
        0.0,
        Tween::new(scene.fragments(index), Props::new().y_percent(-travel), m.text),
    )
    .at(
        0.0,
        Tween::new(
            vec![scene.gallery.back_control().clone()],
            Props::new().opacity(0.0),
            m.controls,
        ),
    );

    for direction in [Direction::Prev, Direction::Next] {
        let offsets = m.arrows.get(direction);
        plan = plan.at(
            0.0,
            Tween::new(
                scene.arrow(direction),
                Props::new().y(Offset::To(offsets.exit_to)).opacity(0.0),
                m.controls,
            ),
        );
    }
    plan
}

/// Slide from `previous` to `upcoming`.
///
/// The container slide and the outgoing text start together; the incoming
/// text starts after the outgoing text has left, so the two never overlap.
pub fn navigate(
    scene: &Scene<'_>,
    previous: usize,
    upcoming: usize,
    direction: Direction,
) -> Choreography {
    let m = scene.motion;
    let sign = direction.travel_sign();
    let distance = scene.viewport.travel(m.slide_margin);

    Choreography::new(Lead::Timeline)
        .at(
            0.0,
            Tween::new(
                vec![scene.gallery.stack().clone()],
                Props::new().y(Offset::By(sign * distance)),
                m.slide,
            )
            .on_complete(Cue::NavigateSettled),
        )
        .at(
            0.0,
            Tween::new(
                scene.fragments(previous),
                Props::new().y_percent(-sign * m.text_travel),
                m.text_exit,
            )
            .on_complete(Cue::OutgoingTextCleared(previous)),
        )
        .at(
            m.text_enter_offset,
            Tween::new(scene.fragments(upcoming), Props::new().y_percent(0.0), m.text_enter)
                .start_at(Props::new().y_percent(sign * m.text_travel))
                .on_start(Cue::IncomingTextShown(upcoming)),
        )
}

/// Instant opacity writes showing or hiding each arrow.
pub fn arrow_visibility(scene: &Scene<'_>, visible: ArrowVisibility) -> Vec<(ElementId, Props)> {
    [Direction::Prev, Direction::Next]
        .into_iter()
        .map(|direction| {
            (
                scene.gallery.arrows().get(direction).clone(),
                Props::new().opacity(opacity(visible.get(direction))),
            )
        })
        .collect()
}
