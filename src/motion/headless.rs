//! Clock-driven transition service with no renderer behind it.

use super::{
    FlipOptions, Props, Property, StateToken, TimelineHandle, TransitionService, Tween,
};
use crate::gallery::ElementId;
use crate::slideshow::Cue;
use std::collections::HashMap;
use std::time::Duration;

/// Everything the service was asked to do, in call order.
#[derive(Clone, PartialEq, Debug)]
pub enum Request {
    Snapshot {
        token: StateToken,
        elements: Vec<ElementId>,
        track: Vec<Property>,
    },
    Flip {
        handle: TimelineHandle,
        token: StateToken,
        options: FlipOptions,
    },
    Timeline {
        handle: TimelineHandle,
    },
    Tween {
        handle: TimelineHandle,
        tween: Tween,
        offset: f32,
    },
    Set {
        targets: Vec<ElementId>,
        props: Props,
    },
}

struct Timeline {
    start: u64,
    end: u64,
    on_complete: Option<Cue>,
    done: bool,
}

struct Scheduled {
    at: u64,
    seq: u64,
    cue: Cue,
}

/// In-process [`TransitionService`] that plays timelines on a manual clock.
///
/// Nothing moves until [`advance`](Headless::advance) is called; it returns
/// the cues that became due, ordered by time. At equal times tween cues
/// come in the order they were scheduled, and timeline completions last.
///
/// # Example
///
/// ```rust
/// use slidestack::motion::{Headless, Props, Timing, TransitionService, Tween};
/// use slidestack::slideshow::Cue;
/// use std::time::Duration;
///
/// let mut service = Headless::new();
/// let timeline = service.timeline();
/// service.add_to_timeline(
///     timeline,
///     Tween::new(vec!["box".into()], Props::new().opacity(1.0), Timing::expo(1.0))
///         .on_complete(Cue::NavigateSettled),
///     0.0,
/// );
///
/// assert!(service.advance(Duration::from_millis(500)).is_empty());
/// assert_eq!(service.advance(Duration::from_millis(500)), vec![Cue::NavigateSettled]);
/// ```
#[derive(Default)]
pub struct Headless {
    clock: u64,
    seq: u64,
    timelines: HashMap<TimelineHandle, Timeline>,
    scheduled: Vec<Scheduled>,
    requests: Vec<Request>,
}

fn micros(seconds: f32) -> u64 {
    (f64::from(seconds.max(0.0)) * 1_000_000.0).round() as u64
}

impl Headless {
    pub fn new() -> Self {
        Self::default()
    }

    /// Time elapsed on the service clock.
    pub fn now(&self) -> Duration {
        Duration::from_micros(self.clock)
    }

    /// Requests received so far.
    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    /// Drain the request log.
    pub fn take_requests(&mut self) -> Vec<Request> {
        std::mem::take(&mut self.requests)
    }

    /// Number of cues still waiting to fire.
    pub fn pending(&self) -> usize {
        self.scheduled.len()
            + self
                .timelines
                .values()
                .filter(|t| !t.done && t.on_complete.is_some())
                .count()
    }

    /// Whether any cue is still waiting to fire.
    pub fn is_idle(&self) -> bool {
        self.pending() == 0
    }

    /// Move the clock forward and return the cues that fired.
    pub fn advance(&mut self, by: Duration) -> Vec<Cue> {
        let step = u64::try_from(by.as_micros()).unwrap_or(u64::MAX);
        self.clock = self.clock.saturating_add(step);
        self.drain_due()
    }

    /// Run until nothing is pending and return every cue that fired.
    pub fn finish(&mut self) -> Vec<Cue> {
        let last_tween = self.scheduled.iter().map(|s| s.at).max();
        let last_timeline = self
            .timelines
            .values()
            .filter(|t| !t.done)
            .map(|t| t.end)
            .max();
        if let Some(until) = last_tween.max(last_timeline) {
            self.clock = self.clock.max(until);
        }
        self.drain_due()
    }

    fn next_seq(&mut self) -> u64 {
        self.seq += 1;
        self.seq
    }

    fn schedule(&mut self, at: u64, cue: Option<Cue>) {
        if let Some(cue) = cue {
            let seq = self.next_seq();
            self.scheduled.push(Scheduled { at, seq, cue });
        }
    }

    fn open_timeline(&mut self, on_complete: Option<Cue>) -> TimelineHandle {
        let handle = TimelineHandle::new();
        self.timelines.insert(
            handle,
            Timeline {
                start: self.clock,
                end: self.clock,
                on_complete,
                done: false,
            },
        );
        handle
    }

    fn drain_due(&mut self) -> Vec<Cue> {
        // (time, 0 = tween cue / 1 = timeline completion, seq)
        let mut due: Vec<(u64, u8, u64, Cue)> = Vec::new();

        let clock = self.clock;
        let (ready, waiting): (Vec<_>, Vec<_>) =
            self.scheduled.drain(..).partition(|s| s.at <= clock);
        self.scheduled = waiting;
        due.extend(ready.into_iter().map(|s| (s.at, 0, s.seq, s.cue)));

        for timeline in self.timelines.values_mut() {
            if !timeline.done && timeline.end <= clock {
                timeline.done = true;
                if let Some(cue) = timeline.on_complete.take() {
                    due.push((timeline.end, 1, timeline.start, cue));
                }
            }
        }
        self.timelines.retain(|_, t| !t.done);

        due.sort_by_key(|(at, kind, seq, _)| (*at, *kind, *seq));
        due.into_iter().map(|(_, _, _, cue)| cue).collect()
    }
}

impl TransitionService for Headless {
    fn snapshot(&mut self, elements: &[ElementId], track: &[Property]) -> StateToken {
        let token = StateToken::new();
        self.requests.push(Request::Snapshot {
            token,
            elements: elements.to_vec(),
            track: track.to_vec(),
        });
        token
    }

    fn animate_from_snapshot(
        &mut self,
        token: StateToken,
        options: FlipOptions,
    ) -> TimelineHandle {
        let handle = self.open_timeline(options.on_complete.clone());
        let start = self.clock;
        let end = start.saturating_add(micros(options.timing.duration));
        if let Some(timeline) = self.timelines.get_mut(&handle) {
            timeline.end = end;
        }
        self.schedule(start, options.on_start.clone());
        self.requests.push(Request::Flip {
            handle,
            token,
            options,
        });
        handle
    }

    fn timeline(&mut self) -> TimelineHandle {
        let handle = self.open_timeline(None);
        self.requests.push(Request::Timeline { handle });
        handle
    }

    fn add_to_timeline(
        &mut self,
        handle: TimelineHandle,
        tween: Tween,
        offset: f32,
    ) -> TimelineHandle {
        let base = match self.timelines.get(&handle) {
            Some(timeline) => timeline.start,
            None => {
                log::warn!("tween added to finished or unknown timeline {:?}", handle);
                self.clock
            }
        };
        let begin = base.saturating_add(micros(offset));
        let end = begin.saturating_add(micros(tween.timing.duration));
        if let Some(timeline) = self.timelines.get_mut(&handle) {
            timeline.end = timeline.end.max(end);
        }
        self.schedule(begin, tween.on_start.clone());
        self.schedule(end, tween.on_complete.clone());
        self.requests.push(Request::Tween {
            handle,
            tween,
            offset,
        });
        handle
    }

    fn set_immediate(&mut self, targets: &[ElementId], props: Props) {
        self.requests.push(Request::Set {
            targets: targets.to_vec(),
            props,
        });
    }
}
