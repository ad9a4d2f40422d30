//! Transition service contract.
//!
//! The controller never interpolates anything itself. It describes what
//! should move through [`Tween`]s and [`FlipOptions`], hands them to a
//! [`TransitionService`], and later receives the attached [`Cue`]s back
//! when the service reports that a tween started or finished.
//!
//! [`Headless`] is an in-process service that plays timelines against a
//! manual clock. It backs the tests and any host that wants to drive the
//! slideshow without a renderer.

mod headless;

pub use headless::{Headless, Request};

use crate::gallery::ElementId;
use crate::slideshow::Cue;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Easing curve requested from the service.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    Linear,
    Power1,
    #[default]
    Expo,
}

/// Duration (seconds) and easing of one animated segment.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct Timing {
    pub duration: f32,
    #[serde(default)]
    pub easing: Easing,
}

impl Timing {
    pub const fn new(duration: f32, easing: Easing) -> Self {
        Self { duration, easing }
    }

    pub const fn expo(duration: f32) -> Self {
        Self::new(duration, Easing::Expo)
    }
}

/// Visual properties the service knows how to track and animate.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Property {
    Opacity,
    /// Vertical translation in pixels.
    Y,
    /// Vertical translation as a percentage of the element's own height.
    YPercent,
}

/// Target for a pixel offset: absolute, or relative to the current value.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub enum Offset {
    To(f32),
    By(f32),
}

/// A set of property values. Unset properties are left alone.
#[derive(Clone, Copy, PartialEq, Debug, Default, Serialize, Deserialize)]
pub struct Props {
    pub opacity: Option<f32>,
    pub y: Option<Offset>,
    pub y_percent: Option<f32>,
}

impl Props {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = Some(opacity);
        self
    }

    pub fn y(mut self, y: Offset) -> Self {
        self.y = Some(y);
        self
    }

    pub fn y_percent(mut self, percent: f32) -> Self {
        self.y_percent = Some(percent);
        self
    }
}

/// One animation of a group of targets towards `to`.
///
/// `start_at` values are applied instantly when the tween begins.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Tween {
    pub targets: Vec<ElementId>,
    pub start_at: Option<Props>,
    pub to: Props,
    pub timing: Timing,
    pub on_start: Option<Cue>,
    pub on_complete: Option<Cue>,
}

impl Tween {
    pub fn new(targets: Vec<ElementId>, to: Props, timing: Timing) -> Self {
        Self {
            targets,
            start_at: None,
            to,
            timing,
            on_start: None,
            on_complete: None,
        }
    }

    pub fn start_at(mut self, props: Props) -> Self {
        self.start_at = Some(props);
        self
    }

    pub fn on_start(mut self, cue: Cue) -> Self {
        self.on_start = Some(cue);
        self
    }

    pub fn on_complete(mut self, cue: Cue) -> Self {
        self.on_complete = Some(cue);
        self
    }
}

/// Options for playing a layout transition from a snapshot.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct FlipOptions {
    pub timing: Timing,
    /// Fired when the flip begins.
    pub on_start: Option<Cue>,
    /// Fired when the whole timeline, including added tweens, has finished.
    pub on_complete: Option<Cue>,
    /// Keep leaving elements absolutely positioned while they animate out.
    pub absolute_on_leave: bool,
}

impl FlipOptions {
    pub fn new(timing: Timing) -> Self {
        Self {
            timing,
            on_start: None,
            on_complete: None,
            absolute_on_leave: true,
        }
    }

    pub fn on_start(mut self, cue: Cue) -> Self {
        self.on_start = Some(cue);
        self
    }

    pub fn on_complete(mut self, cue: Cue) -> Self {
        self.on_complete = Some(cue);
        self
    }
}

/// Captured "before" geometry of a set of elements.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct StateToken(Uuid);

impl StateToken {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for StateToken {
    fn default() -> Self {
        Self::new()
    }
}

/// A timeline that tweens can be appended to.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct TimelineHandle(Uuid);

impl TimelineHandle {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TimelineHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Animation-and-layout-transition capability consumed by the controller.
///
/// Implementations must eventually report every cue attached to a tween or
/// flip, by handing it to [`Slideshow::on_cue`](crate::slideshow::Slideshow::on_cue).
pub trait TransitionService {
    /// Record the current geometry (and `track`ed properties) of `elements`.
    fn snapshot(&mut self, elements: &[ElementId], track: &[Property]) -> StateToken;

    /// Animate from the snapshot to wherever the elements are now.
    fn animate_from_snapshot(&mut self, token: StateToken, options: FlipOptions)
        -> TimelineHandle;

    /// Start an empty timeline.
    fn timeline(&mut self) -> TimelineHandle;

    /// Add `tween` to `handle`, starting `offset` seconds after the
    /// timeline's start.
    fn add_to_timeline(&mut self, handle: TimelineHandle, tween: Tween, offset: f32)
        -> TimelineHandle;

    /// Write properties instantly, without animating.
    fn set_immediate(&mut self, targets: &[ElementId], props: Props);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_builder_sets_only_requested_fields() {
        let props = Props::new().opacity(1.0).y(Offset::By(-10.0));

        assert_eq!(props.opacity, Some(1.0));
        assert_eq!(props.y, Some(Offset::By(-10.0)));
        assert_eq!(props.y_percent, None);
    }

    #[test]
    fn easing_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Easing::Power1).unwrap(), "\"power1\"");
        let easing: Easing = serde_json::from_str("\"expo\"").unwrap();
        assert_eq!(easing, Easing::Expo);
    }

    #[test]
    fn timing_defaults_to_expo() {
        let timing: Timing = serde_json::from_str(r#"{ "duration": 0.5 }"#).unwrap();
        assert_eq!(timing, Timing::expo(0.5));
    }

    #[test]
    fn handles_are_unique() {
        assert_ne!(TimelineHandle::new(), TimelineHandle::new());
        assert_ne!(StateToken::new(), StateToken::new());
    }
}
