//! Slideshow configuration.
//!
//! Every field has a default matching the stock gallery, and all structs
//! use `#[serde(default)]`, so a JSON file only needs the values it changes.
//!
//! ```rust
//! use slidestack::config::SlideshowConfig;
//!
//! let config = SlideshowConfig::from_json_str(
//!     r#"{ "motion": { "flip": { "duration": 0.6 } }, "history_limit": 8 }"#,
//! ).unwrap();
//!
//! assert_eq!(config.motion.flip.duration, 0.6);
//! assert_eq!(config.motion.title.duration, 0.9);
//! assert_eq!(config.history_limit, 8);
//! ```

mod error;

pub use error::ConfigError;

use crate::core::DEFAULT_HISTORY_LIMIT;
use crate::input::ObserverConfig;
use crate::motion::{Easing, Timing};
use crate::slideshow::Direction;
use serde::{Deserialize, Serialize};
use std::path::Path;
use stillwater::validation::Validation;

/// Where one arrow starts when revealed and where it goes when hidden.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct ArrowMotion {
    /// Vertical offset (px) the arrow slides in from on open.
    pub enter_from: f32,
    /// Vertical offset (px) the arrow slides out to on close.
    pub exit_to: f32,
}

/// Arrow motion looked up by role.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ArrowOffsets {
    pub prev: ArrowMotion,
    pub next: ArrowMotion,
}

impl ArrowOffsets {
    pub fn get(&self, direction: Direction) -> ArrowMotion {
        match direction {
            Direction::Prev => self.prev,
            Direction::Next => self.next,
        }
    }
}

impl Default for ArrowOffsets {
    fn default() -> Self {
        Self {
            prev: ArrowMotion {
                enter_from: 150.0,
                exit_to: -100.0,
            },
            next: ArrowMotion {
                enter_from: -150.0,
                exit_to: 100.0,
            },
        }
    }
}

/// Timings and distances of every animated segment.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    /// Grid <-> detail layout transition.
    pub flip: Timing,
    /// Gallery title fragments sliding out/in.
    pub title: Timing,
    /// Item text fragments on open/close.
    pub text: Timing,
    /// Back control and arrows.
    pub controls: Timing,
    /// Detail container travel when navigating.
    pub slide: Timing,
    /// Outgoing text when navigating.
    pub text_exit: Timing,
    /// Incoming text when navigating.
    pub text_enter: Timing,
    /// Delay (s) of the incoming text, after the outgoing text left.
    pub text_enter_offset: f32,
    /// Text travel in percent of the fragment's own height.
    pub text_travel: f32,
    /// Extra navigation travel as a fraction of viewport height.
    pub slide_margin: f32,
    pub arrows: ArrowOffsets,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            flip: Timing::expo(1.0),
            title: Timing::expo(0.9),
            text: Timing::expo(1.0),
            controls: Timing::expo(1.0),
            slide: Timing::expo(1.0),
            text_exit: Timing::new(0.2, Easing::Power1),
            text_enter: Timing::expo(0.9),
            text_enter_offset: 0.2,
            text_travel: 101.0,
            slide_margin: 0.02,
            arrows: ArrowOffsets::default(),
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideshowConfig {
    pub motion: MotionConfig,
    pub observer: ObserverConfig,
    /// Number of phase transitions kept in the history.
    pub history_limit: usize,
}

impl Default for SlideshowConfig {
    fn default() -> Self {
        Self {
            motion: MotionConfig::default(),
            observer: ObserverConfig::default(),
            history_limit: DEFAULT_HISTORY_LIMIT,
        }
    }
}

impl SlideshowConfig {
    /// Parse and validate a JSON config. Missing fields use defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&content)?;
        log::debug!("loaded slideshow config from {}", path.display());
        Ok(config)
    }

    /// Reject negative or non-finite durations, offsets and distances, and
    /// navigation text timings that would overlap or outlast the slide,
    /// reporting every bad setting at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let m = &self.motion;
        let checks = vec![
            duration("motion.flip.duration", m.flip.duration),
            duration("motion.title.duration", m.title.duration),
            duration("motion.text.duration", m.text.duration),
            duration("motion.controls.duration", m.controls.duration),
            duration("motion.slide.duration", m.slide.duration),
            duration("motion.text_exit.duration", m.text_exit.duration),
            duration("motion.text_enter.duration", m.text_enter.duration),
            duration("motion.text_enter_offset", m.text_enter_offset),
            duration("motion.slide_margin", m.slide_margin),
            finite("motion.text_travel", m.text_travel),
            finite("motion.arrows.prev.enter_from", m.arrows.prev.enter_from),
            finite("motion.arrows.prev.exit_to", m.arrows.prev.exit_to),
            finite("motion.arrows.next.enter_from", m.arrows.next.enter_from),
            finite("motion.arrows.next.exit_to", m.arrows.next.exit_to),
            duration("observer.tolerance", self.observer.tolerance),
            finite("observer.wheel_speed", self.observer.wheel_speed),
            // Outgoing text is gone before incoming text is marked, and both
            // happen before the slide releases the latch.
            at_most(
                "motion.text_exit.duration",
                m.text_exit.duration,
                "motion.text_enter_offset",
                m.text_enter_offset,
            ),
            at_most(
                "motion.text_enter_offset",
                m.text_enter_offset,
                "motion.slide.duration",
                m.slide.duration,
            ),
        ];
        match Validation::all_vec(checks) {
            Validation::Success(_) => Ok(()),
            Validation::Failure(problems) => Err(ConfigError::Invalid(problems)),
        }
    }
}

fn finite(field: &str, value: f32) -> Validation<(), Vec<String>> {
    if value.is_finite() {
        Validation::Success(())
    } else {
        Validation::Failure(vec![format!("{field} = {value}")])
    }
}

fn duration(field: &str, value: f32) -> Validation<(), Vec<String>> {
    if value.is_finite() && value >= 0.0 {
        Validation::Success(())
    } else {
        Validation::Failure(vec![format!("{field} = {value}")])
    }
}

fn at_most(field: &str, value: f32, bound_field: &str, bound: f32) -> Validation<(), Vec<String>> {
    // Non-finite values are reported by their own checks.
    if !value.is_finite() || !bound.is_finite() || value <= bound {
        Validation::Success(())
    } else {
        Validation::Failure(vec![format!("{field} = {value} exceeds {bound_field} = {bound}")])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        assert!(SlideshowConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_json_gives_defaults() {
        let config = SlideshowConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SlideshowConfig::default());
    }

    #[test]
    fn partial_arrow_override_keeps_other_role() {
        let config = SlideshowConfig::from_json_str(
            r#"{ "motion": { "arrows": { "next": { "enter_from": -40, "exit_to": 40 } } } }"#,
        )
        .unwrap();

        assert_eq!(config.motion.arrows.get(Direction::Next).enter_from, -40.0);
        assert_eq!(config.motion.arrows.get(Direction::Prev).enter_from, 150.0);
    }

    #[test]
    fn validation_reports_every_bad_setting() {
        let mut config = SlideshowConfig::default();
        config.motion.flip.duration = -1.0;
        config.motion.text_enter_offset = f32::NAN;

        match config.validate() {
            Err(ConfigError::Invalid(problems)) => {
                assert_eq!(problems.len(), 2);
                assert!(problems
                    .iter()
                    .any(|p| p.starts_with("motion.flip.duration")));
                assert!(problems
                    .iter()
                    .any(|p| p.starts_with("motion.text_enter_offset")));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn text_exit_must_finish_before_incoming_text() {
        let err = SlideshowConfig::from_json_str(r#"{ "motion": { "text_exit": { "duration": 0.6 } } }"#)
            .unwrap_err();

        match err {
            ConfigError::Invalid(problems) => assert_eq!(
                problems,
                vec!["motion.text_exit.duration = 0.6 exceeds motion.text_enter_offset = 0.2"]
            ),
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn incoming_text_must_start_before_slide_settles() {
        let mut config = SlideshowConfig::default();
        config.motion.text_enter_offset = 2.5;

        match config.validate() {
            Err(ConfigError::Invalid(problems)) => {
                assert_eq!(problems.len(), 1);
                assert!(problems[0].starts_with("motion.text_enter_offset = 2.5 exceeds"));
            }
            other => panic!("Expected Invalid, got {other:?}"),
        }
    }

    #[test]
    fn text_timings_may_touch() {
        let mut config = SlideshowConfig::default();
        config.motion.text_exit.duration = 0.5;
        config.motion.text_enter_offset = 0.5;
        config.motion.slide.duration = 0.5;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn invalid_json_config_is_rejected() {
        let err = SlideshowConfig::from_json_str(r#"{ "motion": { "slide": { "duration": -2 } } }"#)
            .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = SlideshowConfig::load(Path::new("/nonexistent/slidestack.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
