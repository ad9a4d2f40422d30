//! The interaction controller and its state machine.
//!
//! # Key Concepts
//!
//! - **Commands**: `open`, `close` and `navigate`, each guarded; a command
//!   that does not fit the current phase is ignored, never an error
//! - **Transition table**: pure rules deciding which phase follows
//! - **Choreography**: pure descriptions of the animation for each command
//! - **Cues**: completion messages that end a transition
//!
//! # Example
//!
//! ```rust
//! use slidestack::config::SlideshowConfig;
//! use slidestack::gallery::Gallery;
//! use slidestack::input::HeadlessObservers;
//! use slidestack::motion::Headless;
//! use slidestack::slideshow::{Direction, Slideshow};
//! use slidestack::stage::HeadlessStage;
//! use slidestack::viewport::Viewport;
//! use std::time::Duration;
//!
//! let gallery = Gallery::from_json_str(r#"{
//!     "stack": "stack", "grid": "stack-wrap", "detail": "slides",
//!     "content": "content", "back_control": "back",
//!     "arrows": { "prev": "prev", "next": "next" },
//!     "surfaces": ["a", "b"],
//!     "content_items": [{ "id": "ca" }, { "id": "cb" }]
//! }"#).unwrap();
//!
//! let mut show = Slideshow::new(
//!     gallery,
//!     SlideshowConfig::default(),
//!     Viewport::new(1280.0, 800.0),
//!     HeadlessStage::new(),
//!     Headless::new(),
//!     &mut HeadlessObservers,
//! );
//!
//! assert!(show.open(0).is_accepted());
//! assert!(!show.navigate(Direction::Next).is_accepted()); // still opening
//!
//! show.advance(Duration::from_secs(1));
//! assert!(show.navigate(Direction::Next).is_accepted());
//! assert_eq!(show.current(), Some(1));
//! ```

pub mod choreography;
mod command;
mod controller;
mod cue;
mod selection;
mod state;
mod table;

pub use command::{Command, Direction, Outcome, Rejection};
pub use controller::Slideshow;
pub use cue::Cue;
pub use selection::Selection;
pub use state::{ArrowVisibility, SlideshowState};
pub use table::{Attempt, Rule, TransitionTable, Trigger};
