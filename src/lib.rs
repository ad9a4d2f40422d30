//! Slidestack: interaction state machine for a stacked image gallery.
//!
//! A grid of items opens into a detail view, moves to neighbouring items
//! and closes back to the grid, each step played as a coordinated set of
//! animations. This crate owns the part that decides what may happen and
//! in which order; the page and the animation engine sit behind traits.
//!
//! # Core Concepts
//!
//! - **Phases**: `Closed`, `Opening`, `Open`, `Closing`, `Navigating`
//! - **Latch**: while a transition is in flight every command is ignored
//! - **Collaborators**: [`stage::Stage`] for instant page writes,
//!   [`motion::TransitionService`] for animation,
//!   [`input::GestureObserver`] for the scroll-to-close observer
//! - **Cues**: completion messages the animation service sends back
//!
//! # Example
//!
//! ```rust
//! use slidestack::config::SlideshowConfig;
//! use slidestack::gallery::{ContentBlock, Gallery, GalleryDocument, Arrows};
//! use slidestack::input::HeadlessObservers;
//! use slidestack::motion::Headless;
//! use slidestack::slideshow::Slideshow;
//! use slidestack::stage::HeadlessStage;
//! use slidestack::viewport::Viewport;
//!
//! let document = GalleryDocument {
//!     stack: "stack".into(),
//!     grid: "stack-wrap".into(),
//!     detail: "slides".into(),
//!     content: "content".into(),
//!     title_fragments: vec!["title".into()],
//!     back_control: "back".into(),
//!     arrows: Arrows { prev: "prev".into(), next: "next".into() },
//!     surfaces: vec!["item-0".into(), "item-1".into()],
//!     content_items: vec![
//!         ContentBlock { id: "content-0".into(), title: None, description: None, fragments: vec![] },
//!         ContentBlock { id: "content-1".into(), title: None, description: None, fragments: vec![] },
//!     ],
//! };
//!
//! let mut show = Slideshow::new(
//!     Gallery::from_document(document).unwrap(),
//!     SlideshowConfig::default(),
//!     Viewport::default(),
//!     HeadlessStage::new(),
//!     Headless::new(),
//!     &mut HeadlessObservers,
//! );
//!
//! show.open(1);
//! show.finish_transitions();
//! assert!(show.is_open());
//!
//! show.close();
//! show.finish_transitions();
//! assert_eq!(show.current(), None);
//! ```

pub mod config;
pub mod core;
pub mod gallery;
pub mod input;
pub mod motion;
pub mod slideshow;
pub mod stage;
pub mod viewport;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::SlideshowConfig;
pub use crate::core::{Phase, State};
pub use gallery::{ElementId, Gallery, GalleryDocument};
pub use slideshow::{Command, Cue, Direction, Outcome, Rejection, Slideshow};
