//! Completion messages sent back by the transition service.

use serde::{Deserialize, Serialize};

/// A callback point attached to a tween or flip.
///
/// The controller attaches cues when it issues animations; the transition
/// service hands each one back through
/// [`Slideshow::on_cue`](super::Slideshow::on_cue) when the tween it rides
/// on starts or completes.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub enum Cue {
    /// Opening flip started; put the page scroll back where it was.
    RestoreScroll(f32),
    /// Opening timeline finished.
    OpenSettled,
    /// Closing timeline finished.
    CloseSettled,
    /// The detail container finished sliding to the next item.
    NavigateSettled,
    /// The outgoing item's text has left; its block is no longer current.
    OutgoingTextCleared(usize),
    /// The incoming item's text starts entering; its block becomes current.
    IncomingTextShown(usize),
}

impl Cue {
    pub fn name(&self) -> &'static str {
        match self {
            Self::RestoreScroll(_) => "restore-scroll",
            Self::OpenSettled => "open-settled",
            Self::CloseSettled => "close-settled",
            Self::NavigateSettled => "navigate-settled",
            Self::OutgoingTextCleared(_) => "outgoing-text-cleared",
            Self::IncomingTextShown(_) => "incoming-text-shown",
        }
    }
}
