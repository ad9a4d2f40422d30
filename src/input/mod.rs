//! Input adapter: turns page events into controller commands.
//!
//! Clicks are routed by the element that was hit; scroll-like gestures go
//! through the scroll-close observer and can only ever close the slideshow.

mod observer;

pub use observer::{
    Gesture, GestureKind, GestureObserver, HeadlessObserver, HeadlessObservers, ObserverConfig,
    ObserverService, Swipe,
};

use crate::gallery::{ElementId, Gallery};
use crate::motion::TransitionService;
use crate::slideshow::{Command, Direction, Outcome, Rejection, Slideshow};
use crate::stage::Stage;

/// A raw event as reported by the host page.
#[derive(Clone, PartialEq, Debug)]
pub enum InputEvent {
    /// The user clicked (or tapped) an element.
    Clicked(ElementId),
    /// Wheel, touch or pointer movement anywhere on the page.
    Gesture(Gesture),
}

/// Command a click on `element` stands for, if any.
pub fn route_click(gallery: &Gallery, element: &ElementId) -> Option<Command> {
    if let Some(index) = gallery.index_of(element) {
        return Some(Command::Open(index));
    }
    if element == gallery.back_control() {
        return Some(Command::Close);
    }
    [Direction::Prev, Direction::Next]
        .into_iter()
        .find(|&direction| gallery.arrows().get(direction) == element)
        .map(Command::Navigate)
}

/// Deliver one input event to the controller.
pub fn dispatch<S, T, O>(slideshow: &mut Slideshow<S, T, O>, event: InputEvent) -> Outcome
where
    S: Stage,
    T: TransitionService,
    O: GestureObserver,
{
    match event {
        InputEvent::Clicked(element) => match route_click(slideshow.gallery(), &element) {
            Some(command) => slideshow.apply(command),
            None => {
                log::debug!("click on '{}' has no command", element);
                Outcome::Ignored(Rejection::OutOfRange)
            }
        },
        InputEvent::Gesture(gesture) => slideshow.on_gesture(&gesture),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::gallery;

    #[test]
    fn clicks_route_to_commands() {
        let gallery = gallery(3);

        assert_eq!(
            route_click(&gallery, &gallery.surfaces()[2]),
            Some(Command::Open(2))
        );
        assert_eq!(
            route_click(&gallery, gallery.back_control()),
            Some(Command::Close)
        );
        assert_eq!(
            route_click(&gallery, &gallery.arrows().next),
            Some(Command::Navigate(Direction::Next))
        );
        assert_eq!(
            route_click(&gallery, &gallery.arrows().prev),
            Some(Command::Navigate(Direction::Prev))
        );
        assert_eq!(route_click(&gallery, &ElementId::from("footer")), None);
    }
}
