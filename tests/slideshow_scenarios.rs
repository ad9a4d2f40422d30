//! End-to-end scenarios driven through the public API with the headless
//! collaborators.

use slidestack::config::SlideshowConfig;
use slidestack::core::Phase;
use slidestack::gallery::{ElementId, Gallery};
use slidestack::input::{
    dispatch, Gesture, GestureKind, GestureObserver, HeadlessObserver, HeadlessObservers,
    InputEvent,
};
use slidestack::motion::Headless;
use slidestack::slideshow::{ArrowVisibility, Direction, Outcome, Rejection, Slideshow};
use slidestack::stage::HeadlessStage;
use slidestack::viewport::Viewport;
use std::time::Duration;

type Show = Slideshow<HeadlessStage, Headless, HeadlessObserver>;

const GALLERY: &str = r#"{
    "stack": "stack",
    "grid": "stack-wrap",
    "detail": "slides",
    "content": "content",
    "title_fragments": ["title-a", "title-b"],
    "back_control": "back",
    "arrows": { "prev": "nav-prev", "next": "nav-next" },
    "surfaces": ["item-0", "item-1", "item-2", "item-3", "item-4"],
    "content_items": [
        { "id": "content-0", "fragments": ["content-0-text"] },
        { "id": "content-1", "fragments": ["content-1-text"] },
        { "id": "content-2", "fragments": ["content-2-text"] },
        { "id": "content-3", "fragments": ["content-3-text"] },
        { "id": "content-4", "fragments": ["content-4-text"] }
    ]
}"#;

fn show() -> Show {
    let _ = env_logger::builder().is_test(true).try_init();
    Slideshow::new(
        Gallery::from_json_str(GALLERY).unwrap(),
        SlideshowConfig::default(),
        Viewport::new(1440.0, 900.0),
        HeadlessStage::new().with_center("item-2", 1200.0),
        Headless::new(),
        &mut HeadlessObservers,
    )
}

fn id(s: &str) -> ElementId {
    ElementId::from(s)
}

#[test]
fn walk_through_five_items() {
    let mut show = show();

    assert!(show.open(0).is_accepted());
    show.finish_transitions();
    assert_eq!(show.current(), Some(0));
    assert!(show.is_open());
    assert_eq!(show.arrows(), ArrowVisibility { prev: false, next: true });

    assert!(show.navigate(Direction::Next).is_accepted());
    show.finish_transitions();
    assert_eq!(show.current(), Some(1));
    assert_eq!(show.arrows(), ArrowVisibility { prev: true, next: true });

    for _ in 0..3 {
        assert!(show.navigate(Direction::Next).is_accepted());
        show.finish_transitions();
    }
    assert_eq!(show.current(), Some(4));
    assert_eq!(show.arrows(), ArrowVisibility { prev: true, next: false });

    assert_eq!(
        show.navigate(Direction::Next),
        Outcome::Ignored(Rejection::AtEdge)
    );
    assert_eq!(show.current(), Some(4));
    assert!(!show.is_animating());

    assert!(show.close().is_accepted());
    show.finish_transitions();
    assert_eq!(show.current(), None);
    assert!(!show.is_open());
    assert_eq!(show.phase(), Phase::Closed);
}

#[test]
fn open_and_close_leave_the_page_as_it_was() {
    let mut show = show();
    show.stage_mut().scroll_to(640.0);

    show.open(2);
    assert!(show.stage().is_scroll_locked());
    assert!(show.stage().is_content_open(&id("content")));
    assert_eq!(show.stage().parent_of(&id("stack")), Some(&id("slides")));
    assert!(show.stage().is_marked(&id("item-2")));
    assert!(show.stage().is_marked(&id("content-2")));

    show.finish_transitions();
    // Scroll position saved before locking comes back once the flip starts.
    assert_eq!(show.stage().scroll_writes().last(), Some(&640.0));

    show.close();
    assert!(!show.stage().is_scroll_locked());
    assert_eq!(show.stage().parent_of(&id("stack")), Some(&id("stack-wrap")));
    assert!(!show.stage().is_marked(&id("item-2")));
    // The detail block stays up until the close has played out.
    assert!(show.stage().is_marked(&id("content-2")));

    show.finish_transitions();
    assert!(show.stage().marked().is_empty());
    assert!(!show.stage().is_content_open(&id("content")));
    assert!(show.selection().is_empty());
}

#[test]
fn input_events_drive_the_controller() {
    let mut show = show();

    assert_eq!(
        dispatch(&mut show, InputEvent::Clicked(id("nav-next"))),
        Outcome::Ignored(Rejection::NotOpen)
    );
    assert!(dispatch(&mut show, InputEvent::Clicked(id("item-3"))).is_accepted());
    assert_eq!(
        dispatch(&mut show, InputEvent::Clicked(id("nav-next"))),
        Outcome::Ignored(Rejection::Busy)
    );

    show.advance(Duration::from_secs(1));
    assert_eq!(show.phase(), Phase::Open);

    assert!(dispatch(&mut show, InputEvent::Clicked(id("nav-prev"))).is_accepted());
    show.finish_transitions();
    assert_eq!(show.current(), Some(2));

    assert_eq!(
        dispatch(&mut show, InputEvent::Clicked(id("somewhere-else"))),
        Outcome::Ignored(Rejection::OutOfRange)
    );

    assert!(dispatch(&mut show, InputEvent::Clicked(id("back"))).is_accepted());
    show.finish_transitions();
    assert_eq!(show.phase(), Phase::Closed);
}

#[test]
fn scroll_gesture_closes_exactly_once() {
    let mut show = show();
    show.open(1);
    show.finish_transitions();
    assert!(show.observer().is_enabled());

    let swipe = Gesture::new(GestureKind::Wheel, 120.0);
    assert!(show.on_gesture(&swipe).is_accepted());
    assert!(!show.observer().is_enabled());

    // A burst of further wheel events must not queue a second close.
    for _ in 0..5 {
        assert_eq!(
            show.on_gesture(&swipe),
            Outcome::Ignored(Rejection::ObserverDisabled)
        );
    }
    show.finish_transitions();
    assert_eq!(show.phase(), Phase::Closed);

    let closes = show
        .history()
        .transitions()
        .filter(|t| t.to == Phase::Closing)
        .count();
    assert_eq!(closes, 1);
}

#[test]
fn small_gestures_do_not_close() {
    let mut show = show();
    show.open(0);
    show.finish_transitions();

    assert_eq!(
        show.on_gesture(&Gesture::new(GestureKind::Touch, 4.0)),
        Outcome::Ignored(Rejection::BelowTolerance)
    );
    assert_eq!(show.phase(), Phase::Open);
}

#[test]
fn resize_changes_navigation_travel() {
    let mut show = show();
    show.open(0);
    show.finish_transitions();

    show.resize(800.0, 600.0);
    assert_eq!(show.viewport(), Viewport::new(800.0, 600.0));
    assert!(show.navigate(Direction::Next).is_accepted());
    show.finish_transitions();
    assert_eq!(show.current(), Some(1));
}

#[test]
fn history_records_each_phase_change() {
    let mut show = show();
    show.open(0);
    show.finish_transitions();
    show.close();
    show.finish_transitions();

    let path: Vec<Phase> = show.history().get_path().into_iter().copied().collect();
    assert_eq!(
        path,
        vec![Phase::Closed, Phase::Opening, Phase::Open, Phase::Closing, Phase::Closed]
    );
}
