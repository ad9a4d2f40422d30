//! Shared fixtures for unit tests.

use crate::config::SlideshowConfig;
use crate::gallery::{Arrows, ContentBlock, ElementId, Gallery, GalleryDocument};
use crate::input::{HeadlessObserver, HeadlessObservers};
use crate::motion::Headless;
use crate::slideshow::Slideshow;
use crate::stage::HeadlessStage;
use crate::viewport::Viewport;

pub type TestSlideshow = Slideshow<HeadlessStage, Headless, HeadlessObserver>;

pub fn document(items: usize) -> GalleryDocument {
    GalleryDocument {
        stack: "stack".into(),
        grid: "stack-wrap".into(),
        detail: "slides".into(),
        content: "content".into(),
        title_fragments: vec!["title-0".into(), "title-1".into()],
        back_control: "back".into(),
        arrows: Arrows {
            prev: "nav-prev".into(),
            next: "nav-next".into(),
        },
        surfaces: (0..items)
            .map(|i| ElementId::new(format!("item-{i}")))
            .collect(),
        content_items: (0..items)
            .map(|i| ContentBlock {
                id: ElementId::new(format!("content-{i}")),
                title: Some(ElementId::new(format!("content-{i}-title"))),
                description: Some(ElementId::new(format!("content-{i}-description"))),
                fragments: vec![
                    ElementId::new(format!("content-{i}-text-0")),
                    ElementId::new(format!("content-{i}-text-1")),
                ],
            })
            .collect(),
    }
}

pub fn gallery(items: usize) -> Gallery {
    Gallery::from_document(document(items)).expect("fixture gallery is valid")
}

pub fn slideshow(items: usize) -> TestSlideshow {
    slideshow_with(items, SlideshowConfig::default())
}

/// Slideshow with a config that has not been through validation.
pub fn slideshow_with(items: usize, config: SlideshowConfig) -> TestSlideshow {
    let _ = env_logger::builder().is_test(true).try_init();
    Slideshow::new(
        gallery(items),
        config,
        Viewport::new(1280.0, 800.0),
        HeadlessStage::new(),
        Headless::new(),
        &mut HeadlessObservers,
    )
}
