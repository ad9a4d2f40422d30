//! Instant page mutations the controller needs besides animation.

use crate::gallery::ElementId;
use std::collections::{BTreeSet, HashMap};

/// Non-animated writes and reads against the page.
pub trait Stage {
    /// Add or remove the "current" marker on an element.
    fn set_marked(&mut self, element: &ElementId, marked: bool);

    /// Move `element` into `container`.
    fn reparent(&mut self, element: &ElementId, container: &ElementId);

    /// Lock or unlock page scrolling.
    fn set_scroll_locked(&mut self, locked: bool);

    /// Flag the content wrapper as showing detail content.
    fn set_content_open(&mut self, content: &ElementId, open: bool);

    /// Current vertical scroll position of the page.
    fn scroll_y(&self) -> f32;

    fn set_scroll_top(&mut self, top: f32);

    /// Vertical center of `element` in its current layout (top + height / 2).
    fn center_of(&self, element: &ElementId) -> f32;
}

/// In-memory [`Stage`] that remembers every write.
#[derive(Clone, Debug, Default)]
pub struct HeadlessStage {
    marked: BTreeSet<ElementId>,
    parents: HashMap<ElementId, ElementId>,
    centers: HashMap<ElementId, f32>,
    open_content: BTreeSet<ElementId>,
    scroll_locked: bool,
    scroll_y: f32,
    scroll_writes: Vec<f32>,
}

impl HeadlessStage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout center reported for `element`.
    pub fn with_center(mut self, element: impl Into<ElementId>, center: f32) -> Self {
        self.centers.insert(element.into(), center);
        self
    }

    /// Simulate the user scrolling the page.
    pub fn scroll_to(&mut self, y: f32) {
        self.scroll_y = y;
    }

    pub fn marked(&self) -> &BTreeSet<ElementId> {
        &self.marked
    }

    pub fn is_marked(&self, element: &ElementId) -> bool {
        self.marked.contains(element)
    }

    pub fn parent_of(&self, element: &ElementId) -> Option<&ElementId> {
        self.parents.get(element)
    }

    pub fn is_scroll_locked(&self) -> bool {
        self.scroll_locked
    }

    pub fn is_content_open(&self, content: &ElementId) -> bool {
        self.open_content.contains(content)
    }

    /// Every scroll position written, in order.
    pub fn scroll_writes(&self) -> &[f32] {
        &self.scroll_writes
    }
}

impl Stage for HeadlessStage {
    fn set_marked(&mut self, element: &ElementId, marked: bool) {
        if marked {
            self.marked.insert(element.clone());
        } else {
            self.marked.remove(element);
        }
    }

    fn reparent(&mut self, element: &ElementId, container: &ElementId) {
        self.parents.insert(element.clone(), container.clone());
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_content_open(&mut self, content: &ElementId, open: bool) {
        if open {
            self.open_content.insert(content.clone());
        } else {
            self.open_content.remove(content);
        }
    }

    fn scroll_y(&self) -> f32 {
        self.scroll_y
    }

    fn set_scroll_top(&mut self, top: f32) {
        self.scroll_y = top;
        self.scroll_writes.push(top);
    }

    fn center_of(&self, element: &ElementId) -> f32 {
        self.centers.get(element).copied().unwrap_or(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn headless_stage_tracks_writes() {
        let mut stage = HeadlessStage::new().with_center("item-1", 420.0);
        let item = ElementId::from("item-1");

        stage.set_marked(&item, true);
        stage.reparent(&ElementId::from("stack"), &ElementId::from("slides"));
        stage.set_scroll_top(0.0);
        stage.set_scroll_top(80.0);

        assert!(stage.is_marked(&item));
        assert_eq!(stage.center_of(&item), 420.0);
        assert_eq!(stage.center_of(&ElementId::from("unknown")), 0.0);
        assert_eq!(
            stage.parent_of(&ElementId::from("stack")),
            Some(&ElementId::from("slides"))
        );
        assert_eq!(stage.scroll_y(), 80.0);
        assert_eq!(stage.scroll_writes(), &[0.0, 80.0]);

        stage.set_marked(&item, false);
        assert!(stage.marked().is_empty());
    }
}
