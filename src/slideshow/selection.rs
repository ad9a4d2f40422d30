//! Set of elements currently marked "current".

use crate::gallery::ElementId;
use std::collections::BTreeSet;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    marked: BTreeSet<ElementId>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the element was not marked before.
    pub fn mark(&mut self, element: &ElementId) -> bool {
        self.marked.insert(element.clone())
    }

    /// Returns `true` if the element was marked before.
    pub fn unmark(&mut self, element: &ElementId) -> bool {
        self.marked.remove(element)
    }

    pub fn contains(&self, element: &ElementId) -> bool {
        self.marked.contains(element)
    }

    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }

    pub fn len(&self) -> usize {
        self.marked.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ElementId> {
        self.marked.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mark_and_unmark_report_changes() {
        let mut selection = Selection::new();
        let el = ElementId::from("item-0");

        assert!(selection.mark(&el));
        assert!(!selection.mark(&el));
        assert!(selection.contains(&el));
        assert_eq!(selection.len(), 1);

        assert!(selection.unmark(&el));
        assert!(!selection.unmark(&el));
        assert!(selection.is_empty());
    }
}
