//! Item records and element identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque reference to a page element.
///
/// The controller never looks inside; it only hands ids back to the stage
/// and the transition service.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ElementId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ElementId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Detail content for one entry, as described by the page.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct ContentBlock {
    /// The detail block itself (marked "current" while shown).
    pub id: ElementId,
    #[serde(default)]
    pub title: Option<ElementId>,
    #[serde(default)]
    pub description: Option<ElementId>,
    /// Text fragments that slide in and out, in document order.
    #[serde(default)]
    pub fragments: Vec<ElementId>,
}

/// One gallery entry: its grid surface paired with its detail content.
///
/// Records are created once from the page and never change afterwards.
#[derive(Clone, PartialEq, Debug, Serialize)]
pub struct ItemRecord {
    index: usize,
    surface: ElementId,
    content: ContentBlock,
}

impl ItemRecord {
    pub(crate) fn new(index: usize, surface: ElementId, content: ContentBlock) -> Self {
        Self {
            index,
            surface,
            content,
        }
    }

    /// Position in the gallery, equal to the surface's position in the grid.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The grid element that flips into the detail view.
    pub fn surface(&self) -> &ElementId {
        &self.surface
    }

    /// The detail block shown while this item is current.
    pub fn block(&self) -> &ElementId {
        &self.content.id
    }

    pub fn content(&self) -> &ContentBlock {
        &self.content
    }

    /// Animatable text fragments of the detail block.
    pub fn fragments(&self) -> &[ElementId] {
        &self.content.fragments
    }
}
