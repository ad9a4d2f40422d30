//! Gallery item records and the page elements the slideshow drives.
//!
//! A [`Gallery`] is built once from a [`GalleryDocument`], which describes
//! the page the way the host sees it. Construction validates the document
//! and accumulates every structural problem before failing, so a broken
//! page reports all of its issues at startup.
//!
//! # Example
//!
//! ```rust
//! use slidestack::gallery::Gallery;
//!
//! let gallery = Gallery::from_json_str(r#"{
//!     "stack": "stack",
//!     "grid": "stack-wrap",
//!     "detail": "slides",
//!     "content": "content",
//!     "title_fragments": ["title-0"],
//!     "back_control": "back",
//!     "arrows": { "prev": "nav-prev", "next": "nav-next" },
//!     "surfaces": ["item-0", "item-1"],
//!     "content_items": [
//!         { "id": "content-0", "fragments": ["c0-t", "c0-d"] },
//!         { "id": "content-1", "fragments": ["c1-t", "c1-d"] }
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(gallery.len(), 2);
//! assert_eq!(gallery.get(1).unwrap().block().as_str(), "content-1");
//! ```

mod error;
mod item;

pub use error::{GalleryError, Violation};
pub use item::{ContentBlock, ElementId, ItemRecord};

use crate::slideshow::Direction;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use stillwater::validation::Validation;

/// The pair of navigation arrows.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Arrows {
    pub prev: ElementId,
    pub next: ElementId,
}

impl Arrows {
    /// The arrow pointing in `direction`.
    pub fn get(&self, direction: Direction) -> &ElementId {
        match direction {
            Direction::Prev => &self.prev,
            Direction::Next => &self.next,
        }
    }
}

/// Host-side description of the gallery page.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct GalleryDocument {
    /// Element holding all surfaces; it moves between `grid` and `detail`.
    pub stack: ElementId,
    /// Where the stack lives while the slideshow is closed.
    pub grid: ElementId,
    /// Where the stack lives while the slideshow is open.
    pub detail: ElementId,
    /// Wrapper of all detail blocks.
    pub content: ElementId,
    /// Fragments of the page title.
    #[serde(default)]
    pub title_fragments: Vec<ElementId>,
    pub back_control: ElementId,
    pub arrows: Arrows,
    /// Grid surfaces in document order, excluding placeholders.
    pub surfaces: Vec<ElementId>,
    /// Detail blocks in document order.
    pub content_items: Vec<ContentBlock>,
}

impl GalleryDocument {
    pub fn from_json_str(json: &str) -> Result<Self, GalleryError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the document, collecting every violation.
    pub fn validate(&self) -> Validation<(), Vec<Violation>> {
        let checks = vec![self.check_counts(), self.check_unique()];
        Validation::all_vec(checks).map(|_| ())
    }

    fn check_counts(&self) -> Validation<(), Vec<Violation>> {
        if self.surfaces.len() == self.content_items.len() {
            Validation::Success(())
        } else {
            Validation::Failure(vec![Violation::CountMismatch {
                surfaces: self.surfaces.len(),
                records: self.content_items.len(),
            }])
        }
    }

    fn check_unique(&self) -> Validation<(), Vec<Violation>> {
        let mut seen = HashSet::new();
        let mut duplicates: Vec<Violation> = Vec::new();
        let ids = self
            .surfaces
            .iter()
            .chain(self.content_items.iter().map(|block| &block.id));
        for id in ids {
            if !seen.insert(id) {
                let violation = Violation::DuplicateElement(id.clone());
                if !duplicates.contains(&violation) {
                    duplicates.push(violation);
                }
            }
        }
        if duplicates.is_empty() {
            Validation::Success(())
        } else {
            Validation::Failure(duplicates)
        }
    }
}

/// Validated, immutable set of item records plus the shared page elements.
///
/// Records are aligned 1:1 with the grid surfaces: `records[i].surface()`
/// is the `i`-th surface of the document.
#[derive(Clone, Debug)]
pub struct Gallery {
    records: Vec<ItemRecord>,
    surfaces: Vec<ElementId>,
    stack: ElementId,
    grid: ElementId,
    detail: ElementId,
    content: ElementId,
    title_fragments: Vec<ElementId>,
    back_control: ElementId,
    arrows: Arrows,
}

impl Gallery {
    /// Build the gallery, failing on any structural violation.
    pub fn from_document(document: GalleryDocument) -> Result<Self, GalleryError> {
        if let Validation::Failure(violations) = document.validate() {
            log::error!("gallery document rejected: {:?}", violations);
            return Err(GalleryError::Invalid(violations));
        }

        let GalleryDocument {
            stack,
            grid,
            detail,
            content,
            title_fragments,
            back_control,
            arrows,
            surfaces,
            content_items,
        } = document;

        let records = surfaces
            .iter()
            .cloned()
            .zip(content_items)
            .enumerate()
            .map(|(index, (surface, block))| ItemRecord::new(index, surface, block))
            .collect::<Vec<_>>();

        log::debug!("gallery built with {} items", records.len());

        Ok(Self {
            records,
            surfaces,
            stack,
            grid,
            detail,
            content,
            title_fragments,
            back_control,
            arrows,
        })
    }

    pub fn from_json_str(json: &str) -> Result<Self, GalleryError> {
        Self::from_document(GalleryDocument::from_json_str(json)?)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&ItemRecord> {
        self.records.get(index)
    }

    pub fn records(&self) -> &[ItemRecord] {
        &self.records
    }

    /// Index of the item whose surface is `surface`.
    pub fn index_of(&self, surface: &ElementId) -> Option<usize> {
        self.surfaces.iter().position(|s| s == surface)
    }

    /// All grid surfaces, in index order.
    pub fn surfaces(&self) -> &[ElementId] {
        &self.surfaces
    }

    pub fn stack(&self) -> &ElementId {
        &self.stack
    }

    pub fn grid(&self) -> &ElementId {
        &self.grid
    }

    pub fn detail(&self) -> &ElementId {
        &self.detail
    }

    pub fn content(&self) -> &ElementId {
        &self.content
    }

    pub fn title_fragments(&self) -> &[ElementId] {
        &self.title_fragments
    }

    pub fn back_control(&self) -> &ElementId {
        &self.back_control
    }

    pub fn arrows(&self) -> &Arrows {
        &self.arrows
    }
}
