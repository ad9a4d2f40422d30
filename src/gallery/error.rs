//! Gallery construction errors.

use super::item::ElementId;
use thiserror::Error;

/// A structural problem found while validating a gallery document.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Violation {
    #[error("{surfaces} surface elements but {records} content records")]
    CountMismatch { surfaces: usize, records: usize },

    #[error("element '{0}' is referenced more than once")]
    DuplicateElement(ElementId),
}

/// Errors that can occur when building a [`Gallery`](super::Gallery).
///
/// These indicate a broken page structure and are meant to fail startup.
#[derive(Debug, Error)]
pub enum GalleryError {
    #[error("invalid gallery document: {}", join(.0))]
    Invalid(Vec<Violation>),

    #[error("failed to parse gallery document: {0}")]
    Parse(#[from] serde_json::Error),
}

fn join(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_lists_every_violation() {
        let err = GalleryError::Invalid(vec![
            Violation::CountMismatch {
                surfaces: 3,
                records: 2,
            },
            Violation::DuplicateElement(ElementId::from("a")),
        ]);

        assert_eq!(
            err.to_string(),
            "invalid gallery document: 3 surface elements but 2 content records; \
             element 'a' is referenced more than once"
        );
    }
}
