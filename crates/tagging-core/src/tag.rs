//! Tag records and identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier of a tag within a loaded dataset.
///
/// Kept distinct from the display label so that two tags sharing the
/// same text can still be told apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagId(String);

impl TagId {
    /// Create a tag id from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TagId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for TagId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A single taggable option. Immutable once a dataset is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRecord {
    /// Identifier, unique within the dataset.
    pub id: TagId,
    /// Display text.
    pub label: String,
    /// Whether this tag belongs in a correct answer.
    pub is_correct: bool,
    /// Text shown when this tag is evaluated.
    pub feedback: String,
}

impl TagRecord {
    /// Create a new tag record.
    pub fn new(
        id: impl Into<TagId>,
        label: impl Into<String>,
        is_correct: bool,
        feedback: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            is_correct,
            feedback: feedback.into(),
        }
    }

    /// Create a record whose id is its label.
    pub fn labelled(
        label: impl Into<String>,
        is_correct: bool,
        feedback: impl Into<String>,
    ) -> Self {
        let label = label.into();
        Self::new(label.clone(), label, is_correct, feedback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labelled_uses_label_as_id() {
        let tag = TagRecord::labelled("Impressionism", true, "Yes");
        assert_eq!(tag.id.as_str(), "Impressionism");
        assert_eq!(tag.label, "Impressionism");
    }

    #[test]
    fn test_id_serializes_as_plain_string() {
        let json = serde_json::to_string(&TagId::new("t1")).unwrap();
        assert_eq!(json, "\"t1\"");
    }
}
