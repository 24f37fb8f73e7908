//! Check results and their aggregates.

use crate::tag::TagId;
use serde::{Deserialize, Serialize};

/// Judgement of a single placed tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckEntry {
    pub id: TagId,
    pub is_correct: bool,
    pub feedback: String,
}

/// Ordered per-tag judgements produced by a check, in placement order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CheckResult(Vec<CheckEntry>);

impl CheckResult {
    pub(crate) fn new(entries: Vec<CheckEntry>) -> Self {
        Self(entries)
    }

    /// The judged entries, in placement order.
    pub fn entries(&self) -> &[CheckEntry] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Look up the judgement for a tag, if it was placed.
    pub fn get(&self, id: &TagId) -> Option<&CheckEntry> {
        self.0.iter().find(|entry| &entry.id == id)
    }

    /// True when at least one tag was judged and every judged tag is correct.
    ///
    /// Correct tags left in the pool do not count against this.
    pub fn all_correct(&self) -> bool {
        !self.0.is_empty() && self.0.iter().all(|entry| entry.is_correct)
    }

    /// Clear all entries.
    pub(crate) fn clear(&mut self) {
        self.0.clear();
    }
}

impl<'a> IntoIterator for &'a CheckResult {
    type Item = &'a CheckEntry;
    type IntoIter = std::slice::Iter<'a, CheckEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Summary counts for a checked answer.
///
/// Purely informational: per-tag judgement stays independent, and
/// `missed` never turns a correct placement into an incorrect one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    /// Placed tags flagged correct.
    pub correct: usize,
    /// Placed tags flagged incorrect.
    pub incorrect: usize,
    /// Correct tags that were left in the pool.
    pub missed: usize,
}

impl Evaluation {
    /// Whether every correct tag was placed and no incorrect one was.
    pub fn is_complete(&self) -> bool {
        self.incorrect == 0 && self.missed == 0 && self.correct > 0
    }

    /// Total number of judged tags.
    pub fn judged(&self) -> usize {
        self.correct + self.incorrect
    }
}
