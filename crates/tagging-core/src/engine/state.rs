//! Engine phase and snapshot definitions.

use super::evaluation::CheckResult;
use crate::tag::{TagId, TagRecord};
use serde::{Deserialize, Serialize};

/// Whether the answer is still editable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Tags can be placed and removed.
    #[default]
    Unlocked,
    /// The answer has been checked; placement is frozen until reset.
    Locked,
}

impl Phase {
    /// Check if placement is frozen.
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked)
    }
}

/// Immutable copy of the engine state, emitted after every operation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tags not currently placed, in pool order.
    pub pool: Vec<TagRecord>,
    /// Tags in the answer area, in placement order.
    pub placed: Vec<TagRecord>,
    pub phase: Phase,
    /// Result of the most recent check; empty while unlocked.
    pub last_result: CheckResult,
}

impl Snapshot {
    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    /// Ids in the pool, in order.
    pub fn pool_ids(&self) -> Vec<TagId> {
        self.pool.iter().map(|tag| tag.id.clone()).collect()
    }

    /// Ids in the answer area, in placement order.
    pub fn placed_ids(&self) -> Vec<TagId> {
        self.placed.iter().map(|tag| tag.id.clone()).collect()
    }

    /// Check if a tag sits in the answer area.
    pub fn is_placed(&self, id: &TagId) -> bool {
        self.placed.iter().any(|tag| &tag.id == id)
    }

    /// Whether no dataset has been delivered, or it was empty.
    pub fn is_empty(&self) -> bool {
        self.pool.is_empty() && self.placed.is_empty()
    }

    pub fn all_correct(&self) -> bool {
        self.last_result.all_correct()
    }
}
