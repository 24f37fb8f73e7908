//! Tag placement engine.
//!
//! Owns which tags sit in the pool and which sit in the answer area,
//! and drives the check/reset cycle:
//! - `Unlocked`: place, remove and toggle move tags between the two areas
//! - `Locked`: entered by a check; mutations are rejected until reset
//!
//! Every operation returns a [`Snapshot`] for the presentation layer to render.

mod evaluation;
mod shuffle;
mod state;

pub use evaluation::{CheckEntry, CheckResult, Evaluation};
pub use shuffle::fisher_yates;
pub use state::{Phase, Snapshot};

use crate::dataset::first_duplicate;
use crate::tag::{TagId, TagRecord};
use rand::Rng;
use std::collections::HashMap;
use thiserror::Error;

/// Engine errors. None of them change the engine state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Duplicate tag id: {0}")]
    DuplicateId(TagId),
    #[error("Unknown tag id: {0}")]
    UnknownId(TagId),
    #[error("Answer has been checked; reset before changing it")]
    Locked,
}

/// Result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

/// The placement state machine for one widget session.
#[derive(Debug, Clone, Default)]
pub struct PlacementEngine {
    /// Loaded records, in dataset order.
    records: Vec<TagRecord>,
    /// Position of each id in `records`.
    index: HashMap<TagId, usize>,
    /// Pool ordering from the last load or reset. The pool is this
    /// order minus whatever is placed.
    order: Vec<TagId>,
    /// Answer area, in placement order.
    placed: Vec<TagId>,
    phase: Phase,
    last_result: CheckResult,
}

impl PlacementEngine {
    /// Create an engine with no dataset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine and load `records` into it.
    pub fn with_records(records: Vec<TagRecord>) -> EngineResult<Self> {
        let mut engine = Self::new();
        engine.load(records)?;
        Ok(engine)
    }

    /// Replace the dataset.
    ///
    /// The pool takes the given order, the answer area is emptied and the
    /// engine unlocks. On a duplicate id the previous state is kept.
    pub fn load(&mut self, records: Vec<TagRecord>) -> EngineResult<Snapshot> {
        if let Some(id) = first_duplicate(&records) {
            log::warn!("Rejected dataset with duplicate tag id {id}");
            return Err(EngineError::DuplicateId(id.clone()));
        }

        self.index = records
            .iter()
            .enumerate()
            .map(|(i, record)| (record.id.clone(), i))
            .collect();
        self.order = records.iter().map(|record| record.id.clone()).collect();
        self.records = records;
        self.placed.clear();
        self.unlock();

        log::info!("Loaded {} tags", self.records.len());
        Ok(self.snapshot())
    }

    /// Move a tag from the pool into the answer area.
    ///
    /// Placing a tag that is already placed is a no-op.
    pub fn place(&mut self, id: &TagId) -> EngineResult<Snapshot> {
        self.ensure_mutable(id)?;
        if !self.is_placed(id) {
            self.placed.push(id.clone());
            log::debug!("Placed {id}");
        }
        Ok(self.snapshot())
    }

    /// Move a tag from the answer area back into the pool.
    ///
    /// The tag returns to its slot in the current pool ordering.
    /// Removing a tag that is already in the pool is a no-op.
    pub fn remove(&mut self, id: &TagId) -> EngineResult<Snapshot> {
        self.ensure_mutable(id)?;
        if let Some(pos) = self.placed.iter().position(|placed| placed == id) {
            self.placed.remove(pos);
            log::debug!("Removed {id}");
        }
        Ok(self.snapshot())
    }

    /// Remove the tag if it is placed, otherwise place it.
    pub fn toggle(&mut self, id: &TagId) -> EngineResult<Snapshot> {
        if self.is_placed(id) {
            self.remove(id)
        } else {
            self.place(id)
        }
    }

    /// Judge every placed tag and lock the answer.
    ///
    /// While locked this returns the earlier result untouched.
    pub fn check(&mut self) -> CheckResult {
        if self.phase.is_locked() {
            return self.last_result.clone();
        }

        let entries = self
            .placed
            .iter()
            .filter_map(|id| self.record(id))
            .map(|record| CheckEntry {
                id: record.id.clone(),
                is_correct: record.is_correct,
                feedback: record.feedback.clone(),
            })
            .collect();
        self.last_result = CheckResult::new(entries);
        self.phase = Phase::Locked;

        log::debug!(
            "Checked {} placed tags (all correct: {})",
            self.last_result.len(),
            self.last_result.all_correct()
        );
        self.last_result.clone()
    }

    /// Shuffle the pool with the thread-local generator and unlock.
    pub fn reset(&mut self) -> Snapshot {
        self.reset_with(&mut rand::rng())
    }

    /// Shuffle every tag back into the pool using `rng`, empty the answer
    /// area and unlock.
    pub fn reset_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Snapshot {
        self.order = self.records.iter().map(|record| record.id.clone()).collect();
        fisher_yates(&mut self.order, rng);
        self.placed.clear();
        self.unlock();

        log::debug!("Reset {} tags", self.order.len());
        self.snapshot()
    }

    /// Current state as an immutable snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            pool: self.pool().cloned().collect(),
            placed: self
                .placed
                .iter()
                .filter_map(|id| self.record(id))
                .cloned()
                .collect(),
            phase: self.phase,
            last_result: self.last_result.clone(),
        }
    }

    /// Summary of the current check, or `None` while unlocked.
    pub fn evaluation(&self) -> Option<Evaluation> {
        if !self.phase.is_locked() {
            return None;
        }
        let correct = self.last_result.entries().iter().filter(|e| e.is_correct).count();
        let missed = self.pool().filter(|record| record.is_correct).count();
        Some(Evaluation {
            correct,
            incorrect: self.last_result.len() - correct,
            missed,
        })
    }

    /// Get a record by id.
    pub fn record(&self, id: &TagId) -> Option<&TagRecord> {
        self.index.get(id).map(|&i| &self.records[i])
    }

    /// All loaded records, in dataset order.
    pub fn records(&self) -> &[TagRecord] {
        &self.records
    }

    /// Records currently in the pool, in pool order.
    pub fn pool(&self) -> impl Iterator<Item = &TagRecord> {
        self.order
            .iter()
            .filter(|id| !self.is_placed(id))
            .filter_map(|id| self.record(id))
    }

    /// Check if a tag sits in the answer area.
    pub fn is_placed(&self, id: &TagId) -> bool {
        self.placed.contains(id)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_locked(&self) -> bool {
        self.phase.is_locked()
    }

    pub fn last_result(&self) -> &CheckResult {
        &self.last_result
    }

    /// Number of loaded tags.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn ensure_mutable(&self, id: &TagId) -> EngineResult<()> {
        if self.phase.is_locked() {
            log::warn!("Rejected change to {id}: answer is locked");
            return Err(EngineError::Locked);
        }
        if !self.index.contains_key(id) {
            log::warn!("Rejected change to unknown tag {id}");
            return Err(EngineError::UnknownId(id.clone()));
        }
        Ok(())
    }

    // The result only lives while locked.
    fn unlock(&mut self) {
        self.phase = Phase::Unlocked;
        self.last_result.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    fn id(s: &str) -> TagId {
        TagId::new(s)
    }

    fn three_tags() -> Vec<TagRecord> {
        vec![
            TagRecord::new("t1", "Tag one", true, "fb1"),
            TagRecord::new("t2", "Tag two", false, "fb2"),
            TagRecord::new("t3", "Tag three", true, "fb3"),
        ]
    }

    fn engine() -> PlacementEngine {
        PlacementEngine::with_records(three_tags()).unwrap()
    }

    fn assert_partition(engine: &PlacementEngine) {
        let snap = engine.snapshot();
        let pool: HashSet<_> = snap.pool_ids().into_iter().collect();
        let placed: HashSet<_> = snap.placed_ids().into_iter().collect();
        let all: HashSet<_> = engine.records().iter().map(|r| r.id.clone()).collect();

        assert!(pool.is_disjoint(&placed));
        assert_eq!(&pool | &placed, all);
        assert_eq!(snap.pool.len() + snap.placed.len(), engine.len());
    }

    #[test]
    fn test_load_fills_pool_in_order() {
        let engine = engine();
        let snap = engine.snapshot();

        assert_eq!(snap.pool_ids(), vec![id("t1"), id("t2"), id("t3")]);
        assert!(snap.placed.is_empty());
        assert_eq!(snap.phase, Phase::Unlocked);
        assert!(snap.last_result.is_empty());
    }

    #[test]
    fn test_place_and_remove() {
        let mut engine = engine();
        let snap = engine.place(&id("t2")).unwrap();
        assert_eq!(snap.placed_ids(), vec![id("t2")]);
        assert_eq!(snap.pool_ids(), vec![id("t1"), id("t3")]);
        assert_partition(&engine);

        let snap = engine.remove(&id("t2")).unwrap();
        assert!(snap.placed.is_empty());
        assert_partition(&engine);
    }

    #[test]
    fn test_place_is_idempotent() {
        let mut engine = engine();
        let once = engine.place(&id("t1")).unwrap();
        let twice = engine.place(&id("t1")).unwrap();
        assert_eq!(once, twice);
    }

    #[test]
    fn test_remove_from_pool_is_noop() {
        let mut engine = engine();
        let before = engine.snapshot();
        let after = engine.remove(&id("t3")).unwrap();
        assert_eq!(before, after);
    }

    #[test]
    fn test_place_remove_round_trip_restores_pool() {
        let mut engine = engine();
        engine.place(&id("t3")).unwrap();
        let before = engine.snapshot();

        engine.place(&id("t2")).unwrap();
        let after = engine.remove(&id("t2")).unwrap();

        assert_eq!(before, after);
        assert_eq!(after.pool_ids(), vec![id("t1"), id("t2")]);
    }

    #[test]
    fn test_placed_keeps_placement_order() {
        let mut engine = engine();
        engine.place(&id("t3")).unwrap();
        engine.place(&id("t1")).unwrap();
        assert_eq!(engine.snapshot().placed_ids(), vec![id("t3"), id("t1")]);
    }

    #[test]
    fn test_toggle() {
        let mut engine = engine();
        assert!(engine.toggle(&id("t1")).unwrap().is_placed(&id("t1")));
        assert!(!engine.toggle(&id("t1")).unwrap().is_placed(&id("t1")));
    }

    #[test]
    fn test_unknown_id() {
        let mut engine = engine();
        let before = engine.snapshot();

        assert_eq!(engine.place(&id("zz")), Err(EngineError::UnknownId(id("zz"))));
        assert_eq!(engine.remove(&id("zz")), Err(EngineError::UnknownId(id("zz"))));
        assert_eq!(engine.toggle(&id("zz")), Err(EngineError::UnknownId(id("zz"))));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_empty_engine_rejects_placement() {
        let mut engine = PlacementEngine::new();
        assert!(engine.is_empty());
        assert_eq!(engine.place(&id("t1")), Err(EngineError::UnknownId(id("t1"))));
    }

    #[test]
    fn test_scenario_mixed_answer() {
        let mut engine = engine();
        engine.place(&id("t1")).unwrap();
        engine.place(&id("t2")).unwrap();

        let result = engine.check();
        assert_eq!(
            result.entries(),
            &[
                CheckEntry { id: id("t1"), is_correct: true, feedback: "fb1".into() },
                CheckEntry { id: id("t2"), is_correct: false, feedback: "fb2".into() },
            ]
        );
        assert!(!result.all_correct());
    }

    #[test]
    fn test_scenario_all_correct() {
        let mut engine = engine();
        engine.place(&id("t1")).unwrap();
        engine.place(&id("t3")).unwrap();

        let result = engine.check();
        assert_eq!(result.len(), 2);
        assert!(result.entries().iter().all(|e| e.is_correct));
        assert!(result.all_correct());
        assert!(engine.snapshot().all_correct());
    }

    #[test]
    fn test_scenario_remove_while_locked() {
        let mut engine = engine();
        engine.place(&id("t1")).unwrap();
        engine.check();

        assert_eq!(engine.remove(&id("t1")), Err(EngineError::Locked));
        assert!(engine.is_placed(&id("t1")));
    }

    #[test]
    fn test_scenario_duplicate_load_keeps_prior_state() {
        let mut engine = engine();
        engine.place(&id("t2")).unwrap();
        let before = engine.snapshot();

        let dup = vec![
            TagRecord::new("t1", "a", true, ""),
            TagRecord::new("t1", "b", false, ""),
        ];
        assert_eq!(engine.load(dup), Err(EngineError::DuplicateId(id("t1"))));
        assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn test_locked_rejects_all_mutations() {
        let mut engine = engine();
        engine.place(&id("t1")).unwrap();
        engine.check();
        let before = engine.snapshot();

        assert_eq!(engine.place(&id("t2")), Err(EngineError::Locked));
        assert_eq!(engine.remove(&id("t1")), Err(EngineError::Locked));
        assert_eq!(engine.toggle(&id("t3")), Err(EngineError::Locked));
        // Locked wins over unknown.
        assert_eq!(engine.place(&id("zz")), Err(EngineError::Locked));
        assert_eq!(engine.snapshot(), before);

        engine.reset_with(&mut ChaCha8Rng::seed_from_u64(3));
        assert!(engine.place(&id("t2")).is_ok());
        assert!(engine.toggle(&id("t3")).unwrap().is_placed(&id("t3")));
        let snap = engine.remove(&id("t2")).unwrap();
        assert!(!snap.is_placed(&id("t2")));
        assert_eq!(snap.placed_ids(), vec![id("t3")]);
        assert_partition(&engine);
    }

    #[test]
    fn test_check_is_idempotent_while_locked() {
        let mut engine = engine();
        engine.place(&id("t2")).unwrap();
        let first = engine.check();
        let second = engine.check();
        assert_eq!(first, second);
        assert!(engine.is_locked());
    }

    #[test]
    fn test_check_with_nothing_placed() {
        let mut engine = engine();
        let result = engine.check();
        assert!(result.is_empty());
        assert!(!result.all_correct());
        assert!(engine.is_locked());
    }

    #[test]
    fn test_reset_shuffles_and_unlocks() {
        let records: Vec<_> = (0..20)
            .map(|i| TagRecord::new(format!("t{i}"), format!("Tag {i}"), i % 2 == 0, ""))
            .collect();
        let mut engine = PlacementEngine::with_records(records).unwrap();
        engine.place(&id("t4")).unwrap();
        engine.place(&id("t5")).unwrap();
        engine.check();

        let snap = engine.reset_with(&mut ChaCha8Rng::seed_from_u64(11));

        assert!(snap.placed.is_empty());
        assert_eq!(snap.phase, Phase::Unlocked);
        assert!(snap.last_result.is_empty());
        let mut pool = snap.pool_ids();
        assert_eq!(pool.len(), 20);
        pool.sort();
        pool.dedup();
        assert_eq!(pool.len(), 20);
        assert_partition(&engine);
    }

    #[test]
    fn test_remove_after_reset_returns_to_shuffled_slot() {
        let mut engine = engine();
        let shuffled = engine.reset_with(&mut ChaCha8Rng::seed_from_u64(5)).pool_ids();

        engine.place(&shuffled[1]).unwrap();
        let snap = engine.remove(&shuffled[1]).unwrap();
        assert_eq!(snap.pool_ids(), shuffled);
    }

    #[test]
    fn test_reload_clears_lock() {
        let mut engine = engine();
        engine.place(&id("t1")).unwrap();
        engine.check();

        let snap = engine
            .load(vec![TagRecord::labelled("fresh", true, "new")])
            .unwrap();
        assert!(!snap.is_locked());
        assert!(snap.last_result.is_empty());
        assert_eq!(snap.pool_ids(), vec![id("fresh")]);
        assert!(engine.record(&id("t1")).is_none());
    }

    #[test]
    fn test_evaluation_counts_missed() {
        let mut engine = engine();
        assert!(engine.evaluation().is_none());

        engine.place(&id("t1")).unwrap();
        engine.place(&id("t2")).unwrap();
        engine.check();

        let eval = engine.evaluation().unwrap();
        assert_eq!(eval, Evaluation { correct: 1, incorrect: 1, missed: 1 });
        assert!(!eval.is_complete());
    }

    #[test]
    fn test_partition_holds_over_random_walk() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut engine = engine();
        let ids = [id("t1"), id("t2"), id("t3")];

        for _ in 0..200 {
            let target = &ids[rng.random_range(0..ids.len())];
            match rng.random_range(0..5) {
                0 => {
                    let _ = engine.place(target);
                }
                1 => {
                    let _ = engine.remove(target);
                }
                2 => {
                    let _ = engine.toggle(target);
                }
                3 => {
                    engine.check();
                }
                _ => {
                    engine.reset_with(&mut rng);
                }
            }
            assert_partition(&engine);
            assert!(engine.is_locked() || engine.last_result().is_empty());
        }
    }
}
