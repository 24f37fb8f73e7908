//! Dataset loading.
//!
//! The engine never fetches its own tags. A [`DatasetSource`] delivers
//! the records once, and the host hands them to
//! [`PlacementEngine::load`](crate::engine::PlacementEngine::load).

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemorySource;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileSource;

use crate::tag::{TagId, TagRecord};
use serde::Deserialize;
use std::collections::HashSet;
use std::future::Future;
use std::pin::Pin;
use thiserror::Error;

/// Dataset errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Malformed dataset: {0}")]
    Malformed(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("Duplicate tag id in dataset: {0}")]
    Duplicate(TagId),
}

/// Result type for dataset operations.
pub type DatasetResult<T> = Result<T, DatasetError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A record as it appears in the dataset JSON.
#[derive(Debug, Deserialize)]
struct WireRecord {
    #[serde(default)]
    id: Option<String>,
    tag: String,
    correct: bool,
    feedback: String,
}

impl From<WireRecord> for TagRecord {
    fn from(wire: WireRecord) -> Self {
        let id = wire.id.unwrap_or_else(|| wire.tag.clone());
        TagRecord::new(id, wire.tag, wire.correct, wire.feedback)
    }
}

/// Parse a JSON array of tag records.
///
/// Each entry needs `tag`, `correct` and `feedback`; `id` is optional
/// and falls back to the label.
pub fn parse_records(json: &str) -> DatasetResult<Vec<TagRecord>> {
    let wire: Vec<WireRecord> =
        serde_json::from_str(json).map_err(|e| DatasetError::Malformed(e.to_string()))?;
    let records: Vec<TagRecord> = wire.into_iter().map(TagRecord::from).collect();
    if let Some(id) = first_duplicate(&records) {
        return Err(DatasetError::Duplicate(id.clone()));
    }
    Ok(records)
}

/// Find the first id that occurs more than once.
pub fn first_duplicate(records: &[TagRecord]) -> Option<&TagId> {
    let mut seen = HashSet::with_capacity(records.len());
    records.iter().map(|r| &r.id).find(|id| !seen.insert(*id))
}

/// Trait for tag dataset providers.
///
/// Implementations can read from memory, the filesystem, or the network.
///
/// Note: On native platforms, implementations must be Send + Sync.
/// On WASM, these bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait DatasetSource: Send + Sync {
    /// Deliver the full, ordered list of tag records.
    fn fetch(&self) -> BoxFuture<'_, DatasetResult<Vec<TagRecord>>>;

    /// Human-readable description of where the tags come from.
    fn describe(&self) -> String;
}

/// Trait for tag dataset providers (WASM version without Send + Sync).
#[cfg(target_arch = "wasm32")]
pub trait DatasetSource {
    /// Deliver the full, ordered list of tag records.
    fn fetch(&self) -> BoxFuture<'_, DatasetResult<Vec<TagRecord>>>;

    /// Human-readable description of where the tags come from.
    fn describe(&self) -> String;
}

#[cfg(test)]
pub(crate) fn block_on<F: Future>(f: F) -> F::Output {
    // Simple blocking executor for tests
    use std::task::{Context, Poll, RawWaker, RawWakerVTable, Waker};

    fn dummy_raw_waker() -> RawWaker {
        fn no_op(_: *const ()) {}
        fn clone(_: *const ()) -> RawWaker {
            dummy_raw_waker()
        }
        static VTABLE: RawWakerVTable = RawWakerVTable::new(clone, no_op, no_op, no_op);
        RawWaker::new(std::ptr::null(), &VTABLE)
    }

    let waker = unsafe { Waker::from_raw(dummy_raw_waker()) };
    let mut cx = Context::from_waker(&waker);
    let mut f = std::pin::pin!(f);

    loop {
        if let Poll::Ready(result) = f.as_mut().poll(&mut cx) {
            return result;
        }
    }
}
