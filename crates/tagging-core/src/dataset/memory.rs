//! In-memory dataset source.

use super::{BoxFuture, DatasetResult, DatasetSource};
use crate::tag::TagRecord;

/// In-memory source for testing and embedded datasets.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: Vec<TagRecord>,
}

impl MemorySource {
    /// Create a source that yields the given records.
    pub fn new(records: Vec<TagRecord>) -> Self {
        Self { records }
    }

    /// Create a source from a JSON document.
    pub fn from_json(json: &str) -> DatasetResult<Self> {
        super::parse_records(json).map(Self::new)
    }
}

impl DatasetSource for MemorySource {
    fn fetch(&self) -> BoxFuture<'_, DatasetResult<Vec<TagRecord>>> {
        Box::pin(async move { Ok(self.records.clone()) })
    }

    fn describe(&self) -> String {
        format!("memory ({} tags)", self.records.len())
    }
}
