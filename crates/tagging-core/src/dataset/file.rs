//! File-based dataset source for native platforms.

use super::{BoxFuture, DatasetError, DatasetResult, DatasetSource};
use crate::tag::TagRecord;
use std::fs;
use std::path::{Path, PathBuf};

/// Reads a tag dataset from a JSON file.
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// Create a source for the given file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetSource for FileSource {
    fn fetch(&self) -> BoxFuture<'_, DatasetResult<Vec<TagRecord>>> {
        Box::pin(async move {
            let json = fs::read_to_string(&self.path).map_err(|e| {
                DatasetError::Io(format!("Failed to read {}: {}", self.path.display(), e))
            })?;
            let records = super::parse_records(&json)?;
            log::info!("Read {} tags from {}", records.len(), self.path.display());
            Ok(records)
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
