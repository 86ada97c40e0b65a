// crates/shared-kernel/src/value_objects/file_record.rs
use std::path::Path;

use serde::{Deserialize, Serialize};

/// One collected file: where it was found, its base name and its decoded text.
///
/// Field order is the serialized key order (`path`, `filename`, `content`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FileRecord {
    pub path: String,
    pub filename: String,
    pub content: String,
}

impl FileRecord {
    pub fn new(path: impl Into<String>, filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self { path: path.into(), filename: filename.into(), content: content.into() }
    }

    /// Build a record from a filesystem path, deriving `filename` from its last component.
    ///
    /// Non UTF-8 path components are converted lossily.
    pub fn from_path(path: &Path, content: String) -> Self {
        let filename = path.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
        Self { path: path.to_string_lossy().into_owned(), filename, content }
    }
}
