use std::path::PathBuf;

/// A file that was found during traversal but produced no record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of one collection run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    pub collected: usize,
    pub skipped: Vec<SkippedFile>,
    pub walk_errors: usize,
}

impl CollectionSummary {
    /// True when every file the walker reached was collected.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty() && self.walk_errors == 0
    }

    pub fn record_skip(&mut self, path: PathBuf, reason: impl Into<String>) {
        self.skipped.push(SkippedFile { path, reason: reason.into() });
    }
}
