// crates/ports/src/progress.rs
use std::path::Path;

use collect_files_shared_kernel::CollectFilesError;

/// Receives the user-facing diagnostics of a run.
pub trait DiagnosticSink {
    fn on_read_failure(&self, path: &Path, error: &CollectFilesError);
    fn on_saved(&self, output: &Path);
    fn on_save_failure(&self, output: &Path, error: &CollectFilesError);
}
