// crates/ports/src/sink.rs
use std::path::PathBuf;

use collect_files_shared_kernel::{FileRecord, Result};

/// Port receiving records in traversal order.
///
/// A sink either stores records until [`RecordSink::finish`] or writes them through
/// immediately; callers must not rely on either.
pub trait RecordSink {
    fn accept(&mut self, record: FileRecord) -> Result<()>;

    /// Flush everything and make the output visible at its final location.
    fn finish(&mut self) -> Result<()>;

    /// Paths the sink writes to while the traversal is still running.
    fn owned_paths(&self) -> Vec<PathBuf> {
        Vec::new()
    }
}
