// src/presentation.rs
use std::path::Path;

use collect_files_ports::progress::DiagnosticSink;
use collect_files_shared_kernel::CollectFilesError;

/// Prints the run's user-facing lines: failures on stderr, the save confirmation on stdout.
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn read_failure_line(path: &Path, error: &CollectFilesError) -> String {
        format!("Could not read file {}: {}", path.display(), error.root_message())
    }

    pub fn saved_line(output: &Path) -> String {
        format!("Data saved to {}", output.display())
    }

    pub fn save_failure_line(output: &Path, error: &CollectFilesError) -> String {
        format!("Could not save data to {}: {}", output.display(), error.root_message())
    }
}

impl DiagnosticSink for ConsoleReporter {
    fn on_read_failure(&self, path: &Path, error: &CollectFilesError) {
        eprintln!("{}", Self::read_failure_line(path, error));
    }

    fn on_saved(&self, output: &Path) {
        println!("{}", Self::saved_line(output));
    }

    fn on_save_failure(&self, output: &Path, error: &CollectFilesError) {
        eprintln!("{}", Self::save_failure_line(output, error));
    }
}
