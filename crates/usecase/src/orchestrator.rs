use std::path::Path;

use collect_files_domain::{CollectionSummary, DecodePolicy, NewlineMode};
use collect_files_ports::{
    filesystem::{FileSource, TraversalPlan, WalkEvent},
    progress::DiagnosticSink,
    sink::RecordSink,
};
use collect_files_shared_kernel::{ApplicationError, CollectFilesError, FileRecord, Result};
use tracing::{debug, info, warn};

/// Sink that keeps every record in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub records: Vec<FileRecord>,
}

impl RecordSink for MemorySink {
    fn accept(&mut self, record: FileRecord) -> Result<()> {
        self.records.push(record);
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

// A collection that stopped early, split by whether the sink or the collector failed.
enum Interrupted {
    Sink(CollectFilesError),
    Collect(CollectFilesError),
}

impl Interrupted {
    fn into_inner(self) -> CollectFilesError {
        match self {
            Self::Sink(err) | Self::Collect(err) => err,
        }
    }
}

pub struct CollectFiles<'a> {
    source: &'a dyn FileSource,
    diagnostics: &'a dyn DiagnosticSink,
    policy: DecodePolicy,
    newlines: NewlineMode,
}

impl<'a> CollectFiles<'a> {
    pub fn new(source: &'a dyn FileSource, diagnostics: &'a dyn DiagnosticSink, policy: DecodePolicy) -> Self {
        Self { source, diagnostics, policy, newlines: NewlineMode::default() }
    }

    /// Line-ending handling for decoded content; translated to `\n` unless set otherwise.
    pub fn with_newlines(mut self, newlines: NewlineMode) -> Self {
        self.newlines = newlines;
        self
    }

    /// Collect every readable file under `plan.root` into memory.
    pub fn collect(&self, plan: &TraversalPlan) -> Result<(Vec<FileRecord>, CollectionSummary)> {
        let mut sink = MemorySink::default();
        let summary = self.collect_into(plan, &mut sink).map_err(Interrupted::into_inner)?;
        Ok((sink.records, summary))
    }

    /// Collect into `sink`, then finish it and report the save outcome for `output`.
    ///
    /// A failure while writing is reported through the diagnostic sink and returned as
    /// [`ApplicationError::SaveFailed`]. Read failures never reach the caller.
    pub fn run(&self, plan: &TraversalPlan, sink: &mut dyn RecordSink, output: &Path) -> Result<CollectionSummary> {
        let mut plan = plan.clone();
        plan.skip_files.extend(sink.owned_paths());

        let summary = match self.collect_into(&plan, sink) {
            Ok(summary) => summary,
            Err(Interrupted::Sink(err)) => return Err(self.save_failed(output, err)),
            Err(Interrupted::Collect(err)) => return Err(err),
        };

        if let Err(err) = sink.finish() {
            return Err(self.save_failed(output, err));
        }
        self.diagnostics.on_saved(output);
        info!(
            collected = summary.collected,
            skipped = summary.skipped.len(),
            walk_errors = summary.walk_errors,
            output = %output.display(),
            "collection finished"
        );
        Ok(summary)
    }

    fn collect_into(
        &self,
        plan: &TraversalPlan,
        sink: &mut dyn RecordSink,
    ) -> std::result::Result<CollectionSummary, Interrupted> {
        debug!(root = %plan.root.display(), excluded = ?plan.excluded_dirs, "starting traversal");
        let mut summary = CollectionSummary::default();

        for event in self.source.walk(plan).map_err(Interrupted::Collect)? {
            match event {
                WalkEvent::File(path) => {
                    let Some(record) = self.load(&path, &mut summary).map_err(Interrupted::Collect)? else {
                        continue;
                    };
                    sink.accept(record).map_err(Interrupted::Sink)?;
                    summary.collected += 1;
                }
                WalkEvent::Error { path, message } => {
                    summary.walk_errors += 1;
                    match path {
                        Some(path) => warn!(path = %path.display(), "walk error: {message}"),
                        None => warn!("walk error: {message}"),
                    }
                }
            }
        }
        Ok(summary)
    }

    /// Read and decode one file. `Ok(None)` means the file was skipped and reported.
    fn load(&self, path: &Path, summary: &mut CollectionSummary) -> Result<Option<FileRecord>> {
        let bytes = match self.source.read(path) {
            Ok(bytes) => bytes,
            Err(err) => {
                self.skip(path, &err, summary);
                return Ok(None);
            }
        };

        match self.policy.decode(bytes, self.newlines) {
            Ok(content) => Ok(Some(FileRecord::from_path(path, content))),
            Err(err) if self.policy.is_fatal() => Err(ApplicationError::CollectionAborted {
                path: path.to_path_buf(),
                source: Box::new(err.into()),
            }
            .into()),
            Err(err) => {
                self.skip(path, &err.into(), summary);
                Ok(None)
            }
        }
    }

    fn skip(&self, path: &Path, err: &CollectFilesError, summary: &mut CollectionSummary) {
        warn!(path = %path.display(), "skipping file: {err}");
        self.diagnostics.on_read_failure(path, err);
        summary.record_skip(path.to_path_buf(), err.root_message());
    }

    fn save_failed(&self, output: &Path, err: CollectFilesError) -> CollectFilesError {
        self.diagnostics.on_save_failure(output, &err);
        ApplicationError::SaveFailed { output: output.to_path_buf(), source: Box::new(err) }.into()
    }
}
