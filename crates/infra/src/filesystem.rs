// crates/infra/src/filesystem.rs
use std::path::{Path, PathBuf};

use collect_files_ports::filesystem::{FileSource, TraversalPlan, WalkEvent};
use collect_files_shared_kernel::{InfrastructureError, Result, path::logical_absolute};
use ignore::{DirEntry, WalkBuilder};
use tracing::{debug, trace};

use crate::persistence::FileReader;

/// Filesystem adapter implementing the `FileSource` port with a sequential `ignore` walk.
///
/// None of the `ignore` crate's filters are enabled: hidden files, `.gitignore`d files and
/// files outside version control are all visited. Only the plan's excluded directory
/// names prune the walk.
#[derive(Debug, Default)]
pub struct WalkFileSource;

impl WalkFileSource {
    pub fn new() -> Self {
        Self
    }
}

impl FileSource for WalkFileSource {
    fn walk<'a>(&'a self, plan: &'a TraversalPlan) -> Result<Box<dyn Iterator<Item = WalkEvent> + 'a>> {
        let exclusion = plan.exclusion()?;
        let skip: Vec<PathBuf> = plan.skip_files.iter().map(|p| logical_absolute(p)).collect();
        let follow_links = plan.follow_links;

        let mut builder = WalkBuilder::new(&plan.root);
        builder.standard_filters(false);
        builder.follow_links(follow_links);
        if plan.sort_by_name {
            builder.sort_by_file_name(|a, b| a.cmp(b));
        }
        // The root itself is never pruned, whatever its name.
        builder.filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
                return true;
            }
            let excluded = entry.file_name().to_str().is_some_and(|name| exclusion.is_excluded(name));
            if excluded {
                debug!(dir = %entry.path().display(), "pruning excluded directory");
            }
            !excluded
        });

        let events = builder.build().filter_map(move |result| match result {
            Ok(entry) => classify_entry(entry, follow_links, &skip),
            Err(err) => Some(WalkEvent::Error { path: error_path(&err), message: err.to_string() }),
        });
        Ok(Box::new(events))
    }

    fn read(&self, path: &Path) -> Result<Vec<u8>> {
        FileReader::read_to_end(path)
            .map_err(|source| InfrastructureError::FileRead { path: path.to_path_buf(), source }.into())
    }
}

// Decide whether a walked entry is a file to read. Directories never are; a symlink
// that is not followed counts as a file unless it resolves to a directory, so a
// dangling link still reaches the reader and gets reported there.
fn classify_entry(entry: DirEntry, follow_links: bool, skip: &[PathBuf]) -> Option<WalkEvent> {
    let file_type = entry.file_type()?;
    if file_type.is_dir() {
        return None;
    }
    if !follow_links && file_type.is_symlink() && std::fs::metadata(entry.path()).is_ok_and(|md| md.is_dir()) {
        trace!(path = %entry.path().display(), "not following directory symlink");
        return None;
    }

    let path = entry.into_path();
    if !skip.is_empty() && skip.contains(&logical_absolute(&path)) {
        debug!(path = %path.display(), "skipping output file");
        return None;
    }
    Some(WalkEvent::File(path))
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => error_path(err),
        ignore::Error::Loop { child, .. } => Some(child.clone()),
        _ => None,
    }
}
