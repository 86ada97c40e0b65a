// crates/ports/src/filesystem.rs
use std::path::{Path, PathBuf};

use collect_files_domain::{CollectConfig, DirExclusion};
use collect_files_shared_kernel::Result;

/// Input parameters controlling traversal.
#[derive(Debug, Clone)]
pub struct TraversalPlan {
    pub root: PathBuf,
    pub excluded_dirs: Vec<String>,
    pub follow_links: bool,
    pub sort_by_name: bool,
    /// Files that must never be collected, such as a sink's temporary file.
    pub skip_files: Vec<PathBuf>,
}

impl TraversalPlan {
    pub fn from_config(config: &CollectConfig) -> Self {
        Self {
            root: config.root.clone(),
            excluded_dirs: config.excluded_dirs.iter().cloned().collect(),
            follow_links: config.follow_links,
            sort_by_name: config.sort,
            skip_files: if config.exclude_output { vec![config.output.clone()] } else { Vec::new() },
        }
    }

    pub fn exclusion(&self) -> Result<DirExclusion> {
        Ok(DirExclusion::new(&self.excluded_dirs)?)
    }
}

/// One step of a traversal.
#[derive(Debug)]
pub enum WalkEvent {
    /// A non-directory entry that should be read.
    File(PathBuf),
    /// The walker could not list or stat something; traversal continues.
    Error { path: Option<PathBuf>, message: String },
}

/// Port for traversing a tree and reading the files it contains.
pub trait FileSource {
    /// Enumerate the files under `plan.root`, lazily, in traversal order.
    fn walk<'a>(&'a self, plan: &'a TraversalPlan) -> Result<Box<dyn Iterator<Item = WalkEvent> + 'a>>;

    /// Read the whole file at `path`.
    fn read(&self, path: &Path) -> Result<Vec<u8>>;
}
