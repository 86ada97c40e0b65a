use std::{collections::BTreeSet, path::PathBuf};

use collect_files_shared_kernel::DomainResult;
use serde::Deserialize;

use crate::config::{DecodePolicy, DirExclusion, NewlineMode};

pub const DEFAULT_OUTPUT_FILE: &str = "collected_files.json";
pub const DEFAULT_EXCLUDED_DIR: &str = "target";

/// Domain representation of resolved configuration options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectConfig {
    pub root: PathBuf,
    pub output: PathBuf,
    pub excluded_dirs: BTreeSet<String>,
    pub on_decode_error: DecodePolicy,
    pub newlines: NewlineMode,
    pub follow_links: bool,
    pub sort: bool,
    pub stream: bool,
    /// Leave a file already sitting at `output` out of the collection.
    pub exclude_output: bool,
    /// Escape every non-ASCII character in the JSON output as `\uXXXX`.
    pub ascii: bool,
}

impl Default for CollectConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            excluded_dirs: BTreeSet::from([DEFAULT_EXCLUDED_DIR.to_string()]),
            on_decode_error: DecodePolicy::default(),
            newlines: NewlineMode::default(),
            follow_links: false,
            sort: false,
            stream: false,
            exclude_output: false,
            ascii: false,
        }
    }
}

impl CollectConfig {
    /// Layer `patch` on top of `self`. Fields the patch leaves unset keep their value.
    pub fn apply(mut self, patch: ConfigPatch) -> Self {
        if let Some(root) = patch.root {
            self.root = root;
        }
        if let Some(output) = patch.output {
            self.output = output;
        }
        if patch.no_default_excludes {
            self.excluded_dirs.remove(DEFAULT_EXCLUDED_DIR);
        }
        if let Some(dirs) = patch.excluded_dirs {
            self.excluded_dirs = dirs;
        }
        self.excluded_dirs.extend(patch.extra_excluded_dirs);
        if let Some(policy) = patch.on_decode_error {
            self.on_decode_error = policy;
        }
        if let Some(newlines) = patch.newlines {
            self.newlines = newlines;
        }
        if let Some(follow) = patch.follow_links {
            self.follow_links = follow;
        }
        if let Some(sort) = patch.sort {
            self.sort = sort;
        }
        if let Some(stream) = patch.stream {
            self.stream = stream;
        }
        if let Some(exclude_output) = patch.exclude_output {
            self.exclude_output = exclude_output;
        }
        if let Some(ascii) = patch.ascii {
            self.ascii = ascii;
        }
        self
    }

    /// Compile the excluded directory entries into a matcher.
    pub fn exclusion(&self) -> DomainResult<DirExclusion> {
        DirExclusion::new(&self.excluded_dirs)
    }
}

/// A partial configuration: one layer read from a config file or the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigPatch {
    pub root: Option<PathBuf>,
    pub output: Option<PathBuf>,
    /// Replaces the excluded set entirely.
    pub excluded_dirs: Option<BTreeSet<String>>,
    /// Added to the excluded set after any replacement.
    pub extra_excluded_dirs: Vec<String>,
    /// Removes the built-in `target` entry.
    pub no_default_excludes: bool,
    pub on_decode_error: Option<DecodePolicy>,
    pub newlines: Option<NewlineMode>,
    pub follow_links: Option<bool>,
    pub sort: Option<bool>,
    pub stream: Option<bool>,
    pub exclude_output: Option<bool>,
    pub ascii: Option<bool>,
}
