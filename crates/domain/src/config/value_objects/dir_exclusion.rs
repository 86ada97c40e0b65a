use std::collections::BTreeSet;

use collect_files_shared_kernel::{DomainError, DomainResult};

use super::GlobPattern;

/// Directory names that the collector never descends into.
///
/// Plain entries match a directory name literally and case-sensitively. Entries containing
/// glob metacharacters are compiled and matched against the directory name only, never
/// against the full path.
#[derive(Debug, Clone, Default)]
pub struct DirExclusion {
    names: BTreeSet<String>,
    globs: Vec<GlobPattern>,
}

impl DirExclusion {
    pub fn new<I, S>(entries: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names = BTreeSet::new();
        let mut globs = Vec::new();
        for entry in entries {
            let entry = entry.as_ref();
            if entry.is_empty() {
                return Err(DomainError::InvalidConfiguration {
                    reason: "excluded directory names must not be empty".into(),
                });
            }
            if GlobPattern::is_glob(entry) {
                let glob = GlobPattern::new(entry).map_err(|err| DomainError::InvalidPattern {
                    pattern: entry.to_string(),
                    details: err.to_string(),
                    source: Some(Box::new(err)),
                })?;
                globs.push(glob);
            } else {
                names.insert(entry.to_string());
            }
        }
        Ok(Self { names, globs })
    }

    pub fn is_excluded(&self, dir_name: &str) -> bool {
        self.names.contains(dir_name) || self.globs.iter().any(|glob| glob.matches(dir_name))
    }
}
