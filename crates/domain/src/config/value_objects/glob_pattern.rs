use globset::{Glob, GlobMatcher};

/// A compiled `globset` matcher for a single pattern.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    matcher: GlobMatcher,
}

impl GlobPattern {
    pub fn new(pattern: &str) -> Result<Self, globset::Error> {
        let glob = Glob::new(pattern)?;
        Ok(Self { matcher: glob.compile_matcher() })
    }

    /// Whether `pattern` contains glob metacharacters at all.
    pub fn is_glob(pattern: &str) -> bool {
        pattern.contains(['*', '?', '[', '{'])
    }

    pub fn matches(&self, value: &str) -> bool {
        self.matcher.is_match(value)
    }
}
