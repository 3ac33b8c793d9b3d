//! Name-based ignore matching

use std::collections::HashSet;
use std::ffi::{OsStr, OsString};
use std::path::Path;

/// Set of base names excluded from rendering at every depth.
///
/// Matching is exact and case-sensitive on the final path component only.
/// There is no glob or path-prefix support: `"build/"` and `"*.log"` never
/// match anything.
#[derive(Debug, Clone, Default)]
pub struct IgnoreSet(HashSet<OsString>);

impl IgnoreSet {
    /// Build a set from plain names; duplicates collapse.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self(names.into_iter().map(Into::into).collect())
    }

    /// Number of distinct names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when nothing is ignored.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Check whether a bare name is in the set.
    pub fn contains(&self, name: impl AsRef<OsStr>) -> bool {
        self.0.contains(name.as_ref())
    }

    /// Check if a path should be ignored based on its base name.
    pub fn is_ignored(&self, path: &Path) -> bool {
        path.file_name().is_some_and(|name| self.contains(name))
    }
}

impl<S: Into<OsString>> FromIterator<S> for IgnoreSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}
