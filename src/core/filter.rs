//! Inclusion filters and ignore rules applied during the walk.

use std::path::{Component, Path, PathBuf};

use crate::models::FsEntry;

use super::pattern::CompiledPatterns;

/// Filter pattern that selects files without an extension.
pub const NO_EXTENSION: &str = "_";

/// Inclusion filter set. Empty means every file is shown.
#[derive(Debug)]
pub struct FilterSet {
    is_empty: bool,
    /// `*` or `_` was given, so extension-less files qualify.
    includes_bare: bool,
    patterns: CompiledPatterns,
}

impl FilterSet {
    pub fn new<S: AsRef<str>>(filters: &[S]) -> Self {
        let includes_bare = filters
            .iter()
            .any(|f| matches!(f.as_ref(), "*" | NO_EXTENSION));
        let patterns: Vec<&str> = filters
            .iter()
            .map(|f| f.as_ref())
            .filter(|f| *f != NO_EXTENSION)
            .collect();

        Self {
            is_empty: filters.is_empty(),
            includes_bare,
            patterns: CompiledPatterns::new(&patterns),
        }
    }

    /// Whether a file entry should be displayed.
    pub fn matches(&self, entry: &FsEntry) -> bool {
        if self.is_empty {
            return true;
        }

        if !entry.has_extension() {
            return self.includes_bare;
        }

        self.patterns.matches(&entry.name)
    }
}

impl Default for FilterSet {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

/// Ignore rules, checked against both the full path and the bare name.
#[derive(Debug)]
pub struct IgnorePatterns(CompiledPatterns);

impl IgnorePatterns {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self(CompiledPatterns::new(patterns))
    }

    pub fn is_ignored(&self, path: &Path) -> bool {
        if self.0.is_empty() {
            return false;
        }

        let path_str = normalized_path(path);
        if self.0.matches(&path_str.to_string_lossy()) {
            return true;
        }

        path.file_name()
            .is_some_and(|name| self.0.matches(&name.to_string_lossy()))
    }
}

impl Default for IgnorePatterns {
    fn default() -> Self {
        Self::new::<&str>(&[])
    }
}

/// Drop `.` components so `./src/lib` is matched as `src/lib`.
fn normalized_path(path: &Path) -> PathBuf {
    let normalized: PathBuf = path
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect();
    if normalized.as_os_str().is_empty() {
        PathBuf::from(".")
    } else {
        normalized
    }
}
