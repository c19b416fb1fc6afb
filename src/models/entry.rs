use std::path::{Path, PathBuf};

/// Kind of a directory entry, resolved through symlinks.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EntryKind {
    Directory,
    File,
    Other,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FsEntry {
    pub path: PathBuf,
    pub name: String,
    pub kind: EntryKind,
}

impl FsEntry {
    /// `true` when the name carries a non-empty suffix after its last dot.
    /// Dotfiles like `.bashrc` and names ending in `.` have none.
    pub fn has_extension(&self) -> bool {
        Path::new(&self.name)
            .extension()
            .is_some_and(|ext| !ext.is_empty())
    }
}
