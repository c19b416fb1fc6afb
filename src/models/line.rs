#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum LineKind {
    Directory,
    File,
    PermissionDenied,
}

/// One line of tree output, before it is turned into text.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RenderLine {
    pub depth: usize,
    pub kind: LineKind,
    /// Empty for `PermissionDenied` lines.
    pub name: String,
}

impl RenderLine {
    pub fn directory(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: LineKind::Directory,
            name: name.into(),
        }
    }

    pub fn file(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            kind: LineKind::File,
            name: name.into(),
        }
    }

    pub fn permission_denied(depth: usize) -> Self {
        Self {
            depth,
            kind: LineKind::PermissionDenied,
            name: String::new(),
        }
    }
}
