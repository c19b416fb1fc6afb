pub mod cli;
pub mod core;
pub mod fs;
pub mod models;

use std::path::{Component, Path};

/// Name shown on the root line: the final path component, or the path itself
/// when it has none (`.`, `./`, `/`).
pub fn root_display_name(root_path: &Path) -> String {
    if root_path
        .components()
        .all(|component| matches!(component, Component::CurDir))
    {
        return ".".to_owned();
    }

    root_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| root_path.as_os_str().to_string_lossy().into_owned())
}
