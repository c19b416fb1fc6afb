use std::io;
use std::path::Path;

use tracing::debug;

use crate::fs::{FileSystem, is_permission_denied};
use crate::models::{EntryKind, RenderLine};

use super::filter::{FilterSet, IgnorePatterns};
use super::probe::has_matching_files;

/// Configuration for one tree rendering. Shared unchanged by every recursive call.
#[derive(Debug, Default)]
pub struct TreeOptions {
    /// Inclusion filters (empty shows every file)
    pub filters: FilterSet,
    /// Paths to leave out entirely, subtree included
    pub ignore: IgnorePatterns,
    /// Show directories even when nothing below them passes the filters
    pub show_empty: bool,
}

/// Walk `root` and hand each line of its tree to `emit` as soon as it is known.
///
/// Unreadable directories become `PermissionDenied` lines. Any other listing
/// failure, or a failure from `emit`, aborts the walk; lines already emitted stay emitted.
pub async fn render_tree<F, E>(
    fs: &F,
    root: &Path,
    root_name: &str,
    options: &TreeOptions,
    emit: &mut E,
) -> anyhow::Result<()>
where
    F: FileSystem,
    E: FnMut(RenderLine) -> io::Result<()>,
{
    render_dir(fs, root, root_name, options, 0, emit).await
}

async fn render_dir<F, E>(
    fs: &F,
    dir: &Path,
    name: &str,
    options: &TreeOptions,
    depth: usize,
    emit: &mut E,
) -> anyhow::Result<()>
where
    F: FileSystem,
    E: FnMut(RenderLine) -> io::Result<()>,
{
    if options.ignore.is_ignored(dir) {
        return Ok(());
    }

    let mut entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if is_permission_denied(&err) => {
            debug!(dir = %dir.display(), "permission denied");
            emit(RenderLine::permission_denied(depth))?;
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    entries.retain(|entry| !options.ignore.is_ignored(&entry.path));
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let has_content = options.show_empty
        || has_matching_files(fs, dir, &options.filters, &options.ignore).await?;
    if !has_content {
        debug!(dir = %dir.display(), "pruned directory without matches");
        return Ok(());
    }

    emit(RenderLine::directory(depth, name))?;

    for entry in entries {
        if entry.kind == EntryKind::Directory {
            Box::pin(render_dir(
                fs,
                &entry.path,
                &entry.name,
                options,
                depth + 1,
                &mut *emit,
            ))
            .await?;
        } else if options.filters.matches(&entry) {
            emit(RenderLine::file(depth + 1, entry.name))?;
        }
    }

    Ok(())
}
