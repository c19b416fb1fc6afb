use std::path::Path;

use tracing::debug;

use crate::fs::{FileSystem, is_permission_denied};
use crate::models::EntryKind;

use super::filter::{FilterSet, IgnorePatterns};

/// Whether `dir` holds at least one displayable file somewhere below it.
///
/// Stops listing as soon as one is found. A directory that cannot be listed
/// for lack of permission counts as empty; other listing failures are returned.
pub async fn has_matching_files<F: FileSystem>(
    fs: &F,
    dir: &Path,
    filters: &FilterSet,
    ignore: &IgnorePatterns,
) -> anyhow::Result<bool> {
    let entries = match fs.read_dir(dir).await {
        Ok(entries) => entries,
        Err(err) if is_permission_denied(&err) => {
            debug!(dir = %dir.display(), "probe skipped unreadable directory");
            return Ok(false);
        }
        Err(err) => return Err(err),
    };

    for entry in entries {
        if ignore.is_ignored(&entry.path) {
            continue;
        }

        match entry.kind {
            EntryKind::File if filters.matches(&entry) => return Ok(true),
            EntryKind::Directory => {
                if Box::pin(has_matching_files(fs, &entry.path, filters, ignore)).await? {
                    return Ok(true);
                }
            }
            _ => {}
        }
    }

    Ok(false)
}
