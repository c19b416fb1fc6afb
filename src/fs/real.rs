use anyhow::{Context, Result};
use async_trait::async_trait;
use std::fs::FileType;
use std::path::Path;
use tokio::task;
use tracing::debug;

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

pub struct RealFileSystem;

#[async_trait]
impl FileSystem for RealFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let dir = dir.to_path_buf();
        task::spawn_blocking(move || {
            let mut entries = Vec::new();
            let listing = std::fs::read_dir(&dir).with_context(|| dir.display().to_string())?;
            for entry in listing {
                let entry = match entry {
                    Ok(entry) => entry,
                    Err(err) => {
                        debug!(dir = %dir.display(), %err, "skipping unreadable entry");
                        continue;
                    }
                };
                let file_type = match entry.file_type() {
                    Ok(file_type) => file_type,
                    Err(err) => {
                        debug!(path = %entry.path().display(), %err, "skipping entry without a type");
                        continue;
                    }
                };
                let path = entry.path();
                let kind = if file_type.is_symlink() {
                    // Follow the link; a dangling one is neither file nor directory.
                    std::fs::metadata(&path)
                        .map(|meta| kind_of(meta.file_type()))
                        .unwrap_or(EntryKind::Other)
                } else {
                    kind_of(file_type)
                };

                entries.push(FsEntry {
                    path,
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                });
            }
            Ok(entries)
        })
        .await?
    }
}

fn kind_of(file_type: FileType) -> EntryKind {
    if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Other
    }
}
