use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use crate::models::{EntryKind, FsEntry};

use super::FileSystem;

#[derive(Clone, Debug)]
enum Response {
    Ok(Vec<FsEntry>),
    Err(String),
    PermissionDenied,
}

#[derive(Clone, Default)]
pub struct MockFileSystem {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    responses: HashMap<PathBuf, Response>,
    calls: Vec<PathBuf>,
}

impl MockFileSystem {
    pub fn set_dir_entries(&self, dir: impl Into<PathBuf>, entries: Vec<FsEntry>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.responses.insert(dir.into(), Response::Ok(entries));
    }

    /// Script a listing from bare names; a trailing `/` marks a directory.
    pub fn set_dir(&self, dir: &str, names: &[&str]) {
        let entries = names
            .iter()
            .map(|name| {
                let (name, kind) = match name.strip_suffix('/') {
                    Some(dir_name) => (dir_name, EntryKind::Directory),
                    None => (*name, EntryKind::File),
                };
                FsEntry {
                    path: Path::new(dir).join(name),
                    name: name.to_owned(),
                    kind,
                }
            })
            .collect();
        self.set_dir_entries(dir, entries);
    }

    pub fn set_error(&self, dir: impl Into<PathBuf>, message: impl Into<String>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::Err(message.into()));
    }

    pub fn set_permission_denied(&self, dir: impl Into<PathBuf>) {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner
            .responses
            .insert(dir.into(), Response::PermissionDenied);
    }

    pub fn calls(&self) -> Vec<PathBuf> {
        let inner = self.inner.lock().expect("mock fs lock");
        inner.calls.clone()
    }
}

#[async_trait]
impl FileSystem for MockFileSystem {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>> {
        let mut inner = self.inner.lock().expect("mock fs lock");
        inner.calls.push(dir.to_path_buf());

        match inner.responses.get(dir) {
            Some(Response::Ok(entries)) => Ok(entries.clone()),
            Some(Response::Err(message)) => Err(anyhow!("{message}")),
            Some(Response::PermissionDenied) => {
                Err(io::Error::from(io::ErrorKind::PermissionDenied).into())
            }
            None => Err(anyhow!("no mock response for {}", dir.display())),
        }
    }
}
