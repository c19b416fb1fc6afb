mod real;

#[cfg(test)]
mod mock;

pub use real::RealFileSystem;

#[cfg(test)]
pub use mock::MockFileSystem;

use anyhow::Result;
use async_trait::async_trait;
use std::io;
use std::path::Path;

use crate::models::FsEntry;

#[async_trait]
pub trait FileSystem: Send + Sync {
    async fn read_dir(&self, dir: &Path) -> Result<Vec<FsEntry>>;
}

/// Whether a listing failed because of an access restriction.
pub fn is_permission_denied(err: &anyhow::Error) -> bool {
    err.chain()
        .filter_map(|cause| cause.downcast_ref::<io::Error>())
        .any(|io_err| io_err.kind() == io::ErrorKind::PermissionDenied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};

    #[test]
    fn permission_denied_is_found_through_context() {
        let err = Err::<(), _>(io::Error::from(io::ErrorKind::PermissionDenied))
            .context("reading /secret")
            .unwrap_err();
        assert!(is_permission_denied(&err));
    }

    #[test]
    fn other_errors_are_not_permission_denied() {
        let err = anyhow::Error::from(io::Error::from(io::ErrorKind::NotFound));
        assert!(!is_permission_denied(&err));
        assert!(!is_permission_denied(&anyhow!("Permission denied")));
    }
}
