use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::AppError;
use crate::ports::ConfigDocumentStore;

/// Writes the setup document to a fixed target path.
///
/// The document is written to a private temp file beside the target and then
/// renamed into place, so it is never observed half-written.
#[derive(Debug, Clone)]
pub struct FilesystemConfigStore {
    target: PathBuf,
}

impl FilesystemConfigStore {
    pub fn new(target: PathBuf) -> Self {
        Self { target }
    }

    fn write_atomically(&self, contents: &str, target: &Path) -> io::Result<()> {
        let dir = target.parent().unwrap_or(Path::new("."));
        let mut file = NamedTempFile::new_in(dir)?;
        file.write_all(contents.as_bytes())?;
        file.as_file().sync_all()?;
        file.persist(target).map_err(|err| err.error)?;
        Ok(())
    }
}

impl ConfigDocumentStore for FilesystemConfigStore {
    fn write(&self, contents: &str) -> Result<PathBuf, AppError> {
        let target = self.target.clone();
        self.write_atomically(contents, &target)
            .map_err(|source| AppError::ConfigWrite { path: target.clone(), source })?;
        debug!(path = %target.display(), bytes = contents.len(), "setup config written");
        Ok(target)
    }

    fn remove(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}
