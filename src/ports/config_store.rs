use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;

/// Port for the short-lived setup configuration document.
pub trait ConfigDocumentStore {
    /// Write the complete document and return where it was written.
    fn write(&self, contents: &str) -> Result<PathBuf, AppError>;

    /// Remove a previously written document.
    fn remove(&self, path: &Path) -> io::Result<()>;
}
