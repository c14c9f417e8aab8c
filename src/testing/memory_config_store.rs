use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::ports::ConfigDocumentStore;

/// In-memory document store with switchable failures.
#[derive(Debug)]
pub struct MemoryConfigStore {
    path: PathBuf,
    contents: RefCell<Option<String>>,
    removed: RefCell<bool>,
    fail_write: bool,
    fail_remove: bool,
}

impl MemoryConfigStore {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from("/work/site/config.xml"),
            contents: RefCell::new(None),
            removed: RefCell::new(false),
            fail_write: false,
            fail_remove: false,
        }
    }

    pub fn failing_write() -> Self {
        Self { fail_write: true, ..Self::new() }
    }

    pub fn failing_remove() -> Self {
        Self { fail_remove: true, ..Self::new() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contents(&self) -> Option<String> {
        self.contents.borrow().clone()
    }

    pub fn was_removed(&self) -> bool {
        *self.removed.borrow()
    }
}

impl ConfigDocumentStore for MemoryConfigStore {
    fn write(&self, contents: &str) -> Result<PathBuf, AppError> {
        if self.fail_write {
            return Err(AppError::ConfigWrite {
                path: self.path.clone(),
                source: io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"),
            });
        }
        *self.contents.borrow_mut() = Some(contents.to_string());
        Ok(self.path.clone())
    }

    fn remove(&self, _path: &Path) -> io::Result<()> {
        if self.fail_remove {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "permission denied"));
        }
        *self.contents.borrow_mut() = None;
        *self.removed.borrow_mut() = true;
        Ok(())
    }
}
