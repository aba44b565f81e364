//! # Local Filesystem Backend

use std::fs;
use std::io;
use std::path::PathBuf;

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};

/// Local filesystem storage backend
#[derive(Debug)]
pub struct LocalBackend {
    root: PathBuf,
}

impl LocalBackend {
    /// Create a new local backend
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn full_path(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

fn map_io_error(path: &str, e: io::Error) -> StorageError {
    if e.kind() == io::ErrorKind::NotFound {
        StorageError::ObjectNotFound(path.to_string())
    } else {
        StorageError::IoError(e.to_string())
    }
}

impl StorageBackend for LocalBackend {
    fn write(&self, path: &str, data: &[u8]) -> StorageResult<()> {
        let full_path = self.full_path(path);

        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).map_err(|e| StorageError::IoError(e.to_string()))?;
        }

        fs::write(&full_path, data).map_err(|e| StorageError::IoError(e.to_string()))
    }

    fn read(&self, path: &str) -> StorageResult<Vec<u8>> {
        let full_path = self.full_path(path);
        if full_path.is_dir() {
            return Err(StorageError::ObjectNotFound(path.to_string()));
        }

        fs::read(&full_path).map_err(|e| map_io_error(path, e))
    }

    fn size(&self, path: &str) -> StorageResult<u64> {
        let meta = fs::metadata(self.full_path(path)).map_err(|e| map_io_error(path, e))?;
        if !meta.is_file() {
            return Err(StorageError::ObjectNotFound(path.to_string()));
        }
        Ok(meta.len())
    }

    fn exists(&self, path: &str) -> StorageResult<bool> {
        Ok(self.full_path(path).is_file())
    }
}
