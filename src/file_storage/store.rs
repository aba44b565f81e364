//! # Sales File Store
//!
//! Container-scoped reader for uploaded sales files. Objects live at
//! `{container}/{file_name}` in the backend.

use super::backend::StorageBackend;
use super::errors::{StorageError, StorageResult};

/// Default container for uploaded sales files
pub const DEFAULT_CONTAINER: &str = "sales-files";

/// Reads sales files from a single container
#[derive(Debug)]
pub struct SalesFileStore<B: StorageBackend> {
    backend: B,
    container: String,
    max_file_size: u64,
}

impl<B: StorageBackend> SalesFileStore<B> {
    /// Create a store over `container` in `backend`
    pub fn new(backend: B, container: impl Into<String>, max_file_size: u64) -> Self {
        Self {
            backend,
            container: container.into(),
            max_file_size,
        }
    }

    pub fn max_file_size(&self) -> u64 {
        self.max_file_size
    }

    fn object_path(&self, file_name: &str) -> StorageResult<String> {
        validate_file_name(file_name)?;
        Ok(format!("{}/{}", self.container, file_name))
    }

    /// Fetch the full content of a sales file
    pub fn fetch(&self, file_name: &str) -> StorageResult<Vec<u8>> {
        let path = self.object_path(file_name)?;

        let size = self.backend.size(&path)?;
        if size > self.max_file_size {
            return Err(StorageError::FileTooLarge(size, self.max_file_size));
        }

        self.backend.read(&path)
    }

    /// Store a sales file, replacing any existing one
    pub fn put(&self, file_name: &str, data: &[u8]) -> StorageResult<()> {
        let path = self.object_path(file_name)?;

        let size = data.len() as u64;
        if size > self.max_file_size {
            return Err(StorageError::FileTooLarge(size, self.max_file_size));
        }

        self.backend.write(&path, data)
    }
}

/// Reject names that could escape the container.
///
/// Nested names (`2024/q1.csv`) are allowed; empty segments, `.`/`..`,
/// absolute paths and backslashes are not.
pub fn validate_file_name(file_name: &str) -> StorageResult<()> {
    let invalid = || StorageError::InvalidPath(file_name.to_string());

    if file_name.is_empty() || file_name.starts_with('/') || file_name.contains('\\') {
        return Err(invalid());
    }
    if file_name.contains('\0') {
        return Err(invalid());
    }
    if file_name
        .split('/')
        .any(|segment| segment.is_empty() || segment == "." || segment == "..")
    {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_storage::local::LocalBackend;
    use tempfile::TempDir;

    fn store(temp: &TempDir, max: u64) -> SalesFileStore<LocalBackend> {
        SalesFileStore::new(LocalBackend::new(temp.path().to_path_buf()), DEFAULT_CONTAINER, max)
    }

    #[test]
    fn test_put_fetch() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp, 1024);

        store.put("jan.csv", b"Amount\n1\n").unwrap();
        assert_eq!(store.fetch("jan.csv").unwrap(), b"Amount\n1\n");
        assert!(temp.path().join("sales-files").join("jan.csv").is_file());
    }

    #[test]
    fn test_fetch_missing() {
        let temp = TempDir::new().unwrap();
        let store = store(&temp, 1024);

        assert!(matches!(
            store.fetch("missing.csv"),
            Err(StorageError::ObjectNotFound(_))
        ));
    }

    #[test]
    fn test_fetch_too_large() {
        let temp = TempDir::new().unwrap();
        let backend = LocalBackend::new(temp.path().to_path_buf());
        backend.write("sales-files/big.csv", &[b'1'; 64]).unwrap();
        let store = SalesFileStore::new(backend, DEFAULT_CONTAINER, 16);

        assert!(matches!(
            store.fetch("big.csv"),
            Err(StorageError::FileTooLarge(64, 16))
        ));
    }

    #[test]
    fn test_rejects_escaping_names() {
        for name in ["", "/etc/passwd", "../secret.csv", "a/../../b", "a//b", "a\\b", "./a"] {
            assert!(
                matches!(validate_file_name(name), Err(StorageError::InvalidPath(_))),
                "expected {:?} to be rejected",
                name
            );
        }
    }

    #[test]
    fn test_allows_nested_names() {
        assert!(validate_file_name("2024/q1/sales.csv").is_ok());
        assert!(validate_file_name("sales file.csv").is_ok());
    }
}
