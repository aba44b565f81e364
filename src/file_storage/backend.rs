//! # Storage Backend Trait

use super::errors::StorageResult;

/// Backend trait for blob storage
pub trait StorageBackend: Send + Sync + std::fmt::Debug {
    /// Write data to path
    fn write(&self, path: &str, data: &[u8]) -> StorageResult<()>;

    /// Read data from path
    fn read(&self, path: &str) -> StorageResult<Vec<u8>>;

    /// Size in bytes of the object at path
    fn size(&self, path: &str) -> StorageResult<u64>;

    /// Check if path exists
    fn exists(&self, path: &str) -> StorageResult<bool>;
}
