//! # File Storage Errors

use thiserror::Error;

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// File storage errors
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    // Object errors
    #[error("Object not found: {0}")]
    ObjectNotFound(String),

    // Validation errors
    #[error("File too large: {0} bytes (max: {1})")]
    FileTooLarge(u64, u64),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    // I/O errors
    #[error("I/O error: {0}")]
    IoError(String),
}

impl StorageError {
    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            StorageError::ObjectNotFound(_) => 404,
            StorageError::FileTooLarge(_, _) => 413,
            StorageError::InvalidPath(_) => 400,
            StorageError::IoError(_) => 500,
        }
    }
}
