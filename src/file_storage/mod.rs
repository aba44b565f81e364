//! # File Storage Module
//!
//! Blob retrieval for uploaded sales files. A `StorageBackend` holds raw
//! objects; `SalesFileStore` scopes reads to one container and enforces
//! name and size limits.

pub mod backend;
pub mod errors;
pub mod local;
pub mod store;

pub use backend::StorageBackend;
pub use errors::{StorageError, StorageResult};
pub use local::LocalBackend;
pub use store::{validate_file_name, SalesFileStore, DEFAULT_CONTAINER};
