//! sales-validator - HTTP-triggered validation of uploaded sales CSV files
//!
//! The core is [`validation::validate`], a pure function from file bytes to a
//! [`validation::ValidationVerdict`]. The remaining modules carry it to the
//! outside world: blob retrieval, the HTTP surface, logging and the CLI.

pub mod cli;
pub mod file_storage;
pub mod http_server;
pub mod observability;
pub mod validation;

pub use validation::{validate, ReasonCode, ValidationVerdict};
