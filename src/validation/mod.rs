//! # Sales Data Validation
//!
//! Validates an uploaded sales file in one linear pass:
//!
//! 1. Decode bytes as UTF-8
//! 2. Parse comma-separated text into a [`Table`]
//! 3. Check the required columns are present
//! 4. Check every `Amount` is numeric and none is negative
//!
//! Each step stops the run on failure. [`validate`] is pure and reentrant;
//! concurrent calls share nothing.

pub mod amount;
pub mod errors;
pub mod rules;
pub mod table;
pub mod verdict;

pub use errors::{ValidationError, ValidationResult};
pub use rules::{check_amounts, check_required_fields, AMOUNT_FIELD, REQUIRED_FIELDS};
pub use table::{decode, parse, Table};
pub use verdict::{ReasonCode, ValidationResponse, ValidationVerdict};

/// Validate raw file content and return the verdict.
pub fn validate(raw: &[u8]) -> ValidationVerdict {
    match run(raw) {
        Ok(record_count) => ValidationVerdict::Passed { record_count },
        Err(e) => ValidationVerdict::failed(&e),
    }
}

fn run(raw: &[u8]) -> ValidationResult<usize> {
    let text = decode(raw)?;
    let table = parse(text)?;

    check_required_fields(&table)?;
    check_amounts(&table)?;

    Ok(table.record_count())
}
