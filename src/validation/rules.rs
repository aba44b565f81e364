//! Field-presence and amount checks

use super::amount::{is_negative, parse_amount};
use super::errors::{ValidationError, ValidationResult};
use super::table::Table;

/// Column holding the transaction amount
pub const AMOUNT_FIELD: &str = "Amount";

/// Columns every sales file must contain, in reporting order
pub const REQUIRED_FIELDS: [&str; 3] = ["TransactionID", "ProductName", AMOUNT_FIELD];

/// Fail with the required columns absent from the header, in declaration order.
pub fn check_required_fields(table: &Table) -> ValidationResult<()> {
    let missing: Vec<&'static str> = REQUIRED_FIELDS
        .iter()
        .copied()
        .filter(|field| !table.has_column(field))
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

/// Every amount must be a decimal literal; none may be below zero.
///
/// Format is checked across all rows before sign, so a file with both a
/// malformed and a negative amount reports the format problem.
pub fn check_amounts(table: &Table) -> ValidationResult<()> {
    let Some(column) = table.column(AMOUNT_FIELD) else {
        return Ok(());
    };

    let amounts = column
        .map(parse_amount)
        .collect::<Option<Vec<f64>>>()
        .ok_or(ValidationError::InvalidAmountFormat)?;

    if amounts.into_iter().any(is_negative) {
        return Err(ValidationError::NegativeAmounts);
    }

    Ok(())
}
