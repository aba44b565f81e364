//! # Validation Errors

use thiserror::Error;

use super::verdict::ReasonCode;

/// Result type for validation steps
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Reasons a sales file is rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    // Input errors
    #[error("Input is not valid UTF-8: {0}")]
    Decode(String),

    #[error("{0}")]
    Parse(String),

    // Data-quality errors
    #[error("Missing fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid amount format")]
    InvalidAmountFormat,

    #[error("Negative amounts found")]
    NegativeAmounts,

    // Internal
    #[error("{0}")]
    Unexpected(String),
}

impl ValidationError {
    /// Reason code reported on the failed verdict
    pub fn reason(&self) -> ReasonCode {
        match self {
            ValidationError::Decode(_) => ReasonCode::DecodeError,
            ValidationError::Parse(_) => ReasonCode::ParseError,
            ValidationError::MissingFields(_) => ReasonCode::MissingFields,
            ValidationError::InvalidAmountFormat => ReasonCode::InvalidAmountFormat,
            ValidationError::NegativeAmounts => ReasonCode::NegativeAmounts,
            ValidationError::Unexpected(_) => ReasonCode::UnexpectedError,
        }
    }
}

impl From<csv::Error> for ValidationError {
    // The reader runs flexible over already-decoded text, so field counts
    // and UTF-8 are checked before this point. What remains is reader I/O.
    fn from(e: csv::Error) -> Self {
        ValidationError::Unexpected(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message() {
        let err = ValidationError::MissingFields(vec!["TransactionID", "Amount"]);
        assert_eq!(err.to_string(), "Missing fields: TransactionID, Amount");
    }

    #[test]
    fn test_fixed_messages() {
        assert_eq!(
            ValidationError::InvalidAmountFormat.to_string(),
            "Invalid amount format"
        );
        assert_eq!(
            ValidationError::NegativeAmounts.to_string(),
            "Negative amounts found"
        );
    }

    #[test]
    fn test_reason_codes() {
        assert_eq!(
            ValidationError::Decode("bad".into()).reason(),
            ReasonCode::DecodeError
        );
        assert_eq!(
            ValidationError::Unexpected("boom".into()).reason(),
            ReasonCode::UnexpectedError
        );
        assert_eq!(
            ValidationError::MissingFields(vec!["Amount"]).reason(),
            ReasonCode::MissingFields
        );
    }

    #[test]
    fn test_reader_failure_is_unexpected() {
        let io = std::io::Error::new(std::io::ErrorKind::UnexpectedEof, "stream closed");
        let err = ValidationError::from(csv::Error::from(io));

        assert_eq!(err.reason(), ReasonCode::UnexpectedError);
        assert!(err.to_string().contains("stream closed"), "got: {}", err);
    }
}
