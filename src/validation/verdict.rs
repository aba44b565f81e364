//! Validation verdict and its JSON response form

use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// `validationResult` value for a passing file
pub const RESULT_PASSED: &str = "Validation Passed";

/// `validationResult` value for any failure
pub const RESULT_INVALID: &str = "Invalid Data";

/// Failure category attached to a failed verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReasonCode {
    DecodeError,
    ParseError,
    MissingFields,
    InvalidAmountFormat,
    NegativeAmounts,
    UnexpectedError,
}

impl ReasonCode {
    /// Returns the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::DecodeError => "DECODE_ERROR",
            ReasonCode::ParseError => "PARSE_ERROR",
            ReasonCode::MissingFields => "MISSING_FIELDS",
            ReasonCode::InvalidAmountFormat => "INVALID_AMOUNT_FORMAT",
            ReasonCode::NegativeAmounts => "NEGATIVE_AMOUNTS",
            ReasonCode::UnexpectedError => "UNEXPECTED_ERROR",
        }
    }

    /// Get HTTP status code
    ///
    /// Rule failures on a readable table are client errors. Input that cannot
    /// be read as a table is a server error.
    pub fn status_code(&self) -> u16 {
        match self {
            ReasonCode::MissingFields => 400,
            ReasonCode::InvalidAmountFormat => 400,
            ReasonCode::NegativeAmounts => 400,
            ReasonCode::DecodeError => 500,
            ReasonCode::ParseError => 500,
            ReasonCode::UnexpectedError => 500,
        }
    }

    /// Whether resubmitting corrected data could change the outcome
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status_code())
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single validation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationVerdict {
    Passed { record_count: usize },
    Failed { reason: ReasonCode, message: String },
}

impl ValidationVerdict {
    /// Build a failed verdict from a validation error
    pub fn failed(err: &ValidationError) -> Self {
        ValidationVerdict::Failed {
            reason: err.reason(),
            message: err.to_string(),
        }
    }

    pub fn is_passed(&self) -> bool {
        matches!(self, ValidationVerdict::Passed { .. })
    }

    pub fn reason(&self) -> Option<ReasonCode> {
        match self {
            ValidationVerdict::Passed { .. } => None,
            ValidationVerdict::Failed { reason, .. } => Some(*reason),
        }
    }

    /// Human-readable message
    pub fn message(&self) -> String {
        match self {
            ValidationVerdict::Passed { record_count } => {
                format!("Validated {} records", record_count)
            }
            ValidationVerdict::Failed { message, .. } => message.clone(),
        }
    }

    /// Get HTTP status code
    pub fn status_code(&self) -> u16 {
        match self {
            ValidationVerdict::Passed { .. } => 200,
            ValidationVerdict::Failed { reason, .. } => reason.status_code(),
        }
    }

    /// Serializable response body
    pub fn to_response(&self) -> ValidationResponse {
        let validation_result = if self.is_passed() {
            RESULT_PASSED
        } else {
            RESULT_INVALID
        };

        ValidationResponse {
            validation_result: validation_result.to_string(),
            message: self.message(),
        }
    }
}

/// Wire form of a verdict
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResponse {
    #[serde(rename = "validationResult")]
    pub validation_result: String,
    pub message: String,
}

impl ValidationResponse {
    /// Failure body for errors raised outside the validator (storage, requests)
    pub fn invalid(message: impl Into<String>) -> Self {
        Self {
            validation_result: RESULT_INVALID.to_string(),
            message: message.into(),
        }
    }
}
