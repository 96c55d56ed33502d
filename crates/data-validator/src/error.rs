//! Validation Error Types

use thiserror::Error;

/// Errors during record validation and filtering
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Text is not a dd/mm/yyyy calendar date
    #[error("Invalid date: {0:?}")]
    InvalidDate(String),

    /// Field value cannot be read as the expected format
    #[error("Invalid {field} format: {value:?}")]
    InvalidFormat { field: &'static str, value: String },
}
