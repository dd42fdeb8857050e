//! # Error Types
//!
//! Structured error types for beam_core. These only cover problems at the
//! boundary of the library (material tables, search configuration, result
//! files). Inside the beam model an uncomputable quantity is `None`, never an
//! error.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_step(step_m: f64) -> CalcResult<()> {
//!     if step_m <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "step".to_string(),
//!             value: step_m.to_string(),
//!             reason: "Step must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for configuration and I/O failures.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-positive, not finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A value in a material table could not be parsed
    #[error("Parse error in '{source_name}' line {line}: {reason}")]
    ParseError {
        source_name: String,
        line: usize,
        reason: String,
    },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a ParseError
    pub fn parse_error(source_name: impl Into<String>, line: usize, reason: impl Into<String>) -> Self {
        CalcError::ParseError {
            source_name: source_name.into(),
            line,
            reason: reason.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::ParseError { .. } => "PARSE_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(e: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: e.to_string(),
        }
    }
}

/// Reject a value that is not a positive, finite number.
///
/// Shared by the material and search configuration validators.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be finite"));
    }
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be positive"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("step", "-0.001", "Value must be positive");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"type\":\"InvalidInput\""));
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("name").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::parse_error("table.csv", 3, "bad").error_code(), "PARSE_ERROR");
        assert_eq!(CalcError::file_error("open", "x", "y").error_code(), "FILE_ERROR");
    }

    #[test]
    fn test_parse_error_display_includes_line() {
        let error = CalcError::parse_error("materials.csv", 4, "density is not a number");
        assert_eq!(
            error.to_string(),
            "Parse error in 'materials.csv' line 4: density is not a number"
        );
    }

    #[test]
    fn test_require_positive() {
        assert!(require_positive("load", 1.0).is_ok());
        assert!(require_positive("load", 0.0).is_err());
        assert!(require_positive("load", -2.0).is_err());
        assert!(require_positive("load", f64::NAN).is_err());
        assert!(require_positive("load", f64::INFINITY).is_err());
    }
}
