//! # Error Types
//!
//! Structured error types for section_core. The engine itself never fails
//! (bad input degrades to an all-zero result), but the validation step behind
//! it, shape lookup, and export all report *why* something was rejected.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{CalcError, CalcResult};
//!
//! fn validate_radius(r: f64) -> CalcResult<()> {
//!     if r <= 0.0 {
//!         return Err(CalcError::invalid_input("r", r.to_string(), "must be greater than zero"));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_radius(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for section property operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// A dimension is present but unusable (zero, negative, not a number)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A dimension required by the shape's schema was not supplied
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Shape key did not match any known section shape
    #[error("Unknown section shape: '{name}'")]
    UnknownShape { name: String },

    /// Symbol is not part of the selected shape's parameter schema
    #[error("'{symbol}' is not a parameter of {shape}")]
    UnknownParameter { shape: String, symbol: String },

    /// All dimensions are valid individually but do not form a section
    #[error("Invalid geometry for {shape}: {reason}")]
    InvalidGeometry { shape: String, reason: String },

    /// Export requested with no saved results
    #[error("Nothing to export: no results have been saved")]
    NothingToExport,

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// CSV/JSON serialization error
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

    /// Create an UnknownShape error
    pub fn unknown_shape(name: impl Into<String>) -> Self {
        CalcError::UnknownShape { name: name.into() }
    }

    /// Create an UnknownParameter error
    pub fn unknown_parameter(shape: impl Into<String>, symbol: impl Into<String>) -> Self {
        CalcError::UnknownParameter {
            shape: shape.into(),
            symbol: symbol.into(),
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidGeometry {
            shape: shape.into(),
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

    /// True for errors caused by what the user typed (a shape key, a
    /// parameter symbol or a dimension), which are fixed by editing the
    /// input rather than by retrying.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            CalcError::InvalidInput { .. }
                | CalcError::MissingField { .. }
                | CalcError::UnknownShape { .. }
                | CalcError::UnknownParameter { .. }
                | CalcError::InvalidGeometry { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownShape { .. } => "UNKNOWN_SHAPE",
            CalcError::UnknownParameter { .. } => "UNKNOWN_PARAMETER",
            CalcError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            CalcError::NothingToExport => "NOTHING_TO_EXPORT",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<csv::Error> for CalcError {
    fn from(err: csv::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("r_o", "-5", "must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
        assert!(json.contains("\"type\":\"InvalidInput\""));
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::missing_field("r").error_code(), "MISSING_FIELD");
        assert_eq!(CalcError::unknown_shape("hexagon").error_code(), "UNKNOWN_SHAPE");
        assert_eq!(CalcError::NothingToExport.error_code(), "NOTHING_TO_EXPORT");
    }

    #[test]
    fn test_input_errors_classified() {
        assert!(CalcError::missing_field("b").is_input_error());
        assert!(CalcError::invalid_geometry("Solid Square", "x").is_input_error());
        assert!(CalcError::unknown_shape("x").is_input_error());
        assert!(CalcError::unknown_parameter("Solid Circle", "r_o").is_input_error());
        assert!(!CalcError::NothingToExport.is_input_error());
        assert!(!CalcError::file_error("write", "/tmp/x.csv", "denied").is_input_error());
    }

    #[test]
    fn test_display_message() {
        let err = CalcError::unknown_parameter("Solid Circle", "r_o");
        assert_eq!(err.to_string(), "'r_o' is not a parameter of Solid Circle");
    }
}
