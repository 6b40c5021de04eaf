//! Core error types for hireform.
//!
//! Two kinds of failure exist. A [`ValidationError`] is ordinary data: the
//! message a field displays when one of its validators rejects the current
//! value. A [`FormError`] is a real Rust error raised when the caller drives
//! the form incorrectly (an unknown field, a value of the wrong shape) or
//! when settings cannot be loaded.

use std::collections::HashMap;
use std::fmt;

use thiserror::Error;

/// A single field validation failure.
///
/// # Examples
///
/// ```
/// use hireform_core::error::ValidationError;
///
/// let err = ValidationError::new("Full Name is required", "required");
/// assert_eq!(err.to_string(), "Full Name is required");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The message shown below the offending input.
    pub message: String,
    /// A short code identifying the rule that failed (e.g. "required", "pattern").
    pub code: String,
    /// Additional parameters describing the failure.
    pub params: HashMap<String, String>,
}

impl ValidationError {
    /// Creates a new `ValidationError` with a message and code.
    pub fn new(message: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: code.into(),
            params: HashMap::new(),
        }
    }

    /// Adds a parameter to this validation error.
    #[must_use]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ValidationError {}

/// The error type for misuse of the form API and for configuration failures.
#[derive(Error, Debug)]
pub enum FormError {
    // ── Event errors ─────────────────────────────────────────────────

    /// An event or lookup named a field the registry does not declare.
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// A selection named an option outside the field's declared choices.
    #[error("Invalid choice '{option}' for field {field}")]
    InvalidChoice {
        /// The field receiving the selection.
        field: String,
        /// The rejected option.
        option: String,
    },

    /// A value's shape does not fit the field's input kind.
    #[error("Type mismatch for field {field}: expected {expected}")]
    TypeMismatch {
        /// The field receiving the value.
        field: String,
        /// A description of the accepted shape.
        expected: &'static str,
    },

    // ── Configuration ────────────────────────────────────────────────

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    // ── Serialization ────────────────────────────────────────────────

    /// An error occurred while serializing a submitted record.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    // ── IO ───────────────────────────────────────────────────────────

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience type alias for `Result<T, FormError>`.
pub type FormResult<T> = Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new("Invalid email format", "pattern");
        assert_eq!(err.to_string(), "Invalid email format");
        assert_eq!(err.code, "pattern");
    }

    #[test]
    fn test_validation_error_with_param() {
        let err = ValidationError::new("Experience must be greater than 0", "min")
            .with_param("min", "1");
        assert_eq!(err.params.get("min").unwrap(), "1");
    }

    #[test]
    fn test_form_error_display() {
        assert_eq!(
            FormError::UnknownField("nickname".into()).to_string(),
            "Unknown field: nickname"
        );
        let err = FormError::InvalidChoice {
            field: "skills".into(),
            option: "Rust".into(),
        };
        assert_eq!(err.to_string(), "Invalid choice 'Rust' for field skills");
        let err = FormError::TypeMismatch {
            field: "skills".into(),
            expected: "a checkbox toggle",
        };
        assert!(err.to_string().contains("expected a checkbox toggle"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let form_err: FormError = io_err.into();
        assert!(form_err.to_string().contains("file missing"));
    }
}
