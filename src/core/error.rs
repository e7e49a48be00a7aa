//! Validation error type
//!
//! A single error kind covers every validation failure in this crate: the
//! caller supplied a value that does not satisfy a rule. The error carries a
//! machine-readable code, a human-readable message (possibly a comma-joined
//! concatenation of several violated rules), and optional structured context.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// Error returned when a value fails validation.
///
/// # Examples
///
/// ```rust
/// use tag_validator::core::ValidationError;
///
/// let err = ValidationError::new("dns1123_subdomain", "name must be lowercase")
///     .with_param("value", "My-Service");
///
/// assert_eq!(err.code, "dns1123_subdomain");
/// assert_eq!(err.to_string(), "name must be lowercase");
/// ```
#[derive(Debug, Clone, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ValidationError {
    /// Machine-readable error code.
    pub code: String,

    /// Human-readable error message. When several rules are violated at
    /// once this is a comma-joined concatenation of their messages.
    pub message: String,

    /// Field path where the error occurred, if known.
    pub field_path: Option<String>,

    /// Structured parameters (the offending value, limits, patterns).
    pub params: HashMap<String, serde_json::Value>,

    /// Individual violations folded into this error.
    pub nested: Vec<ValidationError>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field_path: None,
            params: HashMap::new(),
            nested: Vec::new(),
        }
    }

    /// Sets the field path.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field_path(mut self, path: impl Into<String>) -> Self {
        self.field_path = Some(path.into());
        self
    }

    /// Adds a structured parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.params.insert(key.into(), value.into());
        self
    }

    /// Attaches individual violations to this error.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_nested(mut self, nested: Vec<ValidationError>) -> Self {
        self.nested = nested;
        self
    }

    /// Folds several violations into one error, joining their messages
    /// with a comma and keeping the originals as nested errors.
    ///
    /// # Panics
    ///
    /// Panics if `errors` is empty.
    pub fn joined(code: impl Into<String>, errors: Vec<ValidationError>) -> Self {
        assert!(!errors.is_empty(), "joined() requires at least one error");
        let message = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join(",");
        Self::new(code, message).with_nested(errors)
    }
}

// ============================================================================
// TESTS
// ============================================================================
