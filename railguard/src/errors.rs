//! Error types for the railguard crate.
//!
//! Validators themselves never error: a rule violation is reported through
//! the fail outcome. These types cover the surfaces around the rules — the
//! guard harness raising on the exception policy, registry lookup and
//! configuration, and output parsing.

use thiserror::Error;

/// The main error type for guard and registry operations.
#[derive(Debug, Error)]
pub enum GuardError {
    /// A field failed validation under the exception policy.
    #[error("{0}")]
    Validation(#[from] ValidationFailedError),

    /// No validator is registered under the requested name.
    #[error("No validator registered under name '{name}'")]
    UnknownValidator {
        /// The requested rule name.
        name: String,
    },

    /// A validator factory rejected its configuration arguments.
    #[error("Invalid configuration for validator '{name}': {reason}")]
    InvalidConfig {
        /// The rule name.
        name: String,
        /// The reason the configuration was rejected.
        reason: String,
    },

    /// An `on_fail` selector did not match any known policy.
    #[error("Unknown on_fail policy: '{0}'")]
    UnknownPolicy(String),

    /// The raw output could not be parsed as JSON.
    #[error("Output parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// A bound field was missing from the output.
    #[error("Field '{field}' missing from output")]
    MissingField {
        /// The missing field name.
        field: String,
    },
}

impl GuardError {
    /// Creates an unknown validator error.
    #[must_use]
    pub fn unknown_validator(name: impl Into<String>) -> Self {
        Self::UnknownValidator { name: name.into() }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Creates a missing field error.
    #[must_use]
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingField {
            field: field.into(),
        }
    }
}

/// Error raised by the guard harness when a field fails validation under the
/// exception policy.
///
/// Carries the failing field, the validator's error message, and the optional
/// corrected value so an enforcement layer above can still choose to apply
/// the fix.
#[derive(Debug, Clone, Error)]
#[error("Validation failed for field '{field}': {message}")]
pub struct ValidationFailedError {
    /// The field that failed.
    pub field: String,
    /// The validator's error message.
    pub message: String,
    /// Corrected value, when the rule could compute one.
    pub fix_value: Option<serde_json::Value>,
}

impl ValidationFailedError {
    /// Creates a new validation failure.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            fix_value: None,
        }
    }

    /// Attaches the corrected value.
    #[must_use]
    pub fn with_fix_value(mut self, fix_value: serde_json::Value) -> Self {
        self.fix_value = Some(fix_value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_failed_display() {
        let err = ValidationFailedError::new("text", "xyzdb must end with a");
        assert!(err.to_string().contains("text"));
        assert!(err.to_string().contains("xyzdb must end with a"));
    }

    #[test]
    fn test_validation_failed_with_fix() {
        let err = ValidationFailedError::new("text", "message")
            .with_fix_value(serde_json::json!("xyzdba"));
        assert_eq!(err.fix_value, Some(serde_json::json!("xyzdba")));
    }

    #[test]
    fn test_unknown_validator_display() {
        let err = GuardError::unknown_validator("no-such-rule");
        assert!(err.to_string().contains("no-such-rule"));
    }

    #[test]
    fn test_invalid_config_display() {
        let err = GuardError::invalid_config("ends-with", "missing required argument 'end'");
        assert!(err.to_string().contains("ends-with"));
        assert!(err.to_string().contains("missing required argument 'end'"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = GuardError::missing_field("summary");
        assert_eq!(err.to_string(), "Field 'summary' missing from output");
    }

    #[test]
    fn test_validation_error_wraps() {
        let err: GuardError = ValidationFailedError::new("text", "bad").into();
        assert!(matches!(err, GuardError::Validation(_)));
    }
}
