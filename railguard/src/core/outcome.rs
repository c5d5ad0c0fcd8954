//! Validation outcome type with factory methods.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The result classification of a validation call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationStatus {
    /// The value satisfied the rule.
    Pass,
    /// The value violated the rule.
    Fail,
}

impl fmt::Display for ValidationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "pass"),
            Self::Fail => write!(f, "fail"),
        }
    }
}

/// The outcome of one validation call.
///
/// `ValidationOutcome` is immutable once created and provides factory
/// methods for the pass and fail cases. A fail outcome carries a
/// human-readable error message and, when a correction exists, a fix value
/// the caller can substitute to make the check pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    /// The status of the validation.
    pub status: ValidationStatus,

    /// Error message (for failed validations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,

    /// Corrected value the caller could substitute (for failed validations).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fix_value: Option<serde_json::Value>,

    /// Additional metadata.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub metadata: HashMap<String, serde_json::Value>,
}

impl ValidationOutcome {
    /// Creates a passing outcome.
    #[must_use]
    pub fn pass() -> Self {
        Self {
            status: ValidationStatus::Pass,
            error_message: None,
            fix_value: None,
            metadata: HashMap::new(),
        }
    }

    /// Creates a failing outcome with an error message.
    #[must_use]
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: ValidationStatus::Fail,
            error_message: Some(message.into()),
            fix_value: None,
            metadata: HashMap::new(),
        }
    }

    /// Creates a failing outcome carrying a corrected value.
    #[must_use]
    pub fn fail_with_fix(message: impl Into<String>, fix_value: serde_json::Value) -> Self {
        Self {
            status: ValidationStatus::Fail,
            error_message: Some(message.into()),
            fix_value: Some(fix_value),
            metadata: HashMap::new(),
        }
    }

    /// Adds metadata to the outcome.
    #[must_use]
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata.extend(metadata);
        self
    }

    /// Adds a single metadata entry.
    #[must_use]
    pub fn add_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Returns true if the outcome is a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        matches!(self.status, ValidationStatus::Pass)
    }

    /// Returns true if the outcome is a fail.
    #[must_use]
    pub fn is_fail(&self) -> bool {
        matches!(self.status, ValidationStatus::Fail)
    }

    /// Converts the outcome to a dictionary representation.
    #[must_use]
    pub fn to_dict(&self) -> HashMap<String, serde_json::Value> {
        let mut map = HashMap::new();
        map.insert(
            "status".to_string(),
            serde_json::json!(self.status.to_string()),
        );

        if let Some(ref message) = self.error_message {
            map.insert("error_message".to_string(), serde_json::json!(message));
        }

        if let Some(ref fix) = self.fix_value {
            map.insert("fix_value".to_string(), fix.clone());
        }

        if !self.metadata.is_empty() {
            let meta_map: serde_json::Map<String, serde_json::Value> =
                self.metadata.clone().into_iter().collect();
            map.insert("metadata".to_string(), serde_json::Value::Object(meta_map));
        }

        map
    }
}
