//! Validates that a string or list ends with a given value.

use super::{Metadata, Validator};
use crate::core::{append_trailing, display_value, DataType, ValidationOutcome};
use crate::errors::GuardError;
use crate::policy::OnFail;
use crate::registry::ValidatorSpec;
use tracing::debug;

/// Validates that a value ends with a given suffix.
///
/// | Property            | Description                       |
/// | ------------------- | --------------------------------- |
/// | Registered name     | `ends-with`                       |
/// | Supported data types| `string`, `list`                  |
/// | Programmatic fix    | Append the given value if absent  |
///
/// For string values the suffix must itself be a string and is compared as a
/// whole trailing substring. For list values the suffix may be any JSON value
/// and is compared against the last element; the fix appends it as exactly
/// one trailing element, so the string and list fix paths are deliberately
/// asymmetric.
///
/// An empty string or empty list has no last element and always fails, with
/// the suffix alone as the fix value.
#[derive(Debug, Clone)]
pub struct EndsWith {
    end: serde_json::Value,
    on_fail: OnFail,
}

impl EndsWith {
    /// The name this rule is registered under.
    pub const NAME: &'static str = "ends-with";

    /// Creates a new ends-with rule for the given suffix.
    #[must_use]
    pub fn new(end: impl Into<serde_json::Value>) -> Self {
        Self {
            end: end.into(),
            on_fail: OnFail::default(),
        }
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_on_fail(mut self, on_fail: OnFail) -> Self {
        self.on_fail = on_fail;
        self
    }

    /// Builds the rule from a registry spec.
    ///
    /// Requires the `end` argument; carries the spec's `on_fail` policy.
    pub fn from_spec(spec: &ValidatorSpec) -> Result<Self, GuardError> {
        let end = spec
            .arg("end")
            .ok_or_else(|| GuardError::invalid_config(Self::NAME, "missing required argument 'end'"))?
            .clone();

        Ok(Self {
            end,
            on_fail: spec.on_fail(),
        })
    }

    /// Returns the required suffix.
    #[must_use]
    pub fn end(&self) -> &serde_json::Value {
        &self.end
    }

    fn mismatch(&self, value: &serde_json::Value) -> ValidationOutcome {
        let message = format!(
            "{} must end with {}",
            display_value(value),
            display_value(&self.end)
        );
        match append_trailing(value, &self.end) {
            Some(fix) => ValidationOutcome::fail_with_fix(message, fix),
            None => ValidationOutcome::fail(message),
        }
    }
}

impl Validator for EndsWith {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn data_types(&self) -> &[DataType] {
        &[DataType::String, DataType::List]
    }

    fn on_fail(&self) -> OnFail {
        self.on_fail
    }

    fn validate(&self, value: &serde_json::Value, _metadata: &Metadata) -> ValidationOutcome {
        debug!(
            value = %display_value(value),
            end = %display_value(&self.end),
            "validating trailing value"
        );

        match value {
            serde_json::Value::String(s) => {
                let Some(end) = self.end.as_str() else {
                    return ValidationOutcome::fail(format!(
                        "expected a string suffix for string value, got {}",
                        self.end
                    ));
                };
                if s.ends_with(end) {
                    ValidationOutcome::pass()
                } else {
                    self.mismatch(value)
                }
            }
            serde_json::Value::Array(items) => {
                if items.last() == Some(&self.end) {
                    ValidationOutcome::pass()
                } else {
                    self.mismatch(value)
                }
            }
            other => ValidationOutcome::fail(format!(
                "{} must be a string or a list",
                display_value(other)
            )),
        }
    }
}
