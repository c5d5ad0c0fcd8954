//! Validator trait and implementations.
//!
//! Validators are stateless rule objects: configured once, immutable
//! thereafter, and pure over their input. They classify a value as pass or
//! fail; what happens to a failure is the harness's job, steered by the
//! policy each validator carries.

mod ends_with;

pub use ends_with::EndsWith;

use crate::core::{DataType, ValidationOutcome};
use crate::policy::OnFail;
use std::collections::HashMap;
use std::fmt::Debug;

/// Open key-value bag passed through to validators by the host.
pub type Metadata = HashMap<String, serde_json::Value>;

/// Trait for validation rules.
///
/// Rules represent single checks that a host framework binds to fields of
/// structured output and invokes with the extracted values.
pub trait Validator: Send + Sync + Debug {
    /// Returns the stable name the rule is registered under.
    fn name(&self) -> &str;

    /// Returns the data types the rule applies to.
    fn data_types(&self) -> &[DataType];

    /// Returns the failure policy carried by this validator.
    ///
    /// Enforced by the guard harness, not by the rule.
    fn on_fail(&self) -> OnFail {
        OnFail::Noop
    }

    /// Validates a value.
    ///
    /// # Arguments
    ///
    /// * `value` - The value extracted from structured output
    /// * `metadata` - Host-supplied pass-through bag
    ///
    /// # Returns
    ///
    /// The outcome classifying the value, never an error.
    fn validate(&self, value: &serde_json::Value, metadata: &Metadata) -> ValidationOutcome;
}

/// A simple function-based validator.
pub struct FnValidator<F>
where
    F: Fn(&serde_json::Value, &Metadata) -> ValidationOutcome + Send + Sync,
{
    name: String,
    data_types: Vec<DataType>,
    on_fail: OnFail,
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&serde_json::Value, &Metadata) -> ValidationOutcome + Send + Sync,
{
    /// Creates a new function-based validator.
    pub fn new(name: impl Into<String>, data_types: Vec<DataType>, func: F) -> Self {
        Self {
            name: name.into(),
            data_types,
            on_fail: OnFail::default(),
            func,
        }
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_on_fail(mut self, on_fail: OnFail) -> Self {
        self.on_fail = on_fail;
        self
    }
}

impl<F> Debug for FnValidator<F>
where
    F: Fn(&serde_json::Value, &Metadata) -> ValidationOutcome + Send + Sync,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnValidator")
            .field("name", &self.name)
            .field("on_fail", &self.on_fail)
            .finish()
    }
}

impl<F> Validator for FnValidator<F>
where
    F: Fn(&serde_json::Value, &Metadata) -> ValidationOutcome + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn data_types(&self) -> &[DataType] {
        &self.data_types
    }

    fn on_fail(&self) -> OnFail {
        self.on_fail
    }

    fn validate(&self, value: &serde_json::Value, metadata: &Metadata) -> ValidationOutcome {
        (self.func)(value, metadata)
    }
}

/// A validator that always passes, for testing.
#[derive(Debug, Clone)]
pub struct NoOpValidator {
    name: String,
}

impl NoOpValidator {
    /// Creates a new no-op validator.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Validator for NoOpValidator {
    fn name(&self) -> &str {
        &self.name
    }

    fn data_types(&self) -> &[DataType] {
        &[DataType::String, DataType::List]
    }

    fn validate(&self, _value: &serde_json::Value, _metadata: &Metadata) -> ValidationOutcome {
        ValidationOutcome::pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fn_validator() {
        let validator = FnValidator::new("non-empty", vec![DataType::String], |value, _meta| {
            match value.as_str() {
                Some(s) if !s.is_empty() => ValidationOutcome::pass(),
                _ => ValidationOutcome::fail("value must be a non-empty string"),
            }
        })
        .with_on_fail(OnFail::Exception);

        assert_eq!(validator.name(), "non-empty");
        assert_eq!(validator.on_fail(), OnFail::Exception);
        assert_eq!(validator.data_types(), &[DataType::String]);

        assert!(validator
            .validate(&serde_json::json!("hello"), &Metadata::new())
            .is_pass());
        assert!(validator
            .validate(&serde_json::json!(""), &Metadata::new())
            .is_fail());
    }

    #[test]
    fn test_noop_validator() {
        let validator = NoOpValidator::new("noop");

        assert_eq!(validator.name(), "noop");
        assert_eq!(validator.on_fail(), OnFail::Noop);

        let outcome = validator.validate(&serde_json::json!(42), &Metadata::new());
        assert!(outcome.is_pass());
    }
}
