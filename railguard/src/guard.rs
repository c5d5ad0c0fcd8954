//! Guard harness binding validators to fields of structured output.
//!
//! The guard is the enforcement side of the contract: validators classify,
//! the guard decides what a fail outcome means based on the policy each
//! validator carries.

use crate::errors::{GuardError, ValidationFailedError};
use crate::policy::OnFail;
use crate::report::ValidationReport;
use crate::validators::{Metadata, Validator};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::warn;
use uuid::Uuid;

/// Validators bound to one output field.
struct FieldBinding {
    field: String,
    validators: Vec<Arc<dyn Validator>>,
}

/// Binds validators to fields of parsed JSON output and enforces their
/// failure policies.
///
/// Fields are validated in binding order; a field's validators run in
/// registration order, and a fix substituted by one validator is seen by the
/// next.
#[derive(Default)]
pub struct Guard {
    bindings: Vec<FieldBinding>,
}

impl Guard {
    /// Creates a guard with no bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a validator to a field.
    ///
    /// May be called repeatedly for the same field to stack validators.
    #[must_use]
    pub fn validate_field(mut self, field: impl Into<String>, validator: Arc<dyn Validator>) -> Self {
        let field = field.into();
        if let Some(binding) = self.bindings.iter_mut().find(|b| b.field == field) {
            binding.validators.push(validator);
        } else {
            self.bindings.push(FieldBinding {
                field,
                validators: vec![validator],
            });
        }
        self
    }

    /// Parses raw JSON output and validates it.
    pub fn parse(&self, raw: &str) -> Result<GuardResult, GuardError> {
        let output: serde_json::Value = serde_json::from_str(raw)?;
        self.validate(&output)
    }

    /// Validates an already-parsed output document.
    ///
    /// Returns an error for the exception policy or a missing bound field;
    /// every other policy is folded into the returned result.
    pub fn validate(&self, output: &serde_json::Value) -> Result<GuardResult, GuardError> {
        let mut validated = output.clone();
        let mut passed = true;
        let mut reports = Vec::new();

        for binding in &self.bindings {
            for validator in &binding.validators {
                let current = validated
                    .get(binding.field.as_str())
                    .cloned()
                    .ok_or_else(|| GuardError::missing_field(&binding.field))?;

                let started = Utc::now();
                let outcome = validator.validate(&current, &Metadata::new());
                let action = validator.on_fail();

                if outcome.is_fail() {
                    let message = outcome
                        .error_message
                        .clone()
                        .unwrap_or_else(|| "validation failed".to_string());

                    match action {
                        OnFail::Exception => {
                            let mut err = ValidationFailedError::new(&binding.field, message);
                            if let Some(fix) = outcome.fix_value.clone() {
                                err = err.with_fix_value(fix);
                            }
                            return Err(err.into());
                        }
                        OnFail::Fix => {
                            if let Some(fix) = outcome.fix_value.clone() {
                                if let Some(slot) = validated.get_mut(binding.field.as_str()) {
                                    *slot = fix;
                                }
                            } else {
                                warn!(
                                    field = %binding.field,
                                    validator = validator.name(),
                                    %message,
                                    "fix policy selected but no fix value available"
                                );
                                passed = false;
                            }
                        }
                        OnFail::Log => {
                            warn!(
                                field = %binding.field,
                                validator = validator.name(),
                                %message,
                                "validation failed"
                            );
                            passed = false;
                        }
                        OnFail::Noop => {
                            passed = false;
                        }
                    }
                }

                reports.push(ValidationReport::new(
                    &binding.field,
                    validator.name(),
                    outcome,
                    action,
                    started,
                ));
            }
        }

        Ok(GuardResult {
            run_id: Uuid::new_v4(),
            validation_passed: passed,
            validated_output: validated,
            reports,
        })
    }
}

impl std::fmt::Debug for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Guard")
            .field("field_count", &self.bindings.len())
            .finish()
    }
}

/// The result of one guard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardResult {
    /// Identifier for this run.
    pub run_id: Uuid,
    /// True when no failure survived policy enforcement.
    pub validation_passed: bool,
    /// The output document, with fixes substituted where the fix policy
    /// applied.
    pub validated_output: serde_json::Value,
    /// One report per validator invocation.
    pub reports: Vec<ValidationReport>,
}

impl GuardResult {
    /// Returns the reports whose outcome was a fail.
    #[must_use]
    pub fn failures(&self) -> Vec<&ValidationReport> {
        self.reports.iter().filter(|r| !r.is_pass()).collect()
    }
}
