//! Per-invocation validation reports.

use crate::core::ValidationOutcome;
use crate::policy::OnFail;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of one validator invocation during a guard run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationReport {
    /// The field the validator ran against.
    pub field: String,
    /// The validator's registered name.
    pub validator: String,
    /// The outcome of the call.
    pub outcome: ValidationOutcome,
    /// The policy the harness applied to the outcome.
    pub action: OnFail,
    /// When the invocation started.
    pub started_at: DateTime<Utc>,
    /// When the invocation ended.
    pub ended_at: DateTime<Utc>,
}

impl ValidationReport {
    /// Creates a report for an invocation that just finished.
    #[must_use]
    pub fn new(
        field: impl Into<String>,
        validator: impl Into<String>,
        outcome: ValidationOutcome,
        action: OnFail,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            field: field.into(),
            validator: validator.into(),
            outcome,
            action,
            started_at,
            ended_at: Utc::now(),
        }
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn duration_ms(&self) -> f64 {
        (self.ended_at - self.started_at).num_milliseconds() as f64
    }

    /// Returns true if the outcome was a pass.
    #[must_use]
    pub fn is_pass(&self) -> bool {
        self.outcome.is_pass()
    }
}
