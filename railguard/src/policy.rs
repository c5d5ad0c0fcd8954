//! Failure-handling policies for validation rules.
//!
//! A policy is selected when a validator is constructed or registered; it is
//! carried as configuration on the validator and enforced by the guard
//! harness, never by the rule itself.

use crate::errors::GuardError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// What the guard harness does with a fail outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OnFail {
    /// Raise a [`crate::errors::ValidationFailedError`] through the harness.
    Exception,
    /// Substitute the outcome's corrected value and continue.
    Fix,
    /// Emit a warning and continue with the original value.
    Log,
    /// Record the failure and continue silently.
    #[default]
    Noop,
}

impl fmt::Display for OnFail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exception => write!(f, "exception"),
            Self::Fix => write!(f, "fix"),
            Self::Log => write!(f, "log"),
            Self::Noop => write!(f, "noop"),
        }
    }
}

impl FromStr for OnFail {
    type Err = GuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exception" => Ok(Self::Exception),
            "fix" => Ok(Self::Fix),
            "log" => Ok(Self::Log),
            "noop" => Ok(Self::Noop),
            other => Err(GuardError::UnknownPolicy(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_round_trip() {
        for policy in [OnFail::Exception, OnFail::Fix, OnFail::Log, OnFail::Noop] {
            let parsed: OnFail = policy.to_string().parse().unwrap();
            assert_eq!(parsed, policy);
        }
    }

    #[test]
    fn test_unknown_policy() {
        let err = "reask".parse::<OnFail>().unwrap_err();
        assert!(matches!(err, GuardError::UnknownPolicy(ref s) if s == "reask"));
    }

    #[test]
    fn test_default_is_noop() {
        assert_eq!(OnFail::default(), OnFail::Noop);
    }

    #[test]
    fn test_serialize() {
        let json = serde_json::to_string(&OnFail::Exception).unwrap();
        assert_eq!(json, r#""exception""#);

        let deserialized: OnFail = serde_json::from_str(r#""fix""#).unwrap();
        assert_eq!(deserialized, OnFail::Fix);
    }
}
