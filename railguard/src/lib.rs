//! # Railguard
//!
//! Validation rules for structured model output, with programmatic fixes.
//!
//! Railguard provides a small validation contract and the pieces a host
//! framework needs to apply it:
//!
//! - **Validation rules**: stateless rule objects implementing [`validators::Validator`]
//! - **Outcomes**: pass/fail results carrying an error message and an optional
//!   corrected value
//! - **Failure policies**: per-validator `on_fail` configuration (raise, fix,
//!   log, noop) enforced by the guard harness
//! - **Registry**: explicit rule-name-to-factory mapping populated at startup
//! - **Guard harness**: binds validators to fields of parsed JSON output and
//!   enforces their policies
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use railguard::prelude::*;
//! use std::sync::Arc;
//!
//! // Bind an ends-with rule to a field and parse raw model output
//! let guard = Guard::new().validate_field(
//!     "text",
//!     Arc::new(EndsWith::new("a").with_on_fail(OnFail::Exception)),
//! );
//!
//! let result = guard.parse(r#"{"text": "abcda"}"#)?;
//! assert!(result.validation_passed);
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod core;
pub mod errors;
pub mod guard;
pub mod observability;
pub mod policy;
pub mod registry;
pub mod report;
pub mod validators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::core::{DataType, ValidationOutcome, ValidationStatus};
    pub use crate::errors::{GuardError, ValidationFailedError};
    pub use crate::guard::{Guard, GuardResult};
    pub use crate::policy::OnFail;
    pub use crate::registry::{
        global_registry, register_builtin_validators, ValidatorRegistry, ValidatorSpec,
    };
    pub use crate::report::ValidationReport;
    pub use crate::validators::{EndsWith, FnValidator, Metadata, NoOpValidator, Validator};
}

#[cfg(test)]
mod tests {
    #[test]
    fn library_compiles() {
        assert!(true);
    }
}
