//! Validator registry mapping rule names to factories.
//!
//! The host discovers rules by stable name when wiring validators to output
//! fields. The mapping is explicit: builtins are registered at startup by
//! [`register_builtin_validators`], and callers may add their own factories.

use crate::errors::GuardError;
use crate::policy::OnFail;
use crate::validators::{EndsWith, Validator};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Configuration passed to a validator factory.
///
/// Holds the rule's named arguments (for the ends-with rule: `end`) and the
/// `on_fail` policy selector.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ValidatorSpec {
    /// Named arguments for the rule.
    #[serde(default)]
    args: HashMap<String, serde_json::Value>,
    /// Failure policy the validator will carry.
    #[serde(default)]
    on_fail: OnFail,
}

impl ValidatorSpec {
    /// Creates an empty spec with the default policy.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a named argument.
    #[must_use]
    pub fn with_arg(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.args.insert(key.into(), value);
        self
    }

    /// Sets the failure policy.
    #[must_use]
    pub fn with_on_fail(mut self, on_fail: OnFail) -> Self {
        self.on_fail = on_fail;
        self
    }

    /// Gets a named argument.
    #[must_use]
    pub fn arg(&self, key: &str) -> Option<&serde_json::Value> {
        self.args.get(key)
    }

    /// Returns the failure policy.
    #[must_use]
    pub fn on_fail(&self) -> OnFail {
        self.on_fail
    }
}

/// Factory function type for building validators from a spec.
pub type ValidatorFactory =
    Box<dyn Fn(&ValidatorSpec) -> Result<Arc<dyn Validator>, GuardError> + Send + Sync>;

/// Registry of validator factories keyed by rule name.
#[derive(Default)]
pub struct ValidatorRegistry {
    factories: RwLock<HashMap<String, ValidatorFactory>>,
}

impl ValidatorRegistry {
    /// Creates a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a factory under a rule name.
    ///
    /// A later registration under the same name replaces the earlier one.
    pub fn register_factory(&self, name: impl Into<String>, factory: ValidatorFactory) {
        self.factories.write().insert(name.into(), factory);
    }

    /// Builds a validator by rule name from a spec.
    pub fn build(&self, name: &str, spec: &ValidatorSpec) -> Result<Arc<dyn Validator>, GuardError> {
        let factories = self.factories.read();
        let factory = factories
            .get(name)
            .ok_or_else(|| GuardError::unknown_validator(name))?;
        factory(spec)
    }

    /// Checks whether a rule name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    /// Lists registered rule names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered factories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Returns true if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Removes all registered factories (primarily for tests).
    pub fn clear(&self) {
        self.factories.write().clear();
    }
}

impl std::fmt::Debug for ValidatorRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ValidatorRegistry")
            .field("factory_count", &self.factories.read().len())
            .finish()
    }
}

/// Registers the builtin rules on a registry.
pub fn register_builtin_validators(registry: &ValidatorRegistry) {
    registry.register_factory(
        EndsWith::NAME,
        Box::new(|spec| {
            let validator: Arc<dyn Validator> = Arc::new(EndsWith::from_spec(spec)?);
            Ok(validator)
        }),
    );
}

/// Process-wide registry, populated with the builtin rules on first use.
static REGISTRY: std::sync::LazyLock<Arc<ValidatorRegistry>> = std::sync::LazyLock::new(|| {
    let registry = ValidatorRegistry::new();
    register_builtin_validators(&registry);
    Arc::new(registry)
});

/// Gets the process-wide validator registry.
#[must_use]
pub fn global_registry() -> Arc<ValidatorRegistry> {
    REGISTRY.clone()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validators::{Metadata, NoOpValidator};

    #[test]
    fn test_registry_creation() {
        let registry = ValidatorRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_register_and_build() {
        let registry = ValidatorRegistry::new();
        register_builtin_validators(&registry);

        assert!(registry.contains("ends-with"));
        assert_eq!(registry.len(), 1);

        let spec = ValidatorSpec::new()
            .with_arg("end", serde_json::json!("a"))
            .with_on_fail(OnFail::Fix);
        let validator = registry.build("ends-with", &spec).unwrap();

        assert_eq!(validator.name(), "ends-with");
        assert_eq!(validator.on_fail(), OnFail::Fix);
        assert!(validator
            .validate(&serde_json::json!("abcda"), &Metadata::new())
            .is_pass());
    }

    #[test]
    fn test_build_unknown_name() {
        let registry = ValidatorRegistry::new();
        let err = registry
            .build("no-such-rule", &ValidatorSpec::new())
            .unwrap_err();
        assert!(matches!(err, GuardError::UnknownValidator { ref name } if name == "no-such-rule"));
    }

    #[test]
    fn test_build_invalid_spec() {
        let registry = ValidatorRegistry::new();
        register_builtin_validators(&registry);

        let err = registry.build("ends-with", &ValidatorSpec::new()).unwrap_err();
        assert!(matches!(err, GuardError::InvalidConfig { .. }));
    }

    #[test]
    fn test_custom_factory() {
        let registry = ValidatorRegistry::new();
        registry.register_factory(
            "noop",
            Box::new(|_spec| {
                let validator: Arc<dyn Validator> = Arc::new(NoOpValidator::new("noop"));
                Ok(validator)
            }),
        );

        let validator = registry.build("noop", &ValidatorSpec::new()).unwrap();
        assert!(validator
            .validate(&serde_json::json!(null), &Metadata::new())
            .is_pass());
    }

    #[test]
    fn test_clear() {
        let registry = ValidatorRegistry::new();
        register_builtin_validators(&registry);
        assert!(!registry.is_empty());

        registry.clear();
        assert!(registry.is_empty());
    }

    #[test]
    fn test_global_registry_has_builtins() {
        let registry = global_registry();
        assert!(registry.contains("ends-with"));
    }

    #[test]
    fn test_spec_serialization() {
        let spec = ValidatorSpec::new()
            .with_arg("end", serde_json::json!("a"))
            .with_on_fail(OnFail::Exception);

        let json = serde_json::to_string(&spec).unwrap();
        let deserialized: ValidatorSpec = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.arg("end"), Some(&serde_json::json!("a")));
        assert_eq!(deserialized.on_fail(), OnFail::Exception);
    }
}
