//! Reusable rule bundles and the typedef registry
//!
//! A [`Typedef`] is a named bundle of rule defaults that a rule set can
//! inherit by declaring the typedef's name as its type. Typedefs live in a
//! [`TypedefRegistry`]; most callers use the process-wide default registry
//! through [`register`], tests and embedders can carry their own.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;
use std::sync::RwLock;
use tracing::debug;

use crate::rules::CustomValidator;
use crate::{Kind, RegistryError, Value};

/// A named, reusable bundle of rule defaults
///
/// Every field is optional; a rule set built from a typedef inherits the
/// fields the typedef sets and may override any of them at construction
/// time. Once registered, a typedef is never mutated.
#[derive(Clone, Default)]
pub struct Typedef {
    pub(crate) name: String,
    pub(crate) kind: Option<Kind>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) required: Option<bool>,
    pub(crate) regex: Option<Regex>,
    pub(crate) allowed: Option<Vec<Value>>,
    pub(crate) message: Option<String>,
    pub(crate) validator: Option<CustomValidator>,
}

impl Typedef {
    /// Create a typedef with the given name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// The name the typedef registers under
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the base kind rule sets built from this typedef operate on
    pub fn kind(mut self, kind: Kind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Set the minimum bound (value for numbers, length for text)
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Set the maximum bound (value for numbers, length for text)
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a value to be present
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Set the pattern text values must match
    pub fn regex(mut self, regex: Regex) -> Self {
        self.regex = Some(regex);
        self
    }

    /// Restrict values to the given list
    pub fn allowed<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.allowed = Some(values.into_iter().map(Into::into).collect());
        self
    }

    /// Set the verbatim message reported for any failure
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Attach a custom predicate run on every validated value
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(std::sync::Arc::new(validator));
        self
    }
}

/// Store of named typedefs
///
/// Writes are serialized against lookups so registration can race rule-set
/// construction in multi-threaded hosts. Re-registering a non-reserved name
/// silently replaces the earlier definition; there is no removal.
#[derive(Default)]
pub struct TypedefRegistry {
    typedefs: RwLock<HashMap<String, Typedef>>,
}

impl TypedefRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a typedef under its name
    ///
    /// Fails with [`RegistryError::NameConflict`] when the name is one of
    /// the reserved base-kind names; the registry is left untouched.
    pub fn register(&self, typedef: Typedef) -> Result<(), RegistryError> {
        if Kind::parse(&typedef.name).is_some() {
            return Err(RegistryError::NameConflict(typedef.name));
        }

        let name = typedef.name.clone();
        let mut typedefs = self.typedefs.write().unwrap();
        if typedefs.insert(name.clone(), typedef).is_some() {
            debug!(name = %name, "Replaced registered typedef");
        } else {
            debug!(name = %name, "Registered typedef");
        }
        Ok(())
    }

    /// Look up a typedef by name
    pub fn lookup(&self, name: &str) -> Option<Typedef> {
        self.typedefs.read().unwrap().get(name).cloned()
    }

    /// Check whether a typedef is registered under the given name
    pub fn contains(&self, name: &str) -> bool {
        self.typedefs.read().unwrap().contains_key(name)
    }
}

static DEFAULT_REGISTRY: Lazy<TypedefRegistry> = Lazy::new(TypedefRegistry::default);

/// The process-wide default registry
///
/// [`ValidatorBuilder::build`](crate::ValidatorBuilder::build) resolves
/// typedef names against this registry.
pub fn default_registry() -> &'static TypedefRegistry {
    &DEFAULT_REGISTRY
}

/// Register a typedef with the process-wide default registry
pub fn register(typedef: Typedef) -> Result<(), RegistryError> {
    default_registry().register(typedef)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = TypedefRegistry::new();
        registry
            .register(Typedef::new("port").kind(Kind::Number).min(1.0).max(65535.0))
            .unwrap();

        let typedef = registry.lookup("port").unwrap();
        assert_eq!(typedef.name(), "port");
        assert_eq!(typedef.min, Some(1.0));
        assert!(registry.contains("port"));
        assert!(!registry.contains("host"));
    }

    #[test]
    fn test_reserved_names_are_rejected() {
        let registry = TypedefRegistry::new();
        for reserved in ["string", "number", "hexString"] {
            let result = registry.register(Typedef::new(reserved).min(1.0));
            assert_eq!(
                result,
                Err(RegistryError::NameConflict(reserved.to_string()))
            );
            assert!(!registry.contains(reserved));
        }
    }

    #[test]
    fn test_reregistration_replaces_silently() {
        let registry = TypedefRegistry::new();
        registry.register(Typedef::new("port").min(1.0)).unwrap();
        registry.register(Typedef::new("port").min(1024.0)).unwrap();

        assert_eq!(registry.lookup("port").unwrap().min, Some(1024.0));
    }

    #[test]
    fn test_default_registry_is_shared() {
        register(Typedef::new("typedefs-test-shared").max(4.0)).unwrap();
        assert!(default_registry().contains("typedefs-test-shared"));
    }
}
