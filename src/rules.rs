// Rule set construction

use regex::Regex;
use std::sync::Arc;
use tracing::trace;

use crate::typedefs::{default_registry, TypedefRegistry};
use crate::{Kind, TypeSpec, Validator, Value};

/// A caller-supplied predicate run on every validated value
///
/// Returns `None` for acceptable values, or the message to report. The
/// engine treats the function as an opaque, synchronous capability.
pub type CustomValidator = Arc<dyn Fn(&Value) -> Option<String> + Send + Sync>;

/// Builder collecting the call-site parameters for a [`Validator`]
///
/// Construction never fails: an unrecognized type name seeds no defaults and
/// leaves the base kind to be inferred per validated value. Every parameter
/// set here overrides the corresponding typedef field, field by field.
#[derive(Clone, Default)]
pub struct ValidatorBuilder {
    type_spec: Option<TypeSpec>,
    name: Option<String>,
    min: Option<f64>,
    max: Option<f64>,
    required: Option<bool>,
    regex: Option<Regex>,
    allowed: Option<Vec<Value>>,
    message: Option<String>,
    validator: Option<CustomValidator>,
}

impl ValidatorBuilder {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Declare the type: a base kind, or a typedef name
    ///
    /// Accepts a [`Kind`], a [`TypeSpec`], or a name (`"number"` resolves to
    /// the base kind, anything else to a typedef lookup).
    pub fn type_spec(mut self, spec: impl Into<TypeSpec>) -> Self {
        self.type_spec = Some(spec.into());
        self
    }

    /// Declare a base kind for the rule set
    pub fn kind(self, kind: Kind) -> Self {
        self.type_spec(kind)
    }

    /// Inherit defaults from a registered typedef
    pub fn typedef(self, name: impl Into<String>) -> Self {
        self.type_spec(TypeSpec::Named(name.into()))
    }

    /// Name used to prefix composed messages, defaults to `"value"`
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Minimum bound: value for numbers, length for text
    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    /// Maximum bound: value for numbers, length for text
    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    /// Require a value to be present
    pub fn required(mut self, required: bool) -> Self {
        self.required = Some(required);
        self
    }

    /// Pattern text values must match
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

    /// Verbatim message reported for any failure, suppressing composition
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Custom predicate run on every validated value
    pub fn validator<F>(mut self, validator: F) -> Self
    where
        F: Fn(&Value) -> Option<String> + Send + Sync + 'static,
    {
        self.validator = Some(Arc::new(validator));
        self
    }

    /// Resolve against the process-wide default registry
    pub fn build(self) -> Validator {
        self.build_with(default_registry())
    }

    /// Resolve against an explicit registry
    ///
    /// Typedef-seeded fields apply first, then every explicitly supplied
    /// parameter overwrites its seeded counterpart.
    pub fn build_with(self, registry: &TypedefRegistry) -> Validator {
        let seed = match &self.type_spec {
            Some(TypeSpec::Named(name)) => registry.lookup(name),
            _ => None,
        }
        .unwrap_or_default();

        let declared_kind = match &self.type_spec {
            Some(TypeSpec::Kind(kind)) => Some(*kind),
            _ => None,
        };

        let validator = Validator {
            name: self.name.unwrap_or_else(|| "value".to_string()),
            kind: declared_kind.or(seed.kind),
            min: self.min.or(seed.min),
            max: self.max.or(seed.max),
            required: self.required.or(seed.required).unwrap_or(false),
            regex: self.regex.or(seed.regex),
            allowed: self.allowed.or(seed.allowed),
            message: self.message.or(seed.message),
            custom: self.validator.or(seed.validator),
        };
        trace!(name = %validator.name, kind = ?validator.kind, "Resolved rule set");
        validator
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Typedef;

    #[test]
    fn test_defaults() {
        let validator = ValidatorBuilder::new().build_with(&TypedefRegistry::new());
        assert_eq!(validator.name(), "value");
        assert_eq!(validator.kind(), None);
        assert!(!validator.is_required());
    }

    #[test]
    fn test_explicit_params_override_typedef_fields() {
        let registry = TypedefRegistry::new();
        registry
            .register(
                Typedef::new("port")
                    .kind(Kind::Number)
                    .min(1.0)
                    .max(65535.0)
                    .required(true),
            )
            .unwrap();

        let validator = ValidatorBuilder::new()
            .typedef("port")
            .min(1024.0)
            .build_with(&registry);

        assert_eq!(validator.min(), Some(1024.0));
        assert_eq!(validator.max(), Some(65535.0));
        assert_eq!(validator.kind(), Some(Kind::Number));
        assert!(validator.is_required());
    }

    #[test]
    fn test_unknown_typedef_seeds_nothing() {
        let validator = ValidatorBuilder::new()
            .typedef("no-such-typedef")
            .min(3.0)
            .build_with(&TypedefRegistry::new());

        assert_eq!(validator.kind(), None);
        assert_eq!(validator.min(), Some(3.0));
        assert_eq!(validator.max(), None);
    }

    #[test]
    fn test_base_kind_name_resolves_without_lookup() {
        let validator = ValidatorBuilder::new()
            .type_spec("hexString")
            .build_with(&TypedefRegistry::new());

        assert_eq!(validator.kind(), Some(Kind::HexString));
    }
}
