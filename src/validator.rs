// Rule evaluation

use regex::Regex;

use crate::message;
use crate::rules::{CustomValidator, ValidatorBuilder};
use crate::{Failure, Failures, Kind, ValidationFailure, Value};

/// A resolved rule set for one validation target
///
/// Built once via [`Validator::builder`]; thereafter
/// [`validate`](Validator::validate) is a pure function of the rule set and
/// the input value. Cloning is cheap enough to share a rule set across
/// call sites.
#[derive(Clone)]
pub struct Validator {
    pub(crate) name: String,
    pub(crate) kind: Option<Kind>,
    pub(crate) min: Option<f64>,
    pub(crate) max: Option<f64>,
    pub(crate) required: bool,
    pub(crate) regex: Option<Regex>,
    pub(crate) allowed: Option<Vec<Value>>,
    pub(crate) message: Option<String>,
    pub(crate) custom: Option<CustomValidator>,
}

impl Validator {
    /// Start building a rule set
    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    /// Name used to prefix composed messages
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared base kind, `None` when the kind is inferred per value
    pub fn kind(&self) -> Option<Kind> {
        self.kind
    }

    /// The configured minimum bound
    pub fn min(&self) -> Option<f64> {
        self.min
    }

    /// The configured maximum bound
    pub fn max(&self) -> Option<f64> {
        self.max
    }

    /// Whether a value must be present
    pub fn is_required(&self) -> bool {
        self.required
    }

    /// Validate a value against the rule set
    ///
    /// Returns `Ok(())` when every check passes, otherwise the keyed failure
    /// set with its diagnostic message. Validation failures are data, never
    /// panics.
    pub fn validate(&self, value: impl Into<Value>) -> Result<(), ValidationFailure> {
        self.run(&value.into())
    }

    fn run(&self, value: &Value) -> Result<(), ValidationFailure> {
        let kind = self.kind.unwrap_or_else(|| Kind::infer(value));
        let mut failures = Failures::new();

        if value.is_null() {
            if self.required {
                failures.record(Failure::Required);
            }
        } else {
            match kind {
                Kind::Number => self.check_number(value, &mut failures),
                Kind::String | Kind::HexString => self.check_text(kind, value, &mut failures),
            }
            if let Some(allowed) = &self.allowed {
                if !allowed.contains(value) {
                    failures.record(Failure::Allowed {
                        allowed: allowed.clone(),
                    });
                }
            }
        }

        // The custom predicate runs even for null values and alongside any
        // earlier failures.
        if let Some(custom) = &self.custom {
            if let Some(message) = custom(value) {
                if !message.is_empty() {
                    failures.record(Failure::Custom { message });
                }
            }
        }

        if failures.is_empty() {
            Ok(())
        } else {
            let message = match &self.message {
                Some(message) => message.clone(),
                None => message::compose(&self.name, &failures, kind),
            };
            Err(ValidationFailure::new(failures, message))
        }
    }

    fn check_number(&self, value: &Value, failures: &mut Failures) {
        let Some(number) = value.as_number() else {
            failures.record(Failure::ValidType {
                expected: Kind::Number,
            });
            return;
        };
        if let Some(min) = self.min {
            if number < min {
                failures.record(Failure::Min { limit: min });
            }
        }
        if let Some(max) = self.max {
            if number > max {
                failures.record(Failure::Max { limit: max });
            }
        }
    }

    fn check_text(&self, kind: Kind, value: &Value, failures: &mut Failures) {
        if kind == Kind::String && !value.is_text() {
            failures.record(Failure::ValidType {
                expected: Kind::String,
            });
            return;
        }
        // The minimum-length check fires only when a maximum bound is also
        // configured.
        if let (Some(max), Some(length)) = (self.max, value.length()) {
            let length = length as f64;
            if let Some(min) = self.min {
                if length < min {
                    failures.record(Failure::Min { limit: min });
                }
            }
            if length > max {
                failures.record(Failure::Max { limit: max });
            }
        }
        if let Some(regex) = &self.regex {
            if !regex.is_match(&value.render()) {
                failures.record(Failure::Regex {
                    pattern: regex.as_str().to_string(),
                });
            }
        }
        if kind == Kind::HexString && !value.is_hex_string() {
            failures.record(Failure::ValidType {
                expected: Kind::HexString,
            });
        }
    }
}
