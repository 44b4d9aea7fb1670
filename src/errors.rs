// Validation failures and registry errors

use serde_json::json;
use std::fmt;
use thiserror::Error;

use crate::{Kind, Value};

/// Error raised when a typedef cannot be registered
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The typedef name collides with a reserved base-kind name
    #[error("typedef name {0:?} is reserved for a built-in kind")]
    NameConflict(String),
}

/// Identifier for a single rule check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Check {
    Required,
    Min,
    Max,
    Regex,
    Allowed,
    ValidType,
    Custom,
}

impl Check {
    /// The constraint key for the check
    pub fn as_str(&self) -> &'static str {
        match self {
            Check::Required => "required",
            Check::Min => "min",
            Check::Max => "max",
            Check::Regex => "regex",
            Check::Allowed => "allowed",
            Check::ValidType => "validType",
            Check::Custom => "customValidation",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single failed check with its diagnostic payload
///
/// The payload is the threshold, pattern, or list the value was tested
/// against, or the message a custom predicate returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Failure {
    Required,
    Min { limit: f64 },
    Max { limit: f64 },
    Regex { pattern: String },
    Allowed { allowed: Vec<Value> },
    ValidType { expected: Kind },
    Custom { message: String },
}

impl Failure {
    /// The check this failure belongs to
    pub fn check(&self) -> Check {
        match self {
            Failure::Required => Check::Required,
            Failure::Min { .. } => Check::Min,
            Failure::Max { .. } => Check::Max,
            Failure::Regex { .. } => Check::Regex,
            Failure::Allowed { .. } => Check::Allowed,
            Failure::ValidType { .. } => Check::ValidType,
            Failure::Custom { .. } => Check::Custom,
        }
    }

    fn detail_json(&self) -> serde_json::Value {
        match self {
            Failure::Required => json!(true),
            Failure::Min { limit } | Failure::Max { limit } => json!(limit),
            Failure::Regex { pattern } => json!(pattern),
            Failure::Allowed { allowed } => json!(allowed),
            Failure::ValidType { expected } => json!(expected),
            Failure::Custom { message } => json!(message),
        }
    }
}

/// Keyed collection of failed checks
///
/// Keys are unique; recording a failure for a check that is already present
/// replaces the earlier payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Failures {
    entries: Vec<Failure>,
}

impl Failures {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn record(&mut self, failure: Failure) {
        let check = failure.check();
        match self.entries.iter_mut().find(|f| f.check() == check) {
            Some(existing) => *existing = failure,
            None => self.entries.push(failure),
        }
    }

    /// Check whether a failure was recorded for the given check
    pub fn has(&self, check: Check) -> bool {
        self.get(check).is_some()
    }

    /// The failure recorded for the given check, if any
    pub fn get(&self, check: Check) -> Option<&Failure> {
        self.entries.iter().find(|f| f.check() == check)
    }

    /// The checks that failed, in recording order
    pub fn checks(&self) -> Vec<Check> {
        self.entries.iter().map(Failure::check).collect()
    }

    /// Iterate over the recorded failures
    pub fn iter(&self) -> std::slice::Iter<'_, Failure> {
        self.entries.iter()
    }

    /// Get the number of failed checks
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if any check failed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a Failures {
    type Item = &'a Failure;
    type IntoIter = std::slice::Iter<'a, Failure>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// The outcome of a failed validation
///
/// Produced atomically per [`validate`](crate::Validator::validate) call:
/// the keyed failure set plus the diagnostic message, either composed from
/// the failures or the rule set's verbatim override.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    /// The checks that failed, with their payloads
    pub failures: Failures,
    /// The human-readable diagnostic
    pub message: String,
}

impl ValidationFailure {
    pub(crate) fn new(failures: Failures, message: String) -> Self {
        Self { failures, message }
    }

    /// Convert to JSON representation
    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "message": self.message,
            "failures": self.failures.iter().map(|f| {
                json!({
                    "check": f.check().as_str(),
                    "detail": f.detail_json(),
                })
            }).collect::<Vec<_>>(),
        })
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationFailure {}
