// Scalar input values

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use crate::kinds::is_hex_digits;

/// A scalar value under validation
///
/// Rule inputs are either absent (`Null`), numeric, or textual. Conversions
/// exist for the common primitives, so callers can pass `8080`, `"3fcc"`, or
/// an `Option` directly to [`Validator::validate`](crate::Validator::validate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// No value was supplied
    Null,
    /// A numeric value
    Number(f64),
    /// A textual value
    Text(String),
}

impl Value {
    /// Check whether the value is absent
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check whether the value is textual
    pub fn is_text(&self) -> bool {
        matches!(self, Value::Text(_))
    }

    /// Loosely coerce the value to a number
    ///
    /// This is the permissive cast used for numeric comparisons: numbers pass
    /// through, text is trimmed and parsed. An empty or whitespace-only
    /// string coerces to zero, and `0x`/`0o`/`0b` prefixed digit runs parse
    /// in their radix.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Null => None,
            Value::Number(n) => Some(*n),
            Value::Text(s) => coerce_text(s),
        }
    }

    /// Length of the value, for values that have one
    pub fn length(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            _ => None,
        }
    }

    /// Check whether the value is a textual run of hex digits
    pub fn is_hex_string(&self) -> bool {
        match self {
            Value::Text(s) => is_hex_digits(s),
            _ => false,
        }
    }

    /// Textual rendering used when a pattern is applied to the value
    pub(crate) fn render(&self) -> Cow<'_, str> {
        match self {
            Value::Null => Cow::Borrowed("null"),
            Value::Number(n) => Cow::Owned(format_number(*n)),
            Value::Text(s) => Cow::Borrowed(s),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn coerce_text(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        if let Some(digits) = trimmed
            .strip_prefix(prefix)
            .or_else(|| trimmed.strip_prefix(&prefix.to_uppercase()))
        {
            return u64::from_str_radix(digits, radix).ok().map(|n| n as f64);
        }
    }
    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Format a number without a trailing `.0` when it is integral
pub(crate) fn format_number(n: f64) -> String {
    if n.is_finite() && n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<f32> for Value {
    fn from(n: f32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<u64> for Value {
    fn from(n: u64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(n as f64)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}
