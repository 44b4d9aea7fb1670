// Base kinds and type resolution

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::Value;

static HEX_REGEX: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-fA-F0-9]+$").unwrap());

pub(crate) fn is_hex_digits(s: &str) -> bool {
    HEX_REGEX.is_match(s)
}

/// The base kinds a rule set can operate on
///
/// The base kind decides which checks apply: numeric bounds for [`Number`],
/// length/pattern checks for [`String`] and [`HexString`]. Their names are
/// reserved and cannot be used for registered typedefs.
///
/// [`Number`]: Kind::Number
/// [`String`]: Kind::String
/// [`HexString`]: Kind::HexString
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Kind {
    Number,
    String,
    HexString,
}

impl Kind {
    /// The reserved name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Number => "number",
            Kind::String => "string",
            Kind::HexString => "hexString",
        }
    }

    /// Parse a reserved base-kind name
    pub fn parse(name: &str) -> Option<Kind> {
        match name {
            "number" => Some(Kind::Number),
            "string" => Some(Kind::String),
            "hexString" => Some(Kind::HexString),
            _ => None,
        }
    }

    /// Infer the kind governing a value when none was declared
    ///
    /// Anything that passes the loose numeric coercion counts as a number
    /// (including an empty string, which coerces to zero), then a run of hex
    /// digits, then plain text.
    pub fn infer(value: &Value) -> Kind {
        if value.as_number().is_some() {
            Kind::Number
        } else if value.is_hex_string() {
            Kind::HexString
        } else {
            Kind::String
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The type a caller may declare for a rule set
///
/// Either one of the built-in base kinds, or the name of a registered
/// typedef. Unknown names stay `Named` and simply seed nothing at
/// construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSpec {
    Kind(Kind),
    Named(String),
}

impl TypeSpec {
    /// Parse a declared type name
    pub fn parse(name: &str) -> TypeSpec {
        match Kind::parse(name) {
            Some(kind) => TypeSpec::Kind(kind),
            None => TypeSpec::Named(name.to_string()),
        }
    }
}

impl From<Kind> for TypeSpec {
    fn from(kind: Kind) -> Self {
        TypeSpec::Kind(kind)
    }
}

impl From<&str> for TypeSpec {
    fn from(name: &str) -> Self {
        TypeSpec::parse(name)
    }
}
