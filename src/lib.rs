//! Declarative scalar validation
//!
//! Validates a single scalar input (a string, a number, or a hex-encoded
//! string) against a declarative rule set: presence, numeric or length
//! bounds, pattern match, allowed-value membership, and a caller-supplied
//! predicate. The outcome is either "no error" or a keyed failure set with
//! one composed, human-readable sentence.
//!
//! Rule sets are built once and validate repeatedly; a set can inherit its
//! defaults from a named, registered [`Typedef`] and override any of them at
//! the call site. When no base kind is declared, each value's kind is
//! inferred: loosely numeric values count as numbers, hex-digit runs as hex
//! strings, anything else as plain text.
//!
//! # Examples
//!
//! ## Basic validation
//!
//! ```
//! use fieldcheck::{Kind, Validator};
//!
//! let port = Validator::builder()
//!     .name("port")
//!     .kind(Kind::Number)
//!     .min(1.0)
//!     .max(65535.0)
//!     .required(true)
//!     .build();
//!
//! assert!(port.validate(8080).is_ok());
//!
//! let failure = port.validate(0).unwrap_err();
//! assert_eq!(failure.message, "port must be >= 1");
//! ```
//!
//! ## Pattern rules and composed messages
//!
//! ```
//! use fieldcheck::{Check, Validator};
//! use regex::Regex;
//!
//! let name = Validator::builder()
//!     .name("name")
//!     .regex(Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]+$").unwrap())
//!     .min(6.0)
//!     .max(15.0)
//!     .required(true)
//!     .build();
//!
//! let failure = name.validate("9/13").unwrap_err();
//! assert!(failure.failures.has(Check::Regex));
//! assert!(failure.failures.has(Check::Min));
//! assert!(failure.message.contains(" and "));
//! ```
//!
//! ## Overriding the composed message
//!
//! ```
//! use fieldcheck::Validator;
//! use regex::Regex;
//!
//! let name = Validator::builder()
//!     .name("name")
//!     .regex(Regex::new(r"^[a-zA-Z][a-zA-Z0-9_]+$").unwrap())
//!     .min(6.0)
//!     .max(15.0)
//!     .message("The name must be 6-15 characters, start with a letter, and \
//!               only contain letters, numbers, and _")
//!     .build();
//!
//! let failure = name.validate("9/13").unwrap_err();
//! assert!(failure.message.starts_with("The name must be"));
//! ```
//!
//! ## Reusable typedefs
//!
//! ```
//! use fieldcheck::{Typedef, Validator};
//! use regex::Regex;
//!
//! fieldcheck::register(
//!     Typedef::new("mac")
//!         .regex(Regex::new(r"^([a-fA-F0-9]{2}:){1,}[a-fA-F0-9]{2}$").unwrap())
//!         .min(17.0)
//!         .max(17.0)
//!         .message("must have standard MAC format of form nn:nn:nn:nn:nn:nn"),
//! )
//! .unwrap();
//!
//! let mac = Validator::builder().typedef("mac").build();
//! assert!(mac.validate("12:13:dd:ee:ff:10").is_ok());
//! assert!(mac.validate("12:13").is_err());
//!
//! // Call sites can override inherited fields; the registry is untouched.
//! let short = Validator::builder().typedef("mac").min(8.0).max(8.0).build();
//! assert!(short.validate("12:13:ff").is_ok());
//! ```
//!
//! ## Custom predicates
//!
//! ```
//! use fieldcheck::{Kind, Validator};
//!
//! let odd = Validator::builder()
//!     .kind(Kind::Number)
//!     .min(5.0)
//!     .validator(|value| match value.as_number() {
//!         Some(n) if (n as i64) % 2 == 0 => Some("must be an odd number".to_string()),
//!         _ => None,
//!     })
//!     .build();
//!
//! assert!(odd.validate(7).is_ok());
//! let failure = odd.validate(2).unwrap_err();
//! assert_eq!(failure.message, "value must be >= 5 and must be an odd number");
//! ```

mod errors;
mod kinds;
mod message;
mod rules;
mod typedefs;
mod validator;
mod value;

pub use errors::*;
pub use kinds::*;
pub use rules::*;
pub use typedefs::*;
pub use validator::*;
pub use value::*;
