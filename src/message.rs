// Failure message composition

use crate::value::format_number;
use crate::{Check, Failure, Failures, Kind};

/// Composition order is fixed and independent of recording order.
const COMPOSE_ORDER: [Check; 7] = [
    Check::Required,
    Check::Min,
    Check::Max,
    Check::Regex,
    Check::Allowed,
    Check::ValidType,
    Check::Custom,
];

/// Build the diagnostic sentence for a failure set
///
/// One fragment per failed check, joined into a single sentence and prefixed
/// with the rule set's name. The resolved kind selects numeric vs. length
/// phrasing for the bound checks.
pub(crate) fn compose(name: &str, failures: &Failures, kind: Kind) -> String {
    let fragments: Vec<String> = COMPOSE_ORDER
        .iter()
        .filter_map(|check| failures.get(*check))
        .map(|failure| fragment(failure, kind))
        .collect();

    format!("{} {}", name, composite_sentence(&fragments))
}

fn fragment(failure: &Failure, kind: Kind) -> String {
    match failure {
        Failure::Required => "is required".to_string(),
        Failure::Min { limit } => {
            if kind == Kind::Number {
                format!("must be >= {}", format_number(*limit))
            } else {
                format!("must be at least of length {}", format_number(*limit))
            }
        }
        Failure::Max { limit } => {
            if kind == Kind::Number {
                format!("must be <= {}", format_number(*limit))
            } else {
                format!("must be at most of length {}", format_number(*limit))
            }
        }
        Failure::Regex { pattern } => format!("must match regular expression {}", pattern),
        Failure::Allowed { allowed } => {
            let list: Vec<String> = allowed.iter().map(|v| v.to_string()).collect();
            format!("must be one of {}", list.join(", "))
        }
        Failure::ValidType { expected } => match expected {
            Kind::Number => "must be a number".to_string(),
            Kind::String => "must be a string".to_string(),
            Kind::HexString => "must be a hex string".to_string(),
        },
        Failure::Custom { message } => message.clone(),
    }
}

/// Join fragments into one sentence: `"a"`, `"a and b"`, `"a, b and c"`.
pub(crate) fn composite_sentence(fragments: &[String]) -> String {
    match fragments {
        [] => String::new(),
        [only] => only.trim().to_string(),
        _ => {
            let (last, rest) = fragments.split_last().unwrap();
            let head: Vec<&str> = rest.iter().map(|s| s.trim()).collect();
            format!("{} and {}", head.join(", "), last.trim())
        }
    }
}
