//! Field-level checks applied to request bodies before they reach storage.
//!
//! A rule set is an ordered list of independent [`Rule`]s. [`validate`] runs
//! every rule against the body and collects one [`ErrorDetail`] per failing
//! rule; nothing short-circuits.

pub mod beneficio;

use serde_json::Value;

use crate::error::ErrorDetail;

pub use beneficio::{beneficio_rules, sanitize_beneficio, validate_beneficio};

/// A predicate over one body field, with the message reported when it fails.
#[derive(Clone, Copy)]
pub struct Rule {
    /// Dotted path into the body, e.g. `endereco.cidade`
    pub field: &'static str,
    pub check: fn(&str) -> bool,
    pub message: &'static str,
}

impl Rule {
    pub const fn new(field: &'static str, check: fn(&str) -> bool, message: &'static str) -> Self {
        Self { field, check, message }
    }

    pub fn apply(&self, body: &Value) -> Option<ErrorDetail> {
        let value = lookup(body, self.field);
        let text = value.map(coerce_to_string).unwrap_or_default();
        if (self.check)(&text) {
            None
        } else {
            Some(ErrorDetail::body(
                self.field,
                value.cloned().unwrap_or(Value::Null),
                self.message,
            ))
        }
    }
}

/// Run every rule in order and collect all failures.
pub fn validate(rules: &[Rule], body: &Value) -> Vec<ErrorDetail> {
    rules.iter().filter_map(|rule| rule.apply(body)).collect()
}

fn lookup<'a>(body: &'a Value, path: &str) -> Option<&'a Value> {
    path.split('.').try_fold(body, |current, key| current.get(key))
}

/// Text form of a body value as the checks see it. Missing and null become "".
pub fn coerce_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

pub fn is_not_empty(text: &str) -> bool {
    !text.trim().is_empty()
}

/// `[+-]?` then optional `digits.` then at least one digit
pub fn is_numeric(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let fraction = match unsigned.split_once('.') {
        Some((whole, fraction)) => {
            if !whole.chars().all(|c| c.is_ascii_digit()) {
                return false;
            }
            fraction
        }
        None => unsigned,
    };
    !fraction.is_empty() && fraction.chars().all(|c| c.is_ascii_digit())
}

/// Exactly `dddd-dd-dd`; calendar validity is not checked
pub fn is_date_pattern(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
