// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Normalization of loosely typed request values.
//!
//! Query strings and request bodies arrive as untyped JSON values. Everything
//! that coerces them (boolean flags, string forms, presence checks) lives here
//! so the filter matcher and update applier share one set of rules.

use serde_json::Value;

/// Normalizes a boolean-like value.
///
/// | input                         | output            |
/// |-------------------------------|-------------------|
/// | `"true"` (any letter case)    | `true`            |
/// | `"false"` (any letter case)   | `false`           |
/// | native boolean                | unchanged         |
/// | anything else                 | unchanged         |
pub fn normalize_flag(value: &Value) -> Value {
    match value {
        Value::String(s) if s.eq_ignore_ascii_case("true") => Value::Bool(true),
        Value::String(s) if s.eq_ignore_ascii_case("false") => Value::Bool(false),
        other => other.clone(),
    }
}

/// Returns the boolean a value normalizes to, if any.
pub fn as_flag(value: &Value) -> Option<bool> {
    match normalize_flag(value) {
        Value::Bool(b) => Some(b),
        _ => None,
    }
}

/// Returns the string form of a value.
///
/// Strings are returned verbatim, arrays are joined with commas and null
/// renders as empty. Numbers, booleans and objects use their JSON text.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Array(items) => items.iter().map(value_text).collect::<Vec<_>>().join(","),
        other => other.to_string(),
    }
}

/// Returns the string form of a present, truthy value.
///
/// Absent values, `null`, `false`, zero and anything whose string form is
/// empty count as "not given".
pub fn truthy_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null | Value::Bool(false) => None,
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::EPSILON) => None,
        other => {
            let text = value_text(other);
            (!text.is_empty()).then_some(text)
        }
    }
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
