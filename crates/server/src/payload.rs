// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Request body and query string parsing.
//!
//! Parsing never fails: anything that cannot be read as a JSON object or a
//! URL-encoded form yields an empty field map, which the handlers then report
//! as missing fields.

use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use serde_json::Value;
use tracing::debug;

use trk_core::{Fields, Filter};

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Parses a request body into a field map based on its content type.
pub fn body_fields(headers: &HeaderMap, body: &[u8]) -> Fields {
    if body.is_empty() {
        return Fields::new();
    }

    let is_form = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with(FORM_CONTENT_TYPE));

    if is_form {
        return form_fields(body);
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(fields)) => fields,
        Ok(other) => {
            debug!("Ignoring non-object JSON body: {}", other);
            Fields::new()
        }
        Err(e) => {
            debug!("Ignoring unparseable body: {}", e);
            Fields::new()
        }
    }
}

/// Builds a filter from a raw query string. Every pair becomes a constraint.
pub fn query_filter(query: Option<&str>) -> Filter {
    let pairs = query.map(parse_pairs).unwrap_or_default();
    Filter::from_pairs(pairs.into_iter().map(|(k, v)| (k, Value::String(v))))
}

fn form_fields(body: &[u8]) -> Fields {
    let pairs = std::str::from_utf8(body).map(parse_pairs).unwrap_or_default();
    pairs
        .into_iter()
        .map(|(k, v)| (k, Value::String(v)))
        .collect()
}

fn parse_pairs(raw: &str) -> Vec<(String, String)> {
    serde_urlencoded::from_str(raw).unwrap_or_else(|e| {
        debug!("Ignoring malformed url-encoded data: {}", e);
        Vec::new()
    })
}

#[cfg(test)]
#[path = "payload_tests.rs"]
mod tests;
