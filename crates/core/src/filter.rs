// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Constraint sets for listing issues.
//!
//! A [`Filter`] is the parsed key/value criteria of a read request. Every
//! constraint must hold for an issue to match.

use serde_json::Value;

use crate::issue::{FieldValue, Issue, IssueField};
use crate::normalize::{normalize_flag, value_text};
use crate::timestamp::parse_instant;

/// Parsed key/value criteria from a read request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    constraints: Vec<(String, Value)>,
}

impl Filter {
    /// Creates an empty filter that matches every issue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from key/value pairs.
    pub fn from_pairs<I, K>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        Filter {
            constraints: pairs.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }

    /// Adds a constraint.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.constraints.push((key.into(), value.into()));
        self
    }

    /// Returns true if no constraints are configured.
    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    /// Check if an issue satisfies every constraint.
    pub fn matches(&self, issue: &Issue) -> bool {
        self.constraints
            .iter()
            .all(|(key, value)| constraint_matches(issue, key, value))
    }

    /// Returns the matching issues, preserving order.
    pub fn apply<'a, I>(&self, issues: I) -> Vec<Issue>
    where
        I: IntoIterator<Item = &'a Issue>,
    {
        issues
            .into_iter()
            .filter(|issue| self.matches(issue))
            .cloned()
            .collect()
    }
}

fn constraint_matches(issue: &Issue, key: &str, requested: &Value) -> bool {
    // A null value is an unset parameter, not a request to match null.
    if requested.is_null() {
        return true;
    }

    if key == IssueField::Open.key() {
        return normalize_flag(requested) == Value::Bool(issue.open);
    }

    let Some(field) = IssueField::from_key(key) else {
        return false;
    };

    match issue.field(field) {
        FieldValue::Timestamp(stored) => {
            parse_instant(&value_text(requested)).is_some_and(|wanted| wanted == stored)
        }
        FieldValue::Text(stored) => stored == value_text(requested),
        FieldValue::Flag(stored) => stored.to_string() == value_text(requested),
    }
}

#[cfg(test)]
#[path = "filter_tests.rs"]
mod tests;
