// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::NewIssue;
use crate::timestamp;
use serde_json::json;
use yare::parameterized;

const CREATED: &str = "2026-01-02T03:04:05.678Z";

fn make_issue(id: &str, open: bool) -> Issue {
    let now = timestamp::parse_instant(CREATED).unwrap();
    let mut issue = Issue::create(
        id.to_string(),
        "apitest",
        NewIssue::new("Full Issue", "Full issue text", "Tester").assigned_to("Dev One"),
        now,
    );
    issue.open = open;
    issue
}

#[test]
fn empty_filter_matches_everything() {
    let filter = Filter::new();
    assert!(filter.is_empty());
    assert!(filter.matches(&make_issue("a", true)));
    assert!(filter.matches(&make_issue("b", false)));
}

#[parameterized(
    string_true_open = { json!("true"), true, true },
    string_true_closed = { json!("true"), false, false },
    upper_false_closed = { json!("FALSE"), false, true },
    native_true_open = { json!(true), true, true },
    native_false_open = { json!(false), true, false },
    garbage = { json!("yes"), true, false },
    empty = { json!(""), true, false },
)]
fn open_constraint(requested: Value, open: bool, expected: bool) {
    let filter = Filter::new().with("open", requested);
    assert_eq!(filter.matches(&make_issue("a", open)), expected);
}

#[parameterized(
    id_hit = { "_id", json!("a"), true },
    id_miss = { "_id", json!("b"), false },
    title_hit = { "issue_title", json!("Full Issue"), true },
    title_case_differs = { "issue_title", json!("full issue"), false },
    assignee_hit = { "assigned_to", json!("Dev One"), true },
    status_empty_hit = { "status_text", json!(""), true },
    status_miss = { "status_text", json!("QA"), false },
)]
fn text_constraint(key: &str, requested: Value, expected: bool) {
    let filter = Filter::new().with(key, requested);
    assert_eq!(filter.matches(&make_issue("a", true)), expected);
}

#[parameterized(
    unknown = { "priority" },
    project = { "project" },
    rust_name = { "title" },
)]
fn unknown_key_excludes(key: &str) {
    let filter = Filter::new().with(key, "anything");
    assert!(!filter.matches(&make_issue("a", true)));
}

#[parameterized(
    exact = { CREATED, true },
    other_offset = { "2026-01-02T05:04:05.678+02:00", true },
    extra_precision = { "2026-01-02T03:04:05.678900Z", true },
    naive_as_utc = { "2026-01-02T03:04:05.678", true },
    one_ms_later = { "2026-01-02T03:04:05.679Z", false },
    date_only = { "2026-01-02", false },
    unparseable = { "not a date", false },
)]
fn timestamp_constraint(requested: &str, expected: bool) {
    let filter = Filter::new().with("created_on", requested);
    assert_eq!(filter.matches(&make_issue("a", true)), expected);
}

#[test]
fn null_value_is_no_constraint() {
    let filter = Filter::new().with("issue_title", Value::Null);
    assert!(filter.matches(&make_issue("a", true)));
}

#[test]
fn constraints_are_combined_with_and() {
    let issue = make_issue("a", true);
    assert!(Filter::new().with("_id", "a").with("open", "true").matches(&issue));
    assert!(!Filter::new().with("_id", "a").with("open", "false").matches(&issue));
}

#[test]
fn apply_preserves_order() {
    let issues = vec![
        make_issue("a", true),
        make_issue("b", false),
        make_issue("c", true),
    ];
    let open = Filter::new().with("open", "true").apply(&issues);
    let ids: Vec<_> = open.iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn from_pairs_builds_constraints() {
    let filter = Filter::from_pairs(vec![("_id", json!("a")), ("open", json!("true"))]);
    assert!(!filter.is_empty());
    assert!(filter.matches(&make_issue("a", true)));
}
