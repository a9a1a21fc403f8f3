// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::timestamp;
use serde_json::json;
use yare::parameterized;

fn fields(value: Value) -> Fields {
    match value {
        Value::Object(map) => map,
        _ => Fields::new(),
    }
}

fn sample_issue() -> Issue {
    let now = timestamp::parse_instant("2026-01-02T03:04:05.678Z").unwrap();
    Issue::create(
        "0123456789abcdef01234567".to_string(),
        "apitest",
        NewIssue::new("Full Issue", "Full issue text", "Tester")
            .assigned_to("Dev One")
            .status_text("In QA"),
        now,
    )
}

#[test]
fn create_opens_issue_with_equal_timestamps() {
    let issue = sample_issue();
    assert!(issue.open);
    assert_eq!(issue.created_on, issue.updated_on);
    assert_eq!(issue.project, "apitest");
    assert_eq!(issue.assigned_to, "Dev One");
}

#[test]
fn serializes_with_wire_keys() {
    let value = serde_json::to_value(sample_issue()).unwrap();
    assert_eq!(
        value,
        json!({
            "_id": "0123456789abcdef01234567",
            "issue_title": "Full Issue",
            "issue_text": "Full issue text",
            "created_by": "Tester",
            "assigned_to": "Dev One",
            "status_text": "In QA",
            "created_on": "2026-01-02T03:04:05.678Z",
            "updated_on": "2026-01-02T03:04:05.678Z",
            "open": true,
        })
    );
}

#[test]
fn project_is_not_serialized() {
    let text = serde_json::to_string(&sample_issue()).unwrap();
    assert!(!text.contains("apitest"));
}

#[test]
fn deserializes_wire_form() {
    let text = serde_json::to_string(&sample_issue()).unwrap();
    let issue: Issue = serde_json::from_str(&text).unwrap();
    assert_eq!(issue.id, "0123456789abcdef01234567");
    assert_eq!(issue.project, "");
    assert_eq!(issue.created_on, sample_issue().created_on);
}

#[test]
fn field_keys_round_trip() {
    for field in IssueField::ALL {
        assert_eq!(IssueField::from_key(field.key()), Some(field));
    }
}

#[parameterized(
    unknown = { "priority" },
    project = { "project" },
    wrong_case = { "Open" },
    rust_name = { "title" },
)]
fn from_key_rejects(key: &str) {
    assert_eq!(IssueField::from_key(key), None);
}

#[parameterized(
    id = { IssueField::Id, false },
    created_on = { IssueField::CreatedOn, false },
    updated_on = { IssueField::UpdatedOn, false },
    title = { IssueField::Title, true },
    assigned_to = { IssueField::AssignedTo, true },
    open = { IssueField::Open, true },
)]
fn field_mutability(field: IssueField, mutable: bool) {
    assert_eq!(field.is_mutable(), mutable);
}

#[test]
fn field_values_through_table() {
    let issue = sample_issue();
    assert_eq!(issue.field(IssueField::Title), FieldValue::Text("Full Issue"));
    assert_eq!(issue.field(IssueField::Open), FieldValue::Flag(true));
    assert_eq!(
        issue.field(IssueField::CreatedOn),
        FieldValue::Timestamp(issue.created_on)
    );
}

#[test]
fn new_issue_from_full_payload() {
    let new = NewIssue::from_fields(&fields(json!({
        "issue_title": "Full Issue",
        "issue_text": "Full issue text",
        "created_by": "Tester",
        "assigned_to": "Dev One",
        "status_text": "In QA",
    })))
    .unwrap();
    assert_eq!(
        new,
        NewIssue::new("Full Issue", "Full issue text", "Tester")
            .assigned_to("Dev One")
            .status_text("In QA")
    );
}

#[test]
fn new_issue_optional_fields_default_empty() {
    let new = NewIssue::from_fields(&fields(json!({
        "issue_title": "Required Only",
        "issue_text": "Just the essentials",
        "created_by": "Tester",
        "assigned_to": "",
    })))
    .unwrap();
    assert_eq!(new.assigned_to, "");
    assert_eq!(new.status_text, "");
}

#[parameterized(
    only_title = { json!({"issue_title": "x"}) },
    empty_text = { json!({"issue_title": "x", "issue_text": "", "created_by": "me"}) },
    null_creator = { json!({"issue_title": "x", "issue_text": "t", "created_by": null}) },
    false_title = { json!({"issue_title": false, "issue_text": "t", "created_by": "me"}) },
    nothing = { json!({}) },
)]
fn new_issue_missing_fields(payload: Value) {
    let err = NewIssue::from_fields(&fields(payload)).unwrap_err();
    assert!(matches!(err, Error::MissingFields));
}

#[test]
fn new_issue_coerces_numbers() {
    let new = NewIssue::from_fields(&fields(json!({
        "issue_title": 404,
        "issue_text": "t",
        "created_by": "me",
    })))
    .unwrap();
    assert_eq!(new.title, "404");
}
