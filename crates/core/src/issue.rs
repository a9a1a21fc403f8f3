// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core issue types for the trk issue tracker.
//!
//! This module contains the stored [`Issue`] record, the validated
//! [`NewIssue`] creation payload, and the [`IssueField`] table through which
//! filters address record fields by their JSON key.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use crate::error::{Error, Result};
use crate::normalize::truthy_text;

/// Untyped field map parsed from a request body or query string.
pub type Fields = Map<String, Value>;

/// A tracked work item scoped to a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    /// Opaque identifier, 24 lowercase hex characters.
    #[serde(rename = "_id")]
    pub id: String,
    /// Project the issue belongs to. Implied by the route, never serialized.
    #[serde(skip)]
    pub project: String,
    /// Short description of the work.
    #[serde(rename = "issue_title")]
    pub title: String,
    /// Longer description providing context.
    #[serde(rename = "issue_text")]
    pub text: String,
    /// Who reported the issue.
    pub created_by: String,
    /// Person the issue is assigned to, empty if unassigned.
    pub assigned_to: String,
    /// Free-form status note, empty if unset.
    pub status_text: String,
    /// When the issue was created.
    #[serde(with = "crate::timestamp::millis")]
    pub created_on: DateTime<Utc>,
    /// When the issue was last modified.
    #[serde(with = "crate::timestamp::millis")]
    pub updated_on: DateTime<Utc>,
    /// Whether the issue is still open.
    pub open: bool,
}

impl Issue {
    /// Builds a freshly created, open issue.
    pub fn create(id: String, project: &str, new: NewIssue, now: DateTime<Utc>) -> Self {
        Issue {
            id,
            project: project.to_string(),
            title: new.title,
            text: new.text,
            created_by: new.created_by,
            assigned_to: new.assigned_to,
            status_text: new.status_text,
            created_on: now,
            updated_on: now,
            open: true,
        }
    }

    /// Reads a field through the field table.
    pub fn field(&self, field: IssueField) -> FieldValue<'_> {
        match field {
            IssueField::Id => FieldValue::Text(&self.id),
            IssueField::Title => FieldValue::Text(&self.title),
            IssueField::Text => FieldValue::Text(&self.text),
            IssueField::CreatedBy => FieldValue::Text(&self.created_by),
            IssueField::AssignedTo => FieldValue::Text(&self.assigned_to),
            IssueField::StatusText => FieldValue::Text(&self.status_text),
            IssueField::CreatedOn => FieldValue::Timestamp(self.created_on),
            IssueField::UpdatedOn => FieldValue::Timestamp(self.updated_on),
            IssueField::Open => FieldValue::Flag(self.open),
        }
    }
}

/// The fields of an [`Issue`], addressed by their JSON key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IssueField {
    Id,
    Title,
    Text,
    CreatedBy,
    AssignedTo,
    StatusText,
    CreatedOn,
    UpdatedOn,
    Open,
}

impl IssueField {
    /// Every field, in serialization order.
    pub const ALL: [IssueField; 9] = [
        IssueField::Id,
        IssueField::Title,
        IssueField::Text,
        IssueField::CreatedBy,
        IssueField::AssignedTo,
        IssueField::StatusText,
        IssueField::CreatedOn,
        IssueField::UpdatedOn,
        IssueField::Open,
    ];

    /// Returns the JSON key of the field.
    pub fn key(&self) -> &'static str {
        match self {
            IssueField::Id => "_id",
            IssueField::Title => "issue_title",
            IssueField::Text => "issue_text",
            IssueField::CreatedBy => "created_by",
            IssueField::AssignedTo => "assigned_to",
            IssueField::StatusText => "status_text",
            IssueField::CreatedOn => "created_on",
            IssueField::UpdatedOn => "updated_on",
            IssueField::Open => "open",
        }
    }

    /// Looks up a field by JSON key. Keys are case-sensitive.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Returns true if clients may change this field after creation.
    pub fn is_mutable(&self) -> bool {
        !matches!(
            self,
            IssueField::Id | IssueField::CreatedOn | IssueField::UpdatedOn
        )
    }
}

impl fmt::Display for IssueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// A borrowed view of one field's stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Timestamp(DateTime<Utc>),
    Flag(bool),
}

/// Validated payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewIssue {
    pub title: String,
    pub text: String,
    pub created_by: String,
    pub assigned_to: String,
    pub status_text: String,
}

impl NewIssue {
    /// Creates a payload with the required fields and no assignee or status.
    pub fn new(
        title: impl Into<String>,
        text: impl Into<String>,
        created_by: impl Into<String>,
    ) -> Self {
        NewIssue {
            title: title.into(),
            text: text.into(),
            created_by: created_by.into(),
            assigned_to: String::new(),
            status_text: String::new(),
        }
    }

    /// Sets the assignee.
    pub fn assigned_to(mut self, assignee: impl Into<String>) -> Self {
        self.assigned_to = assignee.into();
        self
    }

    /// Sets the status text.
    pub fn status_text(mut self, status: impl Into<String>) -> Self {
        self.status_text = status.into();
        self
    }

    /// Validates a raw creation payload.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingFields`] if `issue_title`, `issue_text` or
    /// `created_by` is absent or empty.
    pub fn from_fields(fields: &Fields) -> Result<Self> {
        let required = |field: IssueField| truthy_text(fields.get(field.key()));
        let optional = |field: IssueField| required(field).unwrap_or_default();

        let (Some(title), Some(text), Some(created_by)) = (
            required(IssueField::Title),
            required(IssueField::Text),
            required(IssueField::CreatedBy),
        ) else {
            return Err(Error::MissingFields);
        };

        Ok(NewIssue {
            title,
            text,
            created_by,
            assigned_to: optional(IssueField::AssignedTo),
            status_text: optional(IssueField::StatusText),
        })
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
