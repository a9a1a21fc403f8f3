// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Partial updates of issue records.
//!
//! An [`UpdateSet`] is the filtered, normalized subset of a write request's
//! fields that will actually be applied. Blank values are treated as "not
//! given"; only `open` may legitimately carry `false`.

use chrono::{DateTime, Duration, Utc};

use crate::error::{Error, Result};
use crate::issue::{Fields, Issue, IssueField};
use crate::normalize::{as_flag, truthy_text, value_text};

/// Extracts the target identifier of a PUT or DELETE payload.
///
/// # Errors
///
/// Returns [`Error::MissingId`] if `_id` is absent or empty.
pub fn target_id(fields: &Fields) -> Result<String> {
    truthy_text(fields.get(IssueField::Id.key())).ok_or(Error::MissingId)
}

/// Field changes to merge into an existing issue.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateSet {
    pub title: Option<String>,
    pub text: Option<String>,
    pub created_by: Option<String>,
    pub assigned_to: Option<String>,
    pub status_text: Option<String>,
    pub open: Option<bool>,
}

impl UpdateSet {
    /// Builds the update set from a raw payload.
    ///
    /// `_id`, unknown keys, immutable fields, empty strings and nulls are
    /// dropped. `open` is kept only if it normalizes to a boolean.
    pub fn from_fields(fields: &Fields) -> Self {
        let mut set = UpdateSet::default();

        for (key, value) in fields {
            let Some(field) = IssueField::from_key(key) else {
                continue;
            };
            if !field.is_mutable() || value.is_null() {
                continue;
            }
            if value.as_str().is_some_and(str::is_empty) {
                continue;
            }

            let text = || Some(value_text(value));
            match field {
                IssueField::Title => set.title = text(),
                IssueField::Text => set.text = text(),
                IssueField::CreatedBy => set.created_by = text(),
                IssueField::AssignedTo => set.assigned_to = text(),
                IssueField::StatusText => set.status_text = text(),
                IssueField::Open => set.open = as_flag(value),
                IssueField::Id | IssueField::CreatedOn | IssueField::UpdatedOn => {}
            }
        }

        set
    }

    /// Sets the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets the open flag.
    #[must_use]
    pub fn open(mut self, open: bool) -> Self {
        self.open = Some(open);
        self
    }

    /// Returns true if there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.text.is_none()
            && self.created_by.is_none()
            && self.assigned_to.is_none()
            && self.status_text.is_none()
            && self.open.is_none()
    }

    /// Merges the changes into an issue and refreshes `updated_on`.
    ///
    /// `id`, `project` and `created_on` are never touched. `updated_on`
    /// becomes `now`, or one millisecond past its previous value if `now`
    /// is not later.
    pub fn apply_to(&self, issue: &mut Issue, now: DateTime<Utc>) {
        if let Some(title) = &self.title {
            issue.title.clone_from(title);
        }
        if let Some(text) = &self.text {
            issue.text.clone_from(text);
        }
        if let Some(created_by) = &self.created_by {
            issue.created_by.clone_from(created_by);
        }
        if let Some(assigned_to) = &self.assigned_to {
            issue.assigned_to.clone_from(assigned_to);
        }
        if let Some(status_text) = &self.status_text {
            issue.status_text.clone_from(status_text);
        }
        if let Some(open) = self.open {
            issue.open = open;
        }
        issue.updated_on = now.max(issue.updated_on + Duration::milliseconds(1));
    }
}

#[cfg(test)]
#[path = "update_tests.rs"]
mod tests;
