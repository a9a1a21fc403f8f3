// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! SQLite-backed storage backend.
//!
//! Issues of all projects share one table. Rows are keyed by
//! `(project, id)` and ordered by an autoincrement sequence so listings come
//! back in creation order.

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::id::generate_unique_id;
use crate::issue::{Issue, NewIssue};
use crate::store::IssueStore;
use crate::timestamp;
use crate::update::UpdateSet;

/// SQL schema for the issue store.
pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS issues (
    seq INTEGER PRIMARY KEY AUTOINCREMENT,
    project TEXT NOT NULL,
    id TEXT NOT NULL,
    issue_title TEXT NOT NULL,
    issue_text TEXT NOT NULL,
    created_by TEXT NOT NULL,
    assigned_to TEXT NOT NULL DEFAULT '',
    status_text TEXT NOT NULL DEFAULT '',
    created_on TEXT NOT NULL,
    updated_on TEXT NOT NULL,
    open INTEGER NOT NULL DEFAULT 1,
    UNIQUE (project, id)
);

CREATE INDEX IF NOT EXISTS idx_issues_project ON issues(project, seq);
"#;

const SELECT_COLUMNS: &str = "SELECT project, id, issue_title, issue_text, created_by,
        assigned_to, status_text, created_on, updated_on, open
     FROM issues";

/// Parse an RFC3339 timestamp from the database.
fn parse_timestamp(
    value: &str,
    column: &str,
) -> std::result::Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| {
            rusqlite::Error::FromSqlConversionFailure(
                0,
                rusqlite::types::Type::Text,
                Box::new(Error::CorruptedData(format!(
                    "invalid timestamp '{value}' in column '{column}'"
                ))),
            )
        })
}

fn issue_from_row(row: &Row<'_>) -> std::result::Result<Issue, rusqlite::Error> {
    let created_str: String = row.get(7)?;
    let updated_str: String = row.get(8)?;

    Ok(Issue {
        project: row.get(0)?,
        id: row.get(1)?,
        title: row.get(2)?,
        text: row.get(3)?,
        created_by: row.get(4)?,
        assigned_to: row.get(5)?,
        status_text: row.get(6)?,
        created_on: parse_timestamp(&created_str, "created_on")?,
        updated_on: parse_timestamp(&updated_str, "updated_on")?,
        open: row.get(9)?,
    })
}

fn get_issue(conn: &Connection, project: &str, id: &str) -> Result<Option<Issue>> {
    let sql = format!("{SELECT_COLUMNS} WHERE project = ?1 AND id = ?2");
    let issue = conn
        .query_row(&sql, params![project, id], issue_from_row)
        .optional()?;
    Ok(issue)
}

fn issue_exists(conn: &Connection, project: &str, id: &str) -> Result<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM issues WHERE project = ?1 AND id = ?2",
        params![project, id],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}

/// Issue store persisted to an SQLite database.
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// Open a database at the given path, creating the file and schema if needed.
    pub fn open(path: &Path) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let conn = Connection::open(path)?;
        conn.execute_batch(
            "PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )?;
        conn.execute_batch(SCHEMA)?;

        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    /// Open an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch(SCHEMA)?;
        Ok(SqliteStore {
            conn: Mutex::new(conn),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|_| Error::StoreUnavailable("sqlite connection lock poisoned".to_string()))
    }
}

impl IssueStore for SqliteStore {
    fn find(&self, project: &str, filter: &Filter) -> Result<Vec<Issue>> {
        let conn = self.lock()?;
        let sql = format!("{SELECT_COLUMNS} WHERE project = ?1 ORDER BY seq");
        let mut stmt = conn.prepare(&sql)?;

        let issues = stmt
            .query_map(params![project], issue_from_row)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(issues
            .into_iter()
            .filter(|issue| filter.matches(issue))
            .collect())
    }

    fn insert(&self, project: &str, new: NewIssue) -> Result<Issue> {
        let conn = self.lock()?;

        let id = generate_unique_id(|candidate| issue_exists(&conn, project, candidate))?;
        let issue = Issue::create(id, project, new, timestamp::now());

        conn.execute(
            "INSERT INTO issues (project, id, issue_title, issue_text, created_by,
             assigned_to, status_text, created_on, updated_on, open)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
            params![
                issue.project,
                issue.id,
                issue.title,
                issue.text,
                issue.created_by,
                issue.assigned_to,
                issue.status_text,
                timestamp::format(&issue.created_on),
                timestamp::format(&issue.updated_on),
                issue.open,
            ],
        )?;
        Ok(issue)
    }

    fn update_by_id(&self, project: &str, id: &str, changes: &UpdateSet) -> Result<()> {
        if changes.is_empty() {
            return Err(Error::NoUpdateFields);
        }

        let mut conn = self.lock()?;
        let tx = conn.transaction()?;

        let mut issue =
            get_issue(&tx, project, id)?.ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        changes.apply_to(&mut issue, timestamp::now());

        tx.execute(
            "UPDATE issues SET issue_title = ?1, issue_text = ?2, created_by = ?3,
             assigned_to = ?4, status_text = ?5, updated_on = ?6, open = ?7
             WHERE project = ?8 AND id = ?9",
            params![
                issue.title,
                issue.text,
                issue.created_by,
                issue.assigned_to,
                issue.status_text,
                timestamp::format(&issue.updated_on),
                issue.open,
                project,
                id,
            ],
        )?;
        tx.commit()?;
        Ok(())
    }

    fn delete_by_id(&self, project: &str, id: &str) -> Result<()> {
        let conn = self.lock()?;
        let affected = conn.execute(
            "DELETE FROM issues WHERE project = ?1 AND id = ?2",
            params![project, id],
        )?;

        if affected == 0 {
            return Err(Error::IssueNotFound(id.to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "sqlite_tests.rs"]
mod tests;
