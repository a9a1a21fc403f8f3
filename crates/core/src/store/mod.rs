// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue storage.
//!
//! The [`IssueStore`] trait is the contract the request handlers program
//! against. Two interchangeable backends implement it:
//!
//! - [`MemoryStore`]: per-project vectors held for the process lifetime
//! - [`SqliteStore`]: a durable SQLite database file
//!
//! Every lookup is scoped by `(project, id)`; identifiers are only assumed to
//! be unique within a project.

use std::path::PathBuf;
use std::sync::Arc;

use crate::error::Result;
use crate::filter::Filter;
use crate::issue::{Issue, NewIssue};
use crate::update::UpdateSet;

mod memory;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::{SqliteStore, SCHEMA};

/// Storage contract shared by all backends.
pub trait IssueStore: Send + Sync {
    /// Returns the project's issues matching `filter`, in creation order.
    fn find(&self, project: &str, filter: &Filter) -> Result<Vec<Issue>>;

    /// Stores a new open issue and returns it.
    fn insert(&self, project: &str, new: NewIssue) -> Result<Issue>;

    /// Applies `changes` to the issue with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::NoUpdateFields`] if `changes` is empty (checked
    /// first), or [`crate::Error::IssueNotFound`] if the project has no such
    /// issue. Nothing is modified in either case.
    fn update_by_id(&self, project: &str, id: &str, changes: &UpdateSet) -> Result<()>;

    /// Removes the issue with the given ID.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::IssueNotFound`] if the project has no such issue.
    fn delete_by_id(&self, project: &str, id: &str) -> Result<()>;
}

/// Which backend to open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    Memory,
    Sqlite(PathBuf),
}

/// Opens the configured backend.
pub fn open_store(backend: &StoreBackend) -> Result<Arc<dyn IssueStore>> {
    match backend {
        StoreBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StoreBackend::Sqlite(path) => Ok(Arc::new(SqliteStore::open(path)?)),
    }
}

#[cfg(test)]
#[path = "contract_tests.rs"]
mod tests;
