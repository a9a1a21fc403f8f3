// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use crate::error::{Error, Result};
use crate::filter::Filter;
use crate::id::generate_unique_id;
use crate::issue::{Issue, NewIssue};
use crate::store::IssueStore;
use crate::timestamp;
use crate::update::UpdateSet;

type Projects = HashMap<String, Vec<Issue>>;

/// Issues kept in insertion order per project for the process lifetime.
///
/// A project's collection is created on first access, reads included, so
/// listing an unknown project registers it and returns an empty list.
#[derive(Debug, Default)]
pub struct MemoryStore {
    projects: Mutex<Projects>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the names of all registered projects, sorted.
    pub fn projects(&self) -> Result<Vec<String>> {
        let mut names: Vec<String> = self.lock()?.keys().cloned().collect();
        names.sort();
        Ok(names)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Projects>> {
        self.projects
            .lock()
            .map_err(|_| Error::StoreUnavailable("memory store lock poisoned".to_string()))
    }
}

impl IssueStore for MemoryStore {
    fn find(&self, project: &str, filter: &Filter) -> Result<Vec<Issue>> {
        let mut projects = self.lock()?;
        let issues = projects.entry(project.to_string()).or_default();
        Ok(filter.apply(issues.iter()))
    }

    fn insert(&self, project: &str, new: NewIssue) -> Result<Issue> {
        let mut projects = self.lock()?;
        let issues = projects.entry(project.to_string()).or_default();

        let id = generate_unique_id(|candidate| Ok(issues.iter().any(|i| i.id == candidate)))?;
        let issue = Issue::create(id, project, new, timestamp::now());
        issues.push(issue.clone());
        Ok(issue)
    }

    fn update_by_id(&self, project: &str, id: &str, changes: &UpdateSet) -> Result<()> {
        if changes.is_empty() {
            return Err(Error::NoUpdateFields);
        }

        let mut projects = self.lock()?;
        let issue = projects
            .entry(project.to_string())
            .or_default()
            .iter_mut()
            .find(|issue| issue.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;

        changes.apply_to(issue, timestamp::now());
        Ok(())
    }

    fn delete_by_id(&self, project: &str, id: &str) -> Result<()> {
        let mut projects = self.lock()?;
        let issues = projects.entry(project.to_string()).or_default();

        let index = issues
            .iter()
            .position(|issue| issue.id == id)
            .ok_or_else(|| Error::IssueNotFound(id.to_string()))?;
        issues.remove(index);
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
