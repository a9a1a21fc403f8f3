// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trk-core: Shared library for the trk issue tracker API
//!
//! This crate provides the issue record, the filter matcher and update
//! applier used by the request handlers, and the [`IssueStore`] contract with
//! its in-memory and SQLite backends.

pub mod error;
pub mod filter;
pub mod id;
pub mod issue;
pub mod normalize;
pub mod store;
pub mod timestamp;
pub mod update;

pub use error::{Error, Result};
pub use filter::Filter;
pub use issue::{Fields, Issue, IssueField, NewIssue};
pub use store::{open_store, IssueStore, MemoryStore, SqliteStore, StoreBackend};
pub use update::{target_id, UpdateSet};
