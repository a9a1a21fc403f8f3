// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for trk-core operations.

use thiserror::Error;

/// All possible errors that can occur in trk-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("required field(s) missing")]
    MissingFields,

    #[error("missing _id")]
    MissingId,

    #[error("no update field(s) sent")]
    NoUpdateFields,

    #[error("issue not found: {0}")]
    IssueNotFound(String),

    #[error("store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("id generation failed: {0}")]
    IdGeneration(String),

    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("corrupted data: {0}")]
    CorruptedData(String),
}

/// A specialized Result type for trk-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
