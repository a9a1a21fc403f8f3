// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue identifier generation.

use crate::error::{Error, Result};

/// Number of random bytes in an issue ID (24 hex characters).
pub const ID_BYTES: usize = 12;

/// Generate a random issue ID.
pub fn generate_id() -> Result<String> {
    let mut bytes = [0u8; ID_BYTES];
    getrandom::fill(&mut bytes).map_err(|e| Error::IdGeneration(e.to_string()))?;
    Ok(hex::encode(bytes))
}

/// Generate an ID not yet taken, retrying while `exists` reports a collision.
pub fn generate_unique_id<F>(mut exists: F) -> Result<String>
where
    F: FnMut(&str) -> Result<bool>,
{
    loop {
        let id = generate_id()?;
        if !exists(&id)? {
            return Ok(id);
        }
    }
}

#[cfg(test)]
#[path = "id_tests.rs"]
mod tests;
