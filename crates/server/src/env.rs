// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access.

use std::path::PathBuf;

/// Environment variable names read by the server.
pub mod vars {
    pub const TRK_CONFIG: &str = "TRK_CONFIG";
    pub const TRK_STATE_DIR: &str = "TRK_STATE_DIR";
    pub const XDG_STATE_HOME: &str = "XDG_STATE_HOME";
}

/// Returns the value of `TRK_CONFIG` if set.
pub fn config_path() -> Option<PathBuf> {
    std::env::var(vars::TRK_CONFIG).ok().map(PathBuf::from)
}

/// Returns the value of `TRK_STATE_DIR` if set.
pub fn state_dir() -> Option<PathBuf> {
    std::env::var(vars::TRK_STATE_DIR).ok().map(PathBuf::from)
}

/// Returns the value of `XDG_STATE_HOME` if set.
pub fn xdg_state_home() -> Option<PathBuf> {
    std::env::var(vars::XDG_STATE_HOME).ok().map(PathBuf::from)
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
