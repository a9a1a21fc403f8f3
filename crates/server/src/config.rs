// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Server configuration.
//!
//! Settings come from three layers, later ones winning:
//! - built-in defaults (bind `127.0.0.1:3000`, in-memory store)
//! - an optional TOML file (`--config` or `TRK_CONFIG`)
//! - command-line flags
//!
//! ```toml
//! bind = "0.0.0.0:3000"
//!
//! [store]
//! backend = "sqlite"
//! path = "/var/lib/trk/issues.db"
//! ```

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use trk_core::StoreBackend;

use crate::env;
use crate::error::{Error, Result};

const APP_DIR_NAME: &str = "trk";
const DB_FILE_NAME: &str = "issues.db";

/// Storage backend selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Issues live in process memory and vanish on exit.
    #[default]
    Memory,
    /// Issues are persisted to an SQLite database file.
    Sqlite,
}

/// Complete server configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub bind: SocketAddr,
    /// Storage settings.
    pub store: StoreConfig,
}

/// The `[store]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: Backend,
    /// Database file for the sqlite backend. Defaults to the state directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Values given on the command line, each overriding the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    pub bind: Option<SocketAddr>,
    pub backend: Option<Backend>,
    pub db: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            store: StoreConfig::default(),
        }
    }
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        Self::parse(&content)
    }

    /// Parses configuration from TOML text. Missing keys take their defaults.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))
    }

    /// Loads the file if one is given, otherwise starts from defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Applies command-line overrides.
    #[must_use]
    pub fn with_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(bind) = overrides.bind {
            self.bind = bind;
        }
        if let Some(backend) = overrides.backend {
            self.store.backend = backend;
        }
        if let Some(db) = overrides.db {
            self.store.path = Some(db);
        }
        self
    }

    /// Resolves the storage backend to open.
    pub fn store_backend(&self) -> StoreBackend {
        match self.store.backend {
            Backend::Memory => StoreBackend::Memory,
            Backend::Sqlite => {
                StoreBackend::Sqlite(self.store.path.clone().unwrap_or_else(default_db_path))
            }
        }
    }
}

/// Returns the default SQLite database path from the environment.
pub fn default_db_path() -> PathBuf {
    db_path_from(
        env::state_dir(),
        env::xdg_state_home(),
        dirs::state_dir().or_else(dirs::data_local_dir),
    )
}

/// Picks the database path: `TRK_STATE_DIR`, then `XDG_STATE_HOME/trk`, then
/// the platform directory, then the working directory.
fn db_path_from(
    state_dir: Option<PathBuf>,
    xdg_state_home: Option<PathBuf>,
    platform_dir: Option<PathBuf>,
) -> PathBuf {
    let dir = state_dir
        .or_else(|| xdg_state_home.map(|p| p.join(APP_DIR_NAME)))
        .or_else(|| platform_dir.map(|p| p.join(APP_DIR_NAME)))
        .unwrap_or_default();
    dir.join(DB_FILE_NAME)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
