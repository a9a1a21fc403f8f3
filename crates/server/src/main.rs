// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! trk-server: HTTP API for tracking issues per project.
//!
//! Serves `/api/issues/{project}` with list, create, update and delete
//! operations over an in-memory or SQLite-backed issue store.

mod config;
mod env;
mod error;
mod payload;
mod reply;
mod routes;
mod server;
mod state;

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use trk_core::{open_store, StoreBackend};

use config::{Backend, Config, Overrides};
use state::AppState;

/// trk-server: Issue tracker HTTP API
#[derive(Parser, Debug)]
#[command(name = "trk-server")]
#[command(about = "HTTP API for tracking issues per project")]
struct Args {
    /// Configuration file (TOML). Falls back to TRK_CONFIG.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Address to bind the server to
    #[arg(short, long)]
    bind: Option<SocketAddr>,

    /// Storage backend
    #[arg(long, value_enum)]
    store: Option<Backend>,

    /// SQLite database file (sqlite backend only)
    #[arg(long)]
    db: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config_path = args.config.or_else(env::config_path);
    let config = Config::load_or_default(config_path.as_deref())?.with_overrides(Overrides {
        bind: args.bind,
        backend: args.store,
        db: args.db,
    });

    info!("Starting trk-server");
    if let Some(path) = &config_path {
        info!("  Config file: {}", path.display());
    }
    info!("  Bind address: {}", config.bind);

    serve(config).await?;
    Ok(())
}

/// Opens the configured store and serves requests until shutdown.
async fn serve(config: Config) -> error::Result<()> {
    let backend = config.store_backend();
    match &backend {
        StoreBackend::Memory => info!("  Store: memory"),
        StoreBackend::Sqlite(path) => info!("  Store: sqlite ({})", path.display()),
    }

    let store = open_store(&backend)?;
    server::run(config.bind, AppState::new(store)).await
}

fn setup_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
