// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared handler state.

use std::sync::Arc;

use trk_core::IssueStore;

/// State handed to every request handler.
///
/// Cloning is cheap; all clones share one store.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn IssueStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn IssueStore>) -> Self {
        AppState { store }
    }

    /// The issue store requests operate on.
    pub fn store(&self) -> &dyn IssueStore {
        self.store.as_ref()
    }
}
