// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP routes for `/api/issues/{project}`.
//!
//! One handler per verb, each programmed against the `IssueStore` trait so
//! the same handlers serve every backend. Failures never escape as transport errors;
//! they are folded into a [`Reply`] here.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::HeaderMap;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

use trk_core::{target_id, Error, NewIssue, UpdateSet};

use crate::payload::{body_fields, query_filter};
use crate::reply::{self, Reply};
use crate::state::AppState;

/// Route of the issue collection of one project.
pub const ISSUES_ROUTE: &str = "/api/issues/:project";

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            ISSUES_ROUTE,
            get(list_issues)
                .post(create_issue)
                .put(update_issue)
                .delete(delete_issue),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// GET: lists the project's issues matching the query string.
///
/// Read failures are logged and answered with an empty list.
async fn list_issues(
    State(state): State<AppState>,
    Path(project): Path<String>,
    RawQuery(query): RawQuery,
) -> Reply {
    let filter = query_filter(query.as_deref());

    match state.store().find(&project, &filter) {
        Ok(issues) => {
            debug!("Listed {} issues in {}", issues.len(), project);
            Reply::Issues(issues)
        }
        Err(e) => {
            warn!("Failed to list issues in {}: {}", project, e);
            Reply::Issues(Vec::new())
        }
    }
}

/// POST: creates an issue.
async fn create_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let fields = body_fields(&headers, &body);

    let new = match NewIssue::from_fields(&fields) {
        Ok(new) => new,
        Err(_) => return Reply::failed(reply::REQUIRED_FIELDS_MISSING),
    };

    match state.store().insert(&project, new) {
        Ok(issue) => {
            debug!("Created issue {} in {}", issue.id, project);
            Reply::Created(issue)
        }
        Err(e) => {
            warn!("Failed to create issue in {}: {}", project, e);
            Reply::failed(reply::COULD_NOT_CREATE)
        }
    }
}

/// PUT: applies a partial update.
async fn update_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let fields = body_fields(&headers, &body);

    let Ok(id) = target_id(&fields) else {
        return Reply::failed(reply::MISSING_ID);
    };
    let changes = UpdateSet::from_fields(&fields);

    match state.store().update_by_id(&project, &id, &changes) {
        Ok(()) => {
            debug!("Updated issue {} in {}", id, project);
            Reply::done(reply::UPDATED, id)
        }
        Err(Error::NoUpdateFields) => Reply::failed_for(reply::NO_UPDATE_FIELDS, id),
        Err(e) => {
            log_write_failure("update", &project, &e);
            Reply::failed_for(reply::COULD_NOT_UPDATE, id)
        }
    }
}

/// DELETE: removes an issue.
async fn delete_issue(
    State(state): State<AppState>,
    Path(project): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Reply {
    let fields = body_fields(&headers, &body);

    let Ok(id) = target_id(&fields) else {
        return Reply::failed(reply::MISSING_ID);
    };

    match state.store().delete_by_id(&project, &id) {
        Ok(()) => {
            debug!("Deleted issue {} in {}", id, project);
            Reply::done(reply::DELETED, id)
        }
        Err(e) => {
            log_write_failure("delete", &project, &e);
            Reply::failed_for(reply::COULD_NOT_DELETE, id)
        }
    }
}

fn log_write_failure(action: &str, project: &str, err: &Error) {
    match err {
        Error::IssueNotFound(_) => debug!("Cannot {} in {}: {}", action, project, err),
        _ => warn!("Failed to {} issue in {}: {}", action, project, err),
    }
}

#[cfg(test)]
#[path = "routes_tests.rs"]
mod tests;
