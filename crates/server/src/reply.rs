// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON reply bodies.
//!
//! Every reply is sent with status 200; success and failure differ only in
//! body shape.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use trk_core::Issue;

pub const REQUIRED_FIELDS_MISSING: &str = "required field(s) missing";
pub const MISSING_ID: &str = "missing _id";
pub const NO_UPDATE_FIELDS: &str = "no update field(s) sent";
pub const COULD_NOT_CREATE: &str = "could not create";
pub const COULD_NOT_UPDATE: &str = "could not update";
pub const COULD_NOT_DELETE: &str = "could not delete";
pub const UPDATED: &str = "successfully updated";
pub const DELETED: &str = "successfully deleted";

/// Body of an `/api/issues/{project}` response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Reply {
    /// Listing result.
    Issues(Vec<Issue>),
    /// A newly created issue.
    Created(Issue),
    /// Acknowledgement of an update or delete.
    Done {
        result: &'static str,
        #[serde(rename = "_id")]
        id: String,
    },
    /// A domain-level failure.
    Failed {
        error: &'static str,
        #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
        id: Option<String>,
    },
}

impl Reply {
    pub fn done(result: &'static str, id: String) -> Self {
        Reply::Done { result, id }
    }

    pub fn failed(error: &'static str) -> Self {
        Reply::Failed { error, id: None }
    }

    pub fn failed_for(error: &'static str, id: String) -> Self {
        Reply::Failed {
            error,
            id: Some(id),
        }
    }
}

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
