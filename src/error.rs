// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Every way a call to the finance API can fail. Callers never retry; the user re-runs the
/// action instead.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// 401/403. The stored session has already been cleared when this is returned.
    #[error("not authorized (HTTP {status}); run `finsync login` again")]
    Unauthorized { status: u16 },

    /// A 4xx other than 401/403. `message` is the server-provided text, if any.
    #[error("request rejected (HTTP {status}){}", .message.as_deref().map(|m| format!(": {m}")).unwrap_or_default())]
    Validation { status: u16, message: Option<String> },

    #[error("unexpected response (HTTP {status})")]
    Unexpected { status: u16, body: String },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("session store error: {0}")]
    Session(#[from] rusqlite::Error),

    #[error("not logged in; run `finsync login` first")]
    NotLoggedIn,
}

impl ApiError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. } | ApiError::NotLoggedIn)
    }

    /// Text for the dismissable banner: the server message for validation failures when it
    /// sent one, the caller's generic message otherwise.
    pub fn banner(&self, generic: &str) -> String {
        match self {
            ApiError::Validation {
                message: Some(m), ..
            } if !m.trim().is_empty() => m.clone(),
            ApiError::Unauthorized { .. } | ApiError::NotLoggedIn => self.to_string(),
            _ => generic.to_string(),
        }
    }
}

/// Required-field and input-shape failures raised by drafts before anything is sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{field}: {reason}")]
    Invalid { field: &'static str, reason: String },

    #[error("a budget already exists for this category and date range")]
    BudgetOverlap,
}
