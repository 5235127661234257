// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Page controllers. Each one mounts by fetching the profile and then the collections keyed
//! by the user id, keeps them in memory for as long as it lives, and re-fetches after every
//! mutation rather than patching its copy.

pub mod accounts;
pub mod budgets;
pub mod categories;
pub mod dashboard;
pub mod loans;
pub mod profile;
pub mod roles;
pub mod transactions;
pub mod users;

use crate::client::ApiClient;
use crate::error::{ApiError, FormError};
use crate::models::User;
use crate::resources::users as users_api;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::error;

/// How long a success notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(3);

/// Shared flag checked before a response is applied. Cloning shares the flag.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Whether a fetch changed the view. `Discarded` means the token was cancelled while the
/// request was in flight and nothing was applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Applied,
    Discarded,
}

/// Failure of a draft-driven action: rejected locally, or by the server.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),
    #[error(transparent)]
    Api(#[from] ApiError),
}

#[derive(Debug, Clone)]
struct Notice {
    text: String,
    set_at: Instant,
}

#[derive(Debug, Clone, Default)]
pub struct ViewState {
    pub loading: bool,
    /// Dismissable banner text.
    pub error: Option<String>,
    success: Option<Notice>,
}

impl ViewState {
    pub fn set_success(&mut self, text: impl Into<String>) {
        self.set_success_at(text, Instant::now());
    }

    pub fn set_success_at(&mut self, text: impl Into<String>, now: Instant) {
        self.success = Some(Notice {
            text: text.into(),
            set_at: now,
        });
    }

    pub fn success(&self) -> Option<&str> {
        self.success_at(Instant::now())
    }

    /// The notice as seen at `now`; gone once [`NOTICE_TTL`] has elapsed.
    pub fn success_at(&self, now: Instant) -> Option<&str> {
        self.success
            .as_ref()
            .filter(|n| now.saturating_duration_since(n.set_at) < NOTICE_TTL)
            .map(|n| n.text.as_str())
    }

    pub fn dismiss_error(&mut self) {
        self.error = None;
    }

    fn fail(&mut self, err: &ApiError, generic: &str) {
        error!(error = %err, "{generic}");
        self.error = Some(err.banner(generic));
    }

    fn reject(&mut self, err: &FormError) {
        self.error = Some(err.to_string());
    }
}

/// Run one fetch under `state`. `Ok(None)` means the token was cancelled and the response
/// (or failure) was dropped without touching the state.
pub(crate) fn load<T>(
    state: &mut ViewState,
    cancel: &CancelToken,
    generic: &str,
    fetch: impl FnOnce() -> Result<T, ApiError>,
) -> Result<Option<T>, ApiError> {
    if cancel.is_cancelled() {
        return Ok(None);
    }
    let was_loading = state.loading;
    state.loading = true;
    let result = fetch();
    if cancel.is_cancelled() {
        state.loading = was_loading;
        return Ok(None);
    }
    state.loading = false;
    match result {
        Ok(v) => {
            state.error = None;
            Ok(Some(v))
        }
        Err(e) => {
            state.fail(&e, generic);
            Err(e)
        }
    }
}

/// Run a mutating call. The caller re-fetches afterwards.
pub(crate) fn mutate<T>(
    state: &mut ViewState,
    generic: &str,
    call: impl FnOnce() -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    state.loading = true;
    let result = call();
    state.loading = false;
    result.map_err(|e| {
        state.fail(&e, generic);
        e
    })
}

pub(crate) fn checked<T>(state: &mut ViewState, draft: Result<T, FormError>) -> Result<T, FormError> {
    draft.inspect_err(|e| state.reject(e))
}

/// Profile first; every user-scoped collection is keyed by its id.
pub(crate) fn load_profile(
    client: &ApiClient,
    state: &mut ViewState,
    cancel: &CancelToken,
) -> Result<Option<User>, ApiError> {
    load(state, cancel, "Failed to load your profile.", || {
        users_api::profile(client)
    })
}

pub(crate) fn require_user(user: &Option<User>) -> Result<i64, ApiError> {
    user.as_ref().map(|u| u.id).ok_or(ApiError::NotLoggedIn)
}

fn applied<T>(value: Option<T>, apply: impl FnOnce(T)) -> Outcome {
    match value {
        Some(v) => {
            apply(v);
            Outcome::Applied
        }
        None => Outcome::Discarded,
    }
}
