// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{CancelToken, Outcome, SubmitError, ViewState, applied, checked, load, mutate};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::UserDraft;
use crate::models::User;
use crate::resources::users;

/// Admin user management.
pub struct UsersPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    users: Vec<User>,
}

impl<'a> UsersPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            users: Vec::new(),
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        self.refresh()
    }

    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load users.", || {
            users::list(client)
        })?;
        Ok(applied(fetched, |u| self.users = u))
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Creates when the draft has no id, updates otherwise.
    pub fn save(&mut self, draft: &UserDraft) -> Result<Outcome, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let client = self.client;
        match draft.id {
            Some(id) => {
                mutate(&mut self.state, "Failed to update user.", || {
                    users::update(client, id, &req)
                })?;
                self.state.set_success("User updated successfully.");
            }
            None => {
                mutate(&mut self.state, "Failed to create user.", || {
                    users::create(client, &req)
                })?;
                self.state.set_success("User created successfully.");
            }
        }
        Ok(self.refresh()?)
    }

    pub fn delete(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete user.", || {
            users::delete(client, id)
        })?;
        self.state.set_success("User deleted successfully.");
        self.refresh()
    }
}
