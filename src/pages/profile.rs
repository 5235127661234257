// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{
    CancelToken, Outcome, SubmitError, ViewState, applied, checked, load_profile, mutate,
    require_user,
};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::ProfileDraft;
use crate::models::User;
use crate::resources::users;
use tracing::info;

pub struct ProfilePage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
}

impl<'a> ProfilePage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let fetched = load_profile(self.client, &mut self.state, &self.cancel)?;
        Ok(applied(fetched, |u| self.user = Some(u)))
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Draft prefilled with the loaded profile.
    pub fn draft(&self) -> Option<ProfileDraft> {
        self.user.as_ref().map(ProfileDraft::from_user)
    }

    pub fn update(&mut self, draft: &ProfileDraft) -> Result<Outcome, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let client = self.client;
        mutate(&mut self.state, "Failed to update profile.", || {
            users::update_profile(client, &req)
        })?;
        self.state.set_success("Profile updated successfully.");
        Ok(self.mount()?)
    }

    /// Delete the signed-in user and forget the session.
    pub fn delete_account(&mut self) -> Result<(), ApiError> {
        let id = require_user(&self.user)?;
        let client = self.client;
        mutate(&mut self.state, "Failed to delete account.", || {
            users::remove(client, id)
        })?;
        client.session().clear()?;
        self.user = None;
        info!(user_id = id, "account deleted; session cleared");
        Ok(())
    }
}
