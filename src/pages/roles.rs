// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{CancelToken, Outcome, SubmitError, ViewState, applied, checked, load, mutate};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::RoleDraft;
use crate::models::{Role, RoleType};
use crate::resources::roles;

pub struct RolesPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    roles: Vec<Role>,
}

impl<'a> RolesPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            roles: Vec::new(),
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        self.refresh()
    }

    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load roles.", || {
            roles::list(client)
        })?;
        Ok(applied(fetched, |r| self.roles = r))
    }

    pub fn roles(&self) -> &[Role] {
        &self.roles
    }

    pub fn find(&self, name: RoleType) -> Option<&Role> {
        self.roles.iter().find(|r| r.role_name == name)
    }

    /// The backend keys roles by name, so saving an existing name replaces it.
    pub fn save(&mut self, draft: &RoleDraft) -> Result<Outcome, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let existed = self.find(req.role_name).is_some();
        let client = self.client;
        mutate(&mut self.state, "Failed to save role.", || {
            roles::upsert(client, &req)
        })?;
        self.state.set_success(if existed {
            "Role updated successfully."
        } else {
            "Role created successfully."
        });
        Ok(self.refresh()?)
    }

    pub fn delete(&mut self, name: RoleType) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete role.", || {
            roles::delete(client, name)
        })?;
        self.state.set_success("Role deleted successfully.");
        self.refresh()
    }
}
