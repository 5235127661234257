// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{
    CancelToken, Outcome, SubmitError, ViewState, applied, checked, load, load_profile, mutate,
    require_user,
};
use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::AccountDraft;
use crate::models::{Account, User};
use crate::resources::accounts;

pub struct AccountsPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    accounts: Vec<Account>,
    /// Loaded on request; includes soft-deleted accounts.
    all_accounts: Option<Vec<Account>>,
}

impl<'a> AccountsPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            accounts: Vec::new(),
            all_accounts: None,
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let Some(user) = load_profile(self.client, &mut self.state, &self.cancel)? else {
            return Ok(Outcome::Discarded);
        };
        self.user = Some(user);
        self.refresh()
    }

    /// Re-fetch the active collection, and the full one too if it is being shown.
    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load accounts.", || {
            accounts::list_for_user(client, user_id)
        })?;
        let outcome = applied(fetched, |a| self.accounts = a);
        if outcome == Outcome::Applied && self.all_accounts.is_some() {
            return self.show_all();
        }
        Ok(outcome)
    }

    pub fn show_all(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let fetched = load(
            &mut self.state,
            &self.cancel,
            "Failed to load all accounts.",
            || accounts::list_all_for_user(client, user_id),
        )?;
        Ok(applied(fetched, |a| self.all_accounts = Some(a)))
    }

    pub fn hide_all(&mut self) {
        self.all_accounts = None;
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn all_accounts(&self) -> Option<&[Account]> {
        self.all_accounts.as_deref()
    }

    pub fn find(&self, id: i64) -> Option<&Account> {
        self.accounts
            .iter()
            .chain(self.all_accounts.iter().flatten())
            .find(|a| a.id == id)
    }

    pub fn save(&mut self, draft: &AccountDraft) -> Result<Outcome, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let client = self.client;
        match draft.id {
            Some(id) => {
                mutate(&mut self.state, "Failed to update account.", || {
                    accounts::update(client, id, &req)
                })?;
                self.state.set_success("Account updated successfully.");
            }
            None => {
                let user_id = require_user(&self.user)?;
                mutate(&mut self.state, "Failed to create account.", || {
                    accounts::create_for_user(client, user_id, &req)
                })?;
                self.state.set_success("Account created successfully.");
            }
        }
        Ok(self.refresh()?)
    }

    pub fn delete(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete account.", || {
            accounts::delete(client, id)
        })?;
        self.state.set_success("Account deleted successfully.");
        self.refresh()
    }

    pub fn restore(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to restore account.", || {
            accounts::restore(client, id)
        })?;
        self.state.set_success("Account restored successfully.");
        self.refresh()
    }
}
