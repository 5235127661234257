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
use crate::models::{Account, AccountType, Role, User};
use crate::resources::{accounts, roles, users};
use rust_decimal::Decimal;
use serde::Serialize;

/// Account types the dashboard always counts, in display order.
pub const DASHBOARD_TYPES: [AccountType; 4] = [
    AccountType::Checking,
    AccountType::Savings,
    AccountType::Credit,
    AccountType::Investment,
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_balance: Decimal,
    pub active_accounts: usize,
    pub type_counts: Vec<(AccountType, usize)>,
    /// Admin sessions only.
    pub user_count: Option<usize>,
    pub role_count: Option<usize>,
}

pub struct DashboardPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    accounts: Vec<Account>,
    admin: Option<(Vec<User>, Vec<Role>)>,
}

impl<'a> DashboardPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            accounts: Vec::new(),
            admin: None,
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let Some(user) = load_profile(self.client, &mut self.state, &self.cancel)? else {
            return Ok(Outcome::Discarded);
        };
        self.user = Some(user);
        if self.refresh_accounts()? == Outcome::Discarded {
            return Ok(Outcome::Discarded);
        }
        if self.client.session().is_admin()? {
            return self.refresh_admin();
        }
        Ok(Outcome::Applied)
    }

    pub fn refresh_accounts(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load accounts.", || {
            accounts::list_for_user(client, user_id)
        })?;
        Ok(applied(fetched, |a| self.accounts = a))
    }

    fn refresh_admin(&mut self) -> Result<Outcome, ApiError> {
        let client = self.client;
        let fetched = load(
            &mut self.state,
            &self.cancel,
            "Failed to load users and roles.",
            || Ok((users::list(client)?, roles::list(client)?)),
        )?;
        Ok(applied(fetched, |v| self.admin = Some(v)))
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn total_balance(&self) -> Decimal {
        self.accounts.iter().map(|a| a.balance).sum()
    }

    pub fn active_count(&self) -> usize {
        self.accounts.iter().filter(|a| a.is_active).count()
    }

    pub fn type_counts(&self) -> Vec<(AccountType, usize)> {
        DASHBOARD_TYPES
            .iter()
            .map(|t| {
                let n = self.accounts.iter().filter(|a| a.account_type == *t).count();
                (*t, n)
            })
            .collect()
    }

    pub fn summary(&self) -> DashboardSummary {
        DashboardSummary {
            total_balance: self.total_balance(),
            active_accounts: self.active_count(),
            type_counts: self.type_counts(),
            user_count: self.admin.as_ref().map(|(u, _)| u.len()),
            role_count: self.admin.as_ref().map(|(_, r)| r.len()),
        }
    }

    pub fn create_account(&mut self, draft: &AccountDraft) -> Result<Outcome, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let user_id = require_user(&self.user)?;
        let client = self.client;
        mutate(&mut self.state, "Failed to create account.", || {
            accounts::create_for_user(client, user_id, &req)
        })?;
        self.state.set_success("Account created successfully.");
        Ok(self.refresh_accounts()?)
    }

    pub fn delete_account(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete account.", || {
            accounts::delete(client, id)
        })?;
        self.state.set_success("Account deleted successfully.");
        self.refresh_accounts()
    }
}
