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
use crate::forms::CategoryDraft;
use crate::models::{Category, User};
use crate::resources::categories;

/// Categories are soft-deleted, so the page lists deleted ones too and offers restore.
pub struct CategoriesPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    categories: Vec<Category>,
}

impl<'a> CategoriesPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            categories: Vec::new(),
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let Some(user) = load_profile(self.client, &mut self.state, &self.cancel)? else {
            return Ok(Outcome::Discarded);
        };
        self.user = Some(user);
        self.refresh()
    }

    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load categories.", || {
            categories::list_for_user(client, user_id, true)
        })?;
        Ok(applied(fetched, |c| self.categories = c))
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn active(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| !c.deleted).collect()
    }

    pub fn deleted(&self) -> Vec<&Category> {
        self.categories.iter().filter(|c| c.deleted).collect()
    }

    pub fn find(&self, id: i64) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn save(&mut self, draft: &CategoryDraft) -> Result<Outcome, SubmitError> {
        let mut req = checked(&mut self.state, draft.validate())?;
        let client = self.client;
        match draft.id {
            Some(id) => {
                mutate(&mut self.state, "Failed to update category.", || {
                    categories::update(client, id, &req)
                })?;
                self.state.set_success("Category updated successfully.");
            }
            None => {
                req.user_id = Some(require_user(&self.user)?);
                mutate(&mut self.state, "Failed to create category.", || {
                    categories::create(client, &req)
                })?;
                self.state.set_success("Category created successfully.");
            }
        }
        Ok(self.refresh()?)
    }

    pub fn delete(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete category.", || {
            categories::delete(client, id)
        })?;
        self.state.set_success("Category deleted successfully.");
        self.refresh()
    }

    pub fn restore(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to restore category.", || {
            categories::restore(client, id)
        })?;
        self.state.set_success("Category restored successfully.");
        self.refresh()
    }
}
