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
use crate::error::{ApiError, FormError};
use crate::forms::BudgetDraft;
use crate::models::{Budget, BudgetReport, Category, User};
use crate::resources::budgets::{self, BudgetRequest};
use crate::resources::categories;
use chrono::NaiveDate;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetFilter {
    pub query: String,
    /// Keeps budgets starting on or after this day.
    pub from: Option<NaiveDate>,
    /// Keeps budgets ending on or before this day.
    pub to: Option<NaiveDate>,
}

impl BudgetFilter {
    pub fn matches(&self, budget: &Budget) -> bool {
        let q = self.query.trim().to_lowercase();
        let text = q.is_empty()
            || [
                budget.description.as_str(),
                budget.category.as_deref().unwrap_or_default(),
                budget.budget_type.as_str(),
            ]
            .iter()
            .any(|f| f.to_lowercase().contains(&q));
        text && self.from.is_none_or(|f| budget.start_date >= f)
            && self.to.is_none_or(|t| budget.end_date <= t)
    }
}

fn same_category(budget: &Budget, category_id: i64, categories: &[Category]) -> bool {
    match budget.category_id {
        Some(id) => id == category_id,
        None => {
            let name = categories
                .iter()
                .find(|c| c.id == category_id)
                .map(|c| c.name.as_str());
            name.is_some() && budget.category.as_deref() == name
        }
    }
}

/// True when another live budget for the same category shares at least one day with
/// `[start, end]`. `editing` is the id of the budget being updated, which never conflicts
/// with itself.
pub fn overlaps(
    budgets: &[Budget],
    categories: &[Category],
    req: &BudgetRequest,
    editing: Option<i64>,
) -> bool {
    budgets.iter().any(|b| {
        !b.deleted
            && Some(b.id) != editing
            && same_category(b, req.category_id, categories)
            && !(req.end_date < b.start_date || req.start_date > b.end_date)
    })
}

pub struct BudgetsPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    report: BudgetReport,
    categories: Vec<Category>,
    pub filter: BudgetFilter,
}

impl<'a> BudgetsPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            report: BudgetReport::default(),
            categories: Vec::new(),
            filter: BudgetFilter::default(),
        }
    }

    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let Some(user) = load_profile(self.client, &mut self.state, &self.cancel)? else {
            return Ok(Outcome::Discarded);
        };
        let user_id = user.id;
        self.user = Some(user);
        let client = self.client;
        let cats = load(&mut self.state, &self.cancel, "Failed to load categories.", || {
            categories::list_for_user(client, user_id, false)
        })?;
        if applied(cats, |c| self.categories = c) == Outcome::Discarded {
            return Ok(Outcome::Discarded);
        }
        self.refresh()
    }

    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let fetched = load(&mut self.state, &self.cancel, "Failed to load budgets.", || {
            budgets::report(client, user_id)
        })?;
        Ok(applied(fetched, |r| self.report = r))
    }

    pub fn report(&self) -> &BudgetReport {
        &self.report
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn find(&self, id: i64) -> Option<&Budget> {
        self.report.budgets.iter().find(|b| b.id == id)
    }

    pub fn visible(&self) -> Vec<&Budget> {
        self.report
            .budgets
            .iter()
            .filter(|b| self.filter.matches(b))
            .collect()
    }

    /// Rejects a category/date-range overlap locally before anything is sent.
    pub fn save(&mut self, draft: &BudgetDraft) -> Result<Outcome, SubmitError> {
        let mut req = checked(&mut self.state, draft.validate())?;
        if overlaps(&self.report.budgets, &self.categories, &req, draft.id) {
            let err = FormError::BudgetOverlap;
            self.state.error = Some(err.to_string());
            return Err(err.into());
        }
        let client = self.client;
        match draft.id {
            Some(id) => {
                mutate(&mut self.state, "Failed to update budget.", || {
                    budgets::update(client, id, &req)
                })?;
                self.state.set_success("Budget updated successfully.");
            }
            None => {
                req.user_id = Some(require_user(&self.user)?);
                mutate(&mut self.state, "Failed to create budget.", || {
                    budgets::create(client, &req)
                })?;
                self.state.set_success("Budget created successfully.");
            }
        }
        Ok(self.refresh()?)
    }

    pub fn delete(&mut self, id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete budget.", || {
            budgets::delete(client, id)
        })?;
        self.state.set_success("Budget deleted successfully.");
        self.refresh()
    }
}
