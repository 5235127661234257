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
use crate::forms::TransactionDraft;
use crate::models::{Account, Category, Transaction, TransactionType, User};
use crate::resources::{accounts, categories, transactions};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransactionFilter {
    pub query: String,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    /// When set the source collection is this account's transactions.
    pub account_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub income: Decimal,
    pub expense: Decimal,
}

impl Totals {
    pub fn overspending(&self) -> bool {
        self.expense > self.income
    }

    pub fn net(&self) -> Decimal {
        self.income - self.expense
    }
}

/// INCOME counts as income; EXPENSE, CREDIT_CARD_PAYMENT and RECURRING as expense. Transfers
/// and unknown types count toward neither.
pub fn totals<'t>(txs: impl IntoIterator<Item = &'t Transaction>) -> Totals {
    let mut t = Totals::default();
    for tx in txs {
        match tx.transaction_type {
            TransactionType::Income => t.income += tx.amount,
            TransactionType::Expense
            | TransactionType::CreditCardPayment
            | TransactionType::Recurring => t.expense += tx.amount,
            TransactionType::Transfer | TransactionType::Other => {}
        }
    }
    t
}

/// Case-insensitive match on description, category, type, payment method, amount or status.
pub fn matches_query(tx: &Transaction, query: &str) -> bool {
    let q = query.to_lowercase();
    if q.is_empty() {
        return true;
    }
    let amount = tx.amount.normalize().to_string();
    [
        tx.description.as_deref().unwrap_or_default(),
        tx.category.as_deref().unwrap_or_default(),
        tx.transaction_type.as_str(),
        tx.payment_method.as_deref().unwrap_or_default(),
        amount.as_str(),
        tx.status.as_deref().unwrap_or_default(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(&q))
}

/// Inclusive on both ends, by calendar day.
pub fn within_dates(tx: &Transaction, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let day = tx.date.date();
    from.is_none_or(|f| day >= f) && to.is_none_or(|t| day <= t)
}

pub struct TransactionsPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    accounts: Vec<Account>,
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    filter: TransactionFilter,
}

impl<'a> TransactionsPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            accounts: Vec::new(),
            categories: Vec::new(),
            transactions: Vec::new(),
            filter: TransactionFilter::default(),
        }
    }

    /// Profile, then the pickers (accounts, categories), then the transactions.
    pub fn mount(&mut self) -> Result<Outcome, ApiError> {
        let Some(user) = load_profile(self.client, &mut self.state, &self.cancel)? else {
            return Ok(Outcome::Discarded);
        };
        let user_id = user.id;
        self.user = Some(user);
        let client = self.client;
        let pickers = load(
            &mut self.state,
            &self.cancel,
            "Failed to load accounts and categories.",
            || {
                Ok((
                    accounts::list_for_user(client, user_id)?,
                    categories::list_for_user(client, user_id, false)?,
                ))
            },
        )?;
        if applied(pickers, |(a, c)| {
            self.accounts = a;
            self.categories = c;
        }) == Outcome::Discarded
        {
            return Ok(Outcome::Discarded);
        }
        self.refresh()
    }

    /// Re-fetch from the current source: the selected account, else every user transaction.
    pub fn refresh(&mut self) -> Result<Outcome, ApiError> {
        let user_id = require_user(&self.user)?;
        let client = self.client;
        let account = self.filter.account_id;
        let fetched = load(
            &mut self.state,
            &self.cancel,
            "Failed to load transactions.",
            || match account {
                Some(id) => transactions::list_for_account(client, id),
                None => transactions::list_for_user(client, user_id),
            },
        )?;
        Ok(applied(fetched, |t| self.transactions = t))
    }

    pub fn select_account(&mut self, account_id: Option<i64>) -> Result<Outcome, ApiError> {
        self.filter.account_id = account_id;
        self.refresh()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
    }

    pub fn set_dates(&mut self, from: Option<NaiveDate>, to: Option<NaiveDate>) {
        self.filter.from = from;
        self.filter.to = to;
    }

    /// Clear every filter and go back to the user's full collection.
    pub fn reset(&mut self) -> Result<Outcome, ApiError> {
        self.filter = TransactionFilter::default();
        self.refresh()
    }

    pub fn filter(&self) -> &TransactionFilter {
        &self.filter
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn visible(&self) -> Vec<&Transaction> {
        self.transactions
            .iter()
            .filter(|tx| matches_query(tx, &self.filter.query))
            .filter(|tx| within_dates(tx, self.filter.from, self.filter.to))
            .collect()
    }

    pub fn totals(&self) -> Totals {
        totals(self.visible())
    }

    /// Route the draft to the endpoint its type calls for, then re-fetch.
    pub fn submit(&mut self, draft: &TransactionDraft) -> Result<Outcome, SubmitError> {
        let user_id = require_user(&self.user)?;
        let req = checked(&mut self.state, draft.validate(user_id))?;
        let client = self.client;
        let from = req.account_id;
        let target = || {
            req.to_account_id.ok_or(ApiError::Validation {
                status: 400,
                message: Some("Select a target account.".into()),
            })
        };
        mutate(&mut self.state, "Failed to save transaction.", || {
            match req.transaction_type {
                TransactionType::Income => transactions::deposit(client, user_id, from, &req),
                TransactionType::Expense => transactions::withdraw(client, user_id, from, &req),
                TransactionType::Transfer => {
                    transactions::transfer(client, user_id, from, target()?, &req)
                }
                TransactionType::CreditCardPayment => {
                    let to = target()?;
                    transactions::withdraw(client, user_id, from, &req)?;
                    transactions::withdraw(client, user_id, to, &req)
                }
                TransactionType::Recurring => transactions::create_recurring(client, &req),
                TransactionType::Other => Err(ApiError::Validation {
                    status: 400,
                    message: Some("Unsupported transaction type.".into()),
                }),
            }
        })?;
        info!(kind = %req.transaction_type, amount = %req.amount, "transaction submitted");
        self.state.set_success("Transaction saved successfully.");
        Ok(self.refresh()?)
    }
}
