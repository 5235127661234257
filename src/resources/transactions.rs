// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{RecurringInterval, Transaction, TransactionType};
use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;

/// Payload shared by every transaction endpoint; the route decides what the backend does
/// with it.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRequest {
    pub user_id: i64,
    pub transaction_type: TransactionType,
    pub account_id: i64,
    pub to_account_id: Option<i64>,
    pub category_id: Option<i64>,
    pub amount: Decimal,
    pub date: NaiveDateTime,
    pub description: String,
    pub payment_method: String,
    pub status: String,
    pub is_recurring: bool,
    pub recurring_interval: Option<RecurringInterval>,
    pub next_due_date: Option<NaiveDateTime>,
}

pub fn list_for_user(client: &ApiClient, user_id: i64) -> Result<Vec<Transaction>, ApiError> {
    client.get(&format!("/transactions/user/{user_id}"))
}

pub fn list_for_account(client: &ApiClient, account_id: i64) -> Result<Vec<Transaction>, ApiError> {
    client.get(&format!("/transactions/account/{account_id}"))
}

pub fn deposit(
    client: &ApiClient,
    user_id: i64,
    account_id: i64,
    req: &TransactionRequest,
) -> Result<(), ApiError> {
    client.post_unit(&format!("/transactions/deposit/{user_id}/{account_id}"), req)
}

pub fn withdraw(
    client: &ApiClient,
    user_id: i64,
    account_id: i64,
    req: &TransactionRequest,
) -> Result<(), ApiError> {
    client.post_unit(&format!("/transactions/withdraw/{user_id}/{account_id}"), req)
}

pub fn transfer(
    client: &ApiClient,
    user_id: i64,
    from_id: i64,
    to_id: i64,
    req: &TransactionRequest,
) -> Result<(), ApiError> {
    client.post_unit(
        &format!("/transactions/transfer/{user_id}/{from_id}/{to_id}"),
        req,
    )
}

pub fn create_recurring(client: &ApiClient, req: &TransactionRequest) -> Result<(), ApiError> {
    client.post_unit("/transactions/recurring", req)
}
