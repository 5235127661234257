// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Account, AccountType};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountRequest {
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: AccountType,
    pub balance: Decimal,
    pub currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interest_rate: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Active (not soft-deleted) accounts.
pub fn list_for_user(client: &ApiClient, user_id: i64) -> Result<Vec<Account>, ApiError> {
    client.get(&format!("/accounts/user/{user_id}"))
}

/// Every account including soft-deleted ones.
pub fn list_all_for_user(client: &ApiClient, user_id: i64) -> Result<Vec<Account>, ApiError> {
    client.get(&format!("/accounts/user/{user_id}/all"))
}

pub fn get(client: &ApiClient, id: i64) -> Result<Account, ApiError> {
    client.get(&format!("/accounts/{id}"))
}

pub fn create_for_user(
    client: &ApiClient,
    user_id: i64,
    req: &AccountRequest,
) -> Result<(), ApiError> {
    client.post_unit(&format!("/accounts/create/{user_id}"), req)
}

pub fn update(client: &ApiClient, id: i64, req: &AccountRequest) -> Result<(), ApiError> {
    client.put_unit(&format!("/accounts/{id}"), req)
}

pub fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/accounts/{id}"))
}

pub fn restore(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.put_empty(&format!("/accounts/{id}/restore"))
}
