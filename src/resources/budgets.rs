// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{BudgetReport, BudgetType};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetRequest {
    /// Set on create only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
    pub description: String,
    pub amount_limit: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_type: BudgetType,
    pub rollover_amount: Decimal,
    pub category_id: i64,
}

/// Budgets with server-computed `spent` / `percentageUsed`, plus the report totals.
pub fn report(client: &ApiClient, user_id: i64) -> Result<BudgetReport, ApiError> {
    client.get_with_query("/budgets/report", &[("userId", user_id.to_string())])
}

pub fn create(client: &ApiClient, req: &BudgetRequest) -> Result<(), ApiError> {
    client.post_unit("/budgets", req)
}

pub fn update(client: &ApiClient, id: i64, req: &BudgetRequest) -> Result<(), ApiError> {
    client.put_unit(&format!("/budgets/{id}"), req)
}

pub fn delete(client: &ApiClient, id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/budgets/{id}"))
}
