// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Loan, LoanPayment};
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPaymentRequest {
    pub payment_amount: Decimal,
    pub extra_payment: Decimal,
}

pub fn list_for_user(client: &ApiClient, user_id: i64) -> Result<Vec<Loan>, ApiError> {
    client.get(&format!("/loans/user/{user_id}"))
}

pub fn delete(client: &ApiClient, loan_id: i64) -> Result<(), ApiError> {
    client.delete(&format!("/loans/{loan_id}"))
}

/// Amortization is applied server-side; the returned record is informational only.
pub fn pay(
    client: &ApiClient,
    loan_id: i64,
    req: &LoanPaymentRequest,
) -> Result<LoanPayment, ApiError> {
    client.post(&format!("/loan-payments/{loan_id}/pay"), req)
}

pub fn payments(client: &ApiClient, loan_id: i64) -> Result<Vec<LoanPayment>, ApiError> {
    client.get(&format!("/loan-payments/{loan_id}"))
}
