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
use crate::forms::LoanPaymentDraft;
use crate::models::{Loan, LoanPayment, User};
use crate::resources::loans;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanTotals {
    pub count: usize,
    pub borrowed: Decimal,
    pub outstanding: Decimal,
}

pub fn loan_totals(loans: &[Loan]) -> LoanTotals {
    LoanTotals {
        count: loans.len(),
        borrowed: loans.iter().map(|l| l.amount_borrowed).sum(),
        outstanding: loans.iter().map(|l| l.outstanding_balance).sum(),
    }
}

pub struct LoansPage<'a> {
    client: &'a ApiClient,
    cancel: CancelToken,
    pub state: ViewState,
    user: Option<User>,
    loans: Vec<Loan>,
    /// Payment history of the loan last inspected.
    payments: Option<(i64, Vec<LoanPayment>)>,
}

impl<'a> LoansPage<'a> {
    pub fn new(client: &'a ApiClient, cancel: CancelToken) -> Self {
        Self {
            client,
            cancel,
            state: ViewState::default(),
            user: None,
            loans: Vec::new(),
            payments: None,
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
        let fetched = load(&mut self.state, &self.cancel, "Failed to load loans.", || {
            loans::list_for_user(client, user_id)
        })?;
        Ok(applied(fetched, |l| self.loans = l))
    }

    pub fn loans(&self) -> &[Loan] {
        &self.loans
    }

    pub fn find(&self, id: i64) -> Option<&Loan> {
        self.loans.iter().find(|l| l.id == id)
    }

    pub fn totals(&self) -> LoanTotals {
        loan_totals(&self.loans)
    }

    pub fn load_payments(&mut self, loan_id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        let fetched = load(
            &mut self.state,
            &self.cancel,
            "Failed to load loan payments.",
            || loans::payments(client, loan_id),
        )?;
        Ok(applied(fetched, |p| self.payments = Some((loan_id, p))))
    }

    pub fn payments(&self, loan_id: i64) -> Option<&[LoanPayment]> {
        self.payments
            .as_ref()
            .filter(|(id, _)| *id == loan_id)
            .map(|(_, p)| p.as_slice())
    }

    /// Returns the server's payment record. The loan list, and the history when it is
    /// showing this loan, are re-fetched afterwards.
    pub fn pay(
        &mut self,
        loan_id: i64,
        draft: &LoanPaymentDraft,
    ) -> Result<LoanPayment, SubmitError> {
        let req = checked(&mut self.state, draft.validate())?;
        let client = self.client;
        let payment = mutate(&mut self.state, "Failed to make payment.", || {
            loans::pay(client, loan_id, &req)
        })?;
        self.state.set_success("Payment recorded successfully.");
        self.refresh()?;
        if self.payments(loan_id).is_some() {
            self.load_payments(loan_id)?;
        }
        Ok(payment)
    }

    pub fn delete(&mut self, loan_id: i64) -> Result<Outcome, ApiError> {
        let client = self.client;
        mutate(&mut self.state, "Failed to delete loan.", || {
            loans::delete(client, loan_id)
        })?;
        self.state.set_success("Loan deleted successfully.");
        if self.payments(loan_id).is_some() {
            self.payments = None;
        }
        self.refresh()
    }
}
