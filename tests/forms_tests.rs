// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{NaiveDate, NaiveDateTime};
use finsync::error::FormError;
use finsync::forms::{
    AccountDraft, BudgetDraft, CategoryDraft, LoanPaymentDraft, PaymentKind, RegisterDraft,
    RoleDraft, TransactionDraft, next_due_date,
};
use finsync::models::{AccountType, RecurringInterval, RoleType, TransactionType};
use rust_decimal::Decimal;
use std::str::FromStr;

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
}

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn next_due_dates_by_interval() {
    let from = at("2024-01-15T10:30:00");
    assert_eq!(
        next_due_date(RecurringInterval::Monthly, from),
        at("2024-02-15T10:30:00")
    );
    assert_eq!(
        next_due_date(RecurringInterval::Yearly, from),
        at("2025-01-15T10:30:00")
    );
    assert_eq!(
        next_due_date(RecurringInterval::Daily, from),
        at("2024-01-16T10:30:00")
    );
    assert_eq!(
        next_due_date(RecurringInterval::Weekly, from),
        at("2024-01-22T10:30:00")
    );
}

#[test]
fn monthly_step_clamps_to_month_end() {
    assert_eq!(
        next_due_date(RecurringInterval::Monthly, at("2024-01-31T00:00:00")),
        at("2024-02-29T00:00:00")
    );
    assert_eq!(
        next_due_date(RecurringInterval::Yearly, at("2024-02-29T00:00:00")),
        at("2025-02-28T00:00:00")
    );
}

#[test]
fn transaction_defaults() {
    let now = at("2024-03-01T08:00:00");
    let d = TransactionDraft::new(now);
    assert_eq!(d.transaction_type, TransactionType::Income);
    assert_eq!(d.payment_method, "CASH");
    assert_eq!(d.status, "PENDING");
    assert_eq!(d.date, now);
    assert!(!d.is_recurring);
}

#[test]
fn selecting_interval_sets_next_due_default() {
    let now = at("2024-01-15T00:00:00");
    let mut d = TransactionDraft::new(now);
    d.select_interval(RecurringInterval::Monthly, now);
    assert_eq!(d.recurring_interval, Some(RecurringInterval::Monthly));
    assert_eq!(d.next_due_date, Some(at("2024-02-15T00:00:00")));
}

#[test]
fn non_recurring_submit_drops_recurring_fields() {
    let now = at("2024-01-15T00:00:00");
    let mut d = TransactionDraft::new(now);
    d.account_id = Some(1);
    d.amount = Some(dec("40"));
    d.select_interval(RecurringInterval::Weekly, now);
    d.is_recurring = false;
    let req = d.validate(7).unwrap();
    assert!(!req.is_recurring);
    assert_eq!(req.recurring_interval, None);
    assert_eq!(req.next_due_date, None);
    assert_eq!(req.user_id, 7);
}

#[test]
fn transaction_required_fields() {
    let now = at("2024-01-15T00:00:00");
    let mut d = TransactionDraft::new(now);
    assert_eq!(d.validate(1).unwrap_err(), FormError::Missing("amount"));
    d.amount = Some(dec("10"));
    assert_eq!(d.validate(1).unwrap_err(), FormError::Missing("account"));
    d.account_id = Some(2);
    d.transaction_type = TransactionType::Transfer;
    assert_eq!(d.validate(1).unwrap_err(), FormError::Missing("target account"));
    d.to_account_id = Some(3);
    assert!(d.validate(1).is_ok());

    d.transaction_type = TransactionType::Recurring;
    assert_eq!(
        d.validate(1).unwrap_err(),
        FormError::Missing("recurring interval")
    );
}

#[test]
fn transaction_rejects_unknown_payment_method() {
    let now = at("2024-01-15T00:00:00");
    let mut d = TransactionDraft::new(now);
    d.amount = Some(dec("10"));
    d.account_id = Some(2);
    d.payment_method = "barter".into();
    assert!(matches!(
        d.validate(1),
        Err(FormError::Invalid { field: "payment method", .. })
    ));
    d.payment_method = "paypal".into();
    assert_eq!(d.validate(1).unwrap().payment_method, "PAYPAL");
}

#[test]
fn register_defaults_and_email_shape() {
    let mut d = RegisterDraft {
        username: "ana".into(),
        email: "not-an-email".into(),
        password: "secret".into(),
        first_name: "Ana".into(),
        last_name: "Silva".into(),
        ..RegisterDraft::default()
    };
    assert!(matches!(
        d.validate(),
        Err(FormError::Invalid { field: "email", .. })
    ));
    d.email = "ana@example.com".into();
    let req = d.validate().unwrap();
    assert_eq!(req.currency, "USD");
    assert_eq!(req.timezone, "UTC");
    assert_eq!(req.preferred_language, "en");
}

#[test]
fn account_requires_name_type_and_balance() {
    let mut d = AccountDraft::default();
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("name"));
    d.name = "Everyday".into();
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("type"));
    d.account_type = Some(AccountType::Savings);
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("balance"));
    d.balance = Some(dec("150.25"));
    let req = d.validate().unwrap();
    assert_eq!(req.currency, "USD");
    assert_eq!(req.institution_name, None);
}

#[test]
fn category_colour_must_be_hex() {
    let mut d = CategoryDraft {
        name: "Food".into(),
        ..CategoryDraft::default()
    };
    assert_eq!(d.validate().unwrap().color_code, "#000000");
    d.color_code = "red".into();
    assert!(d.validate().is_err());
    d.color_code = "#A1b2C3".into();
    assert!(d.validate().is_ok());
}

#[test]
fn budget_requires_category_and_dates() {
    let mut d = BudgetDraft {
        amount_limit: Some(dec("200")),
        ..BudgetDraft::default()
    };
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("start date"));
    d.start_date = NaiveDate::from_ymd_opt(2024, 1, 1);
    d.end_date = NaiveDate::from_ymd_opt(2024, 1, 31);
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("category"));
    d.category_id = Some(4);
    let req = d.validate().unwrap();
    assert_eq!(req.rollover_amount, Decimal::ZERO);
    assert_eq!(req.user_id, None);
}

#[test]
fn role_requires_known_name() {
    let mut d = RoleDraft::default();
    assert_eq!(d.validate().unwrap_err(), FormError::Missing("role"));
    d.role_name = Some(RoleType::Manager);
    let req = d.validate().unwrap();
    assert_eq!(req.description, None);
    assert!(req.permissions.is_empty());
}

#[test]
fn loan_payment_kinds_split_amounts() {
    let today = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
    let mut d = LoanPaymentDraft {
        kind: PaymentKind::Monthly,
        monthly_payment: dec("250"),
        extra_payment: Decimal::ZERO,
        payment_date: today,
    };
    let req = d.validate().unwrap();
    assert_eq!(req.payment_amount, dec("250"));
    assert_eq!(req.extra_payment, Decimal::ZERO);

    d.kind = PaymentKind::Extra;
    assert!(d.validate().is_err());
    d.extra_payment = dec("100");
    let req = d.validate().unwrap();
    assert_eq!(req.payment_amount, Decimal::ZERO);
    assert_eq!(req.extra_payment, dec("100"));
}
