// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Drafts staged before a create/update. A draft only checks required fields and input
//! shape; it never talks to the network. The page controller submits what it produces.

use crate::error::FormError;
use crate::models::{
    Account, AccountType, Budget, BudgetType, Category, CategoryType, Loan, RecurringInterval,
    RolePermission, RoleType, Transaction, TransactionType, User,
};
use crate::resources::accounts::AccountRequest;
use crate::resources::auth::{LoginRequest, RegisterRequest};
use crate::resources::budgets::BudgetRequest;
use crate::resources::categories::CategoryRequest;
use crate::resources::loans::LoanPaymentRequest;
use crate::resources::roles::RoleRequest;
use crate::resources::transactions::TransactionRequest;
use crate::resources::users::{ProfileUpdate, UserRequest};
use chrono::{Days, Months, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+$").expect("email pattern"));
static COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").expect("colour pattern"));

pub const DEFAULT_COLOR: &str = "#000000";
pub const DEFAULT_PAYMENT_METHOD: &str = "CASH";
pub const DEFAULT_STATUS: &str = "PENDING";
pub const PAYMENT_METHODS: &[&str] = &[
    "CASH",
    "BANK_TRANSFER",
    "DEBIT_CARD",
    "CREDIT_CARD",
    "DIRECT_DEPOSIT",
    "PAYPAL",
    "OTHER",
];
pub const STATUSES: &[&str] = &["PENDING", "COMPLETED", "FAILED"];

fn required(field: &'static str, value: &str) -> Result<String, FormError> {
    let v = value.trim();
    if v.is_empty() {
        Err(FormError::Missing(field))
    } else {
        Ok(v.to_string())
    }
}

fn present<T: Clone>(field: &'static str, value: &Option<T>) -> Result<T, FormError> {
    value.clone().ok_or(FormError::Missing(field))
}

fn email(value: &str) -> Result<String, FormError> {
    let v = required("email", value)?;
    if EMAIL.is_match(&v) {
        Ok(v)
    } else {
        Err(FormError::Invalid {
            field: "email",
            reason: format!("'{v}' is not an email address"),
        })
    }
}

fn one_of(field: &'static str, value: &str, allowed: &[&str]) -> Result<String, FormError> {
    let v = value.trim().to_uppercase();
    if allowed.contains(&v.as_str()) {
        Ok(v)
    } else {
        Err(FormError::Invalid {
            field,
            reason: format!("expected one of {}", allowed.join(", ")),
        })
    }
}

/// Default next occurrence for a recurring transaction, counted from `from`. Month and year
/// steps clamp to the last valid day (Jan 31 + 1 month = Feb 28/29).
pub fn next_due_date(interval: RecurringInterval, from: NaiveDateTime) -> NaiveDateTime {
    let next = match interval {
        RecurringInterval::Daily => from.checked_add_days(Days::new(1)),
        RecurringInterval::Weekly => from.checked_add_days(Days::new(7)),
        RecurringInterval::Monthly => from.checked_add_months(Months::new(1)),
        RecurringInterval::Yearly => from.checked_add_months(Months::new(12)),
        RecurringInterval::Other => None,
    };
    next.unwrap_or(from)
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginDraft {
    pub user_name: String,
    pub password: String,
}

impl LoginDraft {
    pub fn validate(&self) -> Result<LoginRequest, FormError> {
        Ok(LoginRequest {
            user_name: required("username", &self.user_name)?,
            password: required("password", &self.password)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterDraft {
    pub username: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub currency: String,
    pub timezone: String,
    pub preferred_language: String,
}

impl Default for RegisterDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            email: String::new(),
            password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            phone_number: String::new(),
            address: String::new(),
            currency: "USD".into(),
            timezone: "UTC".into(),
            preferred_language: "en".into(),
        }
    }
}

impl RegisterDraft {
    pub fn validate(&self) -> Result<RegisterRequest, FormError> {
        Ok(RegisterRequest {
            username: required("username", &self.username)?,
            email: email(&self.email)?,
            password: required("password", &self.password)?,
            first_name: required("first name", &self.first_name)?,
            last_name: required("last name", &self.last_name)?,
            phone_number: self.phone_number.trim().to_string(),
            address: self.address.trim().to_string(),
            currency: required("currency", &self.currency)?.to_uppercase(),
            timezone: required("timezone", &self.timezone)?,
            preferred_language: required("language", &self.preferred_language)?,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub address: String,
    pub currency: String,
    pub timezone: String,
    pub preferred_language: String,
}

impl ProfileDraft {
    pub fn from_user(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            email: user.email.clone(),
            phone_number: user.phone_number.clone().unwrap_or_default(),
            address: user.address.clone().unwrap_or_default(),
            currency: user.currency.clone().unwrap_or_default(),
            timezone: user.timezone.clone().unwrap_or_default(),
            preferred_language: user.preferred_language.clone().unwrap_or_default(),
        }
    }

    pub fn validate(&self) -> Result<ProfileUpdate, FormError> {
        Ok(ProfileUpdate {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: email(&self.email)?,
            phone_number: self.phone_number.trim().to_string(),
            address: self.address.trim().to_string(),
            currency: self.currency.trim().to_uppercase(),
            timezone: self.timezone.trim().to_string(),
            preferred_language: self.preferred_language.trim().to_string(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserDraft {
    /// Set when editing an existing user.
    pub id: Option<i64>,
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
}

impl UserDraft {
    pub fn from_existing(user: &User) -> Self {
        Self {
            id: Some(user.id),
            username: user.username.clone(),
            email: user.email.clone(),
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
        }
    }

    pub fn validate(&self) -> Result<UserRequest, FormError> {
        Ok(UserRequest {
            username: Some(required("username", &self.username)?),
            email: Some(email(&self.email)?),
            first_name: Some(required("first name", &self.first_name)?),
            last_name: Some(required("last name", &self.last_name)?),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountDraft {
    pub id: Option<i64>,
    pub name: String,
    pub account_type: Option<AccountType>,
    pub balance: Option<Decimal>,
    pub currency: String,
    pub institution_name: String,
    pub account_number: String,
    pub interest_rate: Option<Decimal>,
    pub is_active: Option<bool>,
}

impl Default for AccountDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            account_type: None,
            balance: None,
            currency: "USD".into(),
            institution_name: String::new(),
            account_number: String::new(),
            interest_rate: None,
            is_active: None,
        }
    }
}

impl AccountDraft {
    pub fn from_existing(account: &Account) -> Self {
        Self {
            id: Some(account.id),
            name: account.name.clone().unwrap_or_default(),
            account_type: Some(account.account_type),
            balance: Some(account.balance),
            currency: account.currency.clone().unwrap_or_else(|| "USD".into()),
            institution_name: account.institution_name.clone().unwrap_or_default(),
            account_number: account.account_number.clone().unwrap_or_default(),
            interest_rate: account.interest_rate,
            is_active: Some(account.is_active),
        }
    }

    pub fn validate(&self) -> Result<AccountRequest, FormError> {
        let non_empty = |s: &str| Some(s.trim().to_string()).filter(|s| !s.is_empty());
        Ok(AccountRequest {
            name: required("name", &self.name)?,
            account_type: present("type", &self.account_type)?,
            balance: present("balance", &self.balance)?,
            currency: required("currency", &self.currency)?.to_uppercase(),
            institution_name: non_empty(&self.institution_name),
            account_number: non_empty(&self.account_number),
            interest_rate: self.interest_rate,
            is_active: self.is_active,
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RoleDraft {
    pub role_name: Option<RoleType>,
    pub description: String,
    pub permissions: BTreeSet<RolePermission>,
}

impl RoleDraft {
    pub fn validate(&self) -> Result<RoleRequest, FormError> {
        let role_name = present("role", &self.role_name)?;
        if role_name == RoleType::Other {
            return Err(FormError::Invalid {
                field: "role",
                reason: "unknown role name".into(),
            });
        }
        let description = Some(self.description.trim().to_string()).filter(|d| !d.is_empty());
        Ok(RoleRequest {
            role_name,
            description,
            permissions: self.permissions.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub transaction_type: TransactionType,
    pub account_id: Option<i64>,
    /// Target account for transfers and credit-card payments.
    pub to_account_id: Option<i64>,
    pub category_id: Option<i64>,
    pub amount: Option<Decimal>,
    pub date: NaiveDateTime,
    pub description: String,
    pub payment_method: String,
    pub status: String,
    pub is_recurring: bool,
    pub recurring_interval: Option<RecurringInterval>,
    pub next_due_date: Option<NaiveDateTime>,
}

impl TransactionDraft {
    pub fn new(now: NaiveDateTime) -> Self {
        Self {
            transaction_type: TransactionType::Income,
            account_id: None,
            to_account_id: None,
            category_id: None,
            amount: None,
            date: now,
            description: String::new(),
            payment_method: DEFAULT_PAYMENT_METHOD.into(),
            status: DEFAULT_STATUS.into(),
            is_recurring: false,
            recurring_interval: None,
            next_due_date: None,
        }
    }

    /// Prefill from a listed transaction. Listings carry names, so account and category ids
    /// are resolved by name when the record lacks them.
    pub fn from_existing(tx: &Transaction, accounts: &[Account], categories: &[Category]) -> Self {
        let account_id = tx.account_id.or_else(|| {
            let name = tx.account_name.as_deref()?;
            accounts
                .iter()
                .find(|a| a.name.as_deref() == Some(name))
                .map(|a| a.id)
        });
        let category_id = tx.category_id.or_else(|| {
            let name = tx.category.as_deref()?;
            categories.iter().find(|c| c.name == name).map(|c| c.id)
        });
        Self {
            transaction_type: tx.transaction_type,
            account_id,
            to_account_id: account_id,
            category_id,
            amount: Some(tx.amount),
            date: tx.date,
            description: tx.description.clone().unwrap_or_default(),
            payment_method: tx
                .payment_method
                .clone()
                .unwrap_or_else(|| DEFAULT_PAYMENT_METHOD.into()),
            status: tx.status.clone().unwrap_or_else(|| DEFAULT_STATUS.into()),
            is_recurring: tx.is_recurring,
            recurring_interval: tx.recurring_interval,
            next_due_date: tx.next_due_date,
        }
    }

    /// Picking an interval also fills in the default next due date.
    pub fn select_interval(&mut self, interval: RecurringInterval, now: NaiveDateTime) {
        self.recurring_interval = Some(interval);
        self.next_due_date = Some(next_due_date(interval, now));
    }

    pub fn needs_target_account(&self) -> bool {
        matches!(
            self.transaction_type,
            TransactionType::Transfer | TransactionType::CreditCardPayment
        )
    }

    pub fn validate(&self, user_id: i64) -> Result<TransactionRequest, FormError> {
        if self.transaction_type == TransactionType::Other {
            return Err(FormError::Invalid {
                field: "type",
                reason: "unknown transaction type".into(),
            });
        }
        let amount = present("amount", &self.amount)?;
        let account_id = present("account", &self.account_id)?;
        let to_account_id = if self.needs_target_account() {
            Some(present("target account", &self.to_account_id)?)
        } else {
            self.to_account_id
        };
        let recurring = self.is_recurring || self.transaction_type == TransactionType::Recurring;
        let (recurring_interval, next_due_date) = if recurring {
            (
                Some(present("recurring interval", &self.recurring_interval)?),
                self.next_due_date,
            )
        } else {
            (None, None)
        };
        Ok(TransactionRequest {
            user_id,
            transaction_type: self.transaction_type,
            account_id,
            to_account_id,
            category_id: self.category_id,
            amount,
            date: self.date,
            description: self.description.trim().to_string(),
            payment_method: one_of("payment method", &self.payment_method, PAYMENT_METHODS)?,
            status: one_of("status", &self.status, STATUSES)?,
            is_recurring: recurring,
            recurring_interval,
            next_due_date,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetDraft {
    pub id: Option<i64>,
    pub description: String,
    pub amount_limit: Option<Decimal>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub budget_type: BudgetType,
    pub rollover_amount: Decimal,
    pub category_id: Option<i64>,
}

impl Default for BudgetDraft {
    fn default() -> Self {
        Self {
            id: None,
            description: String::new(),
            amount_limit: None,
            start_date: None,
            end_date: None,
            budget_type: BudgetType::Flexible,
            rollover_amount: Decimal::ZERO,
            category_id: None,
        }
    }
}

impl BudgetDraft {
    /// The budget report lists category names; the id is looked up among `categories`.
    pub fn from_existing(budget: &Budget, categories: &[Category]) -> Self {
        let category_id = budget.category_id.or_else(|| {
            let name = budget.category.as_deref()?;
            categories.iter().find(|c| c.name == name).map(|c| c.id)
        });
        Self {
            id: Some(budget.id),
            description: budget.description.clone(),
            amount_limit: Some(budget.amount_limit),
            start_date: Some(budget.start_date),
            end_date: Some(budget.end_date),
            budget_type: budget.budget_type,
            rollover_amount: budget.rollover_amount,
            category_id,
        }
    }

    pub fn validate(&self) -> Result<BudgetRequest, FormError> {
        Ok(BudgetRequest {
            user_id: None,
            description: self.description.trim().to_string(),
            amount_limit: present("amount limit", &self.amount_limit)?,
            start_date: present("start date", &self.start_date)?,
            end_date: present("end date", &self.end_date)?,
            budget_type: self.budget_type,
            rollover_amount: self.rollover_amount,
            category_id: present("category", &self.category_id)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryDraft {
    pub id: Option<i64>,
    pub name: String,
    pub category_type: CategoryType,
    pub icon: String,
    pub color_code: String,
}

impl Default for CategoryDraft {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            category_type: CategoryType::Expense,
            icon: String::new(),
            color_code: DEFAULT_COLOR.into(),
        }
    }
}

impl CategoryDraft {
    pub fn from_existing(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            category_type: category.category_type,
            icon: category.icon.clone().unwrap_or_default(),
            color_code: category
                .color_code
                .clone()
                .unwrap_or_else(|| DEFAULT_COLOR.into()),
        }
    }

    pub fn validate(&self) -> Result<CategoryRequest, FormError> {
        let color_code = self.color_code.trim().to_string();
        if !COLOR.is_match(&color_code) {
            return Err(FormError::Invalid {
                field: "colour",
                reason: format!("'{color_code}' is not a #RRGGBB colour"),
            });
        }
        Ok(CategoryRequest {
            user_id: None,
            name: required("name", &self.name)?,
            category_type: self.category_type,
            icon: self.icon.trim().to_string(),
            color_code,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentKind {
    Monthly,
    Extra,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanPaymentDraft {
    pub kind: PaymentKind,
    pub monthly_payment: Decimal,
    pub extra_payment: Decimal,
    pub payment_date: NaiveDate,
}

impl LoanPaymentDraft {
    /// Monthly payment prefilled from the loan's scheduled amount.
    pub fn for_loan(loan: &Loan, today: NaiveDate) -> Self {
        Self {
            kind: PaymentKind::Monthly,
            monthly_payment: loan.monthly_payment,
            extra_payment: Decimal::ZERO,
            payment_date: today,
        }
    }

    pub fn amount(&self) -> Decimal {
        match self.kind {
            PaymentKind::Monthly => self.monthly_payment,
            PaymentKind::Extra => self.extra_payment,
        }
    }

    pub fn validate(&self) -> Result<LoanPaymentRequest, FormError> {
        let amount = self.amount();
        if amount <= Decimal::ZERO {
            return Err(FormError::Invalid {
                field: "payment amount",
                reason: "enter a payment amount greater than zero".into(),
            });
        }
        Ok(match self.kind {
            PaymentKind::Monthly => LoanPaymentRequest {
                payment_amount: amount,
                extra_payment: Decimal::ZERO,
            },
            PaymentKind::Extra => LoanPaymentRequest {
                payment_amount: Decimal::ZERO,
                extra_payment: amount,
            },
        })
    }
}
