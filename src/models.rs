// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Records mirrored from the finance API. The client never owns any of these; they are
//! discarded when the controller holding them goes away and fetched fresh next time.

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

fn default_true() -> bool {
    true
}

/// The transaction detail rows carry `nextDueDate` as a bare day; other payloads send a full
/// timestamp. A bare day is read as midnight.
fn date_or_datetime<'de, D>(de: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(de)? else {
        return Ok(None);
    };
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(Some(dt));
    }
    raw.parse::<NaiveDate>()
        .map(|d| Some(d.and_time(chrono::NaiveTime::MIN)))
        .map_err(serde::de::Error::custom)
}

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(#[serde(rename = $wire)] $variant,)+
            #[serde(other, rename = "OTHER")]
            Other,
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire,)+
                    $name::Other => "OTHER",
                }
            }

            pub fn parse(s: &str) -> Option<Self> {
                let s = s.trim().to_uppercase().replace(['-', ' '], "_");
                Self::ALL.iter().copied().find(|v| v.as_str() == s)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_enum! {
    pub enum AccountType {
        Checking => "CHECKING",
        Savings => "SAVINGS",
        Credit => "CREDIT",
        Investment => "INVESTMENT",
    }
}

wire_enum! {
    pub enum RoleType {
        Admin => "ADMIN",
        User => "USER",
        Manager => "MANAGER",
        CustomerService => "CUSTOMER_SERVICE",
    }
}

wire_enum! {
    pub enum RolePermission {
        Read => "READ",
        Create => "CREATE",
        Write => "WRITE",
        Update => "UPDATE",
        Delete => "DELETE",
        ManageUsers => "MANAGE_USERS",
        SystemAdmin => "SYSTEM_ADMIN",
        RoleAssign => "ROLE_ASSIGN",
    }
}

wire_enum! {
    pub enum TransactionType {
        Income => "INCOME",
        Expense => "EXPENSE",
        Transfer => "TRANSFER",
        CreditCardPayment => "CREDIT_CARD_PAYMENT",
        Recurring => "RECURRING",
    }
}

wire_enum! {
    pub enum RecurringInterval {
        Daily => "DAILY",
        Weekly => "WEEKLY",
        Monthly => "MONTHLY",
        Yearly => "YEARLY",
    }
}

wire_enum! {
    pub enum BudgetType {
        Flexible => "FLEXIBLE",
        Strict => "STRICT",
    }
}

wire_enum! {
    pub enum LoanStatus {
        Active => "ACTIVE",
        PaidOff => "PAID_OFF",
        Defaulted => "DEFAULTED",
    }
}

wire_enum! {
    pub enum CategoryType {
        Income => "INCOME",
        Expense => "EXPENSE",
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(alias = "userId")]
    pub id: i64,
    #[serde(alias = "userName", default)]
    pub username: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub preferred_language: Option<String>,
    #[serde(default)]
    pub profile_picture: Option<String>,
    #[serde(alias = "dateCreated", default)]
    pub created_at: Option<NaiveDateTime>,
    #[serde(alias = "dateUpdated", default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name).trim().to_string()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(alias = "accountId")]
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(alias = "type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub balance: Decimal,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub institution_name: Option<String>,
    #[serde(default)]
    pub interest_rate: Option<Decimal>,
    #[serde(alias = "isDeleted", default)]
    pub deleted: bool,
    #[serde(default)]
    pub user_id: Option<i64>,
}

impl Account {
    /// Label used in tables and pickers: the name, else the number, else the id.
    pub fn label(&self) -> String {
        self.name
            .clone()
            .or_else(|| self.account_number.clone())
            .unwrap_or_else(|| format!("#{}", self.id))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    #[serde(alias = "roleId", default)]
    pub id: Option<i64>,
    pub role_name: RoleType,
    #[serde(default)]
    pub role_type: Option<RoleType>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub permissions: BTreeSet<RolePermission>,
    #[serde(default)]
    pub users: Vec<User>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    /// Absent from the per-user and per-account detail rows.
    #[serde(alias = "transactionId", default)]
    pub id: Option<i64>,
    pub date: NaiveDateTime,
    pub transaction_type: TransactionType,
    pub amount: Decimal,
    #[serde(default)]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub account_name: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub payment_method: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(alias = "recurring", default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurring_interval: Option<RecurringInterval>,
    #[serde(default, deserialize_with = "date_or_datetime")]
    pub next_due_date: Option<NaiveDateTime>,
    #[serde(default)]
    pub to_account_id: Option<i64>,
    #[serde(default)]
    pub date_created: Option<NaiveDateTime>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Budget {
    #[serde(alias = "budgetId")]
    pub id: i64,
    #[serde(default)]
    pub description: String,
    pub amount_limit: Decimal,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub budget_type: BudgetType,
    #[serde(default)]
    pub rollover_amount: Decimal,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub spent: Decimal,
    #[serde(default)]
    pub percentage_used: i32,
    #[serde(alias = "isDeleted", default)]
    pub deleted: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BudgetReport {
    #[serde(default)]
    pub total_budget_limit: Decimal,
    #[serde(default)]
    pub total_rollover_amount: Decimal,
    #[serde(default)]
    pub budgets: Vec<Budget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loan {
    #[serde(alias = "loanId")]
    pub id: i64,
    pub lender_name: String,
    #[serde(default)]
    pub amount_borrowed: Decimal,
    #[serde(default)]
    pub number_of_years: Option<u32>,
    #[serde(default)]
    pub interest_rate: Decimal,
    #[serde(default)]
    pub monthly_payment: Decimal,
    #[serde(default)]
    pub outstanding_balance: Decimal,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub status: LoanStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoanPayment {
    #[serde(alias = "paymentId", default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub payment_amount: Decimal,
    #[serde(default)]
    pub extra_payment: Decimal,
    #[serde(default)]
    pub principal_paid: Decimal,
    #[serde(default)]
    pub interest_paid: Decimal,
    #[serde(default)]
    pub total_amount_paid: Decimal,
    #[serde(default)]
    pub remaining_balance: Decimal,
    #[serde(default)]
    pub payment_date: Option<NaiveDate>,
    #[serde(default)]
    pub next_due_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "categoryId")]
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub color_code: Option<String>,
    #[serde(alias = "isDeleted", default)]
    pub deleted: bool,
}

/// Body of a successful `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub user_name: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl LoginResponse {
    /// Role string kept in the session; the first role the backend reports.
    pub fn primary_role(&self) -> Option<&str> {
        self.roles.first().map(String::as_str)
    }
}
