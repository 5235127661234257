// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Table renderers. Each takes records and returns a table; none of them fetch or hold state,
//! apart from the per-row expand toggle of [`AccountsView`].

use crate::models::{
    Account, AccountType, Budget, Category, Loan, LoanPayment, Role, Transaction, User,
};
use crate::utils::{fmt_money, or_na, pretty_table};
use comfy_table::Table;
use rust_decimal::Decimal;
use std::collections::BTreeSet;

fn percent(d: Option<Decimal>) -> String {
    d.map(|v| format!("{}%", v.normalize()))
        .unwrap_or_else(|| "N/A".into())
}

fn yes_no(b: bool) -> String {
    if b { "Yes".into() } else { "No".into() }
}

pub fn users_table(users: &[User]) -> Table {
    let rows = users
        .iter()
        .map(|u| {
            vec![
                u.id.to_string(),
                u.username.clone(),
                u.email.clone(),
                u.full_name(),
                or_na(&u.phone_number),
            ]
        })
        .collect();
    pretty_table(&["ID", "Username", "Email", "Name", "Phone"], rows)
}

pub fn roles_table(roles: &[Role]) -> Table {
    let rows = roles
        .iter()
        .map(|r| {
            let perms: Vec<&str> = r.permissions.iter().map(|p| p.as_str()).collect();
            vec![
                r.role_name.to_string(),
                or_na(&r.description),
                perms.join(", "),
                r.users.len().to_string(),
            ]
        })
        .collect();
    pretty_table(&["Role", "Description", "Permissions", "Users"], rows)
}

/// Accounts table whose rows can be expanded to show institution, number, rate and status.
#[derive(Debug, Clone, Default)]
pub struct AccountsView {
    expanded: BTreeSet<i64>,
}

impl AccountsView {
    /// Returns whether the row is expanded afterwards.
    pub fn toggle(&mut self, id: i64) -> bool {
        if !self.expanded.remove(&id) {
            self.expanded.insert(id);
            return true;
        }
        false
    }

    pub fn is_expanded(&self, id: i64) -> bool {
        self.expanded.contains(&id)
    }

    pub fn expand_all(&mut self, accounts: &[Account]) {
        self.expanded.extend(accounts.iter().map(|a| a.id));
    }

    pub fn render(&self, accounts: &[Account]) -> Table {
        let mut rows = Vec::new();
        for a in accounts {
            let status = if a.deleted {
                "Deleted"
            } else if a.is_active {
                "Active"
            } else {
                "Inactive"
            };
            rows.push(vec![
                a.id.to_string(),
                a.label(),
                a.account_type.to_string(),
                fmt_money(&a.balance),
                a.currency.clone().unwrap_or_default(),
                status.to_string(),
            ]);
            if self.is_expanded(a.id) {
                rows.push(vec![
                    String::new(),
                    format!("  institution: {}", or_na(&a.institution_name)),
                    format!("number: {}", or_na(&a.account_number)),
                    format!("rate: {}", percent(a.interest_rate)),
                    String::new(),
                    String::new(),
                ]);
            }
        }
        pretty_table(
            &["ID", "Name", "Type", "Balance", "CCY", "Status"],
            rows,
        )
    }
}

pub fn type_counts_table(counts: &[(AccountType, usize)]) -> Table {
    let rows = counts
        .iter()
        .map(|(t, n)| vec![t.to_string(), n.to_string()])
        .collect();
    pretty_table(&["Type", "Accounts"], rows)
}

pub fn transactions_table(txs: &[&Transaction]) -> Table {
    let rows = txs
        .iter()
        .map(|t| {
            vec![
                t.id.map(|id| id.to_string()).unwrap_or_default(),
                t.date.format("%Y-%m-%d %H:%M").to_string(),
                t.transaction_type.to_string(),
                fmt_money(&t.amount),
                or_na(&t.account_name),
                or_na(&t.category),
                t.description.clone().unwrap_or_default(),
                or_na(&t.payment_method),
                or_na(&t.status),
                t.recurring_interval
                    .filter(|_| t.is_recurring)
                    .map(|i| i.to_string())
                    .unwrap_or_default(),
            ]
        })
        .collect();
    pretty_table(
        &[
            "ID", "Date", "Type", "Amount", "Account", "Category", "Description", "Method",
            "Status", "Repeats",
        ],
        rows,
    )
}

pub fn budgets_table(budgets: &[&Budget]) -> Table {
    let rows = budgets
        .iter()
        .map(|b| {
            vec![
                b.id.to_string(),
                b.description.clone(),
                or_na(&b.category),
                b.budget_type.to_string(),
                fmt_money(&b.amount_limit),
                fmt_money(&b.spent),
                format!("{}%", b.percentage_used),
                fmt_money(&b.rollover_amount),
                b.start_date.to_string(),
                b.end_date.to_string(),
            ]
        })
        .collect();
    pretty_table(
        &[
            "ID", "Description", "Category", "Type", "Limit", "Spent", "Used", "Rollover", "Start",
            "End",
        ],
        rows,
    )
}

pub fn categories_table(categories: &[&Category]) -> Table {
    let rows = categories
        .iter()
        .map(|c| {
            vec![
                c.id.to_string(),
                c.name.clone(),
                c.category_type.to_string(),
                c.icon.clone().unwrap_or_default(),
                c.color_code.clone().unwrap_or_default(),
                yes_no(c.deleted),
            ]
        })
        .collect();
    pretty_table(&["ID", "Name", "Type", "Icon", "Colour", "Deleted"], rows)
}

pub fn loans_table(loans: &[Loan]) -> Table {
    let rows = loans
        .iter()
        .map(|l| {
            vec![
                l.id.to_string(),
                l.lender_name.clone(),
                fmt_money(&l.amount_borrowed),
                percent(Some(l.interest_rate)),
                l.number_of_years.map(|y| y.to_string()).unwrap_or_default(),
                fmt_money(&l.monthly_payment),
                fmt_money(&l.outstanding_balance),
                l.due_date.map(|d| d.to_string()).unwrap_or_default(),
                l.status.to_string(),
            ]
        })
        .collect();
    pretty_table(
        &[
            "ID", "Lender", "Borrowed", "Rate", "Years", "Monthly", "Outstanding", "Due", "Status",
        ],
        rows,
    )
}

pub fn loan_payments_table(payments: &[LoanPayment]) -> Table {
    let rows = payments
        .iter()
        .map(|p| {
            vec![
                p.payment_date.map(|d| d.to_string()).unwrap_or_default(),
                fmt_money(&p.payment_amount),
                fmt_money(&p.extra_payment),
                fmt_money(&p.principal_paid),
                fmt_money(&p.interest_paid),
                fmt_money(&p.remaining_balance),
                p.next_due_date.map(|d| d.to_string()).unwrap_or_default(),
            ]
        })
        .collect();
    pretty_table(
        &["Paid on", "Amount", "Extra", "Principal", "Interest", "Remaining", "Next due"],
        rows,
    )
}

pub fn profile_table(user: &User) -> Table {
    let rows = vec![
        vec!["Username".into(), user.username.clone()],
        vec!["Name".into(), user.full_name()],
        vec!["Email".into(), user.email.clone()],
        vec!["Phone".into(), or_na(&user.phone_number)],
        vec!["Address".into(), or_na(&user.address)],
        vec!["Currency".into(), or_na(&user.currency)],
        vec!["Timezone".into(), or_na(&user.timezone)],
        vec!["Language".into(), or_na(&user.preferred_language)],
    ];
    pretty_table(&["Field", "Value"], rows)
}
