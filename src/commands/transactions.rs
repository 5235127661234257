// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, date_opt, enum_opt, surfaced};
use crate::client::ApiClient;
use crate::forms::TransactionDraft;
use crate::models::{RecurringInterval, TransactionType};
use crate::pages::CancelToken;
use crate::pages::transactions::TransactionsPage;
use crate::utils::{arg, fmt_money, maybe_print_json, opt_arg, parse_datetime, parse_decimal};
use crate::views::transactions_table;
use anyhow::{Result, anyhow};
use chrono::Local;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(client, sub),
        Some(("add", sub)) => add(client, sub),
        _ => Ok(()),
    }
}

/// Mount the page and apply the search/date/account filters given on the command line.
pub fn filtered_page<'a>(
    client: &'a ApiClient,
    sub: &clap::ArgMatches,
) -> Result<TransactionsPage<'a>> {
    let mut page = TransactionsPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    if let Some(account) = sub.get_one::<i64>("account") {
        surfaced(page.select_account(Some(*account)), &page.state)?;
    }
    if let Some(q) = opt_arg(sub, "search") {
        page.set_query(q);
    }
    page.set_dates(date_opt(sub, "from")?, date_opt(sub, "to")?);
    Ok(page)
}

fn list(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let page = filtered_page(client, sub)?;
    let visible = page.visible();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &visible)? {
        return Ok(());
    }
    println!("{}", transactions_table(&visible));
    let totals = page.totals();
    println!(
        "Income: {}  Expense: {}  Net: {}",
        fmt_money(&totals.income),
        fmt_money(&totals.expense),
        fmt_money(&totals.net())
    );
    if totals.overspending() {
        println!("Warning: expenses exceed income for the transactions shown.");
    }
    Ok(())
}

fn add(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let now = Local::now().naive_local();
    let mut draft = TransactionDraft::new(now);
    draft.transaction_type = enum_opt(sub, "type", TransactionType::ALL, TransactionType::parse)?
        .ok_or_else(|| anyhow!("missing required argument 'type'"))?;
    draft.account_id = sub.get_one::<i64>("account").copied();
    draft.to_account_id = sub.get_one::<i64>("to-account").copied();
    draft.category_id = sub.get_one::<i64>("category").copied();
    draft.amount = Some(parse_decimal(arg(sub, "amount")?)?);
    if let Some(date) = sub.get_one::<String>("date") {
        draft.date = parse_datetime(date)?;
    }
    if let Some(desc) = opt_arg(sub, "description") {
        draft.description = desc;
    }
    if let Some(method) = opt_arg(sub, "method") {
        draft.payment_method = method;
    }
    if let Some(status) = opt_arg(sub, "status") {
        draft.status = status;
    }
    if let Some(interval) =
        enum_opt(sub, "repeat", RecurringInterval::ALL, RecurringInterval::parse)?
    {
        draft.is_recurring = true;
        draft.select_interval(interval, now);
        if let Some(due) = sub.get_one::<String>("next-due") {
            draft.next_due_date = Some(parse_datetime(due)?);
        }
    }

    let mut page = TransactionsPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    surfaced(page.submit(&draft), &page.state)?;
    announce(&page.state);
    Ok(())
}
