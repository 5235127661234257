// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, date_opt, decimal_opt, enum_opt, surfaced};
use crate::client::ApiClient;
use crate::forms::BudgetDraft;
use crate::models::BudgetType;
use crate::pages::CancelToken;
use crate::pages::budgets::{BudgetFilter, BudgetsPage};
use crate::utils::{fmt_money, id_arg, maybe_print_json, opt_arg};
use crate::views::budgets_table;
use anyhow::{Result, anyhow};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = BudgetsPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => list(&mut page, sub)?,
        Some(("add", sub)) => {
            let mut draft = BudgetDraft::default();
            apply_fields(&mut draft, sub)?;
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("edit", sub)) => {
            let id = id_arg(sub, "id")?;
            let existing = page
                .find(id)
                .ok_or_else(|| anyhow!("No budget with id {}", id))?;
            let mut draft = BudgetDraft::from_existing(existing, page.categories());
            apply_fields(&mut draft, sub)?;
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            surfaced(page.delete(id), &page.state)?;
            announce(&page.state);
        }
        _ => {}
    }
    Ok(())
}

fn list(page: &mut BudgetsPage<'_>, sub: &clap::ArgMatches) -> Result<()> {
    page.filter = BudgetFilter {
        query: opt_arg(sub, "search").unwrap_or_default(),
        from: date_opt(sub, "from")?,
        to: date_opt(sub, "to")?,
    };
    let visible = page.visible();
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &visible)? {
        return Ok(());
    }
    println!("{}", budgets_table(&visible));
    let report = page.report();
    println!(
        "Total limit: {}  Total rollover: {}",
        fmt_money(&report.total_budget_limit),
        fmt_money(&report.total_rollover_amount)
    );
    Ok(())
}

fn apply_fields(draft: &mut BudgetDraft, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(category) = sub.get_one::<i64>("category") {
        draft.category_id = Some(*category);
    }
    if let Some(limit) = decimal_opt(sub, "limit")? {
        draft.amount_limit = Some(limit);
    }
    if let Some(start) = date_opt(sub, "start")? {
        draft.start_date = Some(start);
    }
    if let Some(end) = date_opt(sub, "end")? {
        draft.end_date = Some(end);
    }
    if let Some(desc) = opt_arg(sub, "description") {
        draft.description = desc;
    }
    if let Some(t) = enum_opt(sub, "type", BudgetType::ALL, BudgetType::parse)? {
        draft.budget_type = t;
    }
    if let Some(rollover) = decimal_opt(sub, "rollover")? {
        draft.rollover_amount = rollover;
    }
    Ok(())
}
