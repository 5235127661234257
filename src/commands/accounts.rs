// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, decimal_opt, enum_opt, surfaced};
use crate::client::ApiClient;
use crate::forms::AccountDraft;
use crate::models::AccountType;
use crate::pages::CancelToken;
use crate::pages::accounts::AccountsPage;
use crate::utils::{id_arg, maybe_print_json, opt_arg};
use crate::views::AccountsView;
use anyhow::{Result, anyhow};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = AccountsPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => list(&mut page, sub)?,
        Some(("add", sub)) => {
            let mut draft = AccountDraft::default();
            apply_fields(&mut draft, sub)?;
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("edit", sub)) => {
            let id = id_arg(sub, "id")?;
            let existing = page
                .find(id)
                .ok_or_else(|| anyhow!("No account with id {}", id))?;
            let mut draft = AccountDraft::from_existing(existing);
            apply_fields(&mut draft, sub)?;
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("rm", sub)) => {
            let id = id_arg(sub, "id")?;
            surfaced(page.delete(id), &page.state)?;
            announce(&page.state);
        }
        Some(("restore", sub)) => {
            let id = id_arg(sub, "id")?;
            surfaced(page.restore(id), &page.state)?;
            announce(&page.state);
        }
        _ => {}
    }
    Ok(())
}

fn list(page: &mut AccountsPage<'_>, sub: &clap::ArgMatches) -> Result<()> {
    if sub.get_flag("all") {
        surfaced(page.show_all(), &page.state)?;
    }
    let accounts = page.all_accounts().unwrap_or(page.accounts());
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &accounts)? {
        return Ok(());
    }
    let mut view = AccountsView::default();
    if sub.get_flag("expand-all") {
        view.expand_all(accounts);
    }
    for id in sub.get_many::<i64>("expand").into_iter().flatten() {
        view.toggle(*id);
    }
    println!("{}", view.render(accounts));
    Ok(())
}

/// Overlay whatever fields were given on the command line.
fn apply_fields(draft: &mut AccountDraft, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(name) = opt_arg(sub, "name") {
        draft.name = name;
    }
    if let Some(t) = enum_opt(sub, "type", AccountType::ALL, AccountType::parse)? {
        draft.account_type = Some(t);
    }
    if let Some(balance) = decimal_opt(sub, "balance")? {
        draft.balance = Some(balance);
    }
    if let Some(ccy) = opt_arg(sub, "currency") {
        draft.currency = ccy;
    }
    if let Some(inst) = opt_arg(sub, "institution") {
        draft.institution_name = inst;
    }
    if let Some(number) = opt_arg(sub, "number") {
        draft.account_number = number;
    }
    if let Some(rate) = decimal_opt(sub, "rate")? {
        draft.interest_rate = Some(rate);
    }
    if let Some(active) = sub.get_one::<bool>("active") {
        draft.is_active = Some(*active);
    }
    Ok(())
}
