// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::surfaced;
use crate::client::ApiClient;
use crate::pages::CancelToken;
use crate::pages::dashboard::DashboardPage;
use crate::utils::{fmt_money, maybe_print_json};
use crate::views::type_counts_table;
use anyhow::Result;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = DashboardPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    let summary = page.summary();
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &summary)? {
        return Ok(());
    }
    if let Some(user) = page.user() {
        println!("Welcome back, {}!", user.full_name());
    }
    println!("Total balance: {}", fmt_money(&summary.total_balance));
    println!(
        "Active accounts: {} of {}",
        summary.active_accounts,
        page.accounts().len()
    );
    println!("{}", type_counts_table(&summary.type_counts));
    if let (Some(users), Some(roles)) = (summary.user_count, summary.role_count) {
        println!("Users: {}  Roles: {}", users, roles);
    }
    Ok(())
}
