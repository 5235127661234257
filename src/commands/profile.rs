// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, surfaced};
use crate::client::ApiClient;
use crate::pages::CancelToken;
use crate::pages::profile::ProfilePage;
use crate::utils::{maybe_print_json, opt_arg};
use crate::views::profile_table;
use anyhow::{Result, anyhow, bail};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = ProfilePage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("update", sub)) => {
            let mut draft = page
                .draft()
                .ok_or_else(|| anyhow!("Profile is not loaded"))?;
            let fields = [
                ("first-name", &mut draft.first_name),
                ("last-name", &mut draft.last_name),
                ("email", &mut draft.email),
                ("phone", &mut draft.phone_number),
                ("address", &mut draft.address),
                ("currency", &mut draft.currency),
                ("timezone", &mut draft.timezone),
                ("language", &mut draft.preferred_language),
            ];
            for (name, slot) in fields {
                if let Some(v) = opt_arg(sub, name) {
                    *slot = v;
                }
            }
            surfaced(page.update(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("delete", sub)) => {
            if !sub.get_flag("yes") {
                bail!("Refusing to delete your account without --yes");
            }
            surfaced(page.delete_account(), &page.state)?;
            println!("Your account was deleted and you have been signed out.");
        }
        Some(("show", sub)) => show(&page, sub)?,
        _ => show(&page, m)?,
    }
    Ok(())
}

fn show(page: &ProfilePage<'_>, sub: &clap::ArgMatches) -> Result<()> {
    let user = page.user().ok_or_else(|| anyhow!("Profile is not loaded"))?;
    let json = sub.try_get_one::<bool>("json").ok().flatten().copied().unwrap_or(false);
    let jsonl = sub.try_get_one::<bool>("jsonl").ok().flatten().copied().unwrap_or(false);
    if !maybe_print_json(json, jsonl, user)? {
        println!("{}", profile_table(user));
    }
    Ok(())
}
