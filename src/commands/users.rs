// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, surfaced};
use crate::client::ApiClient;
use crate::forms::UserDraft;
use crate::pages::CancelToken;
use crate::pages::users::UsersPage;
use crate::utils::{id_arg, maybe_print_json, opt_arg};
use crate::views::users_table;
use anyhow::{Result, anyhow};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = UsersPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &page.users())? {
                println!("{}", users_table(page.users()));
            }
        }
        Some(("add", sub)) => {
            let mut draft = UserDraft::default();
            apply_fields(&mut draft, sub);
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("edit", sub)) => {
            let id = id_arg(sub, "id")?;
            let existing = page
                .users()
                .iter()
                .find(|u| u.id == id)
                .ok_or_else(|| anyhow!("No user with id {}", id))?;
            let mut draft = UserDraft::from_existing(existing);
            apply_fields(&mut draft, sub);
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

fn apply_fields(draft: &mut UserDraft, sub: &clap::ArgMatches) {
    if let Some(v) = opt_arg(sub, "username") {
        draft.username = v;
    }
    if let Some(v) = opt_arg(sub, "email") {
        draft.email = v;
    }
    if let Some(v) = opt_arg(sub, "first-name") {
        draft.first_name = v;
    }
    if let Some(v) = opt_arg(sub, "last-name") {
        draft.last_name = v;
    }
}
