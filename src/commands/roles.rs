// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, surfaced};
use crate::client::ApiClient;
use crate::forms::RoleDraft;
use crate::models::{RolePermission, RoleType};
use crate::pages::CancelToken;
use crate::pages::roles::RolesPage;
use crate::utils::{arg, maybe_print_json, opt_arg};
use crate::views::roles_table;
use anyhow::{Result, anyhow};

fn role_name(sub: &clap::ArgMatches) -> Result<RoleType> {
    let raw = arg(sub, "name")?;
    RoleType::parse(raw).ok_or_else(|| anyhow!("Unknown role '{}'", raw))
}

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = RolesPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &page.roles())? {
                println!("{}", roles_table(page.roles()));
            }
        }
        Some(("set", sub)) => {
            let name = role_name(sub)?;
            let mut draft = RoleDraft {
                role_name: Some(name),
                ..RoleDraft::default()
            };
            if let Some(existing) = page.find(name) {
                draft.description = existing.description.clone().unwrap_or_default();
                draft.permissions = existing.permissions.clone();
            }
            if let Some(desc) = opt_arg(sub, "description") {
                draft.description = desc;
            }
            if let Some(perms) = sub.get_many::<String>("permission") {
                draft.permissions = perms
                    .map(|p| {
                        RolePermission::parse(p).ok_or_else(|| anyhow!("Unknown permission '{}'", p))
                    })
                    .collect::<Result<_>>()?;
            }
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("rm", sub)) => {
            let name = role_name(sub)?;
            surfaced(page.delete(name), &page.state)?;
            announce(&page.state);
        }
        _ => {}
    }
    Ok(())
}
