// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, enum_opt, surfaced};
use crate::client::ApiClient;
use crate::forms::CategoryDraft;
use crate::models::CategoryType;
use crate::pages::CancelToken;
use crate::pages::categories::CategoriesPage;
use crate::utils::{id_arg, maybe_print_json, opt_arg};
use crate::views::categories_table;
use anyhow::{Result, anyhow};

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = CategoriesPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            let shown = if sub.get_flag("deleted") {
                page.categories().iter().collect()
            } else {
                page.active()
            };
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &shown)? {
                println!("{}", categories_table(&shown));
            }
        }
        Some(("add", sub)) => {
            let mut draft = CategoryDraft::default();
            apply_fields(&mut draft, sub)?;
            surfaced(page.save(&draft), &page.state)?;
            announce(&page.state);
        }
        Some(("edit", sub)) => {
            let id = id_arg(sub, "id")?;
            let existing = page
                .find(id)
                .ok_or_else(|| anyhow!("No category with id {}", id))?;
            let mut draft = CategoryDraft::from_existing(existing);
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

fn apply_fields(draft: &mut CategoryDraft, sub: &clap::ArgMatches) -> Result<()> {
    if let Some(name) = opt_arg(sub, "name") {
        draft.name = name;
    }
    if let Some(t) = enum_opt(sub, "type", CategoryType::ALL, CategoryType::parse)? {
        draft.category_type = t;
    }
    if let Some(icon) = opt_arg(sub, "icon") {
        draft.icon = icon;
    }
    if let Some(color) = opt_arg(sub, "color") {
        draft.color_code = color;
    }
    Ok(())
}
