// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::{Config, normalize_url};
use crate::session::Session;
use crate::utils::{arg, pretty_table};
use anyhow::{Result, bail};

pub fn handle(session: &Session, config: &Config, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("set-url", sub)) => {
            let url = normalize_url(arg(sub, "url")?);
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                bail!("API URL must start with http:// or https://, got '{}'", url);
            }
            session.set_api_url(&url)?;
            println!("API URL set to {}", url);
        }
        Some(("show", _)) | None => {
            let stored = session.api_url()?.unwrap_or_else(|| "(not set)".into());
            let rows = vec![
                vec!["effective api url".into(), config.api_url.clone()],
                vec!["stored api url".into(), stored],
                vec!["timeout".into(), format!("{}s", config.timeout.as_secs())],
                vec![
                    "logged in".into(),
                    if session.token()?.is_some() { "yes" } else { "no" }.into(),
                ],
                vec!["role".into(), session.role()?.unwrap_or_default()],
            ];
            println!("{}", pretty_table(&["Setting", "Value"], rows));
        }
        _ => {}
    }
    Ok(())
}
