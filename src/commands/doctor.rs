// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::config::Config;
use crate::error::ApiError;
use crate::resources::users;
use crate::utils::pretty_table;
use anyhow::Result;

/// One line per finding; empty when everything checks out.
pub fn diagnose(client: &ApiClient, config: &Config) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();
    let session = client.session();

    if session.token()?.is_none() {
        rows.push(vec!["no_session".into(), "run `finsync login`".into()]);
        return Ok(rows);
    }
    if session.user_id()?.is_none() {
        rows.push(vec![
            "no_user_id".into(),
            "login response carried no user id; the profile is used instead".into(),
        ]);
    }
    match users::profile(client) {
        Ok(_) => {}
        Err(ApiError::Unauthorized { status }) => rows.push(vec![
            "session_rejected".into(),
            format!("HTTP {status}; session cleared, log in again"),
        ]),
        Err(ApiError::Transport(e)) => rows.push(vec![
            "unreachable".into(),
            format!("{}: {}", config.api_url, e),
        ]),
        Err(e) => rows.push(vec!["profile_failed".into(), e.to_string()]),
    }
    Ok(rows)
}

pub fn handle(client: &ApiClient, config: &Config) -> Result<()> {
    let rows = diagnose(client, config)?;
    if rows.is_empty() {
        println!("doctor: no issues found ({})", config.api_url);
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
