// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::forms::{LoginDraft, RegisterDraft};
use crate::models::LoginResponse;
use crate::resources::auth;
use crate::utils::{arg, opt_arg};
use anyhow::{Context, Result};
use tracing::info;

/// Log in and persist token, first role and user id.
pub fn login(client: &ApiClient, draft: &LoginDraft) -> Result<LoginResponse> {
    let req = draft.validate()?;
    let resp = auth::login(client, &req).map_err(|e| match e {
        ApiError::Unauthorized { .. } => {
            anyhow::Error::new(e).context("Invalid username or password.")
        }
        other => {
            let banner = other.banner("Login failed. Please try again.");
            anyhow::Error::new(other).context(banner)
        }
    })?;
    client
        .session()
        .store_login(&resp)
        .context("Failed to store session")?;
    info!(user = ?resp.user_name, role = ?resp.primary_role(), "logged in");
    Ok(resp)
}

pub fn handle_login(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let draft = LoginDraft {
        user_name: arg(m, "user")?.to_string(),
        password: arg(m, "password")?.to_string(),
    };
    let resp = login(client, &draft)?;
    println!(
        "Logged in as {}{}",
        resp.user_name.as_deref().unwrap_or(&draft.user_name),
        resp.primary_role()
            .map(|r| format!(" ({r})"))
            .unwrap_or_default()
    );
    Ok(())
}

pub fn handle_register(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut draft = RegisterDraft {
        username: arg(m, "username")?.to_string(),
        email: arg(m, "email")?.to_string(),
        password: arg(m, "password")?.to_string(),
        first_name: arg(m, "first-name")?.to_string(),
        last_name: arg(m, "last-name")?.to_string(),
        phone_number: opt_arg(m, "phone").unwrap_or_default(),
        address: opt_arg(m, "address").unwrap_or_default(),
        ..RegisterDraft::default()
    };
    if let Some(v) = opt_arg(m, "currency") {
        draft.currency = v;
    }
    if let Some(v) = opt_arg(m, "timezone") {
        draft.timezone = v;
    }
    if let Some(v) = opt_arg(m, "language") {
        draft.preferred_language = v;
    }
    let req = draft.validate()?;
    auth::register(client, &req).map_err(|e| {
        let banner = e.banner("Registration failed. Please try again.");
        anyhow::Error::new(e).context(banner)
    })?;
    println!("Registered '{}'. Run `finsync login {}` to sign in.", req.username, req.username);
    Ok(())
}

pub fn handle_logout(client: &ApiClient) -> Result<()> {
    client.session().clear().context("Failed to clear session")?;
    println!("Logged out");
    Ok(())
}
