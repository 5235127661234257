// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The credential the client carries between runs. This is the only state shared by every
//! page: the HTTP client reads it on each call and clears it on 401/403.

use crate::db;
use crate::models::LoginResponse;
use rusqlite::Connection;
use std::path::Path;

const TOKEN: &str = "token";
const ROLE: &str = "role";
const USER_ID: &str = "user_id";
const API_URL: &str = "api_url";

pub struct Session {
    conn: Connection,
}

impl Session {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(db::open_or_init()?))
    }

    pub fn open(path: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(db::open_at(path)?))
    }

    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Ok(Self::new(db::open_in_memory()?))
    }

    pub fn token(&self) -> rusqlite::Result<Option<String>> {
        db::get_setting(&self.conn, TOKEN)
    }

    pub fn role(&self) -> rusqlite::Result<Option<String>> {
        db::get_setting(&self.conn, ROLE)
    }

    pub fn user_id(&self) -> rusqlite::Result<Option<i64>> {
        Ok(db::get_setting(&self.conn, USER_ID)?.and_then(|v| v.parse().ok()))
    }

    pub fn is_admin(&self) -> rusqlite::Result<bool> {
        Ok(self
            .role()?
            .is_some_and(|r| r.eq_ignore_ascii_case("ADMIN")))
    }

    pub fn set_token(&self, token: &str) -> rusqlite::Result<()> {
        db::set_setting(&self.conn, TOKEN, token)
    }

    /// Store everything a login hands back. Stale role/user id from an earlier login are
    /// dropped when the new response lacks them.
    pub fn store_login(&self, login: &LoginResponse) -> rusqlite::Result<()> {
        self.clear()?;
        self.set_token(&login.token)?;
        if let Some(role) = login.primary_role() {
            db::set_setting(&self.conn, ROLE, role)?;
        }
        if let Some(id) = login.user_id {
            db::set_setting(&self.conn, USER_ID, &id.to_string())?;
        }
        Ok(())
    }

    /// Forget the credential. Configuration such as the API URL survives.
    pub fn clear(&self) -> rusqlite::Result<()> {
        db::delete_settings(&self.conn, &[TOKEN, ROLE, USER_ID])
    }

    pub fn api_url(&self) -> rusqlite::Result<Option<String>> {
        db::get_setting(&self.conn, API_URL)
    }

    pub fn set_api_url(&self, url: &str) -> rusqlite::Result<()> {
        db::set_setting(&self.conn, API_URL, url)
    }
}
