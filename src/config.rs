// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::session::Session;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/api";
pub const API_URL_ENV: &str = "FINSYNC_API_URL";
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_url: String,
    pub timeout: Duration,
}

impl Config {
    /// `explicit` is the `--api-url` flag (clap already folds `FINSYNC_API_URL` into it).
    /// Falls back to the stored URL, then the default.
    pub fn resolve(explicit: Option<&str>, session: &Session) -> rusqlite::Result<Self> {
        let api_url = match explicit {
            Some(url) => url.to_string(),
            None => session
                .api_url()?
                .unwrap_or_else(|| DEFAULT_API_URL.to_string()),
        };
        Ok(Self {
            api_url: normalize_url(&api_url),
            timeout: REQUEST_TIMEOUT,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

pub fn normalize_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}
