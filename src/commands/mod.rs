// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod auth;
pub mod budgets;
pub mod categories;
pub mod config;
pub mod dashboard;
pub mod doctor;
pub mod exporter;
pub mod loans;
pub mod profile;
pub mod roles;
pub mod transactions;
pub mod users;

use crate::error::ApiError;
use crate::pages::{SubmitError, ViewState};
use crate::utils::{parse_date, parse_decimal};
use anyhow::{Result, anyhow};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Attach the page's banner to a failed action so it is what the user reads first.
pub(crate) fn surfaced<T, E>(result: std::result::Result<T, E>, state: &ViewState) -> Result<T>
where
    E: Into<anyhow::Error>,
{
    result.map_err(|e| {
        let err = e.into();
        match &state.error {
            Some(banner) => err.context(banner.clone()),
            None => err,
        }
    })
}

/// Print the success notice while it is still live.
pub(crate) fn announce(state: &ViewState) {
    if let Some(msg) = state.success() {
        println!("{msg}");
    }
}

/// True when the failure means the stored session is gone or was never there.
pub fn needs_login(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<ApiError>()
            .is_some_and(ApiError::is_unauthorized)
            || matches!(
                cause.downcast_ref::<SubmitError>(),
                Some(SubmitError::Api(e)) if e.is_unauthorized()
            )
    })
}

pub(crate) fn decimal_opt(m: &clap::ArgMatches, name: &str) -> Result<Option<Decimal>> {
    m.get_one::<String>(name)
        .map(|s| parse_decimal(s))
        .transpose()
}

pub(crate) fn date_opt(m: &clap::ArgMatches, name: &str) -> Result<Option<NaiveDate>> {
    m.get_one::<String>(name).map(|s| parse_date(s)).transpose()
}

/// Parse a wire enum argument, listing the accepted spellings on failure.
pub(crate) fn enum_opt<T: Copy + std::fmt::Display>(
    m: &clap::ArgMatches,
    name: &str,
    all: &[T],
    parse: fn(&str) -> Option<T>,
) -> Result<Option<T>> {
    let Some(raw) = m.get_one::<String>(name) else {
        return Ok(None);
    };
    parse(raw).map(Some).ok_or_else(|| {
        let accepted: Vec<String> = all.iter().map(|v| v.to_string()).collect();
        anyhow!(
            "Invalid {} '{}', expected one of {}",
            name,
            raw,
            accepted.join(", ")
        )
    })
}
