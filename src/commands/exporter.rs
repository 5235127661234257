// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::transactions::filtered_page;
use crate::client::ApiClient;
use crate::models::Transaction;
use crate::utils::arg;
use anyhow::{Result, bail};
use serde_json::json;
use std::path::Path;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("tx", sub)) => export_transactions(client, sub),
        _ => Ok(()),
    }
}

fn export_transactions(client: &ApiClient, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = arg(sub, "format")?.to_lowercase();
    let out = arg(sub, "out")?;
    let page = filtered_page(client, sub)?;
    let visible = page.visible();
    write_transactions(&visible, &fmt, Path::new(out))?;
    println!("Exported {} transactions to {}", visible.len(), out);
    Ok(())
}

/// Write the rows shown by `tx list` (same filters) as CSV or a pretty JSON array.
pub fn write_transactions(txs: &[&Transaction], fmt: &str, out: &Path) -> Result<()> {
    match fmt {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "id", "date", "type", "amount", "account", "category", "description", "method",
                "status", "recurring",
            ])?;
            for t in txs {
                wtr.write_record([
                    t.id.map(|id| id.to_string()).unwrap_or_default(),
                    t.date.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    t.transaction_type.to_string(),
                    t.amount.to_string(),
                    t.account_name.clone().unwrap_or_default(),
                    t.category.clone().unwrap_or_default(),
                    t.description.clone().unwrap_or_default(),
                    t.payment_method.clone().unwrap_or_default(),
                    t.status.clone().unwrap_or_default(),
                    t.recurring_interval
                        .filter(|_| t.is_recurring)
                        .map(|i| i.to_string())
                        .unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    json!({
                        "id": t.id,
                        "date": t.date,
                        "type": t.transaction_type,
                        "amount": t.amount,
                        "account": t.account_name,
                        "category": t.category,
                        "description": t.description,
                        "method": t.payment_method,
                        "status": t.status,
                        "recurringInterval": t.recurring_interval.filter(|_| t.is_recurring),
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        other => bail!("Unknown format: {} (use csv|json)", other),
    }
    Ok(())
}
