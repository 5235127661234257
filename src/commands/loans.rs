// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::{announce, decimal_opt, surfaced};
use crate::client::ApiClient;
use crate::forms::{LoanPaymentDraft, PaymentKind};
use crate::pages::CancelToken;
use crate::pages::loans::LoansPage;
use crate::utils::{fmt_money, id_arg, maybe_print_json};
use crate::views::{loan_payments_table, loans_table};
use anyhow::{Result, anyhow};
use chrono::Local;

pub fn handle(client: &ApiClient, m: &clap::ArgMatches) -> Result<()> {
    let mut page = LoansPage::new(client, CancelToken::new());
    surfaced(page.mount(), &page.state)?;
    match m.subcommand() {
        Some(("list", sub)) => {
            if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &page.loans())? {
                return Ok(());
            }
            println!("{}", loans_table(page.loans()));
            let totals = page.totals();
            println!(
                "Loans: {}  Borrowed: {}  Outstanding: {}",
                totals.count,
                fmt_money(&totals.borrowed),
                fmt_money(&totals.outstanding)
            );
        }
        Some(("pay", sub)) => {
            let id = id_arg(sub, "id")?;
            let loan = page
                .find(id)
                .ok_or_else(|| anyhow!("No loan with id {}", id))?;
            let mut draft = LoanPaymentDraft::for_loan(loan, Local::now().date_naive());
            if let Some(amount) = decimal_opt(sub, "amount")? {
                draft.monthly_payment = amount;
            }
            if let Some(extra) = decimal_opt(sub, "extra")? {
                draft.kind = PaymentKind::Extra;
                draft.extra_payment = extra;
            }
            let payment = surfaced(page.pay(id, &draft), &page.state)?;
            announce(&page.state);
            println!(
                "Principal {}  Interest {}  Remaining {}",
                fmt_money(&payment.principal_paid),
                fmt_money(&payment.interest_paid),
                fmt_money(&payment.remaining_balance)
            );
        }
        Some(("payments", sub)) => {
            let id = id_arg(sub, "id")?;
            surfaced(page.load_payments(id), &page.state)?;
            let payments = page.payments(id).unwrap_or_default();
            if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &payments)? {
                println!("{}", loan_payments_table(payments));
            }
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
