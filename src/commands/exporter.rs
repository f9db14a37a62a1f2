// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{bail, Result};
use serde_json::json;

use crate::store::Ledger;

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("accounts", sub)) => export_accounts(ledger, sub),
        Some(("expenses", sub)) => export_expenses(ledger, sub),
        Some(("payouts", sub)) => export_payouts(ledger, sub),
        _ => Ok(()),
    }
}

fn target(sub: &clap::ArgMatches) -> Result<(String, String)> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap().clone();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }
    Ok((fmt, out))
}

fn export_accounts(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record(["firm", "account", "size", "currency", "type", "status", "start"])?;
            for a in ledger.accounts() {
                wtr.write_record([
                    a.prop_firm.clone(),
                    a.account_name.clone(),
                    a.account_size.to_string(),
                    a.currency.clone(),
                    a.r#type.to_string(),
                    a.status.to_string(),
                    a.start_date.map(|d| d.to_string()).unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = ledger
                .accounts()
                .iter()
                .map(|a| {
                    json!({
                        "firm": a.prop_firm, "account": a.account_name,
                        "size": a.account_size.to_string(), "currency": a.currency,
                        "type": a.r#type, "status": a.status, "start": a.start_date
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported accounts to {}", out);
    Ok(())
}

fn export_expenses(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record([
                "date", "firm", "account", "type", "description", "amount", "currency",
            ])?;
            for e in ledger.expenses() {
                wtr.write_record([
                    e.date.to_string(),
                    e.firm.clone(),
                    e.account.clone().unwrap_or_default(),
                    e.r#type.to_string(),
                    e.description.clone().unwrap_or_default(),
                    e.amount.to_string(),
                    e.currency.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = ledger
                .expenses()
                .iter()
                .map(|e| {
                    json!({
                        "date": e.date, "firm": e.firm, "account": e.account,
                        "type": e.r#type, "description": e.description,
                        "amount": e.amount.to_string(), "currency": e.currency
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported expenses to {}", out);
    Ok(())
}

fn export_payouts(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let (fmt, out) = target(sub)?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(&out)?;
            wtr.write_record([
                "date", "firm", "account", "gross", "split", "net", "currency", "method", "notes",
            ])?;
            for p in ledger.payouts() {
                wtr.write_record([
                    p.payout_date.to_string(),
                    p.firm.clone().unwrap_or_default(),
                    p.account.clone(),
                    p.gross_amount.to_string(),
                    p.split.map(|s| s.to_string()).unwrap_or_default(),
                    p.net_to_trader.to_string(),
                    p.currency.clone(),
                    p.method.clone().unwrap_or_default(),
                    p.notes.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = ledger
                .payouts()
                .iter()
                .map(|p| {
                    json!({
                        "date": p.payout_date, "firm": p.firm, "account": p.account,
                        "gross": p.gross_amount.to_string(),
                        "split": p.split.map(|s| s.to_string()),
                        "net": p.net_to_trader.to_string(), "currency": p.currency,
                        "method": p.method, "notes": p.notes
                    })
                })
                .collect();
            std::fs::write(&out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported payouts to {}", out);
    Ok(())
}
