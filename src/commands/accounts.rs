// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::filter::AccountFilter;
use crate::stats::account_summary;
use crate::store::{Ledger, NewAccount};
use crate::utils::{fmt_money, maybe_print_json, parse_date, parse_decimal, pretty_table};

pub fn handle(ledger: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(ledger, sub)?,
        Some(("list", sub)) => list(ledger, sub)?,
        Some(("stats", sub)) => stats(ledger, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(ledger: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let start_date = sub
        .get_one::<String>("start")
        .map(|s| parse_date(s))
        .transpose()?;
    let new = NewAccount {
        prop_firm: sub.get_one::<String>("firm").unwrap().clone(),
        account_name: sub.get_one::<String>("name").unwrap().clone(),
        account_size: parse_decimal(sub.get_one::<String>("size").unwrap())?,
        currency: sub.get_one::<String>("currency").unwrap().clone(),
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        status: sub.get_one::<String>("status").unwrap().parse()?,
        start_date,
    };
    let account = ledger.add_account(new)?;
    println!(
        "Added account '{}' at {} ({}, {}, {})",
        account.account_name,
        account.prop_firm,
        fmt_money(&account.account_size, &account.currency),
        account.r#type,
        account.status
    );
    Ok(())
}

#[derive(Serialize)]
pub struct AccountRow {
    pub firm: String,
    pub account: String,
    pub size: String,
    pub currency: String,
    pub r#type: String,
    pub status: String,
    pub start: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<AccountRow>> {
    let filter = AccountFilter {
        query: sub.get_one::<String>("query").cloned(),
        status: sub
            .get_one::<String>("status")
            .map(|s| s.parse())
            .transpose()?,
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
    };
    let mut matched = filter.apply(ledger.accounts());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched
        .iter()
        .map(|a| AccountRow {
            firm: a.prop_firm.clone(),
            account: a.account_name.clone(),
            size: a.account_size.round_dp(2).to_string(),
            currency: a.currency.clone(),
            r#type: a.r#type.to_string(),
            status: a.status.to_string(),
            start: a
                .start_date
                .map(|d| d.to_string())
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect())
}

fn list(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(ledger, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.firm.clone(),
                    r.account.clone(),
                    r.size.clone(),
                    r.currency.clone(),
                    r.r#type.clone(),
                    r.status.clone(),
                    r.start.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Firm", "Account", "Size", "CCY", "Type", "Status", "Start"],
                rows,
            )
        );
    }
    Ok(())
}

fn stats(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let summary = account_summary(ledger.accounts());
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec!["Active accounts".to_string(), summary.active.to_string()],
            vec!["Funded accounts".to_string(), summary.funded.to_string()],
            vec![
                "Total notional".to_string(),
                summary.total_notional.round_dp(2).to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
