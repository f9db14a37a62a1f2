// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::filter::PayoutFilter;
use crate::stats::{payout_summary, Month};
use crate::store::{Ledger, NewPayout};
use crate::utils::{
    fmt_money, maybe_print_json, parse_date, parse_decimal, parse_month, pretty_table,
};

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
    let payout_date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;
    let new = NewPayout {
        firm: sub.get_one::<String>("firm").cloned(),
        account: sub.get_one::<String>("account").unwrap().clone(),
        gross_amount: parse_decimal(sub.get_one::<String>("gross").unwrap())?,
        split: sub
            .get_one::<String>("split")
            .map(|s| parse_decimal(s))
            .transpose()?,
        net_to_trader: sub
            .get_one::<String>("net")
            .map(|s| parse_decimal(s))
            .transpose()?,
        currency: sub.get_one::<String>("currency").cloned(),
        payout_date,
        method: sub.get_one::<String>("method").cloned(),
        notes: sub.get_one::<String>("notes").cloned(),
    };
    let payout = ledger.add_payout(new)?;
    println!(
        "Recorded payout from '{}': {} net of {} gross on {}",
        payout.account,
        fmt_money(&payout.net_to_trader, &payout.currency),
        fmt_money(&payout.gross_amount, &payout.currency),
        payout.payout_date
    );
    Ok(())
}

#[derive(Serialize)]
pub struct PayoutRow {
    pub date: String,
    pub firm: String,
    pub account: String,
    pub net: String,
    pub gross: String,
    pub split: String,
    pub currency: String,
    pub method: String,
    pub notes: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<PayoutRow>> {
    let filter = PayoutFilter {
        query: sub.get_one::<String>("query").cloned(),
    };
    let mut matched = filter.apply(ledger.payouts());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched
        .iter()
        .map(|p| PayoutRow {
            date: p.payout_date.to_string(),
            firm: p.firm.clone().unwrap_or_default(),
            account: p.account.clone(),
            net: p.net_to_trader.round_dp(2).to_string(),
            gross: p.gross_amount.round_dp(2).to_string(),
            split: p
                .split
                .map(|s| format!("{}%", s.normalize()))
                .unwrap_or_default(),
            currency: p.currency.clone(),
            method: p.method.clone().unwrap_or_default(),
            notes: p.notes.clone().unwrap_or_default(),
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
                    r.date.clone(),
                    r.firm.clone(),
                    r.account.clone(),
                    r.net.clone(),
                    r.gross.clone(),
                    r.split.clone(),
                    r.currency.clone(),
                    r.method.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Firm", "Account", "Net", "Gross", "Split", "CCY", "Method"],
                rows,
            )
        );
    }
    Ok(())
}

fn stats(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let month = match sub.get_one::<String>("month") {
        Some(m) => parse_month(m)?,
        None => Month::current(),
    };
    let summary = payout_summary(ledger.payouts(), month);
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec![
                "Total net to trader".to_string(),
                summary.total_net.round_dp(2).to_string(),
            ],
            vec![
                "Total gross payouts".to_string(),
                summary.total_gross.round_dp(2).to_string(),
            ],
            vec![
                format!("Net in {}", summary.month),
                summary.month_net.round_dp(2).to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
