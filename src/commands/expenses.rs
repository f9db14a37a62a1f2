// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde::Serialize;

use crate::filter::ExpenseFilter;
use crate::stats::{expense_summary, Month};
use crate::store::{Ledger, NewExpense};
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
    let date = sub
        .get_one::<String>("date")
        .map(|s| parse_date(s))
        .transpose()?;
    let new = NewExpense {
        firm: sub.get_one::<String>("firm").cloned(),
        account: sub.get_one::<String>("account").cloned(),
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
        description: sub.get_one::<String>("description").cloned(),
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap())?,
        currency: sub.get_one::<String>("currency").cloned(),
        date,
    };
    let expense = ledger.add_expense(new)?;
    println!(
        "Recorded {} {} expense for '{}' on {}",
        fmt_money(&expense.amount, &expense.currency),
        expense.r#type,
        expense.firm,
        expense.date
    );
    Ok(())
}

#[derive(Serialize)]
pub struct ExpenseRow {
    pub date: String,
    pub firm: String,
    pub account: String,
    pub r#type: String,
    pub description: String,
    pub amount: String,
    pub currency: String,
}

pub fn query_rows(ledger: &Ledger, sub: &clap::ArgMatches) -> Result<Vec<ExpenseRow>> {
    let filter = ExpenseFilter {
        query: sub.get_one::<String>("query").cloned(),
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse())
            .transpose()?,
    };
    let mut matched = filter.apply(ledger.expenses());
    if let Some(limit) = sub.get_one::<usize>("limit") {
        matched.truncate(*limit);
    }
    Ok(matched
        .iter()
        .map(|e| ExpenseRow {
            date: e.date.to_string(),
            firm: e.firm.clone(),
            account: e.account.clone().unwrap_or_default(),
            r#type: e.r#type.to_string(),
            description: e.description.clone().unwrap_or_default(),
            amount: e.amount.round_dp(2).to_string(),
            currency: e.currency.clone(),
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
                    r.r#type.clone(),
                    r.description.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Firm", "Account", "Type", "Description", "Amount", "CCY"],
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
    let summary = expense_summary(ledger.expenses(), month);
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec![
                "Total expenses".to_string(),
                summary.total.round_dp(2).to_string(),
            ],
            vec![
                format!("Spend in {}", summary.month),
                summary.month_total.round_dp(2).to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
