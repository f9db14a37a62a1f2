// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use crate::stats::dashboard_summary;
use crate::store::Ledger;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(ledger: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let json_flag = m.get_flag("json");
    let jsonl_flag = m.get_flag("jsonl");
    let summary = dashboard_summary(ledger.accounts(), ledger.expenses(), ledger.payouts());
    if !maybe_print_json(json_flag, jsonl_flag, &summary)? {
        let rows = vec![
            vec![
                "Net profit".to_string(),
                summary.net_profit.round_dp(2).to_string(),
            ],
            vec![
                "Total expenses".to_string(),
                summary.total_expenses.round_dp(2).to_string(),
            ],
            vec![
                "Total payouts (net)".to_string(),
                summary.total_payouts.round_dp(2).to_string(),
            ],
            vec![
                "Active accounts".to_string(),
                summary.active_accounts.to_string(),
            ],
        ];
        println!("{}", pretty_table(&["Metric", "Value"], rows));
    }
    Ok(())
}
