// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use propclip::models::Expense;
use propclip::seed;
use propclip::stats::{
    account_summary, count, dashboard_summary, expense_summary, payout_summary, sum,
    sum_for_month, Month,
};
use propclip::utils::parse_month;
use rust_decimal::Decimal;

#[test]
fn empty_sequences_aggregate_to_zero() {
    let none: Vec<Expense> = Vec::new();
    assert_eq!(count(&none, |_| true), 0);
    assert_eq!(sum(&none, |e| e.amount), Decimal::ZERO);
    let month = Month::new(2025, 12).unwrap();
    assert_eq!(
        sum_for_month(&none, |e| e.date, |e| e.amount, month),
        Decimal::ZERO
    );
}

#[test]
fn month_scoped_expense_sum() {
    // Seeded expenses: 540 on 2025-12-01, 167 on 2025-11-28, 35 on 2025-11-20.
    let expenses = seed::demo_backend().expenses;
    let december = Month::new(2025, 12).unwrap();
    assert_eq!(
        sum_for_month(&expenses, |e| e.date, |e| e.amount, december),
        Decimal::from(540)
    );
    let november = Month::new(2025, 11).unwrap();
    assert_eq!(
        sum_for_month(&expenses, |e| e.date, |e| e.amount, november),
        Decimal::from(202)
    );
}

#[test]
fn expense_summary_totals() {
    let expenses = seed::demo_backend().expenses;
    let summary = expense_summary(&expenses, Month::new(2025, 12).unwrap());
    assert_eq!(summary.total, Decimal::from(742));
    assert_eq!(summary.month_total, Decimal::from(540));
}

#[test]
fn payout_summary_totals() {
    let payouts = seed::demo_backend().payouts;
    let summary = payout_summary(&payouts, Month::new(2025, 12).unwrap());
    assert_eq!(summary.total_net, Decimal::from(4400));
    assert_eq!(summary.total_gross, Decimal::from(5500));
    assert_eq!(summary.month_net, Decimal::from(2400));
}

#[test]
fn account_summary_counts_and_notional() {
    let accounts = seed::demo_backend().accounts;
    let summary = account_summary(&accounts);
    assert_eq!(summary.active, 3);
    assert_eq!(summary.funded, 1);
    assert_eq!(summary.total_notional, Decimal::from(200_000));
}

#[test]
fn dashboard_nets_payouts_against_expenses() {
    let backend = seed::demo_backend();
    let summary = dashboard_summary(&backend.accounts, &backend.expenses, &backend.payouts);
    assert_eq!(summary.total_expenses, Decimal::from(742));
    assert_eq!(summary.total_payouts, Decimal::from(4400));
    assert_eq!(summary.net_profit, Decimal::from(3658));
    assert_eq!(summary.active_accounts, 3);
}

#[test]
fn month_parsing_rejects_malformed_input() {
    assert!(parse_month("2025-12").is_ok());
    assert!(parse_month("2025-13").is_err());
    assert!(parse_month("2025").is_err());
    assert!(parse_month("december").is_err());
}

#[test]
fn month_display_is_zero_padded() {
    let m = parse_month("2025-03").unwrap();
    assert_eq!(m.to_string(), "2025-03");
}
