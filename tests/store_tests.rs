// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use propclip::error::ValidationError;
use propclip::models::{AccountStatus, AccountType, ExpenseType};
use propclip::seed;
use propclip::store::{Ledger, MemoryBackend, NewAccount, NewExpense, NewPayout};
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

fn seeded() -> Ledger {
    Ledger::open(Box::new(seed::demo_backend())).unwrap()
}

fn empty() -> Ledger {
    Ledger::open(Box::new(MemoryBackend::new())).unwrap()
}

fn new_account(firm: &str, name: &str, size: &str) -> NewAccount {
    NewAccount {
        prop_firm: firm.to_string(),
        account_name: name.to_string(),
        account_size: dec(size),
        currency: "USD".to_string(),
        r#type: AccountType::Evaluation,
        status: AccountStatus::Active,
        start_date: None,
    }
}

#[test]
fn new_records_are_appended_at_the_head() {
    let mut ledger = seeded();
    ledger
        .add_account(new_account("FundedNext", "FundedNext 25K", "25000"))
        .unwrap();
    assert_eq!(ledger.accounts().len(), 4);
    assert_eq!(ledger.accounts()[0].account_name, "FundedNext 25K");
    assert_eq!(ledger.accounts()[1].account_name, "FTMO 100K");
}

#[test]
fn negative_account_size_is_rejected_and_store_unchanged() {
    let mut ledger = seeded();
    let err = ledger
        .add_account(new_account("FundedNext", "FundedNext 25K", "-5"))
        .unwrap_err();
    let validation = err.downcast_ref::<ValidationError>().unwrap();
    assert_eq!(
        *validation,
        ValidationError::NotPositive {
            field: "account size",
            value: dec("-5"),
        }
    );
    assert_eq!(ledger.accounts().len(), 3);
}

#[test]
fn blank_required_fields_are_rejected_after_trimming() {
    let mut ledger = empty();
    let err = ledger
        .add_account(new_account("   ", "FTMO 100K", "100000"))
        .unwrap_err();
    assert_eq!(
        *err.downcast_ref::<ValidationError>().unwrap(),
        ValidationError::Required("prop firm")
    );
    assert!(ledger.accounts().is_empty());
}

#[test]
fn account_fields_are_trimmed_and_currency_uppercased() {
    let mut ledger = empty();
    let mut new = new_account("  FTMO  ", "  FTMO 100K ", "100000");
    new.currency = "usd".to_string();
    let account = ledger.add_account(new).unwrap().clone();
    assert_eq!(account.prop_firm, "FTMO");
    assert_eq!(account.account_name, "FTMO 100K");
    assert_eq!(account.currency, "USD");
}

#[test]
fn expense_firm_defaults_to_general() {
    let mut ledger = empty();
    let expense = ledger
        .add_expense(NewExpense {
            firm: Some("   ".to_string()),
            amount: dec("35"),
            r#type: Some(ExpenseType::Software),
            ..Default::default()
        })
        .unwrap()
        .clone();
    assert_eq!(expense.firm, "General");
    assert_eq!(expense.account, None);
    assert_eq!(expense.currency, "USD");
}

#[test]
fn non_positive_expense_amount_is_rejected() {
    let mut ledger = seeded();
    let err = ledger
        .add_expense(NewExpense {
            amount: dec("0"),
            ..Default::default()
        })
        .unwrap_err();
    assert!(err.downcast_ref::<ValidationError>().is_some());
    assert_eq!(ledger.expenses().len(), 3);
}

#[test]
fn payout_net_is_derived_from_gross_and_split() {
    let mut ledger = empty();
    let payout = ledger
        .add_payout(NewPayout {
            account: "FTMO 100K".to_string(),
            gross_amount: dec("3000"),
            split: Some(dec("80")),
            payout_date: NaiveDate::from_ymd_opt(2025, 12, 1),
            ..Default::default()
        })
        .unwrap()
        .clone();
    assert_eq!(payout.net_to_trader, dec("2400.00"));
    assert_eq!(payout.split, Some(dec("80")));
}

#[test]
fn explicit_net_overrides_the_derivation() {
    let mut ledger = empty();
    let payout = ledger
        .add_payout(NewPayout {
            account: "FTMO 100K".to_string(),
            gross_amount: dec("3000"),
            split: Some(dec("80")),
            net_to_trader: Some(dec("2350")),
            ..Default::default()
        })
        .unwrap()
        .clone();
    // Stored net is whatever was submitted; gross x split is advisory only.
    assert_eq!(payout.net_to_trader, dec("2350"));
}

#[test]
fn payout_without_split_or_net_is_rejected() {
    let mut ledger = empty();
    let err = ledger
        .add_payout(NewPayout {
            account: "FTMO 100K".to_string(),
            gross_amount: dec("3000"),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        *err.downcast_ref::<ValidationError>().unwrap(),
        ValidationError::Required("net amount")
    );
    assert!(ledger.payouts().is_empty());
}

#[test]
fn payout_split_out_of_range_is_rejected() {
    let mut ledger = empty();
    let err = ledger
        .add_payout(NewPayout {
            account: "FTMO 100K".to_string(),
            gross_amount: dec("3000"),
            split: Some(dec("120")),
            net_to_trader: Some(dec("2400")),
            ..Default::default()
        })
        .unwrap_err();
    assert_eq!(
        *err.downcast_ref::<ValidationError>().unwrap(),
        ValidationError::SplitOutOfRange(dec("120"))
    );
    assert!(ledger.payouts().is_empty());
}

#[test]
fn ids_are_unique_across_record_kinds() {
    let mut ledger = seeded();
    let account_id = ledger
        .add_account(new_account("FundedNext", "FundedNext 25K", "25000"))
        .unwrap()
        .id;
    let expense_id = ledger
        .add_expense(NewExpense {
            amount: dec("49"),
            ..Default::default()
        })
        .unwrap()
        .id;
    assert!(expense_id > account_id);
    assert!(account_id > 9); // seeded ids run 1..=9
}
