// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use propclip::filter::{AccountFilter, ExpenseFilter, PayoutFilter};
use propclip::models::{AccountStatus, AccountType, ExpenseType};
use propclip::seed;

#[test]
fn empty_criteria_are_the_identity() {
    let accounts = seed::demo_backend().accounts;
    let filter = AccountFilter::default();
    let out = filter.apply(&accounts);
    assert_eq!(out.len(), accounts.len());
    for (a, b) in out.iter().zip(accounts.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn blank_query_matches_everything() {
    let accounts = seed::demo_backend().accounts;
    let filter = AccountFilter {
        query: Some("   ".to_string()),
        ..Default::default()
    };
    assert_eq!(filter.apply(&accounts).len(), accounts.len());
}

#[test]
fn status_filter_preserves_relative_order() {
    let mut accounts = seed::demo_backend().accounts;
    accounts[1].status = AccountStatus::Failed;
    let filter = AccountFilter {
        status: Some(AccountStatus::Active),
        ..Default::default()
    };
    let out = filter.apply(&accounts);
    assert_eq!(out.len(), 2);
    assert_eq!(out[0].id, accounts[0].id);
    assert_eq!(out[1].id, accounts[2].id);
}

#[test]
fn filtering_is_idempotent() {
    let accounts = seed::demo_backend().accounts;
    let filter = AccountFilter {
        query: Some("50k".to_string()),
        status: Some(AccountStatus::Active),
        r#type: None,
    };
    let once = filter.apply(&accounts);
    let twice = filter.apply(&once);
    assert_eq!(once.len(), twice.len());
    for (a, b) in once.iter().zip(twice.iter()) {
        assert_eq!(a.id, b.id);
    }
}

#[test]
fn account_query_is_case_insensitive_substring() {
    let accounts = seed::demo_backend().accounts;
    let filter = AccountFilter {
        query: Some("ftmo".to_string()),
        ..Default::default()
    };
    let out = filter.apply(&accounts);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].prop_firm, "FTMO");
}

#[test]
fn criteria_combine_with_and() {
    let accounts = seed::demo_backend().accounts;
    // "50K" matches Apex and Topstep; FUNDED narrows it to Topstep.
    let filter = AccountFilter {
        query: Some("50k".to_string()),
        status: None,
        r#type: Some(AccountType::Funded),
    };
    let out = filter.apply(&accounts);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].account_name, "Topstep 50K");
}

#[test]
fn expense_query_searches_description_account_and_firm() {
    let expenses = seed::demo_backend().expenses;
    let by_description = ExpenseFilter {
        query: Some("reset".to_string()),
        r#type: None,
    };
    assert_eq!(by_description.apply(&expenses).len(), 1);

    let by_firm = ExpenseFilter {
        query: Some("general".to_string()),
        r#type: None,
    };
    assert_eq!(by_firm.apply(&expenses).len(), 1);

    let by_account = ExpenseFilter {
        query: Some("ftmo 100k".to_string()),
        r#type: None,
    };
    assert_eq!(by_account.apply(&expenses).len(), 1);
}

#[test]
fn expense_type_filter_is_exact() {
    let expenses = seed::demo_backend().expenses;
    let filter = ExpenseFilter {
        query: None,
        r#type: Some(ExpenseType::Software),
    };
    let out = filter.apply(&expenses);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].description.as_deref(), Some("Copy trading subscription"));
}

#[test]
fn payout_query_searches_account_firm_and_method() {
    let payouts = seed::demo_backend().payouts;
    let by_method = PayoutFilter {
        query: Some("wise".to_string()),
    };
    let out = by_method.apply(&payouts);
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].account, "Topstep 50K");

    let by_firm = PayoutFilter {
        query: Some("apex".to_string()),
    };
    assert_eq!(by_firm.apply(&payouts).len(), 1);

    let no_hit = PayoutFilter {
        query: Some("first payout".to_string()),
    };
    // Notes are not part of the payout search fields.
    assert_eq!(no_hit.apply(&payouts).len(), 0);
}
