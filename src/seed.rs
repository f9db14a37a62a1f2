// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::{
    Account, AccountStatus, AccountType, Expense, ExpenseType, Payout,
};
use crate::store::MemoryBackend;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Demo dataset served by the in-memory backend until a real store exists.
pub fn demo_backend() -> MemoryBackend {
    MemoryBackend {
        accounts: vec![
            Account {
                id: 1,
                prop_firm: "FTMO".into(),
                account_name: "FTMO 100K".into(),
                account_size: Decimal::from(100_000),
                currency: "USD".into(),
                r#type: AccountType::Evaluation,
                status: AccountStatus::Active,
                start_date: Some(date(2025, 12, 1)),
            },
            Account {
                id: 2,
                prop_firm: "Apex".into(),
                account_name: "Apex 50K".into(),
                account_size: Decimal::from(50_000),
                currency: "USD".into(),
                r#type: AccountType::Challenge,
                status: AccountStatus::Active,
                start_date: Some(date(2025, 11, 20)),
            },
            Account {
                id: 3,
                prop_firm: "Topstep".into(),
                account_name: "Topstep 50K".into(),
                account_size: Decimal::from(50_000),
                currency: "USD".into(),
                r#type: AccountType::Funded,
                status: AccountStatus::Active,
                start_date: Some(date(2025, 10, 18)),
            },
        ],
        expenses: vec![
            Expense {
                id: 4,
                firm: "FTMO".into(),
                account: Some("FTMO 100K".into()),
                r#type: ExpenseType::ChallengeFee,
                description: Some("Evaluation fee".into()),
                amount: Decimal::from(540),
                currency: "USD".into(),
                date: date(2025, 12, 1),
            },
            Expense {
                id: 5,
                firm: "Apex".into(),
                account: Some("Apex 50K".into()),
                r#type: ExpenseType::Reset,
                description: Some("Account reset".into()),
                amount: Decimal::from(167),
                currency: "USD".into(),
                date: date(2025, 11, 28),
            },
            Expense {
                id: 6,
                firm: "General".into(),
                account: None,
                r#type: ExpenseType::Software,
                description: Some("Copy trading subscription".into()),
                amount: Decimal::from(35),
                currency: "USD".into(),
                date: date(2025, 11, 20),
            },
        ],
        payouts: vec![
            Payout {
                id: 7,
                firm: Some("FTMO".into()),
                account: "FTMO 100K".into(),
                gross_amount: Decimal::from(3000),
                split: Some(Decimal::from(80)),
                net_to_trader: Decimal::from(2400),
                currency: "USD".into(),
                payout_date: date(2025, 12, 1),
                method: Some("Bank transfer".into()),
                notes: Some("First payout".into()),
            },
            Payout {
                id: 8,
                firm: Some("Topstep".into()),
                account: "Topstep 50K".into(),
                gross_amount: Decimal::from(1500),
                split: Some(Decimal::from(80)),
                net_to_trader: Decimal::from(1200),
                currency: "USD".into(),
                payout_date: date(2025, 11, 20),
                method: Some("Wise".into()),
                notes: None,
            },
            Payout {
                id: 9,
                firm: Some("Apex".into()),
                account: "Apex 50K".into(),
                gross_amount: Decimal::from(1000),
                split: Some(Decimal::from(80)),
                net_to_trader: Decimal::from(800),
                currency: "USD".into(),
                payout_date: date(2025, 11, 5),
                method: Some("PayPal".into()),
                notes: None,
            },
        ],
    }
}
