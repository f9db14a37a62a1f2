// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Account, AccountStatus, AccountType, Expense, Payout};

/// A calendar month used to scope aggregations. Dates are compared on their
/// parsed year and month fields, so a malformed date can never silently fall
/// out of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn current() -> Self {
        Self::of(chrono::Utc::now().date_naive())
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl Serialize for Month {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

pub fn count<T>(records: &[T], pred: impl Fn(&T) -> bool) -> usize {
    records.iter().filter(|r| pred(r)).count()
}

pub fn sum<T>(records: &[T], amount: impl Fn(&T) -> Decimal) -> Decimal {
    records.iter().map(amount).sum()
}

/// Total of `amount` over the records whose date falls in `month`.
pub fn sum_for_month<T>(
    records: &[T],
    date: impl Fn(&T) -> NaiveDate,
    amount: impl Fn(&T) -> Decimal,
    month: Month,
) -> Decimal {
    records
        .iter()
        .filter(|r| month.contains(date(r)))
        .map(amount)
        .sum()
}

/// Accounts page summary cards.
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummary {
    pub active: usize,
    pub funded: usize,
    pub total_notional: Decimal,
}

pub fn account_summary(accounts: &[Account]) -> AccountSummary {
    AccountSummary {
        active: count(accounts, |a| a.status == AccountStatus::Active),
        funded: count(accounts, |a| a.r#type == AccountType::Funded),
        total_notional: sum(accounts, |a| a.account_size),
    }
}

/// Expenses page summary cards: total spend plus the spend inside one month.
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseSummary {
    pub total: Decimal,
    pub month: Month,
    pub month_total: Decimal,
}

pub fn expense_summary(expenses: &[Expense], month: Month) -> ExpenseSummary {
    ExpenseSummary {
        total: sum(expenses, |e| e.amount),
        month,
        month_total: sum_for_month(expenses, |e| e.date, |e| e.amount, month),
    }
}

/// Payouts page summary cards: gross and net totals plus the net inside one month.
#[derive(Debug, Clone, Serialize)]
pub struct PayoutSummary {
    pub total_net: Decimal,
    pub total_gross: Decimal,
    pub month: Month,
    pub month_net: Decimal,
}

pub fn payout_summary(payouts: &[Payout], month: Month) -> PayoutSummary {
    PayoutSummary {
        total_net: sum(payouts, |p| p.net_to_trader),
        total_gross: sum(payouts, |p| p.gross_amount),
        month,
        month_net: sum_for_month(payouts, |p| p.payout_date, |p| p.net_to_trader, month),
    }
}

/// Dashboard overview: net profit is payout net minus tracked expenses.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSummary {
    pub net_profit: Decimal,
    pub total_expenses: Decimal,
    pub total_payouts: Decimal,
    pub active_accounts: usize,
}

pub fn dashboard_summary(
    accounts: &[Account],
    expenses: &[Expense],
    payouts: &[Payout],
) -> DashboardSummary {
    let total_expenses = sum(expenses, |e| e.amount);
    let total_payouts = sum(payouts, |p| p.net_to_trader);
    DashboardSummary {
        net_profit: total_payouts - total_expenses,
        total_expenses,
        total_payouts,
        active_accounts: count(accounts, |a| a.status == AccountStatus::Active),
    }
}
