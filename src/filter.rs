// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Per-kind record filters. Criteria combine with AND and unset criteria
//! match everything; the free-text query is a case-insensitive substring
//! match over the kind's text fields. Input order is preserved.

use crate::models::{Account, AccountStatus, AccountType, Expense, ExpenseType, Payout};

fn query_matches(query: &str, fields: &[Option<&str>]) -> bool {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return true;
    }
    fields
        .iter()
        .flatten()
        .any(|f| f.to_lowercase().contains(&q))
}

#[derive(Debug, Clone, Default)]
pub struct AccountFilter {
    pub query: Option<String>,
    pub status: Option<AccountStatus>,
    pub r#type: Option<AccountType>,
}

impl AccountFilter {
    pub fn matches(&self, a: &Account) -> bool {
        let matches_query = self.query.as_deref().is_none_or(|q| {
            query_matches(q, &[Some(&a.prop_firm), Some(&a.account_name)])
        });
        let matches_status = self.status.is_none_or(|s| a.status == s);
        let matches_type = self.r#type.is_none_or(|t| a.r#type == t);
        matches_query && matches_status && matches_type
    }

    pub fn apply(&self, accounts: &[Account]) -> Vec<Account> {
        accounts.iter().filter(|a| self.matches(a)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct ExpenseFilter {
    pub query: Option<String>,
    pub r#type: Option<ExpenseType>,
}

impl ExpenseFilter {
    pub fn matches(&self, e: &Expense) -> bool {
        let matches_query = self.query.as_deref().is_none_or(|q| {
            query_matches(
                q,
                &[e.description.as_deref(), e.account.as_deref(), Some(&e.firm)],
            )
        });
        let matches_type = self.r#type.is_none_or(|t| e.r#type == t);
        matches_query && matches_type
    }

    pub fn apply(&self, expenses: &[Expense]) -> Vec<Expense> {
        expenses.iter().filter(|e| self.matches(e)).cloned().collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct PayoutFilter {
    pub query: Option<String>,
}

impl PayoutFilter {
    pub fn matches(&self, p: &Payout) -> bool {
        self.query.as_deref().is_none_or(|q| {
            query_matches(
                q,
                &[Some(&*p.account), p.firm.as_deref(), p.method.as_deref()],
            )
        })
    }

    pub fn apply(&self, payouts: &[Payout]) -> Vec<Payout> {
        payouts.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}
