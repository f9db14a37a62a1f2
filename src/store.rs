// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::error::ValidationError;
use crate::models::{
    Account, AccountStatus, AccountType, Expense, ExpenseType, Payout,
};

/// Storage boundary. Records are loaded once when the ledger opens and saved
/// one at a time on creation; the in-memory backend stands in for a future
/// persistence layer.
pub trait Backend {
    fn load_accounts(&self) -> Result<Vec<Account>>;
    fn load_expenses(&self) -> Result<Vec<Expense>>;
    fn load_payouts(&self) -> Result<Vec<Payout>>;
    fn save_account(&mut self, account: &Account) -> Result<()>;
    fn save_expense(&mut self, expense: &Expense) -> Result<()>;
    fn save_payout(&mut self, payout: &Payout) -> Result<()>;
}

/// Backend that keeps everything in process memory, newest first.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    pub accounts: Vec<Account>,
    pub expenses: Vec<Expense>,
    pub payouts: Vec<Payout>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Backend for MemoryBackend {
    fn load_accounts(&self) -> Result<Vec<Account>> {
        Ok(self.accounts.clone())
    }

    fn load_expenses(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn load_payouts(&self) -> Result<Vec<Payout>> {
        Ok(self.payouts.clone())
    }

    fn save_account(&mut self, account: &Account) -> Result<()> {
        self.accounts.insert(0, account.clone());
        Ok(())
    }

    fn save_expense(&mut self, expense: &Expense) -> Result<()> {
        self.expenses.insert(0, expense.clone());
        Ok(())
    }

    fn save_payout(&mut self, payout: &Payout) -> Result<()> {
        self.payouts.insert(0, payout.clone());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub prop_firm: String,
    pub account_name: String,
    pub account_size: Decimal,
    pub currency: String,
    pub r#type: AccountType,
    pub status: AccountStatus,
    pub start_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub firm: Option<String>,
    pub account: Option<String>,
    pub r#type: Option<ExpenseType>,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: Option<String>,
    pub date: Option<NaiveDate>,
}

#[derive(Debug, Clone, Default)]
pub struct NewPayout {
    pub firm: Option<String>,
    pub account: String,
    pub gross_amount: Decimal,
    pub split: Option<Decimal>,
    pub net_to_trader: Option<Decimal>,
    pub currency: Option<String>,
    pub payout_date: Option<NaiveDate>,
    pub method: Option<String>,
    pub notes: Option<String>,
}

/// Ordered record collections for one trader, newest first. Creation is
/// validate-then-append: a rejected draft leaves every collection untouched.
pub struct Ledger {
    backend: Box<dyn Backend>,
    accounts: Vec<Account>,
    expenses: Vec<Expense>,
    payouts: Vec<Payout>,
    next_id: i64,
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(trimmed.to_string())
    }
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn positive(field: &'static str, value: Decimal) -> Result<Decimal, ValidationError> {
    if value > Decimal::ZERO {
        Ok(value)
    } else {
        Err(ValidationError::not_positive(field, value))
    }
}

fn currency_or_usd(currency: Option<String>) -> String {
    optional(currency)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| "USD".to_string())
}

fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

impl Ledger {
    pub fn open(backend: Box<dyn Backend>) -> Result<Self> {
        let accounts = backend.load_accounts()?;
        let expenses = backend.load_expenses()?;
        let payouts = backend.load_payouts()?;
        let next_id = accounts
            .iter()
            .map(|a| a.id)
            .chain(expenses.iter().map(|e| e.id))
            .chain(payouts.iter().map(|p| p.id))
            .max()
            .unwrap_or(0)
            + 1;
        Ok(Self {
            backend,
            accounts,
            expenses,
            payouts,
            next_id,
        })
    }

    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    pub fn expenses(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn payouts(&self) -> &[Payout] {
        &self.payouts
    }

    fn take_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn add_account(&mut self, new: NewAccount) -> Result<&Account> {
        let prop_firm = required("prop firm", &new.prop_firm)?;
        let account_name = required("account name", &new.account_name)?;
        let account_size = positive("account size", new.account_size)?;
        let account = Account {
            id: self.take_id(),
            prop_firm,
            account_name,
            account_size,
            currency: currency_or_usd(Some(new.currency)),
            r#type: new.r#type,
            status: new.status,
            start_date: new.start_date,
        };
        self.backend.save_account(&account)?;
        self.accounts.insert(0, account);
        Ok(&self.accounts[0])
    }

    pub fn add_expense(&mut self, new: NewExpense) -> Result<&Expense> {
        let amount = positive("amount", new.amount)?;
        let expense = Expense {
            id: self.take_id(),
            // Blank firm means a general cost not tied to any one firm.
            firm: optional(new.firm).unwrap_or_else(|| "General".to_string()),
            account: optional(new.account),
            r#type: new.r#type.unwrap_or(ExpenseType::ChallengeFee),
            description: optional(new.description),
            amount,
            currency: currency_or_usd(new.currency),
            date: new.date.unwrap_or_else(today),
        };
        self.backend.save_expense(&expense)?;
        self.expenses.insert(0, expense);
        Ok(&self.expenses[0])
    }

    pub fn add_payout(&mut self, new: NewPayout) -> Result<&Payout> {
        let account = required("account", &new.account)?;
        let gross_amount = positive("gross amount", new.gross_amount)?;
        if let Some(split) = new.split {
            if split <= Decimal::ZERO || split > Decimal::ONE_HUNDRED {
                return Err(ValidationError::SplitOutOfRange(split).into());
            }
        }
        // Derivation is advisory: an explicit net wins over gross x split.
        let net = match new.net_to_trader {
            Some(net) => positive("net amount", net)?,
            None => new
                .split
                .and_then(|s| crate::split::derive_net(gross_amount, s))
                .ok_or(ValidationError::Required("net amount"))?,
        };
        let payout = Payout {
            id: self.take_id(),
            firm: optional(new.firm),
            account,
            gross_amount,
            split: new.split,
            net_to_trader: net,
            currency: currency_or_usd(new.currency),
            payout_date: new.payout_date.unwrap_or_else(today),
            method: optional(new.method),
            notes: optional(new.notes),
        };
        self.backend.save_payout(&payout)?;
        self.payouts.insert(0, payout);
        Ok(&self.payouts[0])
    }
}
