// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    Evaluation,
    Challenge,
    Funded,
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountType::Evaluation => "EVALUATION",
            AccountType::Challenge => "CHALLENGE",
            AccountType::Funded => "FUNDED",
        };
        f.write_str(s)
    }
}

impl FromStr for AccountType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "EVALUATION" => Ok(AccountType::Evaluation),
            "CHALLENGE" => Ok(AccountType::Challenge),
            "FUNDED" => Ok(AccountType::Funded),
            _ => Err(ValidationError::unknown_variant("account type", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountStatus {
    Active,
    Failed,
    Completed,
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            AccountStatus::Active => "ACTIVE",
            AccountStatus::Failed => "FAILED",
            AccountStatus::Completed => "COMPLETED",
        };
        f.write_str(s)
    }
}

impl FromStr for AccountStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(AccountStatus::Active),
            "FAILED" => Ok(AccountStatus::Failed),
            "COMPLETED" => Ok(AccountStatus::Completed),
            _ => Err(ValidationError::unknown_variant("account status", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpenseType {
    ChallengeFee,
    Reset,
    Extension,
    Vps,
    Data,
    Software,
    Other,
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ExpenseType::ChallengeFee => "CHALLENGE_FEE",
            ExpenseType::Reset => "RESET",
            ExpenseType::Extension => "EXTENSION",
            ExpenseType::Vps => "VPS",
            ExpenseType::Data => "DATA",
            ExpenseType::Software => "SOFTWARE",
            ExpenseType::Other => "OTHER",
        };
        f.write_str(s)
    }
}

impl FromStr for ExpenseType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().replace('-', "_").as_str() {
            "CHALLENGE_FEE" => Ok(ExpenseType::ChallengeFee),
            "RESET" => Ok(ExpenseType::Reset),
            "EXTENSION" => Ok(ExpenseType::Extension),
            "VPS" => Ok(ExpenseType::Vps),
            "DATA" => Ok(ExpenseType::Data),
            "SOFTWARE" => Ok(ExpenseType::Software),
            "OTHER" => Ok(ExpenseType::Other),
            _ => Err(ValidationError::unknown_variant("expense type", s)),
        }
    }
}

/// A prop-firm account profile: evaluation, challenge, or funded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub prop_firm: String,
    pub account_name: String,
    pub account_size: Decimal,
    pub currency: String,
    pub r#type: AccountType,
    pub status: AccountStatus,
    pub start_date: Option<NaiveDate>,
}

/// A cost incurred against a firm or account (challenge fees, resets, tools).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: i64,
    pub firm: String,
    pub account: Option<String>,
    pub r#type: ExpenseType,
    pub description: Option<String>,
    pub amount: Decimal,
    pub currency: String,
    pub date: NaiveDate,
}

/// A withdrawal received from a firm. `net_to_trader` is stored as submitted;
/// the add flow pre-derives it from gross and split but the caller may override.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payout {
    pub id: i64,
    pub firm: Option<String>,
    pub account: String,
    pub gross_amount: Decimal,
    pub split: Option<Decimal>,
    pub net_to_trader: Decimal,
    pub currency: String,
    pub payout_date: NaiveDate,
    pub method: Option<String>,
    pub notes: Option<String>,
}
