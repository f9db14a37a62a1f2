// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use thiserror::Error;

/// Rejection reasons for record creation. Every variant means the record was
/// not appended and prior state is untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),

    #[error("{field} must be greater than zero (got {value})")]
    NotPositive { field: &'static str, value: Decimal },

    #[error("split must be within (0, 100], got {0}")]
    SplitOutOfRange(Decimal),

    #[error("Unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
}

impl ValidationError {
    pub fn not_positive(field: &'static str, value: Decimal) -> Self {
        Self::NotPositive { field, value }
    }

    pub fn unknown_variant(kind: &'static str, value: &str) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.to_string(),
        }
    }
}
