// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::{Decimal, RoundingStrategy};

/// Derive the trader's net take from a gross payout and the firm's profit
/// split, rounded half-up at the cent.
///
/// Returns `None` when gross is not positive or split is outside (0, 100].
/// The result is advisory: callers use it to pre-fill the net amount and the
/// stored value is whatever the caller finally submits.
pub fn derive_net(gross: Decimal, split_percent: Decimal) -> Option<Decimal> {
    if gross <= Decimal::ZERO {
        return None;
    }
    if split_percent <= Decimal::ZERO || split_percent > Decimal::ONE_HUNDRED {
        return None;
    }
    let net = gross * split_percent / Decimal::ONE_HUNDRED;
    Some(net.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
}
