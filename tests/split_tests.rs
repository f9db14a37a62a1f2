// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use propclip::split::derive_net;
use rust_decimal::Decimal;

fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

#[test]
fn eighty_percent_of_three_thousand() {
    let net = derive_net(dec("3000"), dec("80")).unwrap();
    assert_eq!(net, dec("2400.00"));
}

#[test]
fn full_split_returns_gross() {
    let net = derive_net(dec("1234.56"), dec("100")).unwrap();
    assert_eq!(net, dec("1234.56"));
}

#[test]
fn rounds_half_up_at_the_cent() {
    // 1 * 12.5 / 100 = 0.125 -> 0.13, not banker's 0.12
    assert_eq!(derive_net(dec("1"), dec("12.5")).unwrap(), dec("0.13"));
    // 999.99 * 33.333 / 100 = 333.3266... -> 333.33
    assert_eq!(derive_net(dec("999.99"), dec("33.333")).unwrap(), dec("333.33"));
}

#[test]
fn no_derivation_for_out_of_range_split() {
    assert_eq!(derive_net(dec("3000"), dec("0")), None);
    assert_eq!(derive_net(dec("3000"), dec("-5")), None);
    assert_eq!(derive_net(dec("3000"), dec("100.01")), None);
}

#[test]
fn no_derivation_for_non_positive_gross() {
    assert_eq!(derive_net(dec("0"), dec("80")), None);
    assert_eq!(derive_net(dec("-3000"), dec("80")), None);
}
