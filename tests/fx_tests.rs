// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::error::BankError;
use bankdesk::fx::{self, convert, cross_rate, format_money, supported_currencies};
use rust_decimal::Decimal;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn same_currency_is_identity() {
    for code in supported_currencies() {
        assert_eq!(convert(d("1234.56"), code, code).unwrap(), d("1234.56"));
    }
    // case and whitespace do not matter
    assert_eq!(convert(d("10"), "zar", " ZAR ").unwrap(), d("10"));
}

#[test]
fn round_trip_recovers_amount_for_every_pair() {
    let amount = d("2500.75");
    let tolerance = Decimal::new(1, 8);
    for from in supported_currencies() {
        for to in supported_currencies() {
            let there = convert(amount, from, to).unwrap();
            let back = convert(there, to, from).unwrap();
            assert!(
                (back - amount).abs() < tolerance,
                "{} -> {} -> {} drifted to {}",
                from,
                to,
                from,
                back
            );
        }
    }
}

#[test]
fn usd_anchor_and_cross_rates() {
    assert_eq!(convert(d("100"), "USD", "ZAR").unwrap(), d("1850"));
    assert_eq!(convert(d("1850"), "ZAR", "USD").unwrap(), d("100"));
    // EUR -> GBP goes through USD
    let eur_gbp = cross_rate("EUR", "GBP").unwrap();
    assert_eq!(eur_gbp.round_dp(6), (d("0.79") / d("0.92")).round_dp(6));
}

#[test]
fn unknown_currency_is_an_error() {
    match convert(d("1"), "USD", "XYZ") {
        Err(BankError::UnknownCurrency(code)) => assert_eq!(code, "XYZ"),
        other => panic!("expected UnknownCurrency, got {:?}", other),
    }
    assert!(fx::rate("???").is_err());
    assert!(fx::currency_name("XYZ").is_none());
    assert_eq!(fx::currency_name("zar"), Some("South African Rand"));
}

#[test]
fn oversized_conversion_is_a_validation_error() {
    match convert(Decimal::MAX, "USD", "JPY") {
        Err(BankError::Validation { field, .. }) => assert_eq!(field, "amount"),
        other => panic!("expected validation error, got {:?}", other),
    }
    assert_eq!(
        convert(d("1000000000000"), "USD", "JPY").unwrap(),
        d("149500000000000")
    );
}

#[test]
fn money_formatting() {
    assert_eq!(format_money(d("12345.67"), "ZAR"), "R12,345.67");
    assert_eq!(format_money(d("-5"), "USD"), "-$5.00");
    assert_eq!(format_money(d("1500.4"), "JPY"), "¥1,500");
    assert_eq!(format_money(d("0"), "EUR"), "€0.00");
    assert_eq!(format_money(d("1234567.891"), "GBP"), "£1,234,567.89");
    assert_eq!(format_money(d("1"), "xyz"), "XYZ 1.00");
    // rounds to zero without a stray sign
    assert_eq!(format_money(d("-0.001"), "USD"), "$0.00");

    let fmt = fx::money_formatter("ZAR");
    assert_eq!(fmt(d("-2340.5")), "-R2,340.50");
}
