// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::models::AccountType;
use bankdesk::salary;
use bankdesk::tax::{self, BalancesByType, TaxStatus};
use rust_decimal::Decimal;
use std::str::FromStr;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

#[test]
fn income_tax_is_progressive() {
    assert_eq!(tax::income_tax(Decimal::ZERO), Decimal::ZERO);
    // entirely inside the first bracket
    assert_eq!(tax::income_tax(d("100000")), d("18000"));
    // 237100 @ 18% + 62900 @ 26%
    assert_eq!(tax::income_tax(d("300000")), d("42678") + d("16354"));
}

#[test]
fn estimate_rows_are_non_negative_and_sum_to_total() {
    let mut balances = BalancesByType::default();
    balances.add(AccountType::Main, d("400000"));
    balances.add(AccountType::Savings, d("48000"));
    balances.add(AccountType::Credit, d("-2340.50"));
    balances.add(AccountType::Loan, d("-125000"));

    let est = tax::estimate(&balances);
    // three income brackets reach 400000, plus the savings row
    assert_eq!(est.rows.len(), 4);
    for row in &est.rows {
        assert!(row.tax_due >= Decimal::ZERO, "{} is negative", row.label);
        assert!(row.taxable_amount >= Decimal::ZERO);
    }
    let sum: Decimal = est.rows.iter().map(|r| r.tax_due).sum();
    assert_eq!(sum, est.total_tax);

    let interest = est.rows.last().unwrap();
    assert_eq!(interest.status, TaxStatus::Estimated);
    assert_eq!(interest.taxable_amount, d("2400.00"));
    assert_eq!(interest.tax_due, d("480.00"));
    assert_eq!(interest.rate_display, "20%");
    assert!(est.rows[..3].iter().all(|r| r.status == TaxStatus::Outstanding));
}

#[test]
fn negative_balances_do_not_produce_negative_tax() {
    let mut balances = BalancesByType::default();
    balances.add(AccountType::Main, d("-500"));
    balances.add(AccountType::Savings, d("-10"));
    let est = tax::estimate(&balances);
    assert_eq!(est.rows.len(), 2);
    assert_eq!(est.total_tax, Decimal::ZERO);
}

#[test]
fn monthly_paye_and_salary_breakdown() {
    // 65000 * 12 = 780000 falls in the 39% bracket
    let paye = tax::monthly_paye(d("65000"));
    assert!(paye > Decimal::ZERO && paye < d("65000"));
    assert_eq!(paye, (tax::income_tax(d("780000")) / d("12")).round_dp(2));

    let pay = salary::breakdown(d("65000")).unwrap();
    assert_eq!(pay.uif, d("177.12"));
    assert_eq!(pay.net, pay.gross - pay.paye - pay.uif);

    let small = salary::breakdown(d("5000")).unwrap();
    assert_eq!(small.uif, d("50.00"));

    assert!(salary::breakdown(d("-1")).is_err());
}

#[test]
fn split_always_sums_to_net() {
    let net = d("1000.01");
    let (a, b) = salary::split(net, d("33.3")).unwrap();
    assert_eq!(a + b, net);
    assert_eq!(salary::split(net, d("100")).unwrap(), (net, Decimal::ZERO));
    assert!(salary::split(net, d("101")).is_err());
    assert!(salary::split(net, d("-1")).is_err());
}
