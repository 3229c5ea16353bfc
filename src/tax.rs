// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::{Account, AccountType};

/// (upper bound of the bracket, marginal rate in percent). `None` is open-ended.
const INCOME_BRACKETS: &[(Option<i64>, i64)] = &[
    (Some(237_100), 18),
    (Some(370_500), 26),
    (Some(512_800), 31),
    (Some(673_000), 36),
    (Some(857_900), 39),
    (Some(1_817_000), 41),
    (None, 45),
];

const SAVINGS_INTEREST_PERCENT: i64 = 5;
const INTEREST_TAX_PERCENT: i64 = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TaxStatus {
    Outstanding,
    Estimated,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxBracketRow {
    pub label: String,
    pub taxable_amount: Decimal,
    pub rate: Decimal,
    pub rate_display: String,
    pub tax_due: Decimal,
    pub status: TaxStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct TaxEstimate {
    pub rows: Vec<TaxBracketRow>,
    pub total_tax: Decimal,
}

#[derive(Debug, Clone, Default)]
pub struct BalancesByType {
    totals: HashMap<AccountType, Decimal>,
}

impl BalancesByType {
    pub fn from_accounts(accounts: &[Account]) -> Self {
        let mut out = Self::default();
        for a in accounts {
            out.add(a.account_type, a.balance);
        }
        out
    }

    pub fn add(&mut self, kind: AccountType, amount: Decimal) {
        *self.totals.entry(kind).or_insert(Decimal::ZERO) += amount;
    }

    pub fn get(&self, kind: AccountType) -> Decimal {
        self.totals.get(&kind).copied().unwrap_or(Decimal::ZERO)
    }
}

fn percent(p: i64) -> Decimal {
    Decimal::new(p, 2)
}

fn bracket_label(lower: i64, upper: Option<i64>) -> String {
    match upper {
        Some(u) => format!("Income {} - {}", lower, u),
        None => format!("Income above {}", lower),
    }
}

/// Marginal slices of `income` per bracket, stopping after the bracket that
/// contains it. Always yields at least the first bracket.
fn income_slices(income: Decimal) -> Vec<(i64, Option<i64>, i64, Decimal)> {
    let income = income.max(Decimal::ZERO);
    let mut out = Vec::new();
    let mut lower = 0i64;
    for &(upper, rate) in INCOME_BRACKETS {
        let lo = Decimal::from(lower);
        let slice = match upper {
            Some(u) => (income.min(Decimal::from(u)) - lo).max(Decimal::ZERO),
            None => (income - lo).max(Decimal::ZERO),
        };
        out.push((lower, upper, rate, slice));
        match upper {
            Some(u) if income > Decimal::from(u) => lower = u,
            _ => break,
        }
    }
    out
}

/// Annual income tax over the progressive brackets.
pub fn income_tax(annual_income: Decimal) -> Decimal {
    income_slices(annual_income)
        .into_iter()
        .map(|(_, _, rate, slice)| slice * percent(rate))
        .sum()
}

/// Monthly withholding for a monthly gross salary, annualized over 12 months.
pub fn monthly_paye(gross_monthly: Decimal) -> Decimal {
    let twelve = Decimal::from(12);
    (income_tax(gross_monthly * twelve) / twelve).round_dp(2)
}

pub fn estimate(balances: &BalancesByType) -> TaxEstimate {
    let mut rows = Vec::new();
    for (lower, upper, rate, slice) in income_slices(balances.get(AccountType::Main)) {
        let r = percent(rate);
        rows.push(TaxBracketRow {
            label: bracket_label(lower, upper),
            taxable_amount: slice,
            rate: r,
            rate_display: format!("{}%", rate),
            tax_due: (slice * r).round_dp(2),
            status: TaxStatus::Outstanding,
        });
    }

    let savings = balances.get(AccountType::Savings).max(Decimal::ZERO);
    let interest = (savings * percent(SAVINGS_INTEREST_PERCENT)).round_dp(2);
    let r = percent(INTEREST_TAX_PERCENT);
    rows.push(TaxBracketRow {
        label: "Interest on savings".to_string(),
        taxable_amount: interest,
        rate: r,
        rate_display: format!("{}%", INTEREST_TAX_PERCENT),
        tax_due: (interest * r).round_dp(2),
        status: TaxStatus::Estimated,
    });

    let total_tax = rows.iter().map(|r| r.tax_due).sum();
    TaxEstimate { rows, total_tax }
}
