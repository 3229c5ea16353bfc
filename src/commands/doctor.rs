// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx;
use crate::hooks::{accounts, beneficiaries, jobs, transactions, treasury};
use crate::store::Store;
use crate::utils::pretty_table;
use anyhow::Result;
use rust_decimal::Decimal;

/// Balance writes and transaction inserts are separate calls, so a failure
/// between them leaves the two out of step. This lists every such drift.
pub fn find_issues(store: &mut Store) -> Result<Vec<Vec<String>>> {
    let mut rows = Vec::new();

    for a in accounts::list(store)? {
        let txs = transactions::list_for_account(store, &a.id)?;
        let sum: Decimal = txs.iter().map(|t| t.amount).sum();
        if sum != a.balance {
            rows.push(vec![
                "balance_drift".into(),
                format!(
                    "{} ({}): balance {} vs history {}",
                    a.name, a.account_number, a.balance, sum
                ),
            ]);
        }
        if fx::rate(&a.currency).is_err() {
            rows.push(vec![
                "unknown_currency".into(),
                format!("{} uses {}", a.name, a.currency),
            ]);
        }
    }

    for b in beneficiaries::list(store)? {
        if !b.kyc_verified {
            rows.push(vec![
                "unverified_beneficiary".into(),
                format!("{} ({}) is not KYC-verified", b.name, b.account_number),
            ]);
        }
    }

    for h in treasury::list_holdings(store)? {
        if h.reserve_ratio + h.liquidity_ratio > Decimal::ONE {
            rows.push(vec![
                "treasury_ratio".into(),
                format!(
                    "{} reserve {} + liquidity {} exceeds 1",
                    h.currency_code, h.reserve_ratio, h.liquidity_ratio
                ),
            ]);
        }
    }

    for s in jobs::list_setups(store)? {
        if s.is_active && accounts::get(store, &s.account_id).is_err() {
            rows.push(vec![
                "orphan_salary_setup".into(),
                format!("setup {} points at missing account {}", s.id, s.account_id),
            ]);
        }
    }

    Ok(rows)
}

pub fn handle(store: &mut Store) -> Result<()> {
    let rows = find_issues(store)?;
    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
