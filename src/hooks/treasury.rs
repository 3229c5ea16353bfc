// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::backend::{Query, Table, now_stamp};
use crate::error::{BankError, Result};
use crate::fx;
use crate::models::{TreasuryHolding, TreasuryKind, TreasuryTransaction};
use crate::store::Store;
use crate::validate;

#[derive(Serialize)]
struct NewHolding<'a> {
    user_id: &'a str,
    currency_code: &'a str,
    currency_name: &'a str,
    amount: Decimal,
    reserve_ratio: Decimal,
    liquidity_ratio: Decimal,
    risk_weight: Decimal,
    last_updated: String,
}

#[derive(Serialize)]
struct NewTreasuryTransaction<'a> {
    holding_id: &'a str,
    user_id: &'a str,
    kind: TreasuryKind,
    amount: Decimal,
    currency_code: &'a str,
}

#[derive(Debug, Clone, Copy)]
pub struct Ratios {
    pub reserve_ratio: Decimal,
    pub liquidity_ratio: Decimal,
    pub risk_weight: Decimal,
}

fn max_risk_weight() -> Decimal {
    Decimal::new(15, 1)
}

pub fn list_holdings(store: &mut Store) -> Result<Vec<TreasuryHolding>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("currency_code", false);
    store.fetch(Table::TreasuryHoldings, &query)
}

pub fn get_holding(store: &mut Store, id_or_code: &str) -> Result<TreasuryHolding> {
    let needle = id_or_code.trim();
    list_holdings(store)?
        .into_iter()
        .find(|h| h.id == needle || h.currency_code.eq_ignore_ascii_case(needle))
        .ok_or_else(|| BankError::not_found("treasury holding", needle))
}

// (code, amount, reserve %, liquidity %, risk weight %)
const SEED: &[(&str, i64, i64, i64, i64)] = &[
    ("USD", 2_500_000, 12, 35, 20),
    ("EUR", 1_800_000, 10, 30, 20),
    ("GBP", 950_000, 10, 25, 25),
    ("ZAR", 12_000_000, 15, 40, 50),
    ("JPY", 150_000_000, 8, 20, 20),
];

pub fn ensure_seeded(store: &mut Store) -> Result<Vec<TreasuryHolding>> {
    let existing = list_holdings(store)?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    let user_id = store.user_id().to_string();
    tracing::info!(user = %user_id, "seeding treasury holdings");
    for &(code, amount, reserve, liquidity, risk) in SEED {
        let row = NewHolding {
            user_id: &user_id,
            currency_code: code,
            currency_name: fx::currency_name(code).unwrap_or(code),
            amount: Decimal::from(amount),
            reserve_ratio: Decimal::new(reserve, 2),
            liquidity_ratio: Decimal::new(liquidity, 2),
            risk_weight: Decimal::new(risk, 2),
            last_updated: now_stamp(),
        };
        store.insert::<_, TreasuryHolding>(Table::TreasuryHoldings, &row)?;
    }
    list_holdings(store)
}

pub fn adjust_ratios(store: &mut Store, id_or_code: &str, ratios: Ratios) -> Result<TreasuryHolding> {
    validate::ratio("reserve_ratio", ratios.reserve_ratio, Decimal::ONE)?;
    validate::ratio("liquidity_ratio", ratios.liquidity_ratio, Decimal::ONE)?;
    validate::ratio("risk_weight", ratios.risk_weight, max_risk_weight())?;
    let holding = get_holding(store, id_or_code)?;
    store.update_one(
        Table::TreasuryHoldings,
        "treasury holding",
        &holding.id,
        json!({
            "reserve_ratio": ratios.reserve_ratio,
            "liquidity_ratio": ratios.liquidity_ratio,
            "risk_weight": ratios.risk_weight,
            "last_updated": now_stamp(),
        }),
    )
}

/// Records the movement, then applies it to the holding. The two writes are
/// independent; a failure of the second leaves the movement recorded.
pub fn execute(
    store: &mut Store,
    id_or_code: &str,
    kind: TreasuryKind,
    amount: Decimal,
) -> Result<(TreasuryTransaction, TreasuryHolding)> {
    validate::positive_amount("amount", amount)?;
    let holding = get_holding(store, id_or_code)?;
    let new_amount = match kind {
        TreasuryKind::Deposit => holding
            .amount
            .checked_add(amount)
            .ok_or_else(|| BankError::validation("amount", "out of range"))?,
        TreasuryKind::Withdrawal => {
            if amount > holding.amount {
                return Err(BankError::validation(
                    "amount",
                    format!(
                        "withdrawal of {} exceeds {} holding of {}",
                        amount, holding.currency_code, holding.amount
                    ),
                ));
            }
            holding.amount - amount
        }
    };
    let user_id = store.user_id().to_string();
    let tx: TreasuryTransaction = store.insert(
        Table::TreasuryTransactions,
        &NewTreasuryTransaction {
            holding_id: &holding.id,
            user_id: &user_id,
            kind,
            amount,
            currency_code: &holding.currency_code,
        },
    )?;
    let updated = store.update_one(
        Table::TreasuryHoldings,
        "treasury holding",
        &holding.id,
        json!({ "amount": new_amount, "last_updated": now_stamp() }),
    )?;
    Ok((tx, updated))
}

pub fn list_transactions(store: &mut Store) -> Result<Vec<TreasuryTransaction>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", true);
    store.fetch(Table::TreasuryTransactions, &query)
}

/// Sum of all holdings expressed in `currency`.
pub fn total_in(holdings: &[TreasuryHolding], currency: &str) -> Result<Decimal> {
    let mut total = Decimal::ZERO;
    for h in holdings {
        total += fx::convert(h.amount, &h.currency_code, currency)?;
    }
    Ok(total)
}

/// Amount held back as reserve and the amount considered liquid, per holding.
pub fn reserve_and_liquidity(holding: &TreasuryHolding) -> (Decimal, Decimal) {
    (
        (holding.amount * holding.reserve_ratio).round_dp(2),
        (holding.amount * holding.liquidity_ratio).round_dp(2),
    )
}
