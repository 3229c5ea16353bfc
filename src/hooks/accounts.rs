// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde_json::json;

use crate::backend::{Query, Table};
use crate::error::{BankError, Result};
use crate::hooks::transactions;
use crate::models::{Account, AccountType, NewAccount, NewTransaction};
use crate::store::Store;

pub fn list(store: &mut Store) -> Result<Vec<Account>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", false);
    store.fetch(Table::Accounts, &query)
}

pub fn get(store: &mut Store, id: &str) -> Result<Account> {
    list(store)?
        .into_iter()
        .find(|a| a.id == id)
        .ok_or_else(|| BankError::not_found("account", id))
}

pub fn find_by_number(store: &mut Store, number: &str) -> Result<Account> {
    let number = number.trim();
    list(store)?
        .into_iter()
        .find(|a| a.account_number == number)
        .ok_or_else(|| BankError::not_found("account", number))
}

pub fn generate_account_number() -> String {
    format!("{:010}", uuid::Uuid::new_v4().as_u128() % 10_000_000_000)
}

pub fn create(
    store: &mut Store,
    account_type: AccountType,
    name: &str,
    currency: &str,
    balance: Decimal,
) -> Result<Account> {
    let row = NewAccount {
        user_id: store.user_id().to_string(),
        account_type,
        name: name.trim().to_string(),
        account_number: generate_account_number(),
        balance,
        currency: currency.trim().to_uppercase(),
    };
    store.insert(Table::Accounts, &row)
}

struct SeedAccount {
    kind: AccountType,
    name: &'static str,
    balance: (i64, u32),
    history: &'static [(&'static str, i64, &'static str, &'static str)],
}

// history rows: (name, amount in cents, category, icon)
const SEED: &[SeedAccount] = &[
    SeedAccount {
        kind: AccountType::Main,
        name: "Everyday Account",
        balance: (1_525_000, 2),
        history: &[
            ("Salary Deposit", 2_500_000, "income", "briefcase"),
            ("Woolworths", -84_530, "groceries", "shopping-cart"),
            ("Netflix", -19_900, "entertainment", "tv"),
            ("City Power", -120_000, "utilities", "zap"),
        ],
    },
    SeedAccount {
        kind: AccountType::Savings,
        name: "Savings Pocket",
        balance: (4_800_000, 2),
        history: &[("Monthly Interest", 16_000, "interest", "percent")],
    },
    SeedAccount {
        kind: AccountType::Credit,
        name: "Credit Card",
        balance: (-234_050, 2),
        history: &[
            ("Takealot", -189_950, "shopping", "credit-card"),
            ("Uber", -44_100, "transport", "car"),
        ],
    },
    SeedAccount {
        kind: AccountType::Loan,
        name: "Personal Loan",
        balance: (-12_500_000, 2),
        history: &[],
    },
];

/// Dashboard bootstrap: when the user has no accounts yet, create one of each
/// type with a short history whose amounts sum to the opening balance.
pub fn ensure_seeded(store: &mut Store, currency: &str) -> Result<Vec<Account>> {
    let existing = list(store)?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    tracing::info!(user = store.user_id(), "seeding demo accounts");
    for seed in SEED {
        let balance = Decimal::new(seed.balance.0, seed.balance.1);
        let account = create(store, seed.kind, seed.name, currency, balance)?;
        let listed: Decimal = seed
            .history
            .iter()
            .map(|(_, cents, _, _)| Decimal::new(*cents, 2))
            .sum();
        let opening = balance - listed;
        if !opening.is_zero() {
            transactions::record(
                store,
                &NewTransaction {
                    account_id: account.id.clone(),
                    name: "Opening Balance".to_string(),
                    amount: opening,
                    category: "opening".to_string(),
                    icon: "wallet".to_string(),
                },
            )?;
        }
        for (name, cents, category, icon) in seed.history {
            transactions::record(
                store,
                &NewTransaction {
                    account_id: account.id.clone(),
                    name: name.to_string(),
                    amount: Decimal::new(*cents, 2),
                    category: category.to_string(),
                    icon: icon.to_string(),
                },
            )?;
        }
    }
    list(store)
}

/// Read-modify-write of the balance. Not atomic with any transaction insert
/// that accompanies it.
pub fn adjust_balance(store: &mut Store, id: &str, delta: Decimal) -> Result<Account> {
    let current = get(store, id)?;
    let balance = current
        .balance
        .checked_add(delta)
        .ok_or_else(|| BankError::validation("amount", "out of range"))?;
    store.update_one(
        Table::Accounts,
        "account",
        id,
        json!({ "balance": balance }),
    )
}
