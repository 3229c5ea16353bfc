// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::backend::{Query, Table};
use crate::error::{BankError, Result};
use crate::hooks::accounts;
use crate::models::{NewTransaction, Transaction};
use crate::store::Store;

/// Fails with not-found unless the account belongs to the current user.
pub fn list_for_account(store: &mut Store, account_id: &str) -> Result<Vec<Transaction>> {
    accounts::get(store, account_id)?;
    let query = Query::new()
        .eq("account_id", account_id)
        .order_by("created_at", true);
    store.fetch(Table::Transactions, &query)
}

/// Newest first, across every account the user owns.
pub fn list_for_user(store: &mut Store) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    for account in accounts::list(store)? {
        out.extend(list_for_account(store, &account.id)?);
    }
    out.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(out)
}

pub fn get(store: &mut Store, id: &str) -> Result<Transaction> {
    let id = id.trim();
    let tx: Transaction = store.fetch_one(Table::Transactions, "transaction", id)?;
    match accounts::get(store, &tx.account_id) {
        Ok(_) => Ok(tx),
        Err(BankError::NotFound { .. }) => Err(BankError::not_found("transaction", id)),
        Err(err) => Err(err),
    }
}

pub fn record(store: &mut Store, tx: &NewTransaction) -> Result<Transaction> {
    tracing::debug!(account = %tx.account_id, amount = %tx.amount, "recording transaction");
    store.insert(Table::Transactions, tx)
}
