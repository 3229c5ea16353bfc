// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::backend::{Query, Table};
use crate::error::{BankError, Result};
use crate::models::WalletAddress;
use crate::store::Store;
use crate::validate;

#[derive(Serialize)]
struct NewWallet<'a> {
    user_id: &'a str,
    symbol: &'a str,
    address: &'a str,
    label: Option<&'a str>,
}

pub fn list(store: &mut Store) -> Result<Vec<WalletAddress>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", false);
    store.fetch(Table::WalletAddresses, &query)
}

pub fn add(
    store: &mut Store,
    symbol: &str,
    address: &str,
    label: Option<&str>,
) -> Result<WalletAddress> {
    let symbol = symbol.trim().to_uppercase();
    let address = address.trim();
    validate::wallet_address(&symbol, address)?;
    let user_id = store.user_id().to_string();
    store.insert(
        Table::WalletAddresses,
        &NewWallet {
            user_id: &user_id,
            symbol: &symbol,
            address,
            label,
        },
    )
}

pub fn remove(store: &mut Store, id: &str) -> Result<()> {
    let query = Query::new().eq("id", id.trim()).eq("user_id", store.user_id());
    if store.delete(Table::WalletAddresses, &query)? == 0 {
        return Err(BankError::not_found("wallet address", id));
    }
    Ok(())
}
