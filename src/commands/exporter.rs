// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::hooks::{accounts, transactions};
use crate::store::Store;
use crate::utils::arg;
use anyhow::{Result, bail};
use serde_json::json;
use std::collections::HashMap;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = arg(sub, "format")?.to_lowercase();
    let out = arg(sub, "out")?.trim();
    if fmt != "csv" && fmt != "json" {
        bail!("Unknown format: {} (use csv|json)", fmt);
    }

    let accts = accounts::list(store)?;
    let names: HashMap<String, (String, String)> = accts
        .into_iter()
        .map(|a| (a.id, (a.name, a.currency)))
        .collect();
    // Oldest first, like a ledger
    let mut txs = transactions::list_for_user(store)?;
    txs.reverse();

    let blank = (String::new(), String::new());
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date", "account", "name", "amount", "currency", "category", "id",
            ])?;
            for t in &txs {
                let (account, currency) = names.get(&t.account_id).unwrap_or(&blank);
                wtr.write_record([
                    t.created_at.format("%Y-%m-%d").to_string(),
                    account.clone(),
                    t.name.clone(),
                    t.amount.to_string(),
                    currency.clone(),
                    t.category.clone(),
                    t.id.clone(),
                ])?;
            }
            wtr.flush()?;
        }
        _ => {
            let items: Vec<_> = txs
                .iter()
                .map(|t| {
                    let (account, currency) = names.get(&t.account_id).unwrap_or(&blank);
                    json!({
                        "date": t.created_at.format("%Y-%m-%d").to_string(),
                        "account": account,
                        "name": t.name,
                        "amount": t.amount.to_string(),
                        "currency": currency,
                        "category": t.category,
                        "id": t.id,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
    }
    println!("Exported {} transactions to {}", txs.len(), out);
    Ok(())
}
