// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::explorer::Explorer;
use crate::hooks::wallets;
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("wallets", sub)) => {
            let (json_flag, jsonl_flag) = json_flags(sub);
            let items = wallets::list(store)?;
            if !maybe_print_json(json_flag, jsonl_flag, &items)? {
                let rows = items
                    .into_iter()
                    .map(|w| vec![w.symbol, w.address, w.label.unwrap_or_default(), w.id])
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Symbol", "Address", "Label", "ID"], rows)
                );
            }
        }
        Some(("add", sub)) => {
            let label = opt_arg(sub, "label");
            let w = wallets::add(
                store,
                arg(sub, "symbol")?,
                arg(sub, "address")?,
                label.as_deref(),
            )?;
            println!("Added {} wallet {}", w.symbol, w.address);
        }
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?;
            wallets::remove(store, id)?;
            println!("Removed wallet {}", id);
        }
        Some(("balance", sub)) => {
            let address = arg(sub, "address")?;
            let explorer = Explorer::from_settings(&settings.explorer)?;
            let eth = explorer.eth_balance(address)?;
            println!("{} ETH", eth);
        }
        _ => {}
    }
    Ok(())
}
