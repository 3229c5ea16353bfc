// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::fx::format_money;
use crate::hooks::{accounts, jobs, treasury};
use crate::models::AccountType;
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, settings, sub)?,
        Some(("seed", _)) => {
            let created = accounts::ensure_seeded(store, &settings.base_currency)?;
            println!("{} account(s) on file for {}", created.len(), store.user_id());
        }
        Some(("open", sub)) => {
            let kind: AccountType = arg(sub, "type")?.parse()?;
            let name = arg(sub, "name")?;
            let ccy = opt_arg(sub, "currency").unwrap_or_else(|| settings.base_currency.clone());
            let acct = accounts::create(store, kind, name, &ccy, Decimal::ZERO)?;
            println!(
                "Opened {} account '{}' ({})",
                acct.account_type, acct.name, acct.account_number
            );
        }
        _ => {}
    }
    Ok(())
}

/// First-visit bootstrap: demo accounts, treasury holdings and job listings.
pub fn init(store: &mut Store, settings: &Settings) -> Result<()> {
    let accts = accounts::ensure_seeded(store, &settings.base_currency)?;
    let holdings = treasury::ensure_seeded(store)?;
    let listings = jobs::ensure_seeded(store, &settings.base_currency)?;
    println!(
        "Ready for {}: {} accounts, {} treasury holdings, {} job listings",
        store.user_id(),
        accts.len(),
        holdings.len(),
        listings.len()
    );
    Ok(())
}

fn list(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    // The dashboard seeds on first visit
    let accts = accounts::ensure_seeded(store, &settings.base_currency)?;
    if maybe_print_json(json_flag, jsonl_flag, &accts)? {
        return Ok(());
    }
    let data = accts
        .iter()
        .map(|a| {
            vec![
                a.name.clone(),
                a.account_type.to_string(),
                a.account_number.clone(),
                format_money(a.balance, &a.currency),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Name", "Type", "Number", "Balance"], data)
    );
    Ok(())
}
