// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::fx::{convert, format_money};
use crate::hooks::accounts;
use crate::store::Store;
use crate::tax::{self, BalancesByType, TaxStatus};
use crate::utils::{json_flags, maybe_print_json, opt_arg, pretty_table};
use anyhow::Result;
use rust_decimal::Decimal;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("balances", sub)) => balances(store, settings, sub)?,
        Some(("tax", sub)) => tax_estimate(store, settings, sub)?,
        _ => {}
    }
    Ok(())
}

fn balances(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let target = opt_arg(sub, "currency")
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| settings.base_currency.clone());
    let mut data = Vec::new();
    let mut total = Decimal::ZERO;
    for a in accounts::list(store)? {
        let converted = convert(a.balance, &a.currency, &target)?;
        total += converted;
        data.push(vec![
            a.name,
            a.account_type.to_string(),
            format_money(a.balance, &a.currency),
            format!("{:.2}", converted),
        ]);
    }
    data.push(vec![
        "Net worth".to_string(),
        String::new(),
        String::new(),
        format!("{:.2}", total),
    ]);
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let hdr = format!("In {}", target);
        println!(
            "{}",
            pretty_table(&["Account", "Type", "Balance", hdr.as_str()], data)
        );
    }
    Ok(())
}

fn tax_estimate(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let accts = accounts::list(store)?;
    // Brackets are denominated in the base currency
    let mut balances = BalancesByType::default();
    for a in &accts {
        balances.add(
            a.account_type,
            convert(a.balance, &a.currency, &settings.base_currency)?,
        );
    }
    let est = tax::estimate(&balances);
    if maybe_print_json(json_flag, jsonl_flag, &est)? {
        return Ok(());
    }
    let ccy = &settings.base_currency;
    let mut rows: Vec<Vec<String>> = est
        .rows
        .iter()
        .map(|r| {
            vec![
                r.label.clone(),
                format_money(r.taxable_amount, ccy),
                r.rate_display.clone(),
                format_money(r.tax_due, ccy),
                match r.status {
                    TaxStatus::Outstanding => "Outstanding".to_string(),
                    TaxStatus::Estimated => "Estimated".to_string(),
                },
            ]
        })
        .collect();
    rows.push(vec![
        "Total".to_string(),
        String::new(),
        String::new(),
        format_money(est.total_tax, ccy),
        String::new(),
    ]);
    println!(
        "{}",
        pretty_table(&["Bracket", "Taxable", "Rate", "Tax due", "Status"], rows)
    );
    Ok(())
}
