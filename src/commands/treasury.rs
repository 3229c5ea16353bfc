// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::fx::format_money;
use crate::hooks::treasury::{self, Ratios};
use crate::models::TreasuryKind;
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, settings, sub)?,
        Some(("adjust", sub)) => {
            let ratios = Ratios {
                reserve_ratio: parse_decimal(arg(sub, "reserve")?)?,
                liquidity_ratio: parse_decimal(arg(sub, "liquidity")?)?,
                risk_weight: parse_decimal(arg(sub, "risk")?)?,
            };
            let h = treasury::adjust_ratios(store, arg(sub, "holding")?, ratios)?;
            println!(
                "{}: reserve {} liquidity {} risk {}",
                h.currency_code, h.reserve_ratio, h.liquidity_ratio, h.risk_weight
            );
        }
        Some(("execute", sub)) => {
            let kind: TreasuryKind = arg(sub, "kind")?.parse()?;
            let amount = parse_decimal(arg(sub, "amount")?)?;
            let (_, h) = treasury::execute(store, arg(sub, "holding")?, kind, amount)?;
            println!(
                "{} holding now {}",
                h.currency_code,
                format_money(h.amount, &h.currency_code)
            );
        }
        Some(("history", sub)) => history(store, sub)?,
        _ => {}
    }
    Ok(())
}

fn list(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let holdings = treasury::ensure_seeded(store)?;
    if maybe_print_json(json_flag, jsonl_flag, &holdings)? {
        return Ok(());
    }
    let target = opt_arg(sub, "currency")
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| settings.base_currency.clone());
    let rows = holdings
        .iter()
        .map(|h| {
            let (reserve, liquid) = treasury::reserve_and_liquidity(h);
            vec![
                format!("{} ({})", h.currency_code, h.currency_name),
                format_money(h.amount, &h.currency_code),
                format_money(reserve, &h.currency_code),
                format_money(liquid, &h.currency_code),
                h.risk_weight.to_string(),
                h.last_updated.format("%Y-%m-%d %H:%M").to_string(),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Currency", "Amount", "Reserve", "Liquid", "Risk weight", "Updated"],
            rows
        )
    );
    let total = treasury::total_in(&holdings, &target)?;
    println!("Total: {}", format_money(total, &target));
    Ok(())
}

fn history(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let txs = treasury::list_transactions(store)?;
    if maybe_print_json(json_flag, jsonl_flag, &txs)? {
        return Ok(());
    }
    let rows = txs
        .into_iter()
        .map(|t| {
            vec![
                t.created_at.format("%Y-%m-%d %H:%M").to_string(),
                format!("{:?}", t.kind).to_lowercase(),
                format_money(t.amount, &t.currency_code),
                t.currency_code,
            ]
        })
        .collect();
    println!("{}", pretty_table(&["When", "Kind", "Amount", "CCY"], rows));
    Ok(())
}
