// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx::{convert, cross_rate, currency_name, format_money, supported_currencies};
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, parse_decimal, pretty_table};
use anyhow::Result;
use serde::Serialize;

pub fn handle(m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("convert", sub)) => convert_amount(sub)?,
        Some(("rates", sub)) => list_rates(sub)?,
        _ => {}
    }
    Ok(())
}

fn convert_amount(sub: &clap::ArgMatches) -> Result<()> {
    let amount = parse_decimal(arg(sub, "amount")?)?;
    let from = arg(sub, "from")?.to_uppercase();
    let to = arg(sub, "to")?.to_uppercase();
    let res = convert(amount, &from, &to)?;
    println!(
        "{} -> {} ({:.4} {})",
        format_money(amount, &from),
        format_money(res, &to),
        res,
        to
    );
    Ok(())
}

#[derive(Serialize)]
struct RateRow {
    code: &'static str,
    name: &'static str,
    rate: String,
}

fn list_rates(sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let base = opt_arg(sub, "base")
        .map(|s| s.to_uppercase())
        .unwrap_or_else(|| "USD".to_string());
    let mut data = Vec::new();
    for code in supported_currencies() {
        data.push(RateRow {
            code,
            name: currency_name(code).unwrap_or(code),
            rate: format!("{:.4}", cross_rate(&base, code)?),
        });
    }
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows = data
            .into_iter()
            .map(|r| vec![r.code.to_string(), r.name.to_string(), r.rate])
            .collect();
        let hdr = format!("Per 1 {}", base);
        println!("{}", pretty_table(&["Code", "Currency", hdr.as_str()], rows));
    }
    Ok(())
}
