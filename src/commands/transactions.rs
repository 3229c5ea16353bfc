// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::fx::format_money;
use crate::hooks::{accounts, transactions};
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, pretty_table};
use anyhow::Result;
use serde::Serialize;
use std::collections::HashMap;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => list(store, sub)?,
        Some(("show", sub)) => show(store, sub)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: String,
    pub date: String,
    pub account: String,
    pub name: String,
    pub category: String,
    pub amount: String,
    pub currency: String,
}

/// Newest first, optionally narrowed to one account number.
pub fn query_rows(store: &mut Store, sub: &clap::ArgMatches) -> Result<Vec<TransactionRow>> {
    let accts = accounts::list(store)?;
    let by_id: HashMap<&str, (&str, &str)> = accts
        .iter()
        .map(|a| (a.id.as_str(), (a.name.as_str(), a.currency.as_str())))
        .collect();

    let txs = match opt_arg(sub, "account") {
        Some(number) => {
            let acct = accounts::find_by_number(store, &number)?;
            transactions::list_for_account(store, &acct.id)?
        }
        None => transactions::list_for_user(store)?,
    };
    let limit = sub.get_one::<usize>("limit").copied().unwrap_or(usize::MAX);

    Ok(txs
        .into_iter()
        .take(limit)
        .map(|t| {
            let (account, currency) = by_id
                .get(t.account_id.as_str())
                .copied()
                .unwrap_or(("?", ""));
            TransactionRow {
                id: t.id,
                date: t.created_at.format("%Y-%m-%d").to_string(),
                account: account.to_string(),
                name: t.name,
                category: t.category,
                amount: t.amount.to_string(),
                currency: currency.to_string(),
            }
        })
        .collect())
}

fn list(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let data = query_rows(store, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|r| {
                vec![
                    r.date.clone(),
                    r.account.clone(),
                    r.name.clone(),
                    r.category.clone(),
                    r.amount.clone(),
                    r.currency.clone(),
                    r.id.clone(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Date", "Account", "Description", "Category", "Amount", "CCY", "ID"],
                rows,
            )
        );
    }
    Ok(())
}

fn show(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let tx = transactions::get(store, arg(sub, "id")?)?;
    if maybe_print_json(json_flag, jsonl_flag, &tx)? {
        return Ok(());
    }
    let account = accounts::get(store, &tx.account_id).ok();
    let currency = account.as_ref().map(|a| a.currency.as_str()).unwrap_or("");
    let rows = vec![
        vec!["Description".into(), tx.name.clone()],
        vec!["Amount".into(), format_money(tx.amount, currency)],
        vec!["Category".into(), tx.category.clone()],
        vec!["Date".into(), tx.created_at.to_rfc3339()],
        vec![
            "Account".into(),
            account
                .as_ref()
                .map(|a| format!("{} ({})", a.name, a.account_number))
                .unwrap_or_else(|| tx.account_id.clone()),
        ],
        vec!["ID".into(), tx.id.clone()],
    ];
    println!("{}", pretty_table(&["Field", "Value"], rows));
    Ok(())
}
