// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::documents::compliance::{self, ComplianceInput, ComplianceKind};
use crate::documents::salary_slip::{self, SalarySlipInput};
use crate::documents::statement::{self, StatementInput};
use crate::documents::GeneratedDocument;
use crate::fx::money_formatter;
use crate::hooks::{accounts, documents, jobs, transactions};
use crate::salary;
use crate::store::Store;
use crate::utils::{
    arg, json_flags, maybe_print_json, opt_arg, parse_date, parse_decimal, pretty_table,
};
use anyhow::{Context, Result};
use chrono::Utc;
use rust_decimal::Decimal;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("statement", sub)) => {
            let doc = bank_statement(store, settings, sub).context("Could not generate statement")?;
            save(store, settings, "statement", &doc)?;
        }
        Some(("salary-slip", sub)) => {
            let doc = salary_slip(store, settings, sub).context("Could not generate salary slip")?;
            save(store, settings, "salary_slip", &doc)?;
        }
        Some(("compliance", sub)) => {
            let kind: ComplianceKind = arg(sub, "kind")?.parse()?;
            let doc = compliance_letter(store, settings, kind, arg(sub, "account")?)
                .context("Could not generate compliance letter")?;
            save(store, settings, kind.as_str(), &doc)?;
        }
        Some(("list", sub)) => {
            let (json_flag, jsonl_flag) = json_flags(sub);
            let docs = documents::list(store)?;
            if !maybe_print_json(json_flag, jsonl_flag, &docs)? {
                let rows = docs
                    .into_iter()
                    .map(|d| {
                        vec![
                            d.created_at.format("%Y-%m-%d %H:%M").to_string(),
                            d.kind,
                            d.filename,
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["Generated", "Kind", "File"], rows));
            }
        }
        _ => {}
    }
    Ok(())
}

fn save(store: &mut Store, settings: &Settings, kind: &str, doc: &GeneratedDocument) -> Result<()> {
    let path = doc.save(&settings.output_dir)?;
    documents::record(store, kind, &doc.filename)?;
    println!("Saved {} ({} page(s))", path.display(), doc.pages);
    Ok(())
}

pub fn bank_statement(
    store: &mut Store,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<GeneratedDocument> {
    let account = accounts::find_by_number(store, arg(sub, "account")?)?;
    let period_start = opt_arg(sub, "from").map(|s| parse_date(&s)).transpose()?;
    let period_end = opt_arg(sub, "to").map(|s| parse_date(&s)).transpose()?;
    let txs = transactions::list_for_account(store, &account.id)?;
    let fmt = money_formatter(&account.currency);
    let input = StatementInput {
        holder_name: settings.holder_name.clone(),
        bank_name: settings.bank_name.clone(),
        account,
        transactions: txs,
        period_start,
        period_end,
        generated_on: Utc::now().date_naive(),
    };
    Ok(statement::generate(&input, &fmt)?)
}

pub fn salary_slip(
    store: &mut Store,
    settings: &Settings,
    sub: &clap::ArgMatches,
) -> Result<GeneratedDocument> {
    let setup = jobs::get_setup(store, arg(sub, "setup")?)?;
    let job = jobs::get_listing(store, &setup.job_id)?;
    let linked = accounts::get(store, &setup.account_id)?;
    let secondary = match opt_arg(sub, "secondary") {
        Some(number) => Some(accounts::find_by_number(store, &number)?),
        None => None,
    };
    let primary_percent = match opt_arg(sub, "primary_percent") {
        Some(p) => parse_decimal(&p)?,
        None => Decimal::ONE_HUNDRED,
    };
    let today = Utc::now().date_naive();
    let input = SalarySlipInput {
        employee_name: settings.holder_name.clone(),
        employer: job.company.clone(),
        job_title: job.title.clone(),
        period: opt_arg(sub, "period").unwrap_or_else(|| today.format("%Y-%m").to_string()),
        breakdown: salary::breakdown(setup.gross_monthly)?,
        other_deductions: Vec::new(),
        primary_account: format!("{} {}", linked.name, linked.account_number),
        secondary_account: secondary.map(|a| format!("{} {}", a.name, a.account_number)),
        primary_percent,
        generated_on: today,
    };
    let fmt = money_formatter(&job.currency);
    Ok(salary_slip::generate(&input, &fmt)?)
}

pub fn compliance_letter(
    store: &mut Store,
    settings: &Settings,
    kind: ComplianceKind,
    account_number: &str,
) -> Result<GeneratedDocument> {
    let account = accounts::find_by_number(store, account_number)?;
    let today = Utc::now().date_naive();
    let input = ComplianceInput {
        kind,
        holder_name: settings.holder_name.clone(),
        account_number: account.account_number,
        bank_name: settings.bank_name.clone(),
        reference: format!(
            "CMP-{}-{}",
            today.format("%Y%m%d"),
            &uuid::Uuid::new_v4().simple().to_string()[..6].to_uppercase()
        ),
        generated_on: today,
    };
    Ok(compliance::generate(&input)?)
}
