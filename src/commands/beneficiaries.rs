// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::hooks::beneficiaries;
use crate::models::BeneficiaryForm;
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, opt_arg, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Store, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let b = beneficiaries::create(store, &form_from_args(sub)?)?;
            println!(
                "Added beneficiary '{}' ({} {}) [{}]",
                b.name, b.bank_name, b.account_number, b.id
            );
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => {
            let id = arg(sub, "id")?;
            let b = beneficiaries::update(store, id, &form_from_args(sub)?)?;
            println!("Updated beneficiary '{}'", b.name);
        }
        Some(("rm", sub)) => {
            let id = arg(sub, "id")?;
            beneficiaries::delete(store, id)?;
            println!("Removed beneficiary {}", id);
        }
        _ => {}
    }
    Ok(())
}

pub fn form_from_args(sub: &clap::ArgMatches) -> Result<BeneficiaryForm> {
    Ok(BeneficiaryForm {
        name: arg(sub, "name")?.clone(),
        bank_name: arg(sub, "bank")?.clone(),
        account_number: arg(sub, "account")?.clone(),
        swift_code: opt_arg(sub, "swift"),
        branch_code: opt_arg(sub, "branch"),
        email: opt_arg(sub, "email"),
        kyc_verified: None,
    })
}

fn list(store: &mut Store, sub: &clap::ArgMatches) -> Result<()> {
    let (json_flag, jsonl_flag) = json_flags(sub);
    let items = beneficiaries::list(store)?;
    if maybe_print_json(json_flag, jsonl_flag, &items)? {
        return Ok(());
    }
    let rows = items
        .into_iter()
        .map(|b| {
            vec![
                b.name,
                b.bank_name,
                b.account_number,
                b.swift_code.unwrap_or_default(),
                b.email.unwrap_or_default(),
                if b.kyc_verified { "yes" } else { "no" }.to_string(),
                b.id,
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(
            &["Name", "Bank", "Account", "SWIFT", "Email", "KYC", "ID"],
            rows
        )
    );
    Ok(())
}
