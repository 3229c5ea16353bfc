// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::documents::receipt::{self, ProofOfPaymentInput};
use crate::functions;
use crate::fx::{format_money, money_formatter};
use crate::hooks::documents;
use crate::payments::{self, TransferRequest};
use crate::store::Store;
use crate::utils::{arg, opt_arg, parse_decimal};
use anyhow::{Context, Result};
use chrono::Utc;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transfer", sub)) => transfer(store, settings, sub)?,
        Some(("checkout", sub)) => {
            let amount = parse_decimal(arg(sub, "amount")?)?;
            let ccy = opt_arg(sub, "currency").unwrap_or_else(|| settings.base_currency.clone());
            let res = functions::create_checkout_session(store, amount, &ccy, arg(sub, "description")?)?;
            println!("Checkout session: {}", res);
        }
        _ => {}
    }
    Ok(())
}

fn transfer(store: &mut Store, settings: &Settings, sub: &clap::ArgMatches) -> Result<()> {
    let req = TransferRequest {
        from_account_number: arg(sub, "from")?.clone(),
        beneficiary_id: arg(sub, "to")?.clone(),
        amount: parse_decimal(arg(sub, "amount")?)?,
        reference: opt_arg(sub, "reference"),
    };
    let paid = payments::transfer(store, &req)?;
    println!(
        "Paid {} to {} (ref {}); {} balance now {}",
        format_money(paid.amount, &paid.from_account.currency),
        paid.beneficiary.name,
        paid.reference,
        paid.from_account.name,
        format_money(paid.from_account.balance, &paid.from_account.currency),
    );
    if paid.notified {
        println!("Notification sent to the beneficiary.");
    }

    if sub.get_flag("receipt") {
        let input = ProofOfPaymentInput::from_receipt(
            &paid,
            &settings.holder_name,
            &settings.bank_name,
            Utc::now().date_naive(),
        );
        let fmt = money_formatter(&paid.from_account.currency);
        let doc = receipt::generate(&input, &fmt).context("Could not generate proof of payment")?;
        let path = doc.save(&settings.output_dir)?;
        documents::record(store, "proof_of_payment", &doc.filename)?;
        println!("Proof of payment saved to {}", path.display());
    }
    Ok(())
}
