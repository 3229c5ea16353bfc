// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{BankError, Result};
use crate::functions;
use crate::fx::{self, format_money};
use crate::hooks::{accounts, beneficiaries, transactions};
use crate::models::{Account, AccountType, Beneficiary, NewTransaction, Transaction};
use crate::store::Store;
use crate::validate;

#[derive(Debug, Clone)]
pub struct TransferRequest {
    pub from_account_number: String,
    pub beneficiary_id: String,
    pub amount: Decimal,
    pub reference: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferReceipt {
    pub reference: String,
    pub from_account: Account,
    pub beneficiary: Beneficiary,
    pub amount: Decimal,
    pub transaction: Transaction,
    pub notified: bool,
    pub paid_at: DateTime<Utc>,
}

fn new_reference() -> String {
    let id = uuid::Uuid::new_v4().simple().to_string().to_uppercase();
    format!("PAY-{}", &id[..8])
}

/// Pays a beneficiary from one of the user's accounts. When the beneficiary's
/// account number is one of the user's own accounts the destination is
/// credited as well, converted into that account's currency. Each write is
/// its own backend call.
pub fn transfer(store: &mut Store, req: &TransferRequest) -> Result<TransferReceipt> {
    validate::positive_amount("amount", req.amount)?;
    let from = accounts::find_by_number(store, &req.from_account_number)?;
    let beneficiary = beneficiaries::get(store, req.beneficiary_id.trim())?;

    match from.account_type {
        AccountType::Loan => {
            return Err(BankError::validation(
                "from_account",
                "payments cannot be made from a loan account",
            ));
        }
        AccountType::Main | AccountType::Savings if from.balance < req.amount => {
            return Err(BankError::validation(
                "amount",
                format!(
                    "insufficient funds: balance {}",
                    format_money(from.balance, &from.currency)
                ),
            ));
        }
        _ => {}
    }

    let reference = req
        .reference
        .clone()
        .map(|r| r.trim().to_string())
        .filter(|r| !r.is_empty())
        .unwrap_or_else(new_reference);

    let debit = transactions::record(
        store,
        &NewTransaction {
            account_id: from.id.clone(),
            name: format!("Payment to {}", beneficiary.name),
            amount: -req.amount,
            category: "transfer".to_string(),
            icon: "send".to_string(),
        },
    )?;
    let from = accounts::adjust_balance(store, &from.id, -req.amount)?;

    if let Ok(own) = accounts::find_by_number(store, &beneficiary.account_number) {
        if own.id != from.id {
            let credited = fx::convert(req.amount, &from.currency, &own.currency)?;
            transactions::record(
                store,
                &NewTransaction {
                    account_id: own.id.clone(),
                    name: format!("Transfer from {}", from.name),
                    amount: credited,
                    category: "transfer".to_string(),
                    icon: "download".to_string(),
                },
            )?;
            accounts::adjust_balance(store, &own.id, credited)?;
        }
    }

    // Notification failures do not undo a completed payment.
    let mut notified = false;
    if let Some(email) = &beneficiary.email {
        match functions::send_payment_notification(
            store,
            email,
            &beneficiary.name,
            &format_money(req.amount, &from.currency),
            &reference,
        ) {
            Ok(_) => notified = true,
            Err(err) => tracing::warn!(%err, "payment notification failed"),
        }
    }

    tracing::info!(%reference, amount = %req.amount, "transfer completed");
    Ok(TransferReceipt {
        reference,
        from_account: from,
        beneficiary,
        amount: req.amount,
        paid_at: debit.created_at,
        transaction: debit,
        notified,
    })
}
