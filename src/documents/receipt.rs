// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;

use super::canvas::Layout;
use super::{GeneratedDocument, MoneyFmt, document_filename, pdf};
use crate::error::Result;
use crate::models::Beneficiary;
use crate::payments::TransferReceipt;

#[derive(Debug, Clone)]
pub struct ProofOfPaymentInput {
    pub payer_name: String,
    pub bank_name: String,
    pub from_account_number: String,
    pub beneficiary: Beneficiary,
    pub amount: Decimal,
    pub reference: String,
    pub paid_at: DateTime<Utc>,
    pub generated_on: NaiveDate,
}

impl ProofOfPaymentInput {
    pub fn from_receipt(
        receipt: &TransferReceipt,
        payer_name: &str,
        bank_name: &str,
        generated_on: NaiveDate,
    ) -> Self {
        Self {
            payer_name: payer_name.to_string(),
            bank_name: bank_name.to_string(),
            from_account_number: receipt.from_account.account_number.clone(),
            beneficiary: receipt.beneficiary.clone(),
            amount: receipt.amount,
            reference: receipt.reference.clone(),
            paid_at: receipt.paid_at,
            generated_on,
        }
    }
}

fn masked(number: &str) -> String {
    let n = number.chars().count();
    if n <= 4 {
        return number.to_string();
    }
    let tail: String = number.chars().skip(n - 4).collect();
    format!("{}{}", "*".repeat(n - 4), tail)
}

pub fn generate(input: &ProofOfPaymentInput, fmt: MoneyFmt) -> Result<GeneratedDocument> {
    let b = &input.beneficiary;
    let mut layout = Layout::new();
    layout.title("Proof of Payment");
    layout.field("Reference", &input.reference);
    layout.field("Payment date", &input.paid_at.format("%Y-%m-%d %H:%M UTC").to_string());
    layout.field("Amount", &fmt(input.amount));
    layout.rule();

    layout.heading("From");
    layout.field("Payer", &input.payer_name);
    layout.field("Bank", &input.bank_name);
    layout.field("Account", &masked(&input.from_account_number));

    layout.heading("To");
    layout.field("Beneficiary", &b.name);
    layout.field("Bank", &b.bank_name);
    layout.field("Account", &b.account_number);
    if let Some(code) = &b.branch_code {
        layout.field("Branch code", code);
    }
    if let Some(code) = &b.swift_code {
        layout.field("SWIFT/BIC", code);
    }
    layout.rule();
    layout.paragraph(&format!(
        "{} confirms that the payment above was submitted on the payer's instruction. \
         Receipt by the beneficiary depends on the receiving bank's processing times.",
        input.bank_name
    ));

    let canvas = layout.finish(&format!("{} | {}", input.bank_name, input.reference));
    Ok(GeneratedDocument {
        filename: document_filename(&b.name, "proof_of_payment", input.generated_on),
        pages: canvas.page_count(),
        bytes: pdf::render(&canvas),
    })
}
