// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Form checks run before anything is submitted to the backend.

use once_cell::sync::Lazy;
use regex::Regex;
use rust_decimal::Decimal;

use crate::error::{BankError, Result};
use crate::models::BeneficiaryForm;

static SWIFT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{6}[A-Z0-9]{2}([A-Z0-9]{3})?$").expect("valid regex"));
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid regex"));
static ACCOUNT_NUMBER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{6,20}$").expect("valid regex"));
static BRANCH_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4,10}$").expect("valid regex"));
static ETH_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^0x[0-9a-fA-F]{40}$").expect("valid regex"));
static BTC_ADDRESS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(bc1|[13])[a-zA-HJ-NP-Z0-9]{25,62}$").expect("valid regex"));

fn blank_to_none(v: &Option<String>) -> Option<String> {
    v.as_ref()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Trims and normalizes the form, rejecting the first invalid field.
pub fn beneficiary(form: &BeneficiaryForm) -> Result<BeneficiaryForm> {
    let name = form.name.trim().to_string();
    if name.is_empty() {
        return Err(BankError::validation("name", "is required"));
    }
    if name.chars().count() > 100 {
        return Err(BankError::validation("name", "must be at most 100 characters"));
    }
    let bank_name = form.bank_name.trim().to_string();
    if bank_name.is_empty() {
        return Err(BankError::validation("bank_name", "is required"));
    }
    let account_number: String = form
        .account_number
        .chars()
        .filter(|c| !c.is_whitespace())
        .collect();
    if !ACCOUNT_NUMBER.is_match(&account_number) {
        return Err(BankError::validation(
            "account_number",
            "must be 6 to 20 digits",
        ));
    }
    let swift_code = blank_to_none(&form.swift_code).map(|s| s.to_uppercase());
    if let Some(code) = &swift_code {
        if !SWIFT.is_match(code) {
            return Err(BankError::validation(
                "swift_code",
                format!("'{}' is not an 8 or 11 character BIC", code),
            ));
        }
    }
    let branch_code = blank_to_none(&form.branch_code);
    if let Some(code) = &branch_code {
        if !BRANCH_CODE.is_match(code) {
            return Err(BankError::validation("branch_code", "must be 4 to 10 digits"));
        }
    }
    let email = blank_to_none(&form.email);
    if let Some(e) = &email {
        if !EMAIL.is_match(e) {
            return Err(BankError::validation("email", format!("'{}' is not an email", e)));
        }
    }
    Ok(BeneficiaryForm {
        name,
        bank_name,
        account_number,
        swift_code,
        branch_code,
        email,
        kyc_verified: form.kyc_verified,
    })
}

pub fn positive_amount(field: &'static str, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(BankError::validation(field, "must be greater than zero"));
    }
    Ok(())
}

pub fn ratio(field: &'static str, value: Decimal, max: Decimal) -> Result<()> {
    if value < Decimal::ZERO || value > max {
        return Err(BankError::validation(
            field,
            format!("{} is outside 0..={}", value, max),
        ));
    }
    Ok(())
}

pub fn wallet_address(symbol: &str, address: &str) -> Result<()> {
    let ok = match symbol.to_uppercase().as_str() {
        "ETH" | "USDT" | "USDC" => ETH_ADDRESS.is_match(address),
        "BTC" => BTC_ADDRESS.is_match(address),
        _ => !address.trim().is_empty(),
    };
    if !ok {
        return Err(BankError::validation(
            "address",
            format!("'{}' is not a valid {} address", address, symbol),
        ));
    }
    Ok(())
}
