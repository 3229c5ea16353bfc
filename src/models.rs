// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BankError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    Main,
    Savings,
    Credit,
    Loan,
}

impl AccountType {
    pub const ALL: [AccountType; 4] = [
        AccountType::Main,
        AccountType::Savings,
        AccountType::Credit,
        AccountType::Loan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AccountType::Main => "main",
            AccountType::Savings => "savings",
            AccountType::Credit => "credit",
            AccountType::Loan => "loan",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AccountType {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "main" => Ok(AccountType::Main),
            "savings" => Ok(AccountType::Savings),
            "credit" => Ok(AccountType::Credit),
            "loan" => Ok(AccountType::Loan),
            other => Err(BankError::validation(
                "account_type",
                format!("'{}' is not one of main|savings|credit|loan", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub user_id: String,
    pub account_type: AccountType,
    pub name: String,
    pub account_number: String,
    pub balance: Decimal,
    pub currency: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewAccount {
    pub user_id: String,
    pub account_type: AccountType,
    pub name: String,
    pub account_number: String,
    pub balance: Decimal,
    pub currency: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewTransaction {
    pub account_id: String,
    pub name: String,
    pub amount: Decimal,
    pub category: String,
    pub icon: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Beneficiary {
    pub id: String,
    pub user_id: String,
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub swift_code: Option<String>,
    pub branch_code: Option<String>,
    pub email: Option<String>,
    pub kyc_verified: bool,
    pub created_at: DateTime<Utc>,
}

/// Form payload for creating or editing a beneficiary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BeneficiaryForm {
    pub name: String,
    pub bank_name: String,
    pub account_number: String,
    pub swift_code: Option<String>,
    pub branch_code: Option<String>,
    pub email: Option<String>,
    pub kyc_verified: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryHolding {
    pub id: String,
    pub user_id: String,
    pub currency_code: String,
    pub currency_name: String,
    pub amount: Decimal,
    pub reserve_ratio: Decimal,
    pub liquidity_ratio: Decimal,
    pub risk_weight: Decimal,
    pub last_updated: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TreasuryKind {
    Deposit,
    Withdrawal,
}

impl FromStr for TreasuryKind {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "deposit" => Ok(TreasuryKind::Deposit),
            "withdrawal" | "withdraw" => Ok(TreasuryKind::Withdrawal),
            other => Err(BankError::validation(
                "kind",
                format!("'{}' is not one of deposit|withdrawal", other),
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreasuryTransaction {
    pub id: String,
    pub holding_id: String,
    pub user_id: String,
    pub kind: TreasuryKind,
    pub amount: Decimal,
    pub currency_code: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobListing {
    pub id: String,
    pub title: String,
    pub company: String,
    pub gross_monthly_salary: Decimal,
    pub currency: String,
    pub location: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobSalarySetup {
    pub id: String,
    pub user_id: String,
    pub job_id: String,
    pub gross_monthly: Decimal,
    pub net_monthly: Decimal,
    pub account_id: String,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub user_id: String,
    pub kind: String,
    pub filename: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WalletAddress {
    pub id: String,
    pub user_id: String,
    pub symbol: String,
    pub address: String,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
}
