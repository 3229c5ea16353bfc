// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use std::str::FromStr;

use super::canvas::Layout;
use super::{GeneratedDocument, document_filename, pdf};
use crate::error::{BankError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComplianceKind {
    BankConfirmation,
    TaxCompliance,
    AccountStanding,
}

impl ComplianceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplianceKind::BankConfirmation => "bank_confirmation",
            ComplianceKind::TaxCompliance => "tax_compliance",
            ComplianceKind::AccountStanding => "account_standing",
        }
    }

    fn title(&self) -> &'static str {
        match self {
            ComplianceKind::BankConfirmation => "Confirmation of Banking Details",
            ComplianceKind::TaxCompliance => "Tax Compliance Letter",
            ComplianceKind::AccountStanding => "Letter of Good Standing",
        }
    }

    fn template(&self) -> &'static str {
        match self {
            ComplianceKind::BankConfirmation => BANK_CONFIRMATION,
            ComplianceKind::TaxCompliance => TAX_COMPLIANCE,
            ComplianceKind::AccountStanding => ACCOUNT_STANDING,
        }
    }
}

impl FromStr for ComplianceKind {
    type Err = BankError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "bank_confirmation" => Ok(ComplianceKind::BankConfirmation),
            "tax_compliance" => Ok(ComplianceKind::TaxCompliance),
            "account_standing" => Ok(ComplianceKind::AccountStanding),
            other => Err(BankError::validation(
                "kind",
                format!(
                    "'{}' is not one of bank_confirmation|tax_compliance|account_standing",
                    other
                ),
            )),
        }
    }
}

const BANK_CONFIRMATION: &str = "To whom it may concern,

This letter confirms that {{holder}} holds account number {{account_number}} with {{bank}}. The account is active and in the holder's name as at {{date}}.

This confirmation is issued at the request of the account holder and carries reference {{reference}}. It does not constitute a credit reference.

Yours faithfully,
{{bank}} Client Services";

const TAX_COMPLIANCE: &str = "To whom it may concern,

{{bank}} confirms that interest and withholding information for account {{account_number}}, held by {{holder}}, has been reported for the current tax year as at {{date}}.

Figures are estimates prepared from account balances and must be reconciled with the holder's own tax return. Reference: {{reference}}.

Yours faithfully,
{{bank}} Compliance Office";

const ACCOUNT_STANDING: &str = "To whom it may concern,

We confirm that {{holder}} has been a client of {{bank}} and that account {{account_number}} is in good standing as at {{date}}. No arrears are recorded against the account.

Reference: {{reference}}.

Yours faithfully,
{{bank}} Client Services";

#[derive(Debug, Clone)]
pub struct ComplianceInput {
    pub kind: ComplianceKind,
    pub holder_name: String,
    pub account_number: String,
    pub bank_name: String,
    pub reference: String,
    pub generated_on: NaiveDate,
}

pub fn render_template(template: &str, input: &ComplianceInput) -> Result<String> {
    let date = input.generated_on.format("%d %B %Y").to_string();
    let body = template
        .replace("{{holder}}", &input.holder_name)
        .replace("{{account_number}}", &input.account_number)
        .replace("{{bank}}", &input.bank_name)
        .replace("{{reference}}", &input.reference)
        .replace("{{date}}", &date);
    if let Some(start) = body.find("{{") {
        let tail: String = body[start..].chars().take(24).collect();
        return Err(BankError::Document(format!(
            "unresolved placeholder near '{}'",
            tail
        )));
    }
    Ok(body)
}

pub fn generate(input: &ComplianceInput) -> Result<GeneratedDocument> {
    let body = render_template(input.kind.template(), input)?;

    let mut layout = Layout::new();
    layout.title(input.kind.title());
    layout.field("Reference", &input.reference);
    layout.field("Date", &input.generated_on.format("%Y-%m-%d").to_string());
    layout.rule();
    layout.spacer(8.0);
    layout.paragraph(&body);

    let canvas = layout.finish(&format!("{} | {}", input.bank_name, input.reference));
    Ok(GeneratedDocument {
        filename: document_filename(&input.holder_name, input.kind.as_str(), input.generated_on),
        pages: canvas.page_count(),
        bytes: pdf::render(&canvas),
    })
}
