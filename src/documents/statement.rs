// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use super::canvas::{Align, Column, Layout, MARGIN};
use super::{GeneratedDocument, MoneyFmt, document_filename, pdf};
use crate::error::{BankError, Result};
use crate::models::{Account, Transaction};

#[derive(Debug, Clone)]
pub struct StatementInput {
    pub holder_name: String,
    pub bank_name: String,
    pub account: Account,
    pub transactions: Vec<Transaction>,
    pub period_start: Option<NaiveDate>,
    pub period_end: Option<NaiveDate>,
    pub generated_on: NaiveDate,
}

fn columns() -> Vec<Column> {
    vec![
        Column::new("Date", MARGIN, 65.0, Align::Left),
        Column::new("Description", MARGIN + 70.0, 170.0, Align::Left),
        Column::new("Category", MARGIN + 245.0, 80.0, Align::Left),
        Column::new("Amount", MARGIN + 325.0, 80.0, Align::Right),
        Column::new("Balance", MARGIN + 410.0, 85.0, Align::Right),
    ]
}

/// The account balance is the balance today. Activity dated after the period
/// is backed out to reach the closing balance, then the rows shown are backed
/// out to reach the opening balance. Rows run oldest to newest.
pub fn generate(input: &StatementInput, fmt: MoneyFmt) -> Result<GeneratedDocument> {
    if let (Some(start), Some(end)) = (input.period_start, input.period_end) {
        if start > end {
            return Err(BankError::Document(format!(
                "statement period starts {} after it ends {}",
                start, end
            )));
        }
    }

    let own: Vec<&Transaction> = input
        .transactions
        .iter()
        .filter(|t| t.account_id == input.account.id)
        .collect();
    let after_period: Decimal = own
        .iter()
        .filter(|t| {
            input
                .period_end
                .is_some_and(|e| t.created_at.date_naive() > e)
        })
        .map(|t| t.amount)
        .sum();
    let mut txs: Vec<&Transaction> = own
        .into_iter()
        .filter(|t| {
            let d = t.created_at.date_naive();
            input.period_start.is_none_or(|s| d >= s) && input.period_end.is_none_or(|e| d <= e)
        })
        .collect();
    txs.sort_by_key(|t| t.created_at);

    let closing = input.account.balance - after_period;
    let movement: Decimal = txs.iter().map(|t| t.amount).sum();
    let opening = closing - movement;
    let money_in: Decimal = txs.iter().map(|t| t.amount).filter(|a| *a > Decimal::ZERO).sum();
    let money_out: Decimal = txs.iter().map(|t| t.amount).filter(|a| *a < Decimal::ZERO).sum();

    let mut layout = Layout::new();
    layout.title(&format!("{} - Bank Statement", input.bank_name));
    layout.field("Account holder", &input.holder_name);
    layout.field("Account", &input.account.name);
    layout.field("Account number", &input.account.account_number);
    layout.field("Account type", input.account.account_type.as_str());
    let period = match (input.period_start, input.period_end) {
        (Some(s), Some(e)) => format!("{} to {}", s, e),
        (Some(s), None) => format!("From {}", s),
        (None, Some(e)) => format!("Up to {}", e),
        (None, None) => "All activity".to_string(),
    };
    layout.field("Period", &period);
    layout.field("Statement date", &input.generated_on.format("%Y-%m-%d").to_string());
    layout.rule();

    layout.heading("Summary");
    layout.field("Opening balance", &fmt(opening));
    layout.field("Money in", &fmt(money_in));
    layout.field("Money out", &fmt(money_out));
    layout.field("Closing balance", &fmt(closing));
    layout.rule();

    layout.heading("Transactions");
    let mut running = opening;
    let rows: Vec<Vec<String>> = txs
        .iter()
        .map(|t| {
            running += t.amount;
            vec![
                t.created_at.format("%Y-%m-%d").to_string(),
                t.name.clone(),
                t.category.clone(),
                fmt(t.amount),
                fmt(running),
            ]
        })
        .collect();
    layout.table(&columns(), &rows);

    let canvas = layout.finish(&format!(
        "{} | Account {} | Generated {}",
        input.bank_name, input.account.account_number, input.generated_on
    ));
    Ok(GeneratedDocument {
        filename: document_filename(&input.account.name, "statement", input.generated_on),
        pages: canvas.page_count(),
        bytes: pdf::render(&canvas),
    })
}
