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
use crate::salary::{self, SalaryBreakdown};

#[derive(Debug, Clone)]
pub struct SalarySlipInput {
    pub employee_name: String,
    pub employer: String,
    pub job_title: String,
    /// Pay period label, e.g. `2026-10`.
    pub period: String,
    pub breakdown: SalaryBreakdown,
    pub other_deductions: Vec<(String, Decimal)>,
    pub primary_account: String,
    pub secondary_account: Option<String>,
    /// Share of take-home pay going to the primary account, 0..=100.
    pub primary_percent: Decimal,
    pub generated_on: NaiveDate,
}

pub fn generate(input: &SalarySlipInput, fmt: MoneyFmt) -> Result<GeneratedDocument> {
    let pay = &input.breakdown;
    let extra: Decimal = input.other_deductions.iter().map(|(_, a)| *a).sum();
    let take_home = pay.net - extra;
    if take_home < Decimal::ZERO {
        return Err(BankError::Document(format!(
            "deductions exceed gross salary of {}",
            fmt(pay.gross)
        )));
    }
    let primary_percent = if input.secondary_account.is_some() {
        input.primary_percent
    } else {
        Decimal::ONE_HUNDRED
    };
    let (primary, secondary) = salary::split(take_home, primary_percent)?;

    let mut layout = Layout::new();
    layout.title("Salary Slip");
    layout.field("Employee", &input.employee_name);
    layout.field("Employer", &input.employer);
    layout.field("Position", &input.job_title);
    layout.field("Pay period", &input.period);
    layout.field("Issued", &input.generated_on.format("%Y-%m-%d").to_string());
    layout.rule();

    let cols = [
        Column::new("Item", MARGIN, 300.0, Align::Left),
        Column::new("Amount", MARGIN + 345.0, 150.0, Align::Right),
    ];
    layout.heading("Earnings");
    layout.table(&cols, &[vec!["Basic salary".to_string(), fmt(pay.gross)]]);

    layout.heading("Deductions");
    let mut rows = vec![
        vec!["PAYE income tax".to_string(), fmt(pay.paye)],
        vec!["UIF contribution".to_string(), fmt(pay.uif)],
    ];
    for (label, amount) in &input.other_deductions {
        rows.push(vec![label.clone(), fmt(*amount)]);
    }
    layout.table(&cols, &rows);
    layout.rule();

    layout.field("Net pay", &fmt(take_home));
    layout.heading("Payment split");
    let mut split_rows = vec![vec![
        format!("{} ({}%)", input.primary_account, primary_percent.normalize()),
        fmt(primary),
    ]];
    if let Some(secondary_account) = &input.secondary_account {
        split_rows.push(vec![
            format!(
                "{} ({}%)",
                secondary_account,
                (Decimal::ONE_HUNDRED - primary_percent).normalize()
            ),
            fmt(secondary),
        ]);
    }
    layout.table(&cols, &split_rows);

    let canvas = layout.finish(&format!("{} | {}", input.employer, input.period));
    Ok(GeneratedDocument {
        filename: document_filename(&input.employee_name, "salary_slip", input.generated_on),
        pages: canvas.page_count(),
        bytes: pdf::render(&canvas),
    })
}
