// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::documents::canvas::{Align, Column, Layout, MARGIN};
use bankdesk::documents::compliance::{self, ComplianceInput, ComplianceKind};
use bankdesk::documents::receipt::{self, ProofOfPaymentInput};
use bankdesk::documents::salary_slip::{self, SalarySlipInput};
use bankdesk::documents::statement::{self, StatementInput};
use bankdesk::documents::{document_filename, pdf};
use bankdesk::fx::money_formatter;
use bankdesk::models::{Account, AccountType, Beneficiary, Transaction};
use bankdesk::salary;
use chrono::{Duration, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;
use std::str::FromStr;
use tempfile::tempdir;

fn d(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn day(y: i32, m: u32, dd: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, dd).unwrap()
}

/// One char per byte so string offsets line up with the xref table.
fn text(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| if b.is_ascii() { b as char } else { '?' })
        .collect()
}

fn account(balance: &str) -> Account {
    Account {
        id: "acc-1".into(),
        user_id: "u1".into(),
        account_type: AccountType::Main,
        name: "Everyday Account".into(),
        account_number: "1234567890".into(),
        balance: d(balance),
        currency: "ZAR".into(),
        created_at: Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap(),
    }
}

fn tx(n: i64, amount: &str) -> Transaction {
    Transaction {
        id: format!("tx-{}", n),
        account_id: "acc-1".into(),
        name: format!("Purchase {}", n),
        amount: d(amount),
        category: "shopping".into(),
        icon: "cart".into(),
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap() + Duration::hours(n),
    }
}

fn statement_input(balance: &str, txs: Vec<Transaction>) -> StatementInput {
    StatementInput {
        holder_name: "Demo Customer".into(),
        bank_name: "Capitec Bank".into(),
        account: account(balance),
        transactions: txs,
        period_start: None,
        period_end: None,
        generated_on: day(2025, 3, 31),
    }
}

#[test]
fn filenames_follow_entity_kind_date() {
    assert_eq!(
        document_filename("Everyday Account", "statement", day(2025, 3, 31)),
        "Everyday_Account_statement_2025-03-31.pdf"
    );
    assert_eq!(
        document_filename("  a/b:c ", "salary_slip", day(2025, 1, 2)),
        "abc_salary_slip_2025-01-02.pdf"
    );
    assert_eq!(
        document_filename("", "proof_of_payment", day(2025, 1, 2)),
        "document_proof_of_payment_2025-01-02.pdf"
    );
}

#[test]
fn empty_statement_still_renders() {
    let fmt = money_formatter("ZAR");
    let doc = statement::generate(&statement_input("0", Vec::new()), &fmt).unwrap();
    assert_eq!(doc.pages, 1);
    assert_eq!(doc.filename, "Everyday_Account_statement_2025-03-31.pdf");
    let body = text(&doc.bytes);
    assert!(body.starts_with("%PDF-1.4"));
    assert!(body.ends_with("%%EOF\n"));
    assert!(body.contains("No entries."));
    assert!(body.contains("Page 1 of 1"));
}

#[test]
fn long_statement_paginates_with_running_balance() {
    let txs: Vec<Transaction> = (0..120).map(|n| tx(n, "-10.00")).collect();
    let fmt = money_formatter("ZAR");
    let doc = statement::generate(&statement_input("800.00", txs), &fmt).unwrap();
    assert!(doc.pages > 1, "expected several pages, got {}", doc.pages);

    let body = text(&doc.bytes);
    assert!(body.contains(&format!("Page {} of {}", doc.pages, doc.pages)));
    assert!(body.contains(&format!("/Count {}", doc.pages)));
    // opening balance is backed out of the closing balance
    assert!(body.contains("R2,000.00"));
    assert!(body.contains("R800.00"));
    // header repeats on every page
    assert_eq!(body.matches("(Balance) Tj").count(), doc.pages);
}

#[test]
fn statement_period_filters_and_rejects_inverted_range() {
    let fmt = money_formatter("ZAR");
    let mut input = statement_input("100", vec![tx(1, "-5"), tx(48, "-7")]);
    input.period_start = Some(day(2025, 3, 1));
    input.period_end = Some(day(2025, 3, 1));
    let doc = statement::generate(&input, &fmt).unwrap();
    let body = text(&doc.bytes);
    assert!(body.contains("Purchase 1"));
    assert!(!body.contains("Purchase 48"));

    input.period_start = Some(day(2025, 4, 1));
    assert!(statement::generate(&input, &fmt).is_err());
}

#[test]
fn bounded_statement_backs_out_later_activity() {
    let fmt = money_formatter("ZAR");
    // Mar 1 -5, Mar 3 -7, balance today 100
    let mut input = statement_input("100", vec![tx(1, "-5"), tx(48, "-7")]);
    input.period_start = Some(day(2025, 3, 1));
    input.period_end = Some(day(2025, 3, 1));
    let body = text(&statement::generate(&input, &fmt).unwrap().bytes);
    assert!(body.contains("(R112.00) Tj"));
    assert!(body.contains("(R107.00) Tj"));
    assert!(!body.contains("R100.00"));
    assert!(!body.contains("R105.00"));

    // an open-ended period closes on today's balance
    input.period_start = Some(day(2025, 3, 2));
    input.period_end = None;
    let body = text(&statement::generate(&input, &fmt).unwrap().bytes);
    assert!(body.contains("(R107.00) Tj"));
    assert!(body.contains("(R100.00) Tj"));
    assert!(!body.contains("Purchase 1)"));
}

#[test]
fn salary_slip_shows_split_and_rejects_excess_deductions() {
    let fmt = money_formatter("ZAR");
    let mut input = SalarySlipInput {
        employee_name: "Demo Customer".into(),
        employer: "Capitec Bank".into(),
        job_title: "Software Engineer".into(),
        period: "2025-03".into(),
        breakdown: salary::breakdown(d("65000")).unwrap(),
        other_deductions: vec![("Medical aid".into(), d("2500"))],
        primary_account: "Capitec Bank Salary 1111222233".into(),
        secondary_account: Some("Savings Pocket 4444555566".into()),
        primary_percent: d("70"),
        generated_on: day(2025, 3, 25),
    };
    let doc = salary_slip::generate(&input, &fmt).unwrap();
    assert_eq!(doc.filename, "Demo_Customer_salary_slip_2025-03-25.pdf");
    let body = text(&doc.bytes);
    assert!(body.contains("\\(70%\\)"));
    assert!(body.contains("\\(30%\\)"));
    assert!(body.contains("Medical aid"));

    input.other_deductions = vec![("Garnishee".into(), d("100000"))];
    assert!(salary_slip::generate(&input, &fmt).is_err());
}

#[test]
fn zero_salary_slip_is_valid() {
    let fmt = money_formatter("ZAR");
    let input = SalarySlipInput {
        employee_name: "Demo Customer".into(),
        employer: "Vodacom".into(),
        job_title: "Intern".into(),
        period: "2025-03".into(),
        breakdown: salary::breakdown(Decimal::ZERO).unwrap(),
        other_deductions: Vec::new(),
        primary_account: "Main 1".into(),
        secondary_account: None,
        primary_percent: d("40"),
        generated_on: day(2025, 3, 25),
    };
    let doc = salary_slip::generate(&input, &fmt).unwrap();
    // without a secondary account everything goes to the primary
    assert!(text(&doc.bytes).contains("\\(100%\\)"));
}

#[test]
fn compliance_templates_resolve_every_placeholder() {
    for kind in [
        ComplianceKind::BankConfirmation,
        ComplianceKind::TaxCompliance,
        ComplianceKind::AccountStanding,
    ] {
        let input = ComplianceInput {
            kind,
            holder_name: "John Doe".into(),
            account_number: "1234567890".into(),
            bank_name: "Capitec Bank".into(),
            reference: "CMP-20250331-ABC123".into(),
            generated_on: day(2025, 3, 31),
        };
        let doc = compliance::generate(&input).unwrap();
        assert_eq!(
            doc.filename,
            format!("John_Doe_{}_2025-03-31.pdf", kind.as_str())
        );
        let body = text(&doc.bytes);
        assert!(!body.contains("{{"));
        assert!(body.contains("CMP-20250331-ABC123"));
    }

    let input = ComplianceInput {
        kind: ComplianceKind::BankConfirmation,
        holder_name: "John Doe".into(),
        account_number: "1".into(),
        bank_name: "B".into(),
        reference: "R".into(),
        generated_on: day(2025, 3, 31),
    };
    assert!(compliance::render_template("Dear {{customer}}", &input).is_err());
    assert_eq!(
        compliance::render_template("{{holder}} at {{bank}}", &input).unwrap(),
        "John Doe at B"
    );
    assert_eq!(
        "tax-compliance".parse::<ComplianceKind>().unwrap(),
        ComplianceKind::TaxCompliance
    );
    assert!("audit".parse::<ComplianceKind>().is_err());
}

#[test]
fn proof_of_payment_masks_source_account() {
    let input = ProofOfPaymentInput {
        payer_name: "Demo Customer".into(),
        bank_name: "Capitec Bank".into(),
        from_account_number: "9876543210".into(),
        beneficiary: Beneficiary {
            id: "b1".into(),
            user_id: "u1".into(),
            name: "John Doe".into(),
            bank_name: "Capitec Bank".into(),
            account_number: "1234567890".into(),
            swift_code: Some("CABLZAJJ".into()),
            branch_code: Some("470010".into()),
            email: None,
            kyc_verified: true,
            created_at: Utc::now(),
        },
        amount: d("150.00"),
        reference: "PAY-1A2B3C4D".into(),
        paid_at: Utc.with_ymd_and_hms(2025, 3, 2, 10, 30, 0).unwrap(),
        generated_on: day(2025, 3, 2),
    };
    let fmt = money_formatter("ZAR");
    let doc = receipt::generate(&input, &fmt).unwrap();
    assert_eq!(doc.filename, "John_Doe_proof_of_payment_2025-03-02.pdf");
    let body = text(&doc.bytes);
    assert!(body.contains("******3210"));
    assert!(!body.contains("9876543210"));
    assert!(body.contains("R150.00"));

    let dir = tempdir().unwrap();
    let path = doc.save(dir.path()).unwrap();
    assert_eq!(std::fs::read(path).unwrap(), doc.bytes);
}

#[test]
fn xref_offsets_point_at_objects() {
    let mut layout = Layout::new();
    layout.title("Check (with parens)");
    layout.table(
        &[Column::new("Item", MARGIN, 200.0, Align::Left)],
        &[vec!["one".into()]],
    );
    let canvas = layout.finish("footer");
    let bytes = pdf::render(&canvas);
    let body = text(&bytes);
    assert!(body.contains("Check \\(with parens\\)"));

    let start = body.rfind("startxref\n").unwrap() + "startxref\n".len();
    let xref_at: usize = body[start..].lines().next().unwrap().parse().unwrap();
    assert!(body[xref_at..].starts_with("xref"));
    for line in body[xref_at..].lines().skip(3).take_while(|l| l.ends_with(" n ")) {
        let off: usize = line[..10].parse().unwrap();
        assert!(body[off..].split_whitespace().nth(2) == Some("obj"));
    }
}
