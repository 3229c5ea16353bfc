// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::backend::SqliteBackend;
use bankdesk::hooks::{accounts, transactions};
use bankdesk::models::{AccountType, NewTransaction};
use bankdesk::store::Store;
use bankdesk::{cli, commands::exporter};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn base_store() -> Store {
    let mut store = Store::new(Box::new(SqliteBackend::open_in_memory().unwrap()), "u1");
    let acct = accounts::create(
        &mut store,
        AccountType::Main,
        "Everyday Account",
        "ZAR",
        Decimal::ZERO,
    )
    .unwrap();
    transactions::record(
        &mut store,
        &NewTransaction {
            account_id: acct.id,
            name: "Corner Shop".into(),
            amount: Decimal::new(-1234, 2),
            category: "groceries".into(),
            icon: "shopping-cart".into(),
        },
    )
    .unwrap();
    store
}

fn run_export(store: &mut Store, format: &str, out: &str) -> anyhow::Result<()> {
    let matches = cli::build_cli().get_matches_from([
        "bankdesk",
        "export",
        "transactions",
        "--format",
        format,
        "--out",
        out,
    ]);
    match matches.subcommand() {
        Some(("export", export_m)) => exporter::handle(store, export_m),
        _ => panic!("no export subcommand"),
    }
}

#[test]
fn export_transactions_writes_pretty_json() {
    let mut store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.json");
    run_export(&mut store, "json", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["account"], "Everyday Account");
    assert_eq!(items[0]["name"], "Corner Shop");
    assert_eq!(items[0]["amount"], "-12.34");
    assert_eq!(items[0]["currency"], "ZAR");
    assert_eq!(items[0]["category"], "groceries");
}

#[test]
fn export_transactions_writes_csv_header() {
    let mut store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.csv");
    run_export(&mut store, "CSV", &out_path.to_string_lossy()).unwrap();

    let contents = std::fs::read_to_string(&out_path).unwrap();
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("date,account,name,amount,currency,category,id")
    );
    assert!(lines.next().unwrap().contains("Everyday Account,Corner Shop,-12.34,ZAR"));
}

#[test]
fn export_transactions_rejects_unknown_format() {
    let mut store = base_store();
    let dir = tempdir().unwrap();
    let out_path = dir.path().join("export.unknown");
    assert!(run_export(&mut store, "xml", &out_path.to_string_lossy()).is_err());
    assert!(!out_path.exists());
}
