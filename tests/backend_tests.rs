// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::backend::{Backend, Query, RestBackend, SqliteBackend, Table};
use bankdesk::error::BankError;
use bankdesk::explorer::{ExplorerResponse, parse_balance};
use rust_decimal::Decimal;
use serde_json::json;
use std::str::FromStr;
use tempfile::tempdir;

#[test]
fn sqlite_crud_roundtrip() {
    let db = SqliteBackend::open_in_memory().unwrap();
    let a = db
        .insert(Table::WalletAddresses, json!({"user_id": "u1", "symbol": "ETH"}))
        .unwrap();
    let id = a["id"].as_str().unwrap().to_string();
    assert!(a["created_at"].is_string());

    db.insert(Table::WalletAddresses, json!({"user_id": "u2", "symbol": "BTC"}))
        .unwrap();
    let mine = db
        .select(Table::WalletAddresses, &Query::new().eq("user_id", "u1"))
        .unwrap();
    assert_eq!(mine.len(), 1);

    let updated = db
        .update(
            Table::WalletAddresses,
            &Query::new().eq("id", id.as_str()),
            json!({"label": "cold", "id": "hijack"}),
        )
        .unwrap();
    assert_eq!(updated[0]["label"], "cold");
    assert_eq!(updated[0]["id"], id.as_str());

    let removed = db
        .delete(Table::WalletAddresses, &Query::new().eq("id", id.as_str()))
        .unwrap();
    assert_eq!(removed, 1);
    assert_eq!(db.select(Table::WalletAddresses, &Query::new()).unwrap().len(), 1);
}

#[test]
fn sqlite_rejects_duplicate_ids_and_sorts() {
    let db = SqliteBackend::open_in_memory().unwrap();
    for (id, code) in [("1", "ZAR"), ("2", "EUR"), ("3", "USD")] {
        db.insert(
            Table::TreasuryHoldings,
            json!({"id": id, "currency_code": code}),
        )
        .unwrap();
    }
    match db.insert(Table::TreasuryHoldings, json!({"id": "1"})) {
        Err(BankError::Backend { status, .. }) => assert_eq!(status, 409),
        other => panic!("expected conflict, got {:?}", other),
    }
    let sorted = db
        .select(
            Table::TreasuryHoldings,
            &Query::new().order_by("currency_code", false),
        )
        .unwrap();
    let codes: Vec<&str> = sorted
        .iter()
        .map(|r| r["currency_code"].as_str().unwrap())
        .collect();
    assert_eq!(codes, ["EUR", "USD", "ZAR"]);
}

#[test]
fn sqlite_persists_across_reopen_and_queues_functions() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.db");
    {
        let db = SqliteBackend::open(&path).unwrap();
        db.insert(Table::Documents, json!({"kind": "statement"})).unwrap();
        let res = db.invoke("send-payment-notification", json!({"to": "a@b.co"})).unwrap();
        assert_eq!(res["status"], "queued");
    }
    let db = SqliteBackend::open(&path).unwrap();
    assert_eq!(db.select(Table::Documents, &Query::new()).unwrap().len(), 1);
    let queued: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM function_invocations", [], |r| r.get(0))
        .unwrap();
    assert_eq!(queued, 1);
}

#[test]
fn rest_urls_use_postgrest_filters() {
    let rest = RestBackend::new("https://abc.supabase.co", "anon").unwrap();
    let q = Query::new()
        .eq("user_id", "u1")
        .eq("is_active", true)
        .order_by("created_at", true);
    let url = rest.table_url(Table::JobSalarySetups, &q).unwrap();
    assert_eq!(
        url.as_str(),
        "https://abc.supabase.co/rest/v1/job_salary_setups?user_id=eq.u1&is_active=eq.true&order=created_at.desc"
    );
    let bare = rest.table_url(Table::Accounts, &Query::new()).unwrap();
    assert_eq!(bare.as_str(), "https://abc.supabase.co/rest/v1/accounts");
    assert_eq!(
        rest.function_url("create-checkout-session").unwrap().as_str(),
        "https://abc.supabase.co/functions/v1/create-checkout-session"
    );
}

#[test]
fn explorer_balance_is_normalized_to_ether() {
    let ok = ExplorerResponse {
        status: "1".into(),
        message: "OK".into(),
        result: "1500000000000000000".into(),
    };
    assert_eq!(parse_balance(&ok).unwrap(), Decimal::from_str("1.5").unwrap());

    let err = ExplorerResponse {
        status: "0".into(),
        message: "NOTOK".into(),
        result: "Invalid API Key".into(),
    };
    assert!(matches!(
        parse_balance(&err),
        Err(BankError::Backend { status: 502, .. })
    ));
}
