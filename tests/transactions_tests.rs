// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::backend::SqliteBackend;
use bankdesk::error::BankError;
use bankdesk::hooks::{accounts, transactions as tx_hooks};
use bankdesk::models::{AccountType, NewTransaction};
use bankdesk::store::Store;
use bankdesk::{cli, commands::transactions};
use rust_decimal::Decimal;
use tempfile::tempdir;

fn setup() -> (Store, String, String) {
    let mut store = Store::new(Box::new(SqliteBackend::open_in_memory().unwrap()), "u1");
    let a1 = accounts::create(&mut store, AccountType::Main, "A1", "ZAR", Decimal::ZERO).unwrap();
    let a2 = accounts::create(&mut store, AccountType::Savings, "A2", "USD", Decimal::ZERO).unwrap();
    for (acct, n) in [(&a1, 3), (&a2, 2)] {
        for i in 0..n {
            tx_hooks::record(
                &mut store,
                &NewTransaction {
                    account_id: acct.id.clone(),
                    name: format!("P{}", i),
                    amount: Decimal::from(-10),
                    category: "misc".into(),
                    icon: "dot".into(),
                },
            )
            .unwrap();
        }
    }
    (store, a1.account_number, a2.account_number)
}

#[test]
fn list_limit_respected() {
    let (mut store, _, _) = setup();
    let matches = cli::build_cli().get_matches_from(["bankdesk", "tx", "list", "--limit", "2"]);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        if let Some(("list", sub)) = tx_m.subcommand() {
            let rows = transactions::query_rows(&mut store, sub).unwrap();
            assert_eq!(rows.len(), 2);
        } else {
            panic!("no list subcommand");
        }
    } else {
        panic!("no tx subcommand");
    }
}

#[test]
fn list_filters_by_account_number() {
    let (mut store, _, savings) = setup();
    let matches =
        cli::build_cli().get_matches_from(["bankdesk", "tx", "list", "--account", &savings]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", sub)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    let rows = transactions::query_rows(&mut store, sub).unwrap();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.account == "A2" && r.currency == "USD"));
}

#[test]
fn unknown_account_number_is_an_error() {
    let (mut store, _, _) = setup();
    let matches =
        cli::build_cli().get_matches_from(["bankdesk", "tx", "list", "--account", "000"]);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", sub)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    assert!(transactions::query_rows(&mut store, sub).is_err());
}

#[test]
fn reads_are_scoped_to_the_owning_user() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bank.db");
    let mut mine = Store::new(Box::new(SqliteBackend::open(&path).unwrap()), "u1");
    let acct = accounts::create(&mut mine, AccountType::Main, "A1", "ZAR", Decimal::ZERO).unwrap();
    let tx = tx_hooks::record(
        &mut mine,
        &NewTransaction {
            account_id: acct.id.clone(),
            name: "Rent".into(),
            amount: Decimal::from(-500),
            category: "housing".into(),
            icon: "home".into(),
        },
    )
    .unwrap();
    assert_eq!(tx_hooks::get(&mut mine, &tx.id).unwrap().name, "Rent");

    let mut other = Store::new(Box::new(SqliteBackend::open(&path).unwrap()), "u2");
    assert!(matches!(
        tx_hooks::get(&mut other, &tx.id),
        Err(BankError::NotFound { entity: "transaction", .. })
    ));
    assert!(tx_hooks::list_for_account(&mut other, &acct.id).is_err());
    assert!(tx_hooks::list_for_user(&mut other).unwrap().is_empty());
}
