// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::backend::{Backend, Query, SqliteBackend, Table};
use bankdesk::cache::{QueryCache, QueryKey};
use bankdesk::error::Result;
use bankdesk::hooks::{accounts, beneficiaries};
use bankdesk::models::{AccountType, BeneficiaryForm};
use bankdesk::store::Store;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::cell::Cell;
use std::rc::Rc;

/// Counts selects that reach the backend.
struct Counting {
    inner: SqliteBackend,
    selects: Rc<Cell<usize>>,
}

impl Backend for Counting {
    fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>> {
        self.selects.set(self.selects.get() + 1);
        self.inner.select(table, query)
    }
    fn insert(&self, table: Table, row: Value) -> Result<Value> {
        self.inner.insert(table, row)
    }
    fn update(&self, table: Table, query: &Query, patch: Value) -> Result<Vec<Value>> {
        self.inner.update(table, query, patch)
    }
    fn delete(&self, table: Table, query: &Query) -> Result<usize> {
        self.inner.delete(table, query)
    }
    fn invoke(&self, function: &str, payload: Value) -> Result<Value> {
        self.inner.invoke(function, payload)
    }
}

fn counting_store() -> (Store, Rc<Cell<usize>>) {
    let selects = Rc::new(Cell::new(0));
    let backend = Counting {
        inner: SqliteBackend::open_in_memory().unwrap(),
        selects: selects.clone(),
    };
    (Store::new(Box::new(backend), "u1"), selects)
}

fn form(name: &str) -> BeneficiaryForm {
    BeneficiaryForm {
        name: name.into(),
        bank_name: "Capitec Bank".into(),
        account_number: "1234567890".into(),
        ..Default::default()
    }
}

#[test]
fn repeated_reads_are_served_from_cache() {
    let (mut store, selects) = counting_store();
    accounts::create(&mut store, AccountType::Main, "Main", "ZAR", Decimal::ZERO).unwrap();

    assert_eq!(accounts::list(&mut store).unwrap().len(), 1);
    assert_eq!(accounts::list(&mut store).unwrap().len(), 1);
    assert_eq!(selects.get(), 1);
    assert_eq!(store.cache().hits(), 1);
    assert_eq!(store.cache().misses(), 1);
}

#[test]
fn create_update_delete_invalidate_the_table() {
    let (mut store, selects) = counting_store();

    assert!(beneficiaries::list(&mut store).unwrap().is_empty());
    let b = beneficiaries::create(&mut store, &form("John Doe")).unwrap();
    // stale empty list must not be served after a create
    assert_eq!(beneficiaries::list(&mut store).unwrap().len(), 1);
    assert_eq!(selects.get(), 2);

    beneficiaries::update(&mut store, &b.id, &form("Jane Doe")).unwrap();
    let listed = beneficiaries::list(&mut store).unwrap();
    assert_eq!(listed[0].name, "Jane Doe");
    assert_eq!(selects.get(), 3);

    beneficiaries::delete(&mut store, &b.id).unwrap();
    assert!(beneficiaries::list(&mut store).unwrap().is_empty());
    assert_eq!(selects.get(), 4);
}

#[test]
fn writes_leave_other_tables_cached() {
    let (mut store, selects) = counting_store();
    accounts::list(&mut store).unwrap();
    beneficiaries::create(&mut store, &form("John Doe")).unwrap();
    accounts::list(&mut store).unwrap();
    assert_eq!(selects.get(), 1);
}

#[test]
fn failed_write_keeps_cache() {
    let (mut store, _) = counting_store();
    beneficiaries::list(&mut store).unwrap();
    assert_eq!(store.cache().len(), 1);
    // rejected before reaching the backend
    assert!(beneficiaries::create(&mut store, &form("")).is_err());
    assert_eq!(store.cache().len(), 1);
}

#[test]
fn invalidate_drops_every_scope_of_a_table() {
    let mut cache = QueryCache::new();
    let a = QueryKey::new(Table::Transactions, &Query::new().eq("account_id", "a"));
    let b = QueryKey::new(
        Table::Transactions,
        &Query::new().eq("account_id", "b").order_by("created_at", true),
    );
    let c = QueryKey::new(Table::Accounts, &Query::new());
    cache.put(a.clone(), vec![json!({"id": "1"})]);
    cache.put(b.clone(), Vec::new());
    cache.put(c.clone(), Vec::new());

    assert_eq!(cache.invalidate(Table::Transactions), 2);
    assert!(!cache.contains(&a));
    assert!(!cache.contains(&b));
    assert!(cache.contains(&c));
    assert_eq!(b.scope, "account_id=eq.b&order=created_at.desc");
}
