// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Table-level access to the hosted backend.
//!
//! Every row travels as a JSON object. Filters are equality predicates and
//! ordering is by a single column, which is all the app ever asks for.

pub mod rest;
pub mod sqlite;

use chrono::{SecondsFormat, Utc};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;

use crate::error::Result;

pub use rest::RestBackend;
pub use sqlite::SqliteBackend;

/// Timestamp format shared by every stored row; sorts lexically.
pub(crate) fn now_stamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Accounts,
    Transactions,
    Beneficiaries,
    TreasuryHoldings,
    TreasuryTransactions,
    JobListings,
    JobSalarySetups,
    Documents,
    WalletAddresses,
}

impl Table {
    pub fn as_str(&self) -> &'static str {
        match self {
            Table::Accounts => "accounts",
            Table::Transactions => "transactions",
            Table::Beneficiaries => "beneficiaries",
            Table::TreasuryHoldings => "treasury_holdings",
            Table::TreasuryTransactions => "treasury_transactions",
            Table::JobListings => "job_listings",
            Table::JobSalarySetups => "job_salary_setups",
            Table::Documents => "documents",
            Table::WalletAddresses => "wallet_addresses",
        }
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub column: String,
    pub descending: bool,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub filters: Vec<(String, Value)>,
    pub order: Option<Order>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, column: &str, value: impl Into<Value>) -> Self {
        self.filters.push((column.to_string(), value.into()));
        self
    }

    pub fn order_by(mut self, column: &str, descending: bool) -> Self {
        self.order = Some(Order {
            column: column.to_string(),
            descending,
        });
        self
    }

    pub fn matches(&self, row: &Value) -> bool {
        self.filters
            .iter()
            .all(|(col, want)| row.get(col).is_some_and(|have| have == want))
    }

    /// Stable sort, so rows with equal keys keep insertion order.
    pub fn sort(&self, rows: &mut [Value]) {
        if let Some(order) = &self.order {
            rows.sort_by(|a, b| {
                let ord = compare_values(a.get(&order.column), b.get(&order.column));
                if order.descending { ord.reverse() } else { ord }
            });
        }
    }

    /// Canonical text form, used as part of cache keys.
    pub fn describe(&self) -> String {
        let mut parts: Vec<String> = self
            .filters
            .iter()
            .map(|(c, v)| format!("{}=eq.{}", c, render_value(v)))
            .collect();
        if let Some(o) = &self.order {
            let dir = if o.descending { "desc" } else { "asc" };
            parts.push(format!("order={}.{}", o.column, dir));
        }
        parts.join("&")
    }
}

/// Filter values are sent bare (`eq.abc`, not `eq."abc"`).
pub fn render_value(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::String(x)), Some(Value::String(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => {
            let (x, y) = (x.as_f64().unwrap_or(0.0), y.as_f64().unwrap_or(0.0));
            x.partial_cmp(&y).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (None | Some(Value::Null), None | Some(Value::Null)) => Ordering::Equal,
        (None | Some(Value::Null), _) => Ordering::Greater,
        (_, None | Some(Value::Null)) => Ordering::Less,
        _ => Ordering::Equal,
    }
}

/// Generic CRUD + remote function surface of the backend-as-a-service.
pub trait Backend {
    fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>>;
    /// Returns the stored row, including backend-assigned `id` and `created_at`.
    fn insert(&self, table: Table, row: Value) -> Result<Value>;
    /// Merges `patch` into every matching row and returns the updated rows.
    fn update(&self, table: Table, query: &Query, patch: Value) -> Result<Vec<Value>>;
    fn delete(&self, table: Table, query: &Query) -> Result<usize>;
    fn invoke(&self, function: &str, payload: Value) -> Result<Value>;
}
