// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde_json::Value;
use std::collections::HashMap;

use crate::backend::{Query, Table};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryKey {
    pub table: Table,
    pub scope: String,
}

impl QueryKey {
    pub fn new(table: Table, query: &Query) -> Self {
        Self {
            table,
            scope: query.describe(),
        }
    }
}

/// Last fetched rows per query. Invalidation is per table: a write to
/// `transactions` drops every cached transactions query regardless of scope.
#[derive(Debug, Default)]
pub struct QueryCache {
    entries: HashMap<QueryKey, Vec<Value>>,
    hits: u64,
    misses: u64,
}

impl QueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&mut self, key: &QueryKey) -> Option<&Vec<Value>> {
        match self.entries.get(key) {
            Some(rows) => {
                self.hits += 1;
                Some(rows)
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub fn put(&mut self, key: QueryKey, rows: Vec<Value>) {
        self.entries.insert(key, rows);
    }

    pub fn invalidate(&mut self, table: Table) -> usize {
        let before = self.entries.len();
        self.entries.retain(|k, _| k.table != table);
        before - self.entries.len()
    }

    pub fn contains(&self, key: &QueryKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }
}
