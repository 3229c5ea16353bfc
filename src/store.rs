// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::backend::{Backend, Query, RestBackend, SqliteBackend, Table};
use crate::cache::{QueryCache, QueryKey};
use crate::config::{BackendKind, Settings};
use crate::db;
use crate::error::{BankError, Result};

/// Backend handle plus the query cache, scoped to one signed-in user.
pub struct Store {
    backend: Box<dyn Backend>,
    cache: QueryCache,
    user_id: String,
}

impl Store {
    pub fn new(backend: Box<dyn Backend>, user_id: impl Into<String>) -> Self {
        Self {
            backend,
            cache: QueryCache::new(),
            user_id: user_id.into(),
        }
    }

    pub fn open(settings: &Settings) -> Result<Self> {
        let backend: Box<dyn Backend> = match settings.backend.kind {
            BackendKind::Sqlite => {
                let path = match &settings.backend.db_path {
                    Some(p) => p.clone(),
                    None => db::db_path()?,
                };
                Box::new(SqliteBackend::open(&path)?)
            }
            BackendKind::Rest => {
                let url = settings.backend.url.as_deref().ok_or_else(|| {
                    BankError::validation("backend.url", "required for the rest backend")
                })?;
                let key = settings.backend.api_key.as_deref().ok_or_else(|| {
                    BankError::validation("backend.api_key", "required for the rest backend")
                })?;
                Box::new(RestBackend::new(url, key)?)
            }
        };
        Ok(Self::new(backend, settings.user_id.clone()))
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn cache(&self) -> &QueryCache {
        &self.cache
    }

    /// Cached read; a hit never touches the backend.
    pub fn fetch<T: DeserializeOwned>(&mut self, table: Table, query: &Query) -> Result<Vec<T>> {
        let key = QueryKey::new(table, query);
        let rows = if let Some(rows) = self.cache.get(&key) {
            tracing::debug!(%table, scope = %key.scope, "cache hit");
            rows.clone()
        } else {
            tracing::debug!(%table, scope = %key.scope, "cache miss");
            let rows = self.backend.select(table, query)?;
            self.cache.put(key, rows.clone());
            rows
        };
        rows.into_iter()
            .map(|v| serde_json::from_value(v).map_err(BankError::from))
            .collect()
    }

    pub fn fetch_one<T: DeserializeOwned>(
        &mut self,
        table: Table,
        entity: &'static str,
        id: &str,
    ) -> Result<T> {
        let query = Query::new().eq("id", id);
        self.fetch::<T>(table, &query)?
            .into_iter()
            .next()
            .ok_or_else(|| BankError::not_found(entity, id))
    }

    pub fn insert<N: Serialize, T: DeserializeOwned>(&mut self, table: Table, row: &N) -> Result<T> {
        let stored = self.backend.insert(table, serde_json::to_value(row)?)?;
        self.cache.invalidate(table);
        tracing::info!(%table, "row inserted");
        Ok(serde_json::from_value(stored)?)
    }

    pub fn update<T: DeserializeOwned>(
        &mut self,
        table: Table,
        query: &Query,
        patch: Value,
    ) -> Result<Vec<T>> {
        let rows = self.backend.update(table, query, patch)?;
        self.cache.invalidate(table);
        tracing::info!(%table, count = rows.len(), "rows updated");
        rows.into_iter()
            .map(|v| serde_json::from_value(v).map_err(BankError::from))
            .collect()
    }

    pub fn update_one<T: DeserializeOwned>(
        &mut self,
        table: Table,
        entity: &'static str,
        id: &str,
        patch: Value,
    ) -> Result<T> {
        let query = Query::new().eq("id", id);
        self.update::<T>(table, &query, patch)?
            .into_iter()
            .next()
            .ok_or_else(|| BankError::not_found(entity, id))
    }

    pub fn delete(&mut self, table: Table, query: &Query) -> Result<usize> {
        let removed = self.backend.delete(table, query)?;
        self.cache.invalidate(table);
        tracing::info!(%table, removed, "rows deleted");
        Ok(removed)
    }

    pub fn invoke(&self, function: &str, payload: Value) -> Result<Value> {
        self.backend.invoke(function, payload)
    }
}
