// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Url;
use reqwest::blocking::{Client, RequestBuilder, Response};
use serde_json::Value;

use super::{Backend, Query, Table, render_value};
use crate::error::{BankError, Result};
use crate::utils::http_client;

/// PostgREST-style client for the hosted tables and edge functions.
pub struct RestBackend {
    base_url: Url,
    api_key: String,
    http: Client,
}

impl RestBackend {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self> {
        let mut normalized = base_url.trim().to_string();
        if !normalized.ends_with('/') {
            normalized.push('/');
        }
        let base_url = Url::parse(&normalized).map_err(|err| {
            BankError::validation("backend.url", format!("'{}': {}", base_url, err))
        })?;
        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            http: http_client()?,
        })
    }

    pub fn table_url(&self, table: Table, query: &Query) -> Result<Url> {
        let mut url = self
            .base_url
            .join(&format!("rest/v1/{}", table.as_str()))
            .map_err(|err| BankError::validation("backend.url", err.to_string()))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (col, v) in &query.filters {
                pairs.append_pair(col, &format!("eq.{}", render_value(v)));
            }
            if let Some(o) = &query.order {
                let dir = if o.descending { "desc" } else { "asc" };
                pairs.append_pair("order", &format!("{}.{}", o.column, dir));
            }
        }
        if url.query() == Some("") {
            url.set_query(None);
        }
        Ok(url)
    }

    pub fn function_url(&self, function: &str) -> Result<Url> {
        self.base_url
            .join(&format!("functions/v1/{}", function))
            .map_err(|err| BankError::validation("backend.url", err.to_string()))
    }

    fn authed(&self, req: RequestBuilder) -> RequestBuilder {
        req.header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=representation")
    }

    fn rows(&self, res: Response) -> Result<Vec<Value>> {
        let res = check(res)?;
        let text = res.text()?;
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }
        match serde_json::from_str::<Value>(&text)? {
            Value::Array(items) => Ok(items),
            other => Ok(vec![other]),
        }
    }
}

fn check(res: Response) -> Result<Response> {
    let status = res.status();
    if status.is_success() {
        return Ok(res);
    }
    let body = res.text().unwrap_or_default();
    let message = serde_json::from_str::<Value>(&body)
        .ok()
        .and_then(|v| {
            v.get("message")
                .or_else(|| v.get("error"))
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .unwrap_or_else(|| {
            if body.is_empty() {
                "unknown error".to_string()
            } else {
                body
            }
        });
    Err(BankError::Backend {
        status: status.as_u16(),
        message,
    })
}

impl Backend for RestBackend {
    fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>> {
        let url = self.table_url(table, query)?;
        tracing::debug!(%url, "select");
        let res = self.authed(self.http.get(url)).send()?;
        self.rows(res)
    }

    fn insert(&self, table: Table, row: Value) -> Result<Value> {
        let url = self.table_url(table, &Query::new())?;
        tracing::debug!(%url, "insert");
        let res = self.authed(self.http.post(url)).json(&row).send()?;
        self.rows(res)?.into_iter().next().ok_or(BankError::Backend {
            status: 500,
            message: format!("insert into {} returned no row", table),
        })
    }

    fn update(&self, table: Table, query: &Query, patch: Value) -> Result<Vec<Value>> {
        let url = self.table_url(table, query)?;
        tracing::debug!(%url, "update");
        let res = self.authed(self.http.patch(url)).json(&patch).send()?;
        self.rows(res)
    }

    fn delete(&self, table: Table, query: &Query) -> Result<usize> {
        let url = self.table_url(table, query)?;
        tracing::debug!(%url, "delete");
        let res = self.authed(self.http.delete(url)).send()?;
        Ok(self.rows(res)?.len())
    }

    fn invoke(&self, function: &str, payload: Value) -> Result<Value> {
        let url = self.function_url(function)?;
        tracing::debug!(%url, "invoke");
        let res = check(self.authed(self.http.post(url)).json(&payload).send()?)?;
        let text = res.text()?;
        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}
