// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::{Connection, params};
use serde_json::{Value, json};
use std::path::Path;

use super::{Backend, Query, Table, now_stamp};
use crate::db;
use crate::error::{BankError, Result};

/// Local stand-in for the hosted tables, backed by a single SQLite file.
pub struct SqliteBackend {
    conn: Connection,
}

impl SqliteBackend {
    pub fn open(path: &Path) -> Result<Self> {
        tracing::debug!(path = %path.display(), "opening local backend");
        Ok(Self {
            conn: db::open_or_init(path)?,
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        Ok(Self {
            conn: db::open_in_memory()?,
        })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    fn load(&self, table: Table) -> Result<Vec<(i64, Value)>> {
        let mut stmt = self
            .conn
            .prepare("SELECT seq, body FROM records WHERE tbl=?1 ORDER BY seq")?;
        let rows = stmt.query_map(params![table.as_str()], |r| {
            Ok((r.get::<_, i64>(0)?, r.get::<_, String>(1)?))
        })?;
        let mut out = Vec::new();
        for row in rows {
            let (seq, body) = row?;
            out.push((seq, serde_json::from_str(&body)?));
        }
        Ok(out)
    }
}

impl Backend for SqliteBackend {
    fn select(&self, table: Table, query: &Query) -> Result<Vec<Value>> {
        let mut rows: Vec<Value> = self
            .load(table)?
            .into_iter()
            .map(|(_, v)| v)
            .filter(|v| query.matches(v))
            .collect();
        query.sort(&mut rows);
        Ok(rows)
    }

    fn insert(&self, table: Table, row: Value) -> Result<Value> {
        let Value::Object(mut obj) = row else {
            return Err(BankError::Backend {
                status: 400,
                message: format!("insert into {} expects a JSON object", table),
            });
        };
        if !obj.get("id").is_some_and(|v| v.is_string()) {
            obj.insert("id".into(), Value::String(uuid::Uuid::new_v4().to_string()));
        }
        if !obj.contains_key("created_at") {
            obj.insert("created_at".into(), Value::String(now_stamp()));
        }
        let id = obj
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let row = Value::Object(obj);
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO records(tbl, id, body) VALUES (?1, ?2, ?3)",
            params![table.as_str(), id, serde_json::to_string(&row)?],
        )?;
        if inserted == 0 {
            return Err(BankError::Backend {
                status: 409,
                message: format!("duplicate key '{}' in {}", id, table),
            });
        }
        Ok(row)
    }

    fn update(&self, table: Table, query: &Query, patch: Value) -> Result<Vec<Value>> {
        let Value::Object(patch) = patch else {
            return Err(BankError::Backend {
                status: 400,
                message: format!("update of {} expects a JSON object", table),
            });
        };
        let mut updated = Vec::new();
        for (seq, mut row) in self.load(table)? {
            if !query.matches(&row) {
                continue;
            }
            if let Value::Object(obj) = &mut row {
                for (k, v) in &patch {
                    if k != "id" {
                        obj.insert(k.clone(), v.clone());
                    }
                }
            }
            self.conn.execute(
                "UPDATE records SET body=?1 WHERE seq=?2",
                params![serde_json::to_string(&row)?, seq],
            )?;
            updated.push(row);
        }
        query.sort(&mut updated);
        Ok(updated)
    }

    fn delete(&self, table: Table, query: &Query) -> Result<usize> {
        let mut removed = 0;
        for (seq, row) in self.load(table)? {
            if query.matches(&row) {
                removed += self
                    .conn
                    .execute("DELETE FROM records WHERE seq=?1", params![seq])?;
            }
        }
        Ok(removed)
    }

    fn invoke(&self, function: &str, payload: Value) -> Result<Value> {
        self.conn.execute(
            "INSERT INTO function_invocations(name, payload) VALUES (?1, ?2)",
            params![function, serde_json::to_string(&payload)?],
        )?;
        tracing::info!(function, "remote function queued locally");
        Ok(json!({ "status": "queued", "function": function }))
    }
}
