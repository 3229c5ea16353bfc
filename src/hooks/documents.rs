// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;

use crate::backend::{Query, Table};
use crate::error::Result;
use crate::models::DocumentRecord;
use crate::store::Store;

#[derive(Serialize)]
struct NewDocument<'a> {
    user_id: &'a str,
    kind: &'a str,
    filename: &'a str,
}

pub fn list(store: &mut Store) -> Result<Vec<DocumentRecord>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", true);
    store.fetch(Table::Documents, &query)
}

pub fn record(store: &mut Store, kind: &str, filename: &str) -> Result<DocumentRecord> {
    let user_id = store.user_id().to_string();
    store.insert(
        Table::Documents,
        &NewDocument {
            user_id: &user_id,
            kind,
            filename,
        },
    )
}
