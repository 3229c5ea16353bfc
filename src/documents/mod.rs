// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Fixed-layout PDF documents built from already-fetched records.
//!
//! Generators are pure: they take records plus a money formatter and return
//! a [`GeneratedDocument`]. Writing the bytes to disk is a separate step.

pub mod canvas;
pub mod compliance;
pub mod pdf;
pub mod receipt;
pub mod salary_slip;
pub mod statement;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// Money formatting callback, e.g. [`crate::fx::money_formatter`].
pub type MoneyFmt<'a> = &'a dyn Fn(Decimal) -> String;

#[derive(Debug, Clone)]
pub struct GeneratedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
    pub pages: usize,
}

impl GeneratedDocument {
    pub fn save(&self, dir: &Path) -> Result<PathBuf> {
        fs::create_dir_all(dir)?;
        let path = dir.join(&self.filename);
        fs::write(&path, &self.bytes)?;
        tracing::info!(path = %path.display(), pages = self.pages, "document saved");
        Ok(path)
    }
}

fn sanitize(part: &str) -> String {
    let cleaned: String = part
        .trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect();
    if cleaned.is_empty() {
        "document".to_string()
    } else {
        cleaned
    }
}

/// `{entity}_{kind}_{YYYY-MM-DD}.pdf` with whitespace turned into `_`.
pub fn document_filename(entity: &str, kind: &str, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.pdf",
        sanitize(entity),
        sanitize(kind),
        date.format("%Y-%m-%d")
    )
}
