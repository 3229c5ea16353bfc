// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, BankError>;

#[derive(Debug, Error)]
pub enum BankError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    #[error("backend rejected request ({status}): {message}")]
    Backend { status: u16, message: String },
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },
    #[error("unknown currency '{0}'")]
    UnknownCurrency(String),
    #[error("invalid {field}: {message}")]
    Validation { field: &'static str, message: String },
    #[error("document generation failed: {0}")]
    Document(String),
}

impl BankError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        BankError::Validation {
            field,
            message: message.into(),
        }
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        BankError::NotFound {
            entity,
            id: id.into(),
        }
    }
}
