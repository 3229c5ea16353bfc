// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::db::project_dirs;
use crate::error::Result;

const CONFIG_FILE: &str = "bankdesk.toml";
const ENV_PREFIX: &str = "BANKDESK";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Sqlite,
    Rest,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BackendSettings {
    pub kind: BackendKind,
    /// Project URL of the hosted backend, e.g. https://xyz.example.co
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub db_path: Option<PathBuf>,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            kind: BackendKind::Sqlite,
            url: None,
            api_key: None,
            db_path: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExplorerSettings {
    pub url: String,
    pub api_key: Option<String>,
}

impl Default for ExplorerSettings {
    fn default() -> Self {
        Self {
            url: "https://api.etherscan.io/api".to_string(),
            api_key: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub user_id: String,
    pub holder_name: String,
    pub bank_name: String,
    pub base_currency: String,
    pub output_dir: PathBuf,
    pub log_level: String,
    pub backend: BackendSettings,
    pub explorer: ExplorerSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            user_id: "demo-user".to_string(),
            holder_name: "Demo Customer".to_string(),
            bank_name: "Capitec Bank".to_string(),
            base_currency: "ZAR".to_string(),
            output_dir: PathBuf::from("documents"),
            log_level: "info".to_string(),
            backend: BackendSettings::default(),
            explorer: ExplorerSettings::default(),
        }
    }
}

/// Defaults, then the config file (explicit path or the platform config
/// dir), then `BANKDESK_*` environment variables. Nested keys use `__`,
/// e.g. `BANKDESK_BACKEND__KIND=rest`.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut builder = config::Config::builder();
    match explicit {
        Some(path) => {
            builder = builder.add_source(config::File::with_name(&path.to_string_lossy()));
        }
        None => {
            if let Ok(dirs) = project_dirs() {
                let path = dirs.config_dir().join(CONFIG_FILE);
                builder = builder
                    .add_source(config::File::with_name(&path.to_string_lossy()).required(false));
            }
        }
    }
    builder = builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__"),
    );
    let mut settings: Settings = builder.build()?.try_deserialize()?;
    settings.base_currency = settings.base_currency.trim().to_uppercase();
    Ok(settings)
}
