// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use reqwest::Url;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::config::ExplorerSettings;
use crate::error::{BankError, Result};
use crate::utils::http_client;

const WEI_PER_ETHER: u64 = 1_000_000_000_000_000_000;

#[derive(Debug, Deserialize)]
pub struct ExplorerResponse {
    pub status: String,
    pub message: String,
    pub result: String,
}

/// Etherscan-compatible block explorer. The API key comes from settings.
pub struct Explorer {
    url: Url,
    api_key: String,
    http: reqwest::blocking::Client,
}

impl Explorer {
    pub fn from_settings(settings: &ExplorerSettings) -> Result<Self> {
        let api_key = settings
            .api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| {
                BankError::validation(
                    "explorer.api_key",
                    "not configured; set BANKDESK_EXPLORER__API_KEY",
                )
            })?;
        let url = Url::parse(&settings.url)
            .map_err(|err| BankError::validation("explorer.url", err.to_string()))?;
        Ok(Self {
            url,
            api_key,
            http: http_client()?,
        })
    }

    pub fn balance_url(&self, address: &str) -> Url {
        let mut url = self.url.clone();
        url.query_pairs_mut()
            .append_pair("module", "account")
            .append_pair("action", "balance")
            .append_pair("address", address)
            .append_pair("tag", "latest")
            .append_pair("apikey", &self.api_key);
        url
    }

    /// Balance in ether.
    pub fn eth_balance(&self, address: &str) -> Result<Decimal> {
        let url = self.balance_url(address);
        tracing::debug!(address, "explorer balance lookup");
        let res: ExplorerResponse = self.http.get(url).send()?.error_for_status()?.json()?;
        parse_balance(&res)
    }
}

pub fn parse_balance(res: &ExplorerResponse) -> Result<Decimal> {
    if res.status != "1" {
        return Err(BankError::Backend {
            status: 502,
            message: format!("explorer: {} ({})", res.message, res.result),
        });
    }
    let wei = res
        .result
        .trim()
        .parse::<Decimal>()
        .map_err(|err| BankError::Backend {
            status: 502,
            message: format!("explorer returned '{}': {}", res.result, err),
        })?;
    Ok((wei / Decimal::from(WEI_PER_ETHER)).normalize())
}
