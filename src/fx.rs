// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Static USD-anchored exchange rates and money formatting.

use rust_decimal::Decimal;

use crate::error::{BankError, Result};

struct Rate {
    code: &'static str,
    name: &'static str,
    symbol: &'static str,
    /// Units of this currency per 1 USD, as (mantissa, scale).
    per_usd: (i64, u32),
    decimals: u32,
}

const RATES: &[Rate] = &[
    Rate { code: "USD", name: "US Dollar", symbol: "$", per_usd: (1, 0), decimals: 2 },
    Rate { code: "EUR", name: "Euro", symbol: "€", per_usd: (92, 2), decimals: 2 },
    Rate { code: "GBP", name: "British Pound", symbol: "£", per_usd: (79, 2), decimals: 2 },
    Rate { code: "ZAR", name: "South African Rand", symbol: "R", per_usd: (1850, 2), decimals: 2 },
    Rate { code: "JPY", name: "Japanese Yen", symbol: "¥", per_usd: (14950, 2), decimals: 0 },
    Rate { code: "CAD", name: "Canadian Dollar", symbol: "CA$", per_usd: (136, 2), decimals: 2 },
    Rate { code: "AUD", name: "Australian Dollar", symbol: "A$", per_usd: (152, 2), decimals: 2 },
    Rate { code: "CHF", name: "Swiss Franc", symbol: "CHF ", per_usd: (88, 2), decimals: 2 },
    Rate { code: "CNY", name: "Chinese Yuan", symbol: "CN¥", per_usd: (724, 2), decimals: 2 },
    Rate { code: "INR", name: "Indian Rupee", symbol: "INR ", per_usd: (8310, 2), decimals: 2 },
    Rate { code: "NGN", name: "Nigerian Naira", symbol: "NGN ", per_usd: (1550, 0), decimals: 2 },
    Rate { code: "KES", name: "Kenyan Shilling", symbol: "KSh", per_usd: (12950, 2), decimals: 2 },
    Rate { code: "BWP", name: "Botswana Pula", symbol: "P", per_usd: (1360, 2), decimals: 2 },
];

fn lookup(code: &str) -> Option<&'static Rate> {
    let code = code.trim();
    RATES.iter().find(|r| r.code.eq_ignore_ascii_case(code))
}

pub fn supported_currencies() -> Vec<&'static str> {
    RATES.iter().map(|r| r.code).collect()
}

pub fn currency_name(code: &str) -> Option<&'static str> {
    lookup(code).map(|r| r.name)
}

/// Units of `code` per 1 USD.
pub fn rate(code: &str) -> Result<Decimal> {
    lookup(code)
        .map(|r| Decimal::new(r.per_usd.0, r.per_usd.1))
        .ok_or_else(|| BankError::UnknownCurrency(code.trim().to_uppercase()))
}

/// Re-express `amount` from one currency in another via USD.
pub fn convert(amount: Decimal, from: &str, to: &str) -> Result<Decimal> {
    if from.trim().eq_ignore_ascii_case(to.trim()) {
        return Ok(amount);
    }
    let from_rate = rate(from)?;
    let to_rate = rate(to)?;
    amount
        .checked_div(from_rate)
        .and_then(|usd| usd.checked_mul(to_rate))
        .ok_or_else(|| BankError::validation("amount", "out of range"))
}

/// Cross rate: units of `to` per 1 unit of `from`.
pub fn cross_rate(from: &str, to: &str) -> Result<Decimal> {
    convert(Decimal::ONE, from, to)
}

/// `R12,345.67`, `-$5.00`, `¥1,500`. Unknown codes fall back to `XYZ 1.00`.
pub fn format_money(amount: Decimal, code: &str) -> String {
    let (symbol, decimals) = match lookup(code) {
        Some(r) => (r.symbol.to_string(), r.decimals),
        None => (format!("{} ", code.trim().to_uppercase()), 2),
    };
    let rounded = amount.round_dp(decimals);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let plain = format!("{:.*}", decimals as usize, rounded.abs());
    let (int_part, frac_part) = match plain.split_once('.') {
        Some((i, f)) => (i.to_string(), Some(f.to_string())),
        None => (plain, None),
    };
    let mut grouped = String::new();
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    match frac_part {
        Some(f) => format!("{}{}{}.{}", sign, symbol, grouped, f),
        None => format!("{}{}{}", sign, symbol, grouped),
    }
}

/// Formatting callback handed to document generators.
pub fn money_formatter(code: &str) -> impl Fn(Decimal) -> String + use<> {
    let code = code.to_string();
    move |amount| format_money(amount, &code)
}
