// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::{BankError, Result};
use crate::tax::monthly_paye;

/// 1% of gross, capped.
const UIF_CAP: (i64, u32) = (17712, 2);

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SalaryBreakdown {
    pub gross: Decimal,
    pub paye: Decimal,
    pub uif: Decimal,
    pub net: Decimal,
}

pub fn breakdown(gross_monthly: Decimal) -> Result<SalaryBreakdown> {
    if gross_monthly.is_sign_negative() {
        return Err(BankError::validation(
            "gross_monthly",
            "salary cannot be negative",
        ));
    }
    if gross_monthly.checked_mul(Decimal::from(12)).is_none() {
        return Err(BankError::validation("gross_monthly", "out of range"));
    }
    let paye = monthly_paye(gross_monthly);
    let uif = (gross_monthly * Decimal::new(1, 2))
        .round_dp(2)
        .min(Decimal::new(UIF_CAP.0, UIF_CAP.1));
    Ok(SalaryBreakdown {
        gross: gross_monthly,
        paye,
        uif,
        net: gross_monthly - paye - uif,
    })
}

/// Split `net` between a primary and secondary account. The two parts always
/// sum to `net` exactly; rounding lands on the secondary share.
pub fn split(net: Decimal, primary_percent: Decimal) -> Result<(Decimal, Decimal)> {
    if primary_percent < Decimal::ZERO || primary_percent > Decimal::ONE_HUNDRED {
        return Err(BankError::validation(
            "primary_percent",
            format!("{} is outside 0..=100", primary_percent),
        ));
    }
    let primary = (net * primary_percent / Decimal::ONE_HUNDRED).round_dp(2);
    Ok((primary, net - primary))
}
