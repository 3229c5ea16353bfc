// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Named remote functions. Responses are opaque: success or an error.

use rust_decimal::Decimal;
use serde_json::{Value, json};

use crate::error::Result;
use crate::store::Store;

pub const PAYMENT_NOTIFICATION: &str = "send-payment-notification";
pub const CHECKOUT_SESSION: &str = "create-checkout-session";

pub fn send_payment_notification(
    store: &Store,
    to: &str,
    beneficiary_name: &str,
    amount_display: &str,
    reference: &str,
) -> Result<Value> {
    store.invoke(
        PAYMENT_NOTIFICATION,
        json!({
            "to": to,
            "beneficiaryName": beneficiary_name,
            "amount": amount_display,
            "reference": reference,
        }),
    )
}

pub fn create_checkout_session(
    store: &Store,
    amount: Decimal,
    currency: &str,
    description: &str,
) -> Result<Value> {
    store.invoke(
        CHECKOUT_SESSION,
        json!({
            "amount": amount,
            "currency": currency.to_lowercase(),
            "description": description,
            "userId": store.user_id(),
        }),
    )
}
