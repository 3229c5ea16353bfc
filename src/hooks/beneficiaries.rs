// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use serde::Serialize;
use serde_json::json;

use crate::backend::{Query, Table};
use crate::error::{BankError, Result};
use crate::models::{Beneficiary, BeneficiaryForm};
use crate::store::Store;
use crate::validate;

#[derive(Serialize)]
struct NewBeneficiary<'a> {
    user_id: &'a str,
    name: &'a str,
    bank_name: &'a str,
    account_number: &'a str,
    swift_code: Option<&'a str>,
    branch_code: Option<&'a str>,
    email: Option<&'a str>,
    kyc_verified: bool,
}

pub fn list(store: &mut Store) -> Result<Vec<Beneficiary>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", true);
    store.fetch(Table::Beneficiaries, &query)
}

pub fn get(store: &mut Store, id: &str) -> Result<Beneficiary> {
    list(store)?
        .into_iter()
        .find(|b| b.id == id)
        .ok_or_else(|| BankError::not_found("beneficiary", id))
}

/// Whatever the form says, the stored row is marked KYC-verified. No
/// verification happens anywhere.
pub fn create(store: &mut Store, form: &BeneficiaryForm) -> Result<Beneficiary> {
    let form = validate::beneficiary(form)?;
    let user_id = store.user_id().to_string();
    let row = NewBeneficiary {
        user_id: &user_id,
        name: &form.name,
        bank_name: &form.bank_name,
        account_number: &form.account_number,
        swift_code: form.swift_code.as_deref(),
        branch_code: form.branch_code.as_deref(),
        email: form.email.as_deref(),
        kyc_verified: true,
    };
    let created: Beneficiary = store.insert(Table::Beneficiaries, &row)?;
    tracing::info!(id = %created.id, name = %created.name, "beneficiary added");
    Ok(created)
}

/// Replaces the editable fields; `kyc_verified` is left as stored.
pub fn update(store: &mut Store, id: &str, form: &BeneficiaryForm) -> Result<Beneficiary> {
    let form = validate::beneficiary(form)?;
    let query = Query::new().eq("id", id).eq("user_id", store.user_id());
    let patch = json!({
        "name": form.name,
        "bank_name": form.bank_name,
        "account_number": form.account_number,
        "swift_code": form.swift_code,
        "branch_code": form.branch_code,
        "email": form.email,
    });
    store
        .update::<Beneficiary>(Table::Beneficiaries, &query, patch)?
        .into_iter()
        .next()
        .ok_or_else(|| BankError::not_found("beneficiary", id))
}

pub fn delete(store: &mut Store, id: &str) -> Result<()> {
    let query = Query::new().eq("id", id).eq("user_id", store.user_id());
    if store.delete(Table::Beneficiaries, &query)? == 0 {
        return Err(BankError::not_found("beneficiary", id));
    }
    Ok(())
}
