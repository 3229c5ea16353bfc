// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_json::json;

use crate::backend::{Query, Table};
use crate::error::{BankError, Result};
use crate::hooks::{accounts, transactions};
use crate::models::{AccountType, JobListing, JobSalarySetup, NewTransaction, Transaction};
use crate::salary;
use crate::store::Store;

#[derive(Serialize)]
struct NewListing<'a> {
    title: &'a str,
    company: &'a str,
    gross_monthly_salary: Decimal,
    currency: &'a str,
    location: &'a str,
}

#[derive(Serialize)]
struct NewSalarySetup<'a> {
    user_id: &'a str,
    job_id: &'a str,
    gross_monthly: Decimal,
    net_monthly: Decimal,
    account_id: &'a str,
    is_active: bool,
}

pub fn list_listings(store: &mut Store) -> Result<Vec<JobListing>> {
    let query = Query::new().order_by("created_at", false);
    store.fetch(Table::JobListings, &query)
}

pub fn get_listing(store: &mut Store, id: &str) -> Result<JobListing> {
    store.fetch_one(Table::JobListings, "job listing", id.trim())
}

const SEED: &[(&str, &str, i64, &str)] = &[
    ("Software Engineer", "Capitec Bank", 65_000, "Stellenbosch"),
    ("Data Analyst", "Discovery", 42_000, "Sandton"),
    ("Product Manager", "Takealot", 78_000, "Cape Town"),
    ("Customer Support Lead", "Vodacom", 28_500, "Midrand"),
];

pub fn ensure_seeded(store: &mut Store, currency: &str) -> Result<Vec<JobListing>> {
    let existing = list_listings(store)?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    for &(title, company, gross, location) in SEED {
        let row = NewListing {
            title,
            company,
            gross_monthly_salary: Decimal::from(gross),
            currency,
            location,
        };
        store.insert::<_, JobListing>(Table::JobListings, &row)?;
    }
    list_listings(store)
}

pub fn list_setups(store: &mut Store) -> Result<Vec<JobSalarySetup>> {
    let query = Query::new()
        .eq("user_id", store.user_id())
        .order_by("created_at", true);
    store.fetch(Table::JobSalarySetups, &query)
}

pub fn get_setup(store: &mut Store, id: &str) -> Result<JobSalarySetup> {
    let id = id.trim();
    list_setups(store)?
        .into_iter()
        .find(|s| s.id == id)
        .ok_or_else(|| BankError::not_found("salary setup", id))
}

/// Dual-salary flow: opens a mock salary account for the job and links it to
/// a new active setup carrying the gross and net monthly figures.
pub fn create_salary_setup(store: &mut Store, job_id: &str) -> Result<JobSalarySetup> {
    let job = get_listing(store, job_id)?;
    let pay = salary::breakdown(job.gross_monthly_salary)?;
    let account = accounts::create(
        store,
        AccountType::Main,
        &format!("{} Salary", job.company),
        &job.currency,
        Decimal::ZERO,
    )?;
    let user_id = store.user_id().to_string();
    let setup: JobSalarySetup = store.insert(
        Table::JobSalarySetups,
        &NewSalarySetup {
            user_id: &user_id,
            job_id: &job.id,
            gross_monthly: pay.gross,
            net_monthly: pay.net,
            account_id: &account.id,
            is_active: true,
        },
    )?;
    tracing::info!(setup = %setup.id, job = %job.title, "salary setup created");
    Ok(setup)
}

pub fn deactivate_setup(store: &mut Store, id: &str) -> Result<JobSalarySetup> {
    let setup = get_setup(store, id)?;
    store.update_one(
        Table::JobSalarySetups,
        "salary setup",
        &setup.id,
        json!({ "is_active": false }),
    )
}

/// Pays one month of net salary into the linked account.
pub fn run_payroll(store: &mut Store, id: &str) -> Result<Transaction> {
    let setup = get_setup(store, id)?;
    if !setup.is_active {
        return Err(BankError::validation(
            "setup",
            format!("salary setup {} is inactive", setup.id),
        ));
    }
    let job = get_listing(store, &setup.job_id)?;
    let tx = transactions::record(
        store,
        &NewTransaction {
            account_id: setup.account_id.clone(),
            name: format!("Salary - {}", job.company),
            amount: setup.net_monthly,
            category: "income".to_string(),
            icon: "briefcase".to_string(),
        },
    )?;
    accounts::adjust_balance(store, &setup.account_id, setup.net_monthly)?;
    Ok(tx)
}
