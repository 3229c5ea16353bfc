// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! One module per backend table: a cached read scoped to the current user
//! plus the mutations the app performs on it. Every mutation goes through
//! [`crate::store::Store`], which drops the table's cached queries on success.

pub mod accounts;
pub mod beneficiaries;
pub mod documents;
pub mod jobs;
pub mod transactions;
pub mod treasury;
pub mod wallets;
