// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod accounts;
pub mod transactions;
pub mod beneficiaries;
pub mod payments;
pub mod fx;
pub mod reports;
pub mod treasury;
pub mod jobs;
pub mod documents;
pub mod crypto;
pub mod exporter;
pub mod doctor;
