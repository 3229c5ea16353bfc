// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod backend;
pub mod cache;
pub mod cli;
pub mod commands;
pub mod config;
pub mod db;
pub mod documents;
pub mod error;
pub mod explorer;
pub mod functions;
pub mod fx;
pub mod hooks;
pub mod models;
pub mod payments;
pub mod salary;
pub mod store;
pub mod tax;
pub mod utils;
pub mod validate;
