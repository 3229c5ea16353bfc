// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::Settings;
use crate::fx::format_money;
use crate::hooks::jobs;
use crate::store::Store;
use crate::utils::{arg, json_flags, maybe_print_json, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Store, settings: &Settings, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("list", sub)) => {
            let (json_flag, jsonl_flag) = json_flags(sub);
            let listings = jobs::ensure_seeded(store, &settings.base_currency)?;
            if !maybe_print_json(json_flag, jsonl_flag, &listings)? {
                let rows = listings
                    .into_iter()
                    .map(|j| {
                        vec![
                            j.title,
                            j.company,
                            j.location,
                            format_money(j.gross_monthly_salary, &j.currency),
                            j.id,
                        ]
                    })
                    .collect();
                println!(
                    "{}",
                    pretty_table(&["Title", "Company", "Location", "Gross / month", "ID"], rows)
                );
            }
        }
        Some(("setup", sub)) => {
            let setup = jobs::create_salary_setup(store, arg(sub, "job")?)?;
            println!(
                "Salary setup {} created: gross {} net {}",
                setup.id, setup.gross_monthly, setup.net_monthly
            );
        }
        Some(("setups", sub)) => {
            let (json_flag, jsonl_flag) = json_flags(sub);
            let setups = jobs::list_setups(store)?;
            if !maybe_print_json(json_flag, jsonl_flag, &setups)? {
                let rows = setups
                    .into_iter()
                    .map(|s| {
                        vec![
                            s.id,
                            s.gross_monthly.to_string(),
                            s.net_monthly.to_string(),
                            if s.is_active { "active" } else { "inactive" }.to_string(),
                        ]
                    })
                    .collect();
                println!("{}", pretty_table(&["ID", "Gross", "Net", "Status"], rows));
            }
        }
        Some(("deactivate", sub)) => {
            let s = jobs::deactivate_setup(store, arg(sub, "id")?)?;
            println!("Salary setup {} deactivated", s.id);
        }
        Some(("payroll", sub)) => {
            let tx = jobs::run_payroll(store, arg(sub, "id")?)?;
            println!("Paid {} ({})", tx.amount, tx.name);
        }
        _ => {}
    }
    Ok(())
}
