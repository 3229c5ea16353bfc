// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

use bankdesk::{cli, commands, config, store::Store};

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("bankdesk={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(matches: &clap::ArgMatches) -> Result<()> {
    let config_path = matches.get_one::<String>("config").map(PathBuf::from);
    let settings = config::load(config_path.as_deref())?;
    init_tracing(&settings.log_level);

    let mut store = Store::open(&settings)?;
    let store = &mut store;

    match matches.subcommand() {
        Some(("init", _)) => commands::accounts::init(store, &settings)?,
        Some(("account", sub)) => commands::accounts::handle(store, &settings, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(store, sub)?,
        Some(("beneficiary", sub)) => commands::beneficiaries::handle(store, sub)?,
        Some(("pay", sub)) => commands::payments::handle(store, &settings, sub)?,
        Some(("fx", sub)) => commands::fx::handle(sub)?,
        Some(("report", sub)) => commands::reports::handle(store, &settings, sub)?,
        Some(("treasury", sub)) => commands::treasury::handle(store, &settings, sub)?,
        Some(("jobs", sub)) => commands::jobs::handle(store, &settings, sub)?,
        Some(("doc", sub)) => commands::documents::handle(store, &settings, sub)?,
        Some(("crypto", sub)) => commands::crypto::handle(store, &settings, sub)?,
        Some(("export", sub)) => commands::exporter::handle(store, sub)?,
        Some(("doctor", _)) => commands::doctor::handle(store)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    let matches = cli::build_cli().get_matches();
    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!("{:#}", err);
            eprintln!("error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
