// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use bankdesk::commands::{accounts as account_cmd, documents as doc_cmd};
use bankdesk::config::{self, BackendKind};
use bankdesk::hooks::{accounts, documents};
use bankdesk::store::Store;
use bankdesk::cli;
use tempfile::tempdir;

#[test]
fn file_overrides_defaults() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bankdesk.toml");
    std::fs::write(
        &path,
        r#"
holder_name = "Thandi Mokoena"
base_currency = "usd"

[backend]
kind = "sqlite"
db_path = "/tmp/ignored.sqlite"
"#,
    )
    .unwrap();
    let settings = config::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.holder_name, "Thandi Mokoena");
    assert_eq!(settings.base_currency, "USD");
    assert_eq!(settings.bank_name, "Capitec Bank");
    assert_eq!(settings.backend.kind, BackendKind::Sqlite);
    assert!(settings.explorer.api_key.is_none());
}

#[test]
fn environment_overrides_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bankdesk.toml");
    std::fs::write(
        &path,
        r#"
log_level = "warn"

[explorer]
url = "https://file.example/api"
"#,
    )
    .unwrap();
    // Keys not asserted by other tests in this binary, which share the process env.
    unsafe {
        std::env::set_var("BANKDESK_LOG_LEVEL", "debug");
        std::env::set_var("BANKDESK_EXPLORER__URL", "https://env.example/api");
    }
    let loaded = config::load(Some(path.as_path()));
    unsafe {
        std::env::remove_var("BANKDESK_LOG_LEVEL");
        std::env::remove_var("BANKDESK_EXPLORER__URL");
    }
    let settings = loaded.unwrap();
    assert_eq!(settings.log_level, "debug");
    assert_eq!(settings.explorer.url, "https://env.example/api");

    let settings = config::load(Some(path.as_path())).unwrap();
    assert_eq!(settings.log_level, "warn");
    assert_eq!(settings.explorer.url, "https://file.example/api");
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempdir().unwrap();
    assert!(config::load(Some(dir.path().join("nope.toml").as_path())).is_err());
}

#[test]
fn statement_command_saves_and_records_document() {
    let dir = tempdir().unwrap();
    let mut settings = config::Settings::default();
    settings.backend.db_path = Some(dir.path().join("bank.sqlite"));
    settings.output_dir = dir.path().join("out");
    let mut store = Store::open(&settings).unwrap();

    account_cmd::init(&mut store, &settings).unwrap();
    let number = accounts::list(&mut store).unwrap()[0].account_number.clone();

    let matches = cli::build_cli().get_matches_from([
        "bankdesk",
        "doc",
        "statement",
        "--account",
        &number,
    ]);
    let Some(("doc", doc_m)) = matches.subcommand() else {
        panic!("no doc subcommand");
    };
    doc_cmd::handle(&mut store, &settings, doc_m).unwrap();

    let recorded = documents::list(&mut store).unwrap();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].kind, "statement");
    let saved = settings.output_dir.join(&recorded[0].filename);
    let bytes = std::fs::read(saved).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}
