// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn json_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON object per line"),
    )
}

fn beneficiary_fields(cmd: Command) -> Command {
    cmd.arg(Arg::new("name").long("name").required(true))
        .arg(Arg::new("bank").long("bank").required(true))
        .arg(Arg::new("account").long("account").required(true))
        .arg(Arg::new("swift").long("swift"))
        .arg(Arg::new("branch").long("branch"))
        .arg(Arg::new("email").long("email"))
}

pub fn build_cli() -> Command {
    Command::new("bankdesk")
        .about("Mock online banking: accounts, payments, FX, tax, treasury, payroll and PDF paperwork")
        .version(clap::crate_version!())
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a bankdesk.toml settings file"),
        )
        .subcommand(Command::new("init").about("Open the backend and seed demo data"))
        .subcommand(
            Command::new("account")
                .about("Accounts dashboard")
                .subcommand(json_args(Command::new("list")))
                .subcommand(Command::new("seed").about("Create demo accounts if none exist"))
                .subcommand(
                    Command::new("open")
                        .arg(Arg::new("type").long("type").required(true))
                        .arg(Arg::new("name").long("name").required(true))
                        .arg(Arg::new("currency").long("currency")),
                ),
        )
        .subcommand(
            Command::new("tx")
                .about("Transaction history")
                .subcommand(json_args(
                    Command::new("list")
                        .arg(Arg::new("account").long("account"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(json_args(
                    Command::new("show").arg(Arg::new("id").required(true)),
                )),
        )
        .subcommand(
            Command::new("beneficiary")
                .about("Saved payees")
                .subcommand(beneficiary_fields(Command::new("add")))
                .subcommand(json_args(Command::new("list")))
                .subcommand(beneficiary_fields(
                    Command::new("update").arg(Arg::new("id").required(true)),
                ))
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("pay")
                .about("Payments")
                .subcommand(
                    Command::new("transfer")
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true))
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("reference").long("reference"))
                        .arg(
                            Arg::new("receipt")
                                .long("receipt")
                                .action(ArgAction::SetTrue)
                                .help("Save a proof-of-payment PDF"),
                        ),
                )
                .subcommand(
                    Command::new("checkout")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("currency").long("currency"))
                        .arg(Arg::new("description").long("description").required(true)),
                ),
        )
        .subcommand(
            Command::new("fx")
                .about("Foreign exchange")
                .subcommand(
                    Command::new("convert")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(Arg::new("from").long("from").required(true))
                        .arg(Arg::new("to").long("to").required(true)),
                )
                .subcommand(json_args(
                    Command::new("rates").arg(Arg::new("base").long("base")),
                )),
        )
        .subcommand(
            Command::new("report")
                .about("Balances and tax estimates")
                .subcommand(json_args(
                    Command::new("balances").arg(Arg::new("currency").long("currency")),
                ))
                .subcommand(json_args(Command::new("tax"))),
        )
        .subcommand(
            Command::new("treasury")
                .about("Treasury holdings")
                .subcommand(json_args(
                    Command::new("list").arg(Arg::new("currency").long("currency")),
                ))
                .subcommand(
                    Command::new("adjust")
                        .arg(Arg::new("holding").required(true))
                        .arg(Arg::new("reserve").long("reserve").required(true))
                        .arg(Arg::new("liquidity").long("liquidity").required(true))
                        .arg(Arg::new("risk").long("risk").required(true)),
                )
                .subcommand(
                    Command::new("execute")
                        .arg(Arg::new("holding").required(true))
                        .arg(Arg::new("kind").long("kind").required(true))
                        .arg(Arg::new("amount").long("amount").required(true)),
                )
                .subcommand(json_args(Command::new("history"))),
        )
        .subcommand(
            Command::new("jobs")
                .about("Job portal and salary setups")
                .subcommand(json_args(Command::new("list")))
                .subcommand(Command::new("setup").arg(Arg::new("job").required(true)))
                .subcommand(json_args(Command::new("setups")))
                .subcommand(Command::new("deactivate").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("payroll").arg(Arg::new("id").required(true))),
        )
        .subcommand(
            Command::new("doc")
                .about("PDF paperwork")
                .subcommand(
                    Command::new("statement")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("from").long("from"))
                        .arg(Arg::new("to").long("to")),
                )
                .subcommand(
                    Command::new("salary-slip")
                        .arg(Arg::new("setup").long("setup").required(true))
                        .arg(Arg::new("period").long("period"))
                        .arg(Arg::new("secondary").long("secondary"))
                        .arg(Arg::new("primary_percent").long("primary-percent")),
                )
                .subcommand(
                    Command::new("compliance")
                        .arg(Arg::new("kind").long("kind").required(true))
                        .arg(Arg::new("account").long("account").required(true)),
                )
                .subcommand(json_args(Command::new("list"))),
        )
        .subcommand(
            Command::new("crypto")
                .about("Wallet addresses and on-chain balances")
                .subcommand(json_args(Command::new("wallets")))
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("symbol").long("symbol").required(true))
                        .arg(Arg::new("address").long("address").required(true))
                        .arg(Arg::new("label").long("label")),
                )
                .subcommand(Command::new("rm").arg(Arg::new("id").required(true)))
                .subcommand(Command::new("balance").arg(Arg::new("address").required(true))),
        )
        .subcommand(
            Command::new("export").subcommand(
                Command::new("transactions")
                    .arg(Arg::new("format").long("format").required(true))
                    .arg(Arg::new("out").long("out").required(true)),
            ),
        )
        .subcommand(Command::new("doctor").about("Check balances against transaction history"))
}
