// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .help("Print pretty JSON instead of a table")
            .action(ArgAction::SetTrue),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .help("Print one JSON object per line")
            .action(ArgAction::SetTrue),
    )
}

fn month_arg() -> Arg {
    Arg::new("month")
        .long("month")
        .value_name("YYYY-MM")
        .help("Month to scope the period totals to (defaults to the current month)")
}

fn query_arg() -> Arg {
    Arg::new("query")
        .long("query")
        .short('q')
        .value_name("TEXT")
        .help("Case-insensitive substring match")
}

pub fn build_cli() -> Command {
    Command::new("propclip")
        .about("Track prop-firm challenge accounts, expenses, and payouts")
        .version(crate_version!())
        .subcommand(
            Command::new("account")
                .about("Manage prop firm account profiles")
                .subcommand(
                    Command::new("add")
                        .about("Create a new account profile")
                        .arg(Arg::new("firm").long("firm").required(true).help("Prop firm name"))
                        .arg(Arg::new("name").long("name").required(true).help("Account display name"))
                        .arg(Arg::new("size").long("size").required(true).allow_hyphen_values(true).help("Account size (notional)"))
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("EVALUATION")
                                .help("EVALUATION | CHALLENGE | FUNDED"),
                        )
                        .arg(
                            Arg::new("status")
                                .long("status")
                                .default_value("ACTIVE")
                                .help("ACTIVE | FAILED | COMPLETED"),
                        )
                        .arg(Arg::new("start").long("start").value_name("YYYY-MM-DD")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List accounts, newest first")
                        .arg(query_arg())
                        .arg(Arg::new("status").long("status").help("Filter by status"))
                        .arg(Arg::new("type").long("type").help("Filter by type"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("stats").about("Active/funded counts and total notional"),
                )),
        )
        .subcommand(
            Command::new("expense")
                .about("Track challenge fees, resets, and tooling costs")
                .subcommand(
                    Command::new("add")
                        .about("Record a new expense")
                        .arg(Arg::new("amount").long("amount").required(true).allow_hyphen_values(true))
                        .arg(Arg::new("firm").long("firm").help("Defaults to 'General'"))
                        .arg(Arg::new("account").long("account"))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("CHALLENGE_FEE")
                                .help("CHALLENGE_FEE | RESET | EXTENSION | VPS | DATA | SOFTWARE | OTHER"),
                        )
                        .arg(Arg::new("description").long("description"))
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        ),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List expenses, newest first")
                        .arg(query_arg())
                        .arg(Arg::new("type").long("type").help("Filter by type"))
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("stats")
                        .about("Total spend and this month's spend")
                        .arg(month_arg()),
                )),
        )
        .subcommand(
            Command::new("payout")
                .about("Track withdrawals received from prop firms")
                .subcommand(
                    Command::new("add")
                        .about("Record a payout; net is derived from gross and split unless given")
                        .arg(Arg::new("account").long("account").required(true))
                        .arg(Arg::new("gross").long("gross").required(true).allow_hyphen_values(true))
                        .arg(Arg::new("split").long("split").value_name("PERCENT").allow_hyphen_values(true))
                        .arg(
                            Arg::new("net")
                                .long("net")
                                .allow_hyphen_values(true)
                                .help("Override the derived net-to-trader amount"),
                        )
                        .arg(Arg::new("firm").long("firm"))
                        .arg(Arg::new("currency").long("currency").default_value("USD"))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .value_name("YYYY-MM-DD")
                                .help("Defaults to today"),
                        )
                        .arg(Arg::new("method").long("method").help("Wise / PayPal / Bank"))
                        .arg(Arg::new("notes").long("notes")),
                )
                .subcommand(json_flags(
                    Command::new("list")
                        .about("List payouts, newest first")
                        .arg(query_arg())
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(clap::value_parser!(usize)),
                        ),
                ))
                .subcommand(json_flags(
                    Command::new("stats")
                        .about("Gross/net totals and this month's net")
                        .arg(month_arg()),
                )),
        )
        .subcommand(json_flags(
            Command::new("dashboard").about("Net profit overview across all records"),
        ))
        .subcommand(
            Command::new("export")
                .about("Export records to CSV or JSON")
                .subcommand(export_cmd("accounts"))
                .subcommand(export_cmd("expenses"))
                .subcommand(export_cmd("payouts")),
        )
}

fn export_cmd(name: &'static str) -> Command {
    Command::new(name)
        .about("Write all records of this kind to a file")
        .arg(
            Arg::new("format")
                .long("format")
                .required(true)
                .help("csv | json"),
        )
        .arg(Arg::new("out").long("out").required(true).value_name("PATH"))
}
