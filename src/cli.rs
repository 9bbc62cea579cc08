// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, arg, value_parser};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(arg!(--json "Print pretty JSON"))
        .arg(arg!(--jsonl "Print one JSON object per line"))
}

fn window_args(cmd: Command) -> Command {
    cmd.arg(arg!(--year <YEAR> "Calendar year, e.g. 2024").required(true))
        .arg(
            arg!(--month <MONTH> "Month name or number, or All")
                .required(false)
                .default_value("All"),
        )
}

fn expense_cmd() -> Command {
    Command::new("expense")
        .about("Record and list expenses")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                .arg(arg!(--amount <AMOUNT>).required(true))
                .arg(arg!(--category <CATEGORY>).required(true))
                .arg(arg!(--description <TEXT>).required(false)),
        )
        .subcommand(json_flags(
            Command::new("list")
                .arg(arg!(--year <YEAR>).required(false))
                .arg(arg!(--month <MONTH>).required(false))
                .arg(
                    arg!(--limit <N>)
                        .required(false)
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(
            Command::new("update")
                .arg(arg!(--id <ID>).required(true))
                .arg(arg!(--date <DATE>).required(false))
                .arg(arg!(--amount <AMOUNT>).required(false))
                .arg(arg!(--category <CATEGORY>).required(false))
                .arg(arg!(--description <TEXT>).required(false)),
        )
        .subcommand(Command::new("rm").arg(arg!(--id <ID>).required(true)))
}

fn investment_cmd() -> Command {
    Command::new("investment")
        .about("Record investments and manage investment types")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(arg!(--date <DATE> "YYYY-MM-DD").required(true))
                .arg(arg!(--amount <AMOUNT>).required(true))
                .arg(Arg::new("type").long("type").required(true))
                .arg(arg!(--roi <PCT> "Expected annual return, percent").default_value("0"))
                .arg(arg!(--duration <YEARS>).default_value("0"))
                .arg(arg!(--expected <AMOUNT> "Expected amount at maturity").required(false)),
        )
        .subcommand(json_flags(Command::new("list")))
        .subcommand(
            Command::new("update")
                .arg(arg!(--id <ID>).required(true))
                .arg(arg!(--date <DATE>).required(false))
                .arg(arg!(--amount <AMOUNT>).required(false))
                .arg(Arg::new("type").long("type").required(false))
                .arg(arg!(--roi <PCT>).required(false))
                .arg(arg!(--duration <YEARS>).required(false))
                .arg(arg!(--expected <AMOUNT>).required(false)),
        )
        .subcommand(Command::new("rm").arg(arg!(--id <ID>).required(true)))
        .subcommand(json_flags(Command::new("totals")))
        .subcommand(Command::new("type-add").arg(arg!(--name <NAME>).required(true)))
        .subcommand(Command::new("type-rm").arg(arg!(--name <NAME>).required(true)))
        .subcommand(Command::new("types"))
}

fn goal_cmd() -> Command {
    Command::new("goal")
        .about("Track savings goals")
        .subcommand_required(true)
        .subcommand(
            Command::new("add")
                .arg(arg!(--name <NAME>).required(true))
                .arg(arg!(--target <AMOUNT>).required(true))
                .arg(arg!(--current <AMOUNT>).default_value("0"))
                .arg(arg!(--deadline <DATE> "YYYY-MM-DD").required(true))
                .arg(arg!(--status <STATUS>).default_value("Pending")),
        )
        .subcommand(json_flags(Command::new("list")))
        .subcommand(
            Command::new("update")
                .arg(arg!(--id <ID>).required(true))
                .arg(arg!(--name <NAME>).required(false))
                .arg(arg!(--target <AMOUNT>).required(false))
                .arg(arg!(--current <AMOUNT>).required(false))
                .arg(arg!(--deadline <DATE>).required(false))
                .arg(arg!(--status <STATUS>).required(false)),
        )
        .subcommand(Command::new("rm").arg(arg!(--id <ID>).required(true)))
}

fn sip_cmd() -> Command {
    json_flags(
        Command::new("sip")
            .about("Project a systematic investment plan")
            .arg(arg!(--monthly <AMOUNT> "Monthly investment").required(true))
            .arg(arg!(--years <YEARS> "Investment duration in whole years").required(true))
            .arg(arg!(--rate <PCT> "Expected annual return rate, percent").required(true))
            .arg(
                Arg::new("lump-sum")
                    .long("lump-sum")
                    .value_name("AMOUNT")
                    .help("One-time investment")
                    .default_value("0"),
            )
            .arg(arg!(--summary "Only print contributed vs. gained"))
            .arg(arg!(--csv <PATH> "Write the monthly series to a CSV file").required(false)),
    )
}

fn config_cmd() -> Command {
    Command::new("config")
        .about("Show or change settings")
        .subcommand_required(true)
        .subcommand(Command::new("show"))
        .subcommand(Command::new("set-currency").arg(arg!(<SYMBOL>).required(true)))
        .subcommand(Command::new("set-remote").arg(arg!(--url <URL>).required(true)))
        .subcommand(Command::new("set-token").arg(arg!(--token <TOKEN>).required(true)))
        .subcommand(Command::new("clear-remote"))
}

pub fn build_cli() -> Command {
    Command::new("finsight")
        .about("Expenses, goals, investments, insights, and a SIP calculator")
        .version(clap::crate_version!())
        .arg(
            Arg::new("remote")
                .long("remote")
                .help("Use the hosted API instead of the local database")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(Command::new("init").about("Create the local database"))
        .subcommand(config_cmd())
        .subcommand(expense_cmd())
        .subcommand(investment_cmd())
        .subcommand(goal_cmd())
        .subcommand(sip_cmd())
        .subcommand(json_flags(window_args(
            Command::new("dashboard").about("Expense breakdowns, investments by type, goals"),
        )))
        .subcommand(json_flags(
            window_args(Command::new("insights").about("Savings rate and financial score"))
                .arg(arg!(--income <AMOUNT> "Income for the selected period").required(true)),
        ))
}
