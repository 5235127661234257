// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::config::API_URL_ENV;
use clap::{Arg, ArgAction, Command, crate_version, value_parser};

fn json_flags() -> [Arg; 2] {
    [
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print records as pretty JSON"),
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .conflicts_with("json")
            .help("Print one JSON record per line"),
    ]
}

fn id(name: &'static str) -> Arg {
    Arg::new(name)
        .required(true)
        .value_parser(value_parser!(i64))
}

fn opt(name: &'static str) -> Arg {
    Arg::new(name).long(name)
}

fn date_range() -> [Arg; 2] {
    [
        opt("from").help("Start day, YYYY-MM-DD (inclusive)"),
        opt("to").help("End day, YYYY-MM-DD (inclusive)"),
    ]
}

fn account_fields(create: bool) -> Vec<Arg> {
    vec![
        opt("name").required(create),
        opt("type")
            .required(create)
            .help("CHECKING, SAVINGS, CREDIT or INVESTMENT"),
        opt("balance").required(create),
        opt("currency"),
        opt("institution"),
        opt("number").help("Account number"),
        opt("rate").help("Interest rate"),
        opt("active")
            .value_parser(value_parser!(bool))
            .help("true or false"),
    ]
}

fn budget_fields(create: bool) -> Vec<Arg> {
    vec![
        opt("category")
            .required(create)
            .value_parser(value_parser!(i64))
            .help("Category id"),
        opt("limit").required(create).help("Amount limit"),
        opt("start").required(create).help("YYYY-MM-DD"),
        opt("end").required(create).help("YYYY-MM-DD"),
        opt("description"),
        opt("type").help("FLEXIBLE or STRICT"),
        opt("rollover").help("Rollover amount"),
    ]
}

fn category_fields(create: bool) -> Vec<Arg> {
    vec![
        opt("name").required(create),
        opt("type").help("INCOME or EXPENSE (default EXPENSE)"),
        opt("icon"),
        opt("color").help("#RRGGBB (default #000000)"),
    ]
}

fn user_fields(create: bool) -> Vec<Arg> {
    vec![
        opt("username").required(create),
        opt("email").required(create),
        Arg::new("first-name").long("first-name").required(create),
        Arg::new("last-name").long("last-name").required(create),
    ]
}

fn tx_filters() -> Vec<Arg> {
    let mut args = vec![
        opt("search").help("Match description, category, type, method, amount or status"),
        opt("account")
            .value_parser(value_parser!(i64))
            .help("Only this account's transactions"),
    ];
    args.extend(date_range());
    args
}

pub fn build_cli() -> Command {
    Command::new("finsync")
        .about("Command-line client for the personal finance API")
        .version(crate_version!())
        .arg(
            Arg::new("api-url")
                .long("api-url")
                .global(true)
                .env(API_URL_ENV)
                .help("Base URL of the finance API"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .global(true)
                .action(ArgAction::Count)
                .help("More log output (-v info, -vv debug)"),
        )
        .subcommand(
            Command::new("login")
                .about("Sign in and store the session")
                .arg(Arg::new("user").required(true).help("Username or email"))
                .arg(
                    opt("password")
                        .required(true)
                        .env("FINSYNC_PASSWORD")
                        .hide_env_values(true),
                ),
        )
        .subcommand(
            Command::new("register")
                .about("Create a new user")
                .arg(opt("username").required(true))
                .arg(opt("email").required(true))
                .arg(opt("password").required(true))
                .arg(Arg::new("first-name").long("first-name").required(true))
                .arg(Arg::new("last-name").long("last-name").required(true))
                .arg(opt("phone"))
                .arg(opt("address"))
                .arg(opt("currency").default_value("USD"))
                .arg(opt("timezone").default_value("UTC"))
                .arg(opt("language").default_value("en")),
        )
        .subcommand(Command::new("logout").about("Forget the stored session"))
        .subcommand(
            Command::new("config")
                .about("Client configuration")
                .subcommand(
                    Command::new("set-url")
                        .about("Store the API base URL")
                        .arg(Arg::new("url").required(true)),
                )
                .subcommand(Command::new("show").about("Show the effective configuration")),
        )
        .subcommand(
            Command::new("profile")
                .about("Your own profile")
                .subcommand(Command::new("show").args(json_flags()))
                .subcommand(
                    Command::new("update")
                        .arg(Arg::new("first-name").long("first-name"))
                        .arg(Arg::new("last-name").long("last-name"))
                        .arg(opt("email"))
                        .arg(opt("phone"))
                        .arg(opt("address"))
                        .arg(opt("currency"))
                        .arg(opt("timezone"))
                        .arg(opt("language")),
                )
                .subcommand(
                    Command::new("delete")
                        .about("Delete your user and sign out")
                        .arg(
                            Arg::new("yes")
                                .long("yes")
                                .action(ArgAction::SetTrue)
                                .help("Confirm the deletion"),
                        ),
                ),
        )
        .subcommand(
            Command::new("dashboard")
                .about("Balances and account counts")
                .args(json_flags()),
        )
        .subcommand(
            Command::new("account")
                .about("Manage accounts")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("all")
                                .long("all")
                                .action(ArgAction::SetTrue)
                                .help("Include deleted accounts"),
                        )
                        .arg(
                            Arg::new("expand")
                                .long("expand")
                                .value_parser(value_parser!(i64))
                                .action(ArgAction::Append)
                                .help("Show details for this account id (repeatable)"),
                        )
                        .arg(
                            Arg::new("expand-all")
                                .long("expand-all")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("expand"),
                        )
                        .args(json_flags()),
                )
                .subcommand(Command::new("add").args(account_fields(true)))
                .subcommand(Command::new("edit").arg(id("id")).args(account_fields(false)))
                .subcommand(Command::new("rm").arg(id("id")))
                .subcommand(Command::new("restore").arg(id("id"))),
        )
        .subcommand(
            Command::new("tx")
                .about("Transactions")
                .subcommand(Command::new("list").args(tx_filters()).args(json_flags()))
                .subcommand(
                    Command::new("add")
                        .arg(opt("type").required(true).help(
                            "INCOME, EXPENSE, TRANSFER, CREDIT_CARD_PAYMENT or RECURRING",
                        ))
                        .arg(
                            opt("account")
                                .required(true)
                                .value_parser(value_parser!(i64)),
                        )
                        .arg(opt("amount").required(true))
                        .arg(
                            Arg::new("to-account")
                                .long("to-account")
                                .value_parser(value_parser!(i64))
                                .help("Target account for TRANSFER and CREDIT_CARD_PAYMENT"),
                        )
                        .arg(opt("category").value_parser(value_parser!(i64)))
                        .arg(opt("date").help("YYYY-MM-DD[THH:MM], default now"))
                        .arg(opt("description"))
                        .arg(opt("method").help("Payment method, default CASH"))
                        .arg(opt("status").help("PENDING, COMPLETED or FAILED"))
                        .arg(opt("repeat").help("DAILY, WEEKLY, MONTHLY or YEARLY"))
                        .arg(
                            Arg::new("next-due")
                                .long("next-due")
                                .requires("repeat")
                                .help("Override the default next due date"),
                        ),
                ),
        )
        .subcommand(
            Command::new("budget")
                .about("Budgets")
                .subcommand(
                    Command::new("list")
                        .arg(opt("search"))
                        .args(date_range())
                        .args(json_flags()),
                )
                .subcommand(Command::new("add").args(budget_fields(true)))
                .subcommand(Command::new("edit").arg(id("id")).args(budget_fields(false)))
                .subcommand(Command::new("rm").arg(id("id"))),
        )
        .subcommand(
            Command::new("category")
                .about("Categories")
                .subcommand(
                    Command::new("list")
                        .arg(
                            Arg::new("deleted")
                                .long("deleted")
                                .action(ArgAction::SetTrue)
                                .help("Show deleted categories as well"),
                        )
                        .args(json_flags()),
                )
                .subcommand(Command::new("add").args(category_fields(true)))
                .subcommand(Command::new("edit").arg(id("id")).args(category_fields(false)))
                .subcommand(Command::new("rm").arg(id("id")))
                .subcommand(Command::new("restore").arg(id("id"))),
        )
        .subcommand(
            Command::new("loan")
                .about("Loans")
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(
                    Command::new("pay")
                        .arg(id("id"))
                        .arg(opt("amount").help("Monthly payment, default the scheduled amount"))
                        .arg(
                            opt("extra")
                                .conflicts_with("amount")
                                .help("Pay this extra amount instead"),
                        ),
                )
                .subcommand(Command::new("payments").arg(id("id")).args(json_flags()))
                .subcommand(Command::new("rm").arg(id("id"))),
        )
        .subcommand(
            Command::new("role")
                .about("Roles (admin)")
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(
                    Command::new("set")
                        .about("Create or replace a role")
                        .arg(Arg::new("name").required(true))
                        .arg(opt("description"))
                        .arg(
                            Arg::new("permission")
                                .long("permission")
                                .short('p')
                                .action(ArgAction::Append),
                        ),
                )
                .subcommand(Command::new("rm").arg(Arg::new("name").required(true))),
        )
        .subcommand(
            Command::new("user")
                .about("Users (admin)")
                .subcommand(Command::new("list").args(json_flags()))
                .subcommand(Command::new("add").args(user_fields(true)))
                .subcommand(Command::new("edit").arg(id("id")).args(user_fields(false)))
                .subcommand(Command::new("rm").arg(id("id"))),
        )
        .subcommand(
            Command::new("export")
                .about("Export data")
                .subcommand(
                    Command::new("tx")
                        .arg(
                            opt("format")
                                .value_parser(["csv", "json"])
                                .default_value("csv"),
                        )
                        .arg(opt("out").required(true))
                        .args(tx_filters()),
                ),
        )
        .subcommand(Command::new("doctor").about("Check configuration and connectivity"))
}
