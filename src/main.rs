// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use finsync::client::ApiClient;
use finsync::config::Config;
use finsync::session::Session;
use finsync::{cli, commands, logging};

fn main() -> Result<()> {
    let matches = cli::build_cli().get_matches();
    logging::init_tracing(matches.get_count("verbose"));

    let session = Session::open_default()?;
    let config = Config::resolve(
        matches.get_one::<String>("api-url").map(String::as_str),
        &session,
    )?;
    let client = ApiClient::connect(&config, session)?;

    let result = match matches.subcommand() {
        Some(("login", sub)) => commands::auth::handle_login(&client, sub),
        Some(("register", sub)) => commands::auth::handle_register(&client, sub),
        Some(("logout", _)) => commands::auth::handle_logout(&client),
        Some(("config", sub)) => commands::config::handle(client.session(), &config, sub),
        Some(("profile", sub)) => commands::profile::handle(&client, sub),
        Some(("dashboard", sub)) => commands::dashboard::handle(&client, sub),
        Some(("account", sub)) => commands::accounts::handle(&client, sub),
        Some(("tx", sub)) => commands::transactions::handle(&client, sub),
        Some(("budget", sub)) => commands::budgets::handle(&client, sub),
        Some(("category", sub)) => commands::categories::handle(&client, sub),
        Some(("loan", sub)) => commands::loans::handle(&client, sub),
        Some(("role", sub)) => commands::roles::handle(&client, sub),
        Some(("user", sub)) => commands::users::handle(&client, sub),
        Some(("export", sub)) => commands::exporter::handle(&client, sub),
        Some(("doctor", _)) => commands::doctor::handle(&client, &config),
        _ => {
            cli::build_cli().print_help()?;
            println!();
            Ok(())
        }
    };
    if let Err(err) = &result {
        if commands::needs_login(err) {
            eprintln!("You are not signed in. Run `finsync login <user> --password <password>`.");
        }
    }
    result
}
