// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;

use propclip::{cli, commands, seed, store::Ledger};

fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let mut ledger = Ledger::open(Box::new(seed::demo_backend()))?;

    match matches.subcommand() {
        Some(("account", sub)) => commands::accounts::handle(&mut ledger, sub)?,
        Some(("expense", sub)) => commands::expenses::handle(&mut ledger, sub)?,
        Some(("payout", sub)) => commands::payouts::handle(&mut ledger, sub)?,
        Some(("dashboard", sub)) => commands::dashboard::handle(&ledger, sub)?,
        Some(("export", sub)) => commands::exporter::handle(&ledger, sub)?,
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
