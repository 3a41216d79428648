// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Mnemo-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Mnemo and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Mnemo CLI entrypoint.
//!
//! Runs the interactive TUI. With a snapshot file argument the session is
//! imported from it at startup (when the file exists) and exported back to
//! it on quit; without one the session lives only for the run.

use std::error::Error;
use std::path::Path;

use mnemo::model::Session;
use mnemo::snapshot::{read_snapshot_file, write_snapshot_file, Snapshot, WriteDurability};

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<snapshot-file>] [--durable-writes]\n  {program} --demo\n\nWith a snapshot file, the session is imported from it on start (if it\nexists) and exported back to it on quit. A malformed snapshot aborts the\nstart; nothing is ever half-imported.\n\n--demo runs a built-in demo session and cannot be combined with a\nsnapshot file.\n\n--durable-writes opts into slower, best-effort durable snapshot writes\n(fsync/sync where supported) and requires a snapshot file."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    demo: bool,
    snapshot_path: Option<String>,
    durable_writes: bool,
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--demo" => {
                if options.demo {
                    return Err(());
                }
                options.demo = true;
            }
            "--durable-writes" => {
                if options.durable_writes {
                    return Err(());
                }
                options.durable_writes = true;
            }
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.snapshot_path.is_some() {
                    return Err(());
                }
                options.snapshot_path = Some(arg);
            }
        }
    }

    if options.demo && options.snapshot_path.is_some() {
        return Err(());
    }

    if options.durable_writes && options.snapshot_path.is_none() {
        return Err(());
    }

    Ok(options)
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "mnemo".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        let durability = if options.durable_writes {
            WriteDurability::Durable
        } else {
            WriteDurability::BestEffort
        };

        let session = if options.demo {
            mnemo::tui::demo_session()
        } else if let Some(path) = options.snapshot_path.as_deref() {
            let path = Path::new(path);
            if path.is_file() {
                let snapshot = read_snapshot_file(path)?;
                Session::with_cards(snapshot.into_store())
            } else {
                Session::new()
            }
        } else {
            Session::new()
        };

        let session = mnemo::tui::run_with_session(session)?;

        if let Some(path) = options.snapshot_path.as_deref() {
            let snapshot = Snapshot::capture(session.cards());
            write_snapshot_file(Path::new(path), &snapshot, durability)?;
        }

        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("mnemo: {err}");
        std::process::exit(1);
    }
}
