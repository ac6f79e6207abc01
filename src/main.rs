// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2026 Vallés Puig, Ramon

//! `tictoc` diagnostic binary.
//!
//! `tictoc test` takes the current instant and prints it on every scale and
//! day-count encoding, in a fixed order, ending with the tdb family. The tdb
//! scales have no registered route, so the command is expected to print the
//! twelve reachable lines and then exit non-zero with the missing-path error
//! on stderr. That failure is the point: it exercises the error path
//! end-to-end.

use std::process::ExitCode;

use clap::{Parser, Subcommand};

use tictoc::{standard_graph, NoPathError, Scale, Time};

#[derive(Parser)]
#[command(name = "tictoc", about = "Astronomical and civil timescale conversions", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the current instant in every scale, reachable or not.
    Test,
}

/// Accessor order of the diagnostic printout. The last three are
/// unreachable by design and abort the run.
const DIAGNOSTIC_SCALES: [Scale; 13] = [
    Scale::Utc,
    Scale::Tai,
    Scale::JdTai,
    Scale::MjdTai,
    Scale::Tt,
    Scale::JdTt,
    Scale::MjdTt,
    Scale::Tcg,
    Scale::JdTcg,
    Scale::MjdTcg,
    Scale::Tdb,
    Scale::JdTdb,
    Scale::MjdTdb,
];

fn run_test() -> Result<(), NoPathError<Scale>> {
    let graph = standard_graph();
    let now = Time::now(&graph)?;
    println!("{now}");
    for scale in DIAGNOSTIC_SCALES {
        println!("{}", now.to_scale(scale)?);
    }
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.command {
        Command::Test => match run_test() {
            Ok(()) => ExitCode::SUCCESS,
            Err(error) => {
                eprintln!("{error}");
                ExitCode::FAILURE
            }
        },
    }
}
