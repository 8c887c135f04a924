// Copyright (c) Grover Oracle Contributors.
// Licensed under the MIT License.

#![deny(clippy::all, clippy::pedantic)]

use clap::builder::{PossibleValuesParser, TypedValueParser};
use clap::error::ErrorKind;
use clap::{arg, crate_version, value_parser, Arg, ArgAction, Command};
use grover_oracle::ProblemType;
use std::{ffi::OsString, path::PathBuf};
use tracing_subscriber::filter::LevelFilter;

fn command() -> Command {
    Command::new("grover-runner")
        .args(&[
            arg!(-k --key <NAME> "(Required) Name of the lookup table entry to search for")
                .required(true),
            arg!(-t --table <PATH> "Path to a ';'-delimited lookup table, overriding --data-dir and --problem")
                .value_parser(value_parser!(PathBuf)),
            Arg::new("data-dir")
                .short('d')
                .long("data-dir")
                .value_name("DIR")
                .help("Directory holding the bundled lookup tables")
                .value_parser(value_parser!(PathBuf))
                .default_value("data"),
            arg!(-p --problem <TYPE> "Which bundled lookup table to search")
                .value_parser(
                    PossibleValuesParser::new(["easy", "complex"])
                        .try_map(|problem| problem.parse::<ProblemType>()),
                )
                .default_value("easy"),
            Arg::new("no-measure")
                .long("no-measure")
                .help("Leave the final measurement out of the emitted circuit")
                .action(ArgAction::SetTrue),
            Arg::new("log-level")
                .short('l')
                .long("log-level")
                .value_name("LEVEL")
                .help("Diagnostics written to stderr: off, error, warn, info, debug or trace")
                .default_value("warn"),
        ])
        .version(crate_version!())
}

/// # Errors
/// Returns an error if the arguments are invalid, the lookup table cannot be loaded or the key is
/// not in it.
/// # Panics
/// Panics if the arguments cannot be read.
pub fn main<I, T>(args: Option<I>) -> Result<(), String>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cmd = command();
    let matches = match args {
        Some(args) => cmd.try_get_matches_from(args),
        None => cmd.try_get_matches(),
    };
    match matches {
        Err(e) => {
            let msg = e.to_string();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    eprint!("{msg}");
                    Ok(())
                }
                _ => Err(msg),
            }
        }
        Ok(matches) => {
            let level = matches
                .get_one::<String>("log-level")
                .expect("Log level should have a default value")
                .parse::<LevelFilter>()
                .map_err(|e| format!("Invalid log level: {e}"))?;
            init_logging(level);

            let problem = *matches
                .get_one::<ProblemType>("problem")
                .expect("Problem should have a default value");
            let table = match matches.get_one::<PathBuf>("table") {
                Some(path) => path.clone(),
                None => problem.table_path(
                    matches
                        .get_one::<PathBuf>("data-dir")
                        .expect("Data directory should have a default value"),
                ),
            };

            crate::run_search(
                table,
                matches
                    .get_one::<String>("key")
                    .expect("Key is required"),
                !matches.get_flag("no-measure"),
                &mut std::io::stdout(),
            )
        }
    }
}

fn init_logging(level: LevelFilter) {
    // A subscriber may already be installed when the runner is embedded, which is fine.
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
