//! # ztg-cointracking
//!
//! Print CoinTracking import rows for Zeitgeist staking rewards.

#![forbid(unsafe_code)]

use error_iter::ErrorIter as _;
use is_terminal::IsTerminal as _;
use onlyargs::{CliError, OnlyArgs as _};
use onlyargs_derive::OnlyArgs;
use std::{env, io, process::ExitCode};
use thiserror::Error;
use tracing::info;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::prelude::*;
use ztg_cointracking::exports::{write_csv, write_json};
use ztg_cointracking::rewards::get_staking_rewards;

#[derive(Debug, OnlyArgs)]
#[footer = "Rows are written to stdout. Logs are written to stderr."]
#[footer = "Additional environment variables:"]
#[footer = "  - RUST_LOG sets the log filter, default is \"info\""]
#[footer = "  - TERM_COLOR accepts \"always\" to override automatic terminal sensing"]
struct Args {
    /// Account or wallet label to report staking rewards for.
    ///   May be specified multiple times.
    #[long]
    account_id: Vec<String>,

    /// Write a JSON array instead of CSV.
    json: bool,
}

#[derive(Debug, Error)]
enum Error {
    #[error("Argument parsing error")]
    Args(#[from] CliError),

    #[error("At least one `--account-id` is required")]
    NoAccounts,

    #[error("Unable to write import rows")]
    Export(#[from] ztg_cointracking::errors::ExportError),
}

fn main() -> ExitCode {
    // Uses the `RUST_LOG` environment var for configuration. E.g. `RUST_LOG=debug cargo run`
    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    let term_color = env::var("TERM_COLOR")
        .map(|color| color == "always")
        .unwrap_or_else(|_| io::stderr().is_terminal());
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(term_color)
                .with_writer(io::stderr),
        )
        .with(env_filter)
        .init();

    match run(onlyargs::parse()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if matches!(err, Error::Args(_) | Error::NoAccounts) {
                eprintln!("{}", Args::HELP);
            }

            eprintln!("Error: {err}");
            for source in err.sources().skip(1) {
                eprintln!("  Caused by: {source}");
            }

            ExitCode::FAILURE
        }
    }
}

fn run(args: Result<Args, CliError>) -> Result<(), Error> {
    let args = args?;
    if args.account_id.is_empty() {
        return Err(Error::NoAccounts);
    }

    let records: Vec<_> = args
        .account_id
        .iter()
        .flat_map(|account_id| get_staking_rewards(account_id))
        .collect();
    info!(
        "Exporting {} staking rows for {} accounts",
        records.len(),
        args.account_id.len(),
    );

    let stdout = io::stdout().lock();
    if args.json {
        write_json(stdout, &records)?;
    } else {
        write_csv(stdout, &records)?;
    }

    Ok(())
}
