//! `jsonfeed-check` — validate a JSON Feed read from stdin.
//!
//! Usage:
//!   jsonfeed-check [--pretty] [--quiet]
//!
//! On success the normalized feed is written to stdout and the exit code is 0.
//! On failure the error is written to stderr and the exit code is 1.
//! Log verbosity follows `RUST_LOG`. Built with `--features cli`.

use std::io::{self, Read, Write};

use jsonfeed::cli::{check, CheckOptions, CliError};
use tracing_subscriber::EnvFilter;

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run() -> Result<(), CliError> {
    let args: Vec<String> = std::env::args().collect();
    let options = CheckOptions::from_args(&args)?;

    let mut buf = Vec::new();
    io::stdin().read_to_end(&mut buf)?;

    let out = check(&buf, &options)?;
    io::stdout().write_all(out.as_bytes())?;
    Ok(())
}
