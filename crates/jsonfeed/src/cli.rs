//! Core logic of the `jsonfeed-check` binary.
//!
//! The binary reads a feed from stdin, validates it, and writes the normalized
//! feed to stdout. Keeping the logic here lets it be tested without a process.

use thiserror::Error;

use crate::{parse, JsonFeedError};

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Io(#[from] std::io::Error),
    #[error("{0}")]
    Feed(#[from] JsonFeedError),
    #[error("Unknown argument: {0}")]
    UnknownArgument(String),
}

/// Flags accepted by `jsonfeed-check`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CheckOptions {
    /// `--pretty`: indent the normalized output.
    pub pretty: bool,
    /// `--quiet`: print nothing on success.
    pub quiet: bool,
}

impl CheckOptions {
    /// Parse flags, skipping the program name in `args[0]`.
    pub fn from_args(args: &[String]) -> Result<Self, CliError> {
        let mut options = CheckOptions::default();
        for arg in args.iter().skip(1) {
            match arg.as_str() {
                "--pretty" | "-p" => options.pretty = true,
                "--quiet" | "-q" => options.quiet = true,
                other => return Err(CliError::UnknownArgument(other.to_string())),
            }
        }
        Ok(options)
    }
}

/// Validate `input` and return the text to print on success.
///
/// The output is empty when `quiet` is set, otherwise the re-encoded feed
/// followed by a newline.
pub fn check(input: &[u8], options: &CheckOptions) -> Result<String, CliError> {
    let feed = parse(input)?;
    if options.quiet {
        return Ok(String::new());
    }
    let mut out = if options.pretty {
        feed.to_json_pretty()?
    } else {
        feed.to_json()?
    };
    out.push('\n');
    Ok(out)
}
