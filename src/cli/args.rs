/// CLI argument definitions via clap derive.
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueEnum};

use crate::fetch::FetchError;

/// profilecli — fetch a user profile through an external script and print it as JSON.
#[derive(Debug, Parser)]
#[command(
    name = "profilecli",
    about = "Fetch a user profile through an external script and print it as JSON",
    version
)]
pub struct Cli {
    /// Username to fetch. Exactly one is required.
    ///
    /// Collected as a list so a wrong count is reported as a JSON error record.
    /// Pass names starting with `-` after a `--` separator.
    #[arg(value_name = "USERNAME", num_args = 0..)]
    pub usernames: Vec<String>,

    /// Path to the fetch script, relative to the root unless absolute.
    /// Defaults to src/app/api/python/e-z.py.
    #[arg(long, env = "PROFILECLI_SCRIPT", value_name = "PATH")]
    pub script: Option<PathBuf>,

    /// Directory the script path is resolved against. Defaults to the
    /// current working directory; a relative value is taken relative to it.
    #[arg(long, env = "PROFILECLI_ROOT", value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Command used to run the script. Defaults to `python` on Windows and
    /// `python3` elsewhere.
    #[arg(long, env = "PROFILECLI_INTERPRETER", value_name = "CMD")]
    pub interpreter: Option<String>,

    /// Output format for the record written to stdout.
    #[arg(long, value_name = "FORMAT", default_value = "compact")]
    pub output: OutputFormat,

    /// Shorthand for --output json.
    #[arg(long, conflicts_with = "output")]
    pub pretty: bool,

    /// Log to stderr: -d for debug, -dd for trace. RUST_LOG overrides.
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    /// The single username argument.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::InvalidArguments` unless exactly one was given.
    pub fn username(&self) -> Result<&str, FetchError> {
        match self.usernames.as_slice() {
            [username] => Ok(username),
            _ => Err(FetchError::InvalidArguments),
        }
    }
}

/// Output format variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Default)]
pub enum OutputFormat {
    /// Single-line JSON.
    #[default]
    Compact,
    /// Pretty-printed JSON.
    Json,
}
