#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
//! profilecli — fetch a user profile through an external script and re-emit it as JSON.

mod cli;
mod commands;
mod fetch;
mod types;

use clap::Parser;
use clap::error::ErrorKind;

use cli::{Cli, OutputCtx, OutputFormat, write_error};
use fetch::FetchError;
use types::ErrorOutput;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => match err.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
            _ => {
                eprintln!("{}", usage_summary(&err));
                fail(
                    &FetchError::InvalidArguments,
                    &OutputCtx::new(OutputFormat::Compact, false),
                )
            }
        },
    };

    cli::logging::init(cli.debug);
    let ctx = OutputCtx::new(cli.output, cli.pretty);

    if let Err(err) = commands::run(&cli, &ctx) {
        fail(&err, &ctx);
    }
}

/// Report `err` as a JSON error record on stdout and exit.
fn fail(err: &FetchError, ctx: &OutputCtx) -> ! {
    log::debug!("{err:?}");
    write_error(&ErrorOutput::from_fetch_error(err), ctx);
    std::process::exit(err.exit_code());
}

/// Reduce a clap error to its one-line summary.
fn usage_summary(err: &clap::Error) -> String {
    let rendered = err.to_string();
    rendered.lines().next().unwrap_or_default().to_owned()
}
