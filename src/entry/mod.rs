mod plan;

use std::ffi::OsString;

use clap::{CommandFactory, FromArgMatches};

use crate::args::FetchArgs;
use crate::error::AppResult;
use plan::{build_plan, execute_plan};

/// Parses the command line, initializes logging and runs the selected path.
///
/// Invalid arguments, `--help` and `--version` are handled by clap, which
/// exits before any network activity.
///
/// # Errors
///
/// Returns an error when the configuration is invalid or a fetch fails.
pub fn run() -> AppResult<()> {
    let args = parse_args(std::env::args_os())?;

    crate::logger::init_logging(args.verbose);

    let result = build_plan(&args).and_then(execute_plan);
    if let Err(err) = &result {
        tracing::error!("{}", err);
    }
    result
}

fn parse_args<I>(raw_args: I) -> AppResult<FetchArgs>
where
    I: IntoIterator<Item = OsString>,
{
    let matches = FetchArgs::command().get_matches_from(raw_args);
    Ok(FetchArgs::from_arg_matches(&matches)?)
}
