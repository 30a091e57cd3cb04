use clap::Parser;
use std::time::Duration;

use super::parsers::{parse_duration_arg, parse_target_url};
use super::types::FetchType;

#[derive(Debug, Parser, Clone)]
#[clap(
    version,
    about = "Fetch a fixed set of URLs sequentially or concurrently and report per-URL and total elapsed time."
)]
pub struct FetchArgs {
    /// Fetch strategy: `requests` (sequential, blocking) or `aiohttp` (concurrent)
    #[arg(value_name = "FETCH_TYPE")]
    pub fetch_type: FetchType,

    /// Target URL (repeatable); replaces the built-in target list
    #[arg(long = "url", short = 'u', value_parser = parse_target_url)]
    pub urls: Vec<String>,

    /// Per-request timeout (supports ms/s/m/h); no timeout when unset
    #[arg(long = "timeout", value_parser = parse_duration_arg)]
    pub request_timeout: Option<Duration>,

    /// Enable verbose logging (sets log level to debug unless overridden by URLFETCH_LOG/RUST_LOG)
    #[arg(long, short = 'v')]
    pub verbose: bool,
}
