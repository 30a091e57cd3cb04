//! Runs a fetch path end to end and prints its report.
mod summary;

use std::sync::Arc;

use tracing::info;

use crate::config::FetchConfig;
use crate::error::AppResult;
use crate::http::{
    ConcurrentFetcher, FetchRun, ReqwestAsyncPort, ReqwestBlockingPort, SequentialFetcher,
};

pub use summary::{print_report, report_lines};

/// Fetches every target with blocking requests, one at a time.
///
/// No async runtime is involved; each request blocks until it completes.
///
/// # Errors
///
/// Returns the first fetch error, or an error writing the report.
pub fn run_sequential(config: &FetchConfig) -> AppResult<FetchRun> {
    info!("Fetching {} URL(s) sequentially", config.targets().len());
    let fetcher = SequentialFetcher::new(ReqwestBlockingPort::new(config.request_timeout()));
    let run = fetcher.run(config)?;
    print_report(&run)?;
    Ok(run)
}

/// Fetches every target concurrently on a single-threaded runtime.
///
/// # Errors
///
/// Returns an error when the runtime cannot be built, the first fetch or join
/// error, or an error writing the report.
pub fn run_concurrent(config: &FetchConfig) -> AppResult<FetchRun> {
    info!("Fetching {} URL(s) concurrently", config.targets().len());
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let fetcher = ConcurrentFetcher::new(Arc::new(ReqwestAsyncPort::new(
        config.request_timeout(),
    )));
    let run = runtime.block_on(fetcher.run(config))?;
    print_report(&run)?;
    Ok(run)
}
