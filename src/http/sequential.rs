use std::time::Instant;

use rand::Rng;
use tracing::debug;

use crate::config::FetchConfig;
use crate::error::{AppError, AppResult, ValidationError};

use super::client::BlockingFetchPort;
use super::timing::{FetchRun, TimingRecord};
use super::user_agent::pick_user_agent;

/// Fetches every target one after another on the calling thread.
#[derive(Debug)]
pub struct SequentialFetcher<P> {
    port: P,
}

impl<P> SequentialFetcher<P>
where
    P: BlockingFetchPort,
{
    #[must_use]
    pub const fn new(port: P) -> Self {
        Self { port }
    }

    /// Runs the sequential fetch with a thread-local RNG.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; the remaining targets are not fetched.
    pub fn run(&self, config: &FetchConfig) -> AppResult<FetchRun> {
        self.run_with_rng(config, &mut rand::thread_rng())
    }

    /// Runs the sequential fetch, drawing user agents from `rng`.
    ///
    /// Each per-URL duration covers opening the client and the GET. The total
    /// spans the whole loop, so it includes setup and teardown between fetches.
    ///
    /// # Errors
    ///
    /// Returns the first fetch error; the remaining targets are not fetched.
    pub fn run_with_rng<R>(&self, config: &FetchConfig, rng: &mut R) -> AppResult<FetchRun>
    where
        R: Rng + ?Sized,
    {
        let targets = config.targets();
        let mut timings = TimingRecord::with_capacity(targets.len());
        let start = Instant::now();

        for url in targets {
            let user_agent = pick_user_agent(config.user_agents(), rng)
                .ok_or_else(|| AppError::validation(ValidationError::EmptyUserAgentPool))?;
            debug!("Fetching {} (User-Agent: {})", url, user_agent);

            let url_start = Instant::now();
            let outcome = self.port.fetch(url, user_agent)?;
            let elapsed = url_start.elapsed();

            debug!("Fetched {} with status {} in {:?}", url, outcome.status, elapsed);
            timings.record(url, elapsed);
        }

        Ok(FetchRun {
            timings,
            total: start.elapsed(),
        })
    }
}
