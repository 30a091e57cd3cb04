use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::{Rng, SeedableRng};
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::config::FetchConfig;
use crate::error::{AppError, AppResult, ValidationError};

use super::client::{AsyncFetchPort, FetchOutcome};
use super::timing::{FetchRun, TimingRecord};
use super::user_agent::pick_user_agent;

type TaskOutput = (usize, AppResult<(FetchOutcome, Duration)>);

/// Spawns one task per target and waits for all of them.
///
/// Every task writes only to its own slot; slots are merged into the timing
/// record after the join, so no map is shared between tasks.
#[derive(Clone)]
pub struct ConcurrentFetcher {
    port: Arc<dyn AsyncFetchPort>,
}

impl ConcurrentFetcher {
    #[must_use]
    pub const fn new(port: Arc<dyn AsyncFetchPort>) -> Self {
        Self { port }
    }

    /// Runs the concurrent fetch with an entropy-seeded RNG.
    ///
    /// # Errors
    ///
    /// Returns the first failure observed; tasks still in flight are aborted.
    pub async fn run(&self, config: &FetchConfig) -> AppResult<FetchRun> {
        let mut rng = rand::rngs::StdRng::from_entropy();
        self.run_with_rng(config, &mut rng).await
    }

    /// Runs the concurrent fetch, drawing one user agent per task from `rng`.
    ///
    /// Must be awaited inside a tokio runtime. The total spans from before the
    /// first spawn until the last task has been joined.
    ///
    /// # Errors
    ///
    /// Returns the first failure observed (fetch error or task join error);
    /// tasks still in flight are aborted.
    pub async fn run_with_rng<R>(&self, config: &FetchConfig, rng: &mut R) -> AppResult<FetchRun>
    where
        R: Rng + ?Sized,
    {
        let targets = config.targets();
        let start = Instant::now();

        let mut tasks: JoinSet<TaskOutput> = JoinSet::new();
        for (index, url) in targets.iter().enumerate() {
            let user_agent = pick_user_agent(config.user_agents(), rng)
                .ok_or_else(|| AppError::validation(ValidationError::EmptyUserAgentPool))?;
            let port = Arc::clone(&self.port);
            let url = url.clone();
            tasks.spawn(async move {
                debug!("Fetching {} (User-Agent: {})", url, user_agent);
                let task_start = Instant::now();
                let result = port
                    .fetch(&url, user_agent)
                    .await
                    .map(|outcome| (outcome, task_start.elapsed()));
                (index, result)
            });
        }

        let mut slots: Vec<Option<Duration>> = vec![None; targets.len()];
        while let Some(joined) = tasks.join_next().await {
            let (index, result) = match joined {
                Ok(output) => output,
                Err(err) => {
                    abort_pending(&mut tasks);
                    return Err(AppError::from(err));
                }
            };
            let (outcome, elapsed) = match result {
                Ok(done) => done,
                Err(err) => {
                    abort_pending(&mut tasks);
                    return Err(err);
                }
            };
            if let Some(slot) = slots.get_mut(index) {
                debug!(
                    "Task {} finished with status {} in {:?}",
                    index, outcome.status, elapsed
                );
                *slot = Some(elapsed);
            }
        }
        let total = start.elapsed();

        let mut timings = TimingRecord::with_capacity(targets.len());
        for (url, slot) in targets.iter().zip(slots) {
            if let Some(elapsed) = slot {
                timings.record(url, elapsed);
            }
        }

        Ok(FetchRun { timings, total })
    }
}

fn abort_pending(tasks: &mut JoinSet<TaskOutput>) {
    if !tasks.is_empty() {
        warn!("Aborting {} in-flight fetch task(s)", tasks.len());
    }
    tasks.abort_all();
}
