use crate::app::{run_concurrent, run_sequential};
use crate::args::{FetchArgs, FetchType};
use crate::config::FetchConfig;
use crate::error::AppResult;

#[derive(Debug)]
pub(crate) enum RunPlan {
    Sequential(FetchConfig),
    Concurrent(FetchConfig),
}

pub(crate) fn build_plan(args: &FetchArgs) -> AppResult<RunPlan> {
    let config = FetchConfig::from_args(args)?;
    tracing::debug!(
        "Resolved {} target(s), timeout {:?}",
        config.targets().len(),
        config.request_timeout()
    );
    Ok(match args.fetch_type {
        FetchType::Requests => RunPlan::Sequential(config),
        FetchType::Aiohttp => RunPlan::Concurrent(config),
    })
}

pub(crate) fn execute_plan(plan: RunPlan) -> AppResult<()> {
    match plan {
        RunPlan::Sequential(config) => run_sequential(&config).map(drop),
        RunPlan::Concurrent(config) => run_concurrent(&config).map(drop),
    }
}
