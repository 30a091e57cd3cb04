use std::time::Duration;

use clap::Parser;

use super::FetchConfig;
use super::targets::{DEFAULT_TARGETS, USER_AGENTS};
use crate::args::FetchArgs;
use crate::error::{AppError, AppResult, ValidationError};

static EMPTY_POOL: [&str; 0] = [];

fn parse(argv: &[&str]) -> AppResult<FetchArgs> {
    Ok(FetchArgs::try_parse_from(argv)?)
}

#[test]
fn defaults_use_builtin_targets_in_order() -> AppResult<()> {
    let config = FetchConfig::from_args(&parse(&["urlfetch", "requests"])?)?;
    if config.targets() != DEFAULT_TARGETS.as_slice() {
        return Err(AppError::validation(format!(
            "Unexpected targets: {:?}",
            config.targets()
        )));
    }
    if config.user_agents().len() != USER_AGENTS.len() {
        return Err(AppError::validation("Unexpected user-agent pool"));
    }
    if config.request_timeout().is_some() {
        return Err(AppError::validation("Expected no timeout by default"));
    }
    Ok(())
}

#[test]
fn url_overrides_replace_builtin_targets() -> AppResult<()> {
    let config = FetchConfig::from_args(&parse(&[
        "urlfetch",
        "aiohttp",
        "-u",
        "http://127.0.0.1:1/a",
        "--timeout",
        "2s",
    ])?)?;
    if config.targets() != ["http://127.0.0.1:1/a"].as_slice() {
        return Err(AppError::validation(format!(
            "Unexpected targets: {:?}",
            config.targets()
        )));
    }
    if config.request_timeout() != Some(Duration::from_secs(2)) {
        return Err(AppError::validation("Unexpected timeout"));
    }
    Ok(())
}

#[test]
fn duplicate_targets_keep_first_occurrence() -> AppResult<()> {
    let config = FetchConfig::new(
        ["http://a.test", "http://b.test", "http://a.test"],
        &USER_AGENTS,
        None,
    )?;
    if config.targets() != ["http://a.test", "http://b.test"].as_slice() {
        return Err(AppError::validation(format!(
            "Unexpected targets: {:?}",
            config.targets()
        )));
    }
    Ok(())
}

#[test]
fn empty_target_list_is_rejected() -> AppResult<()> {
    match FetchConfig::new(Vec::<String>::new(), &USER_AGENTS, None) {
        Err(AppError::Validation(ValidationError::EmptyTargetList)) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected empty target list error")),
    }
}

#[test]
fn empty_user_agent_pool_is_rejected() -> AppResult<()> {
    match FetchConfig::new(["http://a.test"], &EMPTY_POOL, None) {
        Err(AppError::Validation(ValidationError::EmptyUserAgentPool)) => Ok(()),
        Err(err) => Err(AppError::validation(format!("Unexpected error: {}", err))),
        Ok(_) => Err(AppError::validation("Expected empty pool error")),
    }
}
