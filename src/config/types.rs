use std::collections::HashSet;
use std::time::Duration;

use crate::args::FetchArgs;
use crate::error::{AppError, AppResult, ValidationError};

use super::targets::{DEFAULT_TARGETS, USER_AGENTS};

/// Immutable run configuration shared by both fetch paths.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    targets: Vec<String>,
    user_agents: &'static [&'static str],
    request_timeout: Option<Duration>,
}

impl FetchConfig {
    /// Builds a config from explicit targets and a user-agent pool.
    ///
    /// Duplicate targets are dropped, keeping the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns an error when the target list or the user-agent pool is empty.
    pub fn new<I, S>(
        targets: I,
        user_agents: &'static [&'static str],
        request_timeout: Option<Duration>,
    ) -> AppResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for target in targets {
            let target = target.into();
            if seen.insert(target.clone()) {
                unique.push(target);
            } else {
                tracing::debug!("Dropping duplicate target {}", target);
            }
        }

        if unique.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyTargetList));
        }
        if user_agents.is_empty() {
            return Err(AppError::validation(ValidationError::EmptyUserAgentPool));
        }

        Ok(Self {
            targets: unique,
            user_agents,
            request_timeout,
        })
    }

    /// Resolves the run configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the resolved target list is empty.
    pub fn from_args(args: &FetchArgs) -> AppResult<Self> {
        if args.urls.is_empty() {
            Self::new(DEFAULT_TARGETS, &USER_AGENTS, args.request_timeout)
        } else {
            Self::new(args.urls.iter().cloned(), &USER_AGENTS, args.request_timeout)
        }
    }

    #[must_use]
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    #[must_use]
    pub const fn user_agents(&self) -> &'static [&'static str] {
        self.user_agents
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout
    }
}
