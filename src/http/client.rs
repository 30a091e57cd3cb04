use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::error::{AppError, AppResult, HttpError};

/// What a fetch keeps from the response. The body is never read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchOutcome {
    pub status: StatusCode,
}

/// Blocking HTTP seam used by the sequential path.
pub trait BlockingFetchPort {
    /// Performs one GET with the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built, the request fails or
    /// the response status is not a success.
    fn fetch(&self, url: &str, user_agent: &str) -> AppResult<FetchOutcome>;
}

/// Async HTTP seam used by the concurrent path; shared across spawned tasks.
#[async_trait]
pub trait AsyncFetchPort: Send + Sync {
    /// Performs one GET with the given `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns an error when the client cannot be built, the request fails or
    /// the response status is not a success.
    async fn fetch(&self, url: &str, user_agent: &str) -> AppResult<FetchOutcome>;
}

/// Opens a fresh blocking client per fetch and drops it when the fetch returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestBlockingPort {
    request_timeout: Option<Duration>,
}

impl ReqwestBlockingPort {
    #[must_use]
    pub const fn new(request_timeout: Option<Duration>) -> Self {
        Self { request_timeout }
    }
}

impl BlockingFetchPort for ReqwestBlockingPort {
    fn fetch(&self, url: &str, user_agent: &str) -> AppResult<FetchOutcome> {
        let mut builder = reqwest::blocking::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

        let response = client
            .get(url)
            .send()
            .map_err(|err| AppError::http(HttpError::from_send(url, err)))?;
        check_status(url, response.status())
    }
}

/// Builds one async client per fetch so each task carries its own
/// connection and header state.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReqwestAsyncPort {
    request_timeout: Option<Duration>,
}

impl ReqwestAsyncPort {
    #[must_use]
    pub const fn new(request_timeout: Option<Duration>) -> Self {
        Self { request_timeout }
    }
}

#[async_trait]
impl AsyncFetchPort for ReqwestAsyncPort {
    async fn fetch(&self, url: &str, user_agent: &str) -> AppResult<FetchOutcome> {
        let mut builder = reqwest::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;

        let response = client
            .get(url)
            .send()
            .await
            .map_err(|err| AppError::http(HttpError::from_send(url, err)))?;
        check_status(url, response.status())
    }
}

fn check_status(url: &str, status: StatusCode) -> AppResult<FetchOutcome> {
    if status.is_success() {
        Ok(FetchOutcome { status })
    } else {
        Err(AppError::http(HttpError::UnexpectedStatus {
            url: url.to_owned(),
            status,
        }))
    }
}
