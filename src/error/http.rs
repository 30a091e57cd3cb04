use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Failed to build HTTP client: {source}")]
    BuildClientFailed {
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' timed out: {source}")]
    Timeout {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("Request to '{url}' returned unexpected status {status}.")]
    UnexpectedStatus { url: String, status: StatusCode },
    #[cfg(test)]
    #[error("Simulated failure for '{url}'.")]
    Simulated { url: String },
}

impl HttpError {
    /// Classifies a reqwest send error for the given URL.
    pub(crate) fn from_send(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout {
                url: url.to_owned(),
                source,
            }
        } else {
            Self::RequestFailed {
                url: url.to_owned(),
                source,
            }
        }
    }
}
