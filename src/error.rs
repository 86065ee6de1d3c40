//! Client Errors
//!
//! Every failure originates in the remote-access layer.

use thiserror::Error;

/// Remote-access error variants.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error on {url}: {message}")]
    Network { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Http { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Parse { url: String, message: String },

    #[error("todo id {id:?} cannot be addressed as a single path segment")]
    InvalidId { id: String },
}

impl ApiError {
    pub fn network(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Network {
            url: url.into(),
            message: err.to_string(),
        }
    }

    pub fn parse(url: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Parse {
            url: url.into(),
            message: err.to_string(),
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Invalid client configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid API base URL {url:?}: {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("unknown log level {0:?}")]
    InvalidLogLevel(String),
}
