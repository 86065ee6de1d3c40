//! Client Configuration
//!
//! Values are baked in at build time (`TODO_API_BASE_URL=... trunk build`).

use log::LevelFilter;
use reqwest::Url;

use crate::error::{ApiError, ApiResult, ConfigError};

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: &str = "info";

const TODOS_PATH: &str = "todos";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    base_url: Url,
    pub log_level: LevelFilter,
}

impl ClientConfig {
    /// Build from the compile-time environment, falling back to defaults
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::new(
            option_env!("TODO_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL),
            option_env!("TODO_LOG_LEVEL").unwrap_or(DEFAULT_LOG_LEVEL),
        )
    }

    pub fn new(base_url: &str, log_level: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            base_url: parse_base_url(base_url)?,
            log_level: log_level
                .parse()
                .map_err(|_| ConfigError::InvalidLogLevel(log_level.to_string()))?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `{base}/todos`
    pub fn collection_url(&self) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(TODOS_PATH);
        }
        url
    }

    /// `{base}/todos/{id}`, with the id encoded as a single path segment
    ///
    /// Empty and dot-only ids are rejected: URL parsing resolves `.` and `..`
    /// (escaped or not) against the path, which would address the collection.
    pub fn item_url(&self, id: &str) -> ApiResult<Url> {
        if matches!(id, "" | "." | "..") {
            return Err(ApiError::InvalidId { id: id.to_string() });
        }
        let mut url = self.collection_url();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.push(id);
        }
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidBaseUrl {
        url: raw.to_string(),
        reason,
    };
    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(format!("unsupported scheme {}", url.scheme())));
    }
    if url.cannot_be_a_base() {
        return Err(invalid("not a base URL".to_string()));
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(DEFAULT_API_BASE_URL, DEFAULT_LOG_LEVEL).unwrap();
        assert_eq!(config.collection_url().as_str(), "http://localhost:3000/todos");
        assert_eq!(config.log_level, LevelFilter::Info);
    }

    #[test]
    fn test_item_url() {
        let config = ClientConfig::new("http://127.0.0.1:8080/", "debug").unwrap();
        assert_eq!(config.item_url("42").unwrap().as_str(), "http://127.0.0.1:8080/todos/42");
        assert_eq!(config.item_url("a/b").unwrap().as_str(), "http://127.0.0.1:8080/todos/a%2Fb");
        assert_eq!(config.item_url("...").unwrap().as_str(), "http://127.0.0.1:8080/todos/...");
    }

    #[test]
    fn test_item_url_never_addresses_collection() {
        let config = ClientConfig::new(DEFAULT_API_BASE_URL, DEFAULT_LOG_LEVEL).unwrap();
        for id in [".", "..", ""] {
            assert!(
                matches!(config.item_url(id), Err(ApiError::InvalidId { id: ref got }) if got == id),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_base_path_is_kept() {
        let config = ClientConfig::new("https://example.com/api", "info").unwrap();
        assert_eq!(config.collection_url().as_str(), "https://example.com/api/todos");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(matches!(
            ClientConfig::new("localhost:3000", "info"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new("ftp://example.com", "info"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ClientConfig::new(DEFAULT_API_BASE_URL, "loud"),
            Err(ConfigError::InvalidLogLevel(_))
        ));
    }
}
