//! Blog configuration - database path, bind address and request timeout
//!
//! Configuration is loaded from environment variables:
//! - `BLOG_DATABASE`: SQLite database file (default: database.db)
//! - `BLOG_BIND`: listen address (default: 127.0.0.1:5000)
//! - `BLOG_REQUEST_TIMEOUT`: per-request timeout in seconds (default: 30)

use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_DATABASE: &str = "database.db";
const DEFAULT_BIND: SocketAddr = SocketAddr::new(
    std::net::IpAddr::V4(std::net::Ipv4Addr::LOCALHOST),
    5000,
);
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration error
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: '{value}'")]
    Invalid { var: &'static str, value: String },
}

/// Blog configuration, built once at startup and handed to the server
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogConfig {
    /// SQLite database file holding the `posts` table
    pub database_path: PathBuf,
    /// Address the HTTP server listens on
    pub bind_addr: SocketAddr,
    /// Requests running longer than this are aborted
    pub request_timeout_secs: u64,
}

impl BlogConfig {
    /// Create config from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Create config from an arbitrary variable source (for testing)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(path) = lookup("BLOG_DATABASE") {
            config.database_path = PathBuf::from(path);
        }

        if let Some(value) = lookup("BLOG_BIND") {
            config.bind_addr = value.parse().map_err(|_| ConfigError::Invalid {
                var: "BLOG_BIND",
                value: value.clone(),
            })?;
        }

        if let Some(value) = lookup("BLOG_REQUEST_TIMEOUT") {
            // zero would time out every request
            config.request_timeout_secs = value
                .parse()
                .ok()
                .filter(|secs: &u64| *secs > 0)
                .ok_or_else(|| ConfigError::Invalid {
                    var: "BLOG_REQUEST_TIMEOUT",
                    value: value.clone(),
                })?;
        }

        Ok(config)
    }

    /// Create config for an explicit database file with default server settings
    pub fn with_database(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            ..Self::default()
        }
    }
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            database_path: PathBuf::from(DEFAULT_DATABASE),
            bind_addr: DEFAULT_BIND,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |var| map.get(var).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        let config = BlogConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.database_path, PathBuf::from("database.db"));
        assert_eq!(config.bind_addr.port(), 5000);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn reads_overrides() {
        let config = BlogConfig::from_lookup(lookup(&[
            ("BLOG_DATABASE", "/var/lib/blog/posts.db"),
            ("BLOG_BIND", "0.0.0.0:8080"),
            ("BLOG_REQUEST_TIMEOUT", "5"),
        ]))
        .unwrap();

        assert_eq!(config.database_path, PathBuf::from("/var/lib/blog/posts.db"));
        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(config.request_timeout_secs, 5);
    }

    #[test]
    fn rejects_zero_timeout() {
        let err =
            BlogConfig::from_lookup(lookup(&[("BLOG_REQUEST_TIMEOUT", "0")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid BLOG_REQUEST_TIMEOUT: '0'");
    }

    #[test]
    fn rejects_bad_bind_address() {
        let err = BlogConfig::from_lookup(lookup(&[("BLOG_BIND", "not-an-addr")])).unwrap_err();
        assert_eq!(err.to_string(), "invalid BLOG_BIND: 'not-an-addr'");
    }
}
