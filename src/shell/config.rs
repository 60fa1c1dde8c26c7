// Runtime configuration read from the environment.
//
// A `.env` file is honoured outside of tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: String,
    /// Upper bound on a document store read before the catalog falls back
    /// to the seed set.
    pub remote_fetch_timeout: Duration,
    /// Enables the mock admin identity and the per-client test mode.
    pub allow_mock_identity: bool,
    pub seed_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_address: SocketAddr::from(([0, 0, 0, 0], 8080)),
            log_level: "info".to_string(),
            remote_fetch_timeout: Duration::from_millis(5000),
            allow_mock_identity: false,
            seed_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any variable source. Unset variables
    /// take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let bind_address = match lookup("BIND_ADDRESS") {
            Some(raw) => raw
                .parse::<SocketAddr>()
                .map_err(|e| ConfigError::InvalidValue("BIND_ADDRESS".into(), e.to_string()))?,
            None => defaults.bind_address,
        };

        let log_level = lookup("RUST_LOG").unwrap_or(defaults.log_level);
        EnvFilter::try_new(&log_level).map_err(|e| {
            ConfigError::InvalidValue("RUST_LOG".into(), format!("'{log_level}': {e}"))
        })?;

        let remote_fetch_timeout = match lookup("REMOTE_FETCH_TIMEOUT_MS") {
            Some(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    ConfigError::InvalidValue("REMOTE_FETCH_TIMEOUT_MS".into(), e.to_string())
                })?,
            None => defaults.remote_fetch_timeout,
        };

        let allow_mock_identity = match lookup("ALLOW_MOCK_IDENTITY") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                ConfigError::InvalidValue(
                    "ALLOW_MOCK_IDENTITY".into(),
                    format!("'{raw}' is not a boolean"),
                )
            })?,
            None => defaults.allow_mock_identity,
        };

        let seed_path = lookup("SEED_PATH")
            .filter(|raw| !raw.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            bind_address,
            log_level,
            remote_fetch_timeout,
            allow_mock_identity,
            seed_path,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
