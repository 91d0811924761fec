//! Runtime settings, resolved once at startup and passed down by reference.
//!
//! Precedence is command line, then environment (including a `.env` file),
//! then built-in defaults.

use std::time::Duration;

use tracing::debug;

use crate::error::ConfigError;

/// Where the development backend listens.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const ENV_BASE_URL: &str = "MEDASSIST_URL";
pub const ENV_TIMEOUT_SECS: &str = "MEDASSIST_TIMEOUT_SECS";

pub const DIAGNOSE_PATH: &str = "/diagnose";
pub const HEALTH_PATH: &str = "/health";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Root of the diagnostic service, without a trailing slash.
    pub base_url: String,
    /// Request timeout. `None` waits as long as the service needs.
    pub timeout: Option<Duration>,
    /// Output reduction, one step per `-q`.
    pub quiet: u8,
    pub no_banner: bool,
}

/// Values given on the command line. `None` means "not given".
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
    pub quiet: u8,
    pub no_banner: bool,
}

impl Config {
    /// Loads `.env` if present, then resolves against the process environment.
    pub fn from_env(overrides: Overrides) -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded environment from {}", path.display()),
            Err(e) if e.not_found() => {}
            Err(e) => debug!("Ignoring unreadable .env file: {e}"),
        }
        Self::resolve(overrides, |key| std::env::var(key).ok())
    }

    /// Resolves settings with `lookup` standing in for the environment.
    pub fn resolve<F>(overrides: Overrides, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = overrides
            .base_url
            .or_else(|| lookup(ENV_BASE_URL))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&raw_url)?;

        let timeout_secs = match overrides.timeout_secs {
            Some(secs) => Some(secs),
            None => lookup(ENV_TIMEOUT_SECS)
                .map(|value| {
                    value
                        .trim()
                        .parse::<u64>()
                        .map_err(|source| ConfigError::InvalidTimeout { value, source })
                })
                .transpose()?,
        };
        let timeout = match timeout_secs {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Some(Duration::from_secs(secs)),
            None => None,
        };

        Ok(Self {
            base_url,
            timeout,
            quiet: overrides.quiet,
            no_banner: overrides.no_banner,
        })
    }

    pub fn diagnose_url(&self) -> String {
        format!("{}{}", self.base_url, DIAGNOSE_PATH)
    }

    pub fn health_url(&self) -> String {
        format!("{}{}", self.base_url, HEALTH_PATH)
    }
}

fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::EmptyBaseUrl);
    }

    let lower = trimmed.to_ascii_lowercase();
    if !lower.starts_with("http://") && !lower.starts_with("https://") {
        return Err(ConfigError::UnsupportedScheme(trimmed.to_string()));
    }

    Ok(trimmed.to_string())
}
