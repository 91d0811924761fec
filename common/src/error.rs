use std::num::ParseIntError;

/// Shown when a failure carries no text of its own.
pub const FALLBACK_MESSAGE: &str = "Request failed";

/// Why a submission did not produce a result.
///
/// All variants end up in the single error slot of the page shell, see
/// [`SubmitError::user_message`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    /// The service answered with a non-2xx status. The body is not inspected.
    #[error("HTTP {0}")]
    Status(u16),
    /// The request never completed (connect, DNS, timeout, broken stream).
    #[error("{0}")]
    Transport(String),
    /// The body of a 2xx reply was not a valid diagnosis response.
    #[error("{0}")]
    Decode(String),
}

impl SubmitError {
    pub fn user_message(&self) -> String {
        let message = self.to_string();
        if message.trim().is_empty() {
            FALLBACK_MESSAGE.to_string()
        } else {
            message
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("base URL cannot be empty")]
    EmptyBaseUrl,
    #[error("base URL must start with http:// or https://, got '{0}'")]
    UnsupportedScheme(String),
    #[error("invalid timeout '{value}': {source}")]
    InvalidTimeout {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("timeout must be at least one second")]
    ZeroTimeout,
}
