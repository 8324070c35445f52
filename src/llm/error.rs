//! Failure taxonomy for the remote generation endpoint.

use reqwest::StatusCode;

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("No API key configured for the generation endpoint")]
    MissingApiKey,

    #[error("Network error: {reason}")]
    Transport { reason: String },

    #[error("Timeout after {seconds} seconds")]
    Timeout { seconds: u64 },

    #[error("HTTP error {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse API response: {reason}")]
    Malformed { reason: String },

    #[error("Invalid configuration: {reason}")]
    Config { reason: String },

    #[error("Invalid persona definition: {reason}")]
    Persona { reason: String },
}

pub type GatewayResult<T> = Result<T, GatewayError>;

impl GatewayError {
    /// Maps a transport failure, dropping the URL so the key query parameter never
    /// ends up in a log line.
    pub(crate) fn from_reqwest(e: reqwest::Error, timeout_seconds: u64) -> Self {
        let e = e.without_url();
        if e.is_timeout() {
            GatewayError::Timeout {
                seconds: timeout_seconds,
            }
        } else if e.is_decode() {
            GatewayError::Malformed {
                reason: e.to_string(),
            }
        } else if e.is_connect() {
            GatewayError::Transport {
                reason: format!("unable to reach the API: {}", e),
            }
        } else {
            GatewayError::Transport {
                reason: e.to_string(),
            }
        }
    }
}
