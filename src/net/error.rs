#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure taxonomy for API calls.
///
/// `Status` carries the server's optional `message` so pages can show it
/// verbatim; `is_auth` distinguishes credential failures (which invalidate
/// the session on profile fetch) from transient network/server failures
/// (which are retryable and leave the session alone).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("request failed with status {status}")]
    Status { status: u16, message: Option<String> },
    #[error("network error: {0}")]
    Network(String),
    #[error("response body missing required fields")]
    InvalidResponse,
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// True for HTTP 401/403 — the token is expired, invalid, or missing.
    pub fn is_auth(&self) -> bool {
        matches!(
            self,
            Self::Status {
                status: 401 | 403,
                ..
            }
        )
    }

    /// The server-provided message when one exists, otherwise the given
    /// per-action fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}
