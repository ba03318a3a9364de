use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The caller's request cannot be served as sent. Detected before any outbound call.
    #[error("{0}")]
    InvalidRequest(String),

    /// Transport failure, timeout or non-success status from the nutrition API.
    #[error("nutrition service unavailable: {0}")]
    UpstreamUnavailable(String),

    #[error("unexpected response from nutrition service: {0}")]
    MalformedUpstreamPayload(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}
