use http::StatusCode;
use thiserror::Error;

/// Error returned by a DNS [`Connection`](super::Connection).
#[derive(Debug, Error)]
pub enum ConnectionError {
    /// The configured base URL and path did not form a valid URL.
    #[error("invalid api url: {0}")]
    Url(#[from] url::ParseError),
    /// The request could not be assembled.
    #[error("invalid request: {0}")]
    Http(#[from] http::Error),
    /// The transport failed to deliver the request.
    #[error("transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),
    /// The API answered with a non-success status.
    #[error("request failed with status {status}")]
    Status {
        /// Response status.
        status: StatusCode,
        /// Raw response body.
        body: Vec<u8>,
    },
    /// The response body was not valid JSON.
    #[error("invalid json response: {0}")]
    Json(#[from] serde_json::Error),
}
