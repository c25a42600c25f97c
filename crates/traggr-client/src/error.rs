//! Error types for the aggregation API client.

/// Client errors. Each call makes exactly one request — the adapter never
/// retries — so there is no retryable/terminal split here.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured base URL does not parse or has an unusable scheme.
    #[error("invalid api url {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The service answered with a non-success status.
    #[error("aggregation api returned {status}: {body}")]
    Status { status: u16, body: String },

    /// The request never produced a response.
    #[error("network error: {message}")]
    Network { message: String },
}

pub type ClientResult<T> = Result<T, ClientError>;

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Network {
            message: err.to_string(),
        }
    }
}
