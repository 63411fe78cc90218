//! Travel-time lookup error types.

/// Errors from fetching a travel time.
#[derive(Debug, thiserror::Error)]
pub enum TravelCostError {
    /// The request URL could not be built
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// The provider could not be reached or answered with a non-200 status
    #[error("network error: {0}")]
    Network(#[from] NetworkError),

    /// The provider answered 200 but the body was unusable
    #[error("invalid response: {0}")]
    InvalidResponse(#[from] ResponseError),
}

/// Transport-level failures.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// Request failed or the body could not be read
    #[error("HTTP error: {0}")]
    Transport(#[source] reqwest::Error),

    /// Any status other than 200 OK
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
}

impl From<reqwest::Error> for NetworkError {
    /// Drops the request URL, which carries the API key in its query.
    fn from(e: reqwest::Error) -> Self {
        NetworkError::Transport(e.without_url())
    }
}

/// Problems with a 200 response body.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResponseError {
    /// Body did not match the expected JSON shape
    #[error("JSON parse error: {message}")]
    Decode { message: String, body: String },

    /// Top-level status was not `OK`
    #[error("provider status {status}{}", detail_suffix(.message))]
    Status {
        status: String,
        message: Option<String>,
    },

    /// No rows, or the first row has no elements
    #[error("response contains no route elements")]
    NoElements,

    /// First element status was not `OK` (e.g. `NOT_FOUND`, `ZERO_RESULTS`)
    #[error("route status {0}")]
    ElementStatus(String),

    /// First element has no duration
    #[error("route has no duration")]
    MissingDuration,
}

fn detail_suffix(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}
