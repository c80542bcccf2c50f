use thiserror::Error;

/// Failure modes of a feed fetch. Filtering has no error type: it is total
/// over any record sequence and spec, and an empty match is an ordinary
/// empty vec, not an error.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, DNS, timeout, or body-read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The feed answered with a non-success status code.
    #[error("feed returned HTTP {0}")]
    HttpStatus(reqwest::StatusCode),

    /// The response body was not a parsable feature collection.
    #[error("feed parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, FetchError>;
