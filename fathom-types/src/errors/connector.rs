use crate::errors::internal::BoxedError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConnectorError {
    #[error("{0} is missing in connector configuration")]
    MissingConfiguration(&'static str),

    #[error("Failed to fetch data: {0}")]
    Fetch(#[from] FetchError),

    #[error("Response body is not valid JSON: {0}")]
    InvalidResponse(#[source] serde_json::Error),

    #[error("Response body has no `rows` array")]
    MissingRows,

    #[error("Row {index} is not a valid page stat record: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    InternalError(#[from] BoxedError),
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: BoxedError,
    },

    #[error("Request to {url} returned status {status}")]
    Status { url: String, status: u16 },

    #[error("Failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: BoxedError,
    },
}
