use efile_core::{InvalidQuery, MalformedRecord};
use thiserror::Error;

/// The search form could not be reached or its response could not be read.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{0}")]
    Other(String),
}

#[derive(Error, Debug)]
pub enum SearchError {
    #[error("invalid search: {0}")]
    InvalidQuery(#[from] InvalidQuery),
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    #[error("malformed result row: {0}")]
    Malformed(#[from] MalformedRecord),
}
