use std::io;

use thiserror::Error;

/// Errors originating from the FileDeck HTTP client.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("request to {url} failed with status {status}")]
    Status { status: u16, url: String },

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid request url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("invalid file name: {0:?}")]
    InvalidName(String),

    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ClientError>;
