//! Chat client errors.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Invalid token")]
    InvalidToken,

    #[error("Send failed: {0}")]
    SendFailed(String),
}
