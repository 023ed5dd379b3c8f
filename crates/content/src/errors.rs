//! # Error Definitions

use thiserror::Error;

/// Errors raised by the internal fetch layer.
///
/// These never cross the public accessor boundary: every accessor logs the
/// condition and returns its empty value, so rendering surfaces see "no
/// content" rather than a failure they would have to handle.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to reach the content API: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("Content API returned an error: {0}")]
    Api(String),
    #[error("Failed to decode the content API response: {0}")]
    Decode(#[from] serde_json::Error),
}
