/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Error types for the Bluesky harvester

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// Transport level failure (connection, timeout, TLS, body decoding)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    /// The server answered 401
    #[error("unauthorized")]
    Unauthorized,
    /// The server answered 429
    #[error("rate limit exceeded")]
    RateLimitExceeded,
    /// The server answered 404
    #[error("not found")]
    NotFound,
    /// The server rejected the request parameters (400)
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Any other non-success status
    #[error("unexpected status code: {0}")]
    Unexpected(StatusCode),
    /// Caller supplied an invalid value
    #[error("invalid input: {0}")]
    InvalidInput(String),
}

/// Convenience alias used across the crate
pub type AppResult<T> = Result<T, AppError>;
