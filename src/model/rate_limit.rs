/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Server side rate limit descriptor
//!
//! Bluesky reports its quota on every XRPC response through the
//! `RateLimit-Limit`, `RateLimit-Remaining` and `RateLimit-Reset` headers.
//! The reset value is a unix timestamp in seconds.

use chrono::{DateTime, Utc};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Header carrying the total quota of the current window
pub const HEADER_LIMIT: &str = "ratelimit-limit";
/// Header carrying the number of calls left in the current window
pub const HEADER_REMAINING: &str = "ratelimit-remaining";
/// Header carrying the unix time at which the window resets
pub const HEADER_RESET: &str = "ratelimit-reset";

/// Latest rate limit state observed from the server
#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitStatus {
    /// Total number of calls allowed in the window
    pub limit: u32,
    /// Calls left in the current window
    pub remaining: u32,
    /// Instant at which the window resets
    pub reset_at: DateTime<Utc>,
}

impl RateLimitStatus {
    /// Creates a status from explicit values
    #[must_use]
    pub fn new(limit: u32, remaining: u32, reset_at: DateTime<Utc>) -> Self {
        Self {
            limit,
            remaining,
            reset_at,
        }
    }

    /// Reads the three rate limit headers from a response
    ///
    /// # Returns
    /// * `Some(status)` when all three headers are present and numeric
    /// * `None` otherwise
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let read = |name: &str| -> Option<i64> {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<i64>().ok())
        };

        let limit = u32::try_from(read(HEADER_LIMIT)?).ok()?;
        let remaining = u32::try_from(read(HEADER_REMAINING)?).ok()?;
        let reset_at = DateTime::<Utc>::from_timestamp(read(HEADER_RESET)?, 0)?;

        Some(Self::new(limit, remaining, reset_at))
    }

    /// Whether the remaining quota is at or below `tolerance`
    #[must_use]
    pub fn is_near_exhaustion(&self, tolerance: u32) -> bool {
        self.remaining <= tolerance
    }

    /// Time left until the window resets, `max(0, reset_at - now)`
    #[must_use]
    pub fn time_until_reset(&self, now: DateTime<Utc>) -> Duration {
        (self.reset_at - now).to_std().unwrap_or(Duration::ZERO)
    }
}
