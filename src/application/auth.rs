/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Session state for the Bluesky API
//!
//! A [`Session`] is created by a successful login and lives for the rest of the
//! process. Besides the tokens it carries the last rate limit status reported by
//! the server, which the transport overwrites after every call.

use crate::model::rate_limit::RateLimitStatus;
use crate::model::responses::CreateSessionResponse;
use chrono::{DateTime, Utc};

/// Session information for authenticated requests
#[derive(Debug, Clone)]
pub struct Session {
    /// Handle used to log in, e.g. `alice.bsky.social`
    pub handle: String,
    /// DID of the account
    pub did: String,
    /// Bearer token sent with every request
    pub access_jwt: String,
    /// Token used to obtain a new access token
    pub refresh_jwt: String,
    /// When the session was created
    pub created_at: DateTime<Utc>,
    rate_limit: Option<RateLimitStatus>,
}

impl Session {
    /// Creates a session without any rate limit information
    pub fn new(
        handle: impl Into<String>,
        did: impl Into<String>,
        access_jwt: impl Into<String>,
        refresh_jwt: impl Into<String>,
    ) -> Self {
        Self {
            handle: handle.into(),
            did: did.into(),
            access_jwt: access_jwt.into(),
            refresh_jwt: refresh_jwt.into(),
            created_at: Utc::now(),
            rate_limit: None,
        }
    }

    /// Last rate limit status reported by the server, if any
    #[must_use]
    pub fn rate_limit(&self) -> Option<RateLimitStatus> {
        self.rate_limit
    }

    /// Records the rate limit status of the latest response
    ///
    /// A response without rate limit headers leaves the previous status in place.
    pub fn record_rate_limit(&mut self, status: Option<RateLimitStatus>) {
        if status.is_some() {
            self.rate_limit = status;
        }
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.access_jwt)
    }
}

impl From<CreateSessionResponse> for Session {
    fn from(v: CreateSessionResponse) -> Self {
        Session::new(v.handle, v.did, v.access_jwt, v.refresh_jwt)
    }
}

/// Builds a full handle from a screen name, `alice` + `bsky.social` -> `alice.bsky.social`
#[must_use]
pub fn handle_for(screen_name: &str, suffix: &str) -> String {
    format!("{}.{}", screen_name, suffix.trim_start_matches('.'))
}
