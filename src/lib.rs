//! # bsky-harvester
//!
//! Rate limit aware, paginated retrieval of posts, followers, follows and search
//! results from the Bluesky (AT Protocol) XRPC API.
//!
//! Every retrieval pages through a remote collection with a cursor. Before each
//! call the session's last known rate limit is checked, and when the remaining
//! quota is at or below a tolerance the fetch sleeps until the window resets.
//! Between pages it pauses for a short politeness interval.
//!
//! ## Example
//!
//! ```ignore
//! use bsky_harvester::prelude::*;
//! use std::sync::Arc;
//!
//! setup_logger();
//! let config = Config::new();
//! let client = Arc::new(Client::new(config.clone())?);
//! let mut session = client.login_from_config().await?;
//!
//! let service = HarvestServiceImpl::new(client, &config);
//! if let Some(posts) = service.get_user_posts(&mut session, "alice", None).await {
//!     println!("{}", serde_json::to_string(&posts)?);
//! }
//! ```

/// Application layer: session, client, fetch loop and services
pub mod application;
/// Library wide constants
pub mod constants;
/// Error types
pub mod error;
/// Wire and pagination models
pub mod model;
/// Commonly used types in one import
pub mod prelude;
/// Configuration and logging helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}

