/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! # Prelude
//!
//! Brings the commonly used types and traits into scope.
//!
//! ```rust
//! use bsky_harvester::prelude::*;
//!
//! let options = FetchOptions::with_cap(500).page_size(50);
//! assert_eq!(options.cap, Some(500));
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, Credentials, FetchConfig, RestApiConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::{AppError, AppResult};

// ============================================================================
// SESSION AND CLIENT
// ============================================================================

pub use crate::application::auth::{Session, handle_for};
pub use crate::application::client::Client;
pub use crate::application::interfaces::api::BskyApi;

// ============================================================================
// FETCH LOOP AND SERVICES
// ============================================================================

pub use crate::application::accumulator::{
    Accumulator, AppendItems, CollectHandles, DistinctAuthorHandles,
};
pub use crate::application::fetcher::{Fetcher, PageSource, QueryPages};
pub use crate::application::interfaces::harvest::HarvestService;
pub use crate::application::services::HarvestServiceImpl;

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::page::{CollectionResult, FetchOptions, PageRequest, PageResult};
pub use crate::model::query::Query;
pub use crate::model::rate_limit::RateLimitStatus;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
