/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Paginated, quota aware fetch loop
//!
//! Every paginated retrieval goes through [`Fetcher::fetch`]:
//!
//! 1. before each call, if the session's remaining quota is at or below the
//!    tolerance, sleep until the rate limit window resets;
//! 2. fetch one page with the current cursor;
//! 3. hand the items to an [`Accumulator`];
//! 4. stop when the cursor is exhausted or the cap is reached, otherwise pause
//!    for the politeness interval and go on.
//!
//! Any remote failure aborts the whole fetch. Nothing partial is returned.

use crate::application::accumulator::Accumulator;
use crate::application::auth::Session;
use crate::application::config::FetchConfig;
use crate::application::interfaces::api::BskyApi;
use crate::constants::{DEFAULT_POLITENESS_MS, DEFAULT_RATE_LIMIT_TOLERANCE, PROGRESS_LOG_EVERY};
use crate::error::{AppError, AppResult};
use crate::model::page::{CollectionResult, FetchOptions, PageRequest, PageResult};
use crate::model::query::Query;
use async_trait::async_trait;
use chrono::Utc;
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// Something that can be read one page at a time
#[async_trait]
pub trait PageSource<T>: Send + Sync {
    /// Fetches the page designated by `request`
    async fn next_page(
        &self,
        session: &mut Session,
        request: &PageRequest,
    ) -> AppResult<PageResult<T>>;
}

/// Pages of one [`Query`] served by a [`BskyApi`]
pub struct QueryPages<'a, A: BskyApi> {
    api: &'a A,
    query: Query,
}

impl<'a, A: BskyApi> QueryPages<'a, A> {
    /// Binds a query to an API
    pub fn new(api: &'a A, query: Query) -> Self {
        Self { api, query }
    }

    /// The bound query
    pub fn query(&self) -> &Query {
        &self.query
    }
}

#[async_trait]
impl<'a, A: BskyApi> PageSource<Value> for QueryPages<'a, A> {
    async fn next_page(
        &self,
        session: &mut Session,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        self.api.fetch_page(session, &self.query, request).await
    }
}

/// Runs paginated fetches against the session's rate limit budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fetcher {
    tolerance: u32,
    politeness: Duration,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new(
            DEFAULT_RATE_LIMIT_TOLERANCE,
            Duration::from_millis(DEFAULT_POLITENESS_MS),
        )
    }
}

impl From<&FetchConfig> for Fetcher {
    fn from(config: &FetchConfig) -> Self {
        Self::new(config.rate_limit_tolerance, config.politeness())
    }
}

impl Fetcher {
    /// Creates a fetcher
    ///
    /// # Arguments
    /// * `tolerance` - Remaining quota at or below which to wait for the reset
    /// * `politeness` - Pause between two consecutive calls
    #[must_use]
    pub fn new(tolerance: u32, politeness: Duration) -> Self {
        Self {
            tolerance,
            politeness,
        }
    }

    /// Remaining quota threshold
    #[must_use]
    pub fn tolerance(&self) -> u32 {
        self.tolerance
    }

    /// Pause between two consecutive calls
    #[must_use]
    pub fn politeness(&self) -> Duration {
        self.politeness
    }

    /// Sleeps until the rate limit window resets if the quota is nearly spent
    ///
    /// # Returns
    /// The time slept, zero when no wait was needed
    pub async fn wait_for_quota(&self, session: &Session) -> Duration {
        let Some(status) = session.rate_limit() else {
            return Duration::ZERO;
        };
        if !status.is_near_exhaustion(self.tolerance) {
            return Duration::ZERO;
        }

        let wait = status.time_until_reset(Utc::now());
        if !wait.is_zero() {
            warn!(
                "Rate limit reached ({} remaining), waiting for {} sec.",
                status.remaining,
                wait.as_secs_f64()
            );
            tokio::time::sleep(wait).await;
            info!("Rate limit ok!");
        }
        wait
    }

    /// Collects pages from `source` until the cursor runs out or the cap is reached
    ///
    /// # Returns
    /// * `Ok(Some(result))` - At least one entry was collected
    /// * `Ok(None)` - Nothing was collected
    /// * `Err(AppError)` - A remote call failed, everything collected so far is dropped,
    ///   or the page size is zero
    pub async fn try_fetch<T, S, A>(
        &self,
        source: &S,
        session: &mut Session,
        key: &str,
        options: FetchOptions,
        mut accumulator: A,
    ) -> AppResult<Option<CollectionResult<A::Output>>>
    where
        T: Send,
        S: PageSource<T> + ?Sized,
        A: Accumulator<T>,
    {
        if options.page_size == 0 {
            return Err(AppError::InvalidInput(
                "page size must be positive".to_string(),
            ));
        }
        if options.cap == Some(0) {
            debug!("Cap is zero for {}, nothing to fetch", key);
            return Ok(None);
        }

        let mut cursor: Option<String> = None;
        let mut num_calls: u64 = 0;

        loop {
            self.wait_for_quota(session).await;

            let request = PageRequest {
                cursor: cursor.take(),
                page_size: options.page_size,
            };
            let page = source.next_page(session, &request).await?;
            num_calls += 1;
            let last_page = page.is_last();

            for item in page.items {
                if options.is_satisfied_by(accumulator.len()) {
                    break;
                }
                accumulator.push(item);
            }

            if num_calls % PROGRESS_LOG_EVERY == 0 {
                info!("Call number: {} for {}", num_calls, key);
            }

            cursor = page.next_cursor;
            if last_page || options.is_satisfied_by(accumulator.len()) {
                break;
            }

            if !self.politeness.is_zero() {
                tokio::time::sleep(self.politeness).await;
            }
        }

        info!(
            "Fetch for {} finished after {} calls with {} entries",
            key,
            num_calls,
            accumulator.len()
        );

        if accumulator.is_empty() {
            return Ok(None);
        }
        Ok(Some(CollectionResult::new(key, accumulator.into_items())))
    }

    /// Same as [`Fetcher::try_fetch`] but any failure is logged and reported as `None`
    pub async fn fetch<T, S, A>(
        &self,
        source: &S,
        session: &mut Session,
        key: &str,
        options: FetchOptions,
        accumulator: A,
    ) -> Option<CollectionResult<A::Output>>
    where
        T: Send,
        S: PageSource<T> + ?Sized,
        A: Accumulator<T>,
    {
        match self
            .try_fetch(source, session, key, options, accumulator)
            .await
        {
            Ok(result) => result,
            Err(e) => {
                error!("Something went wrong while fetching {}: {}", key, e);
                None
            }
        }
    }
}
