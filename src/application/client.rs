/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! HTTP client for the Bluesky XRPC API
//!
//! # Example
//! ```ignore
//! use bsky_harvester::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let mut session = client.login_from_config().await?;
//! let first = client
//!     .get_author_feed(&mut session, "alice.bsky.social", &PageRequest::first(100))
//!     .await?;
//! ```

use crate::application::auth::{Session, handle_for};
use crate::application::config::Config;
use crate::application::interfaces::api::BskyApi;
use crate::constants::USER_AGENT;
use crate::error::AppResult;
use crate::model::http::make_xrpc_request;
use crate::model::page::{PageRequest, PageResult};
use crate::model::query::{
    NSID_CREATE_SESSION, NSID_GET_AUTHOR_FEED, NSID_GET_FOLLOWERS, NSID_GET_FOLLOWS,
    NSID_SEARCH_ACTORS, NSID_SEARCH_POSTS,
};
use crate::model::rate_limit::RateLimitStatus;
use crate::model::requests::{ActorPageParams, CreateSessionRequest, SearchPageParams};
use crate::model::responses::{
    AuthorFeedResponse, CreateSessionResponse, FollowersResponse, FollowsResponse,
    SearchActorsResponse, SearchPostsResponse,
};
use async_trait::async_trait;
use reqwest::{Client as HttpInternalClient, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error, info};

/// Client for the Bluesky API
pub struct Client {
    http_client: HttpInternalClient,
    config: Arc<Config>,
}

impl Client {
    /// Creates a new client, no request is made
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    pub fn new(config: Config) -> AppResult<Self> {
        let http_client = HttpInternalClient::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            http_client,
            config: Arc::new(config),
        })
    }

    /// Creates a client configured from the environment
    pub fn from_env() -> AppResult<Self> {
        Self::new(Config::new())
    }

    /// Gets the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Handle for a screen name under the configured suffix
    pub fn handle_for(&self, screen_name: &str) -> String {
        handle_for(screen_name, &self.config.rest_api.handle_suffix)
    }

    fn url(&self, nsid: &str) -> String {
        format!("{}/{}", self.config.rest_api.base_url, nsid)
    }

    /// Logs in with a screen name and password
    ///
    /// The handle is built by appending the configured suffix to `username`.
    ///
    /// # Returns
    /// * `Ok(Session)` - Authenticated session, carrying the login rate limit
    /// * `Err(AppError)` - If authentication fails
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Session> {
        let handle = self.handle_for(username);
        let body = CreateSessionRequest {
            identifier: &handle,
            password,
        };

        let response = match make_xrpc_request::<(), _>(
            &self.http_client,
            None,
            Method::POST,
            &self.url(NSID_CREATE_SESSION),
            None,
            &Some(body),
        )
        .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Something went wrong while logging in as {}: {}", handle, e);
                return Err(e);
            }
        };

        let rate_limit = RateLimitStatus::from_headers(response.headers());
        let created: CreateSessionResponse = response.json().await?;
        let mut session = Session::from(created);
        session.record_rate_limit(rate_limit);

        info!("Logged in as {}", session.handle);
        match session.rate_limit() {
            Some(status) => info!("Current rate limits: {}", status),
            None => info!("Current rate limits: unknown"),
        }
        Ok(session)
    }

    /// Logs in with the credentials from the configuration
    pub async fn login_from_config(&self) -> AppResult<Session> {
        let credentials = &self.config.credentials;
        self.login(&credentials.username, &credentials.password)
            .await
    }

    /// Runs an authenticated XRPC query and deserializes the response
    pub async fn query<Q: Serialize + Sync, T: DeserializeOwned>(
        &self,
        session: &mut Session,
        nsid: &str,
        params: &Q,
    ) -> AppResult<T> {
        let response = make_xrpc_request::<Q, ()>(
            &self.http_client,
            Some(session),
            Method::GET,
            &self.url(nsid),
            Some(params),
            &None,
        )
        .await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BskyApi for Client {
    async fn get_author_feed(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        let params = ActorPageParams {
            actor,
            limit: request.page_size,
            cursor: request.cursor.as_deref(),
        };
        let page: AuthorFeedResponse = self.query(session, NSID_GET_AUTHOR_FEED, &params).await?;
        debug!("{} feed items obtained for {}", page.feed.len(), actor);
        Ok(page.into())
    }

    async fn get_followers(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        let params = ActorPageParams {
            actor,
            limit: request.page_size,
            cursor: request.cursor.as_deref(),
        };
        let page: FollowersResponse = self.query(session, NSID_GET_FOLLOWERS, &params).await?;
        debug!("{} followers obtained for {}", page.followers.len(), actor);
        Ok(page.into())
    }

    async fn get_follows(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        let params = ActorPageParams {
            actor,
            limit: request.page_size,
            cursor: request.cursor.as_deref(),
        };
        let page: FollowsResponse = self.query(session, NSID_GET_FOLLOWS, &params).await?;
        debug!("{} follows obtained for {}", page.follows.len(), actor);
        Ok(page.into())
    }

    async fn search_posts(
        &self,
        session: &mut Session,
        q: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        let params = SearchPageParams {
            q,
            limit: request.page_size,
            cursor: request.cursor.as_deref(),
        };
        let page: SearchPostsResponse = self.query(session, NSID_SEARCH_POSTS, &params).await?;
        debug!("{} posts found for '{}'", page.posts.len(), q);
        Ok(page.into())
    }

    async fn search_actors(
        &self,
        session: &mut Session,
        q: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        let params = SearchPageParams {
            q,
            limit: request.page_size,
            cursor: request.cursor.as_deref(),
        };
        let page: SearchActorsResponse = self.query(session, NSID_SEARCH_ACTORS, &params).await?;
        debug!("{} actors found for '{}'", page.actors.len(), q);
        Ok(page.into())
    }
}
