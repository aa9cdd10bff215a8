use crate::application::accumulator::{
    Accumulator, AppendItems, CollectHandles, DistinctAuthorHandles,
};
use crate::application::auth::{Session, handle_for};
use crate::application::config::Config;
use crate::application::fetcher::{Fetcher, QueryPages};
use crate::application::interfaces::api::BskyApi;
use crate::application::interfaces::harvest::HarvestService;
use crate::constants::{MAX_QUERY_POSTS, MAX_USER_GRAPH, MAX_USER_POSTS};
use crate::model::page::{CollectionResult, FetchOptions};
use crate::model::query::Query;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::info;

/// Implementation of the harvesting service on top of any [`BskyApi`]
pub struct HarvestServiceImpl<A: BskyApi> {
    api: Arc<A>,
    fetcher: Fetcher,
    handle_suffix: String,
    page_size: u32,
}

impl<A: BskyApi> HarvestServiceImpl<A> {
    /// Creates a new instance of the harvesting service
    pub fn new(api: Arc<A>, config: &Config) -> Self {
        Self {
            api,
            fetcher: Fetcher::from(&config.fetch),
            handle_suffix: config.rest_api.handle_suffix.clone(),
            page_size: config.fetch.page_size,
        }
    }

    /// Replaces the fetcher, e.g. to change the tolerance or the politeness interval
    #[must_use]
    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Gets the fetcher in use
    pub fn fetcher(&self) -> &Fetcher {
        &self.fetcher
    }

    fn options(&self, given: Option<FetchOptions>, default_cap: Option<usize>) -> FetchOptions {
        given.unwrap_or(FetchOptions {
            cap: default_cap,
            page_size: self.page_size,
        })
    }

    async fn run<Acc>(
        &self,
        session: &mut Session,
        query: Query,
        options: FetchOptions,
        accumulator: Acc,
    ) -> Option<CollectionResult<Acc::Output>>
    where
        Acc: Accumulator<Value>,
    {
        let key = query.target().to_string();
        let source = QueryPages::new(self.api.as_ref(), query);
        self.fetcher
            .fetch(&source, session, &key, options, accumulator)
            .await
    }
}

#[async_trait]
impl<A: BskyApi + 'static> HarvestService for HarvestServiceImpl<A> {
    async fn get_user_posts(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>> {
        let handle = handle_for(screen_name, &self.handle_suffix);
        let options = self.options(options, Some(MAX_USER_POSTS));
        self.run(session, Query::AuthorFeed(handle), options, AppendItems::new())
            .await
    }

    async fn get_user_followers(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>> {
        let handle = handle_for(screen_name, &self.handle_suffix);
        let options = self.options(options, Some(MAX_USER_GRAPH));
        let result = self
            .run(session, Query::Followers(handle), options, AppendItems::new())
            .await?;
        info!("Got {} followers for {}", result.len(), screen_name);
        Some(result)
    }

    async fn get_user_follows(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>> {
        let handle = handle_for(screen_name, &self.handle_suffix);
        let options = self.options(options, Some(MAX_USER_GRAPH));
        let result = self
            .run(session, Query::Follows(handle), options, AppendItems::new())
            .await?;
        info!("Got {} follows for {}", result.len(), screen_name);
        Some(result)
    }

    async fn get_posts_from_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>> {
        let options = self.options(options, Some(MAX_QUERY_POSTS));
        self.run(
            session,
            Query::SearchPosts(query.to_string()),
            options,
            AppendItems::new(),
        )
        .await
    }

    async fn get_profiles_from_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<String>> {
        let options = self.options(options, None);
        self.run(
            session,
            Query::SearchActors(query.to_string()),
            options,
            CollectHandles::new(),
        )
        .await
    }

    async fn get_users_discussing_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<String>> {
        let options = self.options(options, None);
        self.run(
            session,
            Query::SearchPosts(query.to_string()),
            options,
            DistinctAuthorHandles::new(),
        )
        .await
    }
}
