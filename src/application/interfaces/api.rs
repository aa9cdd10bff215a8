use crate::application::auth::Session;
use crate::error::AppResult;
use crate::model::page::{PageRequest, PageResult};
use crate::model::query::Query;
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the paginated Bluesky queries
///
/// Every method performs exactly one remote call and is expected to record the
/// rate limit reported by the server into `session`.
#[async_trait]
pub trait BskyApi: Send + Sync {
    /// One page of an actor's feed (`app.bsky.feed.getAuthorFeed`)
    async fn get_author_feed(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>>;

    /// One page of an actor's followers (`app.bsky.graph.getFollowers`)
    async fn get_followers(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>>;

    /// One page of the accounts an actor follows (`app.bsky.graph.getFollows`)
    async fn get_follows(
        &self,
        session: &mut Session,
        actor: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>>;

    /// One page of posts matching `q` (`app.bsky.feed.searchPosts`)
    async fn search_posts(
        &self,
        session: &mut Session,
        q: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>>;

    /// One page of profiles matching `q` (`app.bsky.actor.searchActors`)
    async fn search_actors(
        &self,
        session: &mut Session,
        q: &str,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>>;

    /// Fetches one page of `query`
    async fn fetch_page(
        &self,
        session: &mut Session,
        query: &Query,
        request: &PageRequest,
    ) -> AppResult<PageResult<Value>> {
        match query {
            Query::AuthorFeed(actor) => self.get_author_feed(session, actor, request).await,
            Query::Followers(actor) => self.get_followers(session, actor, request).await,
            Query::Follows(actor) => self.get_follows(session, actor, request).await,
            Query::SearchPosts(q) => self.search_posts(session, q, request).await,
            Query::SearchActors(q) => self.search_actors(session, q, request).await,
        }
    }
}
