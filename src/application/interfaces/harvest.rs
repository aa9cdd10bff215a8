use crate::application::auth::Session;
use crate::model::page::{CollectionResult, FetchOptions};
use async_trait::async_trait;
use serde_json::Value;

/// Interface for the harvesting service
///
/// Every method pages through one remote collection and returns everything it
/// collected keyed by the queried handle or search term. `None` means nothing
/// was collected or a call failed along the way (the failure is logged).
///
/// Passing `None` as options uses the operation's default cap and the configured
/// page size.
#[async_trait]
pub trait HarvestService: Send + Sync {
    /// Posts of `<screen_name>.<suffix>`, default cap 1 000 000
    async fn get_user_posts(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>>;

    /// Followers of `<screen_name>.<suffix>`, default cap 100 000 000
    async fn get_user_followers(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>>;

    /// Accounts followed by `<screen_name>.<suffix>`, default cap 100 000 000
    async fn get_user_follows(
        &self,
        session: &mut Session,
        screen_name: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>>;

    /// Posts matching `query`, default cap 100 000 000
    async fn get_posts_from_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<Value>>;

    /// Handles of the profiles matching `query`, uncapped by default
    async fn get_profiles_from_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<String>>;

    /// Distinct handles of the authors of posts matching `query`, uncapped by default
    async fn get_users_discussing_query(
        &self,
        session: &mut Session,
        query: &str,
        options: Option<FetchOptions>,
    ) -> Option<CollectionResult<String>>;
}
