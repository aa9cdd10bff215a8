/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Response models from XRPC calls
//!
//! Only the envelope of each response is typed. The items themselves are passed
//! through untouched as JSON values.

use crate::model::page::PageResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Response of `com.atproto.server.createSession`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionResponse {
    /// DID of the authenticated account
    pub did: String,
    /// Handle of the authenticated account
    pub handle: String,
    /// Short lived bearer token
    pub access_jwt: String,
    /// Long lived token used to mint new access tokens
    pub refresh_jwt: String,
    /// Account email, only present for the account owner
    #[serde(default)]
    pub email: Option<String>,
}

/// Error body returned by XRPC endpoints on failure
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct XrpcErrorBody {
    /// Machine readable error name, e.g. `InvalidRequest`
    #[serde(default)]
    pub error: Option<String>,
    /// Human readable message
    #[serde(default)]
    pub message: Option<String>,
}

impl XrpcErrorBody {
    /// Best effort single line description
    pub fn describe(&self) -> String {
        match (&self.error, &self.message) {
            (Some(e), Some(m)) => format!("{e}: {m}"),
            (Some(e), None) => e.clone(),
            (None, Some(m)) => m.clone(),
            (None, None) => "unknown error".to_string(),
        }
    }
}

/// Response of `app.bsky.feed.getAuthorFeed`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthorFeedResponse {
    /// Next page cursor
    #[serde(default)]
    pub cursor: Option<String>,
    /// Feed view posts
    #[serde(default)]
    pub feed: Vec<Value>,
}

/// Response of `app.bsky.graph.getFollowers`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FollowersResponse {
    /// Profile of the actor whose followers are listed
    #[serde(default)]
    pub subject: Option<Value>,
    /// Next page cursor
    #[serde(default)]
    pub cursor: Option<String>,
    /// Follower profiles
    #[serde(default)]
    pub followers: Vec<Value>,
}

/// Response of `app.bsky.graph.getFollows`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FollowsResponse {
    /// Profile of the actor whose follows are listed
    #[serde(default)]
    pub subject: Option<Value>,
    /// Next page cursor
    #[serde(default)]
    pub cursor: Option<String>,
    /// Followed profiles
    #[serde(default)]
    pub follows: Vec<Value>,
}

/// Response of `app.bsky.feed.searchPosts`
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPostsResponse {
    /// Next page cursor
    #[serde(default)]
    pub cursor: Option<String>,
    /// Estimated number of hits, may be rounded
    #[serde(default)]
    pub hits_total: Option<u64>,
    /// Matching posts
    #[serde(default)]
    pub posts: Vec<Value>,
}

/// Response of `app.bsky.actor.searchActors`
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchActorsResponse {
    /// Next page cursor
    #[serde(default)]
    pub cursor: Option<String>,
    /// Matching profiles
    #[serde(default)]
    pub actors: Vec<Value>,
}

impl From<AuthorFeedResponse> for PageResult<Value> {
    fn from(r: AuthorFeedResponse) -> Self {
        PageResult::new(r.feed, r.cursor)
    }
}

impl From<FollowersResponse> for PageResult<Value> {
    fn from(r: FollowersResponse) -> Self {
        PageResult::new(r.followers, r.cursor)
    }
}

impl From<FollowsResponse> for PageResult<Value> {
    fn from(r: FollowsResponse) -> Self {
        PageResult::new(r.follows, r.cursor)
    }
}

impl From<SearchPostsResponse> for PageResult<Value> {
    fn from(r: SearchPostsResponse) -> Self {
        PageResult::new(r.posts, r.cursor)
    }
}

impl From<SearchActorsResponse> for PageResult<Value> {
    fn from(r: SearchActorsResponse) -> Self {
        PageResult::new(r.actors, r.cursor)
    }
}
