/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt;

/// XRPC method listing an actor's posts and reposts
pub const NSID_GET_AUTHOR_FEED: &str = "app.bsky.feed.getAuthorFeed";
/// XRPC method listing an actor's followers
pub const NSID_GET_FOLLOWERS: &str = "app.bsky.graph.getFollowers";
/// XRPC method listing the accounts an actor follows
pub const NSID_GET_FOLLOWS: &str = "app.bsky.graph.getFollows";
/// XRPC method searching posts
pub const NSID_SEARCH_POSTS: &str = "app.bsky.feed.searchPosts";
/// XRPC method searching profiles
pub const NSID_SEARCH_ACTORS: &str = "app.bsky.actor.searchActors";
/// XRPC procedure creating a session
pub const NSID_CREATE_SESSION: &str = "com.atproto.server.createSession";

/// A paginated collection on the server
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Query {
    /// Posts of an actor, by handle or DID
    AuthorFeed(String),
    /// Followers of an actor
    Followers(String),
    /// Accounts followed by an actor
    Follows(String),
    /// Posts matching search terms
    SearchPosts(String),
    /// Profiles matching search terms
    SearchActors(String),
}

impl Query {
    /// The handle or search term this query is about, used as the result key
    pub fn target(&self) -> &str {
        match self {
            Query::AuthorFeed(t)
            | Query::Followers(t)
            | Query::Follows(t)
            | Query::SearchPosts(t)
            | Query::SearchActors(t) => t,
        }
    }

    /// XRPC method serving this query
    pub fn nsid(&self) -> &'static str {
        match self {
            Query::AuthorFeed(_) => NSID_GET_AUTHOR_FEED,
            Query::Followers(_) => NSID_GET_FOLLOWERS,
            Query::Follows(_) => NSID_GET_FOLLOWS,
            Query::SearchPosts(_) => NSID_SEARCH_POSTS,
            Query::SearchActors(_) => NSID_SEARCH_ACTORS,
        }
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.nsid(), self.target())
    }
}
