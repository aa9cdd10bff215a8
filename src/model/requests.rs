/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

//! Request models for XRPC calls
//!
//! Query parameters are serialized with serde straight into the URL query string,
//! so optional fields are skipped rather than sent empty.

use serde::Serialize;

/// Body of `com.atproto.server.createSession`
#[derive(Debug, Clone, Serialize)]
pub struct CreateSessionRequest<'a> {
    /// Handle, DID or email of the account
    pub identifier: &'a str,
    /// Account or app password
    pub password: &'a str,
}

/// Parameters of the actor scoped queries (author feed, followers, follows)
#[derive(Debug, Clone, Serialize)]
pub struct ActorPageParams<'a> {
    /// Handle or DID of the actor
    pub actor: &'a str,
    /// Number of items wanted
    pub limit: u32,
    /// Continuation cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}

/// Parameters of the search queries (posts and actors)
#[derive(Debug, Clone, Serialize)]
pub struct SearchPageParams<'a> {
    /// Search terms
    pub q: &'a str,
    /// Number of items wanted
    pub limit: u32,
    /// Continuation cursor
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cursor: Option<&'a str>,
}
