/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/
/// XRPC request helper recording rate limits
pub mod http;
/// Pagination models
pub mod page;
/// Paginated collections and their XRPC method ids
pub mod query;
/// Server reported rate limit state
pub mod rate_limit;
/// Request models for API calls
pub mod requests;
/// Response models from API calls
pub mod responses;
