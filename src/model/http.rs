/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 17/10/26
******************************************************************************/

use crate::application::auth::Session;
use crate::error::{AppError, AppResult};
use crate::model::rate_limit::RateLimitStatus;
use crate::model::responses::XrpcErrorBody;
use reqwest::{Client, Method, Response, StatusCode};
use serde::Serialize;
use tracing::{debug, error, warn};

/// Makes a single XRPC request and records the server rate limit into the session
///
/// When a session is given its bearer token is attached and the `RateLimit-*`
/// headers of the response are written back into it, whatever the status code.
/// There is no retry: a rate limited call comes back as
/// [`AppError::RateLimitExceeded`] and the caller decides what to do.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `session` - Session to authenticate with and to update, `None` for login
/// * `method` - HTTP method, `GET` for queries and `POST` for procedures
/// * `url` - Full URL of the XRPC method
/// * `query` - Optional query string parameters
/// * `body` - Optional request body (will be serialized to JSON)
///
/// # Returns
///
/// * `Ok(Response)` - Successful HTTP response, body not yet read
/// * `Err(AppError)` - Transport failure or non-success status
pub async fn make_xrpc_request<Q: Serialize + ?Sized, B: Serialize>(
    client: &Client,
    mut session: Option<&mut Session>,
    method: Method,
    url: &str,
    query: Option<&Q>,
    body: &Option<B>,
) -> AppResult<Response> {
    debug!("{} {}", method, url);

    let mut request = client
        .request(method, url)
        .header("Accept", "application/json");

    if let Some(session) = session.as_deref() {
        request = request.header("Authorization", session.bearer());
    }
    if let Some(q) = query {
        request = request.query(q);
    }
    if let Some(b) = body {
        request = request.json(b);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    if let Some(session) = session.as_deref_mut() {
        session.record_rate_limit(RateLimitStatus::from_headers(response.headers()));
    }

    if status.is_success() {
        return Ok(response);
    }

    let body_text = response.text().await.unwrap_or_default();
    match status {
        StatusCode::TOO_MANY_REQUESTS => {
            warn!("Rate limit exceeded: {}", body_text);
            Err(AppError::RateLimitExceeded)
        }
        StatusCode::UNAUTHORIZED => {
            error!("Unauthorized: {}", body_text);
            Err(AppError::Unauthorized)
        }
        StatusCode::NOT_FOUND => {
            error!("Not found: {}", body_text);
            Err(AppError::NotFound)
        }
        StatusCode::BAD_REQUEST => {
            let detail = serde_json::from_str::<XrpcErrorBody>(&body_text)
                .map(|b| b.describe())
                .unwrap_or(body_text);
            error!("Bad request: {}", detail);
            Err(AppError::BadRequest(detail))
        }
        _ => {
            error!("Request failed with status {}: {}", status, body_text);
            Err(AppError::Unexpected(status))
        }
    }
}
