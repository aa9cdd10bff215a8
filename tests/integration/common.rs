// Common utilities for integration tests

use bsky_harvester::prelude::*;
use chrono::Utc;
use mockito::ServerGuard;
use std::sync::Arc;

/// Configuration pointing at the mock server, without politeness pauses
pub fn test_config(server: &ServerGuard) -> Config {
    let mut config = Config::with_base_url(&format!("{}/xrpc", server.url()));
    config.credentials.username = "alice".to_string();
    config.credentials.password = "app-password".to_string();
    config.fetch.politeness_ms = 0;
    config
}

/// Client and harvesting service sharing the mock server
pub fn test_service(server: &ServerGuard) -> (Arc<Client>, HarvestServiceImpl<Client>) {
    setup_logger();
    let config = test_config(server);
    let client = Arc::new(Client::new(config.clone()).expect("client should build"));
    let service = HarvestServiceImpl::new(client.clone(), &config);
    (client, service)
}

/// Session as if `alice` had just logged in
pub fn test_session() -> Session {
    Session::new("alice.bsky.social", "did:plc:alice", "access-token", "refresh-token")
}

/// Rate limit headers values: limit, remaining and the reset as unix seconds
pub fn rate_limit_headers(remaining: u32, reset_at: i64) -> [(&'static str, String); 3] {
    [
        ("ratelimit-limit", "3000".to_string()),
        ("ratelimit-remaining", remaining.to_string()),
        ("ratelimit-reset", reset_at.to_string()),
    ]
}

/// Adds the rate limit headers to a mock, resetting `in_secs` seconds from now
pub fn with_rate_limit(mock: mockito::Mock, remaining: u32, in_secs: i64) -> mockito::Mock {
    with_rate_limit_reset(mock, remaining, Utc::now().timestamp() + in_secs)
}

/// Adds the rate limit headers to a mock with an explicit reset time
pub fn with_rate_limit_reset(
    mut mock: mockito::Mock,
    remaining: u32,
    reset_at: i64,
) -> mockito::Mock {
    for (name, value) in rate_limit_headers(remaining, reset_at) {
        mock = mock.with_header(name, &value);
    }
    mock
}
