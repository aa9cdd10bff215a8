use crate::common::{test_service, test_session, with_rate_limit};
use bsky_harvester::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn test_login_builds_handle_and_records_rate_limit() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/xrpc/com.atproto.server.createSession")
        .match_body(Matcher::Json(json!({
            "identifier": "alice.bsky.social",
            "password": "app-password"
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "did": "did:plc:alice",
                "handle": "alice.bsky.social",
                "accessJwt": "access-token",
                "refreshJwt": "refresh-token"
            })
            .to_string(),
        );
    let mock = with_rate_limit(mock, 29, 300).create_async().await;

    let (client, _) = test_service(&server);
    let session = client.login_from_config().await.expect("login should succeed");

    assert_eq!(session.handle, "alice.bsky.social");
    assert_eq!(session.did, "did:plc:alice");
    assert_eq!(session.access_jwt, "access-token");
    let status = session.rate_limit().expect("rate limit recorded");
    assert_eq!(status.limit, 3000);
    assert_eq!(status.remaining, 29);
    mock.assert_async().await;
}

#[tokio::test]
async fn test_login_failure_is_an_error() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", "/xrpc/com.atproto.server.createSession")
        .with_status(401)
        .with_body(r#"{"error":"AuthenticationRequired","message":"Invalid identifier or password"}"#)
        .create_async()
        .await;

    let (client, _) = test_service(&server);
    let err = client.login("alice", "wrong").await.unwrap_err();

    assert!(matches!(err, AppError::Unauthorized));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_page_request_sends_bearer_and_params() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/xrpc/app.bsky.feed.getAuthorFeed")
        .match_header("authorization", "Bearer access-token")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("actor".into(), "bob.bsky.social".into()),
            Matcher::UrlEncoded("limit".into(), "50".into()),
            Matcher::UrlEncoded("cursor".into(), "c7".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(json!({"cursor": "c8", "feed": [{"post": {"uri": "at://1"}}]}).to_string());
    let mock = with_rate_limit(mock, 2999, 300).create_async().await;

    let (client, _) = test_service(&server);
    let mut session = test_session();
    let request = PageRequest {
        cursor: Some("c7".to_string()),
        page_size: 50,
    };
    let page = client
        .get_author_feed(&mut session, "bob.bsky.social", &request)
        .await
        .expect("page expected");

    assert_eq!(page.items.len(), 1);
    assert_eq!(page.next_cursor.as_deref(), Some("c8"));
    assert_eq!(session.rate_limit().map(|s| s.remaining), Some(2999));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_bad_request_carries_server_message() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", "/xrpc/app.bsky.actor.searchActors")
        .match_query(Matcher::Any)
        .with_status(400)
        .with_body(r#"{"error":"InvalidRequest","message":"Error: q must not be empty"}"#)
        .create_async()
        .await;

    let (client, _) = test_service(&server);
    let mut session = test_session();
    let err = client
        .search_actors(&mut session, "", &PageRequest::first(10))
        .await
        .unwrap_err();

    match err {
        AppError::BadRequest(msg) => assert!(msg.contains("InvalidRequest")),
        other => panic!("Unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn test_rate_limited_response_still_updates_session() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", "/xrpc/app.bsky.graph.getFollows")
        .match_query(Matcher::Any)
        .with_status(429)
        .with_body(r#"{"error":"RateLimitExceeded"}"#);
    let _mock = with_rate_limit(mock, 0, 60).create_async().await;

    let (client, _) = test_service(&server);
    let mut session = test_session();
    let err = client
        .get_follows(&mut session, "bob.bsky.social", &PageRequest::first(100))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::RateLimitExceeded));
    assert_eq!(session.rate_limit().map(|s| s.remaining), Some(0));
}
