use bsky_harvester::model::query::Query;
use serde_json::json;

#[test]
fn test_query_target_and_nsid() {
    let q = Query::Followers("alice.bsky.social".to_string());
    assert_eq!(q.target(), "alice.bsky.social");
    assert_eq!(q.nsid(), "app.bsky.graph.getFollowers");
    assert_eq!(
        q.to_string(),
        "app.bsky.graph.getFollowers (alice.bsky.social)"
    );
}

#[test]
fn test_search_queries_share_nothing_but_the_term() {
    let posts = Query::SearchPosts("rust".to_string());
    let actors = Query::SearchActors("rust".to_string());
    assert_eq!(posts.target(), actors.target());
    assert_ne!(posts.nsid(), actors.nsid());
}

#[test]
fn test_query_serialization() {
    let q = Query::AuthorFeed("alice.bsky.social".to_string());
    assert_eq!(
        serde_json::to_value(&q).unwrap(),
        json!({"kind": "author_feed", "target": "alice.bsky.social"})
    );
}
