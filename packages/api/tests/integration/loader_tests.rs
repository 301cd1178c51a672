use crate::support::{catalog, TestBackend, BROKEN_CONCEPTS, GARBLED_CONCEPTS};
use api::{load_detail, load_feed, ApiError, Feed, LoadEvent, LoadState};
use axum::http::StatusCode;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[tokio::test]
async fn feed_groups_channels_over_http() {
    let backend = TestBackend::start(catalog()).await;
    let feed = load_feed(&backend.client(), &mut StdRng::seed_from_u64(42))
        .await
        .expect("feed loads");

    assert_eq!(feed.top.len(), 5);
    assert_eq!(feed.channels, vec!["X", "Y"]);

    let sections = feed.sections();
    let x: Vec<_> = sections[0].videos.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(x, vec!["1", "2"]);
}

#[tokio::test]
async fn feed_server_error_is_terminal() {
    let mut fixture = catalog();
    fixture.feed_status = Some(StatusCode::INTERNAL_SERVER_ERROR);
    let backend = TestBackend::start(fixture).await;

    let result = load_feed(&backend.client(), &mut StdRng::seed_from_u64(1)).await;
    let state = LoadState::Loading.settle(result, |_| "offline".to_string());
    assert_eq!(state, LoadState::Failed("offline".into()));

    // A late retry or success cannot leave the failure; only a remount can.
    let state = state
        .advance(LoadEvent::Started)
        .advance(LoadEvent::Succeeded(Feed::default()));
    assert_eq!(state, LoadState::Failed("offline".into()));
}

#[tokio::test]
async fn detail_requires_both_fetches() {
    let backend = TestBackend::start(catalog()).await;
    let client = backend.client();

    let detail = load_detail(&client, Some("v1")).await.expect("detail loads");
    assert_eq!(detail.video.title, "A");
    assert_eq!(detail.concepts.len(), 2);

    let err = load_detail(&client, Some(BROKEN_CONCEPTS))
        .await
        .expect_err("concepts fail");
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[tokio::test]
async fn detail_without_concepts_still_loads() {
    let backend = TestBackend::start(catalog()).await;
    let detail = load_detail(&backend.client(), Some("v2"))
        .await
        .expect("detail loads");
    assert!(!detail.has_concepts());
}

#[tokio::test]
async fn detail_with_malformed_concepts_fails() {
    let backend = TestBackend::start(catalog()).await;
    let result = load_detail(&backend.client(), Some(GARBLED_CONCEPTS)).await;
    assert!(matches!(result, Err(ApiError::Decode { .. })));

    let state = LoadState::Loading.settle(result, |_| "player.error".to_string());
    assert_eq!(state, LoadState::Failed("player.error".into()));
}
