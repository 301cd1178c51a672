use crate::support::{catalog, unreachable_client, TestBackend, GARBLED_CONCEPTS};
use api::ApiError;

#[tokio::test]
async fn lists_videos_in_backend_order() {
    let backend = TestBackend::start(catalog()).await;
    let videos = backend.client().list_videos().await.expect("list videos");

    let ids: Vec<_> = videos.iter().map(|v| v.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3", "4", "5"]);
    assert_eq!(videos[0].video_id, "v1");
}

#[tokio::test]
async fn fetches_single_video_and_concepts() {
    let backend = TestBackend::start(catalog()).await;
    let client = backend.client();

    let video = client.get_video("v3").await.expect("get video");
    assert_eq!(video.title, "C");

    let concepts = client.list_concepts("v1").await.expect("list concepts");
    assert_eq!(concepts.len(), 2);
    assert_eq!(concepts[1].concept, "Dark reaction");

    let none = client.list_concepts("v2").await.expect("list concepts");
    assert!(none.is_empty());
}

#[tokio::test]
async fn unknown_video_is_a_status_error() {
    let backend = TestBackend::start(catalog()).await;
    let err = backend
        .client()
        .get_video("missing")
        .await
        .expect_err("404");
    assert!(matches!(err, ApiError::Status { status: 404, .. }));
}

#[tokio::test]
async fn connection_refused_is_a_transport_error() {
    let client = unreachable_client().await;
    let err = client.list_videos().await.expect_err("no backend");
    assert!(matches!(err, ApiError::Transport { .. }));
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let backend = TestBackend::start(catalog()).await;
    let err = backend
        .client()
        .list_concepts(GARBLED_CONCEPTS)
        .await
        .expect_err("body is not JSON");
    assert!(matches!(err, ApiError::Decode { .. }));
}
