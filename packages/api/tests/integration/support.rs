use api::test_utils::{concept, video};
use api::types::{Concept, Video};
use api::{ApiClient, ApiConfig};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Video id whose concepts endpoint answers 500.
pub const BROKEN_CONCEPTS: &str = "broken";

/// Video id whose concepts endpoint answers 200 with a body that is not JSON.
pub const GARBLED_CONCEPTS: &str = "garbled";

#[derive(Default)]
pub struct Fixture {
    pub videos: Vec<Video>,
    pub concepts: HashMap<String, Vec<Concept>>,
    pub feed_status: Option<StatusCode>,
}

pub fn catalog() -> Fixture {
    let mut concepts = HashMap::new();
    concepts.insert(
        "v1".to_string(),
        vec![
            concept("c1", "Light reaction", "NCERT Class 10, Ch. 6"),
            concept("c2", "Dark reaction", "NCERT Class 11, Ch. 13"),
        ],
    );

    Fixture {
        videos: vec![
            video("1", "v1", "A", "X"),
            video("2", "v2", "B", "X"),
            video("3", "v3", "C", "Y"),
            video("4", BROKEN_CONCEPTS, "D", "Y"),
            video("5", GARBLED_CONCEPTS, "E", "Y"),
        ],
        concepts,
        feed_status: None,
    }
}

/// A backend on a random local port, alive for the rest of the test.
pub struct TestBackend {
    url: String,
}

impl TestBackend {
    pub async fn start(fixture: Fixture) -> Self {
        let state = Arc::new(fixture);
        let app = Router::new()
            .route("/api/videos", get(list_videos))
            .route("/api/videos/{video_id}", get(get_video))
            .route("/api/concepts/{video_id}", get(list_concepts))
            .with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("local addr");
        tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });

        Self {
            url: format!("http://{addr}"),
        }
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(&ApiConfig::new(self.url.clone()))
    }
}

/// Client pointed at a port nothing listens on.
pub async fn unreachable_client() -> ApiClient {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind unused port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    ApiClient::new(&ApiConfig::new(format!("http://{addr}")))
}

async fn list_videos(State(fixture): State<Arc<Fixture>>) -> Result<Json<Vec<Video>>, StatusCode> {
    match fixture.feed_status {
        Some(status) => Err(status),
        None => Ok(Json(fixture.videos.clone())),
    }
}

async fn get_video(
    State(fixture): State<Arc<Fixture>>,
    Path(video_id): Path<String>,
) -> Result<Json<Video>, StatusCode> {
    fixture
        .videos
        .iter()
        .find(|v| v.video_id == video_id)
        .cloned()
        .map(Json)
        .ok_or(StatusCode::NOT_FOUND)
}

async fn list_concepts(
    State(fixture): State<Arc<Fixture>>,
    Path(video_id): Path<String>,
) -> Response {
    match video_id.as_str() {
        BROKEN_CONCEPTS => StatusCode::INTERNAL_SERVER_ERROR.into_response(),
        GARBLED_CONCEPTS => (StatusCode::OK, "[{\"_id\": \"c1\", ").into_response(),
        _ => Json(fixture.concepts.get(&video_id).cloned().unwrap_or_default()).into_response(),
    }
}
