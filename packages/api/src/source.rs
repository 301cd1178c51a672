use crate::client::ApiClient;
use crate::error::ApiError;
use crate::types::{Concept, Video};
use async_trait::async_trait;

/// Read access to the backend collections.
///
/// Futures are not required to be `Send`: the UI drives them on its own
/// single-threaded executor, and the browser fetch backend is `!Send`.
#[async_trait(?Send)]
pub trait VideoSource {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError>;
    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError>;
    async fn list_concepts(&self, video_id: &str) -> Result<Vec<Concept>, ApiError>;
}

#[async_trait(?Send)]
impl VideoSource for ApiClient {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        ApiClient::list_videos(self).await
    }

    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        ApiClient::get_video(self, video_id).await
    }

    async fn list_concepts(&self, video_id: &str) -> Result<Vec<Concept>, ApiError> {
        ApiClient::list_concepts(self, video_id).await
    }
}
