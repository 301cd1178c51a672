use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::types::{Concept, Video};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// HTTP client for the companion backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.get_json(&self.url("/api/videos")).await
    }

    pub async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        let path = format!("/api/videos/{}", urlencoding::encode(video_id));
        self.get_json(&self.url(&path)).await
    }

    pub async fn list_concepts(&self, video_id: &str) -> Result<Vec<Concept>, ApiError> {
        let path = format!("/api/concepts/{}", urlencoding::encode(video_id));
        self.get_json(&self.url(&path)).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        debug!("api.get: url={}", url);
        let response = self.http.get(url).send().await.map_err(|source| {
            warn!("api.get: transport error url={} err={}", url, source);
            ApiError::Transport {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("api.get: url={} status={}", url, status.as_u16());
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().await.map_err(|source| {
            warn!("api.get: decode error url={} err={}", url, source);
            ApiError::Decode {
                url: url.to_string(),
                source,
            }
        })
    }
}
