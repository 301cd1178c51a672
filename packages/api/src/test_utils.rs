//! In-memory [`VideoSource`] for tests.

use crate::error::ApiError;
use crate::source::VideoSource;
use crate::types::{Concept, Video};
use async_trait::async_trait;
use std::cell::Cell;

/// Serves fixed collections and can be told to fail individual endpoints
/// with an HTTP status. Counts every call so tests can assert that no
/// request was issued.
#[derive(Debug, Default)]
pub struct FakeSource {
    videos: Vec<Video>,
    concepts: Vec<Concept>,
    videos_status: Option<u16>,
    video_status: Option<u16>,
    concepts_status: Option<u16>,
    calls: Cell<usize>,
}

impl FakeSource {
    pub fn new(videos: Vec<Video>) -> Self {
        Self {
            videos,
            ..Self::default()
        }
    }

    pub fn with_concepts(mut self, concepts: Vec<Concept>) -> Self {
        self.concepts = concepts;
        self
    }

    pub fn failing_videos(mut self, status: u16) -> Self {
        self.videos_status = Some(status);
        self
    }

    pub fn failing_video(mut self, status: u16) -> Self {
        self.video_status = Some(status);
        self
    }

    pub fn failing_concepts(mut self, status: u16) -> Self {
        self.concepts_status = Some(status);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self, path: String, status: Option<u16>) -> Result<(), ApiError> {
        self.calls.set(self.calls.get() + 1);
        match status {
            Some(status) => Err(ApiError::Status { url: path, status }),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl VideoSource for FakeSource {
    async fn list_videos(&self) -> Result<Vec<Video>, ApiError> {
        self.record("/api/videos".into(), self.videos_status)?;
        Ok(self.videos.clone())
    }

    async fn get_video(&self, video_id: &str) -> Result<Video, ApiError> {
        let path = format!("/api/videos/{video_id}");
        self.record(path.clone(), self.video_status)?;
        self.videos
            .iter()
            .find(|v| v.video_id == video_id)
            .cloned()
            .ok_or(ApiError::Status {
                url: path,
                status: 404,
            })
    }

    async fn list_concepts(&self, video_id: &str) -> Result<Vec<Concept>, ApiError> {
        self.record(format!("/api/concepts/{video_id}"), self.concepts_status)?;
        Ok(self.concepts.clone())
    }
}

/// Shorthand for a fixture video.
pub fn video(id: &str, video_id: &str, title: &str, channel: &str) -> Video {
    Video {
        id: id.to_string(),
        video_id: video_id.to_string(),
        title: title.to_string(),
        thumbnail: format!("https://img.example/{video_id}.jpg"),
        channel: channel.to_string(),
    }
}

pub fn concept(id: &str, text: &str, reference: &str) -> Concept {
    Concept {
        id: id.to_string(),
        concept: text.to_string(),
        reference: reference.to_string(),
    }
}
