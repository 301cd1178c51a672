use crate::error::ApiError;
use crate::source::VideoSource;
use crate::types::{Concept, Video};
use tracing::info;

/// Data behind the player screen.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoDetail {
    pub video: Video,
    pub concepts: Vec<Concept>,
}

impl VideoDetail {
    pub fn has_concepts(&self) -> bool {
        !self.concepts.is_empty()
    }
}

/// Fetch a video and its concepts concurrently.
///
/// A missing or blank id fails without touching the source. If either
/// request fails the whole load fails; there is no partial result.
pub async fn load_detail<S>(source: &S, video_id: Option<&str>) -> Result<VideoDetail, ApiError>
where
    S: VideoSource + ?Sized,
{
    let video_id = match video_id.map(str::trim) {
        Some(id) if !id.is_empty() => id,
        _ => return Err(ApiError::MissingVideoId),
    };

    let (video, concepts) = futures::try_join!(
        source.get_video(video_id),
        source.list_concepts(video_id)
    )?;

    info!(
        "detail.load: video_id={} concepts={}",
        video_id,
        concepts.len()
    );
    Ok(VideoDetail { video, concepts })
}
