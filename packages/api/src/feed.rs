use crate::error::ApiError;
use crate::source::VideoSource;
use crate::types::Video;
use rand::seq::SliceRandom;
use rand::Rng;
use tracing::info;

/// Size of the "Top Videos" strip.
pub const TOP_VIDEOS: usize = 5;

/// Everything the home screen renders, derived from one fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Feed {
    pub videos: Vec<Video>,
    pub top: Vec<Video>,
    pub channels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelSection {
    pub channel: String,
    pub videos: Vec<Video>,
}

impl Feed {
    pub fn from_videos<R: Rng + ?Sized>(videos: Vec<Video>, rng: &mut R) -> Self {
        let top = sample_top(&videos, TOP_VIDEOS, rng);
        let channels = distinct_channels(&videos);
        Self {
            videos,
            top,
            channels,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// One section per channel, in first-appearance order. Channels with no
    /// matching videos are skipped.
    pub fn sections(&self) -> Vec<ChannelSection> {
        self.channels
            .iter()
            .filter_map(|channel| {
                let videos = channel_videos(&self.videos, channel);
                if videos.is_empty() {
                    return None;
                }
                Some(ChannelSection {
                    channel: channel.clone(),
                    videos,
                })
            })
            .collect()
    }
}

/// Uniform shuffle of the whole collection, then the first `n`.
pub fn sample_top<R: Rng + ?Sized>(videos: &[Video], n: usize, rng: &mut R) -> Vec<Video> {
    let mut shuffled = videos.to_vec();
    shuffled.shuffle(rng);
    shuffled.truncate(n);
    shuffled
}

/// Non-empty channel names, deduplicated, in order of first appearance.
pub fn distinct_channels(videos: &[Video]) -> Vec<String> {
    let mut channels: Vec<String> = Vec::new();
    for video in videos {
        if video.channel.is_empty() || channels.contains(&video.channel) {
            continue;
        }
        channels.push(video.channel.clone());
    }
    channels
}

pub fn channel_videos(videos: &[Video], channel: &str) -> Vec<Video> {
    videos
        .iter()
        .filter(|v| v.channel == channel)
        .cloned()
        .collect()
}

/// Fetch every video once and derive the feed.
pub async fn load_feed<S, R>(source: &S, rng: &mut R) -> Result<Feed, ApiError>
where
    S: VideoSource + ?Sized,
    R: Rng + ?Sized,
{
    let videos = source.list_videos().await?;
    let feed = Feed::from_videos(videos, rng);
    info!(
        "feed.load: videos={} channels={}",
        feed.videos.len(),
        feed.channels.len()
    );
    Ok(feed)
}
