//! Data layer shared by every platform: backend client, feed derivation,
//! detail loading and the small state machines the screens are built on.

pub mod client;
pub mod config;
pub mod detail;
pub mod error;
pub mod feed;
pub mod load_state;
pub mod player;
pub mod source;
pub mod types;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;


pub use client::ApiClient;
pub use config::ApiConfig;
pub use detail::{load_detail, VideoDetail};
pub use error::ApiError;
pub use feed::{load_feed, ChannelSection, Feed, TOP_VIDEOS};
pub use load_state::{LoadEvent, LoadState};
pub use player::{embed_url, PlayerState, Playback};
pub use source::VideoSource;
