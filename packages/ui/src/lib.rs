//! This crate contains all shared UI for the workspace.

mod client;
pub use client::{use_api, ApiProvider};

mod video_feed;
pub use video_feed::{player_href, HomeFeed, VideoStrip, VideoThumbnail};

mod videos;
pub use videos::VideoPlayerPage;

mod player;
pub use player::YoutubePlayer;

mod theme;
pub use theme::{CompanionTheme, Spinner};

mod i18n;
pub use i18n::{set_lang, t, use_lang, I18nProvider, Lang, LangToggle};
