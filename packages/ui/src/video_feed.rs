use api::types::Video;
use api::{Feed, LoadState};
use dioxus::prelude::*;

const VIDEO_FEED_CSS: Asset = asset!("/assets/styling/video_feed.css");

/// Route of the player screen for a YouTube id.
pub fn player_href(video_id: &str) -> String {
    format!("/videoPlayer?videoId={}", urlencoding::encode(video_id))
}

/// Card linking to the player: thumbnail plus a two-line title.
#[component]
pub fn VideoThumbnail(video: Video) -> Element {
    let thumbnail = video.thumbnail_url();
    let href = player_href(&video.video_id);

    rsx! {
        Link { class: "video_card", to: href,
            img { class: "thumbnail", src: "{thumbnail}", alt: "{video.title}" }
            p { class: "video_title", "{video.title}" }
        }
    }
}

/// Titled horizontal strip of thumbnails.
#[component]
pub fn VideoStrip(title: String, videos: Vec<Video>) -> Element {
    let items = strip_items(&videos);

    rsx! {
        section { class: "section",
            h2 { class: "section_title", "{title}" }
            div { class: "strip",
                for (key, video) in items {
                    VideoThumbnail { key: "{key}", video }
                }
            }
        }
    }
}

/// Thumbnails paired with their render keys, unique within the strip.
fn strip_items(videos: &[Video]) -> Vec<(String, Video)> {
    Video::list_keys(videos)
        .into_iter()
        .zip(videos.iter().cloned())
        .collect()
}

#[component]
fn FeedSections(feed: Feed) -> Element {
    let lang = crate::use_lang()();

    if feed.is_empty() {
        return rsx! {
            div { class: "center", p { class: "hint", {crate::t(lang, "feed.empty")} } }
        };
    }

    rsx! {
        VideoStrip { title: crate::t(lang, "feed.top"), videos: feed.top.clone() }
        for section in feed.sections() {
            VideoStrip {
                key: "{section.channel}",
                title: section.channel.clone(),
                videos: section.videos,
            }
        }
    }
}

/// Home screen: one fetch on mount, then the random top strip and one strip
/// per channel. A failed fetch stays failed until the screen is remounted.
#[component]
pub fn HomeFeed() -> Element {
    let lang = crate::use_lang()();
    let client = crate::use_api();

    let feed = use_resource(move || {
        let client = client.clone();
        async move {
            let result = api::load_feed(&client, &mut rand::thread_rng()).await;
            LoadState::Loading.settle(result, |err| {
                tracing::warn!("feed: load failed: {err}");
                "feed.error".to_string()
            })
        }
    });

    rsx! {
        document::Link { rel: "stylesheet", href: VIDEO_FEED_CSS }

        div { class: "screen",
            match feed().unwrap_or(LoadState::Loading) {
                LoadState::Idle | LoadState::Loading => rsx! { crate::Spinner {} },
                LoadState::Failed(key) => rsx! {
                    div { class: "center", p { class: "error_text", {crate::t(lang, &key)} } }
                },
                LoadState::Loaded(feed) => rsx! { FeedSections { feed } },
            }
        }
    }
}
