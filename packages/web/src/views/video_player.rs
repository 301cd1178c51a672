use dioxus::prelude::*;

/// `videoId` arrives from the query string; an absent or empty value
/// reaches the page as `None`.
#[allow(non_snake_case)]
#[component]
pub fn VideoPlayer(videoId: String) -> Element {
    let video_id = Some(videoId).filter(|id| !id.trim().is_empty());
    rsx! { ui::VideoPlayerPage { video_id } }
}
