use api::types::Concept;
use api::{LoadState, Playback, VideoDetail};
use dioxus::prelude::*;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

/// Player screen. Reloads whenever `video_id` changes; a missing id fails
/// straight away without a request.
#[component]
pub fn VideoPlayerPage(video_id: Option<String>) -> Element {
    let lang = crate::use_lang()();
    let client = crate::use_api();

    let detail = use_resource(use_reactive!(|(video_id,)| {
        let client = client.clone();
        async move {
            let result = api::load_detail(&client, video_id.as_deref()).await;
            LoadState::Loading.settle(result, |err| {
                tracing::warn!("player: load failed video_id={video_id:?}: {err}");
                if err.is_missing_input() {
                    "player.missing_id".to_string()
                } else {
                    "player.error".to_string()
                }
            })
        }
    }));

    rsx! {
        document::Link { rel: "stylesheet", href: PLAYER_CSS }

        div { class: "screen",
            match detail().unwrap_or(LoadState::Loading) {
                LoadState::Idle | LoadState::Loading => rsx! { crate::Spinner {} },
                LoadState::Failed(key) => rsx! {
                    div { class: "center", p { class: "error_text", {crate::t(lang, &key)} } }
                },
                LoadState::Loaded(detail) => {
                    // Remount per video so playback state starts fresh.
                    let key = detail.video.video_id.clone();
                    rsx! { VideoDetailView { key: "{key}", detail } }
                }
            }
        }
    }
}

#[component]
fn VideoDetailView(detail: VideoDetail) -> Element {
    let lang = crate::use_lang()();
    let mut playback = use_signal(Playback::default);
    let playing = playback().playing;

    let concepts: Vec<(String, String, String)> = Concept::list_keys(&detail.concepts)
        .into_iter()
        .zip(detail.concepts.iter())
        .map(|(key, c)| (key, c.concept.clone(), c.reference.clone()))
        .collect();

    rsx! {
        crate::YoutubePlayer {
            video_id: detail.video.video_id.clone(),
            playing,
            on_state_change: move |state| playback.with_mut(|p| p.observe(state)),
        }

        div { class: "details",
            h1 { class: "title_text", "{detail.video.title}" }
            p { class: "channel_text", "{detail.video.channel}" }
            button {
                class: "btn play_toggle",
                onclick: move |_| playback.with_mut(|p| p.toggle()),
                if playing {
                    {crate::t(lang, "player.pause")}
                } else {
                    {crate::t(lang, "player.play")}
                }
            }

            h2 { class: "section_title", {crate::t(lang, "player.concepts")} }
            if concepts.is_empty() {
                p { class: "no_concepts", {crate::t(lang, "player.no_concepts")} }
            }
            for (key, text, reference) in concepts {
                div { key: "{key}", class: "concept_card",
                    p { class: "concept_text", "{text}" }
                    p { class: "concept_reference", "{reference}" }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use api::types::Video;
    use dioxus::dioxus_core::{NoOpMutations, ScopeId};

    fn repeated_concept(text: &str) -> Concept {
        Concept {
            id: "same".into(),
            concept: text.into(),
            reference: "NCERT Class 9".into(),
        }
    }

    #[test]
    fn rerender_with_repeated_concept_ids() {
        let detail = VideoDetail {
            video: Video {
                id: "1".into(),
                video_id: "v1".into(),
                title: "Cells".into(),
                channel: "Bio".into(),
                ..Video::default()
            },
            concepts: vec![repeated_concept("Membrane"), repeated_concept("Nucleus")],
        };

        let mut dom = VirtualDom::new_with_props(VideoDetailView, VideoDetailViewProps { detail });
        dom.rebuild_in_place();

        // A play/pause tap or language switch re-renders the keyed list.
        dom.mark_dirty(ScopeId::APP);
        dom.render_immediate(&mut NoOpMutations);
    }
}
