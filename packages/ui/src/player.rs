use api::PlayerState;
use dioxus::prelude::*;

// Loads the IFrame API once, binds a YT.Player to the frame and pushes every
// state change back through the eval channel.
const ATTACH_JS: &str = r#"
(function(){
  const frameId = "__FRAME_ID__";
  const attach = () => {
    window.__companionPlayers = window.__companionPlayers || {};
    window.__companionPlayers[frameId] = new YT.Player(frameId, {
      events: { onStateChange: (e) => dioxus.send(e.data) }
    });
  };
  if (window.YT && window.YT.Player) { attach(); return; }
  const queue = window.__companionPlayerQueue = window.__companionPlayerQueue || [];
  queue.push(attach);
  if (!document.getElementById("yt_iframe_api")) {
    const tag = document.createElement("script");
    tag.id = "yt_iframe_api";
    tag.src = "https://www.youtube.com/iframe_api";
    document.head.appendChild(tag);
    window.onYouTubeIframeAPIReady = () => {
      (window.__companionPlayerQueue || []).splice(0).forEach((f) => f());
    };
  }
})();
"#;

const CONTROL_JS: &str = r#"
(function(){
  const player = (window.__companionPlayers || {})["__FRAME_ID__"];
  if (player && typeof player.__ACTION__ === "function") { player.__ACTION__(); }
  return "";
})()
"#;

/// Embedded YouTube player.
///
/// `playing` is pushed to the player whenever it changes; state changes
/// reported by the player are forwarded to `on_state_change`.
#[component]
pub fn YoutubePlayer(
    video_id: String,
    playing: bool,
    #[props(default = 220)] height: u32,
    on_state_change: EventHandler<PlayerState>,
) -> Element {
    let frame_id = frame_id(&video_id);
    let src = api::embed_url(&video_id);

    let listener_frame = frame_id.clone();
    use_effect(move || {
        let script = ATTACH_JS.replace("__FRAME_ID__", &listener_frame);
        spawn(async move {
            let mut eval = document::eval(&script);
            while let Ok(code) = eval.recv::<i32>().await {
                let state = PlayerState::from_code(code);
                tracing::debug!("player: state={:?}", state);
                on_state_change.call(state);
            }
        });
    });

    let control_frame = frame_id.clone();
    use_effect(use_reactive!(|(playing,)| {
        let action = if playing { "playVideo" } else { "pauseVideo" };
        let script = CONTROL_JS
            .replace("__FRAME_ID__", &control_frame)
            .replace("__ACTION__", action);
        spawn(async move {
            let _ = document::eval(&script).await;
        });
    }));

    rsx! {
        div { class: "player_container",
            iframe {
                id: "{frame_id}",
                class: "player_frame",
                src: "{src}",
                width: "100%",
                height: "{height}",
                allow: "autoplay; encrypted-media; picture-in-picture",
                "allowfullscreen": "true",
            }
        }
    }
}

/// DOM id for a video's frame; only characters safe inside a JS string.
fn frame_id(video_id: &str) -> String {
    let safe: String = video_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
        .collect();
    format!("yt_player_{safe}")
}
