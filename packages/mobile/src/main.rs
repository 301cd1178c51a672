use dioxus::prelude::*;

use views::{Home, VideoPlayer};

mod views;

// `videoId` mirrors the backend's query parameter name.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
enum Route {
    #[layout(MobileStack)]
    #[route("/")]
    Home {},
    #[route("/videoPlayer?:videoId")]
    VideoPlayer { videoId: String },
}

impl Route {
    fn title_key(&self) -> &'static str {
        match self {
            Route::Home {} => "app.name",
            Route::VideoPlayer { .. } => "nav.player",
        }
    }
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    init_tracing();
    api::config::load_dotenv();
    log_runtime_config();
    dioxus::launch(App);
}

fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
}

fn log_runtime_config() {
    let config = api::ApiConfig::from_env();
    tracing::info!(
        "startup: API_BASE_URL={} source={:?}",
        config.base_url,
        config.source()
    );

    if config.base_url.contains("127.0.0.1") || config.base_url.contains("localhost") {
        tracing::warn!(
            "startup: API_BASE_URL points to localhost; a device cannot reach it (use 10.0.2.2 on the Android emulator)"
        );
    }
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        ui::CompanionTheme {}
        ui::I18nProvider {
            ui::ApiProvider {
                Router::<Route> {}
            }
        }
    }
}

/// Stack navigation shell: dark header with the screen title and a back
/// button on every screen but home.
#[component]
fn MobileStack() -> Element {
    let lang = ui::use_lang()();
    let route = use_route::<Route>();
    let nav = navigator();
    let is_home = matches!(route, Route::Home {});

    rsx! {
        header { class: "stack_header",
            if !is_home {
                button {
                    class: "back_button",
                    onclick: move |_| nav.go_back(),
                    "‹ "
                    {ui::t(lang, "nav.back")}
                }
            }
            h1 { class: "stack_title", {ui::t(lang, route.title_key())} }
            ui::LangToggle {}
        }
        main { class: "stack_body", Outlet::<Route> {} }
    }
}
