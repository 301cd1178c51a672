use dioxus::prelude::*;

use views::{Home, VideoPlayer};

mod views;

// `videoId` mirrors the backend's query parameter name.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/videoPlayer?:videoId")]
    VideoPlayer { videoId: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_tracing();
    api::config::load_dotenv();
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
    tracing::debug!("desktop: tracing initialised");
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

/// A desktop-specific header around the shared screens, using the desktop
/// `Route` enum. The webview has no back gesture, so the header carries one.
#[component]
fn DesktopNavbar() -> Element {
    let lang = ui::use_lang()();
    let route = use_route::<Route>();
    let nav = navigator();

    rsx! {
        div { class: "companion_nav",
            div { class: "companion_nav_inner",
                if !matches!(route, Route::Home {}) {
                    button { class: "back_button", onclick: move |_| nav.go_back(),
                        "‹ "
                        {ui::t(lang, "nav.back")}
                    }
                }
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                ui::LangToggle {}
            }
        }
        div { class: "route_view", Outlet::<Route> {} }
    }
}
