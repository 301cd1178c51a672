use dioxus::prelude::*;

use views::{Home, VideoPlayer};

mod views;

// `videoId` mirrors the backend's query parameter name.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
#[allow(non_snake_case)]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/videoPlayer?:videoId")]
    VideoPlayer { videoId: String },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    install_panic_hook();
    dioxus::launch(App);
}

fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        tracing::error!("panic: {info}");
    }));
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

/// A web-specific header around the shared screens, using the web `Route` enum.
#[component]
fn WebNavbar() -> Element {
    let lang = ui::use_lang()();

    rsx! {
        div { class: "companion_nav",
            div { class: "companion_nav_inner",
                Link { class: "brand", to: Route::Home {},
                    span { class: "brand_name", {ui::t(lang, "app.name")} }
                }
                ui::LangToggle {}
            }
        }
        div { class: "route_view", Outlet::<Route> {} }
    }
}
