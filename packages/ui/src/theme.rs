use dioxus::prelude::*;

const THEME_CSS: Asset = asset!("/assets/styling/theme.css");

#[component]
pub fn CompanionTheme() -> Element {
    rsx! { document::Link { rel: "stylesheet", href: THEME_CSS } }
}

/// Centered activity indicator shown while a screen loads.
#[component]
pub fn Spinner() -> Element {
    let lang = crate::use_lang()();
    rsx! {
        div { class: "center",
            div {
                class: "spinner",
                role: "progressbar",
                "aria-label": crate::t(lang, "common.loading"),
            }
        }
    }
}
